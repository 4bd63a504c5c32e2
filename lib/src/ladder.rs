use crate::adjacency::neighbors;
use crate::data::normalize_word;
use crate::data::WordSet;
use log::debug;
use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;

/// Remembers the paths found between ordered pairs of words.
///
/// Entries are never invalidated. A path cached before the dictionary grew may no longer be
/// the shortest one.
#[derive(Default, Debug)]
pub struct PathCache {
    paths: Mutex<HashMap<(Arc<str>, Arc<str>), Vec<Arc<str>>>>,
}

impl PathCache {
    /// Constructs an empty cache.
    pub fn new() -> Self {
        PathCache::default()
    }

    /// Returns a copy of the cached path from `start` to `end`, if any.
    ///
    /// The key is built from the shared words, so a lookup only bumps reference counts.
    pub fn get(&self, start: &Arc<str>, end: &Arc<str>) -> Option<Vec<Arc<str>>> {
        let key = (Arc::clone(start), Arc::clone(end));
        self.paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
    }

    /// Stores the given path, keyed by its first and last words.
    pub fn insert(&self, path: Vec<Arc<str>>) {
        let (Some(first), Some(last)) = (path.first(), path.last()) else {
            return;
        };
        let key = (Arc::clone(first), Arc::clone(last));
        self.paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, path);
    }

    /// Returns the number of cached paths.
    pub fn len(&self) -> usize {
        self.paths.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Returns `true` iff no paths are cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Finds a shortest ladder from `start` to `end`, using only words from `candidates`.
///
/// Both words are normalized first. Returns `None` if either word is missing from the
/// candidates, or if no ladder exists within them. Found ladders are stored in the cache, and a
/// cached ladder is reused as long as all of its words are still candidates.
pub fn find_word_ladder(
    start: &str,
    end: &str,
    candidates: &WordSet,
    cache: &PathCache,
) -> Option<Vec<Arc<str>>> {
    let start_key = normalize_word(start);
    let end_key = normalize_word(end);
    let (Some(start), Some(end)) = (
        candidates.get(start_key.as_str()),
        candidates.get(end_key.as_str()),
    ) else {
        debug!("Either {start_key} or {end_key} is not in the word list");
        return None;
    };
    if start == end {
        return Some(vec![Arc::clone(start)]);
    }
    if let Some(path) = cache.get(start, end) {
        if path.iter().all(|word| candidates.contains(word)) {
            debug!("Using cached path: {}", path.join(" -> "));
            return Some(path);
        }
    }

    let timer = Instant::now();
    let mut iterations = 0;
    let mut predecessors: HashMap<Arc<str>, Arc<str>> = HashMap::new();
    let mut visited: HashSet<Arc<str>> = HashSet::from([Arc::clone(start)]);
    let mut queue: VecDeque<Arc<str>> = VecDeque::from([Arc::clone(start)]);

    while let Some(word) = queue.pop_front() {
        iterations += 1;
        if word == *end {
            let path = reconstruct_path(&predecessors, word);
            debug!(
                "Found path in {iterations} iterations ({:?}): {}",
                timer.elapsed(),
                path.join(" -> ")
            );
            cache.insert(path.clone());
            return Some(path);
        }
        for neighbor in neighbors(&word, candidates) {
            if visited.insert(Arc::clone(&neighbor)) {
                predecessors.insert(Arc::clone(&neighbor), Arc::clone(&word));
                queue.push_back(neighbor);
            }
        }
    }

    debug!(
        "No path from {start} to {end} after {iterations} iterations ({:?})",
        timer.elapsed()
    );
    None
}

/// Walks the predecessor links back from `end`, returning the path in forward order.
pub(crate) fn reconstruct_path(
    predecessors: &HashMap<Arc<str>, Arc<str>>,
    end: Arc<str>,
) -> Vec<Arc<str>> {
    let mut path = vec![end];
    while let Some(previous) = path.last().and_then(|word| predecessors.get(word)) {
        path.push(Arc::clone(previous));
    }
    path.reverse();
    path
}
