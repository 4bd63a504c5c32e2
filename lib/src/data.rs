use crate::results::LadderError;
use log::{debug, error, info};
use rayon::prelude::*;
use std::collections::BTreeSet;
use std::collections::HashMap;
use std::collections::HashSet;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::path::PathBuf;
use std::result::Result;
use std::sync::{Arc, LazyLock, Mutex, PoisonError, RwLock};
use std::thread::{self, JoinHandle};

/// The shortest word length the dictionary accepts.
pub const MIN_WORD_LENGTH: usize = 3;
/// The longest word length the dictionary accepts.
pub const MAX_WORD_LENGTH: usize = 8;

/// A set of normalized words, iterated in sorted order.
pub type WordSet = BTreeSet<Arc<str>>;

const COMMON_WORDS: &str = include_str!("../data/common-words.txt");
const OFFENSIVE_WORDS: &str = include_str!("../data/offensive-words.txt");

static OFFENSIVE: LazyLock<HashSet<String>> = LazyLock::new(|| {
    OFFENSIVE_WORDS
        .lines()
        .map(normalize_word)
        .filter(|word| !word.is_empty())
        .collect()
});

/// Trims the word and converts it to upper case.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_ascii_uppercase()
}

/// Returns `true` iff the word is on the offensive-word denylist, ignoring case.
///
/// ```
/// use rs_word_ladder::is_offensive_word;
///
/// assert!(is_offensive_word("nazi"));
/// assert!(!is_offensive_word("cat"));
/// assert!(!is_offensive_word(""));
/// ```
pub fn is_offensive_word(word: &str) -> bool {
    let normalized = normalize_word(word);
    !normalized.is_empty() && OFFENSIVE.contains(&normalized)
}

/// Normalizes the given raw entry and returns it if it may be stored in a dictionary.
fn admit(raw: &str) -> Option<String> {
    let word = normalize_word(raw);
    if word.len() < MIN_WORD_LENGTH
        || word.len() > MAX_WORD_LENGTH
        || !word.bytes().all(|letter| letter.is_ascii_uppercase())
        || OFFENSIVE.contains(&word)
    {
        return None;
    }
    Some(word)
}

/// The set of playable words, bucketed by length.
///
/// The dictionary can be shared between threads. It only ever grows: words can be merged in at
/// any time (see [`Dictionary::extend_from_reader`]), but never removed. Readers get immutable
/// snapshots of a bucket, so a concurrent extension is either fully visible or not at all.
#[derive(Debug)]
pub struct Dictionary {
    buckets: RwLock<HashMap<usize, Arc<WordSet>>>,
    validity_cache: Mutex<HashMap<String, bool>>,
}

impl Dictionary {
    /// Constructs an empty dictionary.
    pub fn new() -> Self {
        Dictionary {
            buckets: RwLock::new(HashMap::new()),
            validity_cache: Mutex::new(HashMap::new()),
        }
    }

    /// Constructs a dictionary from the built-in list of common words.
    pub fn builtin() -> Self {
        Dictionary::from_iterator(COMMON_WORDS.lines())
    }

    /// Constructs a dictionary using the given words.
    ///
    /// Each word is trimmed and converted to upper case. Words that are not made of 3 to 8
    /// letters, or that are offensive, are skipped.
    ///
    /// ```
    /// use rs_word_ladder::Dictionary;
    ///
    /// let dictionary = Dictionary::from_iterator(["cat", " Cot", "a", "nazi", "c4t"]);
    ///
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.is_valid_word("COT"));
    /// ```
    pub fn from_iterator<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dictionary = Dictionary::new();
        dictionary.extend_from_iter(words);
        dictionary
    }

    /// Constructs a dictionary by reading words from the given reader, one word per line.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, LadderError> {
        let dictionary = Dictionary::new();
        dictionary.extend_from_reader(word_reader)?;
        Ok(dictionary)
    }

    /// Merges the given words into the dictionary, returning how many were new.
    pub fn extend_from_iter<I, S>(&self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let admitted: Vec<String> = words
            .into_iter()
            .filter_map(|word| admit(word.as_ref()))
            .collect();
        self.insert_all(admitted)
    }

    /// Merges the words from the given reader into the dictionary, returning how many were new.
    ///
    /// The reader should provide one word per line. If reading fails, no words are added.
    pub fn extend_from_reader<R: BufRead>(&self, word_reader: R) -> Result<usize, LadderError> {
        let lines = word_reader.lines().collect::<io::Result<Vec<String>>>()?;
        let admitted: Vec<String> = lines.par_iter().filter_map(|line| admit(line)).collect();
        Ok(self.insert_all(admitted))
    }

    /// Merges the words from the given reader on a background thread.
    ///
    /// Callers may keep using the dictionary while this runs; the new words become visible
    /// once they are merged. Read failures are logged, and leave the dictionary unchanged. The
    /// returned handle yields the number of words added.
    pub fn spawn_extend_from_reader<R>(self: &Arc<Self>, word_reader: R) -> JoinHandle<usize>
    where
        R: BufRead + Send + 'static,
    {
        let dictionary = Arc::clone(self);
        thread::spawn(move || match dictionary.extend_from_reader(word_reader) {
            Ok(added) => {
                info!("Added {added} words to the dictionary");
                added
            }
            Err(err) => {
                error!("Failed to extend the dictionary: {err}");
                0
            }
        })
    }

    /// Like [`Dictionary::spawn_extend_from_reader`], but reads the words from a file.
    pub fn spawn_extend_from_path<P>(self: &Arc<Self>, path: P) -> JoinHandle<usize>
    where
        P: Into<PathBuf>,
    {
        let path = path.into();
        let dictionary = Arc::clone(self);
        thread::spawn(move || {
            let added = File::open(&path)
                .map_err(LadderError::from)
                .and_then(|file| dictionary.extend_from_reader(io::BufReader::new(file)));
            match added {
                Ok(added) => {
                    info!("Added {added} words from {}", path.display());
                    added
                }
                Err(err) => {
                    error!("Failed to extend the dictionary from {}: {err}", path.display());
                    0
                }
            }
        })
    }

    /// Returns `true` iff the word is playable: it is in the dictionary and is not offensive.
    ///
    /// Results are cached per normalized word.
    pub fn is_valid_word(&self, word: &str) -> bool {
        let word = normalize_word(word);
        if word.is_empty() {
            return false;
        }
        // Holding the cache lock while reading the buckets keeps the cache consistent with
        // concurrent extensions, which take the locks in the same order.
        let mut cache = self
            .validity_cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(is_valid) = cache.get(&word) {
            return *is_valid;
        }
        let is_valid = if OFFENSIVE.contains(&word) {
            debug!("Offensive word filtered out: {word}");
            false
        } else {
            self.contains(&word)
        };
        cache.insert(word, is_valid);
        is_valid
    }

    /// Returns `true` iff the word is on the offensive-word denylist.
    pub fn is_offensive_word(&self, word: &str) -> bool {
        is_offensive_word(word)
    }

    /// Returns `true` iff the dictionary holds the given word, without consulting the cache.
    pub fn contains(&self, word: &str) -> bool {
        let word = normalize_word(word);
        self.read_buckets()
            .get(&word.len())
            .map_or(false, |bucket| bucket.contains(word.as_str()))
    }

    /// Returns a snapshot of all words with the given length.
    ///
    /// The snapshot is not affected by later extensions.
    pub fn words_of_length(&self, length: usize) -> Arc<WordSet> {
        self.read_buckets()
            .get(&length)
            .map(Arc::clone)
            .unwrap_or_default()
    }

    /// Returns the number of words in the dictionary.
    pub fn len(&self) -> usize {
        self.read_buckets().values().map(|bucket| bucket.len()).sum()
    }

    /// Returns `true` iff the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read_buckets(&self) -> std::sync::RwLockReadGuard<'_, HashMap<usize, Arc<WordSet>>> {
        self.buckets.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn insert_all(&self, words: Vec<String>) -> usize {
        let mut cache = self
            .validity_cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let mut buckets = self.buckets.write().unwrap_or_else(PoisonError::into_inner);
        let mut added = 0;
        for word in words {
            let bucket = buckets.entry(word.len()).or_default();
            if bucket.contains(word.as_str()) {
                continue;
            }
            Arc::make_mut(bucket).insert(Arc::from(word.as_str()));
            cache.remove(&word);
            added += 1;
        }
        added
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Dictionary::new()
    }
}
