use crate::adjacency::letter_differences;
use crate::adjacency::neighbors;
use crate::data::normalize_word;
use crate::data::WordSet;
use crate::ladder::reconstruct_path;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;
use std::collections::HashSet;
use std::collections::VecDeque;
use std::sync::Arc;

const COMMON_SUFFIXES: [&str; 8] = ["ING", "TION", "MENT", "NESS", "ABLE", "SHIP", "HOOD", "LESS"];

/// The default number of distant words collected before the outward search stops.
pub const DEFAULT_MAX_TARGET_CANDIDATES: usize = 15;
/// The default chance that a distant, uncommon word is kept as a candidate.
pub const DEFAULT_ADMISSION_PROBABILITY: f64 = 0.3;
/// The default number of most-different words to pick from when the outward search fails.
pub const DEFAULT_LETTER_DIFFERENCE_POOL: usize = 5;

/// A cheap guess at whether a word is common, based on its suffix.
pub fn is_common_word(word: &str) -> bool {
    COMMON_SUFFIXES.iter().any(|suffix| word.ends_with(suffix))
}

/// How a target word was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetStrategy {
    /// The target was reached by searching outward from the start word. Contains the shortest
    /// path from the start word to the target.
    Graph { path: Vec<Arc<str>> },
    /// The target differs from the start word in the given number of positions. It may not be
    /// reachable at all.
    LetterDifference { differences: usize },
    /// The target is just some other word.
    AnyOther,
}

/// A selected target word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetChoice {
    pub word: Arc<str>,
    pub strategy: TargetStrategy,
}

/// Chooses target words that are far away from a start word.
///
/// The selector prefers words at least `min_steps` moves away in the ladder graph. When there
/// are none, it falls back to the words with the most differing letters, and finally to any
/// other word.
#[derive(Debug)]
pub struct TargetSelector<'a> {
    words: &'a WordSet,
    max_candidates: usize,
    admission_probability: f64,
    letter_difference_pool: usize,
}

impl<'a> TargetSelector<'a> {
    /// Constructs a selector that picks targets from the given words.
    pub fn new(words: &'a WordSet) -> Self {
        TargetSelector {
            words,
            max_candidates: DEFAULT_MAX_TARGET_CANDIDATES,
            admission_probability: DEFAULT_ADMISSION_PROBABILITY,
            letter_difference_pool: DEFAULT_LETTER_DIFFERENCE_POOL,
        }
    }

    /// Sets how many distant words to collect before the outward search stops.
    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates.max(1);
        self
    }

    /// Sets the chance that a distant word without a common suffix is kept as a candidate.
    pub fn with_admission_probability(mut self, probability: f64) -> Self {
        self.admission_probability = probability;
        self
    }

    /// Sets how many of the most-different words the letter-difference fallback picks from.
    pub fn with_letter_difference_pool(mut self, pool: usize) -> Self {
        self.letter_difference_pool = pool.max(1);
        self
    }

    /// Selects a target word for the given start word.
    ///
    /// Returns `None` only if there is no other word of the same length.
    pub fn select_target<R: Rng + ?Sized>(
        &self,
        start: &str,
        min_steps: usize,
        rng: &mut R,
    ) -> Option<TargetChoice> {
        let start = normalize_word(start);
        self.select_by_distance(&start, min_steps, rng)
            .or_else(|| self.select_by_letter_differences(&start, min_steps, rng))
            .or_else(|| self.select_any_other(&start, rng))
    }

    fn select_by_distance<R: Rng + ?Sized>(
        &self,
        start: &str,
        min_steps: usize,
        rng: &mut R,
    ) -> Option<TargetChoice> {
        let min_steps = min_steps.max(1);
        let start: Arc<str> = Arc::from(start);
        let mut predecessors: HashMap<Arc<str>, Arc<str>> = HashMap::new();
        let mut visited: HashSet<Arc<str>> = HashSet::from([Arc::clone(&start)]);
        let mut queue: VecDeque<(Arc<str>, usize)> = VecDeque::from([(Arc::clone(&start), 0)]);
        let mut candidates: Vec<Arc<str>> = Vec::new();
        let mut farthest = (Arc::clone(&start), 0);

        while candidates.len() < self.max_candidates {
            let Some((word, depth)) = queue.pop_front() else {
                break;
            };
            if depth > farthest.1 {
                farthest = (Arc::clone(&word), depth);
            }
            if depth >= min_steps
                && (is_common_word(&word) || rng.gen::<f64>() < self.admission_probability)
            {
                candidates.push(Arc::clone(&word));
            }
            for neighbor in neighbors(&word, self.words) {
                if visited.insert(Arc::clone(&neighbor)) {
                    predecessors.insert(Arc::clone(&neighbor), Arc::clone(&word));
                    queue.push_back((neighbor, depth + 1));
                }
            }
        }

        let target = match candidates.choose(rng) {
            Some(target) => {
                debug!(
                    "Found {} targets for {start}, selected {target}",
                    candidates.len()
                );
                Arc::clone(target)
            }
            // Every distant word was turned away by the admission filter.
            None if farthest.1 >= min_steps => {
                debug!("Using farthest word {} ({} steps)", farthest.0, farthest.1);
                farthest.0
            }
            None => {
                debug!(
                    "No target {min_steps} steps from {start} (max distance: {})",
                    farthest.1
                );
                return None;
            }
        };
        let path = reconstruct_path(&predecessors, Arc::clone(&target));
        Some(TargetChoice {
            word: target,
            strategy: TargetStrategy::Graph { path },
        })
    }

    fn select_by_letter_differences<R: Rng + ?Sized>(
        &self,
        start: &str,
        min_steps: usize,
        rng: &mut R,
    ) -> Option<TargetChoice> {
        let mut scored: Vec<(&Arc<str>, usize)> = self
            .words
            .iter()
            .filter(|word| word.as_ref() != start)
            .filter_map(|word| letter_differences(word, start).map(|count| (word, count)))
            .filter(|(_, count)| *count >= min_steps)
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1));
        let num_scored = scored.len();
        scored.truncate(self.letter_difference_pool);

        let (word, differences) = scored.choose(rng)?;
        debug!("Found {num_scored} words at least {min_steps} letters from {start}, selected {word}");
        Some(TargetChoice {
            word: Arc::clone(*word),
            strategy: TargetStrategy::LetterDifference {
                differences: *differences,
            },
        })
    }

    fn select_any_other<R: Rng + ?Sized>(&self, start: &str, rng: &mut R) -> Option<TargetChoice> {
        let others: Vec<&Arc<str>> = self
            .words
            .iter()
            .filter(|word| word.len() == start.len() && word.as_ref() != start)
            .collect();
        let word = others.choose(rng)?;
        debug!("No distant words for {start}, selected {word}");
        Some(TargetChoice {
            word: Arc::clone(*word),
            strategy: TargetStrategy::AnyOther,
        })
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn word_set(words: &[&str]) -> WordSet {
        words.iter().map(|word| Arc::from(*word)).collect()
    }

    fn as_strs(path: &[Arc<str>]) -> Vec<&str> {
        path.iter().map(|word| word.as_ref()).collect()
    }

    #[test]
    fn common_words_by_suffix() {
        assert!(is_common_word("SINGING"));
        assert!(is_common_word("MOTION"));
        assert!(is_common_word("HOOD"));
        assert!(!is_common_word("STONE"));
    }

    #[test]
    fn distant_word_is_selected_with_its_path() {
        let words = word_set(&["CAT", "COT", "DOT", "DOG"]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);

            let choice = TargetSelector::new(&words).select_target("CAT", 3, &mut rng);

            let Some(TargetChoice {
                word,
                strategy: TargetStrategy::Graph { path },
            }) = choice
            else {
                panic!("expected a graph target, got {choice:?}");
            };
            assert_eq!(word.as_ref(), "DOG");
            assert_eq!(as_strs(&path), vec!["CAT", "COT", "DOT", "DOG"]);
        }
    }

    #[test]
    fn candidate_count_is_bounded() {
        let words = word_set(&["CAT", "COT", "DOT", "DOG", "DIG"]);
        let mut rng = StdRng::seed_from_u64(1);

        let choice = TargetSelector::new(&words)
            .with_admission_probability(1.0)
            .with_max_candidates(1)
            .select_target("CAT", 3, &mut rng);

        assert_eq!(choice.map(|choice| choice.word), Some(Arc::from("DOG")));
    }

    #[test]
    fn any_admitted_word_can_be_selected() {
        let words = word_set(&["CAT", "COT", "DOT", "DOG", "DIG"]);
        let mut rng = StdRng::seed_from_u64(3);

        let choice = TargetSelector::new(&words)
            .with_admission_probability(1.0)
            .select_target("CAT", 3, &mut rng)
            .unwrap();

        let TargetStrategy::Graph { path } = &choice.strategy else {
            panic!("expected a graph target, got {choice:?}");
        };
        match choice.word.as_ref() {
            "DOG" => assert_eq!(as_strs(path), vec!["CAT", "COT", "DOT", "DOG"]),
            "DIG" => assert_eq!(as_strs(path), vec!["CAT", "COT", "DOT", "DOG", "DIG"]),
            other => panic!("unexpected target {other}"),
        }
    }

    #[test]
    fn falls_back_to_letter_differences() {
        let words = word_set(&["CAT", "COT", "DOG"]);
        let mut rng = StdRng::seed_from_u64(5);

        let choice = TargetSelector::new(&words).select_target("CAT", 3, &mut rng);

        assert_eq!(
            choice,
            Some(TargetChoice {
                word: Arc::from("DOG"),
                strategy: TargetStrategy::LetterDifference { differences: 3 },
            })
        );
    }

    #[test]
    fn letter_differences_prefer_the_most_different_words() {
        let words = word_set(&["STONE", "SPACE", "STORE", "BRICK", "GLADE"]);
        let mut rng = StdRng::seed_from_u64(11);

        let choice = TargetSelector::new(&words)
            .with_letter_difference_pool(2)
            .select_target("STONE", 3, &mut rng)
            .unwrap();

        // BRICK and GLADE differ in 5 and 4 positions; SPACE only in 3.
        assert!(["BRICK", "GLADE"].contains(&choice.word.as_ref()));
    }

    #[test]
    fn falls_back_to_any_other_word() {
        let words = word_set(&["CAT", "COT"]);
        let mut rng = StdRng::seed_from_u64(5);

        let choice = TargetSelector::new(&words).select_target("cat", 3, &mut rng);

        assert_eq!(
            choice,
            Some(TargetChoice {
                word: Arc::from("COT"),
                strategy: TargetStrategy::AnyOther,
            })
        );
    }

    #[test]
    fn no_target_without_other_words() {
        let words = word_set(&["CAT", "DOGS"]);
        let mut rng = StdRng::seed_from_u64(5);

        assert_eq!(
            TargetSelector::new(&words).select_target("CAT", 3, &mut rng),
            None
        );
    }
}
