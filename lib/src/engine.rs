use crate::adjacency::is_one_letter_different;
use crate::data::{normalize_word, Dictionary, WordSet};
use crate::game::FirstMovePolicy;
use crate::ladder::{self, PathCache};
use crate::puzzle::{Difficulty, GeneratorConfig, Puzzle};
use crate::results::{LadderError, MoveError};
use crate::targets::{TargetSelector, TargetStrategy};
use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;
use std::time::Instant;

/// Generates word-ladder puzzles and validates moves against its dictionary.
///
/// The engine can be shared between threads. It owns its caches, so separate engines never
/// affect each other.
#[derive(Debug)]
pub struct LadderEngine {
    dictionary: Arc<Dictionary>,
    paths: PathCache,
    config: GeneratorConfig,
}

impl LadderEngine {
    /// Constructs an engine that uses the built-in dictionary and the default configuration.
    pub fn new() -> Self {
        LadderEngine::with_dictionary(Arc::new(Dictionary::builtin()))
    }

    /// Constructs an engine that uses the given dictionary and the default configuration.
    ///
    /// The dictionary may be shared, for example to keep extending it in the background.
    pub fn with_dictionary(dictionary: Arc<Dictionary>) -> Self {
        LadderEngine {
            dictionary,
            paths: PathCache::new(),
            config: GeneratorConfig::default(),
        }
    }

    /// Replaces the generator configuration, after checking that it is valid.
    pub fn with_config(mut self, config: GeneratorConfig) -> Result<Self, LadderError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn dictionary(&self) -> &Arc<Dictionary> {
        &self.dictionary
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The paths found so far, keyed by their start and end words.
    pub fn path_cache(&self) -> &PathCache {
        &self.paths
    }

    /// Returns `true` iff the word is in the dictionary and is not offensive.
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.dictionary.is_valid_word(word)
    }

    /// Finds a shortest ladder from `start` to `end` through the given candidate words.
    ///
    /// See [`ladder::find_word_ladder`].
    pub fn find_word_ladder(
        &self,
        start: &str,
        end: &str,
        candidates: &WordSet,
    ) -> Option<Vec<Arc<str>>> {
        ladder::find_word_ladder(start, end, candidates, &self.paths)
    }

    /// Generates a puzzle of the given difficulty, using the thread-local random generator.
    pub fn generate_puzzle(&self, difficulty: Difficulty) -> Puzzle {
        self.generate_puzzle_with_rng(difficulty, &mut rand::thread_rng())
    }

    /// Generates a puzzle of the given difficulty.
    ///
    /// Each attempt picks a word length allowed by the difficulty and tries a few random start
    /// words of that length. A puzzle is accepted once its shortest solution takes at least the
    /// difficulty's minimum number of steps. If every attempt fails, this returns the fixed
    /// fallback puzzle for the difficulty, so generation always succeeds.
    pub fn generate_puzzle_with_rng<R: Rng + ?Sized>(
        &self,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Puzzle {
        let timer = Instant::now();
        let settings = self.config.settings(difficulty);
        for attempt in 1..=settings.max_attempts {
            let length = rng.gen_range(settings.lengths());
            let words = self.dictionary.words_of_length(length);
            if words.is_empty() {
                warn!("No words of length {length} available");
                continue;
            }
            debug!(
                "Attempt {attempt}/{}: length {length}, {} words",
                settings.max_attempts,
                words.len()
            );

            let all_words: Vec<&Arc<str>> = words.iter().collect();
            let starts: Vec<Arc<str>> = all_words
                .choose_multiple(rng, self.config.start_words_per_attempt)
                .map(|word| Arc::clone(*word))
                .collect();
            let selector = TargetSelector::new(&words)
                .with_max_candidates(self.config.max_target_candidates)
                .with_admission_probability(self.config.target_admission_probability)
                .with_letter_difference_pool(self.config.letter_difference_pool);

            for start in starts {
                let Some(target) = selector.select_target(&start, settings.min_steps, rng) else {
                    debug!("No target for {start}");
                    continue;
                };
                if let TargetStrategy::Graph { path } = target.strategy {
                    self.paths.insert(path);
                }
                let Some(path) = self.find_word_ladder(&start, &target.word, &words) else {
                    debug!("No ladder from {start} to {}", target.word);
                    continue;
                };
                if path.len() < settings.min_steps + 1 {
                    debug!(
                        "Ladder from {start} to {} is too short ({} steps)",
                        target.word,
                        path.len() - 1
                    );
                    continue;
                }
                match Puzzle::from_path(path, difficulty, settings.min_length) {
                    Ok(puzzle) => {
                        info!(
                            "Generated {difficulty} puzzle {} -> {} ({} steps) on attempt \
                             {attempt} in {:?}",
                            puzzle.start_word,
                            puzzle.end_word,
                            puzzle.optimal_steps(),
                            timer.elapsed()
                        );
                        return puzzle;
                    }
                    Err(err) => warn!("Discarding ladder from {start}: {err}"),
                }
            }
        }
        warn!(
            "Failed to generate a {difficulty} puzzle after {} attempts, using the fallback",
            settings.max_attempts
        );
        Puzzle::fallback(difficulty, settings.min_length)
    }

    /// Checks whether `word` may be played next, requiring the first word to be the start word.
    ///
    /// `previous_word` is the last accepted word, and `is_first_word` says whether this is the
    /// first word of the attempt. See [`LadderEngine::validate_word_with_policy`] for the rules.
    pub fn validate_word(
        &self,
        word: &str,
        previous_word: &str,
        is_first_word: bool,
        puzzle: &Puzzle,
    ) -> Result<(), MoveError> {
        self.validate_word_with_policy(
            word,
            previous_word,
            is_first_word,
            puzzle,
            FirstMovePolicy::MatchStartWord,
        )
    }

    /// Checks whether `word` may be played next.
    ///
    /// The word must be a valid dictionary word. The first word is checked according to the
    /// given policy. Every later word must be one letter different from `previous_word`, and
    /// must not have been used yet in the puzzle.
    pub fn validate_word_with_policy(
        &self,
        word: &str,
        previous_word: &str,
        is_first_word: bool,
        puzzle: &Puzzle,
        policy: FirstMovePolicy,
    ) -> Result<(), MoveError> {
        let word = normalize_word(word);
        if word.is_empty() {
            return Err(MoveError::Empty);
        }
        if !self.is_valid_word(&word) {
            return Err(MoveError::NotAWord);
        }

        if is_first_word {
            let start_word = puzzle.start_word.as_ref();
            return match policy {
                FirstMovePolicy::MatchStartWord if word != start_word => {
                    Err(MoveError::MustBeStartWord {
                        start_word: start_word.to_string(),
                    })
                }
                FirstMovePolicy::MatchStartWord => Ok(()),
                FirstMovePolicy::ChangeFromStartWord => {
                    if word.len() != start_word.len() {
                        Err(MoveError::WrongLength {
                            expected: puzzle.word_length,
                        })
                    } else if word == start_word {
                        Err(MoveError::SameAsStartWord {
                            start_word: start_word.to_string(),
                        })
                    } else if !is_one_letter_different(&word, start_word) {
                        Err(MoveError::NotOneLetterDifferent)
                    } else {
                        Ok(())
                    }
                }
            };
        }

        if !is_one_letter_different(&word, previous_word) {
            return Err(MoveError::NotOneLetterDifferent);
        }
        if puzzle.used_words.contains(word.as_str()) {
            return Err(MoveError::AlreadyUsed);
        }
        Ok(())
    }
}

impl Default for LadderEngine {
    fn default() -> Self {
        LadderEngine::new()
    }
}
