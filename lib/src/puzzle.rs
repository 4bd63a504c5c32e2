use crate::adjacency::is_one_letter_different;
use crate::data::WordSet;
use crate::data::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::results::LadderError;
use crate::targets::{
    DEFAULT_ADMISSION_PROBABILITY, DEFAULT_LETTER_DIFFERENCE_POOL, DEFAULT_MAX_TARGET_CANDIDATES,
};
use std::collections::HashSet;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

const FALLBACK_EASY: [&str; 4] = ["CAT", "COT", "DOT", "DOG"];
const FALLBACK_MEDIUM: [&str; 5] = ["COLD", "CORD", "CARD", "WARD", "WARM"];
const FALLBACK_HARD: [&str; 6] = ["STONE", "STORE", "SHORE", "SHARE", "SPARE", "SPACE"];

/// How hard a puzzle is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Every difficulty, from easiest to hardest.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// The par for a puzzle whose shortest solution takes `optimal_steps` moves.
    ///
    /// ```
    /// use rs_word_ladder::Difficulty;
    ///
    /// assert_eq!(Difficulty::Easy.par_for(3), 5);
    /// assert_eq!(Difficulty::Medium.par_for(4), 4);
    /// assert_eq!(Difficulty::Hard.par_for(5), 4);
    /// assert_eq!(Difficulty::Hard.par_for(1), 1);
    /// ```
    pub fn par_for(self, optimal_steps: usize) -> usize {
        match self {
            Difficulty::Easy => div_ceil(optimal_steps * 3, 2),
            Difficulty::Medium => optimal_steps,
            Difficulty::Hard => optimal_steps.saturating_sub(1).max(1),
        }
    }

    /// The score multiplier, in halves.
    fn half_multiplier(self) -> i64 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 3,
            Difficulty::Hard => 4,
        }
    }

    fn fallback_path(self) -> &'static [&'static str] {
        match self {
            Difficulty::Easy => &FALLBACK_EASY,
            Difficulty::Medium => &FALLBACK_MEDIUM,
            Difficulty::Hard => &FALLBACK_HARD,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = LadderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(LadderError::InvalidSettings {
                reason: format!("unknown difficulty '{other}', expected easy, medium or hard"),
            }),
        }
    }
}

/// Generation settings for a single difficulty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DifficultySettings {
    /// The shortest word length to generate.
    pub min_length: usize,
    /// The longest word length to generate.
    pub max_length: usize,
    /// The minimum number of moves in the shortest solution.
    pub min_steps: usize,
    /// How many word lengths to try before giving up and using the fallback puzzle.
    pub max_attempts: usize,
}

impl DifficultySettings {
    /// The default settings for the given difficulty.
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let (min_length, max_length, min_steps, max_attempts) = match difficulty {
            Difficulty::Easy => (3, 4, 3, 10),
            Difficulty::Medium => (4, 6, 4, 15),
            Difficulty::Hard => (5, 8, 5, 20),
        };
        DifficultySettings {
            min_length,
            max_length,
            min_steps,
            max_attempts,
        }
    }

    /// The word lengths these settings allow.
    pub fn lengths(&self) -> RangeInclusive<usize> {
        self.min_length..=self.max_length
    }

    /// Checks that the settings can be used for generation.
    pub fn validate(&self) -> Result<(), LadderError> {
        if self.min_length < MIN_WORD_LENGTH || self.max_length > MAX_WORD_LENGTH {
            return Err(invalid(format!(
                "word lengths {}-{} must be within {MIN_WORD_LENGTH}-{MAX_WORD_LENGTH}",
                self.min_length, self.max_length
            )));
        }
        if self.min_length > self.max_length {
            return Err(invalid(format!(
                "min_length ({}) is greater than max_length ({})",
                self.min_length, self.max_length
            )));
        }
        if self.min_steps == 0 {
            return Err(invalid("min_steps must be at least 1".to_string()));
        }
        if self.max_attempts == 0 {
            return Err(invalid("max_attempts must be at least 1".to_string()));
        }
        Ok(())
    }
}

/// Configures puzzle generation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GeneratorConfig {
    pub easy: DifficultySettings,
    pub medium: DifficultySettings,
    pub hard: DifficultySettings,
    /// How many distant words to collect before picking a target.
    pub max_target_candidates: usize,
    /// The chance that a distant word without a common suffix is considered as a target.
    pub target_admission_probability: f64,
    /// How many start words to try per attempt.
    pub start_words_per_attempt: usize,
    /// How many of the most-different words to pick from when no distant word is reachable.
    pub letter_difference_pool: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            easy: DifficultySettings::for_difficulty(Difficulty::Easy),
            medium: DifficultySettings::for_difficulty(Difficulty::Medium),
            hard: DifficultySettings::for_difficulty(Difficulty::Hard),
            max_target_candidates: DEFAULT_MAX_TARGET_CANDIDATES,
            target_admission_probability: DEFAULT_ADMISSION_PROBABILITY,
            start_words_per_attempt: 5,
            letter_difference_pool: DEFAULT_LETTER_DIFFERENCE_POOL,
        }
    }
}

impl GeneratorConfig {
    /// The settings for the given difficulty.
    pub fn settings(&self, difficulty: Difficulty) -> &DifficultySettings {
        match difficulty {
            Difficulty::Easy => &self.easy,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    /// Checks every difficulty's settings as well as the shared target settings.
    pub fn validate(&self) -> Result<(), LadderError> {
        for difficulty in Difficulty::ALL {
            self.settings(difficulty)
                .validate()
                .map_err(|err| match err {
                    LadderError::InvalidSettings { reason } => {
                        invalid(format!("{difficulty}: {reason}"))
                    }
                    other => other,
                })?;
        }
        if !(0.0..=1.0).contains(&self.target_admission_probability) {
            return Err(invalid(format!(
                "target_admission_probability ({}) must be within 0-1",
                self.target_admission_probability
            )));
        }
        if self.max_target_candidates == 0
            || self.start_words_per_attempt == 0
            || self.letter_difference_pool == 0
        {
            return Err(invalid(
                "max_target_candidates, start_words_per_attempt and letter_difference_pool must \
                 be at least 1"
                    .to_string(),
            ));
        }
        Ok(())
    }
}

/// A word-ladder puzzle, along with the state of the attempt to solve it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Puzzle {
    pub start_word: Arc<str>,
    pub end_word: Arc<str>,
    pub word_length: usize,
    /// A shortest solution, including both the start and end words.
    pub path: Vec<Arc<str>>,
    pub difficulty: Difficulty,
    /// The target number of moves.
    pub par_steps: usize,
    /// A soft limit on the number of moves. Exceeding it does not end the game.
    pub max_moves: usize,
    /// Words that may not be played again. Starts with the start word.
    pub used_words: WordSet,
    /// Words accepted from the player, in order.
    pub moves: Vec<Arc<str>>,
    pub current_word: Arc<str>,
    pub is_complete: bool,
    pub is_success: bool,
    pub score: i64,
    /// Whether this puzzle is one of the fixed puzzles used when generation fails.
    pub is_fallback: bool,
}

impl Puzzle {
    /// Constructs a fresh puzzle from a ladder.
    ///
    /// `min_length` is the shortest word length of the puzzle's difficulty; longer words earn a
    /// higher score. Fails if the path has fewer than two words, or if it is not a ladder: every
    /// word must have the same length, each word must be one letter different from the last, and
    /// no word may repeat.
    pub fn from_path(
        path: Vec<Arc<str>>,
        difficulty: Difficulty,
        min_length: usize,
    ) -> Result<Puzzle, LadderError> {
        if path.len() < 2 {
            return Err(invalid(format!(
                "a puzzle needs at least two words, got {}",
                path.len()
            )));
        }
        if let Some(pair) = path
            .windows(2)
            .find(|pair| !is_one_letter_different(&pair[0], &pair[1]))
        {
            return Err(invalid(format!(
                "{} and {} are not one letter apart",
                pair[0], pair[1]
            )));
        }
        let unique: HashSet<&Arc<str>> = path.iter().collect();
        if unique.len() != path.len() {
            return Err(invalid("a puzzle path may not repeat words".to_string()));
        }
        Ok(Self::from_valid_path(path, difficulty, min_length, false))
    }

    /// Constructs the fixed puzzle for the given difficulty.
    pub fn fallback(difficulty: Difficulty, min_length: usize) -> Puzzle {
        let path = difficulty
            .fallback_path()
            .iter()
            .map(|word| Arc::from(*word))
            .collect();
        Self::from_valid_path(path, difficulty, min_length, true)
    }

    fn from_valid_path(
        path: Vec<Arc<str>>,
        difficulty: Difficulty,
        min_length: usize,
        is_fallback: bool,
    ) -> Puzzle {
        let start_word = Arc::clone(&path[0]);
        let end_word = Arc::clone(&path[path.len() - 1]);
        let word_length = start_word.len();
        let optimal_steps = path.len() - 1;
        Puzzle {
            used_words: WordSet::from([Arc::clone(&start_word)]),
            current_word: Arc::clone(&start_word),
            start_word,
            end_word,
            word_length,
            difficulty,
            par_steps: difficulty.par_for(optimal_steps),
            max_moves: div_ceil(optimal_steps * 3, 2),
            score: score_for(path.len(), word_length, difficulty, min_length),
            path,
            moves: Vec::new(),
            is_complete: false,
            is_success: false,
            is_fallback,
        }
    }

    /// The number of moves in the shortest solution.
    pub fn optimal_steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Scores a ladder: 100 points per word, scaled by the difficulty's multiplier (1, 1.5 or 2) and
/// by 20% for each letter beyond the difficulty's shortest length.
fn score_for(path_len: usize, word_length: usize, difficulty: Difficulty, min_length: usize) -> i64 {
    // 100 * len * (half / 2) * ((5 + extra) / 5), kept in integers.
    let extra_letters = word_length as i64 - min_length as i64;
    (10 * path_len as i64 * difficulty.half_multiplier() * (5 + extra_letters)).max(0)
}

fn div_ceil(numerator: usize, denominator: usize) -> usize {
    (numerator + denominator - 1) / denominator
}

fn invalid(reason: String) -> LadderError {
    LadderError::InvalidSettings { reason }
}
