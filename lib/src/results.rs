use std::io;

/// Indicates that an error occurred while loading words or configuring the engine.
#[derive(Debug, thiserror::Error)]
pub enum LadderError {
    /// Indicates that reading an external word source failed.
    #[error("failed to read words: {0}")]
    Io(#[from] io::Error),
    /// Indicates that generator settings are out of range or contradictory.
    #[error("invalid settings: {reason}")]
    InvalidSettings { reason: String },
}

/// The reason a submitted word was rejected.
///
/// The `Display` output is the message meant to be shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("Please enter a word")]
    Empty,
    #[error("Not a valid word")]
    NotAWord,
    /// The first word must repeat the start word.
    #[error("First word must be {start_word}")]
    MustBeStartWord { start_word: String },
    #[error("Word must be {expected} letters long")]
    WrongLength { expected: usize },
    /// The first word must change a letter of the start word, not repeat it.
    #[error("First word cannot be the same as the start word ({start_word})")]
    SameAsStartWord { start_word: String },
    #[error("Must change exactly one letter")]
    NotOneLetterDifferent,
    #[error("Word already used")]
    AlreadyUsed,
    #[error("The game is already over")]
    GameOver,
}

/// What happened after a word was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The word was accepted and the target has not been reached yet.
    Continue,
    /// The word was the target word; the game is complete.
    Solved,
}
