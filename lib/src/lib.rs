//! An engine for word-ladder puzzles: change one letter at a time to turn a start word into a
//! target word.
//!
//! The [`LadderEngine`] owns a [`Dictionary`], finds shortest ladders between words, and
//! generates [`Puzzle`]s whose shortest solution has a minimum length for the chosen
//! [`Difficulty`]. A [`Game`] plays a puzzle one word at a time.

mod adjacency;
mod data;
mod engine;
mod game;
mod ladder;
mod puzzle;
mod results;
mod targets;

pub use adjacency::is_one_letter_different;
pub use adjacency::letter_differences;
pub use adjacency::neighbors;
pub use data::is_offensive_word;
pub use data::normalize_word;
pub use data::Dictionary;
pub use data::WordSet;
pub use data::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
pub use engine::*;
pub use game::*;
pub use ladder::find_word_ladder;
pub use ladder::PathCache;
pub use puzzle::*;
pub use results::*;
pub use targets::*;
