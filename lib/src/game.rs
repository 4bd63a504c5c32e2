use crate::data::normalize_word;
use crate::engine::LadderEngine;
use crate::puzzle::{Difficulty, Puzzle};
use crate::results::{MoveError, MoveOutcome};
use log::{debug, info};
use std::sync::Arc;

/// How the first word of an attempt is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FirstMovePolicy {
    /// The first word must repeat the start word. Later words then change one letter at a time.
    MatchStartWord,
    /// The first word must already change one letter of the start word.
    #[default]
    ChangeFromStartWord,
}

/// A single attempt at solving a puzzle.
///
/// ```
/// use rs_word_ladder::*;
/// use std::sync::Arc;
///
/// let words = ["CAT", "COT", "DOT", "DOG"];
/// let engine = LadderEngine::with_dictionary(Arc::new(Dictionary::from_iterator(words)));
/// let ladder = words.iter().map(|word| Arc::from(*word)).collect();
/// let puzzle = Puzzle::from_path(ladder, Difficulty::Easy, 3)?;
/// let mut game = Game::new(&engine, puzzle);
///
/// assert_eq!(game.submit_word("cot"), Ok(MoveOutcome::Continue));
/// assert_eq!(game.submit_word("cog"), Err(MoveError::NotAWord));
/// assert_eq!(game.submit_word("dot"), Ok(MoveOutcome::Continue));
/// assert_eq!(game.submit_word("dog"), Ok(MoveOutcome::Solved));
/// assert_eq!(game.par_score(), -2);
/// # Ok::<(), LadderError>(())
/// ```
#[derive(Debug)]
pub struct Game<'a> {
    engine: &'a LadderEngine,
    puzzle: Puzzle,
    policy: FirstMovePolicy,
}

impl<'a> Game<'a> {
    /// Starts playing the given puzzle, with the default first-move policy.
    pub fn new(engine: &'a LadderEngine, puzzle: Puzzle) -> Self {
        Game {
            engine,
            puzzle,
            policy: FirstMovePolicy::default(),
        }
    }

    /// Generates a new puzzle of the given difficulty and starts playing it.
    pub fn generate(engine: &'a LadderEngine, difficulty: Difficulty) -> Self {
        Game::new(engine, engine.generate_puzzle(difficulty))
    }

    pub fn with_policy(mut self, policy: FirstMovePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn into_puzzle(self) -> Puzzle {
        self.puzzle
    }

    pub fn policy(&self) -> FirstMovePolicy {
        self.policy
    }

    /// Plays the given word.
    ///
    /// If the word is rejected, the game is left unchanged.
    pub fn submit_word(&mut self, word: &str) -> Result<MoveOutcome, MoveError> {
        if self.puzzle.is_complete {
            return Err(MoveError::GameOver);
        }
        let is_first_word = self.puzzle.moves.is_empty();
        self.engine.validate_word_with_policy(
            word,
            &self.puzzle.current_word,
            is_first_word,
            &self.puzzle,
            self.policy,
        )?;

        let word: Arc<str> = Arc::from(normalize_word(word));
        debug!("Accepted {word}");
        self.puzzle.moves.push(Arc::clone(&word));
        self.puzzle.used_words.insert(Arc::clone(&word));
        self.puzzle.current_word = Arc::clone(&word);
        if word != self.puzzle.end_word {
            return Ok(MoveOutcome::Continue);
        }
        self.puzzle.is_complete = true;
        self.puzzle.is_success = true;
        info!(
            "Solved {} -> {} in {} moves (par {})",
            self.puzzle.start_word,
            self.puzzle.end_word,
            self.move_count(),
            self.puzzle.par_steps
        );
        Ok(MoveOutcome::Solved)
    }

    /// Ends the game without solving it.
    pub fn give_up(&mut self) {
        self.puzzle.is_complete = true;
        self.puzzle.is_success = false;
    }

    /// The number of letter changes made so far.
    pub fn move_count(&self) -> usize {
        match self.policy {
            // The echoed start word does not change anything.
            FirstMovePolicy::MatchStartWord => self.puzzle.moves.len().saturating_sub(1),
            FirstMovePolicy::ChangeFromStartWord => self.puzzle.moves.len(),
        }
    }

    /// The number of moves made relative to par. Negative is better than par.
    pub fn par_score(&self) -> i64 {
        self.move_count() as i64 - self.puzzle.par_steps as i64
    }

    /// Returns `true` once more moves were made than the puzzle's soft limit.
    pub fn is_over_max_moves(&self) -> bool {
        self.move_count() > self.puzzle.max_moves
    }

    pub fn is_complete(&self) -> bool {
        self.puzzle.is_complete
    }

    pub fn is_success(&self) -> bool {
        self.puzzle.is_success
    }
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::data::Dictionary;

    fn cat_dog_game(engine: &LadderEngine) -> Game<'_> {
        Game::new(engine, Puzzle::fallback(Difficulty::Easy, 3))
    }

    #[test]
    fn rejected_words_leave_the_game_unchanged() {
        let engine = LadderEngine::with_dictionary(Arc::new(Dictionary::from_iterator([
            "CAT", "COT", "DOT", "DOG",
        ])));
        let mut game = cat_dog_game(&engine);

        assert_eq!(game.submit_word("DOG"), Err(MoveError::NotOneLetterDifferent));

        assert!(game.puzzle().moves.is_empty());
        assert_eq!(game.puzzle().current_word.as_ref(), "CAT");
        assert_eq!(game.move_count(), 0);
    }

    #[test]
    fn echoed_start_word_is_not_counted() {
        let engine = LadderEngine::with_dictionary(Arc::new(Dictionary::from_iterator([
            "CAT", "COT", "DOT", "DOG",
        ])));
        let mut game = cat_dog_game(&engine).with_policy(FirstMovePolicy::MatchStartWord);

        assert_eq!(game.submit_word("CAT"), Ok(MoveOutcome::Continue));
        assert_eq!(game.move_count(), 0);
        assert_eq!(game.submit_word("COT"), Ok(MoveOutcome::Continue));
        assert_eq!(game.move_count(), 1);
    }

    #[test]
    fn giving_up_ends_the_game() {
        let engine = LadderEngine::with_dictionary(Arc::new(Dictionary::from_iterator([
            "CAT", "COT",
        ])));
        let mut game = cat_dog_game(&engine);

        game.give_up();

        assert!(game.is_complete());
        assert!(!game.is_success());
        assert_eq!(game.submit_word("COT"), Err(MoveError::GameOver));
    }
}
