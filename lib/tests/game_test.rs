#[macro_use]
extern crate assert_matches;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_word_ladder::*;

use std::error::Error;
use std::sync::Arc;

fn engine_with(words: &[&str]) -> LadderEngine {
    LadderEngine::with_dictionary(Arc::new(Dictionary::from_iterator(words)))
}

fn cat_dog_puzzle() -> Result<Puzzle, LadderError> {
    Puzzle::from_path(
        ["CAT", "COT", "DOT", "DOG"]
            .iter()
            .map(|word| Arc::from(*word))
            .collect(),
        Difficulty::Medium,
        3,
    )
}

#[test]
fn solve_in_par() -> Result<(), Box<dyn Error>> {
    let engine = engine_with(&["CAT", "COT", "DOT", "DOG", "BAT", "BAG", "BIG"]);
    let mut game = Game::new(&engine, cat_dog_puzzle()?);

    assert_eq!(game.submit_word("cot"), Ok(MoveOutcome::Continue));
    assert_eq!(game.submit_word("DOT"), Ok(MoveOutcome::Continue));
    assert_eq!(game.submit_word("dog"), Ok(MoveOutcome::Solved));

    assert!(game.is_complete());
    assert!(game.is_success());
    assert_eq!(game.move_count(), 3);
    assert_eq!(game.par_score(), 0);
    assert!(!game.is_over_max_moves());
    let puzzle = game.into_puzzle();
    assert_eq!(puzzle.current_word.as_ref(), "DOG");
    // The reference solution is never touched by play.
    assert_eq!(puzzle.path.len(), 4);
    Ok(())
}

#[test]
fn solve_over_par() -> Result<(), Box<dyn Error>> {
    let engine = engine_with(&["CAT", "COT", "DOT", "DOG", "BAT", "BAG", "BOG"]);
    let mut game = Game::new(&engine, cat_dog_puzzle()?);

    for word in ["BAT", "BAG", "BOG"] {
        assert_eq!(game.submit_word(word), Ok(MoveOutcome::Continue));
    }
    assert_eq!(game.submit_word("DOG"), Ok(MoveOutcome::Solved));

    assert_eq!(game.move_count(), 4);
    assert_eq!(game.par_score(), 1);
    Ok(())
}

#[test]
fn words_cannot_be_reused() -> Result<(), Box<dyn Error>> {
    let engine = engine_with(&["CAT", "COT", "DOT", "DOG"]);
    let mut game = Game::new(&engine, cat_dog_puzzle()?);

    game.submit_word("COT")?;

    assert_eq!(game.submit_word("CAT"), Err(MoveError::AlreadyUsed));
    game.submit_word("DOT")?;
    assert_eq!(game.submit_word("COT"), Err(MoveError::AlreadyUsed));
    assert_eq!(game.move_count(), 2);
    Ok(())
}

#[test]
fn first_word_must_change_the_start_word() -> Result<(), Box<dyn Error>> {
    let engine = engine_with(&["CAT", "COT", "DOT", "DOG", "CART"]);
    let mut game = Game::new(&engine, cat_dog_puzzle()?);

    assert_matches!(
        game.submit_word("CAT"),
        Err(MoveError::SameAsStartWord { start_word }) if start_word == "CAT"
    );
    assert_eq!(
        game.submit_word("CART"),
        Err(MoveError::WrongLength { expected: 3 })
    );
    assert_eq!(
        game.submit_word("DOT"),
        Err(MoveError::NotOneLetterDifferent)
    );
    assert_eq!(game.submit_word("CAX"), Err(MoveError::NotAWord));
    assert_eq!(game.submit_word(""), Err(MoveError::Empty));
    assert!(game.puzzle().moves.is_empty());
    Ok(())
}

#[test]
fn first_word_may_echo_the_start_word() -> Result<(), Box<dyn Error>> {
    let engine = engine_with(&["CAT", "COT", "DOT", "DOG"]);
    let mut game =
        Game::new(&engine, cat_dog_puzzle()?).with_policy(FirstMovePolicy::MatchStartWord);

    assert_matches!(
        game.submit_word("COT"),
        Err(MoveError::MustBeStartWord { .. })
    );
    for word in ["CAT", "COT", "DOT"] {
        assert_eq!(game.submit_word(word), Ok(MoveOutcome::Continue));
    }
    assert_eq!(game.submit_word("DOG"), Ok(MoveOutcome::Solved));
    assert_eq!(game.move_count(), 3);
    assert_eq!(game.par_score(), 0);
    Ok(())
}

#[test]
fn moves_beyond_the_soft_limit_are_allowed() -> Result<(), Box<dyn Error>> {
    let engine = engine_with(&["CAT", "COT", "DOT", "DOG", "BAT", "BAG", "BIG", "BOG", "COG"]);
    let mut game = Game::new(&engine, cat_dog_puzzle()?);

    for word in ["BAT", "BAG", "BIG", "BOG", "COG"] {
        game.submit_word(word)?;
    }
    assert!(!game.is_over_max_moves());
    game.submit_word("COT")?;

    assert!(game.is_over_max_moves());
    assert_eq!(game.submit_word("DOT"), Ok(MoveOutcome::Continue));
    assert_eq!(game.submit_word("DOG"), Ok(MoveOutcome::Solved));
    Ok(())
}

#[test]
fn no_moves_after_the_game_ends() -> Result<(), Box<dyn Error>> {
    let engine = engine_with(&["CAT", "COT", "DOT", "DOG"]);
    let mut game = Game::new(&engine, cat_dog_puzzle()?);
    for word in ["COT", "DOT", "DOG"] {
        game.submit_word(word)?;
    }

    assert_eq!(game.submit_word("DOT"), Err(MoveError::GameOver));
    Ok(())
}

#[test]
fn generated_puzzle_can_be_solved_by_its_path() {
    let engine = LadderEngine::new();
    for difficulty in Difficulty::ALL {
        let puzzle =
            engine.generate_puzzle_with_rng(difficulty, &mut StdRng::seed_from_u64(77));
        let path = puzzle.path.clone();
        let mut game = Game::new(&engine, puzzle);

        let outcomes: Vec<Result<MoveOutcome, MoveError>> =
            path[1..].iter().map(|word| game.submit_word(word)).collect();

        assert_eq!(outcomes.last(), Some(&Ok(MoveOutcome::Solved)));
        assert!(outcomes.iter().all(|outcome| outcome.is_ok()));
        assert!(game.par_score() <= 1);
    }
}

#[test]
fn generated_game_starts_at_the_start_word() {
    let engine = LadderEngine::new();

    for difficulty in Difficulty::ALL {
        let game = Game::generate(&engine, difficulty);

        let puzzle = game.puzzle();
        assert_eq!(puzzle.difficulty, difficulty);
        assert_eq!(puzzle.current_word, puzzle.start_word);
        assert!(puzzle.moves.is_empty());
        assert!(puzzle.optimal_steps() >= engine.config().settings(difficulty).min_steps);
        assert_eq!(game.move_count(), 0);
        assert!(!game.is_complete());
    }
}

#[test]
fn policy_defaults_to_changing_the_start_word() -> Result<(), Box<dyn Error>> {
    let engine = engine_with(&["CAT", "COT", "DOT", "DOG"]);

    let game = Game::new(&engine, cat_dog_puzzle()?);
    assert_eq!(game.policy(), FirstMovePolicy::ChangeFromStartWord);

    let game = game.with_policy(FirstMovePolicy::MatchStartWord);
    assert_eq!(game.policy(), FirstMovePolicy::MatchStartWord);
    Ok(())
}
