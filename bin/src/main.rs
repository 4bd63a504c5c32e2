use clap::{Parser, Subcommand};
use log::{info, warn, LevelFilter};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use rs_word_ladder::*;
use std::env;
use std::error::Error;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// Word-ladder puzzles: change one letter at a time to turn the start word into the target word.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file with extra words, with one word on each line. The words are merged into
    /// the built-in dictionary in the background.
    #[clap(short = 'f', long, global = true)]
    words_file: Option<PathBuf>,

    /// Path to a RON file with puzzle generator settings.
    #[clap(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enables debug logging. `RUST_LOG` takes precedence if set.
    #[clap(long, global = true)]
    debug: bool,

    /// Seeds the random generator, so that the same puzzles are generated every time.
    #[clap(long, global = true)]
    seed: Option<u64>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a puzzle and print it along with a shortest solution.
    Generate {
        #[clap(short, long, default_value_t)]
        difficulty: Difficulty,
    },
    /// Find a shortest ladder between two words of the same length.
    Ladder { start: String, end: String },
    /// Play a puzzle interactively.
    Play {
        #[clap(short, long, default_value_t)]
        difficulty: Difficulty,
    },
    /// Generate many puzzles of each difficulty and report how they turned out.
    Benchmark {
        /// The number of puzzles to generate per difficulty.
        #[clap(short = 'n', long, default_value_t = 100)]
        count: usize,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let start_time = Instant::now();
    let args = Args::parse();
    init_logger(args.debug);

    let dictionary = Arc::new(Dictionary::builtin());
    info!("There are {} built-in words", dictionary.len());
    let extension = args
        .words_file
        .as_ref()
        .map(|path| dictionary.spawn_extend_from_path(path.clone()));

    let mut engine = LadderEngine::with_dictionary(Arc::clone(&dictionary));
    if let Some(path) = &args.config {
        engine = engine.with_config(load_config(path)?)?;
    }

    match args.command {
        Command::Generate { difficulty } => generate(&engine, difficulty, args.seed),
        Command::Ladder { start, end } => {
            // Searches only see the words that are present when they start.
            if let Some(handle) = extension {
                if handle.join().is_err() {
                    warn!("Loading extra words failed");
                }
            }
            find_ladder(&engine, &start, &end)
        }
        Command::Play { difficulty } => play(&engine, difficulty, args.seed)?,
        Command::Benchmark { count } => run_benchmark(&engine, count, args.seed),
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Logs at `Info` level, or `Debug` if requested. `RUST_LOG` overrides both.
fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);
    if let Ok(spec) = env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder.init();
}

fn load_config(path: &Path) -> Result<GeneratorConfig, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let config = ron::from_str::<GeneratorConfig>(&text)?;
    info!("Loaded generator settings from {}", path.display());
    Ok(config)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn generate(engine: &LadderEngine, difficulty: Difficulty, seed: Option<u64>) {
    let puzzle = engine.generate_puzzle_with_rng(difficulty, &mut make_rng(seed));

    println!(
        "{difficulty} puzzle: {} -> {}{}",
        puzzle.start_word,
        puzzle.end_word,
        if puzzle.is_fallback { " (fallback)" } else { "" }
    );
    println!("Solution: {}", puzzle.path.join(" -> "));
    println!(
        "Par: {}, max moves: {}, score: {}",
        puzzle.par_steps, puzzle.max_moves, puzzle.score
    );
}

fn find_ladder(engine: &LadderEngine, start: &str, end: &str) {
    let candidates = engine
        .dictionary()
        .words_of_length(normalize_word(start).len());
    match engine.find_word_ladder(start, end, &candidates) {
        Some(path) => {
            println!("Found a ladder with {} steps:", path.len() - 1);
            for word in path.iter() {
                println!("\t{}", word);
            }
        }
        None => {
            println!("There is no ladder from {start} to {end}.");
        }
    }
}

fn play(engine: &LadderEngine, difficulty: Difficulty, seed: Option<u64>) -> io::Result<()> {
    let puzzle = engine.generate_puzzle_with_rng(difficulty, &mut make_rng(seed));
    let solution = puzzle.path.join(" -> ");
    let mut game = Game::new(engine, puzzle);
    println!(
        "Turn {} into {}, changing one letter at a time. Par is {} moves.\n\
         Enter '?' to give up.",
        game.puzzle().start_word,
        game.puzzle().end_word,
        game.puzzle().par_steps
    );
    prompt(&game)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim() == "?" {
            game.give_up();
            break;
        }
        match game.submit_word(&line) {
            Ok(MoveOutcome::Continue) => {
                if game.is_over_max_moves() {
                    println!(
                        "That's more than {} moves. Keep going!",
                        game.puzzle().max_moves
                    );
                }
            }
            Ok(MoveOutcome::Solved) => {
                println!(
                    "Solved it in {} moves ({:+} vs. par).",
                    game.move_count(),
                    game.par_score()
                );
                break;
            }
            Err(err) => println!("{err}"),
        }
        prompt(&game)?;
    }

    if !game.is_success() {
        println!("A shortest solution was: {solution}");
    }
    Ok(())
}

fn prompt(game: &Game) -> io::Result<()> {
    print!("{} > ", game.puzzle().current_word);
    io::stdout().flush()
}

fn run_benchmark(engine: &LadderEngine, count: usize, seed: Option<u64>) {
    println!("|Difficulty|Puzzles|Avg. steps|Fallbacks|Time|");
    println!("|----------|-------|----------|---------|----|");
    for difficulty in Difficulty::ALL {
        let timer = Instant::now();
        let steps: Vec<(usize, bool)> = (0..count)
            .into_par_iter()
            .map(|index| {
                let mut rng = make_rng(seed.map(|seed| seed.wrapping_add(index as u64)));
                let puzzle = engine.generate_puzzle_with_rng(difficulty, &mut rng);
                (puzzle.optimal_steps(), puzzle.is_fallback)
            })
            .collect();

        let average = steps.iter().map(|(steps, _)| *steps).sum::<usize>() as f64
            / steps.len().max(1) as f64;
        let std_dev = (steps
            .iter()
            .map(|(steps, _)| (*steps as f64 - average).powi(2))
            .sum::<f64>()
            / steps.len().max(1) as f64)
            .sqrt();
        let fallbacks = steps.iter().filter(|(_, is_fallback)| *is_fallback).count();

        println!(
            "|{difficulty}|{count}|{average:.2} +/- {std_dev:.2}|{fallbacks}|{:.3}s|",
            timer.elapsed().as_secs_f64()
        );
    }
}
