//! Example demonstrating Sudoku puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` with a target clue count
//! - Generate a random puzzle, or reproduce one from a seed
//! - Generate a batch of puzzles in parallel
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Target a specific clue count (confined to 24-81):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --num-clues 30
//! ```
//!
//! Reproduce a puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --seed <64 hex chars>
//! ```
//!
//! Generate several puzzles at once (uses all cores):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --count 8
//! ```
//!
//! Carving progress is logged at debug level:
//!
//! ```sh
//! RUST_LOG=debug cargo run --example generate_puzzle
//! ```

use std::process;

use clap::Parser;
use kudoku_generator::{GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Target number of clues (confined to 24-81).
    #[arg(long, value_name = "COUNT", default_value_t = 27)]
    num_clues: usize,

    /// Seed to reproduce a specific puzzle (64 hex characters).
    #[arg(long, value_name = "SEED", conflicts_with = "count")]
    seed: Option<String>,

    /// Number of puzzles to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let generator = PuzzleGenerator::with_num_clues(args.num_clues);

    if let Some(seed_text) = &args.seed {
        let seed: PuzzleSeed = match seed_text.parse() {
            Ok(seed) => seed,
            Err(err) => {
                eprintln!("Invalid seed: {err}");
                process::exit(2);
            }
        };
        print_puzzle(&generator.generate_with_seed(seed));
        return;
    }

    if args.count == 0 {
        eprintln!("--count must be at least 1.");
        process::exit(1);
    }

    let puzzles: Vec<_> = (0..args.count)
        .into_par_iter()
        .map(|_| generator.generate())
        .collect();
    for (i, generated) in puzzles.iter().enumerate() {
        if i > 0 {
            println!();
        }
        print_puzzle(generated);
    }
}

fn print_puzzle(generated: &GeneratedPuzzle) {
    println!("Seed:");
    println!("  {}", generated.seed);
    println!();
    println!("Puzzle ({} clues):", generated.puzzle.clue_count());
    println!("  {}", generated.puzzle);
    println!();
    println!("Solution:");
    println!("  {}", generated.solution);
}
