//! Example demonstrating a solver-driven puzzle attempt.
//!
//! This example shows how to:
//! - Build a `Puzzle` from a boolean image
//! - Drive a `SolveSession` one step at a time
//! - Inspect the outcome, wrong guesses, and remaining time
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_puzzle
//! ```
//!
//! Select a built-in image:
//!
//! ```sh
//! cargo run --example solve_puzzle -- --pattern ring
//! ```
//!
//! Print the attempt grid after every step:
//!
//! ```sh
//! cargo run --example solve_puzzle -- --show-steps
//! ```

use clap::{Parser, ValueEnum};
use nonolace_core::{Grid, Puzzle};
use nonolace_game::{SessionOutcome, SolveSession};

const HEART: &str = "
    .##.##.
    #######
    #######
    .#####.
    ..###..
    ...#...
";

const RING: &str = "
    .####.
    #....#
    #....#
    #....#
    .####.
";

// Check-line solving alone cannot crack this one; the session has to guess.
const DIAGONAL: &str = "
    #.
    .#
";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Pattern {
    Heart,
    Ring,
    Diagonal,
}

impl Pattern {
    fn image_text(self) -> &'static str {
        match self {
            Pattern::Heart => HEART,
            Pattern::Ring => RING,
            Pattern::Diagonal => DIAGONAL,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Built-in image to solve.
    #[arg(long, value_name = "PATTERN", default_value = "heart")]
    pattern: Pattern,

    /// Print the attempt grid after every step.
    #[arg(long)]
    show_steps: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let image = Grid::parse_image(args.pattern.image_text()).expect("built-in images are valid");
    let puzzle = Puzzle::from_image(image);
    let mut session = SolveSession::new(&puzzle);

    let mut steps = 0_usize;
    let mut applied = 0_usize;
    let outcome = loop {
        let step = session.step(&puzzle).expect("solver-driven attempts stay consistent");
        match step {
            SessionOutcome::InProgress { actions } => {
                steps += 1;
                applied += actions.len();
                if args.show_steps && !actions.is_empty() {
                    println!("After step {steps}:");
                    println!("{}", indent(&session.attempt().marks().to_string()));
                    println!();
                }
            }
            outcome @ (SessionOutcome::Completed | SessionOutcome::OutOfTime) => break outcome,
        }
    };

    println!("Outcome: {outcome:?}");
    println!("Steps: {steps}");
    println!("Actions applied: {applied}");
    println!("Wrong guesses: {}", session.attempt().incorrect_marks().len());
    println!(
        "Time remaining: {}s",
        session.attempt().time_remaining().as_secs()
    );
    println!();
    println!("Image:");
    println!("{}", indent(&puzzle.image().to_string()));
    println!();
    println!("Attempt:");
    println!("{}", indent(&session.attempt().marks().to_string()));
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
