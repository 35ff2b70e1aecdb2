//! CLI example: play a five-card game against the lowest-card opponent.
//!
//! Usage: `cargo run --example cli_game -- [--seed N] [--random] [--verbose]`

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use mergewar::{Control, Game, GameEvent, GameOptions, Policy, Side};
use simplelog::{ColorChoice, ConfigBuilder, LevelFilter, TermLogger, TerminalMode};

struct Args {
    seed: u64,
    random_opponent: bool,
    verbose: bool,
}

fn main() {
    let args = parse_args();
    init_logging(args.verbose);

    println!("High-card duel (type 'q' to quit)");

    let opponent = if args.random_opponent {
        Control::Auto(Policy::Random)
    } else {
        Control::Auto(Policy::Lowest)
    };
    let options = GameOptions::default().with_opponent(opponent);
    let mut game = Game::new(options, args.seed);

    let mut chooser = prompt_index;
    let mut sink = print_event;

    if let Err(err) = game.run(&mut chooser, &mut sink) {
        eprintln!("Game error: {err}");
    }
}

fn parse_args() -> Args {
    let mut args = Args {
        seed: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs(),
        random_opponent: false,
        verbose: false,
    };

    let mut raw = std::env::args().skip(1);
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--seed" => match raw.next().and_then(|s| s.parse().ok()) {
                Some(seed) => args.seed = seed,
                None => eprintln!("--seed expects a number; using {}", args.seed),
            },
            "--random" => args.random_opponent = true,
            "--verbose" | "-v" => args.verbose = true,
            other => eprintln!("Ignoring unknown argument: {other}"),
        }
    }
    args
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    let _ = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto);
}

fn print_event(event: &GameEvent) {
    match event {
        GameEvent::RoundStarted { .. } => println!("\n{event}"),
        GameEvent::GameOver { .. } => println!("\n{event}"),
        GameEvent::InvalidChoice { .. } => println!("{}", colorize(&event.to_string(), "31")),
        _ => println!("{event}"),
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

/// Reads one index; anything that is not a number is handed back as `None`
/// so the game asks again.
fn prompt_index(side: Side, max_exclusive: usize) -> Option<usize> {
    let last = max_exclusive.saturating_sub(1);
    let who = match side {
        Side::Player => "Choose a card index to play",
        Side::Opponent => "Choose the opponent's card index",
    };
    let Some(input) = prompt_line(&format!("{who} (0 to {last}): ")) else {
        println!("\nInput closed. Goodbye.");
        std::process::exit(0);
    };
    if input == "q" || input == "quit" {
        println!("Goodbye.");
        std::process::exit(0);
    }
    input.parse::<usize>().ok()
}
