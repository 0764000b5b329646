//! Fairplay interactive terminal game.
//!
//! Plays one round of generalized rock-paper-scissors against the computer.
//! The computer commits to its move up front by publishing an HMAC-SHA-256
//! digest; after the player locks in a choice, the key is revealed so the
//! digest can be independently re-checked.

use anyhow::Result;
use clap::Parser;
use fairplay_core::{GameSession, MoveSet, Outcome, Reply, RoundResult, EXIT_TOKEN, HELP_TOKEN};
use rand::rngs::OsRng;
use std::io::{self, BufRead, Write};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod table;

/// Generalized rock-paper-scissors with a commit-reveal fairness proof
#[derive(Parser)]
#[command(name = "fairplay", version, about)]
struct Args {
    /// Odd number (>= 3) of distinct move names, e.g. rock paper scissors
    moves: Vec<String>,
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let args = Args::parse();

    // Configuration errors are fatal before any cryptographic material exists
    let moves = match MoveSet::new(&args.moves) {
        Ok(moves) => moves,
        Err(err) => {
            eprintln!("Invalid move list: {err}");
            eprintln!("Supply an odd number (at least 3) of distinct, non-empty move names.");
            eprintln!("Example: fairplay rock paper scissors lizard spock");
            std::process::exit(1);
        }
    };

    let mut rng = OsRng;
    let mut session = GameSession::new(moves, &mut rng);

    println!("HMAC (fairness proof): {}", session.commitment());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    while !session.is_finished() {
        print_menu(&session);
        print!("Enter your move: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // EOF on stdin ends the session like the exit token
            break;
        };

        match session.handle_line(&line?) {
            Reply::Invalid { input } => {
                println!(
                    "Unrecognized input {input:?}; pick a menu number, \
                     {HELP_TOKEN} for help or {EXIT_TOKEN} to exit."
                );
            }
            Reply::Help => print!("{}", table::render(session.rules())),
            Reply::Round(result) => print_result(&result),
            Reply::Exit => println!("Bye!"),
            Reply::Finished => break,
        }
    }

    Ok(())
}

fn print_menu(session: &GameSession) {
    println!("Available moves:");
    for (i, name) in session.move_set().iter().enumerate() {
        println!("{} - {}", i + 1, name);
    }
    println!("{EXIT_TOKEN} - exit");
    println!("{HELP_TOKEN} - help");
}

fn print_result(result: &RoundResult) {
    println!("Your move: {}", result.player_move);
    println!("Computer move: {}", result.computer_move);
    match result.outcome {
        Outcome::Win => println!("You win!"),
        Outcome::Lose => println!("You lose!"),
        Outcome::Draw => println!("Draw!"),
    }
    println!("HMAC key: {}", result.key.to_hex());
    println!(
        "Verify: HMAC-SHA-256(key, {:?}) must equal the HMAC shown at start.",
        result.computer_move
    );
}
