//! Command-line blackjack simulation.

use std::path::PathBuf;
use std::process::ExitCode;

use bjsim::{Game, GameOptions, ShuffleOptions, ShufflePolicy, StopReason};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(about = "Simulate blackjack rounds against a scripted dealer")]
struct Args {
    /// Starting wallet balance.
    #[arg(long, default_value_t = 10)]
    wallet: usize,
    /// Number of rounds to play.
    #[arg(long, default_value_t = 5)]
    rounds: usize,
    /// Player stands once their score reaches this value.
    #[arg(long, default_value_t = 17)]
    stand: u32,
    /// Seed for the shuffle counts.
    #[arg(long, default_value_t = 20)]
    seed: u64,
    /// Skip shuffling and deal from the sorted deck.
    #[arg(long)]
    sorted: bool,
    /// Directory receiving game summary files.
    #[arg(long)]
    summaries: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let mut options = GameOptions::default();
    if args.sorted {
        options = options.with_shuffle(ShufflePolicy::Fixed(ShuffleOptions::default()));
    }
    if let Some(dir) = args.summaries {
        options = options.with_summary_dir(dir);
    }

    let mut game = Game::new(args.wallet, options, args.seed);
    let report = match game.play(args.rounds, args.stand) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", game.transcript());
    println!();
    match report.stopped {
        Some(StopReason::NotEnoughCards { remaining }) => {
            println!("Stopped with {remaining} cards left.");
        }
        Some(StopReason::InsufficientFunds { wallet, bet }) => {
            println!("Stopped: wallet {wallet} below bet {bet}.");
        }
        None => {}
    }
    println!(
        "Played {} rounds, final wallet {}.",
        game.rounds_played(),
        game.wallet()
    );

    ExitCode::SUCCESS
}
