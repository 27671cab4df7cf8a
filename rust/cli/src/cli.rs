//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "hundredandten",
    version,
    about = "Hundred and Ten card game: play, simulate and inspect game records"
)]
pub struct HundredAndTenCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a game against automated opponents
    Play {
        /// Number of seats, including yours (2-4)
        #[arg(long)]
        players: Option<usize>,
        /// Game seed; every deal is derived from it
        #[arg(long)]
        seed: Option<String>,
    },
    /// Run fully automated games and record them as JSONL
    Sim {
        #[arg(long)]
        games: u64,
        #[arg(long)]
        output: Option<String>,
        #[arg(long)]
        seed: Option<String>,
        #[arg(long)]
        players: Option<usize>,
        /// Append to an existing record file, skipping games already in it
        #[arg(long)]
        resume: Option<String>,
    },
    /// Rebuild recorded games and print their event log
    Replay {
        #[arg(long)]
        input: String,
    },
    /// Replay every record and check its winner and scores
    Verify {
        #[arg(long)]
        input: Option<String>,
    },
    /// Summarize a record file or a directory of record files
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Show the first deal of a game
    Deal {
        #[arg(long)]
        seed: Option<String>,
        #[arg(long)]
        players: Option<usize>,
    },
    /// Show the deck seeds derived from a game seed
    Rng {
        #[arg(long)]
        seed: Option<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}
