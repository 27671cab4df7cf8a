//! # Hundred and Ten CLI Library
//!
//! This library provides the command-line interface for the Hundred and Ten
//! rules engine. It exposes subcommands for playing against automated
//! opponents, running simulations and inspecting recorded games.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand. [`run_with_input`] does the same with an
//! explicit input stream for the interactive `play` command.
//!
//! ## Available Subcommands
//!
//! - `play`: Play a game against automated opponents
//! - `sim`: Run automated games and record them as JSONL
//! - `replay`: Rebuild recorded games and print their event log
//! - `verify`: Replay records and check their winners and scores
//! - `stats`: Aggregate wins and round counts from record files
//! - `deal`: Show the first deal of a seeded game
//! - `rng`: Show the deck seeds derived from a game seed
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{BufRead, Write};

#[macro_use]
mod macros;

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod ui;
pub mod validation;

use cli::{Commands, HundredAndTenCli};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_replay_command,
    handle_rng_command, handle_sim_command, handle_stats_command, handle_verify_command,
};

pub use error::{BatchValidationError, CliError};

const COMMANDS: &[&str] = &[
    "play", "sim", "replay", "verify", "stats", "deal", "rng", "cfg",
];

/// Main entry point for the CLI application.
///
/// Parses command-line arguments and dispatches to the appropriate subcommand handler.
/// `play` reads its moves from the process's stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["hundredandten", "deal", "--seed", "42"];
/// let code = hundredandten_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// Same as [`run`], reading interactive input from `input`.
pub fn run_with_input<I, S>(
    args: I,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HundredAndTenCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and succeed
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                if write!(out, "{}", e).is_err() {
                    return exit_code::ERROR;
                }
                return exit_code::SUCCESS;
            }
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Hundred and Ten CLI");
            write_or_exit!(err, "Usage: hundredandten <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: hundredandten --help");
            return exit_code::ERROR;
        }
    };

    let result = match cli.cmd {
        Commands::Play { players, seed } => handle_play_command(players, seed, input, out, err),
        Commands::Sim {
            games,
            output,
            seed,
            players,
            resume,
        } => handle_sim_command(games, output, seed, players, resume, out, err),
        Commands::Replay { input } => handle_replay_command(&input, out, err),
        Commands::Verify { input } => match input {
            Some(path) => handle_verify_command(&path, out, err),
            None => Err(CliError::InvalidInput("input required".to_string())),
        },
        Commands::Stats { input } => handle_stats_command(&input, out, err),
        Commands::Deal { seed, players } => handle_deal_command(seed, players, out),
        Commands::Rng { seed } => handle_rng_command(seed, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_args(args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(Vec::new());
        let code = run_with_input(args.iter().copied(), &mut input, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn help_goes_to_stdout() {
        let (code, out, err) = run_args(&["hundredandten", "--help"]);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(out.contains("Usage"));
        assert!(err.is_empty());
    }

    #[test]
    fn unknown_command_lists_commands() {
        let (code, _, err) = run_args(&["hundredandten", "shuffle"]);
        assert_eq!(code, exit_code::ERROR);
        for c in COMMANDS {
            assert!(err.contains(c), "missing {c}");
        }
    }

    #[test]
    fn verify_without_input_is_an_error() {
        let (code, _, err) = run_args(&["hundredandten", "verify"]);
        assert_eq!(code, exit_code::ERROR);
        assert!(err.contains("input required"));
    }
}
