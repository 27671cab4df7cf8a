//! Statistics aggregation command for game record files.
//!
//! Computes summary metrics over JSONL game records: games played, games
//! that reached a winner, wins per seat and the average number of rounds.
//! Rounds are counted by replaying each record, so a record whose moves no
//! longer replay is treated as corrupted.

use crate::error::CliError;
use crate::io_utils::read_text_auto;
use crate::ui;
use hundredandten_engine::logger::GameRecord;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

#[derive(Default)]
struct StatsState {
    games: u64,
    finished: u64,
    rounds: u64,
    wins: BTreeMap<String, u64>,
    skipped: u64,
    corrupted: u64,
}

/// Aggregates statistics from a game record file, or from every `.jsonl`
/// and `.jsonl.zst` file below a directory.
///
/// An unparseable final line without a trailing newline is counted as
/// skipped (a run that was cut off mid-write); any other bad line is counted
/// as corrupted. Both are reported on `err`.
///
/// # Returns
///
/// `Ok(())` once the summary is printed. A single file that holds nothing
/// but bad records is an error.
pub fn handle_stats_command(
    input: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let path = Path::new(input);
    let mut state = StatsState::default();

    if path.is_dir() {
        let mut stack = vec![path.to_path_buf()];
        while let Some(d) = stack.pop() {
            let rd = match std::fs::read_dir(&d) {
                Ok(v) => v,
                Err(_) => continue,
            };
            for e in rd.filter_map(Result::ok) {
                let p = e.path();
                if p.is_dir() {
                    stack.push(p);
                } else if let Some(fname) = p.file_name().and_then(|f| f.to_str())
                    && (fname.ends_with(".jsonl") || fname.ends_with(".jsonl.zst"))
                {
                    match read_text_auto(&p.to_string_lossy()) {
                        Ok(content) => consume(&content, &mut state),
                        Err(_) => state.corrupted += 1,
                    }
                }
            }
        }
    } else {
        match read_text_auto(input) {
            Ok(content) => consume(&content, &mut state),
            Err(e) => {
                return Err(CliError::InvalidInput(format!(
                    "Failed to read {}: {}",
                    input, e
                )));
            }
        }
    }

    if state.corrupted > 0 {
        ui::write_error(
            err,
            &format!("Skipped {} corrupted record(s)", state.corrupted),
        )?;
    }
    if state.skipped > 0 {
        ui::display_warning(
            err,
            &format!("Discarded {} incomplete final line(s)", state.skipped),
        )?;
    }
    if !path.is_dir() && state.games == 0 && (state.corrupted > 0 || state.skipped > 0) {
        return Err(CliError::InvalidInput("Invalid record".to_string()));
    }

    let average_rounds = if state.games == 0 {
        0.0
    } else {
        state.rounds as f64 / state.games as f64
    };
    let summary = serde_json::json!({
        "games": state.games,
        "finished": state.finished,
        "wins": state.wins,
        "average_rounds": average_rounds,
        "skipped": state.skipped,
        "corrupted": state.corrupted,
    });
    let json_output = serde_json::to_string_pretty(&summary)
        .map_err(|e| CliError::InvalidInput(format!("Failed to serialize stats: {}", e)))?;
    writeln!(out, "{}", json_output)?;
    Ok(())
}

fn consume(content: &str, state: &mut StatsState) {
    let has_trailing_nl = content.ends_with('\n');
    let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();
    for (i, line) in lines.iter().enumerate() {
        let record: GameRecord = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(_) => {
                if i == lines.len() - 1 && !has_trailing_nl {
                    state.skipped += 1;
                } else {
                    state.corrupted += 1;
                }
                continue;
            }
        };
        let Ok(game) = record.replay() else {
            state.corrupted += 1;
            continue;
        };

        state.games += 1;
        state.rounds += game.rounds().len() as u64;
        if let Some(winner) = game.winner() {
            state.finished += 1;
            *state.wins.entry(winner.identifier.clone()).or_insert(0) += 1;
        }
    }
}
