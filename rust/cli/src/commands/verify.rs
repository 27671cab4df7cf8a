//! Verify command handler module.
//!
//! Validates the integrity of JSONL game record files:
//!
//! - Every line parses as a game record
//! - Game ids are well formed (`YYYYMMDD-NNNNNN`) and unique within the file
//! - Timestamps, when present, are RFC3339
//! - The table size is within the supported range
//! - The recorded moves replay from the seed under the rules
//! - The recorded winner and final scores match the replayed game
//!
//! Errors are collected using the shared `BatchValidationError` pattern so
//! every broken record is reported, not just the first.

use crate::error::{BatchValidationError, CliError};
use crate::formatters::format_scores;
use crate::io_utils::{jsonl_lines, read_text_auto};
use crate::validation::{is_valid_game_id, validate_player_count};
use hundredandten_engine::logger::GameRecord;
use std::collections::HashSet;
use std::io::Write;

/// The `usize` context is the record's 1-based line number.
type VerifyError = BatchValidationError<usize>;

/// Handle the verify command.
///
/// # Returns
///
/// `Ok(())` if every record passes, otherwise an `Err` that maps to exit code `2`.
///
/// # Example
///
/// ```no_run
/// # use std::io;
/// # use hundredandten_cli::commands::handle_verify_command;
/// let result = handle_verify_command("data/games.jsonl", &mut io::stdout(), &mut io::stderr());
/// ```
pub fn handle_verify_command(
    input: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text_auto(input)?;

    let mut errors: Vec<VerifyError> = Vec::new();
    let mut seen_ids = HashSet::new();
    let mut games = 0usize;

    for (line_no, line) in jsonl_lines(&content) {
        games += 1;
        let record: GameRecord = match serde_json::from_str(line) {
            Ok(r) => r,
            Err(e) => {
                errors.push(VerifyError {
                    item_context: line_no,
                    message: format!("Invalid JSON record: {}", e),
                });
                continue;
            }
        };
        for message in check_record(&record, &mut seen_ids) {
            errors.push(VerifyError {
                item_context: line_no,
                message,
            });
        }
    }

    if errors.is_empty() {
        writeln!(out, "Verify: OK (games={})", games)?;
        Ok(())
    } else {
        writeln!(out, "Verify: FAIL (games={})", games)?;
        writeln!(err)?;
        writeln!(err, "Errors found:")?;
        for error in &errors {
            writeln!(err, "  Line {}", error)?;
        }
        writeln!(err)?;
        Err(CliError::InvalidInput(format!(
            "{} problem(s) found in {}",
            errors.len(),
            input
        )))
    }
}

/// All problems with one parsed record.
fn check_record(record: &GameRecord, seen_ids: &mut HashSet<String>) -> Vec<String> {
    let mut problems = Vec::new();

    if !is_valid_game_id(&record.game_id) {
        problems.push(format!("Invalid game_id '{}'", record.game_id));
    } else if !seen_ids.insert(record.game_id.clone()) {
        problems.push(format!("Duplicate game_id '{}'", record.game_id));
    }

    if let Some(ts) = record.ts.as_deref()
        && chrono::DateTime::parse_from_rfc3339(ts).is_err()
    {
        problems.push(format!("Invalid timestamp '{}'", ts));
    }

    if let Err(msg) = validate_player_count(record.players.len()) {
        problems.push(msg);
        return problems;
    }

    let game = match record.replay() {
        Ok(game) => game,
        Err(e) => {
            problems.push(format!("Moves do not replay: {}", e));
            return problems;
        }
    };

    let winner = game.winner().map(|p| p.identifier.clone());
    if winner != record.winner {
        problems.push(format!(
            "Winner mismatch: recorded {}, replayed {}",
            record.winner.as_deref().unwrap_or("none"),
            winner.as_deref().unwrap_or("none")
        ));
    }

    let scores = game.scores();
    if scores != record.scores {
        problems.push(format!(
            "Score mismatch: recorded [{}], replayed [{}]",
            format_scores(&record.scores),
            format_scores(&scores)
        ));
    }

    problems
}
