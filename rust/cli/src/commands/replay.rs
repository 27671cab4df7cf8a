//! Replay command handler.
//!
//! Rebuilds every game in a JSONL record file from its seed and moves and
//! prints the full event log, including every dealt hand. Plain and
//! Zstandard-compressed (.zst) files are both accepted.

use crate::error::CliError;
use crate::formatters::{format_cards, format_event, format_scores};
use crate::io_utils::{jsonl_lines, read_text_auto};
use crate::ui;
use hundredandten_engine::events::Event;
use hundredandten_engine::logger::GameRecord;
use std::io::Write;

/// Handle the replay command.
///
/// Records that fail to parse or replay are reported on `err` and skipped.
///
/// # Returns
///
/// `Ok(())` once the file has been read, `Err(CliError)` if it cannot be read
pub fn handle_replay_command(
    input: &str,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = read_text_auto(input)?;

    let mut total = 0usize;
    let mut replayed = 0usize;
    for (line_no, line) in jsonl_lines(&content) {
        total += 1;
        let record: GameRecord = parse_json_or_continue!(line, err, format!("line {}", line_no));

        let game = match record.replay() {
            Ok(game) => game,
            Err(e) => {
                ui::write_error(
                    err,
                    &format!("Cannot replay game {}: {}", record.game_id, e),
                )?;
                continue;
            }
        };
        replayed += 1;

        writeln!(out, "Game {} (Seed: {})", record.game_id, record.seed)?;
        writeln!(out, "═══════════════════════════════════════")?;
        for event in game.events() {
            writeln!(out, "{}", format_event(&event))?;
            if let Event::RoundStart { hands, .. } = &event {
                for hand in hands {
                    writeln!(out, "  {}: {}", hand.identifier, format_cards(&hand.cards))?;
                }
            }
        }
        writeln!(out, "Final scores: {}", format_scores(&game.scores()))?;
        writeln!(out)?;
    }

    if total == 0 {
        writeln!(out, "No games found in file.")?;
    } else {
        writeln!(out, "Replayed: {}/{} games", replayed, total)?;
    }
    Ok(())
}
