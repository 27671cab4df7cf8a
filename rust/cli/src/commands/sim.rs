//! Simulation command handler for automated games.
//!
//! Plays complete games between automated seats and optionally records them
//! as JSONL game records. Game `i` of a run uses the seed `<base>-<i>`, so a
//! run can be resumed or reproduced from its base seed alone.
//!
//! # Environment Variables
//!
//! - `HUNDREDANDTEN_SIM_BREAK_AFTER`: Stop after N games with exit code 130 (for testing)

use crate::config;
use crate::error::CliError;
use crate::io_utils::{jsonl_lines, read_text_auto};
use crate::ui;
use crate::validation::validate_player_count;
use hundredandten_ai::create_ai;
use hundredandten_engine::game::Game;
use hundredandten_engine::logger::{GameLogger, GameRecord};
use hundredandten_engine::player::Player;
use hundredandten_engine::policy::DecisionPolicy;
use hundredandten_engine::seed::new_game_seed;
use std::collections::HashSet;
use std::io::Write;
use std::sync::Arc;
use tracing::{debug, info};

/// Handle the sim command: run automated games.
///
/// # Arguments
///
/// * `games` - Total number of games in the run, including resumed ones
/// * `output` - Path to write game records (JSONL format)
/// * `seed` - Base seed; falls back to the resumed file's base seed, then config
/// * `players` - Seats per game (2-4)
/// * `resume` - Existing record file to append to; its games are not replayed
pub fn handle_sim_command(
    games: u64,
    output: Option<String>,
    seed: Option<String>,
    players: Option<usize>,
    resume: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let total = usize::try_from(games)
        .map_err(|_| CliError::InvalidInput("games is too large".to_string()))?;
    if total == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }

    let cfg = config::load()?;
    let players = validate_player_count(players.unwrap_or(cfg.players))
        .map_err(CliError::InvalidInput)?;
    let policy: Arc<dyn DecisionPolicy> = create_ai(&cfg.ai_version)
        .map(Arc::from)
        .ok_or_else(|| CliError::Config(format!("unknown ai_version '{}'", cfg.ai_version)))?;

    let mut completed = 0usize;
    let mut resumed_seed = None;
    let mut logger = None;

    if let Some(path) = resume.as_ref() {
        let existing = read_existing(path, err)?;
        completed = existing.game_ids;
        resumed_seed = existing.base_seed;
        if existing.duplicates > 0 {
            ui::display_warning(
                err,
                &format!("{} duplicate game_id(s) skipped", existing.duplicates),
            )?;
        }
        writeln!(out, "Resumed from {}", completed)?;
        let seq = u32::try_from(completed)
            .map_err(|_| CliError::InvalidInput("too many games to resume".to_string()))?;
        logger = Some(GameLogger::append(path, seq)?);
    } else if let Some(path) = output.as_ref() {
        logger = Some(GameLogger::create(path)?);
    }

    let base_seed = seed
        .or(resumed_seed)
        .or(cfg.seed)
        .unwrap_or_else(new_game_seed);
    let break_after = std::env::var("HUNDREDANDTEN_SIM_BREAK_AFTER")
        .ok()
        .and_then(|v| v.parse::<usize>().ok());

    let seats: Vec<Player> = (1..=players)
        .map(|i| Player::automated(format!("bot-{}", i)))
        .collect();
    info!(base_seed = %base_seed, players, total, "starting simulation");

    let start = completed;
    for i in start..total {
        let game_seed = format!("{}-{}", base_seed, i);
        let game = Game::new(seats.clone(), game_seed.clone())?.with_policy(policy.clone())?;
        debug!(
            game_seed = %game_seed,
            rounds = game.rounds().len(),
            winner = game.winner().map(|p| p.identifier.as_str()),
            "game finished"
        );

        if let Some(logger) = logger.as_mut() {
            let mut record = GameRecord::from_game(logger.next_id(), &game);
            record.meta = Some(serde_json::json!({
                "base_seed": base_seed,
                "index": i,
                "ai": policy.name(),
            }));
            logger.write(&record)?;
        }

        completed += 1;

        if let Some(b) = break_after
            && completed == b
        {
            writeln!(out, "Interrupted: saved {}/{}", completed, total)?;
            return Err(CliError::Interrupted(format!(
                "saved {}/{}",
                completed, total
            )));
        }
    }

    writeln!(out, "Simulated: {} games", completed)?;
    Ok(())
}

struct ExistingRecords {
    game_ids: usize,
    duplicates: usize,
    base_seed: Option<String>,
}

/// Count the distinct games already recorded at `path`. A missing file counts as empty.
fn read_existing(path: &str, err: &mut dyn Write) -> Result<ExistingRecords, CliError> {
    let content = match read_text_auto(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };

    let mut seen = HashSet::new();
    let mut duplicates = 0usize;
    let mut base_seed = None;
    for (line_no, line) in jsonl_lines(&content) {
        let record: GameRecord = parse_json_or_continue!(line, err, format!("line {}", line_no));
        if base_seed.is_none() {
            base_seed = record
                .meta
                .as_ref()
                .and_then(|m| m.get("base_seed"))
                .and_then(|v| v.as_str())
                .map(str::to_string);
        }
        if !seen.insert(record.game_id) {
            duplicates += 1;
        }
    }

    Ok(ExistingRecords {
        game_ids: seen.len(),
        duplicates,
        base_seed,
    })
}
