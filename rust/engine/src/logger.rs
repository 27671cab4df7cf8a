use serde::{Deserialize, Serialize};

use crate::actions::Action;
use crate::errors::GameError;
use crate::events::Score;
use crate::game::Game;
use crate::player::Player;

/// Everything needed to rebuild a finished (or abandoned) game.
/// Serialized one record per line to JSONL game history files.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Unique identifier for this game (format: YYYYMMDD-NNNNNN)
    pub game_id: String,
    /// Game seed; every round's deck seed is derived from it
    pub seed: String,
    /// Seats in play order
    pub players: Vec<Player>,
    /// Every move in the order it was applied
    pub moves: Vec<Action>,
    /// Identifier of the winner, when the game finished
    pub winner: Option<String>,
    /// Final totals in seat order
    pub scores: Vec<Score>,
    /// Timestamp when the record was written (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
    /// Additional metadata (extensible JSON object)
    #[serde(default)]
    pub meta: Option<serde_json::Value>,
}

impl GameRecord {
    pub fn from_game(game_id: impl Into<String>, game: &Game) -> Self {
        Self {
            game_id: game_id.into(),
            seed: game.seed().to_string(),
            players: game.players().iter().cloned().collect(),
            moves: game.moves().to_vec(),
            winner: game.winner().map(|p| p.identifier.clone()),
            scores: game.scores(),
            ts: None,
            meta: None,
        }
    }

    /// Rebuild the game by applying the recorded moves to a fresh game with
    /// the same seed and seats.
    pub fn replay(&self) -> Result<Game, GameError> {
        Game::with_moves(self.players.clone(), self.seed.clone(), &self.moves)
    }
}

pub fn format_game_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct GameLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl GameLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// Open `path` for appending, continuing the id sequence after `seq`
    /// records that are already in the file.
    pub fn append<P: AsRef<Path>>(path: P, seq: u32) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq,
        })
    }

    /// A logger that only hands out ids, for tests and dry runs.
    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_game_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &GameRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
