//! File-backed roster source.
//!
//! Reads the player pool from a TOML file (`[[players]]` tables) or a JSON
//! file (either a bare array or `{ "players": [...] }`), chosen by
//! extension.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::RosterSource;
use crate::types::{Player, RosterError};

#[derive(Debug, Deserialize)]
struct RosterFile {
    #[serde(default)]
    players: Vec<Player>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonRoster {
    Bare(Vec<Player>),
    Wrapped(RosterFile),
}

/// Roster loaded from a `.toml` or `.json` file on disk.
pub struct FileRosterSource {
    path: PathBuf,
    name: String,
}

impl FileRosterSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let name = format!("file:{}", path.display());
        Self { path, name }
    }
}

impl RosterSource for FileRosterSource {
    fn load(&self) -> Result<Vec<Player>> {
        let path = self.path.display().to_string();
        let ext = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        let contents = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read roster file: {path}"))?;

        let players = match ext.as_str() {
            "toml" => parse_toml(&contents)
                .with_context(|| format!("Failed to parse roster file: {path}"))?,
            "json" => parse_json(&contents)
                .with_context(|| format!("Failed to parse roster file: {path}"))?,
            _ => return Err(RosterError::UnsupportedFormat(path).into()),
        };

        debug!(path = %path, players = players.len(), "Roster file read");
        Ok(players)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn parse_toml(contents: &str) -> Result<Vec<Player>> {
    let file: RosterFile = toml::from_str(contents)?;
    Ok(file.players)
}

fn parse_json(contents: &str) -> Result<Vec<Player>> {
    let roster: JsonRoster = serde_json::from_str(contents)?;
    Ok(match roster {
        JsonRoster::Bare(players) => players,
        JsonRoster::Wrapped(file) => file.players,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
