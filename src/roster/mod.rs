//! Roster catalog — the read-only player pool.
//!
//! Defines the `RosterSource` trait and the `RosterCatalog` built from it.
//! The catalog is loaded once at startup and never mutated afterwards.

pub mod file;

use anyhow::Result;
use std::collections::HashMap;
use tracing::{info, warn};

use crate::types::{Player, PlayerId, RosterError};

pub use file::FileRosterSource;

/// Anything that can supply the player pool.
#[cfg_attr(test, mockall::automock)]
pub trait RosterSource {
    /// Load every player, in display order.
    fn load(&self) -> Result<Vec<Player>>;

    /// Source name for logging.
    fn name(&self) -> &str;
}

/// Immutable, ordered player pool with unique ids.
#[derive(Debug, Clone, Default)]
pub struct RosterCatalog {
    players: Vec<Player>,
    index: HashMap<PlayerId, usize>,
}

impl RosterCatalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(players: Vec<Player>) -> Result<Self, RosterError> {
        let mut index = HashMap::with_capacity(players.len());
        for (i, player) in players.iter().enumerate() {
            if let Some(&first) = index.get(&player.id) {
                let first: &Player = &players[first];
                return Err(RosterError::DuplicateId {
                    id: player.id,
                    first: first.name.clone(),
                    second: player.name.clone(),
                });
            }
            index.insert(player.id, i);
        }
        Ok(Self { players, index })
    }

    /// Load and validate the catalog from a source.
    pub fn from_source(source: &dyn RosterSource) -> Result<Self> {
        let players = source.load()?;
        let catalog = Self::new(players)?;

        if catalog.is_empty() {
            warn!(source = source.name(), "Roster is empty — nothing to select");
        } else {
            info!(
                source = source.name(),
                players = catalog.len(),
                "Roster loaded"
            );
        }
        Ok(catalog)
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.index.get(&id).map(|&i| &self.players[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Player> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl<'a> IntoIterator for &'a RosterCatalog {
    type Item = &'a Player;
    type IntoIter = std::slice::Iter<'a, Player>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
