//! Team selection engine — owns the selected team and enforces its
//! composition rules.
//!
//! The team holds at most `MAX_TEAM_SIZE` players, in selection order, with
//! no repeated ids. Every operation either succeeds or returns a
//! `SelectionError` with the team untouched.

use tracing::{debug, info, warn};

use super::stats;
use crate::roster::RosterCatalog;
use crate::types::{
    DerivedStats, Outcome, Player, PlayerId, SelectionError, TeamStatus, MAX_TEAM_SIZE,
};

/// Owner of the currently selected team.
///
/// One instance per session. Callers mutate it through `select`, `remove`
/// and `remove_all` and re-read the derived views afterwards.
#[derive(Debug, Clone, Default)]
pub struct TeamSelectionEngine {
    members: Vec<Player>,
}

impl TeamSelectionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Mutations -----------------------------------------------------------

    /// Append a player to the team.
    ///
    /// Capacity is checked before uniqueness, so selecting an already
    /// selected player on a full team reports `TeamFull`.
    pub fn select(&mut self, player: Player) -> Result<Outcome, SelectionError> {
        if self.members.len() >= MAX_TEAM_SIZE {
            warn!(
                player_id = %player.id,
                capacity = MAX_TEAM_SIZE,
                "Select rejected: team is full"
            );
            return Err(SelectionError::TeamFull {
                capacity: MAX_TEAM_SIZE,
            });
        }
        if self.contains(player.id) {
            warn!(player_id = %player.id, "Select rejected: already selected");
            return Err(SelectionError::DuplicateSelection { id: player.id });
        }

        info!(
            player_id = %player.id,
            name = %player.name,
            rating = player.rating,
            slot = self.members.len() + 1,
            "Player selected"
        );
        self.members.push(player);
        Ok(Outcome::Selected)
    }

    /// Drop a player from the team. Removing someone who isn't selected is a
    /// no-op, not an error.
    pub fn remove(&mut self, id: PlayerId) -> Outcome {
        let before = self.members.len();
        self.members.retain(|p| p.id != id);

        if self.members.len() < before {
            info!(player_id = %id, remaining = self.members.len(), "Player removed");
            Outcome::Removed
        } else {
            debug!(player_id = %id, "Remove ignored: not selected");
            Outcome::NotSelected
        }
    }

    /// Clear the whole team. Fails on an empty team.
    pub fn remove_all(&mut self) -> Result<Outcome, SelectionError> {
        if self.members.is_empty() {
            warn!("Remove-all rejected: no players selected");
            return Err(SelectionError::EmptySelection);
        }

        let count = self.members.len();
        self.members.clear();
        info!(count, "All players removed");
        Ok(Outcome::Cleared { count })
    }

    // -- Views ---------------------------------------------------------------

    /// Selected players in selection order.
    pub fn members(&self) -> &[Player] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= MAX_TEAM_SIZE
    }

    pub fn remaining_slots(&self) -> usize {
        MAX_TEAM_SIZE.saturating_sub(self.members.len())
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.members.iter().any(|p| p.id == id)
    }

    /// Aggregate statistics for the current team. Never fails.
    pub fn derived_stats(&self) -> DerivedStats {
        stats::compute(&self.members)
    }

    /// Quality tier for the current team.
    pub fn team_status(&self) -> TeamStatus {
        stats::classify(self.members.len(), stats::total_power(&self.members))
    }

    /// Catalog players not currently selected, in catalog order.
    pub fn available<'a>(&self, catalog: &'a RosterCatalog) -> Vec<&'a Player> {
        catalog.iter().filter(|p| !self.contains(p.id)).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
