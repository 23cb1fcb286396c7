//! Shared types for the DREAMTEAM selection engine.
//!
//! These types form the data model used across all modules.
//! The roster, engine and dashboard modules depend on them without
//! depending on each other.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Maximum number of players in a selected team.
pub const MAX_TEAM_SIZE: usize = 5;

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// Stable roster identifier for a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A player record as supplied by the roster. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Skill rating, 0–99 in practice (not enforced).
    pub rating: u32,
    pub position: Position,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, rating {})",
            self.id, self.name, self.position, self.rating,
        )
    }
}

impl Player {
    pub fn new(id: u32, name: impl Into<String>, rating: u32, position: Position) -> Self {
        Self {
            id: PlayerId(id),
            name: name.into(),
            rating,
            position,
        }
    }

    /// Qualitative band of this player's rating.
    pub fn rating_band(&self) -> RatingBand {
        RatingBand::of(self.rating)
    }

    /// Helper to build a test/sample player with sensible defaults.
    #[cfg(test)]
    pub fn sample(id: u32, rating: u32) -> Self {
        Player::new(id, format!("Player {id}"), rating, Position::Pivot)
    }
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Playing role. Tags outside the four known roles are kept verbatim in
/// `Other`; they still count toward team size and power.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Position {
    Pivot,
    Flank,
    Anchor,
    Goalkeeper,
    Other(String),
}

impl Position {
    /// The four known roles, in distribution order.
    pub const KNOWN: [Position; 4] = [
        Position::Pivot,
        Position::Flank,
        Position::Anchor,
        Position::Goalkeeper,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Position::Pivot => "Pivot",
            Position::Flank => "Flank",
            Position::Anchor => "Anchor",
            Position::Goalkeeper => "Goalkeeper",
            Position::Other(tag) => tag,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact-match parse. Anything else becomes `Other`, so this never fails.
impl From<String> for Position {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "Pivot" => Position::Pivot,
            "Flank" => Position::Flank,
            "Anchor" => Position::Anchor,
            "Goalkeeper" => Position::Goalkeeper,
            _ => Position::Other(tag),
        }
    }
}

impl From<&str> for Position {
    fn from(tag: &str) -> Self {
        Position::from(tag.to_string())
    }
}

impl From<Position> for String {
    fn from(position: Position) -> Self {
        match position {
            Position::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

/// Rating band shown next to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RatingBand {
    /// 90 and above
    Elite,
    /// 80–89
    Strong,
    Developing,
}

impl RatingBand {
    pub fn of(rating: u32) -> Self {
        if rating >= 90 {
            RatingBand::Elite
        } else if rating >= 80 {
            RatingBand::Strong
        } else {
            RatingBand::Developing
        }
    }
}

impl fmt::Display for RatingBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RatingBand::Elite => write!(f, "Elite"),
            RatingBand::Strong => write!(f, "Strong"),
            RatingBand::Developing => write!(f, "Developing"),
        }
    }
}

/// How urgent a status or notice is for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Qualitative team-quality tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamStatus {
    NoPlayers,
    Incomplete,
    Elite,
    Solid,
    NeedsImprovement,
}

impl TeamStatus {
    pub fn severity(&self) -> Severity {
        match self {
            TeamStatus::NoPlayers => Severity::Error,
            TeamStatus::Incomplete | TeamStatus::NeedsImprovement => Severity::Warning,
            TeamStatus::Elite => Severity::Success,
            TeamStatus::Solid => Severity::Info,
        }
    }

    /// Three-way label of the quality gauge. Anything short of a Solid
    /// full team reads as needing improvement.
    pub fn quality_label(&self) -> &'static str {
        match self {
            TeamStatus::Elite => "Elite",
            TeamStatus::Solid => "Solid",
            _ => "Needs improvement",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            TeamStatus::NoPlayers => "No players selected yet",
            TeamStatus::Incomplete => "Team incomplete",
            TeamStatus::Elite => "Elite team!",
            TeamStatus::Solid => "Solid team",
            TeamStatus::NeedsImprovement => "Team needs improvement",
        }
    }
}

impl fmt::Display for TeamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Fill level of the team, as shown on the capacity gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CapacityLabel {
    Complete,
    Forming,
    NeedsPlayers,
}

impl CapacityLabel {
    pub fn of(members: usize) -> Self {
        if members >= MAX_TEAM_SIZE {
            CapacityLabel::Complete
        } else if members >= 3 {
            CapacityLabel::Forming
        } else {
            CapacityLabel::NeedsPlayers
        }
    }
}

impl fmt::Display for CapacityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CapacityLabel::Complete => write!(f, "Team complete"),
            CapacityLabel::Forming => write!(f, "Taking shape"),
            CapacityLabel::NeedsPlayers => write!(f, "Needs players"),
        }
    }
}

// ---------------------------------------------------------------------------
// Derived statistics
// ---------------------------------------------------------------------------

/// One bucket of the position distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionShare {
    pub position: Position,
    pub count: usize,
    /// Rounded independently per bucket; buckets may sum to 99–101.
    pub percentage: u32,
}

/// Aggregates recomputed from the current members on every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedStats {
    pub member_count: usize,
    pub total_power: u64,
    /// Rounded to one decimal; 0.0 for an empty team.
    pub average_rating: f64,
    /// Always the four known positions, in `Position::KNOWN` order.
    pub position_distribution: Vec<PositionShare>,
    /// Sum of the bucket percentages, not renormalised.
    pub percentage_total: u32,
    /// members / MAX_TEAM_SIZE
    pub capacity_ratio: f64,
    pub capacity: CapacityLabel,
    /// total_power / 1000, unclamped.
    pub power_ratio: f64,
}

impl fmt::Display for DerivedStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buckets: Vec<String> = self
            .position_distribution
            .iter()
            .map(|s| format!("{}={}({}%)", s.position, s.count, s.percentage))
            .collect();
        write!(
            f,
            "{}/{} players | power={} | avg={:.1} | {}",
            self.member_count,
            MAX_TEAM_SIZE,
            self.total_power,
            self.average_rating,
            buckets.join(" "),
        )
    }
}

impl DerivedStats {
    /// Distribution bucket for a known position.
    pub fn share(&self, position: &Position) -> Option<&PositionShare> {
        self.position_distribution
            .iter()
            .find(|s| &s.position == position)
    }
}

// ---------------------------------------------------------------------------
// Outcomes & notices
// ---------------------------------------------------------------------------

/// Successful result of an engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Selected,
    Removed,
    /// `remove` of a player that wasn't selected.
    NotSelected,
    Cleared { count: usize },
}

impl Outcome {
    /// The notice this outcome should raise, if any.
    pub fn notice_kind(&self) -> Option<NoticeKind> {
        match self {
            Outcome::Cleared { .. } => Some(NoticeKind::TeamCleared),
            _ => None,
        }
    }
}

/// Outcome code carried by a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeKind {
    TeamFull,
    DuplicateSelection,
    EmptySelection,
    TeamCleared,
}

impl NoticeKind {
    pub fn message(&self) -> &'static str {
        match self {
            NoticeKind::TeamFull => "Team is full! Maximum 5 players",
            NoticeKind::DuplicateSelection => "Player already selected",
            NoticeKind::EmptySelection => "No players to remove",
            NoticeKind::TeamCleared => "All players removed",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            NoticeKind::TeamCleared => Severity::Success,
            _ => Severity::Warning,
        }
    }
}

/// A short-lived, human-readable message for transient display.
///
/// The engine only produces these; expiry is owned by whoever displays them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub id: Uuid,
    pub kind: NoticeKind,
    pub severity: Severity,
    pub message: String,
    pub issued_at: DateTime<Utc>,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

impl Notice {
    pub fn new(kind: NoticeKind) -> Self {
        Self::at(kind, Utc::now())
    }

    pub fn at(kind: NoticeKind, issued_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            severity: kind.severity(),
            message: kind.message().to_string(),
            issued_at,
        }
    }

    /// Age of this notice at `now`.
    pub fn age(&self, now: DateTime<Utc>) -> chrono::Duration {
        now - self.issued_at
    }
}

impl From<&SelectionError> for Notice {
    fn from(err: &SelectionError) -> Self {
        Notice::new(err.notice_kind())
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Team-composition policy violations. All are recoverable and leave the
/// selection unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("Team is full: capacity {capacity}")]
    TeamFull { capacity: usize },

    #[error("Player already selected: {id}")]
    DuplicateSelection { id: PlayerId },

    #[error("No players selected")]
    EmptySelection,
}

impl SelectionError {
    pub fn notice_kind(&self) -> NoticeKind {
        match self {
            SelectionError::TeamFull { .. } => NoticeKind::TeamFull,
            SelectionError::DuplicateSelection { .. } => NoticeKind::DuplicateSelection,
            SelectionError::EmptySelection => NoticeKind::EmptySelection,
        }
    }
}

/// Problems with a roster file.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("Duplicate player id {id} in roster ({first} and {second})")]
    DuplicateId {
        id: PlayerId,
        first: String,
        second: String,
    },

    #[error("Unsupported roster format: {0} (expected .toml or .json)")]
    UnsupportedFormat(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
