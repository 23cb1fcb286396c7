//! Team statistics.
//!
//! Pure functions of the member list: power, average rating, position
//! distribution, capacity and the quality tier. Nothing here reads or
//! mutates engine state, so every view can be recomputed on demand.

use tracing::debug;

use crate::types::{
    CapacityLabel, DerivedStats, Player, Position, PositionShare, TeamStatus, MAX_TEAM_SIZE,
};

/// Power at or above which a full team is Elite.
pub const ELITE_POWER: u64 = 800;
/// Power at or above which a full team is Solid.
pub const SOLID_POWER: u64 = 600;
/// Full scale of the power gauge.
pub const POWER_GAUGE_SCALE: f64 = 1000.0;

/// Sum of member ratings. Accumulates in `u64` since ratings are unbounded.
pub fn total_power(members: &[Player]) -> u64 {
    members.iter().map(|p| u64::from(p.rating)).sum()
}

/// Mean rating rounded to one decimal. 0.0 for an empty team.
pub fn average_rating(members: &[Player]) -> f64 {
    if members.is_empty() {
        return 0.0;
    }
    let avg = total_power(members) as f64 / members.len() as f64;
    (avg * 10.0).round() / 10.0
}

/// Count and percentage for each known position.
///
/// Percentages are rounded per bucket and never renormalised, so a 1/1/1
/// team shows 33% three times. Members with an unknown position count
/// toward the denominator but fall in no bucket.
pub fn position_distribution(members: &[Player]) -> Vec<PositionShare> {
    let total = members.len();
    Position::KNOWN
        .into_iter()
        .map(|position| {
            let count = members.iter().filter(|p| p.position == position).count();
            let percentage = if total == 0 {
                0
            } else {
                (count as f64 / total as f64 * 100.0).round() as u32
            };
            PositionShare {
                position,
                count,
                percentage,
            }
        })
        .collect()
}

/// Fraction of the team slots in use.
pub fn capacity_ratio(members: &[Player]) -> f64 {
    members.len() as f64 / MAX_TEAM_SIZE as f64
}

/// Quality tier. Size checks come first, so an incomplete team is never
/// rated on power.
pub fn classify(member_count: usize, total_power: u64) -> TeamStatus {
    if member_count == 0 {
        TeamStatus::NoPlayers
    } else if member_count < MAX_TEAM_SIZE {
        TeamStatus::Incomplete
    } else if total_power >= ELITE_POWER {
        TeamStatus::Elite
    } else if total_power >= SOLID_POWER {
        TeamStatus::Solid
    } else {
        TeamStatus::NeedsImprovement
    }
}

/// Compute every derived view in one pass over the members.
pub fn compute(members: &[Player]) -> DerivedStats {
    let total_power = total_power(members);
    let position_distribution = position_distribution(members);
    let percentage_total = position_distribution.iter().map(|s| s.percentage).sum();

    let stats = DerivedStats {
        member_count: members.len(),
        total_power,
        average_rating: average_rating(members),
        position_distribution,
        percentage_total,
        capacity_ratio: capacity_ratio(members),
        capacity: CapacityLabel::of(members.len()),
        power_ratio: total_power as f64 / POWER_GAUGE_SCALE,
    };

    debug!(
        members = stats.member_count,
        power = stats.total_power,
        avg = stats.average_rating,
        "Team stats recomputed"
    );

    stats
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
