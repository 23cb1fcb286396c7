//! End-to-end scenarios for the team selection engine.
//!
//! Drives the engine through the public API only, with a roster loaded
//! the same way the binary loads it.

use dreamteam::engine::TeamSelectionEngine;
use dreamteam::roster::{FileRosterSource, RosterCatalog};
use dreamteam::types::*;

fn player(id: u32, rating: u32, position: Position) -> Player {
    Player::new(id, format!("Player {id}"), rating, position)
}

fn engine_with(players: Vec<Player>) -> TeamSelectionEngine {
    let mut engine = TeamSelectionEngine::new();
    for p in players {
        engine.select(p).expect("select within capacity");
    }
    engine
}

fn five_with_power(per_player: u32) -> TeamSelectionEngine {
    engine_with((1..=5).map(|i| player(i, per_player, Position::Flank)).collect())
}

#[test]
fn empty_selection_stats_are_zeroed() {
    let engine = TeamSelectionEngine::new();
    let stats = engine.derived_stats();
    assert_eq!(stats.total_power, 0);
    assert_eq!(stats.average_rating, 0.0);
    assert_eq!(stats.capacity_ratio, 0.0);
    assert!(stats.position_distribution.iter().all(|s| s.percentage == 0));
    assert_eq!(engine.team_status(), TeamStatus::NoPlayers);
}

#[test]
fn sample_squad_power_and_average() {
    let engine = engine_with(vec![
        player(1, 88, Position::Pivot),
        player(2, 92, Position::Flank),
        player(3, 75, Position::Anchor),
        player(4, 80, Position::Goalkeeper),
        player(5, 95, Position::Flank),
    ]);
    let stats = engine.derived_stats();
    assert_eq!(stats.total_power, 430);
    assert_eq!(stats.average_rating, 86.0);
    assert_eq!(stats.share(&Position::Flank).unwrap().count, 2);
    assert_eq!(stats.share(&Position::Flank).unwrap().percentage, 40);
    assert_eq!(stats.percentage_total, 100);
    assert_eq!(stats.capacity, CapacityLabel::Complete);
}

#[test]
fn all_pivot_distribution() {
    let engine = engine_with((1..=5).map(|i| player(i, 80, Position::Pivot)).collect());
    let stats = engine.derived_stats();
    for share in &stats.position_distribution {
        if share.position == Position::Pivot {
            assert_eq!((share.count, share.percentage), (5, 100));
        } else {
            assert_eq!((share.count, share.percentage), (0, 0));
        }
    }
}

#[test]
fn three_strong_players_are_still_incomplete() {
    let engine = engine_with(vec![
        player(1, 300, Position::Pivot),
        player(2, 300, Position::Flank),
        player(3, 250, Position::Anchor),
    ]);
    assert_eq!(engine.derived_stats().total_power, 850);
    assert_eq!(engine.team_status(), TeamStatus::Incomplete);
}

#[test]
fn full_team_tiers() {
    assert_eq!(five_with_power(164).team_status(), TeamStatus::Elite); // 820
    assert_eq!(five_with_power(130).team_status(), TeamStatus::Solid); // 650
    assert_eq!(five_with_power(80).team_status(), TeamStatus::NeedsImprovement); // 400
}

#[test]
fn full_team_rejects_sixth_player_unchanged() {
    let mut engine = five_with_power(80);
    let before = engine.members().to_vec();

    let err = engine.select(player(6, 99, Position::Pivot)).unwrap_err();
    assert_eq!(err, SelectionError::TeamFull { capacity: MAX_TEAM_SIZE });
    assert_eq!(engine.members(), before.as_slice());

    let notice = Notice::from(&err);
    assert_eq!(notice.message, "Team is full! Maximum 5 players");
}

#[test]
fn duplicate_selection_rejected_unchanged() {
    let mut engine = engine_with(vec![player(1, 80, Position::Pivot)]);
    let err = engine.select(player(1, 80, Position::Pivot)).unwrap_err();
    assert_eq!(err, SelectionError::DuplicateSelection { id: PlayerId(1) });
    assert_eq!(engine.len(), 1);
    assert_eq!(Notice::from(&err).message, "Player already selected");
}

#[test]
fn remove_all_lifecycle() {
    let mut engine = TeamSelectionEngine::new();
    let err = engine.remove_all().unwrap_err();
    assert_eq!(Notice::from(&err).message, "No players to remove");

    engine.select(player(1, 80, Position::Pivot)).unwrap();
    engine.select(player(2, 80, Position::Flank)).unwrap();
    let outcome = engine.remove_all().unwrap();
    assert_eq!(outcome, Outcome::Cleared { count: 2 });
    let notice = Notice::new(outcome.notice_kind().unwrap());
    assert_eq!(notice.message, "All players removed");
    assert_eq!(notice.severity, Severity::Success);
    assert!(engine.is_empty());
}

#[test]
fn stats_are_stable_between_mutations() {
    let mut engine = engine_with(vec![
        player(1, 88, Position::Pivot),
        player(2, 70, Position::Other("Sweeper".into())),
    ]);
    let first = engine.derived_stats();
    assert_eq!(first, engine.derived_stats());

    engine.remove(PlayerId(2));
    assert_ne!(first, engine.derived_stats());
}

#[test]
fn sample_roster_file_drives_engine() {
    let source = FileRosterSource::new("roster.toml");
    let catalog = RosterCatalog::from_source(&source).expect("sample roster loads");
    assert!(catalog.len() > MAX_TEAM_SIZE);

    let mut engine = TeamSelectionEngine::new();
    for p in catalog.iter().take(MAX_TEAM_SIZE) {
        engine.select(p.clone()).unwrap();
    }
    assert!(engine.is_full());
    assert_eq!(engine.available(&catalog).len(), catalog.len() - MAX_TEAM_SIZE);

    let extra = catalog.iter().nth(MAX_TEAM_SIZE).unwrap().clone();
    assert!(matches!(
        engine.select(extra),
        Err(SelectionError::TeamFull { .. })
    ));
}
