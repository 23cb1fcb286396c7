//! Dashboard API route handlers.
//!
//! All endpoints return JSON. State is shared via `Arc<DashboardState>`.
//! Handlers take the engine lock before the notice lock.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::info;

use super::notice::NoticeBoard;
use crate::engine::TeamSelectionEngine;
use crate::roster::RosterCatalog;
use crate::types::{
    DerivedStats, Notice, Player, PlayerId, Position, RatingBand, Severity, TeamStatus,
};

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

/// Shared state accessible by all route handlers.
pub struct DashboardState {
    pub roster: RosterCatalog,
    pub engine: RwLock<TeamSelectionEngine>,
    pub notices: RwLock<NoticeBoard>,
}

impl DashboardState {
    pub fn new(roster: RosterCatalog, notice_ttl: Duration) -> Self {
        Self {
            roster,
            engine: RwLock::new(TeamSelectionEngine::new()),
            notices: RwLock::new(NoticeBoard::new(notice_ttl)),
        }
    }
}

pub type AppState = Arc<DashboardState>;

// ---------------------------------------------------------------------------
// Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct RosterEntry {
    pub id: PlayerId,
    pub name: String,
    pub rating: u32,
    pub position: Position,
    pub rating_band: RatingBand,
    pub selected: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: TeamStatus,
    pub severity: Severity,
    pub message: String,
    /// Elite / Solid / Needs improvement, as on the quality gauge.
    pub quality_label: String,
}

impl From<TeamStatus> for StatusResponse {
    fn from(status: TeamStatus) -> Self {
        Self {
            status,
            severity: status.severity(),
            message: status.message().to_string(),
            quality_label: status.quality_label().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TeamView {
    pub members: Vec<Player>,
    pub remaining_slots: usize,
    pub stats: DerivedStats,
    pub status: StatusResponse,
    pub notice: Option<Notice>,
}

impl TeamView {
    fn build(engine: &TeamSelectionEngine, notices: &NoticeBoard) -> Self {
        Self {
            members: engine.members().to_vec(),
            remaining_slots: engine.remaining_slots(),
            stats: engine.derived_stats(),
            status: engine.team_status().into(),
            notice: notices.current(Utc::now()).cloned(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Failure responses for the mutating endpoints.
#[derive(Debug)]
pub enum ApiError {
    /// The id isn't in the roster.
    UnknownPlayer(PlayerId),
    /// The engine refused the operation; the body is the notice it raised.
    Rejected(Notice),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::UnknownPlayer(id) => (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: format!("Unknown player {id}"),
                }),
            )
                .into_response(),
            ApiError::Rejected(notice) => (StatusCode::CONFLICT, Json(notice)).into_response(),
        }
    }
}

// ---------------------------------------------------------------------------
// Route handlers
// ---------------------------------------------------------------------------

/// GET /api/roster
pub async fn get_roster(State(state): State<AppState>) -> Json<Vec<RosterEntry>> {
    let engine = state.engine.read().await;
    let entries = state
        .roster
        .iter()
        .map(|p| RosterEntry {
            id: p.id,
            name: p.name.clone(),
            rating: p.rating,
            position: p.position.clone(),
            rating_band: p.rating_band(),
            selected: engine.contains(p.id),
        })
        .collect();
    Json(entries)
}

/// GET /api/team
pub async fn get_team(State(state): State<AppState>) -> Json<TeamView> {
    let engine = state.engine.read().await;
    let notices = state.notices.read().await;
    Json(TeamView::build(&engine, &notices))
}

/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> Json<DerivedStats> {
    let engine = state.engine.read().await;
    Json(engine.derived_stats())
}

/// GET /api/status
pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    let engine = state.engine.read().await;
    Json(engine.team_status().into())
}

/// GET /api/notice
pub async fn get_notice(State(state): State<AppState>) -> Json<Option<Notice>> {
    let notices = state.notices.read().await;
    Json(notices.current(Utc::now()).cloned())
}

/// POST /api/team/players/:id
pub async fn select_player(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<TeamView>, ApiError> {
    let id = PlayerId(id);
    let player = state
        .roster
        .get(id)
        .cloned()
        .ok_or(ApiError::UnknownPlayer(id))?;

    let mut engine = state.engine.write().await;
    let mut notices = state.notices.write().await;
    match engine.select(player) {
        Ok(_) => Ok(Json(TeamView::build(&engine, &notices))),
        Err(err) => {
            let notice = Notice::from(&err);
            notices.post(notice.clone());
            Err(ApiError::Rejected(notice))
        }
    }
}

/// DELETE /api/team/players/:id
pub async fn remove_player(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Json<TeamView> {
    let mut engine = state.engine.write().await;
    let notices = state.notices.read().await;
    engine.remove(PlayerId(id));
    Json(TeamView::build(&engine, &notices))
}

/// DELETE /api/team
pub async fn remove_all(State(state): State<AppState>) -> Result<Json<TeamView>, ApiError> {
    let mut engine = state.engine.write().await;
    let mut notices = state.notices.write().await;
    match engine.remove_all() {
        Ok(outcome) => {
            if let Some(kind) = outcome.notice_kind() {
                notices.post(Notice::new(kind));
            }
            info!(?outcome, "Team cleared via dashboard");
            Ok(Json(TeamView::build(&engine, &notices)))
        }
        Err(err) => {
            let notice = Notice::from(&err);
            notices.post(notice.clone());
            Err(ApiError::Rejected(notice))
        }
    }
}

/// GET /health
pub async fn health() -> StatusCode {
    StatusCode::OK
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
