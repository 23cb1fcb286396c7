//! Dashboard — Axum web server exposing the team builder as a JSON API.
//!
//! Every user action (select, remove, remove all) is a request; every view
//! (roster, team, stats, status, notice) is re-read after it.
//! CORS enabled for local development.

pub mod notice;
pub mod routes;

use anyhow::{Context, Result};
use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::future::Future;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub use notice::NoticeBoard;
pub use routes::{AppState, DashboardState};

/// Serve the dashboard until `shutdown` resolves.
pub async fn serve<F>(state: AppState, port: u16, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind dashboard port {port}"))?;
    info!(port, "Dashboard server starting on http://localhost:{port}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Dashboard server error")?;

    Ok(())
}

/// Build the Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/api/roster", get(routes::get_roster))
        .route("/api/team", get(routes::get_team).delete(routes::remove_all))
        .route(
            "/api/team/players/:id",
            post(routes::select_player).delete(routes::remove_player),
        )
        .route("/api/stats", get(routes::get_stats))
        .route("/api/status", get(routes::get_status))
        .route("/api/notice", get(routes::get_notice))
        .route("/health", get(routes::health))
        .layer(cors)
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::RosterCatalog;
    use crate::types::{Player, Position};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let roster = RosterCatalog::new(
            (1..=6)
                .map(|i| Player::new(i, format!("Player {i}"), 80 + i, Position::Flank))
                .collect(),
        )
        .unwrap();
        Arc::new(DashboardState::new(roster, Duration::from_secs(3)))
    }

    async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
        let resp = app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = resp.status();
        let body = axum::body::to_bytes(resp.into_body(), 100_000).await.unwrap();
        let json = if body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = build_router(test_state());
        let (status, _) = send(&app, Method::GET, "/health").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_roster_endpoint() {
        let app = build_router(test_state());
        let (status, json) = send(&app, Method::GET, "/api/roster").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 6);
        assert_eq!(json[0]["selected"], false);
        assert_eq!(json[0]["position"], "Flank");
    }

    #[tokio::test]
    async fn test_team_endpoint_empty() {
        let app = build_router(test_state());
        let (status, json) = send(&app, Method::GET, "/api/team").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["members"].as_array().unwrap().len(), 0);
        assert_eq!(json["remaining_slots"], 5);
        assert_eq!(json["status"]["status"], "NoPlayers");
        assert_eq!(json["stats"]["total_power"], 0);
        assert!(json["notice"].is_null());
    }

    #[tokio::test]
    async fn test_select_endpoint() {
        let app = build_router(test_state());
        let (status, json) = send(&app, Method::POST, "/api/team/players/2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["members"][0]["name"], "Player 2");
        assert_eq!(json["stats"]["total_power"], 82);
        assert_eq!(json["status"]["status"], "Incomplete");
    }

    #[tokio::test]
    async fn test_select_unknown_is_404() {
        let app = build_router(test_state());
        let (status, json) = send(&app, Method::POST, "/api/team/players/42").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(json["error"].as_str().unwrap().contains("#42"));
    }

    #[tokio::test]
    async fn test_select_sixth_player_is_409() {
        let app = build_router(test_state());
        for id in 1..=5 {
            let (status, _) = send(&app, Method::POST, &format!("/api/team/players/{id}")).await;
            assert_eq!(status, StatusCode::OK);
        }
        let (status, json) = send(&app, Method::POST, "/api/team/players/6").await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["kind"], "TeamFull");
        assert_eq!(json["message"], "Team is full! Maximum 5 players");

        let (_, notice) = send(&app, Method::GET, "/api/notice").await;
        assert_eq!(notice["kind"], "TeamFull");
    }

    #[tokio::test]
    async fn test_remove_endpoint() {
        let app = build_router(test_state());
        send(&app, Method::POST, "/api/team/players/1").await;
        send(&app, Method::POST, "/api/team/players/3").await;

        let (status, json) = send(&app, Method::DELETE, "/api/team/players/1").await;
        assert_eq!(status, StatusCode::OK);
        let members = json["members"].as_array().unwrap();
        assert_eq!(members.len(), 1);
        assert_eq!(members[0]["id"], 3);
    }

    #[tokio::test]
    async fn test_remove_all_endpoint() {
        let app = build_router(test_state());
        let (status, json) = send(&app, Method::DELETE, "/api/team").await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json["kind"], "EmptySelection");

        send(&app, Method::POST, "/api/team/players/4").await;
        let (status, json) = send(&app, Method::DELETE, "/api/team").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["notice"]["kind"], "TeamCleared");
        assert_eq!(json["notice"]["severity"], "success");
    }

    #[tokio::test]
    async fn test_stats_and_status_endpoints() {
        let app = build_router(test_state());
        for id in 1..=5 {
            send(&app, Method::POST, &format!("/api/team/players/{id}")).await;
        }
        let (_, stats) = send(&app, Method::GET, "/api/stats").await;
        // 81 + 82 + 83 + 84 + 85
        assert_eq!(stats["total_power"], 415);
        assert_eq!(stats["average_rating"], 83.0);
        assert_eq!(stats["capacity"], "Complete");

        let (_, status) = send(&app, Method::GET, "/api/status").await;
        assert_eq!(status["status"], "NeedsImprovement");
        assert_eq!(status["severity"], "warning");
        assert_eq!(status["quality_label"], "Needs improvement");
    }

    #[tokio::test]
    async fn test_cors_preflight() {
        let app = build_router(test_state());
        let resp = app
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri("/api/team")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .header(header::ACCESS_CONTROL_REQUEST_METHOD, "DELETE")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}
