//! Service status for operators.

use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;
use crate::uploads::upload_dir_writable;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct PortalHealth {
    /// `ok` when every check passes, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub database: bool,
    /// Embedded migrations not yet applied, `None` when the store is unreachable.
    pub pending_migrations: Option<usize>,
    /// Whether news images can be written to the upload directory.
    pub uploads_writable: bool,
}

/// GET /health
///
/// Reports what the portal needs to serve its pages and accept news
/// uploads. Always answers 200; failed checks only change `status`.
async fn portal_health(State(state): State<AppState>) -> Json<PortalHealth> {
    let database = mylearn_db::health_check(&state.pool).await.is_ok();
    let pending_migrations = match mylearn_db::pending_migrations(&state.pool).await {
        Ok(count) => Some(count),
        Err(e) => {
            tracing::warn!(error = %e, "Could not read migration state");
            None
        }
    };
    let uploads_writable = upload_dir_writable(&state.config).await;

    let healthy = database && pending_migrations == Some(0) && uploads_writable;
    if !healthy {
        tracing::warn!(
            database,
            ?pending_migrations,
            uploads_writable,
            "Health check degraded"
        );
    }

    Json(PortalHealth {
        status: if healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database,
        pending_migrations,
        uploads_writable,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(portal_health))
}
