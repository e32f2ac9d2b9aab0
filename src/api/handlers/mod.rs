use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::models::{Action, Outline};
use crate::render::render_outline;
use crate::store::Store;

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Outline
// ============================================================

pub async fn get_outline(State(store): State<Store>) -> Json<Outline> {
    Json(store.snapshot())
}

/// Plain-text ASCII rendering of the current outline.
pub async fn get_outline_tree(State(store): State<Store>) -> String {
    render_outline(&store.snapshot())
}

// ============================================================
// Actions
// ============================================================

/// Apply one action and respond with the new outline.
///
/// The required-name check for `addItem` lives here at the surface; the
/// store trusts well-formed actions. An id that matches no item is not
/// an error: the action is absorbed as a no-op and the unchanged
/// outline comes back. An unknown action kind never reaches this
/// handler; it fails `Action` deserialization and is rejected by the
/// `Json` extractor.
pub async fn dispatch_action(
    State(store): State<Store>,
    Json(action): Json<Action>,
) -> Result<Json<Outline>, (StatusCode, String)> {
    if let Action::AddItem { name, .. } = &action {
        if name.trim().is_empty() {
            tracing::warn!("Rejected addItem with empty name");
            return Err((
                StatusCode::BAD_REQUEST,
                "Item name must not be empty".to_string(),
            ));
        }
    }

    Ok(Json(store.dispatch(action)))
}
