use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/checkin", post(handlers::checkin_form))
        .route("/reset", post(handlers::reset_form))
        .route("/api/checkins", get(handlers::list_checkins).post(handlers::submit_checkin))
        .route("/api/preview", post(handlers::preview))
        .route("/api/dashboard", get(handlers::get_dashboard))
        .route("/api/history", get(handlers::get_history))
        .route("/api/reset", post(handlers::reset))
        .with_state(state)
}
