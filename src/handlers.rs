use crate::date::{is_date_key, today_iso};
use crate::errors::AppError;
use crate::models::{
    CheckIn, CheckInForm, CheckInRequest, DashboardResponse, HistoryPoint, PreviewRequest,
    PreviewResponse,
};
use crate::scoring::daily_score;
use crate::state::AppState;
use crate::stats::{build_dashboard, build_history};
use crate::storage::{persist_data, reset_data};
use crate::ui::render_index;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Form, Json,
};
use chrono::Local;
use tracing::{info, warn};

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let date = today_iso();
    let data = state.data.lock().await;
    let dashboard = build_dashboard(&data);
    let history = build_history(&data);
    Html(render_index(&dashboard, &history, data.find(&date)))
}

pub async fn list_checkins(State(state): State<AppState>) -> Json<Vec<CheckIn>> {
    let data = state.data.lock().await;
    Json(data.checkins.clone())
}

pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let data = state.data.lock().await;
    Json(build_dashboard(&data))
}

pub async fn get_history(State(state): State<AppState>) -> Json<Vec<HistoryPoint>> {
    let data = state.data.lock().await;
    Json(build_history(&data))
}

pub async fn preview(Json(payload): Json<PreviewRequest>) -> Json<PreviewResponse> {
    let checkin = CheckIn {
        date: today_iso(),
        symptoms: payload.symptoms,
        adherence: payload.adherence,
    };
    Json(PreviewResponse {
        daily_score: daily_score(&checkin),
        date: checkin.date,
    })
}

pub async fn submit_checkin(
    State(state): State<AppState>,
    Json(payload): Json<CheckInRequest>,
) -> Result<Json<DashboardResponse>, AppError> {
    let date = match payload.date {
        Some(date) => date.trim().to_string(),
        None => today_iso(),
    };
    if !is_date_key(&date) {
        warn!("rejected check-in with date {date:?}");
        return Err(AppError::bad_request("date must be a YYYY-MM-DD calendar date"));
    }

    let checkin = CheckIn {
        date,
        symptoms: payload.symptoms,
        adherence: payload.adherence,
    };
    let dashboard = apply_checkin(&state, checkin).await?;
    Ok(Json(dashboard))
}

pub async fn checkin_form(
    State(state): State<AppState>,
    Form(form): Form<CheckInForm>,
) -> Result<Redirect, AppError> {
    apply_checkin(&state, form.into_checkin(today_iso())).await?;
    Ok(Redirect::to("/"))
}

pub async fn reset(State(state): State<AppState>) -> Result<Json<DashboardResponse>, AppError> {
    Ok(Json(apply_reset(&state).await?))
}

pub async fn reset_form(State(state): State<AppState>) -> Result<Redirect, AppError> {
    apply_reset(&state).await?;
    Ok(Redirect::to("/"))
}

async fn apply_checkin(state: &AppState, checkin: CheckIn) -> Result<DashboardResponse, AppError> {
    let mut data = state.data.lock().await;
    let date = checkin.date.clone();
    let score = daily_score(&checkin);

    // The shared history only changes once the new version is on disk.
    let mut updated = data.clone();
    updated.upsert(checkin);
    persist_data(&state.data_path, &updated).await?;
    *data = updated;
    info!(%date, score, "check-in saved");

    Ok(build_dashboard(&data))
}

async fn apply_reset(state: &AppState) -> Result<DashboardResponse, AppError> {
    let mut data = state.data.lock().await;
    let seeded = reset_data(&state.data_path, Local::now().date_naive()).await?;

    persist_data(&state.data_path, &seeded).await?;
    *data = seeded;
    info!(checkins = data.checkins.len(), "history reset to demo seed");

    Ok(build_dashboard(&data))
}
