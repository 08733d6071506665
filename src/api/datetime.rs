use crate::{clock, SharedState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

#[derive(Serialize)]
pub struct DatetimeJson {
    current_datetime: String,
}

pub async fn current_datetime(State(state): State<SharedState>) -> impl IntoResponse {
    let now = state.clock.now();

    (
        StatusCode::OK,
        Json(DatetimeJson {
            current_datetime: clock::format_iso8601(&now),
        }),
    )
}
