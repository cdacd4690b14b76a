// SPDX-License-Identifier: Apache-2.0

use crate::store::RosterError;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use soccer_builder_model::{Stats, Team};
use std::sync::atomic::Ordering;
use tracing::{error, info};

pub(crate) fn detail_response(status: StatusCode, detail: &str) -> Response {
    (status, Json(json!({"detail": detail}))).into_response()
}

pub(crate) fn roster_error_response(err: &RosterError) -> Response {
    match err {
        RosterError::TeamNotFound => detail_response(StatusCode::NOT_FOUND, "Team not found"),
        RosterError::PlayerNotFound => detail_response(StatusCode::NOT_FOUND, "Player not found"),
        RosterError::Store(cause) => {
            error!("store failure: {cause}");
            detail_response(StatusCode::INTERNAL_SERVER_ERROR, "store failure")
        }
    }
}

pub(crate) fn make_request_id(state: &AppState) -> String {
    let id = state.request_id_seed.fetch_add(1, Ordering::Relaxed);
    format!("req-{id:016x}")
}

pub(crate) fn propagated_request_id(headers: &HeaderMap, state: &AppState) -> String {
    if let Some(raw) = headers.get("x-request-id").and_then(|v| v.to_str().ok()) {
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }
    make_request_id(state)
}

pub(crate) fn with_request_id(mut response: Response, request_id: &str) -> Response {
    if let Ok(v) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert("x-request-id", v);
    }
    response
}

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub(crate) async fn api_root_handler(State(state): State<AppState>) -> Response {
    let request_id = make_request_id(&state);
    let resp = Json(json!({"message": "Soccer Builder API"})).into_response();
    with_request_id(resp, &request_id)
}

pub(crate) async fn get_team_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let resp = match state.store.get_or_create().await {
        Ok(team) => Json(team).into_response(),
        Err(err) => roster_error_response(&err),
    };
    with_request_id(resp, &request_id)
}

pub(crate) async fn save_team_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<Team>, JsonRejection>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let team = match payload {
        Ok(Json(team)) => team,
        Err(rejection) => {
            let resp = detail_response(StatusCode::BAD_REQUEST, &rejection.body_text());
            return with_request_id(resp, &request_id);
        }
    };
    info!(
        request_id = %request_id,
        route = "/api/team",
        players = team.players.len(),
        "save team"
    );
    let resp = match state.store.replace(team).await {
        Ok(saved) => Json(saved).into_response(),
        Err(err) => roster_error_response(&err),
    };
    with_request_id(resp, &request_id)
}

pub(crate) async fn get_player_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(player_id): Path<String>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let resp = match state.store.find_player(&player_id).await {
        Ok(player) => Json(player).into_response(),
        Err(err) => roster_error_response(&err),
    };
    with_request_id(resp, &request_id)
}

pub(crate) async fn record_vote_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(player_id): Path<String>,
    payload: Result<Json<Stats>, JsonRejection>,
) -> Response {
    let request_id = propagated_request_id(&headers, &state);
    let vote = match payload {
        Ok(Json(vote)) => vote,
        Err(rejection) => {
            let resp = detail_response(StatusCode::BAD_REQUEST, &rejection.body_text());
            return with_request_id(resp, &request_id);
        }
    };
    info!(
        request_id = %request_id,
        route = "/api/player/{player_id}/vote",
        player_id = %player_id,
        "record vote"
    );
    let resp = match state.store.record_vote(&player_id, vote).await {
        Ok((_team, new_stats)) => {
            Json(json!({"message": "Vote recorded", "new_stats": new_stats})).into_response()
        }
        Err(err) => roster_error_response(&err),
    };
    with_request_id(resp, &request_id)
}
