use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};
use serde_json::json;

use perch_types::api::{CreateUserRequest, NewUser, UpdateUserRequest};

use crate::AppState;
use crate::error::ApiError;

pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body.map_err(|_| ApiError::bad_request("Invalid JSON format"))?;

    let receipt = state.store.create_user(NewUser {
        username: req.username,
        real_name: req.real_name,
    })?;

    Ok(Json(receipt))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.store.get_user(&identifier)?))
}

pub async fn update_user(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // The GET side of this route accepts usernames, but mutation is
    // id-only.
    let user_id: u64 = identifier
        .parse()
        .map_err(|_| ApiError::bad_request("Invalid user id"))?;

    let Json(req) = body.map_err(|_| ApiError::bad_request("Invalid JSON format"))?;

    state
        .store
        .update_user(user_id, req.key.as_deref(), req.real_name)?;

    Ok(Json(json!({ "msg": "User metadata updated" })))
}
