use axum::{
    Json,
    extract::{Path, Query, State, rejection::JsonRejection},
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;

use perch_types::api::{CreatePostRequest, NewPost};
use perch_types::time::parse_instant;

use crate::AppState;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

pub async fn create_post(
    State(state): State<AppState>,
    body: Result<Json<CreatePostRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = body.map_err(|_| ApiError::bad_request("Invalid JSON format"))?;

    // "missing" and "wrong type" are reported as distinct client
    // errors, so `msg` arrives as a raw JSON value.
    let msg = match req.msg {
        None => return Err(ApiError::bad_request("Missing 'msg' field")),
        Some(Value::String(msg)) => msg,
        Some(_) => return Err(ApiError::bad_request("'msg' must be a string")),
    };

    let receipt = state.store.create_post(NewPost {
        msg,
        user_id: req.user_id,
        user_key: req.user_key,
        replying_to_id: req.replying_to_id,
    })?;

    Ok(Json(receipt))
}

pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.store.get_post(id)?))
}

pub async fn delete_post(
    State(state): State<AppState>,
    Path((id, key)): Path<(u64, String)>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.store.delete_post(id, &key)?))
}

pub async fn posts_by_range(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let start = parse_bound("start", query.start)?;
    let end = parse_bound("end", query.end)?;
    Ok(Json(state.store.posts_in_range(start, end)))
}

pub async fn posts_by_user(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(state.store.posts_by_user(user_id)?))
}

/// Parse an optional range bound. An empty value (`?start=`) counts as
/// absent; anything else must be a well-formed ISO-8601 instant.
fn parse_bound(name: &str, value: Option<String>) -> Result<Option<DateTime<Utc>>, ApiError> {
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => parse_instant(s)
            .map(Some)
            .ok_or_else(|| ApiError::bad_request(format!("Invalid '{}' timestamp", name))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn bound_absent_and_empty_are_open() {
        assert_eq!(parse_bound("start", None).unwrap(), None);
        assert_eq!(parse_bound("start", Some(String::new())).unwrap(), None);
    }

    #[test]
    fn bound_parses_naive_utc() {
        let bound = parse_bound("end", Some("2024-05-01T10:00:00".into()))
            .unwrap()
            .unwrap();
        assert_eq!(bound, Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn bound_rejects_malformed_values() {
        let err = parse_bound("start", Some("yesterday".into())).unwrap_err();
        assert!(matches!(err, ApiError::BadRequest(_)));
    }
}
