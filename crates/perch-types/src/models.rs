use chrono::{DateTime, Utc};

/// A registered account. Users are never deleted; only `real_name` is
/// mutable, and only by presenting the matching secret key.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: u64,
    pub key: String,
    pub username: String,
    pub real_name: Option<String>,
}

/// A stored post. The `username` field is a snapshot taken at creation
/// time; read paths merge in the author's current username instead.
#[derive(Debug, Clone)]
pub struct Post {
    pub id: u64,
    pub key: String,
    pub timestamp: DateTime<Utc>,
    pub msg: String,
    pub user_id: Option<u64>,
    pub username: Option<String>,
    /// Caller-supplied at creation and stored verbatim. Never checked
    /// against the author's real key; deletion does its own key check.
    pub user_key: Option<String>,
    pub replying_to_id: Option<u64>,
    pub ids_of_replies: Vec<u64>,
}
