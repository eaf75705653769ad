use serde::{Deserialize, Serialize};

// -- Posts --

/// Body of `POST /post`. `msg` stays a raw JSON value so the transport
/// can report "missing" and "wrong type" as distinct client errors
/// before the store is involved.
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub msg: Option<serde_json::Value>,
    pub user_id: Option<u64>,
    pub user_key: Option<String>,
    pub replying_to_id: Option<u64>,
}

/// Validated command handed to the store once the transport has checked
/// field presence and types.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub msg: String,
    pub user_id: Option<u64>,
    pub user_key: Option<String>,
    pub replying_to_id: Option<u64>,
}

/// Returned from post creation and deletion: the id, the post's own
/// secret key, and its creation timestamp in wire form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostReceipt {
    pub id: u64,
    pub key: String,
    pub timestamp: String,
}

/// Read view of a post. `username` is the author's username at read
/// time (live lookup), not the snapshot stored with the post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostView {
    pub id: u64,
    pub timestamp: String,
    pub msg: String,
    pub user_id: Option<u64>,
    pub username: Option<String>,
    pub replying_to_id: Option<u64>,
    pub ids_of_replies: Vec<u64>,
}

// -- Users --

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub real_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub real_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserReceipt {
    pub user_id: u64,
    pub key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: u64,
    pub username: String,
    pub real_name: Option<String>,
}

/// Body of `PUT /user/{user_id}`. A missing `key` is treated as a
/// wrong key, and a missing `real_name` overwrites the stored value;
/// there are no partial updates.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub key: Option<String>,
    pub real_name: Option<String>,
}
