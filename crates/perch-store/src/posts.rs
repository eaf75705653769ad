use chrono::{DateTime, Utc};
use tracing::debug;

use perch_types::api::{NewPost, PostReceipt, PostView};
use perch_types::models::Post;
use perch_types::time::{format_instant, now_utc};

use crate::{Store, StoreError, StoreInner, keys};

impl Store {
    /// Create a post, optionally attributed to a user and optionally as
    /// a reply. The parent's reply list is updated in the same critical
    /// section as the insert, so a reply is never visible without its
    /// parent linkage.
    pub fn create_post(&self, new: NewPost) -> Result<PostReceipt, StoreError> {
        self.with_inner(|inner| {
            // Snapshot the author's username; an unknown author is a
            // caller error, not a fault.
            let username = match new.user_id {
                Some(user_id) => Some(
                    inner
                        .users
                        .get(&user_id)
                        .ok_or_else(|| StoreError::NotFound("User not found".into()))?
                        .username
                        .clone(),
                ),
                None => None,
            };

            if let Some(parent_id) = new.replying_to_id {
                if !inner.posts.contains_key(&parent_id) {
                    return Err(StoreError::NotFound("Reply to non-existent post".into()));
                }
            }

            let id = inner.next_post_id;
            inner.next_post_id += 1;
            let key = keys::generate_key();
            let timestamp = now_utc();

            inner.posts.insert(
                id,
                Post {
                    id,
                    key: key.clone(),
                    timestamp,
                    msg: new.msg,
                    user_id: new.user_id,
                    username,
                    user_key: new.user_key,
                    replying_to_id: new.replying_to_id,
                    ids_of_replies: Vec::new(),
                },
            );

            if let Some(parent_id) = new.replying_to_id {
                if let Some(parent) = inner.posts.get_mut(&parent_id) {
                    parent.ids_of_replies.push(id);
                }
            }

            debug!("Post {} created", id);
            Ok(PostReceipt {
                id,
                key,
                timestamp: format_instant(&timestamp),
            })
        })
    }

    pub fn get_post(&self, id: u64) -> Result<PostView, StoreError> {
        self.with_inner(|inner| {
            let inner = &*inner;
            let post = inner
                .posts
                .get(&id)
                .ok_or_else(|| StoreError::NotFound("Post not found".into()))?;
            Ok(view_of(inner, post))
        })
    }

    /// Delete a post. Authorized by the post's own key, or by the
    /// current key of its author if it has one. Deletions do not
    /// cascade: the parent's reply list keeps the deleted id.
    pub fn delete_post(&self, id: u64, presented_key: &str) -> Result<PostReceipt, StoreError> {
        self.with_inner(|inner| {
            let post = inner
                .posts
                .get(&id)
                .ok_or_else(|| StoreError::NotFound("Post not found".into()))?;

            let author_key = post
                .user_id
                .and_then(|uid| inner.users.get(&uid))
                .map(|u| u.key.as_str());
            if presented_key != post.key && author_key != Some(presented_key) {
                return Err(StoreError::Forbidden("Forbidden".into()));
            }

            let post = inner
                .posts
                .remove(&id)
                .ok_or_else(|| StoreError::NotFound("Post not found".into()))?;

            debug!("Post {} deleted", id);
            Ok(PostReceipt {
                id,
                key: post.key,
                timestamp: format_instant(&post.timestamp),
            })
        })
    }

    /// Posts whose timestamp falls in `[start, end]`, either bound open
    /// when absent. Iteration order is id order; callers must not rely
    /// on it being chronological.
    pub fn posts_in_range(
        &self,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Vec<PostView> {
        self.with_inner(|inner| {
            let inner = &*inner;
            inner
                .posts
                .values()
                .filter(|post| {
                    start.is_none_or(|s| post.timestamp >= s)
                        && end.is_none_or(|e| post.timestamp <= e)
                })
                .map(|post| view_of(inner, post))
                .collect()
        })
    }

    pub fn posts_by_user(&self, user_id: u64) -> Result<Vec<PostView>, StoreError> {
        self.with_inner(|inner| {
            let inner = &*inner;
            if !inner.users.contains_key(&user_id) {
                return Err(StoreError::NotFound("User not found".into()));
            }
            Ok(inner
                .posts
                .values()
                .filter(|post| post.user_id == Some(user_id))
                .map(|post| view_of(inner, post))
                .collect())
        })
    }
}

/// Read view of a post with the author's current username merged in
/// (live lookup, not the snapshot stored on the post).
fn view_of(inner: &StoreInner, post: &Post) -> PostView {
    let username = post
        .user_id
        .and_then(|uid| inner.users.get(&uid))
        .map(|u| u.username.clone());

    PostView {
        id: post.id,
        timestamp: format_instant(&post.timestamp),
        msg: post.msg.clone(),
        user_id: post.user_id,
        username,
        replying_to_id: post.replying_to_id,
        ids_of_replies: post.ids_of_replies.clone(),
    }
}
