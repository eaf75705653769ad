use tracing::debug;

use perch_types::api::{NewUser, UserProfile, UserReceipt};
use perch_types::models::User;

use crate::{Store, StoreError, keys};

impl Store {
    pub fn create_user(&self, new: NewUser) -> Result<UserReceipt, StoreError> {
        self.with_inner(|inner| {
            if inner.users.values().any(|u| u.username == new.username) {
                return Err(StoreError::BadRequest("Username already exists".into()));
            }

            let user_id = inner.next_user_id;
            inner.next_user_id += 1;
            let key = keys::generate_key();

            inner.users.insert(
                user_id,
                User {
                    user_id,
                    key: key.clone(),
                    username: new.username,
                    real_name: Some(new.real_name.unwrap_or_default()),
                },
            );

            debug!("User {} created", user_id);
            Ok(UserReceipt { user_id, key })
        })
    }

    /// Resolve a user by id or username. An all-digits identifier is
    /// treated as an id; there is no fallback to username lookup for
    /// numeric-looking names.
    pub fn get_user(&self, identifier: &str) -> Result<UserProfile, StoreError> {
        self.with_inner(|inner| {
            let by_id = !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit());
            let user = if by_id {
                identifier
                    .parse::<u64>()
                    .ok()
                    .and_then(|id| inner.users.get(&id))
            } else {
                inner.users.values().find(|u| u.username == identifier)
            };

            let user = user.ok_or_else(|| StoreError::NotFound("User not found".into()))?;
            Ok(UserProfile {
                user_id: user.user_id,
                username: user.username.clone(),
                real_name: user.real_name.clone(),
            })
        })
    }

    /// Replace `real_name`, including overwriting it with nothing;
    /// last write wins, with no partial updates. An unknown user and a
    /// wrong key report identically so callers cannot probe which half
    /// failed.
    pub fn update_user(
        &self,
        user_id: u64,
        presented_key: Option<&str>,
        real_name: Option<String>,
    ) -> Result<(), StoreError> {
        self.with_inner(|inner| match inner.users.get_mut(&user_id) {
            Some(user) if presented_key == Some(user.key.as_str()) => {
                user.real_name = real_name;
                debug!("User {} metadata updated", user_id);
                Ok(())
            }
            _ => Err(StoreError::Forbidden("Invalid user or key".into())),
        })
    }
}
