pub mod error;
pub mod keys;
mod posts;
mod users;

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use tracing::info;

use perch_types::models::{Post, User};

pub use error::StoreError;

/// In-memory authority for all user and post records.
///
/// Both collections live behind a single mutex so that every operation
/// runs as one atomic critical section: "username is free / assign the
/// next id / insert" and "post exists / key matches / delete" never
/// interleave with other operations.
pub struct Store {
    inner: Mutex<StoreInner>,
}

struct StoreInner {
    users: BTreeMap<u64, User>,
    posts: BTreeMap<u64, Post>,
    // Counters, not collection sizes: ids stay strictly increasing and
    // are never reused after a deletion.
    next_user_id: u64,
    next_post_id: u64,
}

impl Store {
    pub fn new() -> Self {
        info!("In-memory store initialized");
        Self {
            inner: Mutex::new(StoreInner {
                users: BTreeMap::new(),
                posts: BTreeMap::new(),
                next_user_id: 1,
                next_post_id: 1,
            }),
        }
    }

    /// Run `f` under the store lock. Critical sections are bounded and
    /// never panic, so a poisoned lock still guards consistent state
    /// and is safe to re-enter.
    fn with_inner<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut StoreInner) -> T,
    {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut inner)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
