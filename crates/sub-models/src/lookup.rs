//! User lookup seam
//!
//! The views resolve member and invitee ids to [`User`] records through this
//! trait rather than talking to the database directly. An unresolvable id is
//! represented as `None`; views render a placeholder instead of failing.

use std::collections::HashMap;

use crate::user::User;

/// Lookup of user records by login id
pub trait UserLookup {
    fn user_by_id(&self, id: &str) -> Option<User>;
}

/// In-memory [`UserLookup`] backed by a map
///
/// Backs the view tests; the production implementation wraps the course
/// database.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUsers {
    users: HashMap<String, User>,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    pub fn with_user(mut self, user: User) -> Self {
        self.insert(user);
        self
    }
}

impl UserLookup for InMemoryUsers {
    fn user_by_id(&self, id: &str) -> Option<User> {
        self.users.get(id).cloned()
    }
}
