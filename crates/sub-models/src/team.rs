//! Team model

use serde::{Deserialize, Serialize};

/// A team of users collaborating on one gradeable
///
/// Membership order is significant: the page lists members in the order the
/// data-access layer stored them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    /// Team id
    pub id: String,

    /// Member user ids, in stored order
    pub members: Vec<String>,

    /// User ids this team has sent invitations to, not yet accepted
    pub invitations: Vec<String>,
}

impl Team {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            members: Vec::new(),
            invitations: Vec::new(),
        }
    }

    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members = members.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_invitations<I, S>(mut self, invitations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.invitations = invitations.into_iter().map(Into::into).collect();
        self
    }

    /// Whether this team has a pending invitation out to `user_id`
    pub fn sent_invite(&self, user_id: &str) -> bool {
        self.invitations.iter().any(|invited| invited == user_id)
    }

    /// Member ids joined for display, e.g. `"smithj, doej"`
    pub fn member_list(&self) -> String {
        self.members.join(", ")
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }
}
