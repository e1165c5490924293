//! Gradeable model

use serde::{Deserialize, Serialize};

use crate::team::Team;

/// An assignment that may be submitted by teams
///
/// Snapshot of the fields the team page needs; grading configuration and
/// submission state live elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Gradeable {
    /// Gradeable id, e.g. `hw01`
    pub id: String,

    /// Display name, e.g. `Homework 1`
    pub name: String,

    /// Whether submissions come from a version-control repository
    pub is_repository: bool,

    /// Repository subdirectory or URL/path template; may contain the
    /// `{$gradeable_id}`, `{$user_id}` and `{$team_id}` tokens
    pub subdirectory: String,

    /// The acting user's team for this gradeable, if they are on one
    pub team: Option<Team>,
}

impl Gradeable {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_repository: false,
            subdirectory: String::new(),
            team: None,
        }
    }

    pub fn with_repository(mut self, subdirectory: impl Into<String>) -> Self {
        self.is_repository = true;
        self.subdirectory = subdirectory.into();
        self
    }

    pub fn with_team(mut self, team: Team) -> Self {
        self.team = Some(team);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let gradeable = Gradeable::new("hw01", "Homework 1")
            .with_repository("hw01/{$team_id}")
            .with_team(Team::new("t1"));
        assert!(gradeable.is_repository);
        assert_eq!(gradeable.subdirectory, "hw01/{$team_id}");
        assert!(gradeable.team.is_some());
    }

    #[test]
    fn test_serialization_shape() {
        let gradeable = Gradeable::new("hw01", "Homework 1");
        let json = serde_json::to_value(&gradeable).unwrap();
        assert_eq!(json["id"], "hw01");
        assert_eq!(json["name"], "Homework 1");
        assert_eq!(json["is_repository"], false);
        assert!(json["team"].is_null());
    }
}
