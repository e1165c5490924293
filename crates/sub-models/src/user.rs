//! User model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// User account snapshot
///
/// Users may set a preferred first name distinct from their legal first
/// name; display code must go through [`User::displayed_first_name`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    /// Login id (unique)
    pub id: String,

    /// Legal first name
    pub firstname: String,

    /// Preferred first name, shown instead of the legal one when set
    pub preferred_firstname: Option<String>,

    /// Last name
    pub lastname: String,

    /// Email address
    #[validate(email)]
    pub email: String,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            firstname: firstname.into(),
            preferred_firstname: None,
            lastname: lastname.into(),
            email: email.into(),
        }
    }

    pub fn with_preferred_firstname(mut self, preferred: impl Into<String>) -> Self {
        self.preferred_firstname = Some(preferred.into());
        self
    }

    /// The first name to display: the preferred name when set and non-empty,
    /// otherwise the legal first name.
    pub fn displayed_first_name(&self) -> &str {
        match &self.preferred_firstname {
            Some(preferred) if !preferred.is_empty() => preferred,
            _ => &self.firstname,
        }
    }
}
