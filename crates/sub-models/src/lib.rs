//! # sub-models
//!
//! Domain models for Submit RS.
//!
//! These are read-only snapshots constructed by the data-access layer and
//! handed to the views; nothing in this crate mutates or persists them.

pub mod gradeable;
pub mod lookup;
pub mod team;
pub mod user;

pub use gradeable::Gradeable;
pub use lookup::{InMemoryUsers, UserLookup};
pub use team::Team;
pub use user::User;
