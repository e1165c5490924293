//! # sub-views
//!
//! Server-side HTML views for Submit RS.
//!
//! Views are pure functions of their inputs plus injected collaborators
//! (course configuration, the acting user's id, a user lookup). They build
//! HTML fragments as strings; the request-handling layer wraps them in the
//! page chrome. Every interpolated value passes through [`html::escape`].

pub mod html;
pub mod team_page;
pub mod url;
pub mod vcs;

pub use self::url::ActionUrlBuilder;
pub use team_page::TeamPageView;
pub use vcs::{repository_url, RepoUrlFields};
