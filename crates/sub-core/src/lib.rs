//! # sub-core
//!
//! Core types and utilities for Submit RS.
//!
//! This crate provides the foundational building blocks used across the other
//! crates:
//! - Common error types
//! - Result type aliases
//! - Course configuration
//! - Path-joining utilities

pub mod config;
pub mod error;
pub mod paths;
pub mod result;

pub use config::*;
pub use error::*;
pub use paths::*;
pub use result::*;
