//! Result type alias for Submit RS operations

use crate::error::SubError;

/// Standard Result type for Submit RS operations
pub type SubResult<T> = Result<T, SubError>;
