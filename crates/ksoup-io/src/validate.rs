//! Argument validation at API boundaries.
//!
//! Each check returns [`EngineError::Validation`] instead of panicking.

use crate::{EngineError, Result};

pub fn not_empty(value: &str, name: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(EngineError::validation(format!("`{name}` must not be empty")));
    }
    Ok(())
}

pub fn is_true(condition: bool, message: &str) -> Result<()> {
    if !condition {
        return Err(EngineError::validation(message));
    }
    Ok(())
}

pub fn is_false(condition: bool, message: &str) -> Result<()> {
    is_true(!condition, message)
}

/// Unwrap a required value
pub fn present<T>(value: Option<T>, name: &str) -> Result<T> {
    value.ok_or_else(|| EngineError::validation(format!("`{name}` must be present")))
}
