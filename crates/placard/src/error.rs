//! Error types for Placard operations.
//!
//! This module provides the main error type [`PlacardError`] covering the
//! failure conditions of the placement engine. Geometric impossibility is
//! deliberately *not* an error: the bounded search degrades to a fallback
//! position instead (see [`crate::Engine::find_safe_position`]).

use thiserror::Error;

/// The main error type for Placard operations.
#[derive(Debug, Error)]
pub enum PlacardError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
