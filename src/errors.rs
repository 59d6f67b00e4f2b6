//! Centralized error handling for the tinge application.
//!
//! This module provides a unified error type that consolidates all
//! application errors into a single enum for better error handling.

use thiserror::Error;

/// Unified error type for the tinge application.
#[derive(Error, Debug)]
pub enum TingeError {
    /// Hex color parsing errors
    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    /// General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Hex color parsing specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input is not a 3- or 6-digit hex color code
    #[error("Invalid hex color code: {0}")]
    InvalidFormat(String),
}

/// Type alias for Result using the unified error type
pub type Result<T> = std::result::Result<T, TingeError>;
