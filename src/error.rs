//! Error types for the Textcat library.
//!
//! This module provides error handling for all Textcat operations.
//! All errors are represented by the [`TextcatError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use textcat::error::{Result, TextcatError};
//!
//! fn example_operation() -> Result<()> {
//!     // Return an error
//!     Err(TextcatError::invalid_config("alpha must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Textcat operations.
///
/// This enum represents all possible errors that can occur in the Textcat
/// library. Configuration errors are raised eagerly at construction or at
/// the start of `fit`; shape errors are raised before any computation runs.
#[derive(Error, Debug)]
pub enum TextcatError {
    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid configuration (bad hyperparameter values, empty grids, bad fold counts)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Feature-matrix shape does not match what the model was fitted with
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Operation requires a fitted model or vectorizer
    #[error("Not fitted: {0}")]
    NotFitted(String),

    /// Vocabulary pruned or reduced to nothing
    #[error("Empty vocabulary: {0}")]
    EmptyVocabulary(String),
}

/// Result type alias for operations that may fail with TextcatError.
pub type Result<T> = std::result::Result<T, TextcatError>;

impl TextcatError {
    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        TextcatError::InvalidConfig(msg.into())
    }

    /// Create a new shape mismatch error.
    pub fn shape_mismatch<S: Into<String>>(msg: S) -> Self {
        TextcatError::ShapeMismatch(msg.into())
    }

    /// Create a new not-fitted error.
    pub fn not_fitted<S: Into<String>>(msg: S) -> Self {
        TextcatError::NotFitted(msg.into())
    }

    /// Create a new empty-vocabulary error.
    pub fn empty_vocabulary<S: Into<String>>(msg: S) -> Self {
        TextcatError::EmptyVocabulary(msg.into())
    }
}
