//! # Textcat
//!
//! A small text-classification library for Rust.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Count and TF-IDF document vectorizers
//! - Multinomial Naive Bayes and SPODE (one-dependence) classifiers
//! - Cross-validated exhaustive and successive-halving grid search
//! - Deterministic results for identical inputs

pub mod analysis;
pub mod classify;
pub mod error;
pub mod matrix;
pub mod search;
pub mod vectorize;

pub mod prelude {}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
