//! Core utilities for DevDeck development tools
//!
//! This crate provides shared functionality used by the platform-specific
//! tool crates:
//!
//! - **Validation**: fluent, field-oriented checks that collect structured
//!   errors and non-blocking warnings
//!
//! # Example
//!
//! ```rust,ignore
//! use devdeck_core::validation::Validator;
//!
//! let result = Validator::new()
//!     .non_empty("name", &config.name)
//!     .range("count", config.count, 1, 100)
//!     .validate();
//!
//! if !result.is_valid() {
//!     for issue in result.errors() {
//!         eprintln!("Validation error: {}", issue);
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod validation;

pub use validation::{ValidationIssue, ValidationKind, ValidationResult, Validator};
