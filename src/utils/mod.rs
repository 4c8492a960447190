//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Short code generation and validation
//! - [`url_validator`] - Structural URL check used on creation

pub mod code_generator;
pub mod url_validator;
