//! Core types for the Cafe API.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod flag;
pub mod id;

pub use flag::{FlagParseError, parse_flag};
pub use id::*;
