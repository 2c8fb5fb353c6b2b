//! Cafe API Core - Shared types library.
//!
//! This crate provides common types used across all Cafe API components:
//! - `server` - The public HTTP API binary
//! - `cli` - Command-line tools for migrations and management
//!
//! # Architecture
//!
//! The core crate contains only types and parsers - no I/O, no database
//! access, no HTTP handling. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and the query-flag parser

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
