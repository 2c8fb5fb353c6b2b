//! Domain models for the cafe API.

pub mod cafe;

pub use cafe::{Cafe, CafeFields};
