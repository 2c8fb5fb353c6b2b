//! CLI subcommands.

pub mod genkey;
pub mod migrate;
pub mod seed;
