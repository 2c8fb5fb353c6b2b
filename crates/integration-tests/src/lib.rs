//! Integration tests for the Cafe API.
//!
//! # Running Tests
//!
//! ```bash
//! # Prepare the database and key, then start the server
//! cargo run -p cafe-api-cli -- migrate
//! cargo run -p cafe-api-cli -- genkey
//! cargo run -p cafe-api-server &
//!
//! # Run the ignored end-to-end tests
//! CAFE_API_KEY=$(cat api_key.txt) cargo test -p cafe-api-integration-tests -- --ignored
//! ```
//!
//! # Environment Variables
//!
//! - `CAFE_API_BASE_URL` - Server under test (default: `http://localhost:5000`)
//! - `CAFE_API_KEY` - The key the server was started with

/// Base URL for the API under test (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("CAFE_API_BASE_URL").unwrap_or_else(|_| "http://localhost:5000".to_string())
}

/// The API key the server under test was started with.
///
/// # Panics
///
/// Panics if `CAFE_API_KEY` is not set; the ignored tests need it.
#[must_use]
pub fn api_key() -> String {
    std::env::var("CAFE_API_KEY").expect("CAFE_API_KEY must be set for integration tests")
}
