//! HTTP route handlers for the cafe API.
//!
//! # Route Structure
//!
//! ```text
//! GET    /                    - Landing page
//! GET    /health              - Health check (wired up in main)
//!
//! # Read
//! GET    /random              - One cafe, picked uniformly at random
//! GET    /all                 - Every cafe
//! GET    /search?location=X   - Cafes with an exact location match
//!
//! # Write (POST /add is open; replace/delete require the api-key)
//! POST   /add                 - Create a cafe from query parameters
//! PATCH  /update-price/{id}   - Update only the coffee price
//! PUT    /replace-cafe/{id}   - Overwrite every mutable field
//! DELETE /delete-cafe/{id}    - Delete a cafe
//! ```
//!
//! Unlisted methods on these paths are rejected with 405 Method Not Allowed
//! by axum's method routing.

pub mod cafes;
pub mod home;
pub mod manage;

use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};

use crate::state::AppState;

/// Create all routes for the cafe API.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Landing page
        .route("/", get(home::home))
        // Read handlers
        .route("/random", get(cafes::random))
        .route("/all", get(cafes::all))
        .route("/search", get(cafes::search))
        // Write handlers
        .route("/add", post(manage::add))
        .route("/update-price/{id}", patch(manage::update_price))
        .route("/replace-cafe/{id}", put(manage::replace))
        .route("/delete-cafe/{id}", delete(manage::delete))
}
