//! The cafe entity and its mutable field set.

use cafe_api_core::CafeId;
use serde::{Deserialize, Serialize};

/// A cafe record as stored and served.
///
/// This is the serialized record returned by every read endpoint, wrapped in
/// a `cafe`/`cafes` payload by the handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Cafe {
    pub id: CafeId,
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    /// Free-form seat count, e.g. "20-30".
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    /// Display price string, e.g. "£2.50".
    pub coffee_price: String,
}

/// The mutable fields of a cafe, as submitted on `/add` and
/// `/replace-cafe/{id}` via query parameters.
///
/// Text fields are required; a missing one rejects the request. Amenity
/// flags use the enumerated parser from `cafe_api_core::flag`, so an absent
/// flag is `false` and the literal text `"false"` is `false` rather than
/// truthy-by-presence.
#[derive(Debug, Clone, Deserialize)]
pub struct CafeFields {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    #[serde(default, deserialize_with = "cafe_api_core::flag::deserialize")]
    pub has_toilet: bool,
    #[serde(default, deserialize_with = "cafe_api_core::flag::deserialize")]
    pub has_wifi: bool,
    #[serde(default, deserialize_with = "cafe_api_core::flag::deserialize")]
    pub has_sockets: bool,
    #[serde(default, deserialize_with = "cafe_api_core::flag::deserialize")]
    pub can_take_calls: bool,
    pub coffee_price: String,
}
