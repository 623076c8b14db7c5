//! Web layer for the ride comparison service.
//!
//! Provides the JSON endpoints the browser UI calls: fare comparison,
//! reverse geocoding, and the visit counter.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
