//! Domain types for the ride comparison service.
//!
//! This module contains the core domain model types that represent
//! validated trip data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod point;
mod provider;
mod quote;

pub use point::{Coordinates, InvalidCoordinates, ResolvedPoint};
pub use provider::{LinkTemplate, PROVIDERS, ProviderProfile};
pub use quote::{CURRENCY_USD, Comparison, FareQuote};
