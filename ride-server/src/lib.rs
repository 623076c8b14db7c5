//! Ride fare comparison server.
//!
//! A web service that answers: "for this pickup and dropoff, what would
//! each ride-hailing provider charge, how soon could a car arrive, and
//! what link opens the trip in their app?"

pub mod compare;
pub mod domain;
pub mod geocode;
pub mod web;
