//! Test fixtures for itinerary-planner.
//!
//! Provides real Paris landmarks and Île-de-France day-trip destinations,
//! plus helpers for building synthetic equator routes.

pub mod paris_locations;

pub use paris_locations::*;
