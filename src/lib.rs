//! itinerary-planner core
//!
//! Orders a handful of named coordinates into a short visiting sequence and
//! splits that sequence into day-sized legs.

pub mod error;
pub mod location;
pub mod traits;
pub mod haversine;
pub mod sequencer;
pub mod partitioner;
pub mod planner;
pub mod nominatim;
pub mod export;

pub use error::{PlanError, Result};
pub use location::Location;
pub use partitioner::{DayBucket, DayLimits, Itinerary};
pub use planner::{PlanRequest, TripPlan};
pub use sequencer::Route;
