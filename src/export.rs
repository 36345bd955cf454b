//! JSON export of planned trips.
//!
//! The itinerary download format is an array of days, each an array of
//! `{name, lat, lon}` records.

use std::io::Write;

use crate::error::Result;
use crate::location::Location;
use crate::partitioner::Itinerary;
use crate::planner::TripPlan;

fn day_lists(itinerary: &Itinerary) -> Vec<&[Location]> {
    itinerary.days().iter().map(|day| day.stops.as_slice()).collect()
}

pub fn itinerary_json(itinerary: &Itinerary) -> Result<String> {
    Ok(serde_json::to_string_pretty(&day_lists(itinerary))?)
}

pub fn write_itinerary<W: Write>(itinerary: &Itinerary, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, &day_lists(itinerary))?;
    writer.flush()?;
    Ok(())
}

/// Full plan, including the route and per-day distances.
pub fn plan_json(plan: &TripPlan) -> Result<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}
