//! Real Paris-area locations for realistic test fixtures.
//!
//! Coordinates are approximate centroids taken from OpenStreetMap.

use itinerary_planner::Location;

pub const LANDMARKS: &[(&str, f64, f64)] = &[
    ("Eiffel Tower", 48.8584, 2.2945),
    ("Arc de Triomphe", 48.8738, 2.2950),
    ("Palais Garnier", 48.8720, 2.3316),
    ("Sacré-Cœur", 48.8867, 2.3431),
    ("Louvre Museum", 48.8606, 2.3376),
    ("Musée d'Orsay", 48.8600, 2.3266),
    ("Notre-Dame", 48.8530, 2.3499),
    ("Place des Vosges", 48.8556, 2.3655),
    ("Panthéon", 48.8462, 2.3464),
    ("Jardin du Luxembourg", 48.8462, 2.3372),
];

pub const DAY_TRIPS: &[(&str, f64, f64)] = &[
    ("Versailles", 48.8049, 2.1204),
    ("Giverny", 49.0758, 1.5339),
    ("Chartres", 48.4478, 1.4878),
    ("Fontainebleau", 48.4021, 2.6995),
    ("Reims", 49.2535, 4.0341),
];

fn to_locations(rows: &[(&str, f64, f64)]) -> Vec<Location> {
    rows.iter()
        .map(|(name, lat, lon)| Location::new(*name, *lat, *lon))
        .collect()
}

pub fn landmarks() -> Vec<Location> {
    to_locations(LANDMARKS)
}

pub fn day_trips() -> Vec<Location> {
    to_locations(DAY_TRIPS)
}

/// Points along the equator at the given longitudes, named `p0`, `p1`, ...
pub fn equator(lons: &[f64]) -> Vec<Location> {
    lons.iter()
        .enumerate()
        .map(|(i, lon)| Location::new(format!("p{}", i), 0.0, *lon))
        .collect()
}

pub fn names(locations: &[Location]) -> Vec<&str> {
    locations.iter().map(|l| l.name.as_str()).collect()
}
