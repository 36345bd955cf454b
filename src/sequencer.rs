//! Route sequencer: best-first search for a short visiting order.
//!
//! The first input location is the fixed start and the last is the fixed
//! goal. States are simple paths rooted at the start, expanded in order of
//! `cost so far + straight-line distance to goal`.
//!
//! Bookkeeping is keyed by location name and path length rather than by the
//! full visited set. That keeps the frontier small for hand-entered trip
//! lists at the price of optimality: a cheaper completion can be pruned when
//! another path reached the same stop at the same depth more cheaply. The
//! goal is only appended as the final remaining stop, which guarantees that
//! at least one complete route survives pruning.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PlanError, Result};
use crate::location::Location;
use crate::traits::DistanceOracle;

/// An ordered visit of every input location, start first and goal last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    stops: Vec<Location>,
    total_distance_km: f64,
}

impl Route {
    /// Wraps an already ordered stop list, computing its total length.
    pub fn from_stops<O: DistanceOracle>(stops: Vec<Location>, oracle: &O) -> Self {
        let total_distance_km = stops
            .windows(2)
            .map(|pair| oracle.distance_km(&pair[0], &pair[1]))
            .sum();
        Self {
            stops,
            total_distance_km,
        }
    }

    pub fn stops(&self) -> &[Location] {
        &self.stops
    }

    pub fn into_stops(self) -> Vec<Location> {
        self.stops
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn total_distance_km(&self) -> f64 {
        self.total_distance_km
    }

    pub fn names(&self) -> Vec<&str> {
        self.stops.iter().map(|stop| stop.name.as_str()).collect()
    }
}

/// Counters reported once a search finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expanded: usize,
    pub enqueued: usize,
    pub pruned: usize,
    pub solutions: usize,
}

/// Open search state. Ordered so that `BinaryHeap` pops the lowest priority
/// first, and among equal priorities the earliest inserted.
#[derive(Debug, Clone)]
struct SearchState {
    priority: f64,
    seq: u64,
    cost: f64,
    path: Vec<usize>,
}

impl PartialEq for SearchState {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchState {}

impl Ord for SearchState {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for SearchState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Orders `locations` from the first entry to the last, visiting every
/// location exactly once.
///
/// Fails with [`PlanError::NoRouteFound`] on empty input or when the search
/// exhausts without a complete route.
pub fn sequence_route<O: DistanceOracle>(locations: &[Location], oracle: &O) -> Result<Route> {
    sequence_route_with_stats(locations, oracle).map(|(route, _)| route)
}

/// Same as [`sequence_route`], also returning search counters.
pub fn sequence_route_with_stats<O: DistanceOracle>(
    locations: &[Location],
    oracle: &O,
) -> Result<(Route, SearchStats)> {
    validate_locations(locations)?;

    let n = locations.len();
    if n == 1 {
        return Ok((Route::from_stops(locations.to_vec(), oracle), SearchStats::default()));
    }

    let goal = n - 1;
    let matrix = oracle.matrix_for(locations);

    let mut stats = SearchStats::default();
    let mut open = BinaryHeap::new();
    let mut seq: u64 = 0;
    let mut best_costs: HashMap<(&str, usize), f64> = HashMap::new();
    let mut best: Option<(f64, Vec<usize>)> = None;

    best_costs.insert((locations[0].name.as_str(), 0), 0.0);
    open.push(SearchState {
        priority: matrix[0][goal],
        seq,
        cost: 0.0,
        path: vec![0],
    });

    while let Some(state) = open.pop() {
        if let Some((best_cost, _)) = &best {
            // Every remaining state costs at least its priority once completed.
            if state.priority >= *best_cost {
                stats.pruned += open.len() + 1;
                break;
            }
        }

        let current = state.path[state.path.len() - 1];
        if current == goal {
            stats.solutions += 1;
            let improves = best
                .as_ref()
                .is_none_or(|(best_cost, _)| state.cost < *best_cost);
            if improves {
                best = Some((state.cost, state.path));
            }
            continue;
        }

        stats.expanded += 1;
        let depth = state.path.len();
        let last_leg = depth == n - 1;

        for next in 0..n {
            if state.path.contains(&next) {
                continue;
            }
            // The goal closes the route, so it only follows the last other stop.
            if (next == goal) != last_leg {
                continue;
            }

            let cost = state.cost + matrix[current][next];
            let key = (locations[next].name.as_str(), depth);
            let improves = best_costs.get(&key).is_none_or(|known| cost < *known);
            if !improves {
                stats.pruned += 1;
                continue;
            }
            best_costs.insert(key, cost);

            let mut path = Vec::with_capacity(depth + 1);
            path.extend_from_slice(&state.path);
            path.push(next);

            seq += 1;
            stats.enqueued += 1;
            open.push(SearchState {
                priority: cost + matrix[next][goal],
                seq,
                cost,
                path,
            });
        }
    }

    debug!(
        stops = n,
        expanded = stats.expanded,
        enqueued = stats.enqueued,
        pruned = stats.pruned,
        solutions = stats.solutions,
        "route search finished"
    );

    let (cost, path) = best.ok_or(PlanError::NoRouteFound)?;
    let stops = path.into_iter().map(|i| locations[i].clone()).collect();

    Ok((
        Route {
            stops,
            total_distance_km: cost,
        },
        stats,
    ))
}

fn validate_locations(locations: &[Location]) -> Result<()> {
    if locations.is_empty() {
        return Err(PlanError::NoRouteFound);
    }

    let mut seen = HashSet::with_capacity(locations.len());
    for location in locations {
        location.validate()?;
        if !seen.insert(location.name.as_str()) {
            return Err(PlanError::DuplicateLocation(location.name.clone()));
        }
    }

    Ok(())
}
