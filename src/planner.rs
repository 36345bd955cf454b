//! End-to-end trip planning: sequence the stops, then split them into days.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::{PlanError, Result};
use crate::haversine::Haversine;
use crate::location::Location;
use crate::partitioner::{split_into_days, DayLimits, Itinerary};
use crate::sequencer::{sequence_route, Route};
use crate::traits::{DistanceOracle, Geocoder};

/// One planning request. The first location is the start, the last the goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub locations: Vec<Location>,
    pub limits: DayLimits,
}

impl PlanRequest {
    pub fn new(locations: Vec<Location>, limits: DayLimits) -> Self {
        Self { locations, limits }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripPlan {
    pub route: Route,
    pub itinerary: Itinerary,
}

/// A plan built from free-text place names.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacesPlan {
    pub plan: TripPlan,
    /// Queries the geocoder could not locate; they are left out of the plan.
    pub unresolved: Vec<String>,
}

/// Plans a trip using great-circle distances.
pub fn plan(request: &PlanRequest) -> Result<TripPlan> {
    plan_with(request, &Haversine::default())
}

#[instrument(skip_all, fields(stops = request.locations.len(), days = request.limits.days))]
pub fn plan_with<O: DistanceOracle>(request: &PlanRequest, oracle: &O) -> Result<TripPlan> {
    request.limits.validate()?;

    let route = sequence_route(&request.locations, oracle)?;
    let itinerary = split_into_days(&route, &request.limits, oracle)?;

    info!(
        stops = route.len(),
        total_km = route.total_distance_km(),
        populated_days = itinerary.populated_days(),
        "trip planned"
    );

    Ok(TripPlan { route, itinerary })
}

/// Plans independent requests in parallel. Results keep request order.
pub fn plan_many(requests: &[PlanRequest]) -> Vec<Result<TripPlan>> {
    requests.par_iter().map(plan).collect()
}

/// Geocodes one place per line, then plans the located places in input order.
///
/// Fails with [`PlanError::NoRouteFound`] when nothing could be located.
pub fn plan_places<G: Geocoder>(
    lines: &str,
    geocoder: &G,
    limits: DayLimits,
) -> Result<PlacesPlan> {
    limits.validate()?;

    let outcome = geocoder.geocode_all(lines);
    if outcome.located.is_empty() {
        return Err(PlanError::NoRouteFound);
    }

    let plan = plan(&PlanRequest::new(outcome.located, limits))?;
    Ok(PlacesPlan {
        plan,
        unresolved: outcome.failed,
    })
}
