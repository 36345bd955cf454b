//! Day partitioner: greedy split of an ordered route into day-sized legs.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{PlanError, Result};
use crate::location::Location;
use crate::sequencer::Route;
use crate::traits::DistanceOracle;

/// Per-day limits for splitting a route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayLimits {
    /// Maximum straight-line distance travelled within one day, in km.
    pub daily_distance_km: f64,
    /// Maximum number of stops in one day.
    pub max_places_per_day: usize,
    /// Number of days in the itinerary.
    pub days: usize,
}

impl Default for DayLimits {
    fn default() -> Self {
        Self {
            daily_distance_km: 100.0,
            max_places_per_day: 5,
            days: 3,
        }
    }
}

impl DayLimits {
    pub fn new(daily_distance_km: f64, max_places_per_day: usize, days: usize) -> Self {
        Self {
            daily_distance_km,
            max_places_per_day,
            days,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.daily_distance_km.is_finite() && self.daily_distance_km > 0.0) {
            return Err(PlanError::invalid_parameters(format!(
                "daily distance must be a positive number of km, got {}",
                self.daily_distance_km
            )));
        }
        if self.max_places_per_day == 0 {
            return Err(PlanError::invalid_parameters(
                "max places per day must be greater than zero",
            ));
        }
        if self.days == 0 {
            return Err(PlanError::invalid_parameters("days must be greater than zero"));
        }
        Ok(())
    }
}

/// One day's stops, a contiguous slice of the route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DayBucket {
    pub stops: Vec<Location>,
    /// Distance travelled between this day's stops, in km.
    pub distance_km: f64,
}

impl DayBucket {
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn names(&self) -> Vec<&str> {
        self.stops.iter().map(|stop| stop.name.as_str()).collect()
    }
}

/// Exactly `days` buckets, trailing ones empty once the route runs out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Itinerary {
    pub days: Vec<DayBucket>,
}

impl Itinerary {
    pub fn days(&self) -> &[DayBucket] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Scheduled stops across all days, in visiting order.
    pub fn scheduled(&self) -> impl Iterator<Item = &Location> {
        self.days.iter().flat_map(|day| day.stops.iter())
    }

    pub fn scheduled_count(&self) -> usize {
        self.days.iter().map(DayBucket::len).sum()
    }

    pub fn populated_days(&self) -> usize {
        self.days.iter().filter(|day| !day.is_empty()).count()
    }
}

/// Splits `route` into `limits.days` buckets in a single greedy pass.
///
/// A day closes before a stop when adding the leg from the previous route
/// stop would exceed the distance budget, or when the day already holds the
/// maximum number of stops. Each day's first stop contributes no distance.
/// Stops left over once every day is closed are dropped from the itinerary.
pub fn split_into_days<O: DistanceOracle>(
    route: &Route,
    limits: &DayLimits,
    oracle: &O,
) -> Result<Itinerary> {
    limits.validate()?;

    let stops = route.stops();
    let mut days: Vec<DayBucket> = Vec::with_capacity(limits.days);
    let mut current = DayBucket::default();
    let mut closed = 0;
    let mut placed = 0;

    for (i, stop) in stops.iter().enumerate() {
        let leg = if i > 0 {
            oracle.distance_km(&stops[i - 1], stop)
        } else {
            0.0
        };

        let over_distance = current.distance_km + leg > limits.daily_distance_km;
        let full = current.len() >= limits.max_places_per_day;
        if !current.is_empty() && (over_distance || full) {
            days.push(std::mem::take(&mut current));
            closed += 1;
            if closed >= limits.days {
                break;
            }
        }

        if !current.is_empty() {
            current.distance_km += leg;
        }
        current.stops.push(stop.clone());
        placed += 1;
    }

    if !current.is_empty() && closed < limits.days {
        days.push(current);
    }

    let dropped = stops.len() - placed;
    if dropped > 0 {
        let names: Vec<&str> = stops[placed..].iter().map(|s| s.name.as_str()).collect();
        warn!(
            dropped,
            days = limits.days,
            "route exceeds itinerary capacity, dropping: {}",
            names.join(", ")
        );
    }

    days.resize_with(limits.days, DayBucket::default);
    days.truncate(limits.days);

    debug!(
        stops = stops.len(),
        scheduled = placed,
        days = limits.days,
        "route split into days"
    );

    Ok(Itinerary { days })
}
