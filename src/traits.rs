//! Seams between the planner core and its collaborators.
//!
//! Distances and geocoding are supplied through these traits so the search
//! and partitioning code never depend on a concrete provider.

use tracing::warn;

use crate::location::Location;

/// Provides straight-line distances between locations, in kilometers.
///
/// Implementations must behave as a metric (symmetric, zero on identical
/// coordinates, triangle inequality). Route search relies on that to stop
/// once no open state can beat the best complete route.
pub trait DistanceOracle {
    fn distance_km(&self, from: &Location, to: &Location) -> f64;

    /// Full pairwise matrix, indexed by the provided location order.
    fn matrix_for(&self, locations: &[Location]) -> Vec<Vec<f64>> {
        let n = locations.len();
        let mut matrix = vec![vec![0.0; n]; n];

        for (i, from) in locations.iter().enumerate() {
            for (j, to) in locations.iter().enumerate() {
                if i != j {
                    matrix[i][j] = self.distance_km(from, to);
                }
            }
        }

        matrix
    }
}

/// Turns free-text place names into coordinates.
pub trait Geocoder {
    /// Best match for `query`, or `None` if the place could not be located.
    fn geocode(&self, query: &str) -> Option<Location>;

    /// Geocodes one query per line, skipping blank lines.
    ///
    /// Located places keep input order. Lines that could not be located are
    /// returned in `failed` rather than aborting the batch.
    fn geocode_all(&self, lines: &str) -> GeocodeOutcome {
        let mut outcome = GeocodeOutcome::default();

        for line in lines.lines() {
            let query = line.trim();
            if query.is_empty() {
                continue;
            }
            match self.geocode(query) {
                Some(location) => outcome.located.push(location),
                None => outcome.failed.push(query.to_string()),
            }
        }

        if !outcome.failed.is_empty() {
            warn!(
                failed = outcome.failed.len(),
                "could not geocode: {}",
                outcome.failed.join(", ")
            );
        }

        outcome
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeocodeOutcome {
    pub located: Vec<Location>,
    pub failed: Vec<String>,
}
