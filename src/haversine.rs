//! Great-circle distance oracle.
//!
//! Straight-line distance over a spherical Earth. Ignores roads and terrain,
//! which is all the planner needs.

use crate::location::Location;
use crate::traits::DistanceOracle;

/// Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance oracle.
#[derive(Debug, Clone, Copy)]
pub struct Haversine {
    /// Sphere radius in kilometers.
    pub radius_km: f64,
}

impl Default for Haversine {
    fn default() -> Self {
        Self {
            radius_km: EARTH_RADIUS_KM,
        }
    }
}

impl Haversine {
    pub fn new(radius_km: f64) -> Self {
        Self { radius_km }
    }
}

impl DistanceOracle for Haversine {
    fn distance_km(&self, from: &Location, to: &Location) -> f64 {
        self.radius_km * central_angle(from.coords(), to.coords())
    }
}

/// Calculate haversine distance between two (lat, lon) points in kilometers.
pub fn haversine_km(from: (f64, f64), to: (f64, f64)) -> f64 {
    EARTH_RADIUS_KM * central_angle(from, to)
}

/// Great-circle distance between two locations in kilometers.
pub fn distance(a: &Location, b: &Location) -> f64 {
    haversine_km(a.coords(), b.coords())
}

fn central_angle(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lon1) = from;
    let (lat2, lon2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);

    // Rounding can push `a` just outside [0, 1] for coincident or antipodal points.
    2.0 * a.clamp(0.0, 1.0).sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_same_point() {
        let dist = haversine_km((48.8584, 2.2945), (48.8584, 2.2945));
        assert_eq!(dist, 0.0, "Same point should have zero distance");
    }

    #[test]
    fn test_haversine_known_distance() {
        // Paris (48.8566, 2.3522) to London (51.5074, -0.1278)
        // Actual distance ~344 km
        let dist = haversine_km((48.8566, 2.3522), (51.5074, -0.1278));
        assert!(dist > 330.0 && dist < 360.0, "Paris to London should be ~344km, got {}", dist);
    }

    #[test]
    fn test_haversine_one_degree_on_equator() {
        let dist = haversine_km((0.0, 0.0), (0.0, 1.0));
        assert!((dist - 111.195).abs() < 0.01, "got {}", dist);
    }

    #[test]
    fn test_haversine_antipodal() {
        let dist = haversine_km((0.0, 0.0), (0.0, 180.0));
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        assert!(dist.is_finite());
        assert!((dist - half_circumference).abs() < 1e-6, "got {}", dist);

        let poles = haversine_km((90.0, 0.0), (-90.0, 0.0));
        assert!((poles - half_circumference).abs() < 1e-6, "got {}", poles);
    }

    #[test]
    fn test_haversine_symmetric() {
        let pairs = [
            ((48.8584, 2.2945), (48.8867, 2.3431)),
            ((-33.8688, 151.2093), (40.7128, -74.0060)),
            ((0.0, 179.9), (0.0, -179.9)),
        ];
        for (a, b) in pairs {
            let ab = haversine_km(a, b);
            let ba = haversine_km(b, a);
            assert!((ab - ba).abs() < 1e-9, "{:?} <-> {:?}: {} vs {}", a, b, ab, ba);
        }
    }

    #[test]
    fn test_oracle_matches_free_function() {
        let a = Location::new("Louvre", 48.8606, 2.3376);
        let b = Location::new("Pantheon", 48.8462, 2.3464);
        assert_eq!(Haversine::default().distance_km(&a, &b), distance(&a, &b));
    }

    #[test]
    fn test_custom_radius_scales_distance() {
        let a = Location::new("a", 0.0, 0.0);
        let b = Location::new("b", 0.0, 90.0);
        let unit = Haversine::new(1.0).distance_km(&a, &b);
        assert!((unit - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }
}
