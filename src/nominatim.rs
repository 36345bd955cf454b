//! Nominatim HTTP adapter for geocoding place names.

use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::location::Location;
use crate::traits::Geocoder;

#[derive(Debug, Clone)]
pub struct NominatimConfig {
    pub base_url: String,
    /// Nominatim's usage policy requires an identifying agent.
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Appended to every query to narrow the search.
    pub city: Option<String>,
    pub country: Option<String>,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: concat!("itinerary-planner/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 10,
            city: None,
            country: None,
        }
    }
}

impl NominatimConfig {
    /// `"<place>, <city>, <country>"`, skipping blank parts.
    pub fn compose_query(&self, place: &str) -> String {
        let mut query = place.trim().to_string();
        for part in [&self.city, &self.country].into_iter().flatten() {
            let part = part.trim();
            if !part.is_empty() {
                query.push_str(", ");
                query.push_str(part);
            }
        }
        query
    }
}

#[derive(Debug, Clone)]
pub struct NominatimClient {
    config: NominatimConfig,
    client: reqwest::blocking::Client,
}

impl NominatimClient {
    pub fn new(config: NominatimConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &NominatimConfig {
        &self.config
    }
}

impl Geocoder for NominatimClient {
    fn geocode(&self, place: &str) -> Option<Location> {
        let query = self.config.compose_query(place);
        let url = format!("{}/search", self.config.base_url.trim_end_matches('/'));

        let response = self
            .client
            .get(url)
            .query(&[("q", query.as_str()), ("format", "json")])
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<Vec<NominatimPlace>>());

        match response {
            Ok(places) => {
                let location = first_location(&query, &places);
                match &location {
                    Some(found) => debug!(query = %query, lat = found.lat, lon = found.lon, "geocoded"),
                    None => warn!(query = %query, "location not found or invalid response"),
                }
                location
            }
            Err(err) => {
                error!(query = %query, "error geocoding: {}", err);
                None
            }
        }
    }
}

/// Nominatim returns coordinates as decimal strings.
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

fn first_location(name: &str, places: &[NominatimPlace]) -> Option<Location> {
    let place = places.first()?;
    let lat = place.lat.trim().parse::<f64>().ok()?;
    let lon = place.lon.trim().parse::<f64>().ok()?;
    let location = Location::new(name, lat, lon);
    location.validate().ok()?;
    Some(location)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_query_plain() {
        let config = NominatimConfig::default();
        assert_eq!(config.compose_query("  Louvre "), "Louvre");
    }

    #[test]
    fn test_compose_query_with_city_and_country() {
        let config = NominatimConfig {
            city: Some("Paris".to_string()),
            country: Some("France".to_string()),
            ..NominatimConfig::default()
        };
        assert_eq!(config.compose_query("Louvre"), "Louvre, Paris, France");
    }

    #[test]
    fn test_compose_query_skips_blank_parts() {
        let config = NominatimConfig {
            city: Some("  ".to_string()),
            country: Some("France".to_string()),
            ..NominatimConfig::default()
        };
        assert_eq!(config.compose_query("Louvre"), "Louvre, France");
    }

    #[test]
    fn test_first_location_takes_first_hit() {
        let body = r#"[
            {"place_id": 1, "lat": "48.8611473", "lon": "2.3380277", "display_name": "Louvre"},
            {"place_id": 2, "lat": "10.0", "lon": "10.0", "display_name": "Elsewhere"}
        ]"#;
        let places: Vec<NominatimPlace> = serde_json::from_str(body).unwrap();
        let location = first_location("Louvre, Paris", &places).unwrap();
        assert_eq!(location.name, "Louvre, Paris");
        assert_eq!(location.coords(), (48.8611473, 2.3380277));
    }

    #[test]
    fn test_first_location_empty_response() {
        assert!(first_location("Atlantis", &[]).is_none());
    }

    #[test]
    fn test_first_location_rejects_garbage_coordinates() {
        let places = vec![NominatimPlace {
            lat: "north".to_string(),
            lon: "2.3".to_string(),
        }];
        assert!(first_location("x", &places).is_none());

        let places = vec![NominatimPlace {
            lat: "95.0".to_string(),
            lon: "2.3".to_string(),
        }];
        assert!(first_location("x", &places).is_none());
    }

    #[test]
    fn test_client_builds_with_defaults() {
        let client = NominatimClient::new(NominatimConfig::default()).unwrap();
        assert!(client.config().user_agent.starts_with("itinerary-planner/"));
    }
}
