use log::warn;
use reqwest::blocking::Client;
use serde::Deserialize;

use tourmap_core::gateways::geocode::GeoCodingGateway;
use tourmap_entities::address::Address;

pub const DEFAULT_API_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Forward geocoding via the OSM Nominatim search endpoint, restricted to
/// Brazil and the single best match.
#[derive(Debug, Clone)]
pub struct Nominatim {
    api_url: String,
    client: Client,
}

impl Nominatim {
    pub fn new(api_url: impl Into<String>) -> anyhow::Result<Self> {
        // Nominatim's usage policy requires an identifying user agent.
        let client = Client::builder()
            .user_agent(concat!("tourmap/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            api_url: api_url.into(),
            client,
        })
    }
}

/// Nominatim serializes coordinates as strings.
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
}

impl SearchResult {
    fn into_lat_lng(self) -> Option<(f64, f64)> {
        let lat = self.lat.parse().ok()?;
        let lng = self.lon.parse().ok()?;
        Some((lat, lng))
    }
}

impl GeoCodingGateway for Nominatim {
    fn resolve_address_lat_lng(&self, addr: &Address) -> Option<(f64, f64)> {
        let query = addr.to_query_string();
        if query.is_empty() {
            return None;
        }
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("q", query.as_str()),
                ("format", "json"),
                ("countrycodes", "br"),
                ("limit", "1"),
            ])
            .send();
        let response = match response {
            Ok(response) => response,
            Err(err) => {
                warn!("Geocoding request for '{query}' failed: {err}");
                return None;
            }
        };
        let results: Vec<SearchResult> = match response.json() {
            Ok(results) => results,
            Err(err) => {
                warn!("Unexpected geocoding response for '{query}': {err}");
                return None;
            }
        };
        results.into_iter().next().and_then(SearchResult::into_lat_lng)
    }
}
