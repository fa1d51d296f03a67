//! Geocoding client for Nominatim
//!
//! Resolves free-text locations ("Accra, Ghana") to coordinates using the
//! OpenStreetMap Nominatim search API.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when geocoding a location
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse the API response
    #[error("Failed to parse geocoding response: {0}")]
    Parse(String),
}

/// A point on the globe
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

/// A single result from the Nominatim search endpoint
///
/// Nominatim returns coordinates as strings.
#[derive(Debug, Deserialize)]
struct NominatimRecord {
    lat: String,
    lon: String,
}

/// Client for the Nominatim geocoding API
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Base URL for the API (allows override for testing)
    base_url: String,
    /// User-Agent header, required by Nominatim's usage policy
    user_agent: String,
}

impl GeocodeClient {
    /// Creates a new GeocodeClient
    pub fn new(base_url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into(),
            user_agent: user_agent.into(),
        }
    }

    /// Resolves a location string to coordinates
    ///
    /// # Returns
    /// * `Ok(Some(Coordinates))` for a resolvable location
    /// * `Ok(None)` when Nominatim has no match
    /// * `Err(GeocodeError)` on transport or parse failures
    pub async fn lookup(&self, location: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let url = format!("{}/search", self.base_url.trim_end_matches('/'));
        let records = self
            .http_client
            .get(&url)
            .query(&[("q", location), ("format", "json"), ("limit", "1")])
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()
            .await?
            .json::<Vec<NominatimRecord>>()
            .await?;

        match records.first() {
            None => Ok(None),
            Some(record) => Ok(Some(parse_record(record)?)),
        }
    }
}

/// Parses a Nominatim record's string coordinates
fn parse_record(record: &NominatimRecord) -> Result<Coordinates, GeocodeError> {
    let latitude = record
        .lat
        .parse::<f64>()
        .map_err(|e| GeocodeError::Parse(format!("invalid latitude '{}': {}", record.lat, e)))?;
    let longitude = record
        .lon
        .parse::<f64>()
        .map_err(|e| GeocodeError::Parse(format!("invalid longitude '{}': {}", record.lon, e)))?;
    Ok(Coordinates {
        latitude,
        longitude,
    })
}
