//! Supplier discovery client for the Overpass API
//!
//! Finds agricultural supply shops (agrarian and farm shops, plus
//! pharmacies stocking agrochemicals) around a point using OpenStreetMap
//! data via the Overpass API.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::geocode::Coordinates;

/// Mean Earth radius in kilometers, used for distance calculation
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Errors that can occur when searching for suppliers
#[derive(Debug, Error)]
pub enum SupplierError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// An agricultural supplier near a queried location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Supplier {
    /// Shop name from OpenStreetMap, or "Unknown Shop"
    pub name: String,
    /// OSM shop/amenity kind (agrarian, farm, pharmacy)
    pub kind: String,
    /// Latitude coordinate
    pub latitude: f64,
    /// Longitude coordinate
    pub longitude: f64,
    /// Straight-line distance from the query point in kilometers
    pub distance_km: f64,
}

/// Top-level Overpass response
#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

/// A single OSM node from Overpass
#[derive(Debug, Deserialize)]
struct OverpassElement {
    lat: Option<f64>,
    lon: Option<f64>,
    #[serde(default)]
    tags: OverpassTags,
}

#[derive(Debug, Default, Deserialize)]
struct OverpassTags {
    name: Option<String>,
    shop: Option<String>,
    amenity: Option<String>,
}

/// Client for finding nearby agricultural suppliers
#[derive(Debug, Clone)]
pub struct SupplierClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Overpass interpreter endpoint (allows override for testing)
    base_url: String,
    /// User-Agent header for API requests
    user_agent: String,
}

impl SupplierClient {
    /// Creates a new SupplierClient
    pub fn new(base_url: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into(),
            user_agent: user_agent.into(),
        }
    }

    /// Finds agricultural supply shops within a radius of the origin
    ///
    /// # Arguments
    /// * `origin` - Center of the search
    /// * `radius_m` - Search radius in meters
    ///
    /// # Returns
    /// Suppliers sorted by distance from the origin, nearest first. Nodes
    /// without coordinates are skipped.
    pub async fn find_nearby(
        &self,
        origin: Coordinates,
        radius_m: u32,
    ) -> Result<Vec<Supplier>, SupplierError> {
        let query = overpass_query(origin, radius_m);
        let response = self
            .http_client
            .post(&self.base_url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .form(&[("data", query)])
            .send()
            .await?
            .json::<OverpassResponse>()
            .await?;

        let mut suppliers: Vec<Supplier> = response
            .elements
            .into_iter()
            .filter_map(|element| to_supplier(element, origin))
            .collect();
        suppliers.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
        Ok(suppliers)
    }
}

/// Builds the Overpass QL query for agricultural shops around a point
fn overpass_query(origin: Coordinates, radius_m: u32) -> String {
    format!(
        "[out:json];(\
         node[\"shop\"=\"agrarian\"](around:{radius},{lat},{lon});\
         node[\"shop\"=\"farm\"](around:{radius},{lat},{lon});\
         node[\"amenity\"=\"pharmacy\"](around:{radius},{lat},{lon});\
         );out center;",
        radius = radius_m,
        lat = origin.latitude,
        lon = origin.longitude
    )
}

/// Converts an Overpass element to a Supplier, if it has coordinates
fn to_supplier(element: OverpassElement, origin: Coordinates) -> Option<Supplier> {
    let latitude = element.lat?;
    let longitude = element.lon?;
    let position = Coordinates {
        latitude,
        longitude,
    };

    let name = element
        .tags
        .name
        .unwrap_or_else(|| "Unknown Shop".to_string());
    let kind = element
        .tags
        .shop
        .or(element.tags.amenity)
        .unwrap_or_else(|| "unknown".to_string());

    Some(Supplier {
        name,
        kind,
        latitude,
        longitude,
        distance_km: haversine_km(origin, position),
    })
}

/// Great-circle distance between two points in kilometers
fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lon = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}
