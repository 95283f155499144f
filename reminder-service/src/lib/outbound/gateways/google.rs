use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::places::errors::PlacesError;
use crate::domain::places::models::NearbySearch;
use crate::domain::places::models::Place;
use crate::domain::places::ports::PlacesGateway;

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Google Maps HTTP API gateway.
///
/// Thin read-only proxy over the nearby-search and geocoding endpoints.
/// No retries and no caching of provider responses.
pub struct GooglePlacesGateway {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct NearbySearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<RawPlace>,
}

#[derive(Debug, Deserialize)]
struct RawPlace {
    #[serde(default)]
    place_id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    vicinity: String,
    #[serde(default)]
    geometry: Value,
    #[serde(default)]
    types: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResponse {
    status: String,
    #[serde(default)]
    results: Vec<Value>,
}

impl GooglePlacesGateway {
    /// Create a gateway against the production provider.
    ///
    /// # Arguments
    /// * `api_key` - Provider API key, loaded once at startup
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Create a gateway against a non-default provider URL.
    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl PlacesGateway for GooglePlacesGateway {
    async fn nearby_search(&self, query: NearbySearch) -> Result<Vec<Place>, PlacesError> {
        let url = format!("{}/place/nearbysearch/json", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                (
                    "location",
                    format!("{},{}", query.latitude, query.longitude),
                ),
                ("radius", query.radius.to_string()),
                ("type", query.place_type),
                ("key", self.api_key.clone()),
            ])
            .send()
            .await
            .map_err(|e| PlacesError::Request(e.to_string()))?;

        let body: NearbySearchResponse = response
            .json()
            .await
            .map_err(|e| PlacesError::Request(e.to_string()))?;

        // ZERO_RESULTS is a successful, empty answer.
        if body.status != "OK" && body.status != "ZERO_RESULTS" {
            tracing::error!(status = %body.status, "Nearby search rejected by provider");
            return Err(PlacesError::Provider(body.status));
        }

        let places = body
            .results
            .into_iter()
            .map(|raw| Place {
                place_id: raw.place_id,
                name: raw.name,
                vicinity: raw.vicinity,
                geometry: raw.geometry,
                types: raw.types,
            })
            .collect();

        Ok(places)
    }

    async fn geocode(&self, address: &str) -> Result<Vec<Value>, PlacesError> {
        let url = format!("{}/geocode/json", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("address", address), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| PlacesError::Request(e.to_string()))?;

        let body: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| PlacesError::Request(e.to_string()))?;

        if body.status != "OK" {
            tracing::error!(status = %body.status, "Geocoding rejected by provider");
            return Err(PlacesError::Provider(body.status));
        }

        Ok(body.results)
    }
}
