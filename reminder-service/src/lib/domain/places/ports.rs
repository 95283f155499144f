use async_trait::async_trait;
use serde_json::Value;

use crate::domain::places::errors::PlacesError;
use crate::domain::places::models::NearbySearch;
use crate::domain::places::models::Place;

/// Port for the external mapping provider.
///
/// Read-only; both lookups forward a single request and reshape the answer.
#[async_trait]
pub trait PlacesGateway: Send + Sync + 'static {
    /// Search for places around a coordinate.
    ///
    /// # Returns
    /// Reshaped place records; empty when the provider has no results
    ///
    /// # Errors
    /// * `PlacesError` - provider unreachable or returned an error status
    async fn nearby_search(&self, query: NearbySearch) -> Result<Vec<Place>, PlacesError>;

    /// Geocode a free-form address.
    ///
    /// # Returns
    /// Provider result objects, passed through verbatim
    ///
    /// # Errors
    /// * `PlacesError` - provider unreachable or returned an error status
    async fn geocode(&self, address: &str) -> Result<Vec<Value>, PlacesError>;
}
