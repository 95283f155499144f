use serde_json::Value;

/// Nearby-places search request.
#[derive(Debug, Clone)]
pub struct NearbySearch {
    pub latitude: f64,
    pub longitude: f64,
    pub place_type: String,
    pub radius: f64,
}

impl NearbySearch {
    /// Search radius in meters used when the client does not supply one.
    pub const DEFAULT_RADIUS: f64 = 1000.0;
}

/// A place as returned by the nearby search.
///
/// `geometry` is passed through from the provider verbatim; its shape is
/// owned by the provider, not this service.
#[derive(Debug, Clone)]
pub struct Place {
    pub place_id: String,
    pub name: String,
    pub vicinity: String,
    pub geometry: Value,
    pub types: Vec<String>,
}
