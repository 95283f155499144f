use axum::extract::Query;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::PlaceData;
use crate::domain::places::models::NearbySearch;
use crate::domain::places::ports::PlacesGateway;
use crate::inbound::http::router::AppState;

pub async fn nearby_places(
    State(state): State<AppState>,
    Query(params): Query<NearbyPlacesParams>,
) -> Result<Json<PlacesResponseData>, ApiError> {
    let query = NearbySearch {
        latitude: params.latitude,
        longitude: params.longitude,
        place_type: params.place_type,
        radius: params.radius.unwrap_or(NearbySearch::DEFAULT_RADIUS),
    };

    let places = state
        .places_gateway
        .nearby_search(query)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(PlacesResponseData {
        places: places.into_iter().map(PlaceData::from).collect(),
    }))
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NearbyPlacesParams {
    latitude: f64,
    longitude: f64,
    place_type: String,
    radius: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacesResponseData {
    pub places: Vec<PlaceData>,
}
