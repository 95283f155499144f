use axum::extract::Query;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::domain::places::ports::PlacesGateway;
use crate::inbound::http::router::AppState;

pub async fn geocode(
    State(state): State<AppState>,
    Query(params): Query<GeocodeParams>,
) -> Result<Json<GeocodeResponseData>, ApiError> {
    let results = state
        .places_gateway
        .geocode(&params.address)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(GeocodeResponseData { results }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GeocodeParams {
    address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeocodeResponseData {
    pub results: Vec<serde_json::Value>,
}
