use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::delete;
use axum::routing::get;
use axum::routing::post;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::create_reminder::create_reminder;
use super::handlers::delete_reminder::delete_reminder;
use super::handlers::geocode::geocode;
use super::handlers::list_reminders::list_reminders;
use super::handlers::login::login;
use super::handlers::nearby_places::nearby_places;
use super::handlers::register::register;
use super::middleware::authenticate as auth_middleware;
use crate::domain::reminder::service::ReminderService;
use crate::domain::user::service::AccountService;
use crate::outbound::gateways::GooglePlacesGateway;
use crate::outbound::repositories::reminder::PostgresReminderRepository;
use crate::outbound::repositories::user::PostgresUserRepository;

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService<PostgresUserRepository>>,
    pub reminder_service: Arc<ReminderService<PostgresReminderRepository>>,
    pub places_gateway: Arc<GooglePlacesGateway>,
}

pub fn create_router(
    account_service: Arc<AccountService<PostgresUserRepository>>,
    reminder_service: Arc<ReminderService<PostgresReminderRepository>>,
    places_gateway: Arc<GooglePlacesGateway>,
) -> Router {
    let state = AppState {
        account_service,
        reminder_service,
        places_gateway,
    };

    let public_routes = Router::new()
        .route("/users/", post(register))
        .route("/token", post(login))
        .route("/api/places/nearby", get(nearby_places))
        .route("/api/geocode", get(geocode));

    let protected_routes = Router::new()
        .route("/reminders/", post(create_reminder).get(list_reminders))
        .route("/reminders/:reminder_id", delete(delete_reminder))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
