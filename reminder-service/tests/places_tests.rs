mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::method;
use wiremock::matchers::path;
use wiremock::matchers::query_param;
use wiremock::Mock;
use wiremock::MockServer;
use wiremock::ResponseTemplate;

#[tokio::test]
async fn test_nearby_places_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .and(query_param("location", "45.5,-122.6"))
        .and(query_param("radius", "500"))
        .and(query_param("type", "cafe"))
        .and(query_param("key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [
                {
                    "place_id": "ChIJexample",
                    "name": "Good Coffee",
                    "vicinity": "123 Main St",
                    "geometry": { "location": { "lat": 45.5001, "lng": -122.6002 } },
                    "types": ["cafe", "food"]
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let app = TestApp::spawn_with_places(&mock_server.uri()).await;

    let response = app
        .get("/api/places/nearby?latitude=45.5&longitude=-122.6&place_type=cafe&radius=500")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let places = body["places"].as_array().unwrap();
    assert_eq!(places.len(), 1);
    assert_eq!(places[0]["place_id"], "ChIJexample");
    assert_eq!(places[0]["name"], "Good Coffee");
    assert_eq!(places[0]["vicinity"], "123 Main St");
    assert_eq!(places[0]["geometry"]["location"]["lat"], 45.5001);
    assert_eq!(places[0]["types"], json!(["cafe", "food"]));
}

#[tokio::test]
async fn test_nearby_places_default_radius() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .and(query_param("radius", "1000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": []
        })))
        .mount(&mock_server)
        .await;

    let app = TestApp::spawn_with_places(&mock_server.uri()).await;

    let response = app
        .get("/api/places/nearby?latitude=45.5&longitude=-122.6&place_type=cafe")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_nearby_places_zero_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ZERO_RESULTS"
        })))
        .mount(&mock_server)
        .await;

    let app = TestApp::spawn_with_places(&mock_server.uri()).await;

    let response = app
        .get("/api/places/nearby?latitude=45.5&longitude=-122.6&place_type=cafe")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["places"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_nearby_places_provider_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/place/nearbysearch/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "REQUEST_DENIED"
        })))
        .mount(&mock_server)
        .await;

    let app = TestApp::spawn_with_places(&mock_server.uri()).await;

    let response = app
        .get("/api/places/nearby?latitude=45.5&longitude=-122.6&place_type=cafe")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_geocode_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .and(query_param("address", "1600 Amphitheatre Parkway"))
        .and(query_param("key", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "OK",
            "results": [
                {
                    "formatted_address": "1600 Amphitheatre Pkwy, Mountain View, CA",
                    "geometry": { "location": { "lat": 37.4224, "lng": -122.0842 } }
                }
            ]
        })))
        .mount(&mock_server)
        .await;

    let app = TestApp::spawn_with_places(&mock_server.uri()).await;

    let response = app
        .get("/api/geocode?address=1600%20Amphitheatre%20Parkway")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = response.json().await.expect("Failed to parse response");
    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 1);
    // Provider result objects pass through verbatim.
    assert_eq!(
        results[0]["formatted_address"],
        "1600 Amphitheatre Pkwy, Mountain View, CA"
    );
}

#[tokio::test]
async fn test_geocode_non_ok_status_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocode/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ZERO_RESULTS",
            "results": []
        })))
        .mount(&mock_server)
        .await;

    let app = TestApp::spawn_with_places(&mock_server.uri()).await;

    let response = app
        .get("/api/geocode?address=nowhere")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_unreachable_provider_is_error() {
    // No mock server: connections to this port are refused.
    let app = TestApp::spawn_with_places("http://127.0.0.1:1").await;

    let response = app
        .get("/api/places/nearby?latitude=45.5&longitude=-122.6&place_type=cafe")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
