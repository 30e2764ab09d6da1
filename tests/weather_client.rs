//! Fetch primitive behaviour against a mock upstream.

use serde_json::json;
use skyfeed::domain::weather::{JsonFetcher, WeatherError};
use skyfeed::infrastructure::http::{NwsClient, NwsClientConfig};
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const USER_AGENT: &str = "skyfeed-tests (tests@skyfeed.local)";

fn client(server: &MockServer) -> NwsClient {
    client_with_redirects(server, 5)
}

fn client_with_redirects(server: &MockServer, max_redirects: usize) -> NwsClient {
    NwsClient::new(NwsClientConfig {
        base_url: server.uri(),
        user_agent: USER_AGENT.to_string(),
        max_redirects,
    })
    .unwrap()
}

#[tokio::test]
async fn test_relative_path_resolves_against_base() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/points/1,2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(2)
        .mount(&server)
        .await;

    let c = client(&server);
    assert_eq!(c.fetch_json("/points/1,2").await.unwrap(), json!({ "ok": true }));
    assert_eq!(c.fetch_json("points/1,2").await.unwrap(), json!({ "ok": true }));
}

#[tokio::test]
async fn test_sends_identifying_and_accept_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/points/1,2"))
        .and(header("user-agent", USER_AGENT))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client(&server).fetch_json("/points/1,2").await.unwrap();
}

#[tokio::test]
async fn test_absolute_url_is_used_as_is() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gridpoints/BOU/53,74/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "properties": {} })))
        .expect(1)
        .mount(&server)
        .await;

    let url = format!("{}/gridpoints/BOU/53,74/forecast", server.uri());
    let value = client(&server).fetch_json(&url).await.unwrap();
    assert_eq!(value, json!({ "properties": {} }));
}

#[tokio::test]
async fn test_blank_input_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let c = client(&server);
    for input in ["", "   ", "\t\n"] {
        let err = c.fetch_json(input).await.unwrap_err();
        assert!(matches!(err, WeatherError::InvalidInput(_)), "{input:?}: {err:?}");
    }
}

#[tokio::test]
async fn test_redirect_is_followed_to_final_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/points/40.0066,-105.2633"))
        .respond_with(
            ResponseTemplate::new(301).insert_header("location", "/points/40.0066,-105.2633/canonical"),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/points/40.0066,-105.2633/canonical"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "properties": { "gridId": "BOU", "gridX": 53, "gridY": 74 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let value = client(&server)
        .fetch_json("/points/40.0066,-105.2633")
        .await
        .unwrap();

    assert_eq!(value["properties"]["gridId"], "BOU");
}

#[tokio::test]
async fn test_redirect_loop_is_capped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/loop"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/loop"))
        .expect(3)
        .mount(&server)
        .await;

    let err = client_with_redirects(&server, 2)
        .fetch_json("/loop")
        .await
        .unwrap_err();

    match err {
        WeatherError::TooManyRedirects { limit, last_url } => {
            assert_eq!(limit, 2);
            assert!(last_url.ends_with("/loop"));
        }
        other => panic!("expected TooManyRedirects, got {other:?}"),
    }
}

#[tokio::test]
async fn test_not_found_carries_status_and_short_excerpt() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/points/0,0"))
        .respond_with(ResponseTemplate::new(404).set_body_string("x".repeat(1000)))
        .mount(&server)
        .await;

    let err = client(&server).fetch_json("/points/0,0").await.unwrap_err();

    match err {
        WeatherError::UpstreamHttp {
            status,
            url,
            excerpt,
        } => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/points/0,0"));
            assert_eq!(excerpt.chars().count(), 200);
        }
        other => panic!("expected UpstreamHttp, got {other:?}"),
    }
}

#[tokio::test]
async fn test_redirect_without_location_is_an_upstream_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/moved"))
        .respond_with(ResponseTemplate::new(301).set_body_string("gone"))
        .mount(&server)
        .await;

    let err = client(&server).fetch_json("/moved").await.unwrap_err();
    assert!(matches!(err, WeatherError::UpstreamHttp { status: 301, .. }));
}

#[tokio::test]
async fn test_invalid_json_is_a_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/points/1,1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = client(&server).fetch_json("/points/1,1").await.unwrap_err();

    match err {
        WeatherError::ResponseParse { excerpt, .. } => {
            assert_eq!(excerpt, "<html>maintenance</html>");
        }
        other => panic!("expected ResponseParse, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_host_is_a_transport_error() {
    let c = NwsClient::new(NwsClientConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        user_agent: USER_AGENT.to_string(),
        max_redirects: 5,
    })
    .unwrap();

    let err = c.fetch_json("/points/1,1").await.unwrap_err();
    assert!(matches!(err, WeatherError::Transport { .. }));
}
