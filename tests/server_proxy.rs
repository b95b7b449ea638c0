//! Round-trip tests for the proxy server
//!
//! A wiremock instance stands in for the upstream Bible provider; the proxy
//! is served on an ephemeral port and exercised with a real HTTP client.

use std::time::Duration;

use biblia::config::Config;
use biblia::server;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Spawn the proxy against the given upstream base URL, returning its own
/// base URL
async fn spawn_proxy(upstream_base: String, timeout: Duration) -> String {
    let config = Config {
        base_url: upstream_base,
        api_key: String::new(),
        port: 0,
        timeout,
    };

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        server::serve_on(listener, config).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn proxy_relays_upstream_json_verbatim() {
    let upstream = MockServer::start().await;
    let body = json!({ "passage": "João 3:16", "text": "Porque Deus amou o mundo..." });
    Mock::given(method("GET"))
        .and(path("/content/BIBLIA"))
        .and(query_param("passage", "João 3:16"))
        .and(query_param("version", "ARC"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&upstream)
        .await;

    let proxy = spawn_proxy(upstream.uri(), Duration::from_secs(5)).await;
    let response = reqwest::get(format!("{proxy}/api/bible/portuguese"))
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let relayed: Value = response.json().await.unwrap();
    assert_eq!(relayed, body);
}

#[tokio::test]
async fn proxy_forwards_passage_and_version_overrides() {
    let upstream = MockServer::start().await;
    let body = json!({ "passage": "Gênesis 1:1", "text": "No princípio..." });
    Mock::given(method("GET"))
        .and(path("/content/BIBLIA"))
        .and(query_param("passage", "Gênesis 1:1"))
        .and(query_param("version", "NVI"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&upstream)
        .await;

    let proxy = spawn_proxy(upstream.uri(), Duration::from_secs(5)).await;
    let url = format!("{proxy}/api/bible/portuguese?passage=G%C3%AAnesis%201:1&version=NVI");
    let response = reqwest::get(url).await.unwrap();

    assert_eq!(response.status(), 200);
    let relayed: Value = response.json().await.unwrap();
    assert_eq!(relayed["passage"], "Gênesis 1:1");
}

#[tokio::test]
async fn proxy_converts_upstream_failure_to_500() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/content/BIBLIA"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&upstream)
        .await;

    let proxy = spawn_proxy(upstream.uri(), Duration::from_secs(5)).await;
    let response = reqwest::get(format!("{proxy}/api/bible/portuguese"))
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Error fetching Bible text");
    let error = body["error"].as_str().unwrap();
    assert!(!error.is_empty());
    assert!(error.contains("500"));
}

#[tokio::test]
async fn proxy_converts_upstream_timeout_to_500() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/content/BIBLIA"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "text": "nunca chega" }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&upstream)
        .await;

    // Proxy timeout well below the upstream delay
    let proxy = spawn_proxy(upstream.uri(), Duration::from_millis(200)).await;
    let response = reqwest::get(format!("{proxy}/api/bible/portuguese"))
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Error fetching Bible text");
    assert!(!body["error"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn proxy_converts_non_json_upstream_body_to_500() {
    let upstream = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/content/BIBLIA"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>surprise</html>"))
        .mount(&upstream)
        .await;

    let proxy = spawn_proxy(upstream.uri(), Duration::from_secs(5)).await;
    let response = reqwest::get(format!("{proxy}/api/bible/portuguese"))
        .await
        .unwrap();

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Error fetching Bible text");
}

#[tokio::test]
async fn unknown_routes_are_not_served() {
    let upstream = MockServer::start().await;
    let proxy = spawn_proxy(upstream.uri(), Duration::from_secs(5)).await;

    let response = reqwest::get(format!("{proxy}/api/bible/english"))
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}
