//! Integration Tests for the PokeAPI client
//!
//! Runs the client and REPL session against a wiremock server to check the
//! full request, cache and decode cycle.

use std::time::Duration;

use pokedex::commands::{Flow, Session};
use pokedex::{Cache, PokeApiClient, PokedexError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio_test::assert_ok;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

// == Helper Functions ==

fn client_for(server: &MockServer) -> PokeApiClient {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    PokeApiClient::with_cache(&server.uri(), http, Cache::new(Duration::from_secs(300)))
}

fn location_page(
    server: &MockServer,
    names: &[&str],
    next: Option<String>,
    previous: Option<String>,
) -> serde_json::Value {
    let results: Vec<_> = names
        .iter()
        .map(|name| {
            serde_json::json!({
                "name": name,
                "url": format!("{}/location-area/{}/", server.uri(), name),
            })
        })
        .collect();
    serde_json::json!({
        "count": 40,
        "next": next,
        "previous": previous,
        "results": results,
    })
}

// == Cache Behaviour ==

#[tokio::test]
async fn test_second_request_is_served_from_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/pikachu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "pikachu",
            "base_experience": 112,
            "height": 4,
            "weight": 60,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    let first = assert_ok!(client.pokemon("pikachu").await);
    let second = assert_ok!(client.pokemon("pikachu").await);

    assert_eq!(first.name, "pikachu");
    assert_eq!(second.weight, 60);
    assert_eq!(client.cache().len(), 1);
    assert_eq!(client.cache().stats().hits, 1);
    client.shutdown().await;
}

#[tokio::test]
async fn test_not_found_is_not_cached() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/agumon"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_for(&server);

    for _ in 0..2 {
        let result = client.pokemon("agumon").await;
        assert!(matches!(result, Err(PokedexError::NotFound(_))));
    }
    assert!(client.cache().is_empty());
    client.shutdown().await;
}

#[tokio::test]
async fn test_server_error_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/location-area/eterna-forest"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let result = client.location_area("eterna-forest").await;
    assert!(matches!(result, Err(PokedexError::Status { status: 503, .. })));
    assert!(client.cache().is_empty());
    client.shutdown().await;
}

#[tokio::test]
async fn test_invalid_json_is_cached_but_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/pokemon/ditto"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ not json"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);

    for _ in 0..2 {
        let result = client.pokemon("ditto").await;
        assert!(matches!(result, Err(PokedexError::Decode(_))));
    }
    assert_eq!(client.cache().len(), 1);
    client.shutdown().await;
}

#[tokio::test]
async fn test_concurrent_requests_share_the_cache() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/location-area"))
        .respond_with(ResponseTemplate::new(200).set_body_json(location_page(
            &server,
            &["a", "b"],
            None,
            None,
        )))
        .mount(&server)
        .await;

    let client = std::sync::Arc::new(client_for(&server));
    let url = client.first_page_url();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let client = client.clone();
        let url = url.clone();
        handles.push(tokio::spawn(async move {
            client.location_areas(&url).await.map(|page| page.results.len())
        }));
    }
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), 2);
    }

    // Racing misses may each fetch, but they all land on the same key
    assert_eq!(client.cache().len(), 1);
}

// == REPL Session ==

#[tokio::test]
async fn test_session_walks_location_pages() {
    let server = MockServer::start().await;
    let page2 = format!("{}/location-area?offset=20&limit=20", server.uri());
    let page1 = format!("{}/location-area?offset=0&limit=20", server.uri());

    Mock::given(method("GET"))
        .and(path("/location-area"))
        .and(query_param("offset", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(location_page(
            &server,
            &["valley-windworks-area", "eterna-forest-area"],
            None,
            Some(page1.clone()),
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/location-area"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(location_page(
            &server,
            &["canalave-city-area", "eterna-city-area"],
            Some(page2.clone()),
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;
    // The first-page URL carries no cursor
    Mock::given(method("GET"))
        .and(path("/location-area"))
        .and(query_param_is_missing("offset"))
        .respond_with(ResponseTemplate::new(200).set_body_json(location_page(
            &server,
            &["canalave-city-area", "eterna-city-area"],
            Some(page2.clone()),
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let mut session = Session::with_rng(client_for(&server), StdRng::seed_from_u64(3));
    let mut out = Vec::new();

    assert_eq!(session.handle_line("map", &mut out).await.unwrap(), Flow::Continue);
    assert_eq!(session.handle_line("map", &mut out).await.unwrap(), Flow::Continue);
    assert_eq!(session.handle_line("mapb", &mut out).await.unwrap(), Flow::Continue);
    // Back to page two again: already cached, no second request
    assert_eq!(session.handle_line("map", &mut out).await.unwrap(), Flow::Continue);

    let out = String::from_utf8(out).unwrap();
    assert_eq!(
        out,
        "canalave-city-area\neterna-city-area\n\
         valley-windworks-area\neterna-forest-area\n\
         canalave-city-area\neterna-city-area\n\
         valley-windworks-area\neterna-forest-area\n"
    );
    assert_eq!(session.pagination().next, None);
    assert_eq!(session.pagination().previous.as_deref(), Some(page1.as_str()));

    session.shutdown().await;
}

#[tokio::test]
async fn test_session_explore_unknown_area() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/location-area/nowhere"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut session = Session::new(client_for(&server));
    let mut out = Vec::new();

    let err = session
        .handle_line("explore nowhere", &mut out)
        .await
        .unwrap_err();
    assert!(matches!(err, PokedexError::NotFound(url) if url.ends_with("/location-area/nowhere")));

    session.shutdown().await;
}
