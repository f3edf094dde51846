//! Integration tests for `OsmClient` using wiremock HTTP mocks.

use ccpos_osm::{OsmClient, OsmError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> OsmClient {
    OsmClient::with_base_url(30, base_url).expect("client construction should not fail")
}

fn node_xml(id: i64) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<osm version="0.6" generator="openstreetmap-cgimap">
  <node id="{id}" visible="true" version="3" lat="49.4185" lon="8.6756">
    <tag k="name" v="INF Vending"/>
    <tag k="amenity" v="vending_machine"/>
    <tag k="addr:street" v="Im Neuenheimer Feld"/>
    <tag k="addr:housenumber" v="304"/>
    <tag k="addr:postcode" v="69120"/>
    <tag k="addr:city" v="Heidelberg"/>
  </node>
</osm>"#
    )
}

#[tokio::test]
async fn fetch_node_returns_parsed_node() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(node_xml(123)))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let node = client.fetch_node(123).await.expect("should parse node");

    assert_eq!(node.node_id, 123);
    assert_eq!(node.coordinates(), Some((49.4185, 8.6756)));
    assert_eq!(node.tag("name"), Some("INF Vending"));
    assert_eq!(node.tag("amenity"), Some("vending_machine"));
}

#[tokio::test]
async fn http_404_is_node_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/404404"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_node(404_404).await;
    assert!(matches!(result, Err(OsmError::NodeNotFound(404_404))));
}

#[tokio::test]
async fn http_500_is_node_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/55"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_node(55).await;
    assert!(matches!(result, Err(OsmError::NodeNotFound(55))));
}

#[tokio::test]
async fn response_for_different_node_id_is_node_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/777"))
        .respond_with(ResponseTemplate::new(200).set_body_string(node_xml(778)))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_node(777).await;
    assert!(matches!(result, Err(OsmError::NodeNotFound(777))));
}

#[tokio::test]
async fn malformed_body_is_node_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/9"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<osm><node id="))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_node(9).await;
    assert!(matches!(result, Err(OsmError::NodeNotFound(9))));
}

#[tokio::test]
async fn unreachable_server_is_node_not_found() {
    // Nothing listens on this port; the connection is refused immediately.
    let client = test_client("http://127.0.0.1:1");
    let result = client.fetch_node(3).await;
    assert!(matches!(result, Err(OsmError::NodeNotFound(3))));
}
