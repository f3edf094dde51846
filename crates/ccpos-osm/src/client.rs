//! HTTP client for the OpenStreetMap node API.
//!
//! Wraps `reqwest` with the import pipeline's deliberately coarse failure
//! contract: HTTP 404, any other non-success status, transport failures,
//! and parse failures all surface as [`OsmError::NodeNotFound`]. The
//! discarded detail is logged here, at the point of failure.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{error, info, warn};

use crate::error::OsmError;
use crate::parse::parse_node_xml;
use crate::types::OsmNode;

const DEFAULT_BASE_URL: &str = "https://www.openstreetmap.org/api/0.6/node";

/// Client for the OSM node endpoint (`{base_url}/{node_id}`).
///
/// Use [`OsmClient::new`] for production or [`OsmClient::with_base_url`] to
/// point at a mock server in tests. One invocation makes exactly one
/// outbound request; there are no retries.
pub struct OsmClient {
    client: Client,
    base_url: String,
}

impl OsmClient {
    /// Creates a client pointed at the production OSM API.
    ///
    /// # Errors
    ///
    /// Returns [`reqwest::Error`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(timeout_secs: u64) -> Result<Self, reqwest::Error> {
        Self::with_base_url(timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`reqwest::Error`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(timeout_secs: u64, base_url: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("ccpos/0.1 (campus POS import)")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Fetches and parses a single OSM node.
    ///
    /// # Errors
    ///
    /// Returns [`OsmError::NodeNotFound`] for every failure mode: HTTP 404,
    /// any other non-2xx status, network failure, malformed XML, or a node
    /// ID mismatch in the response body.
    pub async fn fetch_node(&self, node_id: i64) -> Result<OsmNode, OsmError> {
        info!(node_id, "fetching OSM node");

        let url = self.node_url(node_id);
        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                error!(node_id, error = %e, "OSM request failed");
                return Err(OsmError::NodeNotFound(node_id));
            }
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            warn!(node_id, "OSM node not found (HTTP 404)");
            return Err(OsmError::NodeNotFound(node_id));
        }
        if !status.is_success() {
            error!(node_id, status = %status, "unexpected HTTP status from OSM API");
            return Err(OsmError::NodeNotFound(node_id));
        }

        let body = match response.text().await {
            Ok(b) => b,
            Err(e) => {
                error!(node_id, error = %e, "failed to read OSM response body");
                return Err(OsmError::NodeNotFound(node_id));
            }
        };

        parse_node_xml(&body, node_id)
    }

    fn node_url(&self, node_id: i64) -> String {
        format!("{}/{node_id}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_url_appends_id_as_path_segment() {
        let client = OsmClient::with_base_url(30, "https://www.openstreetmap.org/api/0.6/node")
            .expect("client construction should not fail");
        assert_eq!(
            client.node_url(240_109_189),
            "https://www.openstreetmap.org/api/0.6/node/240109189"
        );
    }

    #[test]
    fn node_url_strips_trailing_slash() {
        let client = OsmClient::with_base_url(30, "http://localhost:8080/nodes/")
            .expect("client construction should not fail");
        assert_eq!(client.node_url(7), "http://localhost:8080/nodes/7");
    }
}
