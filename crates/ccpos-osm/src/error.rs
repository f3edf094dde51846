use thiserror::Error;

/// Errors returned by the OSM client.
///
/// Every failure mode — HTTP 404, unexpected status, transport failure,
/// malformed XML, node ID mismatch — collapses into `NodeNotFound`. Callers
/// only ever learn "the node could not be imported"; the discarded detail
/// is emitted on the tracing channel at the point of failure. This coarse
/// contract is intentional and callers depend on it.
#[derive(Debug, Error)]
pub enum OsmError {
    #[error("OSM node {0} not found")]
    NodeNotFound(i64),
}
