use thiserror::Error;

use crate::ports::StoreError;
use ccpos_osm::OsmError;

/// Errors surfaced by the import pipeline.
///
/// Fetch and parse failures arrive already collapsed to `NodeNotFound`.
/// Validation fails eagerly at the first missing or unparseable field.
/// `PosNotFound` and `DuplicatePosName` originate in the store and pass
/// through unchanged; only the caller can decide what to do with them.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("OSM node {0} not found")]
    NodeNotFound(i64),

    #[error("OSM node {node_id} is missing required field: {field}")]
    MissingFields { node_id: i64, field: &'static str },

    #[error("POS {0} not found")]
    PosNotFound(i64),

    #[error("a POS named \"{0}\" already exists")]
    DuplicatePosName(String),

    /// Store infrastructure failure (connection loss, query error). Not one
    /// of the business outcomes above; propagated transparently.
    #[error(transparent)]
    Store(StoreError),
}

impl From<OsmError> for ImportError {
    fn from(err: OsmError) -> Self {
        match err {
            OsmError::NodeNotFound(node_id) => ImportError::NodeNotFound(node_id),
        }
    }
}

impl From<StoreError> for ImportError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ImportError::PosNotFound(id),
            StoreError::DuplicateName(name) => ImportError::DuplicatePosName(name),
            other => ImportError::Store(other),
        }
    }
}
