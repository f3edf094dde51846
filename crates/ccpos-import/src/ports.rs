//! Ports to the pipeline's external collaborators.
//!
//! The service is generic over these traits so tests can substitute an
//! in-memory store and a canned fetcher without any network or database.

use thiserror::Error;

use ccpos_core::Pos;
use ccpos_osm::{OsmClient, OsmError, OsmNode};

/// Errors raised by a [`PosStore`] implementation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("POS {0} not found")]
    NotFound(i64),

    /// The store enforces name uniqueness at write time; this is the only
    /// place a duplicate name can be detected.
    #[error("a POS named \"{0}\" already exists")]
    DuplicateName(String),

    #[error(transparent)]
    Backend(Box<dyn std::error::Error + Send + Sync>),
}

/// Source of OSM node records.
#[allow(async_fn_in_trait)]
pub trait NodeFetcher {
    /// Fetches a single node by ID.
    ///
    /// # Errors
    ///
    /// Returns [`OsmError::NodeNotFound`] for every failure mode, per the
    /// client's coarse contract.
    async fn fetch_node(&self, node_id: i64) -> Result<OsmNode, OsmError>;
}

impl NodeFetcher for OsmClient {
    async fn fetch_node(&self, node_id: i64) -> Result<OsmNode, OsmError> {
        OsmClient::fetch_node(self, node_id).await
    }
}

/// Persistent store of POS records.
///
/// The store owns id/timestamp assignment and the name uniqueness
/// constraint. Existence-check-then-write is deliberately not atomic at
/// this layer; the store must keep a lost race safe (surface
/// [`StoreError::DuplicateName`] rather than corrupt state).
#[allow(async_fn_in_trait)]
pub trait PosStore {
    /// Creates (`pos.id` unset) or updates (`pos.id` set) a record and
    /// returns it with store-assigned id and timestamps.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateName`] on a name collision,
    /// [`StoreError::NotFound`] when updating a missing id.
    async fn upsert(&self, pos: Pos) -> Result<Pos, StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no record has `id`.
    async fn get_by_id(&self, id: i64) -> Result<Pos, StoreError>;

    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on infrastructure failure.
    async fn get_all(&self) -> Result<Vec<Pos>, StoreError>;

    /// Deletes all records.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] on infrastructure failure.
    async fn clear(&self) -> Result<(), StoreError>;
}
