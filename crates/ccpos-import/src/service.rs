//! POS service: the upsert coordinator and the OSM import entry point.

use tracing::{debug, error, info, warn};

use ccpos_core::Pos;

use crate::error::ImportError;
use crate::mapping::pos_from_node;
use crate::ports::{NodeFetcher, PosStore};

/// Business service over a node fetcher and a POS store.
///
/// One instance per wiring; invocations share no mutable state, so
/// concurrent imports are independent. The existence-check-then-write
/// sequence in [`PosService::upsert`] is not atomic here — the store must
/// tolerate the race and enforce name uniqueness at write time.
pub struct PosService<F, S> {
    fetcher: F,
    store: S,
}

impl<F: NodeFetcher, S: PosStore> PosService<F, S> {
    pub fn new(fetcher: F, store: S) -> Self {
        Self { fetcher, store }
    }

    /// Imports a POS from an OSM node: fetch, map/validate, upsert.
    ///
    /// # Errors
    ///
    /// - [`ImportError::NodeNotFound`] if the node cannot be fetched or parsed.
    /// - [`ImportError::MissingFields`] if a required business field is
    ///   absent or unparseable.
    /// - [`ImportError::DuplicatePosName`] if the store rejects the name.
    pub async fn import_from_osm_node(&self, node_id: i64) -> Result<Pos, ImportError> {
        info!(node_id, "importing POS from OSM node");

        let node = self.fetcher.fetch_node(node_id).await?;
        let pos = pos_from_node(&node)?;
        let saved = self.upsert(pos).await?;

        info!(node_id, name = %saved.name, "imported POS from OSM node");
        Ok(saved)
    }

    /// Creates (`id` unset) or updates (`id` set) a POS.
    ///
    /// Updates confirm the record exists before any write is attempted.
    /// Name uniqueness is the store's to enforce; a conflict propagates
    /// unchanged — no retry, no rename.
    ///
    /// # Errors
    ///
    /// - [`ImportError::PosNotFound`] when updating a non-existent id.
    /// - [`ImportError::DuplicatePosName`] on a name collision.
    pub async fn upsert(&self, pos: Pos) -> Result<Pos, ImportError> {
        match pos.id {
            None => info!(name = %pos.name, "creating new POS"),
            Some(id) => {
                info!(id, "updating POS");
                self.store.get_by_id(id).await?;
            }
        }

        let name = pos.name.clone();
        match self.store.upsert(pos).await {
            Ok(saved) => {
                info!(id = ?saved.id, "upserted POS");
                Ok(saved)
            }
            Err(e) => {
                error!(name = %name, error = %e, "failed to upsert POS");
                Err(e.into())
            }
        }
    }

    /// # Errors
    ///
    /// Returns [`ImportError::PosNotFound`] if no record has `id`.
    pub async fn get_by_id(&self, id: i64) -> Result<Pos, ImportError> {
        debug!(id, "retrieving POS");
        Ok(self.store.get_by_id(id).await?)
    }

    /// # Errors
    ///
    /// Returns [`ImportError::Store`] on infrastructure failure.
    pub async fn get_all(&self) -> Result<Vec<Pos>, ImportError> {
        debug!("retrieving all POS");
        Ok(self.store.get_all().await?)
    }

    /// Deletes all POS records.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError::Store`] on infrastructure failure.
    pub async fn clear(&self) -> Result<(), ImportError> {
        warn!("clearing all POS data");
        Ok(self.store.clear().await?)
    }
}

#[cfg(test)]
#[path = "service_test.rs"]
mod service_test;
