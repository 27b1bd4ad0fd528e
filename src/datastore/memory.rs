//! In-Memory Datastore
//!
//! Registrations kept in a `HashMap` behind a `parking_lot::RwLock`. Lookups
//! share the lock; saves and batch saves hold it exclusively. Entries are never
//! expired or evicted.

use crate::datastore::method::{DatastoreMethod, RequestCounts, RequestCountsSnapshot};
use crate::datastore::{Datastore, RequestCounter};
use crate::error::Result;
use crate::types::{PublicKey, SignedValidatorRegistration};
use parking_lot::RwLock;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, trace};

// =============================================================================
// Memory Datastore Configuration
// =============================================================================

/// Configuration for the in-memory datastore
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MemoryDatastoreConfig {
    /// Number of registrations to preallocate room for
    pub initial_capacity: usize,
}

// =============================================================================
// Memory Datastore
// =============================================================================

/// Thread-safe in-memory validator registration store
#[derive(Debug, Default)]
pub struct MemoryDatastore {
    /// Latest registration per validator
    entries: RwLock<HashMap<PublicKey, SignedValidatorRegistration>>,
    /// Calls made per method
    request_counts: RequestCounts,
}

impl MemoryDatastore {
    /// Create an empty datastore
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty datastore with room for `capacity` validators
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(MemoryDatastoreConfig {
            initial_capacity: capacity,
        })
    }

    /// Create an empty datastore from config
    pub fn with_config(config: MemoryDatastoreConfig) -> Self {
        Self {
            entries: RwLock::new(HashMap::with_capacity(config.initial_capacity)),
            request_counts: RequestCounts::new(),
        }
    }

    /// Number of validators with a stored registration
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Calls made to `method` since construction
    pub fn method_count(&self, method: DatastoreMethod) -> u64 {
        self.request_counts.get(method)
    }

    /// Snapshot of all request counters
    pub fn request_counts(&self) -> RequestCountsSnapshot {
        self.request_counts.snapshot()
    }
}

impl Datastore for MemoryDatastore {
    fn get_validator_registration(
        &self,
        pubkey: &PublicKey,
    ) -> Result<Option<SignedValidatorRegistration>> {
        let entries = self.entries.read();
        self.request_counts
            .record(DatastoreMethod::GetValidatorRegistration);

        let entry = entries.get(pubkey).cloned();
        drop(entries);

        trace!(%pubkey, found = entry.is_some(), "Validator registration lookup");
        Ok(entry)
    }

    fn save_validator_registration(&self, entry: SignedValidatorRegistration) -> Result<()> {
        let pubkey = *entry.pubkey();
        let fee_recipient = *entry.fee_recipient();
        let gas_limit = entry.gas_limit();

        let mut entries = self.entries.write();
        self.request_counts
            .record(DatastoreMethod::SaveValidatorRegistration);
        entries.insert(pubkey, entry);
        drop(entries);

        debug!(%pubkey, %fee_recipient, gas_limit, "Saved validator registration");
        Ok(())
    }

    fn save_validator_registrations(&self, batch: Vec<SignedValidatorRegistration>) -> Result<()> {
        let batch_size = batch.len();
        let mut entries = self.entries.write();
        self.request_counts
            .record(DatastoreMethod::SaveValidatorRegistrations);

        for entry in batch {
            entries.insert(*entry.pubkey(), entry);
        }
        let registered = entries.len();
        drop(entries);

        debug!(batch_size, registered, "Saved validator registration batch");
        Ok(())
    }
}

impl RequestCounter for MemoryDatastore {
    fn request_count(&self, method: &str) -> u64 {
        self.request_counts.get_by_name(method)
    }
}

// =============================================================================
// Tests
// =============================================================================
