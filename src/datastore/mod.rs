//! Validator Registration Datastores
//!
//! Backends that map a validator's public key to its latest signed
//! registration.

mod memory;
mod method;

pub use memory::{MemoryDatastore, MemoryDatastoreConfig};
pub use method::{DatastoreMethod, RequestCounts, RequestCountsSnapshot};

use crate::error::Result;
use crate::types::{PublicKey, SignedValidatorRegistration};
use std::sync::Arc;

// =============================================================================
// Datastore Trait
// =============================================================================

/// Storage operations for validator registrations
///
/// Every backend follows last-write-wins by call order: a save replaces the
/// stored registration for its pubkey without comparing message timestamps.
/// Implementations must be safe to call from many threads at once.
pub trait Datastore: Send + Sync {
    /// Get the latest registration saved for `pubkey`
    ///
    /// Returns `Ok(None)` when nothing was ever saved for it. An error means
    /// the backend itself failed.
    fn get_validator_registration(
        &self,
        pubkey: &PublicKey,
    ) -> Result<Option<SignedValidatorRegistration>>;

    /// Insert or replace the registration for its pubkey
    fn save_validator_registration(&self, entry: SignedValidatorRegistration) -> Result<()>;

    /// Save a batch of registrations in list order
    ///
    /// Later entries for the same pubkey replace earlier ones. Readers see
    /// either none or all of the batch.
    fn save_validator_registrations(&self, entries: Vec<SignedValidatorRegistration>) -> Result<()>;
}

/// Diagnostic call counters exposed by a datastore
pub trait RequestCounter: Send + Sync {
    /// Number of calls made to the method with this exact name
    ///
    /// Unknown names report 0.
    fn request_count(&self, method: &str) -> u64;
}

/// Type alias for boxed datastore
pub type BoxedDatastore = Box<dyn Datastore>;

/// Type alias for a datastore shared between handlers
pub type SharedDatastore = Arc<dyn Datastore>;

macro_rules! forward_datastore {
    ($wrapper:ident) => {
        impl<T: Datastore + ?Sized> Datastore for $wrapper<T> {
            fn get_validator_registration(
                &self,
                pubkey: &PublicKey,
            ) -> Result<Option<SignedValidatorRegistration>> {
                (**self).get_validator_registration(pubkey)
            }

            fn save_validator_registration(&self, entry: SignedValidatorRegistration) -> Result<()> {
                (**self).save_validator_registration(entry)
            }

            fn save_validator_registrations(
                &self,
                entries: Vec<SignedValidatorRegistration>,
            ) -> Result<()> {
                (**self).save_validator_registrations(entries)
            }
        }

        impl<T: RequestCounter + ?Sized> RequestCounter for $wrapper<T> {
            fn request_count(&self, method: &str) -> u64 {
                (**self).request_count(method)
            }
        }
    };
}

forward_datastore!(Arc);
forward_datastore!(Box);

// =============================================================================
// Tests
// =============================================================================
