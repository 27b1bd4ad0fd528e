//! Relay Datastore - Validator Registration Registry
//!
//! Tracks which validators have opted in to a block-building relay and with
//! which fee recipient and gas limit, keyed by the validator's BLS public key.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │              Callers (registration / getHeader APIs)         │
//! └──────────────────────────────┬───────────────────────────────┘
//!                                │  Datastore trait
//!                 ┌──────────────┴──────────────┐
//!                 │                             │
//!      ┌──────────┴──────────┐       ┌──────────┴──────────┐
//!      │   MemoryDatastore   │       │   durable backends  │
//!      │ RwLock<HashMap<..>> │       │   (other crates)    │
//!      └─────────────────────┘       └─────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`datastore`]: Datastore traits and the in-memory backend
//! - [`types`]: Public keys and signed registration records
//! - [`error`]: Error types and handling
//!
//! # Example
//!
//! ```
//! use relay_datastore::{Datastore, MemoryDatastore, RequestCounter};
//! use relay_datastore::{Address, BlsSignature, PublicKey};
//! use relay_datastore::{SignedValidatorRegistration, ValidatorRegistration};
//!
//! let store = MemoryDatastore::new();
//! let pubkey = PublicKey::repeat_byte(0x01);
//! let registration = SignedValidatorRegistration::new(
//!     ValidatorRegistration::new(pubkey, Address::repeat_byte(0xaa), 30_000_000, 1_700_000_000),
//!     BlsSignature::repeat_byte(0x02),
//! );
//!
//! store.save_validator_registration(registration.clone()).unwrap();
//! assert_eq!(store.get_validator_registration(&pubkey).unwrap(), Some(registration));
//! assert_eq!(store.request_count("GetValidatorRegistration"), 1);
//! ```

pub mod datastore;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use datastore::{
    BoxedDatastore, Datastore, DatastoreMethod, MemoryDatastore, MemoryDatastoreConfig,
    RequestCounter, RequestCounts, RequestCountsSnapshot, SharedDatastore,
};

pub use error::{Error, Result};

pub use types::{Address, BlsSignature, PublicKey, SignedValidatorRegistration, ValidatorRegistration};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
