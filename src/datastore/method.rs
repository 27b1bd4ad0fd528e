//! Datastore Request Counters
//!
//! Per-method call counters for diagnostics. One cache-line aligned atomic per
//! method keeps readers on different cores from contending on a shared line.

use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};

/// Cache line size for alignment
const CACHE_LINE_SIZE: usize = 64;

// =============================================================================
// Datastore Method
// =============================================================================

/// Operations counted by a datastore
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatastoreMethod {
    GetValidatorRegistration,
    SaveValidatorRegistration,
    SaveValidatorRegistrations,
}

impl DatastoreMethod {
    /// All counted methods
    pub const ALL: [DatastoreMethod; 3] = [
        DatastoreMethod::GetValidatorRegistration,
        DatastoreMethod::SaveValidatorRegistration,
        DatastoreMethod::SaveValidatorRegistrations,
    ];

    /// Name reported by `request_count`
    pub const fn as_str(&self) -> &'static str {
        match self {
            DatastoreMethod::GetValidatorRegistration => "GetValidatorRegistration",
            DatastoreMethod::SaveValidatorRegistration => "SaveValidatorRegistration",
            DatastoreMethod::SaveValidatorRegistrations => "SaveValidatorRegistrations",
        }
    }

    /// Look up a method by its exact name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|method| method.as_str() == name)
    }

    #[inline]
    const fn index(&self) -> usize {
        match self {
            DatastoreMethod::GetValidatorRegistration => 0,
            DatastoreMethod::SaveValidatorRegistration => 1,
            DatastoreMethod::SaveValidatorRegistrations => 2,
        }
    }
}

impl fmt::Display for DatastoreMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatastoreMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| Error::UnknownMethod {
            method: s.to_string(),
        })
    }
}

// =============================================================================
// Request Counters
// =============================================================================

/// A single counter padded to its own cache line
#[repr(C, align(64))]
#[derive(Debug, Default)]
struct PaddedCounter(AtomicU64);

const _: () = assert!(std::mem::size_of::<PaddedCounter>() == CACHE_LINE_SIZE);

/// Monotonic call counters, one per [`DatastoreMethod`]
#[derive(Debug, Default)]
pub struct RequestCounts {
    counters: [PaddedCounter; 3],
}

impl RequestCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one call to `method`
    #[inline]
    pub fn record(&self, method: DatastoreMethod) {
        self.counters[method.index()].0.fetch_add(1, Ordering::Relaxed);
    }

    /// Calls recorded for `method`
    #[inline]
    pub fn get(&self, method: DatastoreMethod) -> u64 {
        self.counters[method.index()].0.load(Ordering::Relaxed)
    }

    /// Calls recorded for the method with this exact name, 0 if unknown
    pub fn get_by_name(&self, name: &str) -> u64 {
        DatastoreMethod::from_name(name).map_or(0, |method| self.get(method))
    }

    /// Create a snapshot of current counts
    pub fn snapshot(&self) -> RequestCountsSnapshot {
        RequestCountsSnapshot {
            get_validator_registration: self.get(DatastoreMethod::GetValidatorRegistration),
            save_validator_registration: self.get(DatastoreMethod::SaveValidatorRegistration),
            save_validator_registrations: self.get(DatastoreMethod::SaveValidatorRegistrations),
        }
    }
}

/// Snapshot of request counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestCountsSnapshot {
    pub get_validator_registration: u64,
    pub save_validator_registration: u64,
    pub save_validator_registrations: u64,
}

impl RequestCountsSnapshot {
    /// Total calls across all methods
    pub fn total(&self) -> u64 {
        self.get_validator_registration
            + self.save_validator_registration
            + self.save_validator_registrations
    }
}
