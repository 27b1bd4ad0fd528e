//! Signed Validator Registrations
//!
//! The payload a validator submits to opt in to a relay: the fee recipient and
//! gas limit it wants used for its slots, signed with its BLS key. The JSON
//! form follows the builder API (`0x` hex for byte fields, quoted decimal
//! integers).

use crate::error::Result;
use alloy_primitives::{Address, FixedBytes};
use serde::{Deserialize, Serialize};

// =============================================================================
// BLS Types
// =============================================================================

/// Compressed BLS12-381 G1 public key identifying a validator
pub type PublicKey = FixedBytes<48>;

/// Compressed BLS12-381 G2 signature
pub type BlsSignature = FixedBytes<96>;

// =============================================================================
// Registration Message
// =============================================================================

/// Registration message signed by the validator
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidatorRegistration {
    /// Address that should receive block rewards
    pub fee_recipient: Address,
    /// Preferred gas limit for proposed blocks
    #[serde(with = "serde_utils::quoted_u64")]
    pub gas_limit: u64,
    /// Unix timestamp (seconds) chosen by the validator
    #[serde(with = "serde_utils::quoted_u64")]
    pub timestamp: u64,
    /// Validator public key
    pub pubkey: PublicKey,
}

impl ValidatorRegistration {
    /// Create a registration message
    pub fn new(pubkey: PublicKey, fee_recipient: Address, gas_limit: u64, timestamp: u64) -> Self {
        Self {
            fee_recipient,
            gas_limit,
            timestamp,
            pubkey,
        }
    }
}

// =============================================================================
// Signed Registration
// =============================================================================

/// Registration message together with the validator's signature over it
///
/// The signature is carried as-is. Callers verify it before saving.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignedValidatorRegistration {
    pub message: ValidatorRegistration,
    pub signature: BlsSignature,
}

impl SignedValidatorRegistration {
    pub fn new(message: ValidatorRegistration, signature: BlsSignature) -> Self {
        Self { message, signature }
    }

    /// Key this registration is stored under
    #[inline]
    pub fn pubkey(&self) -> &PublicKey {
        &self.message.pubkey
    }

    #[inline]
    pub fn fee_recipient(&self) -> &Address {
        &self.message.fee_recipient
    }

    #[inline]
    pub fn gas_limit(&self) -> u64 {
        self.message.gas_limit
    }

    #[inline]
    pub fn timestamp(&self) -> u64 {
        self.message.timestamp
    }

    /// Decode a single registration from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a JSON array of registrations, preserving order
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encode to the JSON form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// =============================================================================
// Tests
// =============================================================================
