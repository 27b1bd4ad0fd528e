//! Registration Types
//!
//! Validator identities and the signed registration records keyed by them.

mod registration;

pub use alloy_primitives::Address;
pub use registration::{BlsSignature, PublicKey, SignedValidatorRegistration, ValidatorRegistration};
