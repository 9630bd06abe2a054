//! Caller identity and the owner authorization guard.
//!
//! The host environment authenticates callers and supplies an [`AccountId`]
//! per invocation; this module only compares identities by value.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// 32-byte account identity established by the host environment.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccountId([u8; 32]);

impl AccountId {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Parse an identity from 64 hex characters.
    pub fn from_hex(raw: &str) -> Result<Self, hex::FromHexError> {
        let bytes = hex::decode(raw)?;
        let array: [u8; 32] = bytes
            .try_into()
            .map_err(|_| hex::FromHexError::InvalidStringLength)?;
        Ok(Self(array))
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AccountId({})", self.to_hex())
    }
}

impl Serialize for AccountId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for AccountId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::from_hex(&raw).map_err(de::Error::custom)
    }
}

/// Pure owner predicate against the single identity fixed at deployment.
#[derive(Clone, Debug)]
pub struct OwnerGuard {
    owner: AccountId,
}

impl OwnerGuard {
    pub fn new(owner: AccountId) -> Self {
        Self { owner }
    }

    /// True iff `caller` is the platform owner. Never mutates, never fails.
    pub fn is_owner(&self, caller: AccountId) -> bool {
        caller == self.owner
    }

    pub fn owner(&self) -> AccountId {
        self.owner
    }
}
