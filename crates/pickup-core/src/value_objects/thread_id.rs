//! Thread ID - opaque random conversation identifier
//!
//! Thread ids are client-visible and may be probed, so they are random
//! UUIDv4 strings rather than sequential integers.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Opaque thread identifier
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ThreadId(String);

impl ThreadId {
    /// Generate a fresh globally-unique id
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an already-stored id without validation
    #[inline]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parse from string representation, validating UUID shape
    pub fn parse(s: &str) -> Result<Self, ThreadIdParseError> {
        Uuid::parse_str(s)
            .map(|u| Self(u.to_string()))
            .map_err(|_| ThreadIdParseError::InvalidFormat)
    }

    /// The id as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the underlying String
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Error when parsing a ThreadId from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ThreadIdParseError {
    #[error("invalid thread id format")]
    InvalidFormat,
}

impl fmt::Display for ThreadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ThreadId {
    type Err = ThreadIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThreadId::parse(s)
    }
}

impl Serialize for ThreadId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ThreadId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ThreadId::parse(&s).map_err(serde::de::Error::custom)
    }
}
