//! Embedded 12-byte object ids.
//!
//! The 12 bytes are a 4-byte timestamp (seconds since the Unix epoch)
//! followed by an 8-byte opaque tail (per-process random value and counter).
//! The text form is 24 hex characters.

use chrono::{DateTime, Utc};

use crate::ObjectIdError;

/// Length of the text form.
pub const OBJECT_ID_LEN: usize = 24;

const TIMESTAMP_LEN: usize = 8;

/// A 12-byte object id together with its text form.
///
/// Parsing keeps the text exactly as given, so re-encoding an identifier
/// reproduces its input byte for byte (including hex case). Ids built from
/// numbers or bytes always get a zero-padded lowercase text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId {
    timestamp: u32,
    tail: u64,
    text: String,
}

impl ObjectId {
    /// Creates an object id from its numeric parts.
    #[must_use]
    pub fn new(timestamp: u32, tail: u64) -> Self {
        Self {
            timestamp,
            tail,
            text: format!("{timestamp:08x}{tail:016x}"),
        }
    }

    /// Creates an object id from its 12 raw bytes.
    #[must_use]
    pub fn from_bytes(bytes: [u8; 12]) -> Self {
        let mut timestamp = [0u8; 4];
        let mut tail = [0u8; 8];
        timestamp.copy_from_slice(&bytes[..4]);
        tail.copy_from_slice(&bytes[4..]);
        Self {
            timestamp: u32::from_be_bytes(timestamp),
            tail: u64::from_be_bytes(tail),
            text: hex::encode(bytes),
        }
    }

    /// Parses the 24-character text form.
    pub fn parse(s: &str) -> Result<Self, ObjectIdError> {
        if s.len() != OBJECT_ID_LEN {
            return Err(ObjectIdError::InvalidLength { len: s.len() });
        }
        let bytes = s.as_bytes();

        let mut timestamp = [0u8; 4];
        hex::decode_to_slice(&bytes[..TIMESTAMP_LEN], &mut timestamp)
            .map_err(|_| ObjectIdError::InvalidTimestamp)?;

        let mut tail = [0u8; 8];
        hex::decode_to_slice(&bytes[TIMESTAMP_LEN..], &mut tail)
            .map_err(|_| ObjectIdError::InvalidTail)?;

        Ok(Self {
            timestamp: u32::from_be_bytes(timestamp),
            tail: u64::from_be_bytes(tail),
            text: s.to_string(),
        })
    }

    /// Seconds since the Unix epoch.
    #[must_use]
    pub const fn timestamp(&self) -> u32 {
        self.timestamp
    }

    /// The opaque 8-byte tail.
    #[must_use]
    pub const fn tail(&self) -> u64 {
        self.tail
    }

    /// The text form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The 12 raw bytes.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 12] {
        let mut bytes = [0u8; 12];
        bytes[..4].copy_from_slice(&self.timestamp.to_be_bytes());
        bytes[4..].copy_from_slice(&self.tail.to_be_bytes());
        bytes
    }

    /// The embedded timestamp as a UTC time.
    #[must_use]
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(i64::from(self.timestamp), 0)
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl std::str::FromStr for ObjectId {
    type Err = ObjectIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl serde::Serialize for ObjectId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

impl<'de> serde::Deserialize<'de> for ObjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
