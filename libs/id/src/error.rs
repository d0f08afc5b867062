//! Error types for identifier parsing and validation.

use thiserror::Error;

use crate::IdType;

/// Failure decoding one length-prefixed hex field.
///
/// Offsets are byte positions in the field sequence (the input after the tag).
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// The input ended before the length digit or the digits it announces.
    #[error("field truncated at offset {offset}")]
    Truncated { offset: usize },

    /// A length or value character is not a hex digit.
    #[error("invalid hex digit at offset {offset}")]
    InvalidHex { offset: usize },

    /// The decoded value needs the 64th bit.
    #[error("value at offset {offset} exceeds 0x7FFFFFFFFFFFFFFF")]
    Overflow { offset: usize },

    /// The last field did not leave exactly the expected number of characters.
    #[error("expected {expected} characters after the last field, found {actual}")]
    TrailingGarbage { expected: usize, actual: usize },

    /// Every expected field has already been read.
    #[error("no fields left to read")]
    Exhausted,
}

/// Errors from parsing an embedded object id.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ObjectIdError {
    /// The text is not exactly 24 characters long.
    #[error("invalid length {len}, expected 24 characters (12 bytes)")]
    InvalidLength { len: usize },

    /// The first 8 characters are not hex.
    #[error("invalid timestamp")]
    InvalidTimestamp,

    /// The last 16 characters are not hex.
    #[error("invalid tail")]
    InvalidTail,
}

/// Errors that can occur when parsing or constructing identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The ID string is empty.
    #[error("ID cannot be empty")]
    Empty,

    /// The leading tag belongs to a different kind.
    #[error("invalid ID tag: expected '{}' ({expected}), got '{actual}'", .expected.tag())]
    WrongTag { expected: IdType, actual: char },

    /// The leading character is not a known tag.
    #[error("unknown ID tag '{0}'")]
    UnknownTag(char),

    /// A kind name that matches no tag or slug.
    #[error("unknown identifier kind '{0}'")]
    UnknownKind(String),

    /// The tag is reserved but has no identifier type yet.
    #[error("{} (tag '{}') is reserved and not implemented", .0, .0.tag())]
    Unimplemented(IdType),

    /// A component field is truncated, is not hex, or is missing.
    #[error("unable to parse '{input}' into {kind}: missing {piece} ({reason})")]
    MalformedField {
        kind: IdType,
        input: String,
        piece: &'static str,
        reason: FieldError,
    },

    /// A component field exceeds 0x7FFFFFFFFFFFFFFF.
    #[error("unable to parse '{input}' into {kind}: {piece} overflows 63 bits")]
    Overflow {
        kind: IdType,
        input: String,
        piece: &'static str,
    },

    /// Characters are left over after the last component (or the object id
    /// slot has the wrong size).
    #[error(
        "unable to parse '{input}' into {kind}: expected {expected} characters after the last field, found {actual}"
    )]
    TrailingGarbage {
        kind: IdType,
        input: String,
        expected: usize,
        actual: usize,
    },

    /// The object id slot is not 24 characters.
    #[error("invalid object id: length {len}, expected 24 characters (12 bytes)")]
    InvalidObjectIdLength { len: usize },

    /// Part of the object id is not hex.
    #[error("invalid object id: {part} is not valid hex")]
    InvalidObjectIdHex { part: &'static str },

    /// A component value is outside `0..=0x7FFFFFFFFFFFFFFF`.
    #[error("component {value} is out of range 0..=0x7FFFFFFFFFFFFFFF")]
    ComponentOutOfRange { value: i128 },

    /// An [`EntityId`](crate::EntityId) holds a different kind than requested.
    #[error("expected {expected}, got {actual}")]
    WrongKind { expected: IdType, actual: IdType },
}

impl IdError {
    /// Builds the identifier-level error for a failed field read.
    pub(crate) fn from_field(
        kind: IdType,
        input: &str,
        piece: &'static str,
        reason: FieldError,
    ) -> Self {
        match reason {
            FieldError::Overflow { .. } => IdError::Overflow {
                kind,
                input: input.to_string(),
                piece,
            },
            FieldError::TrailingGarbage { expected, actual } => IdError::TrailingGarbage {
                kind,
                input: input.to_string(),
                expected,
                actual,
            },
            reason => IdError::MalformedField {
                kind,
                input: input.to_string(),
                piece,
                reason,
            },
        }
    }

    /// Returns true if this error indicates the input was empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, IdError::Empty)
    }

    /// Returns true if this error is about the leading tag.
    pub fn is_tag_error(&self) -> bool {
        matches!(
            self,
            IdError::WrongTag { .. }
                | IdError::UnknownTag(_)
                | IdError::UnknownKind(_)
                | IdError::Unimplemented(_)
        )
    }

    /// Returns true if this error is about the embedded object id.
    pub fn is_object_id_error(&self) -> bool {
        matches!(
            self,
            IdError::InvalidObjectIdLength { .. } | IdError::InvalidObjectIdHex { .. }
        )
    }
}

impl From<ObjectIdError> for IdError {
    fn from(err: ObjectIdError) -> Self {
        match err {
            ObjectIdError::InvalidLength { len } => IdError::InvalidObjectIdLength { len },
            ObjectIdError::InvalidTimestamp => IdError::InvalidObjectIdHex { part: "timestamp" },
            ObjectIdError::InvalidTail => IdError::InvalidObjectIdHex { part: "tail" },
        }
    }
}
