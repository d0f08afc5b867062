//! Sequential field reader.

use std::iter::FusedIterator;

use crate::codec;
use crate::object_id::OBJECT_ID_LEN;
use crate::{Component, FieldError};

/// Reads exactly `count` fields from a string, then checks what is left.
///
/// After the last field the input must be fully consumed, or, when a
/// trailing object id is expected, exactly [`OBJECT_ID_LEN`] characters must
/// remain (the object id itself is validated elsewhere).
///
/// The reader is forward-only. Every problem collapses to `None` from
/// [`Iterator::next`]; the first one is kept and can be read back with
/// [`FieldParser::failure`]. Once a read has failed, all further reads
/// yield `None`.
///
/// ```
/// use tenant_id::{Component, FieldParser};
///
/// let fields: Vec<_> = FieldParser::new(3, "0101120", false).collect();
/// assert_eq!(fields, [1u32, 1, 0x20].map(Component::from));
/// ```
#[derive(Debug, Clone)]
pub struct FieldParser<'a> {
    input: &'a str,
    count: usize,
    read: usize,
    cursor: usize,
    trailing_object_id: bool,
    failure: Option<FieldError>,
}

impl<'a> FieldParser<'a> {
    /// Creates a reader for `count` fields over `input`.
    #[must_use]
    pub const fn new(count: usize, input: &'a str, trailing_object_id: bool) -> Self {
        Self {
            input,
            count,
            read: 0,
            cursor: 0,
            trailing_object_id,
            failure: None,
        }
    }

    /// Byte offset of the next field.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.cursor
    }

    /// Number of fields decoded so far.
    #[must_use]
    pub const fn fields_read(&self) -> usize {
        self.read
    }

    /// Why the last `None` was returned.
    ///
    /// [`FieldError::Exhausted`] when nothing failed and every field has
    /// been read.
    #[must_use]
    pub fn failure(&self) -> FieldError {
        self.failure.unwrap_or(FieldError::Exhausted)
    }

    fn try_next(&mut self) -> Result<Component, FieldError> {
        if let Some(failure) = self.failure {
            return Err(failure);
        }
        if self.read >= self.count {
            return Err(FieldError::Exhausted);
        }

        let (component, consumed) = codec::decode_component(self.input, self.cursor)?;
        self.cursor += consumed;
        self.read += 1;

        if self.read == self.count {
            let expected = if self.trailing_object_id {
                OBJECT_ID_LEN
            } else {
                0
            };
            let actual = self.input.len().saturating_sub(self.cursor);
            if actual != expected {
                return Err(FieldError::TrailingGarbage { expected, actual });
            }
        }

        Ok(component)
    }
}

impl Iterator for FieldParser<'_> {
    type Item = Component;

    fn next(&mut self) -> Option<Component> {
        match self.try_next() {
            Ok(component) => Some(component),
            Err(FieldError::Exhausted) => None,
            Err(failure) => {
                self.failure = Some(failure);
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failure.is_some() {
            return (0, Some(0));
        }
        (0, Some(self.count - self.read))
    }
}

impl FusedIterator for FieldParser<'_> {}
