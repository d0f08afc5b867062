//! Behavior shared by every identifier kind.

use std::fmt;

use crate::object_id::OBJECT_ID_LEN;
use crate::{codec, Component, CustomerId, FieldParser, IdError, IdType, ObjectId};

/// Common interface of the concrete identifier types.
pub trait Identifier: Sized + fmt::Display {
    /// The kind, and therefore the tag, of this identifier.
    const ID_TYPE: IdType;

    /// Parses the encoded form.
    fn parse(s: &str) -> Result<Self, IdError>;

    /// Ancestry components, outermost first. Never includes the object id.
    fn components(&self) -> &[Component];

    /// The customer at the top of the hierarchy.
    fn root(&self) -> CustomerId;

    /// The embedded object id, for resource kinds.
    fn object_id(&self) -> Option<&ObjectId> {
        None
    }
}

/// Identifiers with a parent in the hierarchy.
///
/// Resource kinds have the plain kind at the same level as parent; plain
/// kinds below the top have the plain kind one level up.
pub trait HasParent: Identifier {
    type Parent: Identifier;

    fn parent(&self) -> Self::Parent;
}

/// Checks the tag and returns the rest of the input.
fn strip_tag(id_type: IdType, input: &str) -> Result<&str, IdError> {
    let mut chars = input.chars();
    match chars.next() {
        None => Err(IdError::Empty),
        Some(tag) if tag == id_type.tag() => Ok(chars.as_str()),
        Some(actual) => Err(IdError::WrongTag {
            expected: id_type,
            actual,
        }),
    }
}

fn read_fields<const N: usize>(
    id_type: IdType,
    input: &str,
    mut parser: FieldParser<'_>,
    pieces: [&'static str; N],
) -> Result<[Component; N], IdError> {
    let mut components = [Component::MIN; N];
    for (slot, piece) in components.iter_mut().zip(pieces) {
        *slot = parser
            .next()
            .ok_or_else(|| IdError::from_field(id_type, input, piece, parser.failure()))?;
    }
    Ok(components)
}

/// Decodes `<tag><field>{N}`.
pub(crate) fn decode_plain<const N: usize>(
    id_type: IdType,
    input: &str,
    pieces: [&'static str; N],
) -> Result<[Component; N], IdError> {
    let rest = strip_tag(id_type, input)?;
    read_fields(id_type, input, FieldParser::new(N, rest, false), pieces)
}

/// Decodes `<tag><field>{N}<object id>`.
///
/// The object id is taken from the last 24 characters of the whole input
/// and validated before the fields are read.
pub(crate) fn decode_resource<const N: usize>(
    id_type: IdType,
    input: &str,
    pieces: [&'static str; N],
) -> Result<([Component; N], ObjectId), IdError> {
    let rest = strip_tag(id_type, input)?;

    // Off a char boundary means the window's first byte is a UTF-8
    // continuation byte, which sits in the timestamp half.
    let object_id_text = match input.len().checked_sub(OBJECT_ID_LEN) {
        Some(start) => input
            .get(start..)
            .ok_or(IdError::InvalidObjectIdHex { part: "timestamp" })?,
        None => input,
    };
    let object_id = ObjectId::parse(object_id_text)?;

    let components = read_fields(id_type, input, FieldParser::new(N, rest, true), pieces)?;
    Ok((components, object_id))
}

/// Writes `<tag><field>...` for the given components.
pub(crate) fn write_encoded(
    f: &mut fmt::Formatter<'_>,
    id_type: IdType,
    components: &[Component],
) -> fmt::Result {
    fmt::Write::write_char(f, id_type.tag())?;
    for component in components {
        codec::write_component(f, *component)?;
    }
    Ok(())
}
