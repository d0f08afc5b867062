//! # tenant-id
//!
//! Compact, self-describing identifiers for the customer → organization →
//! institution hierarchy.
//!
//! ## Design Principles
//!
//! - Identifiers are opaque strings that encode their own kind and ancestry
//! - Parsing is strict: malformed input, overflowing components and
//!   leftover characters are all rejected
//! - Identifiers round-trip (format → parse → format gives the same string)
//! - Each kind is its own type, so an organization can't be mixed up with an
//!   institution
//!
//! ## ID Format
//!
//! `{tag}{field}{1,3}[{object id}]`
//!
//! - `tag` is one character naming the kind (see [`IdType`])
//! - each `field` is one ancestry component, written as a length digit
//!   followed by up to 16 hex digits (see [`codec`])
//! - resource kinds end with a 24-character hex [`ObjectId`]
//!
//! Examples:
//! - `V01`: customer 1
//! - `T0101`: organization 1 of customer 1
//! - `R010101`: institution 1 of organization 1 of customer 1
//! - `S01016603f7b32b1753f84a719e01`: resource `6603f7b3…` of organization 1/1
//!
//! ```
//! use tenant_id::{CustomerId, InstitutionId, OrganizationId};
//!
//! let id: InstitutionId = "R010101".parse()?;
//! assert_eq!(id.root(), CustomerId::new(1u32.into()));
//! assert_eq!(id.parent(), OrganizationId::new(1u32.into(), 1u32.into()));
//! assert_eq!(id.to_string(), "R010101");
//! # Ok::<(), tenant_id::IdError>(())
//! ```

pub mod codec;
mod component;
mod entity;
mod error;
mod id_type;
mod identifier;
mod macros;
mod object_id;
mod parser;
mod registry;
mod types;

pub use component::Component;
pub use entity::EntityId;
pub use error::{FieldError, IdError, ObjectIdError};
pub use id_type::IdType;
pub use identifier::{HasParent, Identifier};
pub use object_id::{ObjectId, OBJECT_ID_LEN};
pub use parser::FieldParser;
pub use types::*;
