//! Any identifier of an implemented kind.

use crate::{
    registry, Component, CustomerId, CustomerResourceId, IdError, IdType, InstitutionId,
    InstitutionResourceId, ObjectId, OrganizationId, OrganizationResourceId,
};

/// An identifier of any implemented kind, chosen by its tag.
///
/// Reserved tags (institution units, customer units) have no variant;
/// parsing them fails with [`IdError::Unimplemented`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityId {
    Customer(CustomerId),
    CustomerResource(CustomerResourceId),
    Organization(OrganizationId),
    OrganizationResource(OrganizationResourceId),
    Institution(InstitutionId),
    InstitutionResource(InstitutionResourceId),
}

/// Applies the same expression to whichever identifier the enum holds.
macro_rules! each_kind {
    ($value:expr, $id:ident => $body:expr) => {
        match $value {
            EntityId::Customer($id) => $body,
            EntityId::CustomerResource($id) => $body,
            EntityId::Organization($id) => $body,
            EntityId::OrganizationResource($id) => $body,
            EntityId::Institution($id) => $body,
            EntityId::InstitutionResource($id) => $body,
        }
    };
}

impl EntityId {
    /// Parses any identifier, dispatching on its tag.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        registry::decode(s)
    }

    /// Returns the kind of the held identifier.
    #[must_use]
    pub const fn id_type(&self) -> IdType {
        match self {
            EntityId::Customer(_) => IdType::Customer,
            EntityId::CustomerResource(_) => IdType::CustomerResource,
            EntityId::Organization(_) => IdType::Organization,
            EntityId::OrganizationResource(_) => IdType::OrganizationResource,
            EntityId::Institution(_) => IdType::Institution,
            EntityId::InstitutionResource(_) => IdType::InstitutionResource,
        }
    }

    /// Ancestry components, outermost first.
    #[must_use]
    pub fn components(&self) -> &[Component] {
        each_kind!(self, id => id.components().as_slice())
    }

    /// The customer at the top of the hierarchy.
    #[must_use]
    pub fn root(&self) -> CustomerId {
        each_kind!(self, id => id.root())
    }

    /// The parent identifier, or `None` for a customer.
    #[must_use]
    pub fn parent(&self) -> Option<EntityId> {
        match self {
            EntityId::Customer(_) => None,
            EntityId::CustomerResource(id) => Some(id.parent().into()),
            EntityId::Organization(id) => Some(id.parent().into()),
            EntityId::OrganizationResource(id) => Some(id.parent().into()),
            EntityId::Institution(id) => Some(id.parent().into()),
            EntityId::InstitutionResource(id) => Some(id.parent().into()),
        }
    }

    /// The embedded object id, for resource kinds.
    #[must_use]
    pub fn object_id(&self) -> Option<&ObjectId> {
        match self {
            EntityId::CustomerResource(id) => Some(id.object_id()),
            EntityId::OrganizationResource(id) => Some(id.object_id()),
            EntityId::InstitutionResource(id) => Some(id.object_id()),
            EntityId::Customer(_) | EntityId::Organization(_) | EntityId::Institution(_) => None,
        }
    }

    /// Returns true if this is a resource identifier.
    #[must_use]
    pub const fn is_resource(&self) -> bool {
        self.id_type().is_resource()
    }

    /// Walks up the hierarchy: the parent first, the root customer last.
    pub fn ancestors(&self) -> impl Iterator<Item = EntityId> {
        std::iter::successors(self.parent(), EntityId::parent)
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        each_kind!(self, id => std::fmt::Display::fmt(id, f))
    }
}

impl std::str::FromStr for EntityId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl serde::Serialize for EntityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for EntityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
