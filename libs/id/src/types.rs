//! Identifier types for the customer → organization → institution hierarchy.
//!
//! Each level has a plain identifier (the entity itself) and a resource
//! identifier (something owned by the entity, named by an object id).

use crate::macros::define_entity_id;
use crate::{Component, HasParent, ObjectId};

// =============================================================================
// Customer
// =============================================================================

define_entity_id! {
    /// A customer, the root of the hierarchy. Encoded as `V<cid>`.
    CustomerId => Customer, levels = 1, pieces = ["cid"]
}

impl CustomerId {
    /// Creates a customer ID.
    #[must_use]
    pub const fn new(id: Component) -> Self {
        Self::from_components([id])
    }

    /// Returns the customer component.
    #[must_use]
    pub const fn id(&self) -> Component {
        self.components[0]
    }
}

define_entity_id! {
    /// A resource owned by a customer. Encoded as `U<cid><object id>`.
    CustomerResourceId => CustomerResource, levels = 1, pieces = ["cid"], resource
}

impl CustomerResourceId {
    /// Creates a customer resource ID.
    #[must_use]
    pub fn new(cid: Component, object_id: ObjectId) -> Self {
        Self::from_parts([cid], object_id)
    }

    /// Returns the owning customer.
    #[must_use]
    pub const fn parent(&self) -> CustomerId {
        CustomerId::new(self.components[0])
    }
}

impl HasParent for CustomerResourceId {
    type Parent = CustomerId;

    fn parent(&self) -> CustomerId {
        CustomerResourceId::parent(self)
    }
}

// =============================================================================
// Organization
// =============================================================================

define_entity_id! {
    /// An organization under a customer. Encoded as `T<cid><id>`.
    OrganizationId => Organization, levels = 2, pieces = ["cid", "id"]
}

impl OrganizationId {
    /// Creates an organization ID.
    #[must_use]
    pub const fn new(cid: Component, id: Component) -> Self {
        Self::from_components([cid, id])
    }

    /// Returns the owning customer.
    #[must_use]
    pub const fn parent(&self) -> CustomerId {
        CustomerId::new(self.components[0])
    }
}

impl HasParent for OrganizationId {
    type Parent = CustomerId;

    fn parent(&self) -> CustomerId {
        OrganizationId::parent(self)
    }
}

define_entity_id! {
    /// A resource owned by an organization. Encoded as `S<cid><oid><object id>`.
    OrganizationResourceId => OrganizationResource, levels = 2, pieces = ["cid", "oid"], resource
}

impl OrganizationResourceId {
    /// Creates an organization resource ID.
    #[must_use]
    pub fn new(cid: Component, oid: Component, object_id: ObjectId) -> Self {
        Self::from_parts([cid, oid], object_id)
    }

    /// Returns the owning organization.
    #[must_use]
    pub const fn parent(&self) -> OrganizationId {
        OrganizationId::new(self.components[0], self.components[1])
    }
}

impl HasParent for OrganizationResourceId {
    type Parent = OrganizationId;

    fn parent(&self) -> OrganizationId {
        OrganizationResourceId::parent(self)
    }
}

// =============================================================================
// Institution
// =============================================================================

define_entity_id! {
    /// An institution under an organization. Encoded as `R<cid><oid><id>`.
    InstitutionId => Institution, levels = 3, pieces = ["cid", "oid", "id"]
}

impl InstitutionId {
    /// Creates an institution ID.
    #[must_use]
    pub const fn new(cid: Component, oid: Component, id: Component) -> Self {
        Self::from_components([cid, oid, id])
    }

    /// Returns the owning organization.
    #[must_use]
    pub const fn parent(&self) -> OrganizationId {
        OrganizationId::new(self.components[0], self.components[1])
    }
}

impl HasParent for InstitutionId {
    type Parent = OrganizationId;

    fn parent(&self) -> OrganizationId {
        InstitutionId::parent(self)
    }
}

define_entity_id! {
    /// A resource owned by an institution. Encoded as `Q<cid><oid><iid><object id>`.
    InstitutionResourceId => InstitutionResource, levels = 3, pieces = ["cid", "oid", "iid"], resource
}

impl InstitutionResourceId {
    /// Creates an institution resource ID.
    #[must_use]
    pub fn new(cid: Component, oid: Component, iid: Component, object_id: ObjectId) -> Self {
        Self::from_parts([cid, oid, iid], object_id)
    }

    /// Returns the owning institution.
    #[must_use]
    pub const fn parent(&self) -> InstitutionId {
        InstitutionId::new(self.components[0], self.components[1], self.components[2])
    }
}

impl HasParent for InstitutionResourceId {
    type Parent = InstitutionId;

    fn parent(&self) -> InstitutionId {
        InstitutionResourceId::parent(self)
    }
}

// =============================================================================
// Tests
// =============================================================================
