//! Identifier kinds and their one-character wire tags.

use serde::{Deserialize, Serialize};

/// Kind of an identifier. The tag doubles as the first character of the
/// encoded form.
///
/// Ten tags are reserved: five hierarchy levels, each with a plain and a
/// resource variant. Only the customer, organization and institution levels
/// have identifier types; see [`IdType::is_implemented`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdType {
    Customer,
    CustomerResource,
    Organization,
    OrganizationResource,
    Institution,
    InstitutionResource,
    InstitutionUnit,
    InstitutionUnitResource,
    CustomerUnit,
    CustomerUnitResource,
}

impl IdType {
    /// Every kind, in tag order (`V` down to `M`).
    pub const ALL: [IdType; 10] = [
        IdType::Customer,
        IdType::CustomerResource,
        IdType::Organization,
        IdType::OrganizationResource,
        IdType::Institution,
        IdType::InstitutionResource,
        IdType::InstitutionUnit,
        IdType::InstitutionUnitResource,
        IdType::CustomerUnit,
        IdType::CustomerUnitResource,
    ];

    /// Returns the wire tag.
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            IdType::Customer => 'V',
            IdType::CustomerResource => 'U',
            IdType::Organization => 'T',
            IdType::OrganizationResource => 'S',
            IdType::Institution => 'R',
            IdType::InstitutionResource => 'Q',
            IdType::InstitutionUnit => 'P',
            IdType::InstitutionUnitResource => 'O',
            IdType::CustomerUnit => 'N',
            IdType::CustomerUnitResource => 'M',
        }
    }

    /// Looks up the kind for a wire tag.
    #[must_use]
    pub const fn from_tag(tag: char) -> Option<Self> {
        match tag {
            'V' => Some(IdType::Customer),
            'U' => Some(IdType::CustomerResource),
            'T' => Some(IdType::Organization),
            'S' => Some(IdType::OrganizationResource),
            'R' => Some(IdType::Institution),
            'Q' => Some(IdType::InstitutionResource),
            'P' => Some(IdType::InstitutionUnit),
            'O' => Some(IdType::InstitutionUnitResource),
            'N' => Some(IdType::CustomerUnit),
            'M' => Some(IdType::CustomerUnitResource),
            _ => None,
        }
    }

    /// Type name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            IdType::Customer => "CustomerId",
            IdType::CustomerResource => "CustomerResourceId",
            IdType::Organization => "OrganizationId",
            IdType::OrganizationResource => "OrganizationResourceId",
            IdType::Institution => "InstitutionId",
            IdType::InstitutionResource => "InstitutionResourceId",
            IdType::InstitutionUnit => "InstitutionUnitId",
            IdType::InstitutionUnitResource => "InstitutionUnitResourceId",
            IdType::CustomerUnit => "CustomerUnitId",
            IdType::CustomerUnitResource => "CustomerUnitResourceId",
        }
    }

    /// Snake-case name, as used by serde and the CLI.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            IdType::Customer => "customer",
            IdType::CustomerResource => "customer_resource",
            IdType::Organization => "organization",
            IdType::OrganizationResource => "organization_resource",
            IdType::Institution => "institution",
            IdType::InstitutionResource => "institution_resource",
            IdType::InstitutionUnit => "institution_unit",
            IdType::InstitutionUnitResource => "institution_unit_resource",
            IdType::CustomerUnit => "customer_unit",
            IdType::CustomerUnitResource => "customer_unit_resource",
        }
    }

    /// Number of ancestry components carried by this kind.
    #[must_use]
    pub const fn level(self) -> usize {
        match self {
            IdType::Customer | IdType::CustomerResource => 1,
            IdType::Organization | IdType::OrganizationResource => 2,
            IdType::Institution | IdType::InstitutionResource => 3,
            IdType::InstitutionUnit
            | IdType::InstitutionUnitResource
            | IdType::CustomerUnit
            | IdType::CustomerUnitResource => 4,
        }
    }

    /// Returns true for kinds that embed a trailing object id.
    #[must_use]
    pub const fn is_resource(self) -> bool {
        matches!(
            self,
            IdType::CustomerResource
                | IdType::OrganizationResource
                | IdType::InstitutionResource
                | IdType::InstitutionUnitResource
                | IdType::CustomerUnitResource
        )
    }

    /// Returns the plain kind at the same level.
    #[must_use]
    pub const fn plain(self) -> Self {
        match self {
            IdType::CustomerResource => IdType::Customer,
            IdType::OrganizationResource => IdType::Organization,
            IdType::InstitutionResource => IdType::Institution,
            IdType::InstitutionUnitResource => IdType::InstitutionUnit,
            IdType::CustomerUnitResource => IdType::CustomerUnit,
            plain => plain,
        }
    }

    /// Returns true if a decoder is registered for this kind.
    #[must_use]
    pub fn is_implemented(self) -> bool {
        crate::registry::is_implemented(self)
    }
}

impl std::fmt::Display for IdType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for IdType {
    type Err = crate::IdError;

    /// Accepts a slug (`organization_resource`, `organization-resource`) or
    /// a single tag character (`S`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(tag), None) = (chars.next(), chars.next()) {
            if let Some(id_type) = IdType::from_tag(tag) {
                return Ok(id_type);
            }
        }

        let slug = s.trim().to_ascii_lowercase().replace('-', "_");
        IdType::ALL
            .into_iter()
            .find(|id_type| id_type.slug() == slug)
            .ok_or_else(|| {
                if s.trim().is_empty() {
                    crate::IdError::Empty
                } else {
                    crate::IdError::UnknownKind(s.to_string())
                }
            })
    }
}
