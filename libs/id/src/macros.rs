//! Macros for defining the hierarchy identifier types.

/// Defines an identifier type for one hierarchy kind.
///
/// This generates a struct holding the ancestry components (and, for
/// resource kinds, an [`ObjectId`](crate::ObjectId)) with:
/// - `ID_TYPE` and `PIECES` constants
/// - `parse()`, `components()` and `root()`
/// - `Display` and `FromStr` implementations (the wire form)
/// - `Serialize` and `Deserialize` as the wire string
/// - [`Identifier`](crate::Identifier) and conversions to and from
///   [`EntityId`](crate::EntityId)
///
/// Constructors and `parent()` are written by hand next to each invocation.
///
/// # Example
///
/// ```ignore
/// define_entity_id! {
///     /// Organization under a customer.
///     OrganizationId => Organization, levels = 2, pieces = ["cid", "id"]
/// }
/// define_entity_id! {
///     /// Resource owned by an organization.
///     OrganizationResourceId => OrganizationResource, levels = 2, pieces = ["cid", "oid"], resource
/// }
/// ```
macro_rules! define_entity_id {
    (
        $(#[$meta:meta])*
        $name:ident => $kind:ident, levels = $levels:literal, pieces = [$($piece:literal),+ $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            components: [$crate::Component; $levels],
        }

        impl $name {
            /// The kind of this identifier.
            pub const ID_TYPE: $crate::IdType = $crate::IdType::$kind;

            /// Names of the ancestry components, used in error messages.
            pub const PIECES: [&'static str; $levels] = [$($piece),+];

            /// Creates an identifier from its ancestry components, outermost first.
            #[must_use]
            pub const fn from_components(components: [$crate::Component; $levels]) -> Self {
                Self { components }
            }

            /// Parses an identifier from its encoded form.
            pub fn parse(s: &str) -> Result<Self, $crate::IdError> {
                $crate::identifier::decode_plain(Self::ID_TYPE, s, Self::PIECES)
                    .map(Self::from_components)
            }

            define_entity_id!(@accessors $levels);
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::identifier::write_encoded(f, Self::ID_TYPE, &self.components)
            }
        }

        impl $crate::Identifier for $name {
            const ID_TYPE: $crate::IdType = $crate::IdType::$kind;

            fn parse(s: &str) -> Result<Self, $crate::IdError> {
                $name::parse(s)
            }

            fn components(&self) -> &[$crate::Component] {
                &self.components
            }

            fn root(&self) -> $crate::CustomerId {
                $name::root(self)
            }
        }

        define_entity_id!(@common $name => $kind);
    };

    (
        $(#[$meta:meta])*
        $name:ident => $kind:ident, levels = $levels:literal, pieces = [$($piece:literal),+ $(,)?], resource
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            components: [$crate::Component; $levels],
            object_id: $crate::ObjectId,
        }

        impl $name {
            /// The kind of this identifier.
            pub const ID_TYPE: $crate::IdType = $crate::IdType::$kind;

            /// Names of the ancestry components, used in error messages.
            pub const PIECES: [&'static str; $levels] = [$($piece),+];

            /// Creates an identifier from the owner's components and an object id.
            #[must_use]
            pub fn from_parts(
                components: [$crate::Component; $levels],
                object_id: $crate::ObjectId,
            ) -> Self {
                Self {
                    components,
                    object_id,
                }
            }

            /// Parses an identifier from its encoded form.
            pub fn parse(s: &str) -> Result<Self, $crate::IdError> {
                let (components, object_id) =
                    $crate::identifier::decode_resource(Self::ID_TYPE, s, Self::PIECES)?;
                Ok(Self::from_parts(components, object_id))
            }

            /// Returns the embedded object id.
            #[must_use]
            pub const fn object_id(&self) -> &$crate::ObjectId {
                &self.object_id
            }

            define_entity_id!(@accessors $levels);
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::identifier::write_encoded(f, Self::ID_TYPE, &self.components)?;
                f.write_str(self.object_id.as_str())
            }
        }

        impl $crate::Identifier for $name {
            const ID_TYPE: $crate::IdType = $crate::IdType::$kind;

            fn parse(s: &str) -> Result<Self, $crate::IdError> {
                $name::parse(s)
            }

            fn components(&self) -> &[$crate::Component] {
                &self.components
            }

            fn root(&self) -> $crate::CustomerId {
                $name::root(self)
            }

            fn object_id(&self) -> Option<&$crate::ObjectId> {
                Some(&self.object_id)
            }
        }

        define_entity_id!(@common $name => $kind);
    };

    (@accessors $levels:literal) => {
        /// Returns the ancestry components, outermost first.
        #[must_use]
        pub const fn components(&self) -> &[$crate::Component; $levels] {
            &self.components
        }

        /// Returns the customer at the top of the hierarchy.
        #[must_use]
        pub const fn root(&self) -> $crate::CustomerId {
            $crate::CustomerId::new(self.components[0])
        }
    };

    (@common $name:ident => $kind:ident) => {
        impl std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.collect_str(self)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }

        impl From<$name> for $crate::EntityId {
            fn from(id: $name) -> Self {
                $crate::EntityId::$kind(id)
            }
        }

        impl TryFrom<$crate::EntityId> for $name {
            type Error = $crate::IdError;

            fn try_from(id: $crate::EntityId) -> Result<Self, Self::Error> {
                match id {
                    $crate::EntityId::$kind(id) => Ok(id),
                    other => Err($crate::IdError::WrongKind {
                        expected: $crate::IdType::$kind,
                        actual: other.id_type(),
                    }),
                }
            }
        }
    };
}

pub(crate) use define_entity_id;
