//! Tag-to-kind dispatch table.
//!
//! Every reserved tag has a slot. Implemented kinds carry a decoder; the
//! deeper levels are reserved until their identifier types exist, and
//! filling a slot is all it takes to make [`EntityId::parse`] accept them.

use crate::{
    CustomerId, CustomerResourceId, EntityId, IdError, IdType, Identifier, InstitutionId,
    InstitutionResourceId, OrganizationId, OrganizationResourceId,
};

type Decoder = fn(&str) -> Result<EntityId, IdError>;

struct Entry {
    id_type: IdType,
    decoder: Option<Decoder>,
}

static REGISTRY: [Entry; 10] = [
    Entry {
        id_type: IdType::Customer,
        decoder: Some(decode_as::<CustomerId> as Decoder),
    },
    Entry {
        id_type: IdType::CustomerResource,
        decoder: Some(decode_as::<CustomerResourceId> as Decoder),
    },
    Entry {
        id_type: IdType::Organization,
        decoder: Some(decode_as::<OrganizationId> as Decoder),
    },
    Entry {
        id_type: IdType::OrganizationResource,
        decoder: Some(decode_as::<OrganizationResourceId> as Decoder),
    },
    Entry {
        id_type: IdType::Institution,
        decoder: Some(decode_as::<InstitutionId> as Decoder),
    },
    Entry {
        id_type: IdType::InstitutionResource,
        decoder: Some(decode_as::<InstitutionResourceId> as Decoder),
    },
    Entry {
        id_type: IdType::InstitutionUnit,
        decoder: None,
    },
    Entry {
        id_type: IdType::InstitutionUnitResource,
        decoder: None,
    },
    Entry {
        id_type: IdType::CustomerUnit,
        decoder: None,
    },
    Entry {
        id_type: IdType::CustomerUnitResource,
        decoder: None,
    },
];

fn decode_as<T>(s: &str) -> Result<EntityId, IdError>
where
    T: Identifier + Into<EntityId>,
{
    T::parse(s).map(Into::into)
}

fn entry(id_type: IdType) -> Option<&'static Entry> {
    REGISTRY.iter().find(|entry| entry.id_type == id_type)
}

/// Decodes any identifier by looking up its tag.
pub(crate) fn decode(input: &str) -> Result<EntityId, IdError> {
    let tag = input.chars().next().ok_or(IdError::Empty)?;
    let id_type = IdType::from_tag(tag).ok_or(IdError::UnknownTag(tag))?;
    let decoder = entry(id_type)
        .and_then(|entry| entry.decoder)
        .ok_or(IdError::Unimplemented(id_type))?;
    decoder(input)
}

/// Returns true if `id_type` has a decoder.
pub(crate) fn is_implemented(id_type: IdType) -> bool {
    entry(id_type).is_some_and(|entry| entry.decoder.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_slot() {
        for id_type in IdType::ALL {
            assert!(entry(id_type).is_some(), "missing registry slot for {id_type}");
        }
    }

    #[test]
    fn test_implemented_kinds() {
        let implemented: Vec<_> = IdType::ALL
            .into_iter()
            .filter(|id_type| is_implemented(*id_type))
            .collect();
        assert_eq!(
            implemented,
            [
                IdType::Customer,
                IdType::CustomerResource,
                IdType::Organization,
                IdType::OrganizationResource,
                IdType::Institution,
                IdType::InstitutionResource,
            ]
        );
    }

    #[test]
    fn test_decoded_kind_matches_slot() {
        let oid = "6603f7b32b1753f84a719e01";
        let samples = [
            "V01".to_string(),
            format!("U01{oid}"),
            "T0101".to_string(),
            format!("S0101{oid}"),
            "R010101".to_string(),
            format!("Q010101{oid}"),
        ];
        for sample in samples {
            let id = decode(&sample).unwrap();
            assert_eq!(id.id_type().tag(), sample.chars().next().unwrap());
        }
    }
}
