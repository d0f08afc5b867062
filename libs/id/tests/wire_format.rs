//! Wire-format samples for every implemented kind.
//!
//! Each kind is checked at eight component magnitudes (1 to 16 hex digits),
//! against overflowing values for every length digit that can hold one, and
//! against malformed field sequences.

use tenant_id::{
    Component, CustomerId, CustomerResourceId, EntityId, IdError, IdType, InstitutionId,
    InstitutionResourceId, ObjectId, OrganizationId, OrganizationResourceId,
};

const OIDS: [&str; 4] = [
    "6603f7b32b1753f84a719e01",
    "6603f7b32b1753f84a719e02",
    "6603f7b32b1753f84a719e03",
    "6603f7b32b1753f84a719e04",
];

/// (encoded field, value) for each magnitude.
const SAMPLES: [(&str, u64); 8] = [
    ("01", 0x1),
    ("120", 0x20),
    ("2500", 0x500),
    ("36000", 0x6000),
    ("48000F", 0x8000F),
    ("5AF000F", 0xAF000F),
    ("6B5F000F", 0xB5F000F),
    ("F7FFFFFFFFFFFFFFF", 0x7FFF_FFFF_FFFF_FFFF),
];

/// Fields whose value has the top bit set, one per overflowing length digit.
const OVERFLOWING: [&str; 8] = [
    "F8FFFFFFFFFFFFFFF",
    "F9FFFFFFFFFFFFFFF",
    "FAFFFFFFFFFFFFFFF",
    "FBFFFFFFFFFFFFFFF",
    "FCFFFFFFFFFFFFFFF",
    "FDFFFFFFFFFFFFFFF",
    "FEFFFFFFFFFFFFFFF",
    "FFFFFFFFFFFFFFFFF",
];

fn c(value: u64) -> Component {
    Component::new(value).unwrap()
}

fn oid(i: usize) -> ObjectId {
    ObjectId::parse(OIDS[i % OIDS.len()]).unwrap()
}

fn assert_overflow(err: IdError) {
    assert!(matches!(err, IdError::Overflow { .. }), "expected overflow, got {err:?}");
}

// =============================================================================
// Customer
// =============================================================================

#[test]
fn customer_ids() {
    for (field, value) in SAMPLES {
        let s = format!("V{field}");
        let id = CustomerId::parse(&s).unwrap();
        assert_eq!(id, CustomerId::new(c(value)));
        assert_eq!(id.to_string(), s);
    }
    assert_eq!(CustomerId::parse("V01").unwrap().components(), &[c(1)]);
}

#[test]
fn customer_ids_rejected() {
    assert_overflow(CustomerId::parse("VF8FFFFFFFFFFFFFFF").unwrap_err());
    assert!(CustomerId::parse("VVV").is_err());
    assert!(CustomerId::parse("V0ABC").is_err());
}

#[test]
fn customer_resource_ids() {
    for (i, (field, value)) in SAMPLES.into_iter().enumerate() {
        let s = format!("U{field}{}", OIDS[i % OIDS.len()]);
        let id = CustomerResourceId::parse(&s).unwrap();
        assert_eq!(id, CustomerResourceId::new(c(value), oid(i)));
        assert_eq!(id.to_string(), s);
    }

    let id = CustomerResourceId::parse(&format!("U01{}", OIDS[0])).unwrap();
    assert_eq!(id.components(), &[c(1)]);
    assert_eq!(id.root(), CustomerId::new(c(1)));
    assert_eq!(id.parent(), CustomerId::new(c(1)));
    assert_eq!(id.object_id(), &oid(0));
    assert_eq!(id.object_id().to_string(), OIDS[0]);
}

#[test]
fn customer_resource_ids_rejected() {
    for (i, field) in OVERFLOWING.into_iter().enumerate() {
        let s = format!("U{field}{}", OIDS[i % OIDS.len()]);
        assert_overflow(CustomerResourceId::parse(&s).unwrap_err());
    }
    assert!(CustomerResourceId::parse(&format!("UVV{}", OIDS[3])).is_err());
    assert!(CustomerResourceId::parse(&format!("U0ABC{}", OIDS[3])).is_err());
}

// =============================================================================
// Organization
// =============================================================================

#[test]
fn organization_ids() {
    for (field, value) in SAMPLES {
        let s = format!("T{field}{field}");
        let id = OrganizationId::parse(&s).unwrap();
        assert_eq!(id, OrganizationId::new(c(value), c(value)));
        assert_eq!(id.to_string(), s);
    }

    let id = OrganizationId::parse("T0101").unwrap();
    assert_eq!(id.root(), CustomerId::new(c(1)));
    assert_eq!(id.parent(), CustomerId::new(c(1)));
    assert_eq!(id.components(), &[c(1), c(1)]);
}

#[test]
fn organization_ids_rejected() {
    for field in OVERFLOWING {
        let s = format!("T{field}{field}");
        assert_overflow(OrganizationId::parse(&s).unwrap_err());
    }
    assert!(OrganizationId::parse("TVVVU").is_err());
    assert!(OrganizationId::parse("TFABC1C").is_err());
}

#[test]
fn organization_resource_ids() {
    for (i, (field, value)) in SAMPLES.into_iter().enumerate() {
        let s = format!("S{field}{field}{}", OIDS[i % OIDS.len()]);
        let id = OrganizationResourceId::parse(&s).unwrap();
        assert_eq!(id, OrganizationResourceId::new(c(value), c(value), oid(i)));
        assert_eq!(id.to_string(), s);
    }

    let id = OrganizationResourceId::parse(&format!("S0101{}", OIDS[0])).unwrap();
    assert_eq!(id.root(), CustomerId::new(c(1)));
    assert_eq!(id.parent(), OrganizationId::new(c(1), c(1)));
    assert_eq!(id.components(), &[c(1), c(1)]);
    assert_eq!(id.object_id(), &oid(0));
}

#[test]
fn organization_resource_ids_rejected() {
    for (i, field) in OVERFLOWING.into_iter().enumerate() {
        let s = format!("S{field}{field}{}", OIDS[i % OIDS.len()]);
        assert_overflow(OrganizationResourceId::parse(&s).unwrap_err());
    }
    assert!(OrganizationResourceId::parse(&format!("SVV{}", OIDS[3])).is_err());
    assert!(matches!(
        OrganizationResourceId::parse(&format!("S0A0A0A0A0A0ABC{}", OIDS[3])).unwrap_err(),
        IdError::TrailingGarbage { expected: 24, .. }
    ));
}

// =============================================================================
// Institution
// =============================================================================

#[test]
fn institution_ids() {
    for (field, value) in SAMPLES {
        let s = format!("R{field}{field}{field}");
        let id = InstitutionId::parse(&s).unwrap();
        assert_eq!(id, InstitutionId::new(c(value), c(value), c(value)));
        assert_eq!(id.to_string(), s);
    }

    let id = InstitutionId::parse("R010101").unwrap();
    assert_eq!(id.root(), CustomerId::new(c(1)));
    assert_eq!(id.parent(), OrganizationId::new(c(1), c(1)));
    assert_eq!(id.components(), &[c(1), c(1), c(1)]);
}

#[test]
fn institution_ids_rejected() {
    for field in OVERFLOWING {
        let s = format!("R{field}{field}{field}");
        assert_overflow(InstitutionId::parse(&s).unwrap_err());
    }
    assert!(InstitutionId::parse("R0FF").is_err());
    assert!(InstitutionId::parse("RF0").is_err());
}

#[test]
fn institution_resource_ids() {
    for (i, (field, value)) in SAMPLES.into_iter().enumerate() {
        let s = format!("Q{field}{field}{field}{}", OIDS[i % OIDS.len()]);
        let id = InstitutionResourceId::parse(&s).unwrap();
        assert_eq!(
            id,
            InstitutionResourceId::new(c(value), c(value), c(value), oid(i))
        );
        assert_eq!(id.to_string(), s);
    }

    let id = InstitutionResourceId::parse(&format!("Q010101{}", OIDS[0])).unwrap();
    assert_eq!(id.root(), CustomerId::new(c(1)));
    assert_eq!(id.parent(), InstitutionId::new(c(1), c(1), c(1)));
    assert_eq!(id.components(), &[c(1), c(1), c(1)]);
    assert_eq!(id.object_id(), &oid(0));
}

#[test]
fn institution_resource_ids_rejected() {
    for (i, field) in OVERFLOWING.into_iter().enumerate() {
        let s = format!("Q{field}{field}{field}{}", OIDS[i % OIDS.len()]);
        assert_overflow(InstitutionResourceId::parse(&s).unwrap_err());
    }
    assert!(InstitutionResourceId::parse(&format!("QVV{}", OIDS[3])).is_err());
    assert!(InstitutionResourceId::parse(&format!("Q0A0A0A0A0A0ABC{}", OIDS[3])).is_err());
}

// =============================================================================
// Cross-kind
// =============================================================================

#[test]
fn literal_scenarios() {
    let cases: [(&str, EntityId); 6] = [
        ("V01", CustomerId::new(c(1)).into()),
        ("V5AF000F", CustomerId::new(c(0xAF000F)).into()),
        ("T0101", OrganizationId::new(c(1), c(1)).into()),
        ("R010101", InstitutionId::new(c(1), c(1), c(1)).into()),
        (
            "S01016603f7b32b1753f84a719e01",
            OrganizationResourceId::new(c(1), c(1), oid(0)).into(),
        ),
        ("VF7FFFFFFFFFFFFFFF", CustomerId::new(Component::MAX).into()),
    ];
    for (s, expected) in cases {
        assert_eq!(EntityId::parse(s).unwrap(), expected, "parsing {s}");
    }
    assert_overflow(EntityId::parse("VF8FFFFFFFFFFFFFFF").unwrap_err());
}

#[test]
fn tag_discrimination() {
    let s = format!("U01{}", OIDS[0]);
    assert_eq!(
        CustomerId::parse(&s).unwrap_err(),
        IdError::WrongTag {
            expected: IdType::Customer,
            actual: 'U'
        }
    );
    assert!(OrganizationResourceId::parse(&s).unwrap_err().is_tag_error());
}

#[test]
fn non_canonical_fields_are_accepted() {
    // A padded length digit still decodes; only the canonical form round-trips.
    let id = CustomerId::parse("V101").unwrap();
    assert_eq!(id, CustomerId::new(c(1)));
    assert_eq!(id.to_string(), "V01");

    let lower = CustomerId::parse("V5af000f").unwrap();
    assert_eq!(lower.to_string(), "V5AF000F");
}

#[test]
fn object_id_case_is_preserved() {
    let s = "U016603F7B32B1753F84A719E01";
    let id = CustomerResourceId::parse(s).unwrap();
    assert_eq!(id.to_string(), s);
}
