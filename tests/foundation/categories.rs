//! Integration tests for category kinds and values
//!
//! Every code table is a bijection: decoding an encoded value gives it back,
//! and no two values of one kind share a code.

use std::collections::HashSet;

use namegen_foundation::{
    Case, ErrorKind, Gender, MorphCategoryKind, MorphCategoryValue, Number, Person,
};
use proptest::prelude::*;

fn any_value() -> impl Strategy<Value = MorphCategoryValue> {
    let values: Vec<MorphCategoryValue> = MorphCategoryKind::ALL
        .into_iter()
        .flat_map(MorphCategoryKind::values)
        .collect();
    proptest::sample::select(values)
}

// =============================================================================
// Kinds
// =============================================================================

#[test]
fn kind_codes_are_a_bijection() {
    let codes: HashSet<char> = MorphCategoryKind::ALL.iter().map(|k| k.code()).collect();
    assert_eq!(codes.len(), MorphCategoryKind::ALL.len());
    for kind in MorphCategoryKind::ALL {
        assert_eq!(MorphCategoryKind::from_code(kind.code()).unwrap(), kind);
    }
}

#[test]
fn kind_codes() {
    let codes: String = MorphCategoryKind::ALL.iter().map(|k| k.code()).collect();
    assert_eq!(codes, "kgncedp");
}

#[test]
fn unknown_kind_code() {
    let err = MorphCategoryKind::from_code('z').unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidCategoryKind("z".to_string()));
}

// =============================================================================
// Values
// =============================================================================

#[test]
fn value_codes_are_injective_per_kind() {
    for kind in MorphCategoryKind::ALL {
        let values = kind.values();
        let codes: HashSet<&str> = values.iter().map(|v| v.code()).collect();
        assert_eq!(codes.len(), values.len(), "duplicate code in {kind}");
        assert!(values.iter().all(|v| v.kind() == kind));
    }
}

#[test]
fn value_counts() {
    assert_eq!(MorphCategoryKind::Case.values().len(), 7);
    assert_eq!(MorphCategoryKind::Gender.values().len(), 5);
    assert_eq!(MorphCategoryKind::Person.values().len(), 4);
    assert_eq!(Person::Any.code(), "X");
    assert_eq!(Gender::Family.code(), "R");
}

#[test]
fn same_code_in_different_kinds() {
    // "R" is both a gender and a number; the kind decides.
    assert_eq!(
        MorphCategoryValue::decode(MorphCategoryKind::Gender, "R").unwrap(),
        MorphCategoryValue::Gender(Gender::Family)
    );
    assert_eq!(
        MorphCategoryValue::decode(MorphCategoryKind::Number, "R").unwrap(),
        MorphCategoryValue::Number(Number::Family)
    );
}

#[test]
fn unknown_value_code() {
    let err = MorphCategoryValue::decode(MorphCategoryKind::Case, "8").unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::InvalidCategoryValue {
            kind: MorphCategoryKind::Case,
            code: "8".to_string(),
        }
    );
    assert!(Case::from_code("").is_err());
    assert!(Gender::from_code("m").is_err());
}

proptest! {
    #[test]
    fn decode_inverts_encode(value in any_value()) {
        let decoded = MorphCategoryValue::decode(value.kind(), value.code()).unwrap();
        prop_assert_eq!(decoded, value);
    }

    #[test]
    fn pair_text_round_trips(value in any_value()) {
        let text = value.lntrf();
        prop_assert_eq!(text.parse::<MorphCategoryValue>().unwrap(), value);
        prop_assert_eq!(value.to_string(), text);
    }

    #[test]
    fn encode_is_injective(a in any_value(), b in any_value()) {
        if a.kind() == b.kind() && a != b {
            prop_assert_ne!(a.code(), b.code());
        }
    }
}
