//! Integration tests for lntrf notation of whole assignments

use namegen_foundation::{
    Case, CategoryAssignment, ErrorKind, Gender, MorphCategoryKind, MorphCategoryValue, Number,
    PartOfSpeech,
};
use proptest::prelude::*;

fn any_assignment() -> impl Strategy<Value = CategoryAssignment> {
    let per_kind: Vec<_> = MorphCategoryKind::ALL
        .into_iter()
        .map(|kind| proptest::option::of(proptest::sample::select(kind.values())))
        .collect();
    per_kind.prop_map(|values| values.into_iter().flatten().collect())
}

#[test]
fn two_pair_round_trip() {
    let assignment = CategoryAssignment::new()
        .with(Case::Nominative)
        .with(Gender::MasculineAnimate);
    let text = assignment.lntrf();
    assert_eq!(text.len(), 4);
    assert!(text.contains("c1") && text.contains("gM"));

    let decoded: CategoryAssignment = text.parse().unwrap();
    assert_eq!(decoded, assignment);

    // Pair order does not matter when decoding.
    let reversed: CategoryAssignment = "c1gM".parse().unwrap();
    assert_eq!(reversed, assignment);
}

#[test]
fn from_values_matches_parse() {
    let built = CategoryAssignment::from_values([
        MorphCategoryValue::from(PartOfSpeech::Noun),
        Gender::Feminine.into(),
        Number::Singular.into(),
    ])
    .unwrap();
    assert_eq!(built, "nSk1gF".parse().unwrap());
    assert_eq!(built.to_string(), "k1gFnS");
}

#[test]
fn decoding_errors_are_distinct() {
    let kind = "q1".parse::<CategoryAssignment>().unwrap_err();
    assert!(matches!(kind.kind, ErrorKind::InvalidCategoryKind(_)));

    let missing = "gMc".parse::<CategoryAssignment>().unwrap_err();
    assert!(matches!(missing.kind, ErrorKind::MalformedNotation { .. }));

    let value = "gQ".parse::<CategoryAssignment>().unwrap_err();
    assert_eq!(
        value.kind,
        ErrorKind::InvalidCategoryValue {
            kind: MorphCategoryKind::Gender,
            code: "Q".to_string(),
        }
    );
}

#[test]
fn message_pack_carries_lntrf_text() {
    let assignment = CategoryAssignment::new()
        .with(PartOfSpeech::Noun)
        .with(Gender::Feminine)
        .with(Number::Singular)
        .with(Case::Nominative);
    let bytes = rmp_serde::to_vec(&assignment).unwrap();

    let text: String = rmp_serde::from_slice(&bytes).unwrap();
    assert_eq!(text, "k1gFnSc1");
    let back: CategoryAssignment = rmp_serde::from_slice(&bytes).unwrap();
    assert_eq!(back, assignment);

    let bad = rmp_serde::to_vec("k1gQ").unwrap();
    assert!(rmp_serde::from_slice::<CategoryAssignment>(&bad).is_err());
}

proptest! {
    #[test]
    fn assignment_text_round_trips(assignment in any_assignment()) {
        let text = assignment.lntrf();
        let decoded: CategoryAssignment = text.parse().unwrap();
        prop_assert_eq!(decoded, assignment);
    }

    #[test]
    fn unify_with_self_is_identity(assignment in any_assignment()) {
        prop_assert_eq!(assignment.unify(&assignment), Some(assignment));
        prop_assert!(assignment.satisfies(&assignment));
    }
}
