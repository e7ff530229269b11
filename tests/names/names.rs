//! Integration tests for analysing and inflecting names

use std::sync::Arc;

use namegen_foundation::{Case, ErrorKind};
use namegen_names::{Language, Name, NameType, czech};

fn czech() -> Arc<Language> {
    Arc::new(czech::language().unwrap())
}

#[test]
fn unbound_names_end_to_end() {
    let language = czech();
    let cases = [
        ("Novák", NameType::Surname, "masculine-animate", "Novákovi"),
        ("Karel IV.", NameType::MalePerson, "regnal", "Karlovi IV."),
        ("Ing. Jan Novák", NameType::MalePerson, "full", "Ing. Janovi Novákovi"),
        (
            "Jitka Svobodová-Nováková",
            NameType::FemalePerson,
            "double-barrelled",
            "Jitce Svobodové-Novákové",
        ),
        ("Lhota u Kolína", NameType::Location, "with-preposition", "Lhotě u Kolína"),
        ("AC Sparta Praha", NameType::Team, "abbreviated-feminine", "AC Spartě Praha"),
        ("Jan Novák Ph.D.", NameType::MalePerson, "full", "Janovi Novákovi Ph.D."),
        (
            "MC CD XL DC LX Praha",
            NameType::Team,
            "abbreviated-feminine",
            "MC CD XL DC LX Praze",
        ),
    ];

    for (raw, name_type, production, dative) in cases {
        let name = Name::new(raw, Arc::clone(&language));
        let analysis = name.analyse().unwrap();
        assert_eq!(analysis.name_type(), name_type, "{raw}");
        assert_eq!(analysis.production(), production, "{raw}");
        assert_eq!(name.inflect(Case::Dative).unwrap(), dative);
        assert_eq!(name.raw(), raw);
    }
}

#[test]
fn bound_type_chooses_the_paradigm() {
    let language = czech();

    // A lone word ending in -a reads as a masculine surname first.
    let unbound = Name::new("Praha", Arc::clone(&language));
    assert_eq!(unbound.analyse().unwrap().name_type(), NameType::Surname);
    assert_eq!(unbound.inflect(Case::Dative).unwrap(), "Prahovi");

    let location = Name::new("Praha", language).with_type(NameType::Location);
    assert_eq!(location.analyse().unwrap().production(), "feminine");
    assert_eq!(location.inflect(Case::Dative).unwrap(), "Praze");
}

#[test]
fn bound_type_rejection_names_its_grammar() {
    let name = Name::new("Novák", czech()).with_type(NameType::Team);
    let err = name.analyse().unwrap_err();
    assert_eq!(err.kind, ErrorKind::NotInLanguage("team".to_string()));
    assert_eq!(err.to_string(), "name is not in the language of grammar team");
}

#[test]
fn unbound_rejection_lists_every_grammar_tried() {
    let err = Name::new("Xyzzy", czech()).analyse().unwrap_err();
    // Surname is the guess, so it is tried first.
    assert_eq!(
        err.kind,
        ErrorKind::NotInLanguage("surname, male person, female person, location, team".to_string())
    );
}

#[test]
fn unsupported_symbol_is_unlexable() {
    let name = Name::new("Novák ©", czech());
    let err = name.analyse().unwrap_err();
    assert_eq!(
        err.kind,
        ErrorKind::UnlexableInput {
            input: "Novák ©".to_string(),
            position: 7,
            character: Some('©'),
        }
    );
    assert!(!err.is_not_in_language());
    assert!(name.inflect(Case::Dative).is_err());
}

#[test]
fn analysis_is_cached() {
    let name = Name::new("Jana Nováková", czech());
    let first = name.analyse().unwrap();
    let second = name.analyse().unwrap();
    assert_eq!(first, second);
    assert_eq!(
        name.forms().unwrap()[6],
        (Case::Instrumental, "Janou Novákovou".to_string())
    );
}
