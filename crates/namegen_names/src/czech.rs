//! Built-in Czech language data.
//!
//! The lexicon, declensions and grammars are kept as text in the same
//! notations the lexer and grammar crates parse, so adding a paradigm or a
//! word is a data change.

use namegen_foundation::Result;
use namegen_grammar::{Declension, Grammar};
use namegen_lexer::{Lexer, LexerConfig, Lexicon};

use crate::language::Language;
use crate::name_type::NameType;

/// Language code of Czech.
pub const CODE: &str = "cs";

/// Known words, titles and suffix rules.
pub const LEXICON: &str = "
# Given names
W jan k1gMnSc1
W petr k1gMnSc1
W pavel k1gMnSc1
W karel k1gMnSc1
W tomáš k1gMnSc1
W jiří k1gMnSc1
W josef k1gMnSc1
W martin k1gMnSc1
W václav k1gMnSc1
W marek k1gMnSc1
W jana k1gFnSc1
W eva k1gFnSc1
W anna k1gFnSc1
W marie k1gFnSc1
W lucie k1gFnSc1
W věra k1gFnSc1
W klára k1gFnSc1
W jitka k1gFnSc1
W olga k1gFnSc1
W martina k1gFnSc1

# Function words
P u k7
P v k7
P z k7
P ze k7
P na k7
P nad k7
P pod k7
C a k8

# Titles
T Bc.
T Mgr.
T Ing.
T MUDr.
T JUDr.
T PhDr.
T RNDr.
T Dr.
T Doc.
T Prof.
T CSc.
T DiS.
T Ph.D.
T Th.D.
T Dr.h.c.
T Ing.arch.

# Suffix rules for words not listed above
S ová k2gFnSc1
S á k2gFnSc1
S ý k2gMnSc1 k2gInSc1
S é k2gNnSc1
S ák k1gMnSc1
S ík k1gMnSc1
S ek k1gMnSc1 k1gInSc1
S ec k1gMnSc1
S el k1gMnSc1
S an k1gMnSc1
S ář k1gMnSc1
S ař k1gMnSc1
S ov k1gInSc1
S ín k1gInSc1
S ice k1gFnPc1
S a k1gFnSc1 k1gMnSc1
S e k1gFnSc1
S o k1gNnSc1
";

/// Declension paradigms, by name.
pub const DECLENSIONS: &[(&str, &str)] = &[
    (
        "pan",
        "
        ek 2 ek ka kovi ka ku kovi kem
        ec 2 ec ce covi ce če covi cem
        el 2 el la lovi la le lovi lem
        tr 1 r ra rovi ra ře rovi rem
        k 0 - a ovi a u ovi em
        h 0 - a ovi a u ovi em
        g 0 - a ovi a u ovi em
        ř 0 - e ovi e i ovi em
        š 0 - e ovi e i ovi em
        ž 0 - e ovi e i ovi em
        č 0 - e ovi e i ovi em
        c 0 - e ovi e i ovi em
        j 0 - e ovi e i ovi em
        í 0 - ho mu ho - m m
        * 0 - a ovi a e ovi em
        ",
    ),
    ("predseda", "a 1 a y ovi u o ovi ou"),
    (
        "zena",
        "
        ka 2 ka ky ce ku ko ce kou
        ha 2 ha hy ze hu ho ze hou
        ga 2 ga gy ze gu go ze gou
        ra 2 ra ry ře ru ro ře rou
        la 1 a y e u o e ou
        ia 1 a e i i o i í
        ie 1 e e i i e i í
        a 1 a y ě u o ě ou
        ",
    ),
    ("ulice", "ice 1 e - ím e e ích emi"),
    (
        "hrad",
        "
        ek 2 ek ku ku ek ku ku kem
        ín 0 - a u - e ě em
        ov 0 - a u - e ě em
        * 0 - u u - e u em
        ",
    ),
    ("mesto", "o 1 o a u o o ě em"),
    ("mlady-m", "ý 1 ý ého ému ého ý ém ým"),
    ("mlady-i", "ý 1 ý ého ému ý ý ém ým"),
    ("mlada", "á 1 á é é ou á é ou"),
    ("mlade", "é 1 é ého ému é é ém ým"),
];

/// Productions of every name type, highest priority first.
pub const PRODUCTIONS: &[(NameType, &str)] = &[
    (
        NameType::MalePerson,
        "
        regnal [gn] := W<k1gM>:pan! R
        with-predicate [gn] := T* W<k1gM>:pan!+ P W+
        masculine-a-surname [gn] := T* I* W<k1gM>:pan!* W<k1gM>:predseda! T*
        adjectival-surname [gn] := T* I* W<k1gM>:pan!* W<k2gM>:mlady-m! T*
        full [gn] := T* I* W<k1gM>:pan!+ T*
        ",
    ),
    (
        NameType::FemalePerson,
        "
        double-barrelled [gn] := T* I* W<k1gF>:zena!* W<k2gF>:mlada! D W<k2gF>:mlada! T*
        adjectival-surname [gn] := T* I* W<k1gF>:zena!* W<k2gF>:mlada! T*
        given-names [gn] := T* W<k1gF>:zena!+ T*
        ",
    ),
    (
        NameType::Surname,
        "
        feminine-adjectival [gn] := W<k2gF>:mlada!
        masculine-adjectival [gn] := W<k2gM>:mlady-m!
        masculine-a [gn] := W<k1gM>:predseda!
        masculine-animate [gn] := W<k1gM>:pan!
        double-barrelled-feminine [gn] := W<k2gF>:mlada! D W<k2gF>:mlada!
        double-barrelled-masculine [gn] := W<k1gM>:pan! D W<k1gM>:pan!
        ",
    ),
    (
        NameType::Location,
        "
        with-preposition [gn] := W<k1gF>:zena! P W+
        adjectival-neuter-with-preposition [gn] := W<k2gN>:mlade! W<k1gN>:mesto! P W+
        adjectival-neuter [gn] := W<k2gN>:mlade! W<k1gN>:mesto!
        adjectival-inanimate [gn] := W<k2gI>:mlady-i! W<k1gI>:hrad!
        adjectival-feminine [gn] := W<k2gF>:mlada! W<k1gF>:zena!
        feminine [gn] := W<k1gF>:zena!
        neuter [gn] := W<k1gN>:mesto!
        inanimate [gn] := W<k1gI>:hrad!
        plural-feminine [gn] := W<k1gFnP>:ulice!
        ",
    ),
    (
        NameType::Team,
        "
        abbreviated-feminine [g] := A+ W<k1gF>:zena! W*
        abbreviated-masculine [g] := A+ W<k1gM>:pan! W*
        abbreviated := A+ *+
        trailing-abbreviation := *+ A
        ",
    ),
];

/// Parses the built-in lexicon.
///
/// # Errors
/// Fails only if the built-in data is malformed.
pub fn lexicon() -> Result<Lexicon> {
    Lexicon::parse(LEXICON)
}

/// Parses the built-in declensions.
///
/// # Errors
/// Fails only if the built-in data is malformed.
pub fn declensions() -> Result<Vec<Declension>> {
    DECLENSIONS
        .iter()
        .map(|(name, rules)| Declension::parse(*name, rules))
        .collect()
}

/// Builds the grammar of one name type.
///
/// # Errors
/// Fails only if the built-in data is malformed.
pub fn grammar(name_type: NameType) -> Result<Grammar> {
    let mut builder = Grammar::builder(name_type.name());
    for (_, productions) in PRODUCTIONS.iter().filter(|(t, _)| *t == name_type) {
        builder = builder.productions_from_str(productions)?;
    }
    for declension in declensions()? {
        builder = builder.declension(declension);
    }
    builder.build()
}

/// Builds the Czech language with the default lexer configuration.
///
/// # Errors
/// Fails only if the built-in data is malformed.
pub fn language() -> Result<Language> {
    language_with(LexerConfig::default())
}

/// Builds the Czech language with a custom lexer configuration.
///
/// # Errors
/// Fails only if the built-in data is malformed.
pub fn language_with(config: LexerConfig) -> Result<Language> {
    let mut language = Language::new(CODE, Lexer::with_config(lexicon()?, config));
    for name_type in NameType::ALL {
        language = language.with_grammar(name_type, grammar(name_type)?);
    }
    Ok(language)
}
