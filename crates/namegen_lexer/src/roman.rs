//! Roman numeral recognition for regnal and ordinal numbers ("Karel IV.").

const NUMERALS: [(u16, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Writes `value` as an uppercase Roman numeral. Returns `None` outside 1..=3999.
#[must_use]
pub fn to_roman(mut value: u16) -> Option<String> {
    if value == 0 || value > 3999 {
        return None;
    }
    let mut out = String::new();
    for (amount, digits) in NUMERALS {
        while value >= amount {
            out.push_str(digits);
            value -= amount;
        }
    }
    Some(out)
}

/// Reads a canonical uppercase Roman numeral.
///
/// Only the canonical spelling is accepted: "IV" is 4, "IIII" is rejected.
#[must_use]
pub fn roman_value(text: &str) -> Option<u16> {
    if text.is_empty() || text.len() > 15 {
        return None;
    }
    let mut rest = text;
    let mut value: u16 = 0;
    for (amount, digits) in NUMERALS {
        while let Some(tail) = rest.strip_prefix(digits) {
            value += amount;
            rest = tail;
        }
    }
    if !rest.is_empty() {
        return None;
    }
    (to_roman(value).as_deref() == Some(text)).then_some(value)
}
