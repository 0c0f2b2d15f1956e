#![allow(clippy::unwrap_used)]

use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn pairs(mapping: &EnumMapping) -> Vec<(&str, i64)> {
    mapping.iter().collect()
}

#[test]
fn test_plain_enum() {
    let mapping = extract_enum("enum codes { A, B, C };", "codes").unwrap();
    assert_eq!(pairs(&mapping), vec![("A", 0), ("B", 1), ("C", 2)]);
}

#[test]
fn test_explicit_value_resumes_counter() {
    let mapping = extract_enum("enum e { A, B = 5, C };", "e").unwrap();
    assert_eq!(pairs(&mapping), vec![("A", 0), ("B", 5), ("C", 6)]);
}

#[test]
fn test_negative_first_value() {
    let mapping = extract_enum(
        "enum error_codes { ERR_FIRST = -128, ERR_IO, ERR_RUNTIME, ERR_LAST };",
        "error_codes",
    )
    .unwrap();
    assert_eq!(mapping.ordinal("ERR_FIRST"), Some(-128));
    assert_eq!(mapping.ordinal("ERR_IO"), Some(-127));
    assert_eq!(mapping.ordinal("ERR_LAST"), Some(-125));
}

#[test]
fn test_trailing_comma_tolerated() {
    let mapping = extract_enum("enum e { A, B, };", "e").unwrap();
    assert_eq!(pairs(&mapping), vec![("A", 0), ("B", 1)]);
}

#[test]
fn test_hex_value() {
    let mapping = extract_enum("enum e { A = 0x10, B };", "e").unwrap();
    assert_eq!(pairs(&mapping), vec![("A", 16), ("B", 17)]);
}

#[test]
fn test_anonymous_typedef() {
    let mapping = extract_enum("typedef enum { X, Y } error_code;", "error_code").unwrap();
    assert_eq!(pairs(&mapping), vec![("X", 0), ("Y", 1)]);
}

#[test]
fn test_tagged_typedef_matches_tag_or_alias() {
    let text = "typedef enum err_tag { X = 3, Y } err_t;";
    let by_tag = extract_enum(text, "err_tag").unwrap();
    let by_alias = extract_enum(text, "err_t").unwrap();
    assert_eq!(by_tag, by_alias);
    assert_eq!(pairs(&by_tag), vec![("X", 3), ("Y", 4)]);
}

#[test]
fn test_picks_requested_enum_among_several() {
    let text = "enum color { RED, GREEN }; enum codes { OK, FAIL };";
    let mapping = extract_enum(text, "codes").unwrap();
    assert_eq!(pairs(&mapping), vec![("OK", 0), ("FAIL", 1)]);
}

#[test]
fn test_last_matching_declaration_wins() {
    let text = "enum codes { OLD }; typedef enum { NEW = 7 } codes;";
    let mapping = extract_enum(text, "codes").unwrap();
    assert_eq!(pairs(&mapping), vec![("NEW", 7)]);
}

#[test]
fn test_declaration_inside_other_text() {
    let text = "#pragma once #include <stdio.h> #define ERR_NONE 0 \
                enum error_codes { ERR_FIRST = -128, ERR_IO }; extern const char* const M[];";
    let mapping = extract_enum(text, "error_codes").unwrap();
    assert_eq!(mapping.ordinal("ERR_IO"), Some(-127));
}

#[test]
fn test_enum_not_found() {
    let err = extract_enum("enum other { A };", "codes").unwrap_err();
    assert_eq!(
        err,
        DeclError::EnumNotFound {
            name: "codes".to_string()
        }
    );
    let msg = err.to_string();
    assert!(msg.contains("enum <enum_name> { ... };"));
    assert!(msg.contains("typedef enum { ... } <enum_name>;"));
}

#[test]
fn test_missing_semicolon_is_not_a_declaration() {
    assert!(extract_enum("enum codes { A }", "codes").is_err());
}

#[test]
fn test_invalid_enumerator_expression() {
    let err = extract_enum("enum e { A = 1 << 2 };", "e").unwrap_err();
    assert!(matches!(err, DeclError::InvalidEnumerator { .. }));
}

#[test]
fn test_max_value_as_last_entry() {
    let mapping = extract_enum("enum e { A = 0x7FFFFFFFFFFFFFFF };", "e").unwrap();
    assert_eq!(pairs(&mapping), vec![("A", i64::MAX)]);
}

#[test]
fn test_implicit_entry_past_max_value() {
    let err = extract_enum("enum e { A = 9223372036854775807, B };", "e").unwrap_err();
    assert_eq!(
        err,
        DeclError::InvalidEnumerator {
            fragment: "B".to_string()
        }
    );

    // an explicit value after the overflow point starts counting again
    let mapping = extract_enum("enum e { A = 9223372036854775807, B = 1, C };", "e").unwrap();
    assert_eq!(pairs(&mapping), vec![("A", i64::MAX), ("B", 1), ("C", 2)]);
}

#[test]
fn test_names_for_ordinal() {
    let mapping = extract_enum("enum e { A = 1, B = 1, C };", "e").unwrap();
    assert_eq!(mapping.names_for(1).collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(mapping.names_for(2).collect::<Vec<_>>(), vec!["C"]);
    assert_eq!(mapping.names_for(9).count(), 0);
}

#[test]
fn test_rebinding_keeps_position() {
    let mapping: EnumMapping = [("A", 0), ("B", 1), ("A", 5)].into_iter().collect();
    assert_eq!(pairs(&mapping), vec![("A", 5), ("B", 1)]);
}

#[test]
fn test_parse_int_forms() {
    assert_eq!(parse_int("42"), Some(42));
    assert_eq!(parse_int("-128"), Some(-128));
    assert_eq!(parse_int("+3"), Some(3));
    assert_eq!(parse_int("0xFF"), Some(255));
    assert_eq!(parse_int("-0b11"), Some(-3));
    assert_eq!(parse_int("12a"), None);
}

proptest! {
    #[test]
    fn prop_unannotated_ordinals_are_positional(count in 1usize..40) {
        let names: Vec<String> = (0..count).map(|i| format!("E_{i}")).collect();
        let text = format!("enum e {{ {} }};", names.join(", "));
        let mapping = extract_enum(&text, "e").unwrap();
        for (i, name) in names.iter().enumerate() {
            prop_assert_eq!(mapping.ordinal(name), Some(i64::try_from(i).unwrap()));
        }
    }

    #[test]
    fn prop_explicit_value_resumes(start in -1000i64..1000, before in 0usize..5, after in 0usize..5) {
        let mut entries: Vec<String> = (0..before).map(|i| format!("P_{i}")).collect();
        entries.push(format!("PIVOT = {start}"));
        entries.extend((0..after).map(|i| format!("Q_{i}")));
        let text = format!("enum e {{ {} }};", entries.join(", "));
        let mapping = extract_enum(&text, "e").unwrap();
        prop_assert_eq!(mapping.ordinal("PIVOT"), Some(start));
        for i in 0..after {
            let expected = start + 1 + i64::try_from(i).unwrap();
            prop_assert_eq!(mapping.ordinal(&format!("Q_{i}")), Some(expected));
        }
    }
}
