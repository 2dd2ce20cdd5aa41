use super::*;
use pretty_assertions::assert_eq;

const SAMPLE: &str = "\
# DerivedCoreProperties-14.0.0.txt
# Date: 2021-08-12, 23:13:05 GMT

# Derived Property: ID_Start

0041..005A    ; ID_Start # L&  [26] LATIN CAPITAL LETTER A..LATIN CAPITAL LETTER Z
00AA          ; ID_Start # Lo       FEMININE ORDINAL INDICATOR
00C0..00D6    ; ID_Start # L&  [23] LATIN CAPITAL LETTER A WITH GRAVE..
00B5          ; ID_Start # L&       MICRO SIGN
00D8..00F6    ; ID_Start # L&  [31] LATIN CAPITAL LETTER O WITH STROKE..

# Derived Property: ID_Continue

0030..0039    ; ID_Continue # Nd  [10] DIGIT ZERO..DIGIT NINE
00B5          ; ID_Continue # L&       MICRO SIGN
00B7          ; ID_Continue # Po       MIDDLE DOT
0300..036F    ; ID_Continue # Mn [112] COMBINING GRAVE ACCENT..
0370..0374    ; ID_Continue # L&   [5] GREEK CAPITAL LETTER HETA..

# Derived Property: Math
002B          ; Math # Sm       PLUS SIGN
";

#[test]
fn test_parse_sample() {
    let tables = parse_derived_core_properties(SAMPLE);
    assert_eq!(
        tables,
        Ok(UcdTables {
            version: Some("14.0.0".to_string()),
            // ASCII letters dropped, out-of-order entry sorted in.
            id_start: vec![(0xAA, 0xAA), (0xB5, 0xB5), (0xC0, 0xD6), (0xD8, 0xF6)],
            // Adjacent 0300..036F and 0370..0374 merged.
            id_continue: vec![(0xB5, 0xB5), (0xB7, 0xB7), (0x300, 0x374)],
        })
    );
}

#[test]
fn test_other_properties_are_ignored() {
    let tables = parse_derived_core_properties(SAMPLE);
    assert!(tables.is_ok_and(|t| !t.id_start.contains(&(0x2B, 0x2B))));
}

#[test]
fn test_normalize_merges_overlaps() {
    assert_eq!(
        normalize(vec![(0x100, 0x110), (0x105, 0x120), (0x121, 0x121), (0x10, 0x20)]),
        vec![(0x100, 0x121)]
    );
}

#[test]
fn test_normalize_keeps_range_straddling_ascii() {
    assert_eq!(normalize(vec![(0x70, 0x90)]), vec![(0x70, 0x90)]);
    assert_eq!(normalize(vec![(0x70, 0x7F)]), vec![]);
}

#[test]
fn test_header_version() {
    assert_eq!(
        header_version("# DerivedCoreProperties-15.1.0.txt"),
        Some("15.1.0".to_string())
    );
    assert_eq!(header_version("# Date: 2021-08-12"), None);
}

#[test]
fn test_errors() {
    assert_eq!(
        parse_derived_core_properties("00AA ID_Start\n"),
        Err(UcdError::MalformedLine { line: 1 })
    );
    assert_eq!(
        parse_derived_core_properties("\n00ZZ ; ID_Start\n"),
        Err(UcdError::InvalidCodePoint {
            line: 2,
            text: "00ZZ".to_string(),
        })
    );
    assert_eq!(
        parse_derived_core_properties("110000 ; ID_Start\n"),
        Err(UcdError::InvalidCodePoint {
            line: 1,
            text: "110000".to_string(),
        })
    );
    assert_eq!(
        parse_derived_core_properties("00C0..00AA ; ID_Start\n"),
        Err(UcdError::ReversedRange {
            line: 1,
            low: 0xC0,
            high: 0xAA,
        })
    );
    assert_eq!(
        parse_derived_core_properties("00AA ; ID_Start\n"),
        Err(UcdError::MissingProperty("ID_Continue"))
    );
    assert_eq!(
        parse_derived_core_properties("# nothing here\n"),
        Err(UcdError::MissingProperty("ID_Start"))
    );
}

#[test]
fn test_render_layout() {
    let tables = UcdTables {
        version: Some("14.0.0".to_string()),
        id_start: vec![(0xAA, 0xAA), (0xB5, 0xB5), (0xBA, 0xBA), (0xC0, 0xD6), (0x1_0000, 0x1_000B)],
        id_continue: vec![(0x300, 0x374)],
    };
    let text = render_tables(&tables);
    assert!(text.starts_with(
        "//! Identifier range tables generated by `lino-ucd` from Unicode 14.0.0\n"
    ));
    assert!(text.contains(
        "pub(crate) const ID_START_RANGES: &[(u32, u32)] = &[\n    \
         (0x00AA, 0x00AA), (0x00B5, 0x00B5), (0x00BA, 0x00BA), (0x00C0, 0x00D6),\n    \
         (0x10000, 0x1000B),\n];\n"
    ));
    assert!(text.ends_with(
        "pub(crate) const ID_CONTINUE_RANGES: &[(u32, u32)] = &[\n    \
         (0x0300, 0x0374),\n];\n"
    ));
}

/// The checked-in tables must be exactly what this tool writes for them.
#[test]
fn test_render_reproduces_checked_in_tables() {
    let tables = UcdTables {
        version: Some("14.0.0".to_string()),
        id_start: lino_lexer_core::ID_START.ranges().to_vec(),
        id_continue: lino_lexer_core::ID_CONTINUE.ranges().to_vec(),
    };
    let checked_in = include_str!("../../../compiler/lino_lexer_core/src/unicode/tables.rs");
    assert_eq!(render_tables(&tables), checked_in);
}
