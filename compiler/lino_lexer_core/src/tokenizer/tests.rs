use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;
use crate::{DecodeError, Span};

/// Scan `line` and return `(kind, text, column, column_len)` per token,
/// including end of line.
fn scan(line: &str) -> Vec<(TokenKind, String, u32, u32)> {
    scan_bytes(line.as_bytes())
}

fn scan_bytes(line: &[u8]) -> Vec<(TokenKind, String, u32, u32)> {
    let (tokens, _) = tokenize(line);
    tokens
        .iter()
        .map(|t| (t.kind(), t.text().into_owned(), t.column(), t.column_len()))
        .collect()
}

fn kinds(line: &str) -> Vec<TokenKind> {
    let (tokens, _) = tokenize(line.as_bytes());
    tokens.iter().map(Token::kind).collect()
}

fn tok(kind: TokenKind, text: &str, column: u32, column_len: u32) -> (TokenKind, String, u32, u32) {
    (kind, text.to_string(), column, column_len)
}

use TokenKind::{BadCharacter as Bad, EndOfLine as Eol, Number as Num, Punctuation as Pct, Symbol as Sym};

// === Scenarios ===

#[test]
fn single_symbol() {
    assert_eq!(scan("test"), vec![tok(Sym, "test", 1, 4), tok(Eol, "", 5, 1)]);
}

#[test]
fn number_then_symbol_without_space() {
    assert_eq!(
        scan("1234test"),
        vec![
            tok(Num, "1234", 1, 4),
            tok(Sym, "test", 5, 4),
            tok(Eol, "", 9, 1),
        ]
    );
}

#[test]
fn assignment() {
    assert_eq!(
        scan("a = 1"),
        vec![
            tok(Sym, "a", 1, 1),
            tok(Pct, "=", 3, 1),
            tok(Num, "1", 5, 1),
            tok(Eol, "", 6, 1),
        ]
    );
}

#[test]
fn multi_byte_identifier_after_digits() {
    let line = "12µs";
    let (tokens, issues) = tokenize(line.as_bytes());
    assert!(issues.is_empty());
    assert_eq!(tokens.len(), 3);

    assert_eq!(tokens[0].kind(), Num);
    assert_eq!(tokens[0].text(), "12");

    let symbol = tokens[1];
    assert_eq!(symbol.kind(), Sym);
    assert_eq!(symbol.text(), "µs");
    assert_eq!(symbol.offset(), 2);
    assert_eq!(symbol.len(), 3);
    assert_eq!(symbol.column(), 3);
    assert_eq!(symbol.column_len(), 2);
    assert!(symbol.len() > symbol.column_len());

    assert_eq!(tokens[2].kind(), Eol);
    assert_eq!(tokens[2].offset(), 5);
    assert_eq!(tokens[2].column(), 5);
}

#[test]
fn truncated_sequence_at_end_of_line() {
    // "ab" followed by the first two bytes of € (E2 82 AC).
    let line = [b'a', b'b', 0xE2, 0x82];
    let (tokens, issues) = tokenize(&line);

    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind(), Sym);
    assert_eq!(tokens[0].lexeme(), b"ab");

    let bad = tokens[1];
    assert_eq!(bad.kind(), Bad);
    assert_eq!(bad.offset(), 2);
    assert_eq!(bad.len(), 2);
    assert_eq!(bad.column(), 3);
    assert_eq!(bad.column_len(), 1);
    assert_eq!(bad.lexeme(), &[0xE2, 0x82]);

    assert_eq!(tokens[2].kind(), Eol);
    assert_eq!(tokens[2].offset(), 4);

    assert_eq!(
        issues,
        vec![LexIssue {
            kind: LexIssueKind::Decode(DecodeError::Truncated {
                expected: 3,
                available: 2
            }),
            span: Span::new(2, 4),
            column: 3,
        }]
    );
}

// === End of Line ===

#[test]
fn empty_line() {
    assert_eq!(scan(""), vec![tok(Eol, "", 1, 1)]);
}

#[test]
fn blank_line() {
    assert_eq!(scan(" \t  "), vec![tok(Eol, "", 5, 1)]);
}

#[test]
fn end_of_line_is_idempotent() {
    let mut tokenizer = Tokenizer::new(b"x");
    assert_eq!(tokenizer.next_token().kind(), Sym);
    let first = tokenizer.next_token();
    assert_eq!(first.kind(), Eol);
    for _ in 0..3 {
        assert_eq!(tokenizer.next_token(), first);
    }
    assert_eq!(first.offset(), 1);
    assert_eq!(first.column(), 2);
}

#[test]
fn end_of_line_has_unit_lengths() {
    let (tokens, _) = tokenize(b"ab");
    let eol = tokens[1];
    assert_eq!(eol.len(), 1);
    assert_eq!(eol.column_len(), 1);
    assert_eq!(eol.offset(), 2);
    assert!(eol.lexeme().is_empty());
}

// === Whitespace ===

#[test]
fn whitespace_produces_no_tokens() {
    assert_eq!(
        scan("  a\t\tb "),
        vec![
            tok(Sym, "a", 3, 1),
            tok(Sym, "b", 6, 1),
            tok(Eol, "", 8, 1),
        ]
    );
}

// === Punctuation ===

#[test]
fn every_punctuation_character() {
    assert_eq!(kinds("()+-*/="), vec![Pct, Pct, Pct, Pct, Pct, Pct, Pct, Eol]);
}

#[test]
fn minus_is_never_a_sign() {
    assert_eq!(
        scan("-5"),
        vec![tok(Pct, "-", 1, 1), tok(Num, "5", 2, 1), tok(Eol, "", 3, 1)]
    );
}

#[test]
fn other_ascii_operators_are_bad() {
    for line in ["!", "%", "<", ">", ",", ";", "{", "$", "\"", "'"] {
        assert_eq!(kinds(line), vec![Bad, Eol], "line {line:?}");
    }
}

// === Numbers ===

#[test]
fn integer() {
    assert_eq!(scan("007"), vec![tok(Num, "007", 1, 3), tok(Eol, "", 4, 1)]);
}

#[test]
fn decimal() {
    assert_eq!(scan("3.14"), vec![tok(Num, "3.14", 1, 4), tok(Eol, "", 5, 1)]);
}

#[test]
fn trailing_dot_is_part_of_number() {
    assert_eq!(scan("12."), vec![tok(Num, "12.", 1, 3), tok(Eol, "", 4, 1)]);
}

#[test]
fn leading_dot_is_not_a_number() {
    assert_eq!(
        scan(".5"),
        vec![tok(Bad, ".", 1, 1), tok(Num, "5", 2, 1), tok(Eol, "", 3, 1)]
    );
}

#[test]
fn only_one_dot_per_number() {
    assert_eq!(
        scan("1.2.3"),
        vec![
            tok(Num, "1.2", 1, 3),
            tok(Bad, ".", 4, 1),
            tok(Num, "3", 5, 1),
            tok(Eol, "", 6, 1),
        ]
    );
}

#[test]
fn number_stops_at_letter() {
    assert_eq!(kinds("1.5e3"), vec![Num, Sym, Eol]);
}

// === Symbols ===

#[test]
fn symbol_with_digits_and_underscores() {
    assert_eq!(
        scan("_tmp_42 x9"),
        vec![
            tok(Sym, "_tmp_42", 1, 7),
            tok(Sym, "x9", 9, 2),
            tok(Eol, "", 11, 1),
        ]
    );
}

#[test]
fn unicode_symbols() {
    assert_eq!(
        scan("λ 中文 café"),
        vec![
            tok(Sym, "λ", 1, 1),
            tok(Sym, "中文", 3, 2),
            tok(Sym, "café", 6, 4),
            tok(Eol, "", 10, 1),
        ]
    );
}

#[test]
fn combining_mark_continues_but_cannot_start() {
    // e + U+0301 COMBINING ACUTE ACCENT
    assert_eq!(kinds("e\u{301}"), vec![Sym, Eol]);
    assert_eq!(kinds("\u{301}e"), vec![Bad, Sym, Eol]);
}

#[test]
fn non_ascii_digit_continues_symbol() {
    // U+0661 ARABIC-INDIC DIGIT ONE
    let (tokens, _) = tokenize("x\u{661}".as_bytes());
    assert_eq!(tokens[0].kind(), Sym);
    assert_eq!(tokens[0].len(), 3);
    assert_eq!(tokens[0].column_len(), 2);
}

#[test]
fn symbol_stops_at_non_identifier_unicode() {
    let line = "ab€cd";
    let (tokens, issues) = tokenize(line.as_bytes());
    let summary: Vec<_> = tokens.iter().map(|t| (t.kind(), t.text().into_owned())).collect();
    assert_eq!(
        summary,
        vec![
            (Sym, "ab".to_string()),
            (Bad, "€".to_string()),
            (Sym, "cd".to_string()),
            (Eol, String::new()),
        ]
    );
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].kind, LexIssueKind::UnexpectedCharacter { code: 0x20AC });
    assert_eq!(issues[0].span, Span::new(2, 5));
    assert_eq!(issues[0].column, 3);
}

// === Bad Characters ===

#[test]
fn four_byte_bad_character_is_one_column() {
    assert_eq!(
        scan("😀x"),
        vec![tok(Bad, "😀", 1, 1), tok(Sym, "x", 2, 1), tok(Eol, "", 3, 1)]
    );
}

#[test]
fn invalid_leading_byte_claims_one_byte() {
    let line = [0x80, 0x80, b'z'];
    let (tokens, issues) = tokenize(&line);
    let shape: Vec<_> = tokens.iter().map(|t| (t.kind(), t.offset(), t.len(), t.column())).collect();
    assert_eq!(
        shape,
        vec![(Bad, 0, 1, 1), (Bad, 1, 1, 2), (Sym, 2, 1, 3), (Eol, 3, 1, 4)]
    );
    assert_eq!(issues.len(), 2);
    assert!(issues
        .iter()
        .all(|i| i.kind == LexIssueKind::Decode(DecodeError::InvalidLeadingByte { byte: 0x80 })));
}

#[test]
fn ascii_after_two_byte_lead_is_absorbed() {
    // C3 41 reads as U+00C1, an identifier start.
    let (tokens, issues) = tokenize(b"\xC3A");
    let shape: Vec<_> = tokens
        .iter()
        .map(|t| (t.kind(), t.offset(), t.len(), t.column(), t.column_len()))
        .collect();
    assert_eq!(shape, vec![(Sym, 0, 2, 1, 1), (Eol, 2, 1, 2, 1)]);
    assert!(issues.is_empty());
}

#[test]
fn absorbed_sequence_continues_into_ascii_symbol() {
    // C3 61 reads as U+00E1, then 'b' extends the symbol.
    let line = [0xC3, b'a', b'b'];
    let (tokens, issues) = tokenize(&line);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind(), Sym);
    assert_eq!(tokens[0].lexeme(), &line[..]);
    assert_eq!(tokens[0].column_len(), 2);
    assert_eq!(tokens[1].column(), 3);
    assert!(issues.is_empty());
}

#[test]
fn decode_error_after_symbol_is_reported_once() {
    let line = [b'x', 0xFF];
    let (tokens, issues) = tokenize(&line);
    assert_eq!(tokens.iter().map(Token::kind).collect::<Vec<_>>(), vec![Sym, Bad, Eol]);
    assert_eq!(issues.len(), 1);
}

#[test]
fn newline_byte_is_bad() {
    assert_eq!(kinds("a\nb"), vec![Sym, Bad, Sym, Eol]);
}

#[test]
fn take_issues_drains() {
    let mut tokenizer = Tokenizer::new(b"$ $");
    while !tokenizer.next_token().kind().is_eol() {}
    assert_eq!(tokenizer.issues().len(), 2);
    assert_eq!(tokenizer.take_issues().len(), 2);
    assert!(tokenizer.issues().is_empty());
}

// === Iterator ===

#[test]
fn iterator_yields_tokens_then_none() {
    let mut tokenizer = Tokenizer::new(b"f(x)");
    let tokens: Vec<_> = tokenizer.by_ref().map(|t| t.kind()).collect();
    assert_eq!(tokens, vec![Sym, Pct, Sym, Pct]);
    assert_eq!(tokenizer.next(), None);
}

// === Realistic ===

#[test]
fn realistic_expression() {
    assert_eq!(
        scan("area = (width + 2) * height / 3.5"),
        vec![
            tok(Sym, "area", 1, 4),
            tok(Pct, "=", 6, 1),
            tok(Pct, "(", 8, 1),
            tok(Sym, "width", 9, 5),
            tok(Pct, "+", 15, 1),
            tok(Num, "2", 17, 1),
            tok(Pct, ")", 18, 1),
            tok(Pct, "*", 20, 1),
            tok(Sym, "height", 22, 6),
            tok(Pct, "/", 29, 1),
            tok(Num, "3.5", 31, 3),
            tok(Eol, "", 34, 1),
        ]
    );
}

// === Properties ===

/// Scan to end of line with an iteration cap, returning the tokens
/// (end of line last).
fn scan_capped(line: &[u8]) -> Vec<Token<'_>> {
    let mut tokenizer = Tokenizer::new(line);
    let mut tokens = Vec::new();
    // Every non-EOL token claims at least one byte.
    for _ in 0..=line.len() {
        let token = tokenizer.next_token();
        tokens.push(token);
        if token.kind().is_eol() {
            break;
        }
    }
    tokens
}

fn is_blank(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

fn is_number_text(text: &[u8]) -> bool {
    let int_len = text.iter().take_while(|b| b.is_ascii_digit()).count();
    if int_len == 0 {
        return false;
    }
    match &text[int_len..] {
        [] => true,
        [b'.', frac @ ..] => frac.iter().all(u8::is_ascii_digit),
        _ => false,
    }
}

fn is_symbol_text(text: &str) -> bool {
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let starts = first.is_ascii_alphabetic() || first == '_' || ID_START.contains(first as u32);
    starts
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || ID_CONTINUE.contains(c as u32))
}

proptest! {
    #[test]
    fn scanning_terminates_at_line_end(line in proptest::collection::vec(any::<u8>(), 0..64)) {
        let tokens = scan_capped(&line);
        let last = tokens[tokens.len() - 1];
        prop_assert!(last.kind().is_eol());
        prop_assert_eq!(last.offset() as usize, line.len());
    }

    #[test]
    fn tokens_and_blanks_cover_every_byte(line in proptest::collection::vec(any::<u8>(), 0..64)) {
        let tokens = scan_capped(&line);
        let mut pos = 0usize;
        for token in tokens.iter().filter(|t| !t.kind().is_eol()) {
            let start = token.offset() as usize;
            prop_assert!(line[pos..start].iter().all(|&b| is_blank(b)));
            prop_assert_eq!(token.lexeme(), &line[token.span().to_range()]);
            prop_assert!(token.len() >= 1);
            pos = start + token.len() as usize;
        }
        prop_assert!(line[pos..].iter().all(|&b| is_blank(b)));
    }

    #[test]
    fn columns_advance_by_column_len_plus_blanks(line in proptest::collection::vec(any::<u8>(), 0..64)) {
        let tokens = scan_capped(&line);
        let mut expected_column = 1u32;
        let mut pos = 0u32;
        for token in &tokens {
            let blanks = token.offset() - pos;
            expected_column += blanks;
            prop_assert_eq!(token.column(), expected_column);
            expected_column += token.column_len();
            pos = token.offset() + token.len();
        }
    }

    #[test]
    fn end_of_line_repeats(line in proptest::collection::vec(any::<u8>(), 0..32)) {
        let mut tokenizer = Tokenizer::new(&line);
        let mut eol = tokenizer.next_token();
        while !eol.kind().is_eol() {
            eol = tokenizer.next_token();
        }
        prop_assert_eq!(tokenizer.next_token(), eol);
        prop_assert_eq!(tokenizer.next_token(), eol);
    }

    #[test]
    fn one_issue_per_bad_character(line in proptest::collection::vec(any::<u8>(), 0..64)) {
        let (tokens, issues) = tokenize(&line);
        let bad: Vec<Span> = tokens
            .iter()
            .filter(|t| t.kind() == TokenKind::BadCharacter)
            .map(Token::span)
            .collect();
        let reported: Vec<Span> = issues.iter().map(|i| i.span).collect();
        prop_assert_eq!(bad, reported);
    }

    #[test]
    fn lexemes_follow_their_rules(line in "\\PC{0,24}") {
        let (tokens, _) = tokenize(line.as_bytes());
        for token in &tokens {
            let text = token.text();
            let chars = u32::try_from(text.chars().count()).unwrap_or(u32::MAX);
            match token.kind() {
                TokenKind::Number => prop_assert!(is_number_text(token.lexeme()), "{:?}", text),
                TokenKind::Symbol => prop_assert!(is_symbol_text(&text), "{:?}", text),
                TokenKind::Punctuation => prop_assert!(is_punctuation(token.lexeme()[0])),
                TokenKind::BadCharacter => prop_assert_eq!(chars, 1),
                TokenKind::EndOfLine => prop_assert!(token.lexeme().is_empty()),
            }
            if !token.kind().is_eol() {
                prop_assert_eq!(token.column_len(), chars);
            }
        }
    }
}
