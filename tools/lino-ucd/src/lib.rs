//! Range-table generator for the lino tokenizer.
//!
//! Reads `DerivedCoreProperties.txt` from the Unicode Character Database and
//! writes the Rust source of `lino_lexer_core::unicode::tables`.
//!
//! Data lines look like:
//!
//! ```text
//! 0041..005A    ; ID_Start # L&  [26] LATIN CAPITAL LETTER A..LATIN CAPITAL LETTER Z
//! 00AA          ; ID_Start # Lo       FEMININE ORDINAL INDICATOR
//! ```
//!
//! Only `ID_Start` and `ID_Continue` lines are read. Ranges are sorted and
//! adjacent ones merged; ranges lying entirely in ASCII are dropped.

use thiserror::Error;

/// Highest codepoint.
const MAX_CODE_POINT: u32 = 0x10_FFFF;
/// Ranges ending below this are ASCII-only.
const FIRST_NON_ASCII: u32 = 0x80;
/// Ranges per output line.
const RANGES_PER_LINE: usize = 4;

/// The two identifier property tables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UcdTables {
    /// UCD version from the file header, e.g. `14.0.0`.
    pub version: Option<String>,
    pub id_start: Vec<(u32, u32)>,
    pub id_continue: Vec<(u32, u32)>,
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UcdError {
    #[error("line {line}: expected `<codepoints> ; <property>`")]
    MalformedLine { line: usize },
    #[error("line {line}: invalid codepoint `{text}`")]
    InvalidCodePoint { line: usize, text: String },
    #[error("line {line}: range {low:04X}..{high:04X} is reversed")]
    ReversedRange { line: usize, low: u32, high: u32 },
    #[error("no `{0}` ranges found; is this DerivedCoreProperties.txt?")]
    MissingProperty(&'static str),
}

/// Parse the text of `DerivedCoreProperties.txt`.
pub fn parse_derived_core_properties(text: &str) -> Result<UcdTables, UcdError> {
    let mut tables = UcdTables::default();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;

        if tables.version.is_none() {
            tables.version = header_version(raw);
        }

        let data = raw.split_once('#').map_or(raw, |(data, _)| data).trim();
        if data.is_empty() {
            continue;
        }
        let (points, property) = data
            .split_once(';')
            .ok_or(UcdError::MalformedLine { line })?;

        let target = match property.trim() {
            "ID_Start" => &mut tables.id_start,
            "ID_Continue" => &mut tables.id_continue,
            _ => continue,
        };
        target.push(parse_range(points.trim(), line)?);
    }

    tables.id_start = normalize(tables.id_start);
    tables.id_continue = normalize(tables.id_continue);

    if tables.id_start.is_empty() {
        return Err(UcdError::MissingProperty("ID_Start"));
    }
    if tables.id_continue.is_empty() {
        return Err(UcdError::MissingProperty("ID_Continue"));
    }
    Ok(tables)
}

/// `# DerivedCoreProperties-14.0.0.txt` gives `14.0.0`.
fn header_version(line: &str) -> Option<String> {
    let name = line.trim_start_matches('#').trim();
    let version = name
        .strip_prefix("DerivedCoreProperties-")?
        .strip_suffix(".txt")?;
    Some(version.to_string())
}

/// `XXXX..YYYY` or a single `XXXX`.
fn parse_range(text: &str, line: usize) -> Result<(u32, u32), UcdError> {
    let (low, high) = match text.split_once("..") {
        Some((low, high)) => (parse_code_point(low, line)?, parse_code_point(high, line)?),
        None => {
            let point = parse_code_point(text, line)?;
            (point, point)
        }
    };
    if low > high {
        return Err(UcdError::ReversedRange { line, low, high });
    }
    Ok((low, high))
}

fn parse_code_point(text: &str, line: usize) -> Result<u32, UcdError> {
    u32::from_str_radix(text.trim(), 16)
        .ok()
        .filter(|&code| code <= MAX_CODE_POINT)
        .ok_or_else(|| UcdError::InvalidCodePoint {
            line,
            text: text.trim().to_string(),
        })
}

/// Sort, merge overlapping or adjacent ranges, drop ASCII-only ranges.
fn normalize(mut ranges: Vec<(u32, u32)>) -> Vec<(u32, u32)> {
    ranges.sort_unstable();

    let mut merged: Vec<(u32, u32)> = Vec::with_capacity(ranges.len());
    for (low, high) in ranges {
        match merged.last_mut() {
            Some(last) if low <= last.1.saturating_add(1) => last.1 = last.1.max(high),
            _ => merged.push((low, high)),
        }
    }

    merged.retain(|&(_, high)| high >= FIRST_NON_ASCII);
    merged
}

/// Render the tables as the `unicode/tables.rs` source module.
pub fn render_tables(tables: &UcdTables) -> String {
    let version = tables.version.as_deref().unwrap_or("(unknown version)");
    let mut out = format!(
        "//! Identifier range tables generated by `lino-ucd` from Unicode {version}\n\
         //! `DerivedCoreProperties.txt`. Do not edit by hand.\n\
         //!\n\
         //! Only ranges reaching beyond ASCII are listed; ASCII identifier bytes are\n\
         //! classified by the cursor directly.\n\n"
    );
    render_table(&mut out, "ID_START_RANGES", "ID_Start", &tables.id_start);
    out.push('\n');
    render_table(&mut out, "ID_CONTINUE_RANGES", "ID_Continue", &tables.id_continue);
    out
}

fn render_table(out: &mut String, name: &str, property: &str, ranges: &[(u32, u32)]) {
    out.push_str(&format!(
        "/// Non-ASCII `{property}` ranges, sorted and disjoint.\n\
         #[rustfmt::skip]\n\
         pub(crate) const {name}: &[(u32, u32)] = &[\n"
    ));
    for chunk in ranges.chunks(RANGES_PER_LINE) {
        let entries: Vec<String> = chunk
            .iter()
            .map(|(low, high)| format!("(0x{low:04X}, 0x{high:04X}),"))
            .collect();
        out.push_str(&format!("    {}\n", entries.join(" ")));
    }
    out.push_str("];\n");
}

#[cfg(test)]
mod tests;
