//! Turning raw input lines into display names
//!
//! Guest lists arrive as spreadsheet exports: a `NOMBRE` header column,
//! "Last, First" commas, stray BOMs and blank lines. This module cleans each
//! line into the string that gets printed.

/// Header token dropped when it is the first name
pub const HEADER_TOKEN: &str = "nombre";

const BOM: char = '\u{feff}';

/// Cleans a list of raw lines into names, preserving order
///
/// Lines that are blank after trimming are skipped. A first entry reading
/// `NOMBRE` (any case) is treated as a column header and dropped; only the
/// first entry is inspected.
///
/// ```
/// use labelsheet_core::normalize::normalize_names;
///
/// let names = normalize_names(["NOMBRE", "Ana García", "Juan  Pérez, Jr.", ""]);
/// assert_eq!(names, vec!["Ana García", "Juan  Pérez Jr."]);
/// ```
pub fn normalize_names<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names: Vec<String> = lines
        .into_iter()
        .filter_map(|line| normalize_line(line.as_ref()))
        .collect();

    if names
        .first()
        .is_some_and(|first| first.trim().to_lowercase() == HEADER_TOKEN)
    {
        log::debug!("Dropping header line {:?}", names[0]);
        names.remove(0);
    }

    names
}

/// Cleans a single line, or returns None when it is blank
///
/// A line holding only commas and spaces is not blank before the commas go,
/// so it comes back as an empty name.
pub fn normalize_line(raw: &str) -> Option<String> {
    let without_bom: String = raw.chars().filter(|&ch| ch != BOM).collect();
    let trimmed = without_bom.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(strip_commas(trimmed))
}

/// Removes every comma along with the whitespace run right before it
fn strip_commas(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = String::new();

    for ch in text.chars() {
        if ch == ',' {
            pending_space.clear();
        } else if ch.is_whitespace() {
            pending_space.push(ch);
        } else {
            out.push_str(&pending_space);
            pending_space.clear();
            out.push(ch);
        }
    }
    out.push_str(&pending_space);
    out
}
