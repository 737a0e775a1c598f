//! Plain-text rendering of frequency rows for the terminal.
//!
//! Syriac points are zero-width, so columns are padded by display width
//! rather than by character count.

use std::fmt::Write as _;

use unicode_width::UnicodeWidthStr;

/// Render `(unit, count)` rows as two aligned columns, followed by a
/// `--- N entries` footer. `limit` caps the number of rows shown.
pub fn format_counts<'a, I>(rows: I, limit: Option<usize>) -> String
where
    I: IntoIterator<Item = (&'a str, u64)>,
{
    let rows: Vec<(String, u64)> = rows
        .into_iter()
        .map(|(unit, count)| (display_unit(unit), count))
        .collect();
    let shown = limit.unwrap_or(rows.len()).min(rows.len());
    let width = rows[..shown]
        .iter()
        .map(|(unit, _)| UnicodeWidthStr::width(unit.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (unit, count) in &rows[..shown] {
        let pad = width - UnicodeWidthStr::width(unit.as_str());
        let _ = writeln!(out, "{unit}{}  {count}", " ".repeat(pad));
    }
    out.push_str("---\n");
    if shown < rows.len() {
        let _ = writeln!(out, "{shown} of {} entries", rows.len());
    } else {
        let _ = writeln!(out, "{} entries", rows.len());
    }
    out
}

/// Make whitespace and lone combining marks visible.
///
/// A unit that starts with a zero-width character (an isolated vowel mark
/// from the character inventory) is shown after a dotted circle, the usual
/// placeholder base.
pub fn display_unit(unit: &str) -> String {
    match unit {
        " " => "<space>".to_string(),
        "\n" => "<LF>".to_string(),
        "\r" => "<CR>".to_string(),
        "\t" => "<TAB>".to_string(),
        _ if UnicodeWidthStr::width(unit) == 0 => format!("\u{25CC}{unit}"),
        _ => unit.to_string(),
    }
}
