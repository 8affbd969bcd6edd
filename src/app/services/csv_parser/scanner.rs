//! Character-level scanning of delimited roster text
//!
//! Scans each line character by character, tracking whether the cursor is
//! inside a quoted region. The separator terminates a field only outside
//! quotes; a doubled quote inside a quoted field is consumed as one literal
//! quote character.

use tracing::debug;

use super::stats::{ParseResult, ParseStats};

/// Parse raw delimited text into rows of fields.
///
/// Rows with one field or fewer after scanning are treated as blank or
/// noise lines and discarded. No error is raised for malformed input.
pub fn parse_text(text: &str, separator: char) -> ParseResult {
    let mut stats = ParseStats::new();
    let mut rows = Vec::new();

    for line in text.trim().lines() {
        stats.lines_seen += 1;

        let fields = parse_line(line, separator);
        if fields.len() <= 1 {
            stats.rows_discarded += 1;
            continue;
        }

        stats.rows_emitted += 1;
        rows.push(fields);
    }

    debug!(
        "Scanned {} line(s): {} row(s) emitted, {} discarded",
        stats.lines_seen, stats.rows_emitted, stats.rows_discarded
    );

    ParseResult { rows, stats }
}

/// Scan a single line into fields.
///
/// Quote state is local to the line. An opening quote with no closing
/// partner consumes the rest of the line as field content.
pub fn parse_line(line: &str, separator: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '"' {
            if in_quotes && chars.peek() == Some(&'"') {
                // Doubled quote inside a quoted field: literal quote
                current.push('"');
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
        } else if c == separator && !in_quotes {
            fields.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }

    // End of line emits the final field, even when a quote is still open
    fields.push(current);
    fields
}
