//! Field tokenizer for delimited facility lines.
//!
//! A line is split on a single delimiter character. Each field keeps its
//! leading whitespace but loses trailing padding and control characters
//! (including a stray `\r` from CRLF input).
//!
//! Fields are capped at [`MAX_FIELD_LEN`] characters. The excess of an
//! over-long field is dropped and scanning resumes at the next delimiter,
//! so positions of later fields stay put.

/// Default field delimiter of the CDBS tables.
pub const DEFAULT_DELIMITER: char = '|';

/// Longest field kept, in characters. Anything past it is truncated.
pub const MAX_FIELD_LEN: usize = 255;

/// Split one line into its raw fields.
///
/// An empty line yields no fields at all.
///
/// ```
/// use fcc_munge::tokenize;
///
/// let fields = tokenize("NEW YORK  |NY|  x|", '|');
/// assert_eq!(fields, vec!["NEW YORK", "NY", "  x", ""]);
/// ```
pub fn tokenize(line: &str, delimiter: char) -> Vec<String> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    if line.is_empty() {
        return Vec::new();
    }

    line.split(delimiter).map(clip_field).collect()
}

/// Truncate to [`MAX_FIELD_LEN`] characters, then strip trailing non-graphic characters.
fn clip_field(raw: &str) -> String {
    let clipped = match raw.char_indices().nth(MAX_FIELD_LEN) {
        Some((end, _)) => &raw[..end],
        None => raw,
    };
    clipped.trim_end_matches(is_padding).to_string()
}

fn is_padding(c: char) -> bool {
    c.is_whitespace() || c.is_control()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_delimiter() {
        assert_eq!(tokenize("a|b|c", '|'), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_empty_line_has_no_fields() {
        assert!(tokenize("", '|').is_empty());
        assert!(tokenize("\n", '|').is_empty());
    }

    #[test]
    fn test_blank_field_is_empty_string() {
        assert_eq!(tokenize("a||c", '|'), vec!["a", "", "c"]);
        assert_eq!(tokenize("a|   |c", '|'), vec!["a", "", "c"]);
    }

    #[test]
    fn test_trailing_padding_trimmed_leading_kept() {
        assert_eq!(tokenize("  WABC  \t|x\r\n", '|'), vec!["  WABC", "x"]);
    }

    #[test]
    fn test_trailing_delimiter_yields_empty_field() {
        assert_eq!(tokenize("a|b|", '|'), vec!["a", "b", ""]);
    }

    #[test]
    fn test_custom_delimiter() {
        assert_eq!(tokenize("a;b|c", ';'), vec!["a", "b|c"]);
    }

    #[test]
    fn test_long_field_truncated_without_shifting() {
        let long = "X".repeat(MAX_FIELD_LEN + 40);
        let line = format!("{long}|next");
        let fields = tokenize(&line, '|');
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].len(), MAX_FIELD_LEN);
        assert_eq!(fields[1], "next");
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let long = "é".repeat(MAX_FIELD_LEN + 1);
        let fields = tokenize(&long, '|');
        assert_eq!(fields[0].chars().count(), MAX_FIELD_LEN);
    }
}
