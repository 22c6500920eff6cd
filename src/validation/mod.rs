//! Input well-formedness checks run before conversion.
//!
//! The `csv` crate parses leniently: a quote left open at end of file is
//! swallowed into the final field instead of being reported. Batch users
//! want that file rejected, so the scanner below enforces the RFC 4180
//! quoting rules the parser itself does not.

use crate::error::{ConversionError, ConversionResult};

/// Scan CSV text and fail if a quoted field is never terminated.
///
/// Rules applied: a `"` opens a quoted field only at the start of a field;
/// inside a quoted field `""` is a literal quote; the closing `"` ends the
/// field. Quotes in the middle of an unquoted field are literal characters.
/// The reported line is the one where the unterminated quote was opened.
pub fn check_quoting(content: &str) -> ConversionResult<()> {
    let mut in_quotes = false;
    let mut field_start = true;
    let mut line: u64 = 1;
    let mut open_line: u64 = 1;

    let mut chars = content.chars().peekable();
    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' => {
                    if chars.peek() == Some(&'"') {
                        // escaped literal quote
                        chars.next();
                    } else {
                        in_quotes = false;
                        field_start = false;
                    }
                }
                '\n' => line += 1,
                _ => {}
            }
            continue;
        }

        match c {
            '"' if field_start => {
                in_quotes = true;
                open_line = line;
                field_start = false;
            }
            ',' => field_start = true,
            '\n' => {
                line += 1;
                field_start = true;
            }
            _ => field_start = false,
        }
    }

    if in_quotes {
        return Err(ConversionError::malformed(
            "unterminated quoted field".to_string(),
            Some(open_line),
            None,
        ));
    }

    Ok(())
}
