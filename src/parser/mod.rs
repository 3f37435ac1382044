//! Parser for the level-order tree input format
//!
//! Converts the bracketed input literal (`[1,null,2,3]`) into a flat
//! `Vec<Option<i64>>` consumed by the tree builder. `null` marks an absent
//! node; whitespace is tolerated anywhere between tokens.
//!
//! This is the only place malformed input can surface: the tree builder and
//! the traversal engine never see anything but a well-formed sequence.

use std::fmt;

/// Input format error with the byte offset of the offending token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    pub message: String,
    pub offset: usize,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error at offset {}: {}", self.offset, self.message)
    }
}

impl std::error::Error for FormatError {}

/// Scanner over the raw input bytes.
struct Scanner<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner { input, position: 0 }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.position..];
        let trimmed = rest.trim_start();
        self.position += rest.len() - trimmed.len();
    }

    fn peek(&self) -> Option<char> {
        self.input[self.position..].chars().next()
    }

    fn expect_char(&mut self, expected: char) -> Result<(), FormatError> {
        self.skip_whitespace();
        match self.peek() {
            Some(c) if c == expected => {
                self.position += c.len_utf8();
                Ok(())
            }
            Some(c) => Err(FormatError {
                message: format!("expected '{}', found '{}'", expected, c),
                offset: self.position,
            }),
            None => Err(FormatError {
                message: format!("expected '{}', found end of input", expected),
                offset: self.position,
            }),
        }
    }

    /// Scan one entry: the literal `null` or a signed integer.
    fn scan_entry(&mut self) -> Result<Option<i64>, FormatError> {
        self.skip_whitespace();
        let start = self.position;
        let rest = &self.input[start..];

        if let Some(after) = rest.strip_prefix("null") {
            // `null` must be a whole token, not a prefix of something longer
            let boundary = after
                .chars()
                .next()
                .map_or(true, |c| c == ',' || c == ']' || c.is_whitespace());
            if boundary {
                self.position += "null".len();
                return Ok(None);
            }
        }

        let digits_end = rest
            .char_indices()
            .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && c == '-')))
            .map(|(i, _)| i)
            .unwrap_or(rest.len());

        let token = &rest[..digits_end];
        if token.is_empty() || token == "-" {
            return Err(FormatError {
                message: format!(
                    "expected an integer or 'null', found '{}'",
                    rest.chars().next().map(String::from).unwrap_or_default()
                ),
                offset: start,
            });
        }

        let value: i64 = token.parse().map_err(|_| FormatError {
            message: format!("integer '{}' is out of range", token),
            offset: start,
        })?;

        self.position += digits_end;
        Ok(Some(value))
    }
}

/// Parse a bracketed, comma-separated level-order literal.
///
/// Accepts `[]`, `[1]`, `[1,null,2,3]`, `[ -5 , null , 7 ]` and rejects
/// anything else with a [`FormatError`] pointing at the offending byte.
pub fn parse_level_order(input: &str) -> Result<Vec<Option<i64>>, FormatError> {
    let mut scanner = Scanner::new(input);
    let mut entries = Vec::new();

    scanner.expect_char('[')?;

    scanner.skip_whitespace();
    if scanner.peek() != Some(']') {
        loop {
            entries.push(scanner.scan_entry()?);
            scanner.skip_whitespace();
            match scanner.peek() {
                Some(',') => {
                    scanner.position += 1;
                }
                Some(']') => break,
                Some(c) => {
                    return Err(FormatError {
                        message: format!("expected ',' or ']', found '{}'", c),
                        offset: scanner.position,
                    });
                }
                None => {
                    return Err(FormatError {
                        message: "unterminated list, expected ']'".to_string(),
                        offset: scanner.position,
                    });
                }
            }
        }
    }
    scanner.expect_char(']')?;

    scanner.skip_whitespace();
    if let Some(c) = scanner.peek() {
        return Err(FormatError {
            message: format!("unexpected '{}' after closing ']'", c),
            offset: scanner.position,
        });
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_list() {
        assert_eq!(parse_level_order("[]").unwrap(), vec![]);
        assert_eq!(parse_level_order("  [ ]  ").unwrap(), vec![]);
    }

    #[test]
    fn test_parse_single_value() {
        assert_eq!(parse_level_order("[1]").unwrap(), vec![Some(1)]);
    }

    #[test]
    fn test_parse_mixed_entries() {
        assert_eq!(
            parse_level_order("[1,null,2,3]").unwrap(),
            vec![Some(1), None, Some(2), Some(3)]
        );
    }

    #[test]
    fn test_parse_negative_and_spaced() {
        assert_eq!(
            parse_level_order("[ -5 , null , 7 ]").unwrap(),
            vec![Some(-5), None, Some(7)]
        );
    }

    #[test]
    fn test_reject_missing_brackets() {
        assert!(parse_level_order("1,2,3").is_err());
        assert!(parse_level_order("[1,2,3").is_err());
    }

    #[test]
    fn test_reject_bad_tokens() {
        assert!(parse_level_order("[1,two,3]").is_err());
        assert!(parse_level_order("[nul]").is_err());
        assert!(parse_level_order("[nullish]").is_err());
        assert!(parse_level_order("[1,,2]").is_err());
        assert!(parse_level_order("[-]").is_err());
    }

    #[test]
    fn test_reject_trailing_garbage() {
        assert!(parse_level_order("[1,2] extra").is_err());
    }

    #[test]
    fn test_error_reports_offset() {
        let err = parse_level_order("[1,x]").unwrap_err();
        assert_eq!(err.offset, 3);
    }

    #[test]
    fn test_reject_out_of_range_integer() {
        assert!(parse_level_order("[99999999999999999999]").is_err());
    }
}
