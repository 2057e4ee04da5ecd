// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Turning text into digit sequences.

use crate::error::{EulerError, EulerResult};
use std::fs;
use std::path::Path;

/// The 1000-digit number from problem 8, as it is usually laid out
/// (20 lines of 50 digits).
pub const PUZZLE_DIGITS: &str = include_str!("../../data/number.txt");

/// Parse decimal digits out of `text`, ignoring ASCII whitespace.
///
/// Any other character is an error reporting its position in `text`
/// (counted in characters).
pub fn parse_digits(text: &str) -> EulerResult<Vec<u8>> {
    let mut digits = Vec::with_capacity(text.len());
    for (position, ch) in text.chars().enumerate() {
        if ch.is_ascii_whitespace() {
            continue;
        }
        match ch.to_digit(10) {
            Some(d) => digits.push(d as u8),
            None => return Err(EulerError::InvalidDigit { found: ch, position }),
        }
    }
    Ok(digits)
}

/// Read and parse a digit file.
pub fn read_digits(path: impl AsRef<Path>) -> EulerResult<Vec<u8>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| EulerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_digits(&text)
}

/// Digits of [`PUZZLE_DIGITS`].
pub fn puzzle_digits() -> EulerResult<Vec<u8>> {
    parse_digits(PUZZLE_DIGITS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_digits() {
        assert_eq!(parse_digits("0123").unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(parse_digits(" 12\n34\r\n").unwrap(), vec![1, 2, 3, 4]);
        assert!(parse_digits("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        match parse_digits("12\n3x4") {
            Err(EulerError::InvalidDigit { found, position }) => {
                assert_eq!(found, 'x');
                assert_eq!(position, 4);
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(parse_digits("-1").is_err());
        // only ASCII digits count
        assert!(parse_digits("١٢").is_err());
    }

    #[test]
    fn test_puzzle_digits() {
        let digits = puzzle_digits().unwrap();
        assert_eq!(digits.len(), 1000);
        assert_eq!(&digits[..5], &[7, 3, 1, 6, 7]);
        assert_eq!(digits[999], 0);
    }

    #[test]
    fn test_read_digits() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "9989").unwrap();
        writeln!(file, "0001").unwrap();
        let digits = read_digits(file.path()).unwrap();
        assert_eq!(digits, vec![9, 9, 8, 9, 0, 0, 0, 1]);
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        assert!(matches!(read_digits(&missing), Err(EulerError::Io { .. })));
    }
}
