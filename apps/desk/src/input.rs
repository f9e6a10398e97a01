//! # Input Readers
//!
//! Re-prompting line readers for the menu. Each reader keeps asking until
//! it gets a usable value, so the menu handlers never see malformed input.
//! They are generic over `BufRead` to stay testable without a terminal.

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

/// External text form of calendar dates: `YYYY-MM-DD`.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Prints a prompt without a trailing newline and flushes it out.
pub fn prompt(text: &str) -> io::Result<()> {
    print!("{}", text);
    io::stdout().flush()
}

/// Reads one trimmed line. A closed input stream is an error, not a value;
/// the menu loop treats it as "operator left".
pub fn read_line(reader: &mut impl BufRead) -> io::Result<String> {
    let mut buf = String::new();
    if reader.read_line(&mut buf)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(buf.trim().to_string())
}

/// Reads an integer within `min..=max`, re-prompting until valid.
pub fn read_int_in_range(reader: &mut impl BufRead, min: i64, max: i64) -> io::Result<i64> {
    loop {
        let line = read_line(reader)?;
        match line.parse::<i64>() {
            Ok(value) if (min..=max).contains(&value) => return Ok(value),
            _ => prompt(&format!("Please enter a valid number ({}-{}): ", min, max))?,
        }
    }
}

/// Reads a non-empty string, re-prompting until one arrives.
pub fn read_non_empty(reader: &mut impl BufRead) -> io::Result<String> {
    loop {
        let line = read_line(reader)?;
        if !line.is_empty() {
            return Ok(line);
        }
        prompt("Input cannot be empty. Please enter again: ")?;
    }
}

/// Reads a `YYYY-MM-DD` date, re-prompting until it parses.
pub fn read_date(reader: &mut impl BufRead) -> io::Result<NaiveDate> {
    loop {
        let line = read_line(reader)?;
        match NaiveDate::parse_from_str(&line, DATE_FORMAT) {
            Ok(date) => return Ok(date),
            Err(_) => prompt("Invalid date format. Use YYYY-MM-DD: ")?,
        }
    }
}

/// Reads a non-negative percentage ("10" means 10%), re-prompting until
/// valid. No upper bound: discounts above 100 are priced by the core's
/// clamp, not rejected at the terminal.
pub fn read_percent(reader: &mut impl BufRead) -> io::Result<f64> {
    loop {
        let line = read_line(reader)?;
        match line.parse::<f64>() {
            Ok(value) if value >= 0.0 => return Ok(value),
            _ => prompt("Please enter a valid number >= 0: ")?,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_trims() {
        let mut input = Cursor::new("  C001  \n");
        assert_eq!(read_line(&mut input).unwrap(), "C001");
    }

    #[test]
    fn test_read_line_eof_is_error() {
        let mut input = Cursor::new("");
        assert!(read_line(&mut input).is_err());
    }

    #[test]
    fn test_read_int_in_range_retries() {
        let mut input = Cursor::new("abc\n0\n9\n3\n");
        assert_eq!(read_int_in_range(&mut input, 1, 6).unwrap(), 3);
    }

    #[test]
    fn test_read_non_empty_retries() {
        let mut input = Cursor::new("\n   \nAyesha\n");
        assert_eq!(read_non_empty(&mut input).unwrap(), "Ayesha");
    }

    #[test]
    fn test_read_date() {
        let mut input = Cursor::new("01/01/2024\n2024-01-01\n");
        let date = read_date(&mut input).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
    }

    #[test]
    fn test_read_percent() {
        let mut input = Cursor::new("ten\n-5\n10.5\n");
        assert!((read_percent(&mut input).unwrap() - 10.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_read_percent_allows_above_100() {
        let mut input = Cursor::new("150\n");
        assert!((read_percent(&mut input).unwrap() - 150.0).abs() < f64::EPSILON);
    }
}
