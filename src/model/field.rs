use super::StudentId;
use std::error::Error;
use std::fmt;

/// Reason why the identifier column could not be turned into a number.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FieldError {
    /// No decimal digit where the number should start.
    Invalid(String),
    /// Digits were found but the value does not fit in an `i32`.
    OutOfRange(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FieldError::Invalid(raw) => write!(f, "no conversion for {raw:?}"),
            FieldError::OutOfRange(raw) => write!(f, "{raw:?} is out of range"),
        }
    }
}

impl Error for FieldError {}

/// Parse a student identifier.
///
/// Leading whitespace is skipped, an optional sign is accepted, then the
/// longest run of decimal digits is used. Anything after the digits is
/// ignored, so `"12abc"` gives 12 and `"42\r"` gives 42.
pub fn parse_id(raw: &str) -> Result<StudentId, FieldError> {
    let s = raw.trim_start_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return Err(FieldError::Invalid(raw.to_owned()));
    }
    let mut value: i64 = 0;
    for b in s[..digits].bytes() {
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_add(i64::from(b - b'0')))
            .ok_or_else(|| FieldError::OutOfRange(raw.to_owned()))?;
    }
    if negative {
        value = -value;
    }
    i32::try_from(value)
        .map(StudentId)
        .map_err(|_| FieldError::OutOfRange(raw.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_id("101"), Ok(StudentId(101)));
        assert_eq!(parse_id("-3"), Ok(StudentId(-3)));
        assert_eq!(parse_id("+8"), Ok(StudentId(8)));
        assert_eq!(parse_id("007"), Ok(StudentId(7)));
    }

    #[test]
    fn whitespace_and_trailing_garbage() {
        assert_eq!(parse_id("  42"), Ok(StudentId(42)));
        assert_eq!(parse_id("\t42\r"), Ok(StudentId(42)));
        assert_eq!(parse_id("12abc"), Ok(StudentId(12)));
        assert_eq!(parse_id("3.9"), Ok(StudentId(3)));
    }

    #[test]
    fn invalid() {
        for raw in ["", "abc", "   ", "-", "+", "- 1", "x12"] {
            assert_eq!(parse_id(raw), Err(FieldError::Invalid(raw.to_owned())));
        }
    }

    #[test]
    fn range_limits() {
        assert_eq!(parse_id("2147483647"), Ok(StudentId(i32::MAX)));
        assert_eq!(parse_id("-2147483648"), Ok(StudentId(i32::MIN)));
        assert!(matches!(
            parse_id("2147483648"),
            Err(FieldError::OutOfRange(_))
        ));
        assert!(matches!(
            parse_id("99999999999999999999999"),
            Err(FieldError::OutOfRange(_))
        ));
    }
}
