//! Unit-suffixed quantities: durations and byte sizes.
//!
//! Both share one grammar:
//!
//! ```text
//! quantity := sign? ( "0" | term+ )
//! term     := decimal unit
//! decimal  := digits ( "." digits? )? | "." digits
//! ```
//!
//! A unit is the run of characters up to the next digit or `.`, and must
//! appear in the caller's unit table. Terms are summed, so `1h30m` and
//! `1MB512KB` are single quantities. All arithmetic is integral; fractions
//! are truncated toward zero in the base unit.

use thiserror::Error;

/// A unit suffix and its size in base units.
pub type Unit = (&'static str, u128);

/// Duration units, in nanoseconds.
pub const DURATION_UNITS: &[Unit] = &[
    ("ns", 1),
    ("us", 1_000),
    ("\u{b5}s", 1_000),  // µs, micro sign
    ("\u{3bc}s", 1_000), // μs, Greek mu
    ("ms", 1_000_000),
    ("s", 1_000_000_000),
    ("m", 60 * 1_000_000_000),
    ("h", 3_600 * 1_000_000_000),
];

/// Strict binary byte units, multiples of 1024.
pub const BINARY_BYTE_UNITS: &[Unit] = &[
    ("B", 1),
    ("KiB", 1 << 10),
    ("MiB", 1 << 20),
    ("GiB", 1 << 30),
    ("TiB", 1 << 40),
    ("PiB", 1 << 50),
    ("EiB", 1 << 60),
];

/// Strict metric byte units, multiples of 1000.
pub const METRIC_BYTE_UNITS: &[Unit] = &[
    ("B", 1),
    ("KB", 1_000),
    ("MB", 1_000_000),
    ("GB", 1_000_000_000),
    ("TB", 1_000_000_000_000),
    ("PB", 1_000_000_000_000_000),
    ("EB", 1_000_000_000_000_000_000),
];

// Fractions longer than this are truncated; keeps `fraction * scale` in u128.
const MAX_FRACTION_DIGITS: usize = 18;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuantityError {
    #[error("empty quantity")]
    Empty,

    #[error("expected a number at `{0}`")]
    InvalidNumber(String),

    #[error("missing unit after `{0}`")]
    MissingUnit(String),

    #[error("unknown unit `{0}`")]
    UnknownUnit(String),

    #[error("quantity out of range")]
    Overflow,

    #[error("quantity must not be negative")]
    Negative,
}

/// Parse a duration into a signed count of nanoseconds.
///
/// ```
/// use fieldcheck_core::domain::quantity::parse_duration;
///
/// assert_eq!(parse_duration("1h30m").unwrap(), 5_400_000_000_000);
/// assert_eq!(parse_duration("-1.5s").unwrap(), -1_500_000_000);
/// assert!(parse_duration("5 seconds").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<i64, QuantityError> {
    let nanos = parse_quantity(input, DURATION_UNITS)?;
    i64::try_from(nanos).map_err(|_| QuantityError::Overflow)
}

/// Parse a strict byte quantity (`10MB`, `1.5GiB`, `1MB512KB`) into bytes.
///
/// Units are case-sensitive and mandatory; only the literal `0` may omit one.
/// All terms come from one family: binary is tried first, then metric, so
/// `1MB512KiB` is rejected. The metric attempt's error is the one reported.
pub fn parse_bytes(input: &str) -> Result<u64, QuantityError> {
    let bytes = parse_quantity(input, BINARY_BYTE_UNITS)
        .or_else(|_| parse_quantity(input, METRIC_BYTE_UNITS))?;
    if bytes < 0 {
        return Err(QuantityError::Negative);
    }
    u64::try_from(bytes).map_err(|_| QuantityError::Overflow)
}

/// Parse a quantity against `units`, returning the signed total in base units.
pub fn parse_quantity(input: &str, units: &[Unit]) -> Result<i128, QuantityError> {
    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(0);
    }
    if rest.is_empty() {
        return Err(if input.is_empty() {
            QuantityError::Empty
        } else {
            QuantityError::InvalidNumber(input.to_owned())
        });
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (term, tail) = next_term(rest, units)?;
        total = total.checked_add(term).ok_or(QuantityError::Overflow)?;
        rest = tail;
    }

    let signed = i128::try_from(total).map_err(|_| QuantityError::Overflow)?;
    Ok(if negative { -signed } else { signed })
}

/// Consume one `decimal unit` term from the front of `input`.
fn next_term<'a>(input: &'a str, units: &[Unit]) -> Result<(u128, &'a str), QuantityError> {
    let whole_len = leading_digits(input);
    let (whole, after_whole) = input.split_at(whole_len);

    let (fraction, after_number) = match after_whole.strip_prefix('.') {
        Some(after_dot) => after_dot.split_at(leading_digits(after_dot)),
        None => ("", after_whole),
    };
    if whole.is_empty() && fraction.is_empty() {
        return Err(QuantityError::InvalidNumber(input.to_owned()));
    }

    let unit_len = after_number
        .find(|c: char| c == '.' || c.is_ascii_digit())
        .unwrap_or(after_number.len());
    if unit_len == 0 {
        let number = &input[..input.len() - after_number.len()];
        return Err(QuantityError::MissingUnit(number.to_owned()));
    }
    let (unit, tail) = after_number.split_at(unit_len);

    let scale = units
        .iter()
        .find(|(suffix, _)| *suffix == unit)
        .map(|(_, scale)| *scale)
        .ok_or_else(|| QuantityError::UnknownUnit(unit.to_owned()))?;

    let whole_value: u128 = if whole.is_empty() {
        0
    } else {
        whole.parse().map_err(|_| QuantityError::Overflow)?
    };
    let mut value = whole_value
        .checked_mul(scale)
        .ok_or(QuantityError::Overflow)?;

    if !fraction.is_empty() {
        let digits = &fraction[..fraction.len().min(MAX_FRACTION_DIGITS)];
        // digits are ASCII and at most 18 long, so this cannot fail
        let numerator: u128 = digits.parse().map_err(|_| QuantityError::Overflow)?;
        let denominator = 10u128.pow(digits.len() as u32);
        value = value
            .checked_add(numerator * scale / denominator)
            .ok_or(QuantityError::Overflow)?;
    }

    Ok((value, tail))
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

const METRIC_PREFIXES: [&str; 7] = ["", "K", "M", "G", "T", "P", "E"];

/// Format a byte count as a sum of metric terms, largest first.
///
/// `1_000_000` renders as `1MB`, `1_500_000` as `1MB500KB`, `0` as `0B`.
pub fn format_metric_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0B".into();
    }

    let mut terms = Vec::new();
    let mut remaining = bytes;
    for prefix in METRIC_PREFIXES {
        let digit = remaining % 1000;
        if digit != 0 {
            terms.push(format!("{digit}{prefix}B"));
        }
        remaining /= 1000;
        if remaining == 0 {
            break;
        }
    }

    terms.reverse();
    terms.concat()
}
