//! Custom serde module for duration strings like "30s", "250ms", "1h30m".

use serde::{self, Deserialize, Deserializer, Serializer};
use std::time::Duration;

const NANOS_PER_UNIT: [(&str, u64); 6] = [
    ("h", 3_600_000_000_000),
    ("m", 60_000_000_000),
    ("s", 1_000_000_000),
    ("ms", 1_000_000),
    ("us", 1_000),
    ("ns", 1),
];

/// Accepted YAML shapes: a duration string, or a bare integer of nanoseconds.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawDuration {
    Text(String),
    Nanos(u64),
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawDuration>::deserialize(deserializer)? {
        Some(RawDuration::Text(s)) => parse_duration(&s).map_err(serde::de::Error::custom),
        Some(RawDuration::Nanos(n)) => Ok(Duration::from_nanos(n)),
        None => Ok(Duration::ZERO),
    }
}

pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if duration.as_nanos() > u128::from(u64::MAX) {
        return Err(serde::ser::Error::custom(format!(
            "duration {:?} exceeds {} nanoseconds",
            duration,
            u64::MAX
        )));
    }
    serializer.serialize_str(&format_duration(*duration))
}

pub(crate) fn parse_duration(s: &str) -> Result<Duration, String> {
    let original = s.trim();
    let (negative, s) = match original.as_bytes().first() {
        Some(b'-') => (true, &original[1..]),
        Some(b'+') => (false, &original[1..]),
        _ => (false, original),
    };
    if original.is_empty() || s == "0" {
        return Ok(Duration::ZERO);
    }
    if negative {
        return Err(format!("negative duration not supported: {:?}", original));
    }

    let out_of_range = || format!("duration out of range: {:?}", original);

    let mut rest = s;
    let mut total: u64 = 0;
    loop {
        let (int_digits, tail) = split_digits(rest);
        let (frac_digits, tail) = match tail.strip_prefix('.') {
            Some(after_dot) => split_digits(after_dot),
            None => ("", tail),
        };
        if int_digits.is_empty() && frac_digits.is_empty() {
            return Err(format!("invalid duration number in {:?}", original));
        }

        let unit_end = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, next) = tail.split_at(unit_end);
        if unit.is_empty() {
            return Err(format!("missing unit in duration {:?}", original));
        }
        let multiplier =
            unit_nanos(unit).ok_or_else(|| format!("unknown duration unit: {}", unit))?;

        let whole: u64 = if int_digits.is_empty() {
            0
        } else {
            int_digits.parse().map_err(|_| out_of_range())?
        };
        let segment = whole
            .checked_mul(multiplier)
            .and_then(|n| n.checked_add(fraction_nanos(frac_digits, multiplier)))
            .ok_or_else(out_of_range)?;
        total = total.checked_add(segment).ok_or_else(out_of_range)?;

        if next.is_empty() {
            break;
        }
        rest = next;
    }

    Ok(Duration::from_nanos(total))
}

/// Splits off the leading run of ASCII digits.
fn split_digits(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s.split_at(end)
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "µs" | "μs" => Some(1_000),
        _ => NANOS_PER_UNIT
            .iter()
            .find(|(name, _)| *name == unit)
            .map(|(_, nanos)| *nanos),
    }
}

/// Nanoseconds contributed by the digits after the decimal point. Digits
/// past nanosecond precision are truncated.
fn fraction_nanos(digits: &str, multiplier: u64) -> u64 {
    let digits = &digits[..digits.len().min(18)];
    if digits.is_empty() {
        return 0;
    }
    let numerator: u128 = digits.bytes().fold(0, |acc, b| acc * 10 + u128::from(b - b'0'));
    let scale = 10u128.pow(digits.len() as u32);
    // Always below `multiplier`, so it fits in u64.
    (numerator * u128::from(multiplier) / scale) as u64
}

/// Formats with the largest unit that represents the duration exactly.
pub(crate) fn format_duration(d: Duration) -> String {
    let nanos = d.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }

    for (unit, size) in NANOS_PER_UNIT {
        let size = u128::from(size);
        if nanos % size == 0 {
            return format!("{}{}", nanos / size, unit);
        }
    }

    format!("{}ns", nanos)
}
