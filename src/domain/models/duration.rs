//! Duration strings as they appear in configuration files.
//!
//! The grammar is a sequence of decimal numbers, each with an optional
//! fraction and a mandatory unit suffix, optionally preceded by a sign:
//! `300ms`, `-1.5h`, `2h45m`. Valid units are `ns`, `us` (or `µs`/`μs`),
//! `ms`, `s`, `m` and `h`.

use std::time::Duration;

use crate::domain::error::ParseDurationError;

/// Largest magnitude representable before the sign is applied.
const LIMIT: u64 = 1 << 63;

/// Presence of any of these marks a string as already carrying a unit.
const UNIT_MARKERS: &[char] = &['n', 's', 'u', '\u{00b5}', 'm', 'h'];

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(1),
        "us" | "\u{00b5}s" | "\u{03bc}s" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(1_000_000_000),
        "m" => Some(60 * 1_000_000_000),
        "h" => Some(60 * 60 * 1_000_000_000),
        _ => None,
    }
}

/// Consume leading ASCII digits. `None` on overflow.
fn leading_int(s: &[u8]) -> Option<(u64, &[u8])> {
    let end = s.iter().position(|c| !c.is_ascii_digit()).unwrap_or(s.len());
    let mut x: u64 = 0;
    for &c in &s[..end] {
        if x > LIMIT / 10 {
            return None;
        }
        x = x * 10 + u64::from(c - b'0');
        if x > LIMIT {
            return None;
        }
    }
    Some((x, &s[end..]))
}

/// Consume the digits after a decimal point.
///
/// Returns the accumulated digits and the power of ten they were scaled by.
/// Digits past the point of overflow are consumed but ignored.
fn leading_fraction(s: &[u8]) -> (u64, f64, &[u8]) {
    let end = s.iter().position(|c| !c.is_ascii_digit()).unwrap_or(s.len());
    let mut x: u64 = 0;
    let mut scale = 1.0_f64;
    let mut overflow = false;
    for &c in &s[..end] {
        if overflow {
            continue;
        }
        if x > (LIMIT - 1) / 10 {
            overflow = true;
            continue;
        }
        let y = x * 10 + u64::from(c - b'0');
        if y > LIMIT {
            overflow = true;
            continue;
        }
        x = y;
        scale *= 10.0;
    }
    (x, scale, &s[end..])
}

/// Parse a duration string into signed nanoseconds.
///
/// ```
/// use fabric_config_ext::domain::models::parse_duration;
///
/// assert_eq!(parse_duration("1h30m").unwrap(), 5_400_000_000_000);
/// assert_eq!(parse_duration("-1.5s").unwrap(), -1_500_000_000);
/// assert!(parse_duration("12").is_err());
/// ```
pub fn parse_duration(input: &str) -> Result<i64, ParseDurationError> {
    let invalid = || ParseDurationError::Invalid(input.to_string());
    let overflow = || ParseDurationError::Overflow(input.to_string());

    let mut s = input.as_bytes();
    let mut negative = false;
    if let Some((&sign, rest)) = s.split_first() {
        if sign == b'-' || sign == b'+' {
            negative = sign == b'-';
            s = rest;
        }
    }

    if s == b"0" {
        return Ok(0);
    }
    if s.is_empty() {
        return Err(invalid());
    }

    let mut total: u64 = 0;
    while !s.is_empty() {
        if !(s[0] == b'.' || s[0].is_ascii_digit()) {
            return Err(invalid());
        }

        let before = s.len();
        let (whole, rest) = leading_int(s).ok_or_else(invalid)?;
        s = rest;
        let has_whole = before != s.len();

        let mut fraction = 0;
        let mut scale = 1.0;
        let mut has_fraction = false;
        if s.first() == Some(&b'.') {
            s = &s[1..];
            let before = s.len();
            let (f, sc, rest) = leading_fraction(s);
            fraction = f;
            scale = sc;
            s = rest;
            has_fraction = before != s.len();
        }
        if !has_whole && !has_fraction {
            return Err(invalid());
        }

        let unit_len = s
            .iter()
            .position(|&c| c == b'.' || c.is_ascii_digit())
            .unwrap_or(s.len());
        if unit_len == 0 {
            return Err(ParseDurationError::MissingUnit(input.to_string()));
        }
        let (unit_bytes, rest) = s.split_at(unit_len);
        s = rest;
        // The split lands on an ASCII byte, so both halves stay valid UTF-8.
        let unit_str = std::str::from_utf8(unit_bytes).map_err(|_| invalid())?;
        let unit = unit_nanos(unit_str).ok_or_else(|| ParseDurationError::UnknownUnit {
            unit: unit_str.to_string(),
            input: input.to_string(),
        })?;

        if whole > LIMIT / unit {
            return Err(overflow());
        }
        let mut value = whole * unit;
        if fraction > 0 {
            value += (fraction as f64 * (unit as f64 / scale)) as u64;
            if value > LIMIT {
                return Err(overflow());
            }
        }
        total = total
            .checked_add(value)
            .filter(|t| *t <= LIMIT)
            .ok_or_else(overflow)?;
    }

    if negative {
        return Ok(if total == LIMIT {
            i64::MIN
        } else {
            -(total as i64)
        });
    }
    i64::try_from(total).map_err(|_| overflow())
}

/// Parse a configuration duration, treating a unit-less number as nanoseconds.
///
/// A string with none of the unit characters gets `ns` appended before
/// parsing, so `"12"` is twelve nanoseconds rather than an error. Anything
/// that still fails to parse, or is negative, yields `None`.
pub fn parse_lenient_duration(input: &str) -> Option<Duration> {
    let nanos = if input.contains(UNIT_MARKERS) {
        parse_duration(input)
    } else {
        parse_duration(&format!("{input}ns"))
    }
    .ok()?;
    u64::try_from(nanos).ok().map(Duration::from_nanos)
}
