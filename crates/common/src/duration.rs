//! Go-style duration parsing
//!
//! An optional sign followed by one or more `<number><unit>` terms, such as
//! `1h`, `90m`, `1h30m`, `1.5h` or `-15m`. Valid units are `ns`, `us` (or `µs`), `ms`,
//! `s`, `m` and `h`. A bare `0` is the only unit-less value accepted.

use chrono::TimeDelta;

use crate::error::{Error, Result};

const NANOS_PER_MICRO: i128 = 1_000;
const NANOS_PER_MILLI: i128 = 1_000_000;
const NANOS_PER_SECOND: i128 = 1_000_000_000;

/// Fractional digits beyond this precision cannot change a nanosecond total.
const MAX_FRACTION_DIGITS: usize = 18;

/// Parse a duration string such as `1h30m` into a [`TimeDelta`].
pub fn parse_duration(input: &str) -> Result<TimeDelta> {
    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(TimeDelta::zero());
    }
    if rest.is_empty() {
        return Err(Error::invalid_duration(input, "empty duration"));
    }

    let mut total: i128 = 0;
    while !rest.is_empty() {
        let number_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        let (number, tail) = rest.split_at(number_end);

        let unit_end = tail
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(tail.len());
        let (unit, tail) = tail.split_at(unit_end);

        total = total
            .checked_add(term_nanos(input, number, unit)?)
            .ok_or_else(|| Error::invalid_duration(input, "duration out of range"))?;
        rest = tail;
    }

    if negative {
        total = -total;
    }

    let nanos = i64::try_from(total)
        .map_err(|_| Error::invalid_duration(input, "duration out of range"))?;
    Ok(TimeDelta::nanoseconds(nanos))
}

/// Nanoseconds contributed by a single `<number><unit>` term.
fn term_nanos(input: &str, number: &str, unit: &str) -> Result<i128> {
    let scale = unit_scale(unit).ok_or_else(|| {
        if unit.is_empty() {
            Error::invalid_duration(input, "missing unit")
        } else {
            Error::invalid_duration(input, format!("unknown unit {unit:?}"))
        }
    })?;

    let (whole, fraction) = number.split_once('.').unwrap_or((number, ""));
    if (whole.is_empty() && fraction.is_empty()) || fraction.contains('.') {
        return Err(Error::invalid_duration(input, "expected a number"));
    }

    let whole: i128 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .map_err(|_| Error::invalid_duration(input, "duration out of range"))?
    };
    let mut nanos = whole
        .checked_mul(scale)
        .ok_or_else(|| Error::invalid_duration(input, "duration out of range"))?;

    let mut numerator: i128 = 0;
    let mut denominator: i128 = 1;
    for digit in fraction.bytes().take(MAX_FRACTION_DIGITS) {
        numerator = numerator * 10 + i128::from(digit - b'0');
        denominator *= 10;
    }
    nanos = nanos
        .checked_add(numerator * scale / denominator)
        .ok_or_else(|| Error::invalid_duration(input, "duration out of range"))?;

    Ok(nanos)
}

fn unit_scale(unit: &str) -> Option<i128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(NANOS_PER_MICRO),
        "ms" => Some(NANOS_PER_MILLI),
        "s" => Some(NANOS_PER_SECOND),
        "m" => Some(60 * NANOS_PER_SECOND),
        "h" => Some(3_600 * NANOS_PER_SECOND),
        _ => None,
    }
}
