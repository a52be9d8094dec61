//! Go-style duration literals such as `"1h30m"`, `"250ms"` or `"1.5s"`.
//!
//! Durations are written as a sequence of decimal numbers, each with an
//! optional fraction and a unit suffix. Valid units are `ns`, `us` (or `µs`
//! and `μs`), `ms`, `s`, `m` and `h`. The bare literal `"0"` is accepted
//! without a unit. [`std::time::Duration`] is unsigned, so negative literals
//! other than zero are rejected.

use std::time::Duration;

use thiserror::Error;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Upper bound on the fraction denominator; digits past this precision are
/// ignored.
const MAX_FRACTION_SCALE: u128 = 1_000_000_000_000_000_000;

/// Failures parsing a duration literal.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum DurationError {
    /// The literal is malformed.
    #[error("invalid duration {text:?}")]
    Invalid {
        /// Rejected literal.
        text: String,
    },

    /// A number was not followed by a unit.
    #[error("missing unit in duration {text:?}")]
    MissingUnit {
        /// Rejected literal.
        text: String,
    },

    /// A unit suffix is not recognised.
    #[error("unknown unit {unit:?} in duration {text:?}")]
    UnknownUnit {
        /// Unrecognised suffix.
        unit: String,
        /// Rejected literal.
        text: String,
    },

    /// The literal is negative.
    #[error("negative duration {text:?} is not supported")]
    Negative {
        /// Rejected literal.
        text: String,
    },

    /// The literal exceeds the range of [`Duration`].
    #[error("duration {text:?} is out of range")]
    Overflow {
        /// Rejected literal.
        text: String,
    },
}

fn unit_scale(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(1),
        "us" | "µs" | "μs" => Some(1_000),
        "ms" => Some(1_000_000),
        "s" => Some(NANOS_PER_SEC),
        "m" => Some(60 * NANOS_PER_SEC),
        "h" => Some(3_600 * NANOS_PER_SEC),
        _ => None,
    }
}

fn split_digits(text: &str) -> (&str, &str) {
    let len = text.bytes().take_while(u8::is_ascii_digit).count();
    text.split_at(len)
}

/// Parses a Go-style duration literal.
///
/// # Errors
///
/// Returns a [`DurationError`] describing why the literal was rejected.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use struct_flag::duration;
///
/// assert_eq!(duration::parse("1h30m")?, Duration::from_secs(5_400));
/// assert_eq!(duration::parse("1.5s")?, Duration::from_millis(1_500));
/// # Ok::<(), struct_flag::duration::DurationError>(())
/// ```
pub fn parse(text: &str) -> Result<Duration, DurationError> {
    let invalid = || DurationError::Invalid {
        text: text.to_owned(),
    };
    let overflow = || DurationError::Overflow {
        text: text.to_owned(),
    };

    let (negative, mut rest) = match text.strip_prefix('-') {
        Some(stripped) => (true, stripped),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let (whole, after_whole) = split_digits(rest);
        let (fraction, after_fraction) = match after_whole.strip_prefix('.') {
            Some(stripped) => split_digits(stripped),
            None => ("", after_whole),
        };
        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        let unit_len = after_fraction
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(after_fraction.len());
        let (unit, remainder) = after_fraction.split_at(unit_len);
        if unit.is_empty() {
            return Err(DurationError::MissingUnit {
                text: text.to_owned(),
            });
        }
        let scale = unit_scale(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_owned(),
            text: text.to_owned(),
        })?;

        let whole_value = if whole.is_empty() {
            0
        } else {
            whole.parse::<u128>().map_err(|_| overflow())?
        };
        total = whole_value
            .checked_mul(scale)
            .and_then(|nanos| total.checked_add(nanos))
            .ok_or_else(overflow)?;

        let mut numerator: u128 = 0;
        let mut denominator: u128 = 1;
        for digit in fraction.bytes() {
            if denominator >= MAX_FRACTION_SCALE {
                break;
            }
            numerator = numerator * 10 + u128::from(digit - b'0');
            denominator *= 10;
        }
        let fraction_nanos = numerator
            .checked_mul(scale)
            .map(|scaled| scaled.div_euclid(denominator))
            .ok_or_else(overflow)?;
        total = total.checked_add(fraction_nanos).ok_or_else(overflow)?;

        rest = remainder;
    }

    if negative && total != 0 {
        return Err(DurationError::Negative {
            text: text.to_owned(),
        });
    }
    let secs = u64::try_from(total.div_euclid(NANOS_PER_SEC)).map_err(|_| overflow())?;
    let nanos = u32::try_from(total.rem_euclid(NANOS_PER_SEC)).map_err(|_| overflow())?;
    Ok(Duration::new(secs, nanos))
}

/// Renders `remainder / scale` as a decimal fraction without trailing zeros,
/// including the leading dot, or an empty string when there is no remainder.
fn fraction(remainder: u128, scale: u128) -> String {
    if remainder == 0 {
        return String::new();
    }
    let width = usize::try_from(scale.ilog10()).unwrap_or(9);
    let digits = format!("{remainder:0width$}");
    format!(".{}", digits.trim_end_matches('0'))
}

/// Formats a duration the way Go's `time.Duration` prints itself.
///
/// Durations under one second use the largest fitting sub-second unit
/// (`"1.5ms"`, `"800µs"`). Longer durations print hours, minutes and seconds
/// (`"1h0m0s"`, `"2m3.5s"`), and zero prints as `"0s"`.
#[must_use]
pub fn format(duration: Duration) -> String {
    let total = duration.as_nanos();
    if total == 0 {
        return String::from("0s");
    }
    if total < NANOS_PER_SEC {
        let (unit, scale) = if total < 1_000 {
            ("ns", 1)
        } else if total < 1_000_000 {
            ("µs", 1_000)
        } else {
            ("ms", 1_000_000)
        };
        return format!(
            "{}{}{unit}",
            total.div_euclid(scale),
            fraction(total.rem_euclid(scale), scale)
        );
    }

    let secs = duration.as_secs();
    let hours = secs.div_euclid(3_600);
    let minutes = secs.div_euclid(60).rem_euclid(60);
    let seconds = secs.rem_euclid(60);
    let larger = if hours > 0 {
        format!("{hours}h{minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m")
    } else {
        String::new()
    };
    format!(
        "{larger}{seconds}{}s",
        fraction(u128::from(duration.subsec_nanos()), NANOS_PER_SEC)
    )
}

#[cfg(test)]
mod tests {
    //! Unit tests for duration literal parsing and formatting.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::zero("0", Duration::ZERO)]
    #[case::signed_zero("-0", Duration::ZERO)]
    #[case::explicit_plus("+5s", Duration::from_secs(5))]
    #[case::seconds("30s", Duration::from_secs(30))]
    #[case::compound("1h30m", Duration::from_secs(5_400))]
    #[case::fractional("1.5s", Duration::from_millis(1_500))]
    #[case::leading_dot(".5s", Duration::from_millis(500))]
    #[case::trailing_dot("1.s", Duration::from_secs(1))]
    #[case::millis("250ms", Duration::from_millis(250))]
    #[case::micro_ascii("3us", Duration::from_micros(3))]
    #[case::micro_sign("3µs", Duration::from_micros(3))]
    #[case::micro_greek("3μs", Duration::from_micros(3))]
    #[case::nanos("7ns", Duration::from_nanos(7))]
    #[case::mixed("2h45m30.25s", Duration::from_millis(9_930_250))]
    fn parses_valid_literals(#[case] text: &str, #[case] expected: Duration) {
        assert_eq!(parse(text), Ok(expected));
    }

    #[rstest]
    #[case::empty("")]
    #[case::sign_only("-")]
    #[case::no_digits("s")]
    #[case::lone_dot(".s")]
    fn rejects_malformed_literals(#[case] text: &str) {
        assert!(matches!(parse(text), Err(DurationError::Invalid { .. })));
    }

    #[test]
    fn rejects_missing_unit() {
        assert!(matches!(parse("10"), Err(DurationError::MissingUnit { .. })));
    }

    #[test]
    fn rejects_unknown_unit() {
        assert_eq!(
            parse("3d"),
            Err(DurationError::UnknownUnit {
                unit: String::from("d"),
                text: String::from("3d"),
            })
        );
    }

    #[test]
    fn rejects_negative_durations() {
        assert!(matches!(parse("-1s"), Err(DurationError::Negative { .. })));
    }

    #[test]
    fn rejects_overflowing_durations() {
        let text = format!("{}h", u128::MAX);
        assert!(matches!(parse(&text), Err(DurationError::Overflow { .. })));
    }

    #[rstest]
    #[case::zero(Duration::ZERO, "0s")]
    #[case::nanos(Duration::from_nanos(10), "10ns")]
    #[case::micros(Duration::from_nanos(800_000), "800µs")]
    #[case::fractional_millis(Duration::from_micros(1_500), "1.5ms")]
    #[case::seconds(Duration::from_secs(30), "30s")]
    #[case::minutes(Duration::from_secs(123), "2m3s")]
    #[case::hours(Duration::from_secs(3_600), "1h0m0s")]
    #[case::fractional_seconds(Duration::from_millis(90_500), "1m30.5s")]
    fn formats_like_go(#[case] duration: Duration, #[case] expected: &str) {
        assert_eq!(format(duration), expected);
    }

    #[rstest]
    #[case(Duration::from_millis(1_500))]
    #[case(Duration::from_secs(5_400))]
    #[case(Duration::from_nanos(1_234_567_891))]
    fn formatted_text_parses_back(#[case] duration: Duration) {
        assert_eq!(parse(&format(duration)), Ok(duration));
    }
}
