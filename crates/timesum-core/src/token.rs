//! Time expression grammars.
//!
//! A token is classified under exactly one of three shapes, tried in order:
//!
//! 1. Clock range: `13:30-10:45`
//! 2. Clock time: `10:45`
//! 3. Decimal hours: `2`, `2.` or `2.75`
//!
//! Every shape must match the whole token. Digit classes are ASCII only.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::digits::lenient_u64;
use crate::error::BadToken;

static RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+):([0-9]+)-([0-9]+):([0-9]+)$").unwrap());
static CLOCK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^([0-9]+):([0-9]+)$").unwrap());
static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)(?:\.([0-9]*))?$").unwrap());

const MAX_HOURS: u64 = 23;
const MAX_MINUTES: u64 = 59;

/// One tenth of an hour.
const MINUTES_PER_TENTH: u64 = 6;

/// A wall-clock time within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTime {
    hours: u64,
    minutes: u64,
}

impl ClockTime {
    /// Returns `None` unless `hours <= 23` and `minutes <= 59`.
    pub const fn new(hours: u64, minutes: u64) -> Option<Self> {
        if hours <= MAX_HOURS && minutes <= MAX_MINUTES {
            Some(Self { hours, minutes })
        } else {
            None
        }
    }

    /// Minutes since midnight.
    pub const fn minutes_since_midnight(self) -> u64 {
        self.hours * 60 + self.minutes
    }

    fn from_captures(hours: &str, minutes: &str) -> Option<Self> {
        Self::new(lenient_u64(hours), lenient_u64(minutes))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.hours, self.minutes)
    }
}

/// A classified time expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeExpr {
    /// Distance between two clock times, in either direction.
    Range { from: ClockTime, to: ClockTime },
    /// A clock time read as minutes since midnight.
    Absolute(ClockTime),
    /// A quantity of hours with an optional fractional part.
    ///
    /// `fraction_digits` is the number of digits written after the point
    /// (including leading zeros), zero when there is no fractional part.
    Decimal {
        hours: u64,
        fraction: u64,
        fraction_digits: u32,
    },
}

impl TimeExpr {
    /// Classifies a token, trying range, clock time and decimal hours in that order.
    pub fn parse(token: &str) -> Result<Self, BadToken> {
        if let Some(caps) = RANGE_RE.captures(token) {
            let from = ClockTime::from_captures(&caps[1], &caps[2]);
            let to = ClockTime::from_captures(&caps[3], &caps[4]);
            return match (from, to) {
                (Some(from), Some(to)) => {
                    tracing::trace!(%from, %to, "clock range");
                    Ok(Self::Range { from, to })
                }
                _ => Err(BadToken::new(token)),
            };
        }

        if let Some(caps) = CLOCK_RE.captures(token) {
            return ClockTime::from_captures(&caps[1], &caps[2])
                .map(Self::Absolute)
                .ok_or_else(|| BadToken::new(token));
        }

        if let Some(caps) = DECIMAL_RE.captures(token) {
            let hours = lenient_u64(&caps[1]);
            let fraction_str = caps.get(2).map_or("", |m| m.as_str());
            return Ok(Self::Decimal {
                hours,
                fraction: lenient_u64(fraction_str),
                fraction_digits: u32::try_from(fraction_str.len()).unwrap_or(u32::MAX),
            });
        }

        Err(BadToken::new(token))
    }

    /// The number of minutes this expression contributes to a total.
    pub fn minutes(&self) -> u64 {
        match *self {
            Self::Range { from, to } => from
                .minutes_since_midnight()
                .abs_diff(to.minutes_since_midnight()),
            Self::Absolute(time) => time.minutes_since_midnight(),
            Self::Decimal {
                hours,
                fraction,
                fraction_digits,
            } => hours
                .saturating_mul(60)
                .saturating_add(fraction_minutes(fraction, fraction_digits)),
        }
    }
}

/// Minutes contributed by the digits after the decimal point.
///
/// The first digit counts tenths of an hour; each further digit scales the
/// value down by ten, truncating.
fn fraction_minutes(fraction: u64, digits: u32) -> u64 {
    if digits == 0 {
        return 0;
    }
    // u64::MAX * 6 fits in u128, as does 10^38
    let Some(scale) = 10_u128.checked_pow(digits - 1) else {
        return 0;
    };
    let minutes = u128::from(fraction) * u128::from(MINUTES_PER_TENTH) / scale;
    u64::try_from(minutes).unwrap_or(u64::MAX)
}

impl FromStr for TimeExpr {
    type Err = BadToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
