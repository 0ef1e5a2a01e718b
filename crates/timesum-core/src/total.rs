//! Running total of minutes.

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::error::BadToken;
use crate::token::TimeExpr;

/// Accumulated minutes across all tokens of one invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Total(u64);

impl Total {
    pub const fn add(&mut self, minutes: u64) {
        self.0 = self.0.saturating_add(minutes);
    }

    pub const fn minutes(self) -> u64 {
        self.0
    }

    /// Whole hours; not wrapped at 24.
    pub const fn hours_part(self) -> u64 {
        self.0 / 60
    }

    pub const fn minutes_part(self) -> u64 {
        self.0 % 60
    }
}

impl fmt::Display for Total {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours_part(), self.minutes_part())
    }
}

impl Serialize for Total {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Total", 2)?;
        state.serialize_field("minutes", &self.0)?;
        state.serialize_field("formatted", &self.to_string())?;
        state.end()
    }
}

/// Sums tokens left to right, stopping at the first one that does not parse.
pub fn sum<I>(tokens: I) -> Result<Total, BadToken>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut total = Total::default();
    for token in tokens {
        let token = token.as_ref();
        let expr = TimeExpr::parse(token).inspect_err(|_| {
            tracing::debug!(token, "rejected token");
        })?;
        let minutes = expr.minutes();
        tracing::debug!(token, ?expr, minutes, "parsed token");
        total.add(minutes);
    }
    Ok(total)
}
