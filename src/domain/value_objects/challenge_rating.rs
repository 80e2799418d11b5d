//! Challenge rating - the fixed, ordered difficulty domain for creatures

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Canonical rating tokens in ascending order. Fractions below 1 are kept as
/// tokens rather than decimals.
const TOKENS: [&str; 34] = [
    "0", "1/8", "1/4", "1/2", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13",
    "14", "15", "16", "17", "18", "19", "20", "21", "22", "23", "24", "25", "26", "27", "28",
    "29", "30",
];

/// A creature's challenge rating
///
/// Ordered by difficulty; the inner value is the position in the rating
/// domain, never the numeric rating itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChallengeRating(u8);

impl ChallengeRating {
    pub const ZERO: Self = Self(0);
    pub const ONE_EIGHTH: Self = Self(1);
    pub const ONE_QUARTER: Self = Self(2);
    pub const ONE_HALF: Self = Self(3);
    pub const MAX: Self = Self(TOKENS.len() as u8 - 1);

    /// Every rating, lowest first
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=Self::MAX.0).map(Self)
    }

    /// Whole-number rating (0 through 30)
    pub fn whole(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::ZERO),
            1..=30 => Some(Self(value + 3)),
            _ => None,
        }
    }

    /// Normalise a numeric rating as reported by some catalogs (`0.25`, `3.0`)
    pub fn from_f64(value: f64) -> Option<Self> {
        const EPSILON: f64 = 1e-9;
        if !value.is_finite() || value < 0.0 {
            return None;
        }
        if (value - 0.125).abs() < EPSILON {
            return Some(Self::ONE_EIGHTH);
        }
        if (value - 0.25).abs() < EPSILON {
            return Some(Self::ONE_QUARTER);
        }
        if (value - 0.5).abs() < EPSILON {
            return Some(Self::ONE_HALF);
        }
        if value.fract().abs() < EPSILON && value <= 30.0 {
            return Self::whole(value as u8);
        }
        None
    }

    pub fn as_str(&self) -> &'static str {
        TOKENS[self.0 as usize]
    }

    /// Position within the ascending rating domain
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ChallengeRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown challenge rating: {0}")]
pub struct UnknownChallengeRating(pub String);

impl FromStr for ChallengeRating {
    type Err = UnknownChallengeRating;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(rating) = Self::all().find(|rating| rating.as_str() == trimmed) {
            return Ok(rating);
        }
        trimmed
            .parse::<f64>()
            .ok()
            .and_then(Self::from_f64)
            .ok_or_else(|| UnknownChallengeRating(s.to_string()))
    }
}

impl Serialize for ChallengeRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ChallengeRating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let token = String::deserialize(deserializer)?;
        token.parse().map_err(serde::de::Error::custom)
    }
}
