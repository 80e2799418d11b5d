//! Monster summary - the slice of a catalog creature the encounter cares about

use crate::domain::value_objects::{ChallengeRating, MonsterSlug};

/// A creature record as returned by the monster catalog
#[derive(Debug, Clone, PartialEq)]
pub struct MonsterSummary {
    pub slug: MonsterSlug,
    pub name: String,
    /// Rating token as reported by the catalog. Empty when the record carried
    /// no rating.
    pub challenge_rating: String,
}

impl MonsterSummary {
    pub fn new(
        slug: impl Into<MonsterSlug>,
        name: impl Into<String>,
        challenge_rating: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            challenge_rating: challenge_rating.into(),
        }
    }

    /// Parsed rating, `None` when the token is outside the rating domain
    pub fn rating(&self) -> Option<ChallengeRating> {
        self.challenge_rating.parse().ok()
    }
}
