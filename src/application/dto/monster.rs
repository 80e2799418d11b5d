use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::entities::MonsterSummary;
use crate::domain::value_objects::{ChallengeRating, MonsterSlug};

/// Deserialize a challenge rating that may arrive as a token (`"1/4"`), a
/// decimal string (`"0.25"`), a number (`0.25`) or not at all. Recognised
/// ratings are normalised to their canonical token; anything else is kept
/// verbatim so it can round-trip, and contributes no XP.
pub fn deserialize_rating_token<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawRating {
        Text(String),
        Number(f64),
    }

    let token = match Option::<RawRating>::deserialize(deserializer)? {
        Some(RawRating::Text(text)) => match text.parse::<ChallengeRating>() {
            Ok(rating) => rating.as_str().to_string(),
            Err(_) => text,
        },
        Some(RawRating::Number(value)) => match ChallengeRating::from_f64(value) {
            Some(rating) => rating.as_str().to_string(),
            None => value.to_string(),
        },
        None => String::new(),
    };

    Ok(token)
}

/// Creature record as exchanged with API clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonsterDto {
    pub slug: String,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_rating_token")]
    pub challenge_rating: String,
}

impl From<MonsterSummary> for MonsterDto {
    fn from(value: MonsterSummary) -> Self {
        Self {
            slug: value.slug.to_string(),
            name: value.name,
            challenge_rating: value.challenge_rating,
        }
    }
}

impl From<MonsterDto> for MonsterSummary {
    fn from(value: MonsterDto) -> Self {
        Self {
            slug: MonsterSlug::from(value.slug),
            name: value.name,
            challenge_rating: value.challenge_rating,
        }
    }
}

/// Query parameters for browsing the catalog
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonsterListQueryDto {
    pub page: Option<u32>,
    pub challenge_rating: Option<String>,
}

/// One page of the catalog, with enough information to paginate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonsterListResponseDto {
    pub monsters_count: u64,
    pub monsters: Vec<MonsterDto>,
    pub page: u32,
    pub page_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monster_dto_accepts_numeric_and_token_ratings() {
        let numeric: MonsterDto =
            serde_json::from_str(r#"{"slug":"goblin","name":"Goblin","challenge_rating":0.25}"#)
                .unwrap();
        assert_eq!(numeric.challenge_rating, "1/4");

        let token: MonsterDto =
            serde_json::from_str(r#"{"slug":"goblin","name":"Goblin","challenge_rating":"1/4"}"#)
                .unwrap();
        assert_eq!(token.challenge_rating, "1/4");

        let decimal: MonsterDto =
            serde_json::from_str(r#"{"slug":"orc","name":"Orc","challenge_rating":"0.5"}"#)
                .unwrap();
        assert_eq!(decimal.challenge_rating, "1/2");
    }

    #[test]
    fn test_monster_dto_tolerates_missing_or_unknown_rating() {
        let missing: MonsterDto =
            serde_json::from_str(r#"{"slug":"blob","name":"Blob"}"#).unwrap();
        assert_eq!(missing.challenge_rating, "");

        let null: MonsterDto =
            serde_json::from_str(r#"{"slug":"blob","name":"Blob","challenge_rating":null}"#)
                .unwrap();
        assert_eq!(null.challenge_rating, "");

        let unknown: MonsterDto =
            serde_json::from_str(r#"{"slug":"blob","name":"Blob","challenge_rating":"99"}"#)
                .unwrap();
        assert_eq!(unknown.challenge_rating, "99");
        assert_eq!(MonsterSummary::from(unknown).rating(), None);
    }
}
