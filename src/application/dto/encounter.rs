//! Encounter DTOs and the persisted roster format
//!
//! The persisted value is a bare JSON array of
//! `{slug, name, challenge_rating, quantity}` objects with no version field.
//! Unknown fields are ignored on read so later additions stay readable.

use serde::{Deserialize, Serialize};

use super::monster::deserialize_rating_token;
use crate::domain::entities::{RejectedEntry, Roster, RosterEntry};
use crate::domain::services::XpBudget;
use crate::domain::value_objects::MonsterSlug;

#[derive(Debug, thiserror::Error)]
pub enum RosterCodecError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// One roster entry, both as stored and as returned to API clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntryDto {
    pub slug: String,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_rating_token")]
    pub challenge_rating: String,
    /// Signed so that corrupt negative values drop a single entry instead of
    /// failing the whole document
    pub quantity: i64,
}

impl From<&RosterEntry> for RosterEntryDto {
    fn from(value: &RosterEntry) -> Self {
        Self {
            slug: value.slug.to_string(),
            name: value.name.clone(),
            challenge_rating: value.challenge_rating.clone(),
            quantity: i64::from(value.quantity),
        }
    }
}

impl From<RosterEntryDto> for RosterEntry {
    fn from(value: RosterEntryDto) -> Self {
        let quantity = u32::try_from(value.quantity.max(0)).unwrap_or(u32::MAX);
        Self {
            slug: MonsterSlug::from(value.slug),
            name: value.name,
            challenge_rating: value.challenge_rating,
            quantity,
        }
    }
}

pub fn encode_roster(roster: &Roster) -> Result<String, RosterCodecError> {
    let entries: Vec<RosterEntryDto> = roster.entries().iter().map(RosterEntryDto::from).collect();
    Ok(serde_json::to_string(&entries)?)
}

/// Decode a stored roster. Entries that would break roster invariants are
/// dropped and reported; a document that is not a roster at all is an error.
pub fn decode_roster(raw: &str) -> Result<(Roster, Vec<RejectedEntry>), RosterCodecError> {
    let entries: Vec<RosterEntryDto> = serde_json::from_str(raw)?;
    Ok(Roster::from_entries(
        entries.into_iter().map(RosterEntry::from).collect(),
    ))
}

/// Current encounter state with its derived XP budget
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncounterSnapshotDto {
    pub monsters: Vec<RosterEntryDto>,
    pub total_encounter_xp: f64,
    pub total_base_xp: u64,
    pub total_monsters: u64,
    pub xp_multiplier: f64,
}

impl EncounterSnapshotDto {
    pub fn new(entries: &[RosterEntry], budget: XpBudget) -> Self {
        Self {
            monsters: entries.iter().map(RosterEntryDto::from).collect(),
            total_encounter_xp: budget.total_xp,
            total_base_xp: budget.total_base_xp,
            total_monsters: budget.total_participants,
            xp_multiplier: budget.multiplier,
        }
    }
}

/// Body of a quantity update
#[derive(Debug, Clone, Deserialize)]
pub struct SetQuantityRequestDto {
    pub quantity: i32,
}
