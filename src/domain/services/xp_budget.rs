//! Encounter XP budget
//!
//! Base XP per creature comes from a fixed table keyed by challenge rating.
//! The encounter total is scaled by a multiplier that grows with the number
//! of creatures, approximating the action economy advantage of larger groups.

use serde::Serialize;

use crate::domain::entities::RosterEntry;
use crate::domain::value_objects::ChallengeRating;

/// Base XP indexed by `ChallengeRating::index`
const XP_BY_RATING: [u32; 34] = [
    10, 25, 50, 100, 200, 450, 700, 1_100, 1_800, 2_300, 2_900, 3_900, 5_000, 5_900, 7_200,
    8_400, 10_000, 11_500, 13_000, 15_000, 18_000, 20_000, 22_000, 25_000, 33_000, 41_000,
    50_000, 62_000, 75_000, 90_000, 105_000, 120_000, 135_000, 155_000,
];

/// Breakdown of an encounter's XP budget
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct XpBudget {
    pub total_base_xp: u64,
    pub total_participants: u64,
    pub multiplier: f64,
    /// Not rounded; the 1.5x step can produce fractional values
    pub total_xp: f64,
}

pub fn base_xp(rating: ChallengeRating) -> u32 {
    XP_BY_RATING[rating.index()]
}

pub fn encounter_multiplier(participants: u64) -> f64 {
    match participants {
        0..=1 => 1.0,
        2 => 1.5,
        3..=6 => 2.0,
        7..=10 => 2.5,
        11..=14 => 3.0,
        _ => 4.0,
    }
}

pub fn calculate(entries: &[RosterEntry]) -> XpBudget {
    let (total_base_xp, total_participants) =
        entries
            .iter()
            .fold((0u64, 0u64), |(base, participants), entry| {
                let quantity = u64::from(entry.quantity);
                // Unknown ratings are worth nothing but still count as a participant
                let per_monster = entry.rating().map(base_xp).map_or(0, u64::from);
                (base + per_monster * quantity, participants + quantity)
            });

    let multiplier = encounter_multiplier(total_participants);

    XpBudget {
        total_base_xp,
        total_participants,
        multiplier,
        total_xp: total_base_xp as f64 * multiplier,
    }
}

pub fn total_encounter_xp(entries: &[RosterEntry]) -> f64 {
    calculate(entries).total_xp
}
