//! Encounter roster - the ordered set of creatures in an encounter
//!
//! The roster is unique by slug and never holds an entry with a quantity
//! below one. Insertion order is kept for display only.

use super::MonsterSummary;
use crate::domain::value_objects::{ChallengeRating, MonsterSlug};

/// One creature definition in the encounter, with how many copies appear
#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub slug: MonsterSlug,
    pub name: String,
    pub challenge_rating: String,
    pub quantity: u32,
}

impl RosterEntry {
    fn from_monster(monster: &MonsterSummary) -> Self {
        Self {
            slug: monster.slug.clone(),
            name: monster.name.clone(),
            challenge_rating: monster.challenge_rating.clone(),
            quantity: 1,
        }
    }

    pub fn rating(&self) -> Option<ChallengeRating> {
        self.challenge_rating.parse().ok()
    }
}

/// Result of a quantity update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityUpdate {
    /// Entry kept its position with a new quantity
    Updated { previous: u32, current: u32 },
    /// Non-positive quantity; `existed` is false when nothing was removed
    Removed { existed: bool },
    /// Positive quantity for a slug that is not in the roster
    Missing,
}

/// Why an entry was dropped while restoring a roster
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectedEntry {
    ZeroQuantity(MonsterSlug),
    DuplicateSlug(MonsterSlug),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a roster from previously stored entries, dropping anything
    /// that would break the roster invariants. The first occurrence of a
    /// duplicated slug wins.
    pub fn from_entries(entries: Vec<RosterEntry>) -> (Self, Vec<RejectedEntry>) {
        let mut roster = Self::new();
        let mut rejected = Vec::new();

        for entry in entries {
            if entry.quantity == 0 {
                rejected.push(RejectedEntry::ZeroQuantity(entry.slug));
            } else if roster.get(&entry.slug).is_some() {
                rejected.push(RejectedEntry::DuplicateSlug(entry.slug));
            } else {
                roster.entries.push(entry);
            }
        }

        (roster, rejected)
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn get(&self, slug: &MonsterSlug) -> Option<&RosterEntry> {
        self.entries.iter().find(|entry| &entry.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append the monster with quantity 1, or bump the quantity of the
    /// existing entry in place. Returns the resulting quantity.
    pub fn add(&mut self, monster: &MonsterSummary) -> u32 {
        match self.position(&monster.slug) {
            Some(index) => {
                let entry = &mut self.entries[index];
                entry.quantity = entry.quantity.saturating_add(1);
                entry.quantity
            }
            None => {
                self.entries.push(RosterEntry::from_monster(monster));
                1
            }
        }
    }

    /// Returns true if an entry was removed
    pub fn remove(&mut self, slug: &MonsterSlug) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| &entry.slug != slug);
        self.entries.len() != before
    }

    pub fn set_quantity(&mut self, slug: &MonsterSlug, quantity: i32) -> QuantityUpdate {
        let Ok(quantity) = u32::try_from(quantity) else {
            return QuantityUpdate::Removed {
                existed: self.remove(slug),
            };
        };
        if quantity == 0 {
            return QuantityUpdate::Removed {
                existed: self.remove(slug),
            };
        }

        match self.position(slug) {
            Some(index) => {
                let entry = &mut self.entries[index];
                let previous = entry.quantity;
                entry.quantity = quantity;
                QuantityUpdate::Updated {
                    previous,
                    current: quantity,
                }
            }
            None => QuantityUpdate::Missing,
        }
    }

    /// Empty the roster, returning how many entries were dropped
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }

    fn position(&self, slug: &MonsterSlug) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.slug == slug)
    }
}
