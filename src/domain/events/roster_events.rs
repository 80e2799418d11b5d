//! Roster events - Notifications of encounter roster changes
//!
//! Emitted by the encounter service after every successful mutation.
//! Observers decide which events surface to the user.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::domain::value_objects::MonsterSlug;

/// Base data for all events
#[derive(Debug, Clone)]
pub struct EventMetadata {
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
}

impl Default for EventMetadata {
    fn default() -> Self {
        Self {
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum RosterEvent {
    /// A monster was added, either as a new entry or as one more copy of an
    /// existing entry
    MonsterAdded {
        metadata: EventMetadata,
        slug: MonsterSlug,
        name: String,
        quantity: u32,
    },

    /// An entry left the roster
    MonsterRemoved {
        metadata: EventMetadata,
        slug: MonsterSlug,
    },

    /// An entry's quantity was set to a new positive value
    QuantityChanged {
        metadata: EventMetadata,
        slug: MonsterSlug,
        previous: u32,
        quantity: u32,
    },

    /// Every entry was dropped
    RosterCleared {
        metadata: EventMetadata,
        removed: usize,
    },
}

impl RosterEvent {
    pub fn monster_added(slug: MonsterSlug, name: impl Into<String>, quantity: u32) -> Self {
        Self::MonsterAdded {
            metadata: EventMetadata::default(),
            slug,
            name: name.into(),
            quantity,
        }
    }

    pub fn monster_removed(slug: MonsterSlug) -> Self {
        Self::MonsterRemoved {
            metadata: EventMetadata::default(),
            slug,
        }
    }

    pub fn quantity_changed(slug: MonsterSlug, previous: u32, quantity: u32) -> Self {
        Self::QuantityChanged {
            metadata: EventMetadata::default(),
            slug,
            previous,
            quantity,
        }
    }

    pub fn roster_cleared(removed: usize) -> Self {
        Self::RosterCleared {
            metadata: EventMetadata::default(),
            removed,
        }
    }

    /// Short name for logging
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MonsterAdded { .. } => "monster_added",
            Self::MonsterRemoved { .. } => "monster_removed",
            Self::QuantityChanged { .. } => "quantity_changed",
            Self::RosterCleared { .. } => "roster_cleared",
        }
    }
}

impl fmt::Display for RosterEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MonsterAdded {
                slug,
                name,
                quantity,
                ..
            } => write!(f, "{} ({}) added, now x{}", name, slug, quantity),
            Self::MonsterRemoved { slug, .. } => write!(f, "{} removed", slug),
            Self::QuantityChanged {
                slug,
                previous,
                quantity,
                ..
            } => write!(f, "{} quantity {} -> {}", slug, previous, quantity),
            Self::RosterCleared { removed, .. } => write!(f, "cleared {} entries", removed),
        }
    }
}
