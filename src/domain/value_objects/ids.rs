//! Identifiers for domain entities

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Catalog identifier of a creature definition (an Open5e slug such as
/// `"adult-black-dragon"`). Opaque and stable across catalog requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonsterSlug(String);

impl MonsterSlug {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MonsterSlug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MonsterSlug {
    fn from(slug: &str) -> Self {
        Self(slug.to_string())
    }
}

impl From<String> for MonsterSlug {
    fn from(slug: String) -> Self {
        Self(slug)
    }
}

/// Identifier of a published notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(Uuid);

impl NotificationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
