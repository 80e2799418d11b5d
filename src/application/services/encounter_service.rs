//! Encounter Service - Owns the encounter roster and its persisted mirror
//!
//! This is the only place the roster is mutated. Each mutation applies the
//! change, recomputes the XP budget and writes the full roster to the
//! key-value store while holding the roster lock, so mutations from one
//! process land in call order. Persistence problems are logged and never
//! reach the caller; the in-memory roster stays authoritative.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, error, info, instrument, warn};

use crate::application::dto::{decode_roster, encode_roster};
use crate::application::ports::outbound::{KeyValueStorePort, RosterObserverPort};
use crate::domain::entities::{MonsterSummary, QuantityUpdate, RejectedEntry, Roster, RosterEntry};
use crate::domain::events::RosterEvent;
use crate::domain::services::{xp_budget, XpBudget};
use crate::domain::value_objects::MonsterSlug;

/// Storage key used when none is configured
pub const DEFAULT_ROSTER_KEY: &str = "encounterMonsters";

/// Immutable view of the encounter at one point in time
#[derive(Debug, Clone, PartialEq)]
pub struct EncounterSnapshot {
    pub monsters: Vec<RosterEntry>,
    pub budget: XpBudget,
}

struct EncounterState {
    roster: Roster,
    budget: XpBudget,
}

impl EncounterState {
    fn new(roster: Roster) -> Self {
        let budget = xp_budget::calculate(roster.entries());
        Self { roster, budget }
    }

    fn snapshot(&self) -> EncounterSnapshot {
        EncounterSnapshot {
            monsters: self.roster.entries().to_vec(),
            budget: self.budget,
        }
    }
}

pub struct EncounterService {
    store: Arc<dyn KeyValueStorePort>,
    observer: Arc<dyn RosterObserverPort>,
    storage_key: String,
    state: Mutex<EncounterState>,
}

impl EncounterService {
    /// Create the service, restoring the roster persisted under `storage_key`.
    ///
    /// A missing, unreadable or malformed value starts an empty roster.
    pub async fn load(
        store: Arc<dyn KeyValueStorePort>,
        observer: Arc<dyn RosterObserverPort>,
        storage_key: impl Into<String>,
    ) -> Self {
        let storage_key = storage_key.into();
        let roster = restore_roster(store.as_ref(), &storage_key).await;
        if roster.is_empty() {
            info!(key = %storage_key, "Starting with an empty encounter");
        } else {
            info!(
                key = %storage_key,
                entries = roster.len(),
                "Encounter roster loaded"
            );
        }

        Self {
            store,
            observer,
            storage_key,
            state: Mutex::new(EncounterState::new(roster)),
        }
    }

    /// Add one copy of a monster. Always succeeds and always notifies.
    #[instrument(skip(self, monster), fields(slug = %monster.slug))]
    pub async fn add_monster(&self, monster: MonsterSummary) -> EncounterSnapshot {
        if monster.rating().is_none() {
            warn!(
                rating = %monster.challenge_rating,
                "Monster has no recognised challenge rating and adds no XP"
            );
        }

        self.mutate(|roster| {
            let quantity = roster.add(&monster);
            debug!(quantity, "Monster added to encounter");
            Some(RosterEvent::monster_added(
                monster.slug.clone(),
                monster.name.clone(),
                quantity,
            ))
        })
        .await
    }

    #[instrument(skip(self, slug), fields(slug = %slug))]
    pub async fn remove_monster(&self, slug: &MonsterSlug) -> EncounterSnapshot {
        self.mutate(|roster| {
            if roster.remove(slug) {
                Some(RosterEvent::monster_removed(slug.clone()))
            } else {
                debug!("Monster not in encounter, nothing to remove");
                None
            }
        })
        .await
    }

    /// Set a monster's quantity; zero or less removes it
    #[instrument(skip(self, slug), fields(slug = %slug))]
    pub async fn set_monster_quantity(&self, slug: &MonsterSlug, quantity: i32) -> EncounterSnapshot {
        self.mutate(|roster| match roster.set_quantity(slug, quantity) {
            QuantityUpdate::Updated { previous, current } => Some(
                RosterEvent::quantity_changed(slug.clone(), previous, current),
            ),
            QuantityUpdate::Removed { existed: true } => {
                Some(RosterEvent::monster_removed(slug.clone()))
            }
            QuantityUpdate::Removed { existed: false } => None,
            QuantityUpdate::Missing => {
                warn!(
                    "Attempted to set quantity for non-existent monster: {}",
                    slug
                );
                None
            }
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn clear_monsters(&self) -> EncounterSnapshot {
        self.mutate(|roster| Some(RosterEvent::roster_cleared(roster.clear())))
            .await
    }

    pub async fn monsters(&self) -> Vec<RosterEntry> {
        self.state.lock().await.roster.entries().to_vec()
    }

    pub async fn total_encounter_xp(&self) -> f64 {
        self.state.lock().await.budget.total_xp
    }

    pub async fn snapshot(&self) -> EncounterSnapshot {
        self.state.lock().await.snapshot()
    }

    /// Apply a change to the roster. `apply` returns the event describing the
    /// change, or `None` when the roster was left untouched, in which case
    /// nothing is recomputed, persisted or announced.
    async fn mutate<F>(&self, apply: F) -> EncounterSnapshot
    where
        F: FnOnce(&mut Roster) -> Option<RosterEvent>,
    {
        let mut state = self.state.lock().await;
        let event = apply(&mut state.roster);

        if event.is_some() {
            state.budget = xp_budget::calculate(state.roster.entries());
            self.persist(&state.roster).await;
        }

        let snapshot = state.snapshot();
        drop(state);

        if let Some(event) = event {
            self.notify(event).await;
        }

        snapshot
    }

    async fn persist(&self, roster: &Roster) {
        let encoded = match encode_roster(roster) {
            Ok(encoded) => encoded,
            Err(e) => {
                error!("Failed to serialize encounter roster: {}", e);
                return;
            }
        };

        if let Err(e) = self.store.set(&self.storage_key, &encoded).await {
            error!(key = %self.storage_key, "Failed to persist encounter roster: {}", e);
        }
    }

    async fn notify(&self, event: RosterEvent) {
        debug!("Roster event: {}", event);
        let kind = event.kind();
        if let Err(e) = self.observer.on_roster_event(event).await {
            error!(event = kind, "Roster observer failed: {}", e);
        }
    }
}

async fn restore_roster(store: &dyn KeyValueStorePort, key: &str) -> Roster {
    let raw = match store.get(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return Roster::new(),
        Err(e) => {
            error!(key, "Error reading encounter roster: {}", e);
            return Roster::new();
        }
    };

    match decode_roster(&raw) {
        Ok((roster, rejected)) => {
            for entry in rejected {
                match entry {
                    RejectedEntry::ZeroQuantity(slug) => {
                        warn!(%slug, "Dropped stored roster entry with non-positive quantity")
                    }
                    RejectedEntry::DuplicateSlug(slug) => {
                        warn!(%slug, "Dropped duplicate stored roster entry")
                    }
                }
            }
            roster
        }
        Err(e) => {
            warn!(key, "Stored encounter roster is malformed, starting empty: {}", e);
            Roster::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex as StdMutex;

    use async_trait::async_trait;

    use super::*;
    use crate::application::ports::outbound::{NotificationError, StorageError};

    #[derive(Default)]
    struct MemoryStore {
        values: StdMutex<HashMap<String, String>>,
        writes: StdMutex<usize>,
    }

    impl MemoryStore {
        fn with_value(key: &str, value: &str) -> Self {
            let store = Self::default();
            store
                .values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            store
        }

        fn value(&self, key: &str) -> Option<String> {
            self.values.lock().unwrap().get(key).cloned()
        }

        fn writes(&self) -> usize {
            *self.writes.lock().unwrap()
        }
    }

    #[async_trait]
    impl KeyValueStorePort for MemoryStore {
        async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            Ok(self.value(key))
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
            *self.writes.lock().unwrap() += 1;
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct BrokenStore;

    #[async_trait]
    impl KeyValueStorePort for BrokenStore {
        async fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Database("disk on fire".to_string()))
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Database("quota exceeded".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingObserver {
        events: StdMutex<Vec<RosterEvent>>,
    }

    impl RecordingObserver {
        fn kinds(&self) -> Vec<&'static str> {
            self.events.lock().unwrap().iter().map(RosterEvent::kind).collect()
        }
    }

    #[async_trait]
    impl RosterObserverPort for RecordingObserver {
        async fn on_roster_event(&self, event: RosterEvent) -> Result<(), NotificationError> {
            self.events.lock().unwrap().push(event);
            Ok(())
        }
    }

    struct FailingObserver;

    #[async_trait]
    impl RosterObserverPort for FailingObserver {
        async fn on_roster_event(&self, _event: RosterEvent) -> Result<(), NotificationError> {
            Err(NotificationError::Publish("nobody home".to_string()))
        }
    }

    fn bandit() -> MonsterSummary {
        MonsterSummary::new("bandit", "Bandit", "1/8")
    }

    fn bandit_captain() -> MonsterSummary {
        MonsterSummary::new("bandit-captain", "Bandit Captain", "2")
    }

    async fn service_with(
        store: Arc<MemoryStore>,
        observer: Arc<RecordingObserver>,
    ) -> EncounterService {
        EncounterService::load(store, observer, DEFAULT_ROSTER_KEY).await
    }

    #[tokio::test]
    async fn test_starts_empty_without_stored_roster() {
        let service =
            service_with(Arc::new(MemoryStore::default()), Arc::new(RecordingObserver::default()))
                .await;
        assert!(service.monsters().await.is_empty());
        assert_eq!(service.total_encounter_xp().await, 0.0);
    }

    #[tokio::test]
    async fn test_add_increments_and_notifies_every_time() {
        let observer = Arc::new(RecordingObserver::default());
        let service = service_with(Arc::new(MemoryStore::default()), observer.clone()).await;

        service.add_monster(bandit()).await;
        service.add_monster(bandit_captain()).await;
        let snapshot = service.add_monster(bandit()).await;

        assert_eq!(snapshot.monsters.len(), 2);
        assert_eq!(snapshot.monsters[0].slug.as_str(), "bandit");
        assert_eq!(snapshot.monsters[0].quantity, 2);
        assert_eq!(observer.kinds(), vec!["monster_added"; 3]);

        let events = observer.events.lock().unwrap();
        match &events[2] {
            RosterEvent::MonsterAdded { name, quantity, .. } => {
                assert_eq!(name, "Bandit");
                assert_eq!(*quantity, 2);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_every_mutation_is_persisted() {
        let store = Arc::new(MemoryStore::default());
        let service = service_with(store.clone(), Arc::new(RecordingObserver::default())).await;

        service.add_monster(bandit()).await;
        service.add_monster(bandit()).await;
        service.set_monster_quantity(&MonsterSlug::from("bandit"), 5).await;

        let stored = store.value(DEFAULT_ROSTER_KEY).unwrap();
        let (roster, _) = decode_roster(&stored).unwrap();
        assert_eq!(roster.entries()[0].quantity, 5);
        assert_eq!(store.writes(), 3);

        service.clear_monsters().await;
        assert_eq!(store.value(DEFAULT_ROSTER_KEY).unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_remove_twice_is_a_noop_the_second_time() {
        let store = Arc::new(MemoryStore::default());
        let observer = Arc::new(RecordingObserver::default());
        let service = service_with(store.clone(), observer.clone()).await;
        service.add_monster(bandit()).await;

        let slug = MonsterSlug::from("bandit");
        service.remove_monster(&slug).await;
        let snapshot = service.remove_monster(&slug).await;

        assert!(snapshot.monsters.is_empty());
        assert_eq!(store.writes(), 2);
        assert_eq!(observer.kinds(), vec!["monster_added", "monster_removed"]);
    }

    #[tokio::test]
    async fn test_set_quantity_zero_removes() {
        let service =
            service_with(Arc::new(MemoryStore::default()), Arc::new(RecordingObserver::default()))
                .await;
        service.add_monster(bandit()).await;
        service.add_monster(bandit_captain()).await;

        let snapshot = service
            .set_monster_quantity(&MonsterSlug::from("bandit"), 0)
            .await;
        assert_eq!(snapshot.monsters.len(), 1);
        assert_eq!(snapshot.monsters[0].slug.as_str(), "bandit-captain");
    }

    #[tokio::test]
    async fn test_set_quantity_for_missing_monster_changes_nothing() {
        let store = Arc::new(MemoryStore::default());
        let observer = Arc::new(RecordingObserver::default());
        let service = service_with(store.clone(), observer.clone()).await;
        service.add_monster(bandit()).await;

        let snapshot = service
            .set_monster_quantity(&MonsterSlug::from("lich"), 4)
            .await;

        assert_eq!(snapshot.monsters.len(), 1);
        assert_eq!(store.writes(), 1);
        assert_eq!(observer.kinds(), vec!["monster_added"]);
    }

    #[tokio::test]
    async fn test_total_xp_tracks_mutations() {
        let service =
            service_with(Arc::new(MemoryStore::default()), Arc::new(RecordingObserver::default()))
                .await;

        service
            .add_monster(MonsterSummary::new("thug", "Thug", "1"))
            .await;
        service
            .add_monster(MonsterSummary::new("thug", "Thug", "1"))
            .await;
        service
            .add_monster(MonsterSummary::new("veteran", "Veteran", "3"))
            .await;
        assert_eq!(service.total_encounter_xp().await, 2_200.0);

        service
            .set_monster_quantity(&MonsterSlug::from("thug"), 0)
            .await;
        assert_eq!(service.total_encounter_xp().await, 700.0);

        service.clear_monsters().await;
        assert_eq!(service.total_encounter_xp().await, 0.0);
    }

    #[tokio::test]
    async fn test_restores_persisted_roster() {
        let store = Arc::new(MemoryStore::default());
        {
            let service = service_with(store.clone(), Arc::new(RecordingObserver::default())).await;
            service.add_monster(bandit()).await;
            service.add_monster(bandit_captain()).await;
            service.add_monster(bandit()).await;
        }

        let service = service_with(store, Arc::new(RecordingObserver::default())).await;
        let monsters = service.monsters().await;
        assert_eq!(monsters.len(), 2);
        assert_eq!(monsters[0].quantity, 2);
        assert_eq!(monsters[1].name, "Bandit Captain");
        // 2 x 25 + 450 = 500 base, 3 monsters at 2x
        assert_eq!(service.total_encounter_xp().await, 1_000.0);
    }

    #[tokio::test]
    async fn test_malformed_storage_starts_empty() {
        let store = Arc::new(MemoryStore::with_value(DEFAULT_ROSTER_KEY, "{not json"));
        let service = service_with(store, Arc::new(RecordingObserver::default())).await;
        assert!(service.monsters().await.is_empty());
    }

    #[tokio::test]
    async fn test_storage_failures_are_swallowed() {
        let service = EncounterService::load(
            Arc::new(BrokenStore),
            Arc::new(RecordingObserver::default()),
            "roster",
        )
        .await;
        assert!(service.monsters().await.is_empty());

        let snapshot = service.add_monster(bandit()).await;
        assert_eq!(snapshot.monsters.len(), 1);
        assert_eq!(service.monsters().await.len(), 1);
    }

    #[tokio::test]
    async fn test_observer_failures_are_swallowed() {
        let service = EncounterService::load(
            Arc::new(MemoryStore::default()),
            Arc::new(FailingObserver),
            DEFAULT_ROSTER_KEY,
        )
        .await;
        let snapshot = service.add_monster(bandit()).await;
        assert_eq!(snapshot.monsters[0].quantity, 1);
    }

    #[tokio::test]
    async fn test_concurrent_adds_never_duplicate() {
        let service = Arc::new(
            service_with(Arc::new(MemoryStore::default()), Arc::new(RecordingObserver::default()))
                .await,
        );

        let tasks: Vec<_> = (0..20)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move { service.add_monster(bandit()).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        let monsters = service.monsters().await;
        assert_eq!(monsters.len(), 1);
        assert_eq!(monsters[0].quantity, 20);
    }
}
