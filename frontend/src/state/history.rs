//! Explicit per-(entity, kind) history cache.
//!
//! An absent key means not requested; a present slot is `Pending`, `Ready`
//! or `Failed`. Entries are immutable once `Ready` and live for the current
//! details panel only (the cache is cleared when a panel opens).

use std::collections::HashMap;

use shared::{HistoryKind, MaintenanceRecord, RouteRecord};

use crate::services::aggregate::{self, HistoryStats};

/// The record list of one cache entry, tagged by history kind.
#[derive(Debug, Clone, PartialEq)]
pub enum HistoryRecords {
    Maintenance(Vec<MaintenanceRecord>),
    Route(Vec<RouteRecord>),
}

impl HistoryRecords {
    pub fn kind(&self) -> HistoryKind {
        match self {
            HistoryRecords::Maintenance(_) => HistoryKind::Maintenance,
            HistoryRecords::Route(_) => HistoryKind::Route,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            HistoryRecords::Maintenance(list) => list.len(),
            HistoryRecords::Route(list) => list.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One fetched-and-aggregated history tab.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryCacheEntry {
    pub stats: HistoryStats,
    pub records: HistoryRecords,
}

impl HistoryCacheEntry {
    pub fn from_records(records: HistoryRecords) -> Self {
        let stats = match &records {
            HistoryRecords::Maintenance(list) => aggregate::aggregate_maintenance(list),
            HistoryRecords::Route(list) => aggregate::aggregate_routes(list),
        };
        Self { stats, records }
    }
}

/// State of one (entity, kind) key. `NotRequested` is the absence of a slot.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheSlot {
    Pending,
    Ready(HistoryCacheEntry),
    Failed(String),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryCache {
    slots: HashMap<(i64, HistoryKind), CacheSlot>,
}

impl HistoryCache {
    pub fn slot(&self, entity_id: i64, kind: HistoryKind) -> Option<&CacheSlot> {
        self.slots.get(&(entity_id, kind))
    }

    /// True once any attempt (in flight, succeeded or failed) exists for the
    /// key. This is the fetch-once guard: a requested key is never fetched
    /// again for the lifetime of the open panel.
    pub fn is_requested(&self, entity_id: i64, kind: HistoryKind) -> bool {
        self.slots.contains_key(&(entity_id, kind))
    }

    pub fn mark_pending(&mut self, entity_id: i64, kind: HistoryKind) {
        self.slots.insert((entity_id, kind), CacheSlot::Pending);
    }

    pub fn store_ready(&mut self, entity_id: i64, kind: HistoryKind, entry: HistoryCacheEntry) {
        self.slots.insert((entity_id, kind), CacheSlot::Ready(entry));
    }

    pub fn store_failed(&mut self, entity_id: i64, kind: HistoryKind, message: String) {
        self.slots.insert((entity_id, kind), CacheSlot::Failed(message));
    }

    pub fn ready_entry(&self, entity_id: i64, kind: HistoryKind) -> Option<&HistoryCacheEntry> {
        match self.slot(entity_id, kind) {
            Some(CacheSlot::Ready(entry)) => Some(entry),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> HistoryRecords {
        HistoryRecords::Maintenance(vec![MaintenanceRecord {
            service_type: "Troca de óleo".into(),
            shop_name: "Oficina A".into(),
            end_date: "01/07/2026".into(),
            cost: Some(350.0),
        }])
    }

    #[test]
    fn absent_key_is_not_requested() {
        let cache = HistoryCache::default();
        assert!(!cache.is_requested(1, HistoryKind::Maintenance));
        assert!(cache.slot(1, HistoryKind::Maintenance).is_none());
    }

    #[test]
    fn pending_failed_and_ready_all_count_as_requested() {
        let mut cache = HistoryCache::default();

        cache.mark_pending(1, HistoryKind::Maintenance);
        assert!(cache.is_requested(1, HistoryKind::Maintenance));
        assert!(cache.ready_entry(1, HistoryKind::Maintenance).is_none());

        cache.store_failed(1, HistoryKind::Maintenance, "Erro".into());
        assert!(cache.is_requested(1, HistoryKind::Maintenance));

        cache.store_ready(
            1,
            HistoryKind::Maintenance,
            HistoryCacheEntry::from_records(sample_records()),
        );
        assert!(cache.ready_entry(1, HistoryKind::Maintenance).is_some());
    }

    #[test]
    fn keys_are_scoped_per_entity_and_kind() {
        let mut cache = HistoryCache::default();
        cache.mark_pending(1, HistoryKind::Route);
        assert!(!cache.is_requested(2, HistoryKind::Route));
        assert!(!cache.is_requested(1, HistoryKind::Maintenance));
    }

    #[test]
    fn entry_aggregates_on_store() {
        let entry = HistoryCacheEntry::from_records(sample_records());
        assert_eq!(entry.stats.total_count(), 1);
        assert_eq!(entry.records.kind(), HistoryKind::Maintenance);
    }
}
