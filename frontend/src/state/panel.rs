//! Modal/tab state machine for one entity details panel.
//!
//! All transitions go through [`PanelState::apply`], a command dispatch in the
//! shape of a reducer. The current `EntityRef` is owned here, the history
//! cache is the fetch guard, and inserting `Pending` and emitting the fetch
//! request happen in the same reduction, so two rapid tab activations can
//! never issue two requests.

use std::rc::Rc;

use shared::HistoryKind;
use yew::Reducible;

use super::history::{HistoryCache, HistoryCacheEntry, HistoryRecords};
use crate::services::logging::Logger;

const COMPONENT: &str = "entity-panel";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Vehicle,
    Driver,
}

impl EntityKind {
    /// URL path segment of the entity's resource.
    pub fn as_path(self) -> &'static str {
        match self {
            EntityKind::Vehicle => "vehicles",
            EntityKind::Driver => "drivers",
        }
    }

    /// History tabs this entity's panel offers. Anything else is a
    /// programmer error.
    pub fn history_kinds(self) -> &'static [HistoryKind] {
        match self {
            EntityKind::Vehicle => &[HistoryKind::Maintenance, HistoryKind::Route],
            EntityKind::Driver => &[HistoryKind::Route],
        }
    }
}

/// The record whose panel is open. Cleared when the panel closes; superseded
/// by the next activation (no stacking).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub id: i64,
}

/// Which overlay/tab of the panel is visible. Exactly one at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Details,
    HistoryList(HistoryKind),
    /// A single record from an already-fetched history list, addressed by its
    /// index into the immutable cache entry.
    HistoryItem(HistoryKind, usize),
}

/// A history fetch the hook layer must start. `seq` makes every emission
/// distinct, so re-requesting the same key after a panel reopen is observable
/// as a new value by `use_effect_with`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub entity: EntityRef,
    pub kind: HistoryKind,
    pub seq: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelCommand {
    OpenDetails(EntityRef),
    OpenHistoryTab(HistoryKind),
    OpenHistoryItem(HistoryKind, usize),
    Back,
    Close,
    HistoryLoaded {
        entity_id: i64,
        kind: HistoryKind,
        records: HistoryRecords,
    },
    HistoryFailed {
        entity_id: i64,
        kind: HistoryKind,
        message: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelState {
    pub entity: Option<EntityRef>,
    pub modal: ModalState,
    pub cache: HistoryCache,
    /// Set by the reduction that decided a fetch is needed; consumed (reset)
    /// by the next reduction.
    pub pending_fetch: Option<FetchRequest>,
    fetch_seq: u32,
}

impl PanelState {
    pub fn apply(&mut self, command: PanelCommand) {
        self.pending_fetch = None;

        match command {
            PanelCommand::OpenDetails(entity) => {
                self.entity = Some(entity);
                self.modal = ModalState::Details;
                // Cache entries live for one panel opening: reopening always
                // starts from placeholders.
                self.cache.clear();
            }
            PanelCommand::OpenHistoryTab(kind) => self.open_history_tab(kind),
            PanelCommand::OpenHistoryItem(kind, index) => self.open_history_item(kind, index),
            PanelCommand::Back => {
                self.modal = match self.modal {
                    ModalState::HistoryItem(kind, _) => ModalState::HistoryList(kind),
                    ModalState::HistoryList(_) => ModalState::Details,
                    ModalState::Details => {
                        self.entity = None;
                        ModalState::Closed
                    }
                    ModalState::Closed => ModalState::Closed,
                };
            }
            PanelCommand::Close => {
                self.modal = ModalState::Closed;
                self.entity = None;
            }
            PanelCommand::HistoryLoaded {
                entity_id,
                kind,
                records,
            } => {
                // Written even if the user has navigated away: the key still
                // identifies the tab the response belongs to.
                self.cache
                    .store_ready(entity_id, kind, HistoryCacheEntry::from_records(records));
            }
            PanelCommand::HistoryFailed {
                entity_id,
                kind,
                message,
            } => {
                // A failed attempt is cached too: no automatic retry until
                // the panel is reopened.
                self.cache.store_failed(entity_id, kind, message);
            }
        }
    }

    fn open_history_tab(&mut self, kind: HistoryKind) {
        if self.modal == ModalState::HistoryList(kind) {
            return;
        }
        let Some(entity) = self.entity else {
            Logger::error_with_component(COMPONENT, "aba de histórico sem painel aberto");
            return;
        };
        if !entity.kind.history_kinds().contains(&kind) {
            Logger::error_with_component(
                COMPONENT,
                &format!("histórico {:?} não suportado para {:?}", kind, entity.kind),
            );
            return;
        }
        match self.modal {
            ModalState::Details | ModalState::HistoryList(_) => {}
            _ => return,
        }

        self.modal = ModalState::HistoryList(kind);
        if !self.cache.is_requested(entity.id, kind) {
            self.cache.mark_pending(entity.id, kind);
            self.fetch_seq += 1;
            self.pending_fetch = Some(FetchRequest {
                entity,
                kind,
                seq: self.fetch_seq,
            });
        }
    }

    fn open_history_item(&mut self, kind: HistoryKind, index: usize) {
        if self.modal != ModalState::HistoryList(kind) {
            return;
        }
        let Some(entity) = self.entity else {
            return;
        };
        let known = self
            .cache
            .ready_entry(entity.id, kind)
            .is_some_and(|entry| index < entry.records.len());
        if known {
            self.modal = ModalState::HistoryItem(kind, index);
        } else {
            Logger::error_with_component(
                COMPONENT,
                &format!("registro {index} inexistente no histórico {kind:?}"),
            );
        }
    }

    /// Cache slot of the given kind for the currently open entity.
    pub fn slot_for(&self, kind: HistoryKind) -> Option<&super::history::CacheSlot> {
        let entity = self.entity?;
        self.cache.slot(entity.id, kind)
    }
}

impl Reducible for PanelState {
    type Action = PanelCommand;

    fn reduce(self: Rc<Self>, action: PanelCommand) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::MaintenanceRecord;

    fn vehicle(id: i64) -> EntityRef {
        EntityRef {
            kind: EntityKind::Vehicle,
            id,
        }
    }

    fn driver(id: i64) -> EntityRef {
        EntityRef {
            kind: EntityKind::Driver,
            id,
        }
    }

    fn loaded(entity_id: i64, kind: HistoryKind) -> PanelCommand {
        let records = match kind {
            HistoryKind::Maintenance => HistoryRecords::Maintenance(vec![MaintenanceRecord {
                service_type: "Revisão".into(),
                shop_name: "Oficina".into(),
                end_date: "01/07/2026".into(),
                cost: Some(100.0),
            }]),
            HistoryKind::Route => HistoryRecords::Route(vec![]),
        };
        PanelCommand::HistoryLoaded {
            entity_id,
            kind,
            records,
        }
    }

    #[test]
    fn open_details_does_not_fetch() {
        let mut state = PanelState::default();
        state.apply(PanelCommand::OpenDetails(vehicle(1)));
        assert_eq!(state.modal, ModalState::Details);
        assert_eq!(state.entity, Some(vehicle(1)));
        assert!(state.pending_fetch.is_none());
    }

    #[test]
    fn first_tab_activation_emits_exactly_one_fetch() {
        let mut state = PanelState::default();
        state.apply(PanelCommand::OpenDetails(vehicle(1)));

        state.apply(PanelCommand::OpenHistoryTab(HistoryKind::Route));
        let request = state.pending_fetch.clone().expect("fetch expected");
        assert_eq!(request.entity, vehicle(1));
        assert_eq!(request.kind, HistoryKind::Route);

        // Same tab again: idempotent, no new request.
        state.apply(PanelCommand::OpenHistoryTab(HistoryKind::Route));
        assert!(state.pending_fetch.is_none());
        assert_eq!(state.modal, ModalState::HistoryList(HistoryKind::Route));
    }

    #[test]
    fn toggling_away_and_back_while_pending_does_not_refetch() {
        let mut state = PanelState::default();
        state.apply(PanelCommand::OpenDetails(vehicle(1)));
        state.apply(PanelCommand::OpenHistoryTab(HistoryKind::Route));
        assert!(state.pending_fetch.is_some());

        state.apply(PanelCommand::OpenHistoryTab(HistoryKind::Maintenance));
        assert!(state.pending_fetch.is_some()); // maintenance is a new key

        state.apply(PanelCommand::OpenHistoryTab(HistoryKind::Route));
        assert!(state.pending_fetch.is_none()); // still pending: no duplicate
    }

    #[test]
    fn resolved_tab_is_a_pure_cache_hit() {
        let mut state = PanelState::default();
        state.apply(PanelCommand::OpenDetails(vehicle(1)));
        state.apply(PanelCommand::OpenHistoryTab(HistoryKind::Maintenance));
        state.apply(loaded(1, HistoryKind::Maintenance));

        state.apply(PanelCommand::OpenHistoryTab(HistoryKind::Route));
        state.apply(PanelCommand::OpenHistoryTab(HistoryKind::Maintenance));
        assert!(state.pending_fetch.is_none());
        assert!(state
            .cache
            .ready_entry(1, HistoryKind::Maintenance)
            .is_some());
    }

    #[test]
    fn failed_fetch_is_not_retried_until_reopen() {
        let mut state = PanelState::default();
        state.apply(PanelCommand::OpenDetails(vehicle(1)));
        state.apply(PanelCommand::OpenHistoryTab(HistoryKind::Route));
        state.apply(PanelCommand::HistoryFailed {
            entity_id: 1,
            kind: HistoryKind::Route,
            message: "Erro ao carregar o histórico. Tente novamente.".into(),
        });

        state.apply(PanelCommand::OpenHistoryTab(HistoryKind::Maintenance));
        state.apply(PanelCommand::OpenHistoryTab(HistoryKind::Route));
        assert!(state.pending_fetch.is_none());

        // Reopening the panel clears the cache and allows a fresh attempt.
        state.apply(PanelCommand::OpenDetails(vehicle(1)));
        state.apply(PanelCommand::OpenHistoryTab(HistoryKind::Route));
        assert!(state.pending_fetch.is_some());
    }

    #[test]
    fn reopen_emits_a_distinct_request_value() {
        let mut state = PanelState::default();
        state.apply(PanelCommand::OpenDetails(vehicle(1)));
        state.apply(PanelCommand::OpenHistoryTab(HistoryKind::Route));
        let first = state.pending_fetch.clone().unwrap();

        state.apply(PanelCommand::OpenDetails(vehicle(1)));
        state.apply(PanelCommand::OpenHistoryTab(HistoryKind::Route));
        let second = state.pending_fetch.clone().unwrap();

        assert_ne!(first, second);
        assert_eq!(first.kind, second.kind);
    }

    #[test]
    fn back_walks_item_list_details_closed() {
        let mut state = PanelState::default();
        state.apply(PanelCommand::OpenDetails(vehicle(1)));
        state.apply(PanelCommand::OpenHistoryTab(HistoryKind::Maintenance));
        state.apply(loaded(1, HistoryKind::Maintenance));
        state.apply(PanelCommand::OpenHistoryItem(HistoryKind::Maintenance, 0));
        assert_eq!(
            state.modal,
            ModalState::HistoryItem(HistoryKind::Maintenance, 0)
        );

        state.apply(PanelCommand::Back);
        assert_eq!(
            state.modal,
            ModalState::HistoryList(HistoryKind::Maintenance)
        );
        // Back never discards the cache entry.
        assert!(state
            .cache
            .ready_entry(1, HistoryKind::Maintenance)
            .is_some());

        state.apply(PanelCommand::Back);
        assert_eq!(state.modal, ModalState::Details);
        assert!(state.entity.is_some());

        state.apply(PanelCommand::Back);
        assert_eq!(state.modal, ModalState::Closed);
        assert!(state.entity.is_none());
    }

    #[test]
    fn item_requires_a_ready_record() {
        let mut state = PanelState::default();
        state.apply(PanelCommand::OpenDetails(vehicle(1)));
        state.apply(PanelCommand::OpenHistoryTab(HistoryKind::Maintenance));

        // Still pending: lookup is impossible, transition refused.
        state.apply(PanelCommand::OpenHistoryItem(HistoryKind::Maintenance, 0));
        assert_eq!(
            state.modal,
            ModalState::HistoryList(HistoryKind::Maintenance)
        );

        state.apply(loaded(1, HistoryKind::Maintenance));
        state.apply(PanelCommand::OpenHistoryItem(HistoryKind::Maintenance, 9));
        assert_eq!(
            state.modal,
            ModalState::HistoryList(HistoryKind::Maintenance)
        );
    }

    #[test]
    fn unsupported_kind_for_entity_is_refused() {
        let mut state = PanelState::default();
        state.apply(PanelCommand::OpenDetails(driver(7)));
        state.apply(PanelCommand::OpenHistoryTab(HistoryKind::Maintenance));
        assert_eq!(state.modal, ModalState::Details);
        assert!(state.pending_fetch.is_none());
    }

    #[test]
    fn opening_another_entity_resets_the_cache() {
        let mut state = PanelState::default();
        state.apply(PanelCommand::OpenDetails(vehicle(1)));
        state.apply(PanelCommand::OpenHistoryTab(HistoryKind::Route));
        state.apply(loaded(1, HistoryKind::Route));

        state.apply(PanelCommand::OpenDetails(vehicle(2)));
        assert!(!state.cache.is_requested(1, HistoryKind::Route));
        state.apply(PanelCommand::OpenHistoryTab(HistoryKind::Route));
        assert!(state.pending_fetch.is_some());
    }

    #[test]
    fn late_resolution_still_lands_in_the_keyed_slot() {
        let mut state = PanelState::default();
        state.apply(PanelCommand::OpenDetails(vehicle(1)));
        state.apply(PanelCommand::OpenHistoryTab(HistoryKind::Route));
        state.apply(PanelCommand::Close);

        state.apply(loaded(1, HistoryKind::Route));
        assert!(state.cache.ready_entry(1, HistoryKind::Route).is_some());
        assert_eq!(state.modal, ModalState::Closed);
    }

    #[test]
    fn tab_from_closed_panel_is_refused() {
        let mut state = PanelState::default();
        state.apply(PanelCommand::OpenHistoryTab(HistoryKind::Route));
        assert_eq!(state.modal, ModalState::Closed);
        assert!(state.pending_fetch.is_none());
    }
}
