use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::HistoryKind;

use crate::services::api::{ApiClient, HISTORY_ERROR};
use crate::services::logging::Logger;
use crate::state::panel::{EntityRef, FetchRequest, PanelCommand, PanelState};

/// Callbacks a details panel wires to its buttons and tab links.
#[derive(Clone, PartialEq)]
pub struct EntityPanelActions {
    pub open_details: Callback<EntityRef>,
    pub open_tab: Callback<HistoryKind>,
    pub open_item: Callback<(HistoryKind, usize)>,
    pub back: Callback<()>,
    pub close: Callback<()>,
}

pub struct UseEntityPanelResult {
    pub panel: UseReducerHandle<PanelState>,
    pub actions: EntityPanelActions,
}

/// Owns one entity panel: the modal/tab state machine plus the history
/// fetches it requests. Every interaction dispatches a [`PanelCommand`]; the
/// reducer decides whether a fetch is needed, and the effect below runs it.
/// In-flight requests are never cancelled; a late resolution is dispatched
/// like any other and lands in its keyed cache slot.
#[hook]
pub fn use_entity_panel(api: &ApiClient) -> UseEntityPanelResult {
    let panel = use_reducer(PanelState::default);

    {
        let panel = panel.clone();
        let api = api.clone();
        use_effect_with(
            panel.pending_fetch.clone(),
            move |request: &Option<FetchRequest>| {
                if let Some(request) = request.clone() {
                    let panel = panel.clone();
                    let api = api.clone();
                    Logger::debug_with_component(
                        "entity-panel",
                        &format!(
                            "buscando {:?} de {:?} {}",
                            request.kind, request.entity.kind, request.entity.id
                        ),
                    );
                    spawn_local(async move {
                        match api.fetch_history(request.entity, request.kind).await {
                            Ok(records) => {
                                Logger::debug_with_component(
                                    "entity-panel",
                                    &format!(
                                        "histórico {:?} carregado: {} registros",
                                        records.kind(),
                                        records.len()
                                    ),
                                );
                                panel.dispatch(PanelCommand::HistoryLoaded {
                                    entity_id: request.entity.id,
                                    kind: request.kind,
                                    records,
                                });
                            }
                            Err(error) => {
                                Logger::error_with_component(
                                    "entity-panel",
                                    &format!("erro ao buscar histórico: {error}"),
                                );
                                panel.dispatch(PanelCommand::HistoryFailed {
                                    entity_id: request.entity.id,
                                    kind: request.kind,
                                    message: HISTORY_ERROR.to_string(),
                                });
                            }
                        }
                    });
                }
                || ()
            },
        );
    }

    let open_details = {
        let panel = panel.clone();
        Callback::from(move |entity| panel.dispatch(PanelCommand::OpenDetails(entity)))
    };
    let open_tab = {
        let panel = panel.clone();
        Callback::from(move |kind| panel.dispatch(PanelCommand::OpenHistoryTab(kind)))
    };
    let open_item = {
        let panel = panel.clone();
        Callback::from(move |(kind, index)| {
            panel.dispatch(PanelCommand::OpenHistoryItem(kind, index));
        })
    };
    let back = {
        let panel = panel.clone();
        Callback::from(move |_| panel.dispatch(PanelCommand::Back))
    };
    let close = {
        let panel = panel.clone();
        Callback::from(move |_| panel.dispatch(PanelCommand::Close))
    };

    UseEntityPanelResult {
        panel,
        actions: EntityPanelActions {
            open_details,
            open_tab,
            open_item,
            back,
            close,
        },
    }
}
