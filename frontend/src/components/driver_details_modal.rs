use yew::prelude::*;

use shared::{DriverRow, HistoryKind};

use crate::components::history_panel::HistoryPanel;
use crate::services::format::{format_cnh, format_date_br};
use crate::state::panel::{EntityKind, ModalState, PanelState};

#[derive(Properties, PartialEq)]
pub struct DriverDetailsModalProps {
    pub row: DriverRow,
    pub panel: PanelState,
    pub on_tab: Callback<HistoryKind>,
    pub on_item: Callback<(HistoryKind, usize)>,
    pub on_back: Callback<()>,
    pub on_close: Callback<()>,
}

/// Details overlay for one driver. Only the route history tab exists here;
/// the state machine refuses anything else.
#[function_component(DriverDetailsModal)]
pub fn driver_details_modal(props: &DriverDetailsModalProps) -> Html {
    if props.panel.modal == ModalState::Closed {
        return html! {};
    }

    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_close.emit(());
        })
    };
    let on_modal_click = Callback::from(|event: MouseEvent| event.stop_propagation());
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let body = match props.panel.modal {
        ModalState::HistoryList(kind) => history_body(props, kind, None),
        ModalState::HistoryItem(kind, index) => history_body(props, kind, Some(index)),
        _ => details_body(&props.row),
    };

    html! {
        <div id="driver-details-modal" class="modal-overlay active" onclick={on_backdrop_click}>
            <div class="modal-content" onclick={on_modal_click}>
                <button type="button" class="close-modal" onclick={on_close_click}>{"×"}</button>
                { tab_bar(props) }
                {body}
            </div>
        </div>
    }
}

fn tab_bar(props: &DriverDetailsModalProps) -> Html {
    let details_active = props.panel.modal == ModalState::Details;
    let on_details = {
        let on_back = props.on_back.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_back.emit(());
        })
    };

    html! {
        <div class="modal-tabs">
            <a href="#" class={tab_class(details_active)} onclick={on_details}>{"Detalhes"}</a>
            { for EntityKind::Driver.history_kinds().iter().map(|kind| {
                let kind = *kind;
                let active = matches!(
                    props.panel.modal,
                    ModalState::HistoryList(k) | ModalState::HistoryItem(k, _) if k == kind
                );
                let on_tab = props.on_tab.clone();
                let onclick = Callback::from(move |event: MouseEvent| {
                    event.prevent_default();
                    on_tab.emit(kind);
                });
                html! {
                    <a href="#" class={tab_class(active)} {onclick}>{kind.tab_label()}</a>
                }
            }) }
        </div>
    }
}

fn tab_class(active: bool) -> &'static str {
    if active {
        "modal-tab-link active"
    } else {
        "modal-tab-link"
    }
}

fn details_body(row: &DriverRow) -> Html {
    let status = if row.is_active {
        html! { <span id="details-status-tag" class="status-tag-driver status-active">{"✓ Ativo"}</span> }
    } else {
        html! { <span id="details-status-tag" class="status-tag-driver status-suspended">{"✗ Suspenso"}</span> }
    };

    html! {
        <div class="modal-tab-panel" id="tab-panel-details">
            <h3 id="details-driver-name">{row.full_name.clone()}</h3>
            <p id="details-driver-id">{format!("ID: D{:04}", row.id)}</p>
            {status}
            <dl class="details-list">
                <dt>{"Nome Completo"}</dt>
                <dd id="details-full-name">{row.full_name.clone()}</dd>
                <dt>{"E-mail"}</dt>
                <dd id="details-email">{row.email.clone()}</dd>
                <dt>{"CNH"}</dt>
                <dd id="details-license-number">{format_cnh(&row.license_number)}</dd>
                <dt>{"Data de Admissão"}</dt>
                <dd id="details-admission-date">{format_date_br(&row.admission_date)}</dd>
                if !row.is_active {
                    if let Some(demission_date) = row.demission_date.clone() {
                        <>
                            <dt>{"Data de Desligamento"}</dt>
                            <dd id="details-demission-date">{format_date_br(&demission_date)}</dd>
                        </>
                    }
                }
            </dl>
        </div>
    }
}

fn history_body(props: &DriverDetailsModalProps, kind: HistoryKind, selected: Option<usize>) -> Html {
    let slot = props.panel.slot_for(kind).cloned();
    let on_open_item = {
        let on_item = props.on_item.clone();
        Callback::from(move |index: usize| on_item.emit((kind, index)))
    };

    html! {
        <div class="modal-tab-panel">
            <HistoryPanel
                {kind}
                {slot}
                {selected}
                on_open_item={on_open_item}
                on_back={props.on_back.clone()}
            />
        </div>
    }
}
