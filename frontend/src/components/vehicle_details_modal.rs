use yew::prelude::*;

use shared::{HistoryKind, VehicleRow};

use crate::components::history_panel::HistoryPanel;
use crate::services::format::{format_date_br, format_km_per_liter};
use crate::state::panel::{EntityKind, ModalState, PanelState};

#[derive(Properties, PartialEq)]
pub struct VehicleDetailsModalProps {
    pub row: VehicleRow,
    pub panel: PanelState,
    pub on_tab: Callback<HistoryKind>,
    pub on_item: Callback<(HistoryKind, usize)>,
    pub on_back: Callback<()>,
    pub on_close: Callback<()>,
}

/// Details overlay for one vehicle: a details tab painted from the row data
/// and one lazily fetched tab per history kind.
#[function_component(VehicleDetailsModal)]
pub fn vehicle_details_modal(props: &VehicleDetailsModalProps) -> Html {
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
        <div id="vehicle-details-modal" class="modal-overlay active" onclick={on_backdrop_click}>
            <div class="modal-content" onclick={on_modal_click}>
                <button type="button" class="close-modal" onclick={on_close_click}>{"×"}</button>
                { tab_bar(props) }
                {body}
            </div>
        </div>
    }
}

fn tab_bar(props: &VehicleDetailsModalProps) -> Html {
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
            { for EntityKind::Vehicle.history_kinds().iter().map(|kind| {
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

fn details_body(row: &VehicleRow) -> Html {
    let consumption = match row.average_fuel_consumption {
        Some(value) if value > 0.0 => format_km_per_liter(value),
        _ => "Não informado".to_string(),
    };

    html! {
        <div class="modal-tab-panel" id="tab-panel-details">
            <h3 id="details-plate">{row.plate.clone()}</h3>
            <p id="details-model-year">{format!("{} ({})", row.model, row.year)}</p>
            <span
                id="details-status-tag"
                class={format!("status-tag status-{}", row.status)}
            >
                {row.status_display.clone()}
            </span>
            <dl class="details-list">
                <dt>{"Modelo"}</dt>
                <dd id="details-model">{row.model.clone()}</dd>
                <dt>{"Ano"}</dt>
                <dd id="details-year">{row.year}</dd>
                <dt>{"Quilometragem"}</dt>
                <dd id="details-mileage">{format!("{} km", row.mileage)}</dd>
                <dt>{"Data de Aquisição"}</dt>
                <dd id="details-acquisition-date">{format_date_br(&row.acquisition_date)}</dd>
                <dt>{"Motorista"}</dt>
                <dd id="details-driver-name">
                    {row.driver_name.clone().unwrap_or_else(|| "Não informado".to_string())}
                </dd>
                <dt>{"Consumo Médio"}</dt>
                <dd id="details-avg-consumption">{consumption}</dd>
            </dl>
        </div>
    }
}

fn history_body(props: &VehicleDetailsModalProps, kind: HistoryKind, selected: Option<usize>) -> Html {
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
