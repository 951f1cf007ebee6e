use yew::prelude::*;

use shared::{HistoryKind, MaintenanceRecord, RouteRecord};

use crate::services::format::{format_brl, format_km, to_hundredths};
use crate::state::history::{CacheSlot, HistoryCacheEntry, HistoryRecords};

#[derive(Properties, PartialEq)]
pub struct HistoryPanelProps {
    pub kind: HistoryKind,
    /// Cache slot for the open entity; `None` means not requested yet, which
    /// renders the same loading placeholder as `Pending`.
    pub slot: Option<CacheSlot>,
    /// Selected record index while the item sub-panel is open.
    #[prop_or_default]
    pub selected: Option<usize>,
    pub on_open_item: Callback<usize>,
    pub on_back: Callback<()>,
}

/// Paints one history tab from its cache slot: loading placeholder, error
/// text, or aggregated totals plus the record table. Clicking a row opens the
/// record's detail sub-panel, a pure cache lookup, never a request.
#[function_component(HistoryPanel)]
pub fn history_panel(props: &HistoryPanelProps) -> Html {
    match &props.slot {
        None | Some(CacheSlot::Pending) => html! {
            <p class="history-loading">{"Carregando histórico..."}</p>
        },
        Some(CacheSlot::Failed(message)) => html! {
            <p class="history-error">{message.clone()}</p>
        },
        Some(CacheSlot::Ready(entry)) => match props.selected {
            Some(index) => item_panel(entry, index, &props.on_back),
            None => list_panel(props.kind, entry, &props.on_open_item),
        },
    }
}

fn list_panel(kind: HistoryKind, entry: &HistoryCacheEntry, on_open_item: &Callback<usize>) -> Html {
    let summary = html! {
        <p class="history-summary">
            { for entry.stats.summary_lines().into_iter().map(|line| html! { <>{line}<br/></> }) }
        </p>
    };

    let body = if entry.records.is_empty() {
        let text = match kind {
            HistoryKind::Maintenance => "Nenhum registro de manutenção concluída encontrado.",
            HistoryKind::Route => "Nenhum registro de rota concluída encontrado.",
        };
        html! { <p>{text}</p> }
    } else {
        match &entry.records {
            HistoryRecords::Maintenance(records) => maintenance_table(records, on_open_item),
            HistoryRecords::Route(records) => route_table(records, on_open_item),
        }
    };

    html! {
        <>
            <h4>{kind.label()}</h4>
            {summary}
            {body}
        </>
    }
}

fn maintenance_table(records: &[MaintenanceRecord], on_open_item: &Callback<usize>) -> Html {
    html! {
        <table class="history-table">
            <thead>
                <tr>
                    <th>{"Serviço"}</th>
                    <th>{"Mecânica"}</th>
                    <th>{"Data Conclusão"}</th>
                    <th>{"Custo"}</th>
                </tr>
            </thead>
            <tbody>
                { for records.iter().enumerate().map(|(index, record)| {
                    let onclick = row_click(on_open_item, index);
                    html! {
                        <tr class="history-row" key={index.to_string()} {onclick}>
                            <td>{record.service_type.clone()}</td>
                            <td>{record.shop_name.clone()}</td>
                            <td>{record.end_date.clone()}</td>
                            <td>{format_brl(to_hundredths(record.cost.unwrap_or(0.0)))}</td>
                        </tr>
                    }
                }) }
            </tbody>
        </table>
    }
}

fn route_table(records: &[RouteRecord], on_open_item: &Callback<usize>) -> Html {
    // The plate column only exists on driver history responses.
    let with_plate = records.iter().any(|record| record.vehicle_plate.is_some());

    html! {
        <div class="table-wrapper">
            <table class="history-table">
                <thead>
                    <tr>
                        <th>{"Rota"}</th>
                        if with_plate {
                            <th>{"Veículo"}</th>
                        }
                        <th>{"Data Conclusão"}</th>
                        <th>{"Distância"}</th>
                        <th>{"Combustível (Est.)"}</th>
                        <th>{"Pedágio (Est.)"}</th>
                    </tr>
                </thead>
                <tbody>
                    { for records.iter().enumerate().map(|(index, record)| {
                        let onclick = row_click(on_open_item, index);
                        html! {
                            <tr class="history-row" key={index.to_string()} {onclick}>
                                <td>{format!("{} → {}", record.start_location, record.end_location)}</td>
                                if with_plate {
                                    <td>{record.vehicle_plate.clone().unwrap_or_else(|| "N/A".to_string())}</td>
                                }
                                <td>{record.end_time.clone()}</td>
                                <td>{format_km(to_hundredths(record.distance.unwrap_or(0.0)))}</td>
                                <td>{format_brl(to_hundredths(record.fuel_cost.unwrap_or(0.0)))}</td>
                                <td>{format_brl(to_hundredths(record.toll_cost.unwrap_or(0.0)))}</td>
                            </tr>
                        }
                    }) }
                </tbody>
            </table>
        </div>
    }
}

fn item_panel(entry: &HistoryCacheEntry, index: usize, on_back: &Callback<()>) -> Html {
    let back = {
        let on_back = on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    let detail = match &entry.records {
        HistoryRecords::Maintenance(records) => records.get(index).map(maintenance_item),
        HistoryRecords::Route(records) => records.get(index).map(route_item),
    };

    // The state machine refuses out-of-range indices, so this is only hit on
    // a stale render between dispatches.
    let Some(detail) = detail else {
        return html! {};
    };

    html! {
        <div class="history-item-panel">
            <button type="button" class="back-link" onclick={back}>{"← Voltar"}</button>
            {detail}
        </div>
    }
}

fn maintenance_item(record: &MaintenanceRecord) -> Html {
    html! {
        <dl class="history-item-detail">
            <dt>{"Serviço"}</dt>
            <dd>{record.service_type.clone()}</dd>
            <dt>{"Mecânica"}</dt>
            <dd>{record.shop_name.clone()}</dd>
            <dt>{"Data Conclusão"}</dt>
            <dd>{record.end_date.clone()}</dd>
            <dt>{"Custo"}</dt>
            <dd>{format_brl(to_hundredths(record.cost.unwrap_or(0.0)))}</dd>
        </dl>
    }
}

fn route_item(record: &RouteRecord) -> Html {
    html! {
        <dl class="history-item-detail">
            <dt>{"Rota"}</dt>
            <dd>{format!("{} → {}", record.start_location, record.end_location)}</dd>
            <dt>{"Data Conclusão"}</dt>
            <dd>{record.end_time.clone()}</dd>
            <dt>{"Distância"}</dt>
            <dd>{format_km(to_hundredths(record.distance.unwrap_or(0.0)))}</dd>
            <dt>{"Combustível (Est.)"}</dt>
            <dd>{format_brl(to_hundredths(record.fuel_cost.unwrap_or(0.0)))}</dd>
            <dt>{"Pedágio (Est.)"}</dt>
            <dd>{format_brl(to_hundredths(record.toll_cost.unwrap_or(0.0)))}</dd>
            if let Some(plate) = record.vehicle_plate.clone() {
                <>
                    <dt>{"Veículo"}</dt>
                    <dd>{plate}</dd>
                </>
            }
        </dl>
    }
}

fn row_click(on_open_item: &Callback<usize>, index: usize) -> Callback<MouseEvent> {
    let on_open_item = on_open_item.clone();
    Callback::from(move |_: MouseEvent| on_open_item.emit(index))
}
