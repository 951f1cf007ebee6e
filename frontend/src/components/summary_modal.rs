use yew::prelude::*;

use shared::RouteSummary;

use crate::services::format::{format_brl, format_km, to_hundredths};

#[derive(Properties, PartialEq)]
pub struct SummaryModalProps {
    pub summary: Option<RouteSummary>,
    pub on_close: Callback<()>,
}

/// Confirmation overlay after a successful route submission, with the
/// computed figures formatted for the pt-BR locale.
#[function_component(SummaryModal)]
pub fn summary_modal(props: &SummaryModalProps) -> Html {
    let Some(summary) = &props.summary else {
        return html! {};
    };

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

    html! {
        <div id="route-summary-modal" class="modal-overlay active" onclick={on_backdrop_click}>
            <div class="modal-content" onclick={on_modal_click}>
                <h3 id="summary-route-title">
                    {format!("{} → {}", summary.start_location, summary.end_location)}
                </h3>
                <dl class="summary-list">
                    <dt>{"Distância"}</dt>
                    <dd id="summary-distance">{format_km(to_hundredths(summary.distance))}</dd>
                    <dt>{"Pedágio (Est.)"}</dt>
                    <dd id="summary-toll-cost">{format_brl(to_hundredths(summary.toll_cost))}</dd>
                    <dt>{"Combustível (Est.)"}</dt>
                    <dd id="summary-fuel-cost">{format_brl(to_hundredths(summary.fuel_cost))}</dd>
                </dl>
                <button type="button" class="btn btn-primary close-modal" onclick={on_close_click}>
                    {"Fechar"}
                </button>
            </div>
        </div>
    }
}
