use yew::prelude::*;

use shared::RouteRow;

#[derive(Properties, PartialEq)]
pub struct RouteCardsProps {
    pub rows: Vec<RouteRow>,
    pub on_edit: Callback<RouteRow>,
}

/// Route cards grid. Editing pre-fills the route form from the card's data
/// and re-targets it at the update URL.
#[function_component(RouteCards)]
pub fn route_cards(props: &RouteCardsProps) -> Html {
    html! {
        <div class="route-cards-grid">
            { for props.rows.iter().map(|row| {
                let on_edit = props.on_edit.clone();
                let seed = row.clone();
                let onclick = Callback::from(move |_: MouseEvent| on_edit.emit(seed.clone()));
                html! {
                    <div class="route-card" key={row.id.to_string()}>
                        <h4>{format!("{} → {}", row.start_location, row.end_location)}</h4>
                        <span class="route-status">{row.status_display.clone()}</span>
                        <p class="route-times">
                            {format!("{} — {}", row.start_time, row.end_time)}
                        </p>
                        <button type="button" class="action-edit" {onclick}>{"Editar"}</button>
                    </div>
                }
            }) }
        </div>
    }
}
