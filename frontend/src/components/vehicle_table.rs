use yew::prelude::*;

use shared::VehicleRow;

#[derive(Properties, PartialEq)]
pub struct VehicleTableProps {
    pub rows: Vec<VehicleRow>,
    pub on_view: Callback<i64>,
}

/// Vehicle listing. The view action activates the details panel for the row;
/// everything the panel's details tab shows comes from this row data.
#[function_component(VehicleTable)]
pub fn vehicle_table(props: &VehicleTableProps) -> Html {
    html! {
        <table class="vehicle-table">
            <thead>
                <tr>
                    <th>{"Placa"}</th>
                    <th>{"Modelo"}</th>
                    <th>{"Ano"}</th>
                    <th>{"Status"}</th>
                    <th>{"Ações"}</th>
                </tr>
            </thead>
            <tbody>
                { for props.rows.iter().map(|row| {
                    let on_view = props.on_view.clone();
                    let id = row.id;
                    let onclick = Callback::from(move |event: MouseEvent| {
                        event.prevent_default();
                        on_view.emit(id);
                    });
                    html! {
                        <tr key={row.id.to_string()}>
                            <td>{row.plate.clone()}</td>
                            <td>{row.model.clone()}</td>
                            <td>{row.year}</td>
                            <td>
                                <span class={format!("status-tag status-{}", row.status)}>
                                    {row.status_display.clone()}
                                </span>
                            </td>
                            <td>
                                <a href="#" class="action-link action-view" {onclick}>{"Ver"}</a>
                            </td>
                        </tr>
                    }
                }) }
            </tbody>
        </table>
    }
}
