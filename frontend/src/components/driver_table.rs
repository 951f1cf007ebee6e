use yew::prelude::*;

use shared::DriverRow;

use crate::services::format::format_cnh;

#[derive(Properties, PartialEq)]
pub struct DriverTableProps {
    pub rows: Vec<DriverRow>,
    pub on_view: Callback<i64>,
}

#[function_component(DriverTable)]
pub fn driver_table(props: &DriverTableProps) -> Html {
    html! {
        <table class="driver-table">
            <thead>
                <tr>
                    <th>{"Nome"}</th>
                    <th>{"E-mail"}</th>
                    <th>{"CNH"}</th>
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
                    let status = if row.is_active { "Ativo" } else { "Suspenso" };
                    html! {
                        <tr key={row.id.to_string()}>
                            <td>{row.full_name.clone()}</td>
                            <td>{row.email.clone()}</td>
                            <td><span class="license-tag">{format_cnh(&row.license_number)}</span></td>
                            <td>{status}</td>
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
