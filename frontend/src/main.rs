use anyhow::Context;
use yew::prelude::*;

use shared::BootstrapData;

mod components;
mod hooks;
mod services;
mod state;

use crate::components::driver_details_modal::DriverDetailsModal;
use crate::components::driver_table::DriverTable;
use crate::components::route_cards::RouteCards;
use crate::components::route_form_modal::RouteFormModal;
use crate::components::summary_modal::SummaryModal;
use crate::components::vehicle_details_modal::VehicleDetailsModal;
use crate::components::vehicle_table::VehicleTable;
use crate::hooks::{use_entity_panel, use_record_form};
use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::state::panel::{EntityKind, EntityRef};

/// Element the host page embeds the initial JSON payload in.
const BOOTSTRAP_ELEMENT_ID: &str = "fleettrack-initial-data";

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub bootstrap: BootstrapData,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let api = ApiClient::new();

    // One independent panel controller per entity type: vehicle and driver
    // panels never share modal state or cache entries.
    let vehicle_panel = use_entity_panel(&api);
    let driver_panel = use_entity_panel(&api);
    let route_form = use_record_form(&api, &props.bootstrap.csrf_token);

    let on_vehicle_view = {
        let open_details = vehicle_panel.actions.open_details.clone();
        Callback::from(move |id: i64| {
            open_details.emit(EntityRef {
                kind: EntityKind::Vehicle,
                id,
            });
        })
    };
    let on_driver_view = {
        let open_details = driver_panel.actions.open_details.clone();
        Callback::from(move |id: i64| {
            open_details.emit(EntityRef {
                kind: EntityKind::Driver,
                id,
            });
        })
    };

    let open_vehicle_row = vehicle_panel.panel.entity.and_then(|entity| {
        props
            .bootstrap
            .vehicles
            .iter()
            .find(|row| row.id == entity.id)
            .cloned()
    });
    let open_driver_row = driver_panel.panel.entity.and_then(|entity| {
        props
            .bootstrap
            .drivers
            .iter()
            .find(|row| row.id == entity.id)
            .cloned()
    });

    let on_open_add_route = {
        let open_add = route_form.actions.open_add.clone();
        Callback::from(move |_: MouseEvent| open_add.emit(()))
    };

    html! {
        <div class="dashboard">
            <section class="panel-section">
                <h2>{"Veículos"}</h2>
                <VehicleTable
                    rows={props.bootstrap.vehicles.clone()}
                    on_view={on_vehicle_view}
                />
                if let Some(row) = open_vehicle_row {
                    <VehicleDetailsModal
                        {row}
                        panel={(*vehicle_panel.panel).clone()}
                        on_tab={vehicle_panel.actions.open_tab.clone()}
                        on_item={vehicle_panel.actions.open_item.clone()}
                        on_back={vehicle_panel.actions.back.clone()}
                        on_close={vehicle_panel.actions.close.clone()}
                    />
                }
            </section>

            <section class="panel-section">
                <h2>{"Motoristas"}</h2>
                <DriverTable
                    rows={props.bootstrap.drivers.clone()}
                    on_view={on_driver_view}
                />
                if let Some(row) = open_driver_row {
                    <DriverDetailsModal
                        {row}
                        panel={(*driver_panel.panel).clone()}
                        on_tab={driver_panel.actions.open_tab.clone()}
                        on_item={driver_panel.actions.open_item.clone()}
                        on_back={driver_panel.actions.back.clone()}
                        on_close={driver_panel.actions.close.clone()}
                    />
                }
            </section>

            <section class="panel-section">
                <h2>{"Rotas"}</h2>
                <button
                    id="open-add-route-modal"
                    type="button"
                    class="btn btn-primary"
                    onclick={on_open_add_route}
                >
                    {"Adicionar Rota"}
                </button>
                <RouteCards
                    rows={props.bootstrap.routes.clone()}
                    on_edit={route_form.actions.open_edit.clone()}
                />
                <RouteFormModal
                    state={route_form.state.clone()}
                    vehicles={props.bootstrap.vehicles.clone()}
                    drivers={props.bootstrap.drivers.clone()}
                    on_field_change={route_form.actions.edit_field.clone()}
                    on_submit={route_form.actions.submit.clone()}
                    on_close={route_form.actions.close.clone()}
                />
                <SummaryModal
                    summary={route_form.state.summary.clone()}
                    on_close={route_form.actions.dismiss_summary.clone()}
                />
            </section>
        </div>
    }
}

/// Parse the JSON payload the host page embeds. The template layer is
/// responsible for producing it; a missing or malformed payload is a
/// programmer error and is reported loudly instead of being swallowed.
fn read_bootstrap() -> anyhow::Result<BootstrapData> {
    let window = web_sys::window().context("window indisponível")?;
    let document = window.document().context("document indisponível")?;
    let element = document
        .get_element_by_id(BOOTSTRAP_ELEMENT_ID)
        .with_context(|| format!("elemento #{BOOTSTRAP_ELEMENT_ID} não encontrado"))?;
    let payload = element.text_content().unwrap_or_default();
    let data = serde_json::from_str(&payload)
        .with_context(|| format!("JSON inválido em #{BOOTSTRAP_ELEMENT_ID}"))?;
    Ok(data)
}

fn main() {
    match read_bootstrap() {
        Ok(bootstrap) => {
            Logger::info_with_component(
                "bootstrap",
                &format!(
                    "{} veículos, {} motoristas, {} rotas",
                    bootstrap.vehicles.len(),
                    bootstrap.drivers.len(),
                    bootstrap.routes.len()
                ),
            );
            yew::Renderer::<App>::with_props(AppProps { bootstrap }).render();
        }
        Err(error) => {
            // The server-rendered page stays visible; only the dynamic layer
            // is missing.
            Logger::error_with_component("bootstrap", &format!("{error:#}"));
        }
    }
}
