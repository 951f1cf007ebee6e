use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use shared::{DriverRow, VehicleRow};

use crate::hooks::RecordFormState;
use crate::state::form::RouteField;

#[derive(Properties, PartialEq)]
pub struct RouteFormModalProps {
    pub state: RecordFormState,
    pub vehicles: Vec<VehicleRow>,
    pub drivers: Vec<DriverRow>,
    pub on_field_change: Callback<(RouteField, String)>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

/// The route record form. Validation messages come only from the server and
/// render as one ordered list, without field names; the error region is
/// hidden whenever the current error set is empty.
#[function_component(RouteFormModal)]
pub fn route_form_modal(props: &RouteFormModalProps) -> Html {
    if !props.state.is_open {
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
    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            on_submit.emit(());
        })
    };

    let submitting = props.state.phase.is_submitting();
    let fields = &props.state.fields;

    html! {
        <div id="route-modal" class="modal-overlay active" onclick={on_backdrop_click}>
            <div class="modal-content" onclick={on_modal_click}>
                <h3 id="route-modal-title">{props.state.action.modal_title()}</h3>

                if !props.state.errors.is_empty() {
                    <div id="form-modal-errors" class="form-errors">
                        <ul>
                            { for props.state.errors.messages().map(|message| html! {
                                <li>{message.to_string()}</li>
                            }) }
                        </ul>
                    </div>
                }

                <form id="route-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="id_start_location">{"Local de Partida"}</label>
                        <input
                            id="id_start_location"
                            type="text"
                            placeholder="Cidade, UF"
                            value={fields.start_location.clone()}
                            onchange={text_change(&props.on_field_change, RouteField::StartLocation)}
                            disabled={submitting}
                        />
                    </div>
                    <div class="form-group">
                        <label for="id_end_location">{"Local de Destino"}</label>
                        <input
                            id="id_end_location"
                            type="text"
                            placeholder="Cidade, UF"
                            value={fields.end_location.clone()}
                            onchange={text_change(&props.on_field_change, RouteField::EndLocation)}
                            disabled={submitting}
                        />
                    </div>
                    <div class="form-group">
                        <label for="id_vehicle">{"Veículo"}</label>
                        <select
                            id="id_vehicle"
                            onchange={select_change(&props.on_field_change, RouteField::Vehicle)}
                            disabled={submitting}
                        >
                            <option value="" selected={fields.vehicle.is_empty()}>
                                {"-- selecione --"}
                            </option>
                            { for props.vehicles.iter().map(|vehicle| {
                                let value = vehicle.id.to_string();
                                html! {
                                    <option value={value.clone()} selected={value == fields.vehicle}>
                                        {format!("{} ({})", vehicle.plate, vehicle.model)}
                                    </option>
                                }
                            }) }
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="id_driver">{"Motorista"}</label>
                        <select
                            id="id_driver"
                            onchange={select_change(&props.on_field_change, RouteField::Driver)}
                            disabled={submitting}
                        >
                            <option value="" selected={fields.driver.is_empty()}>
                                {"-- selecione --"}
                            </option>
                            { for props.drivers.iter().map(|driver| {
                                let value = driver.id.to_string();
                                html! {
                                    <option value={value.clone()} selected={value == fields.driver}>
                                        {driver.full_name.clone()}
                                    </option>
                                }
                            }) }
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="id_start_time">{"Início"}</label>
                        <input
                            id="id_start_time"
                            type="text"
                            class="datetimepicker"
                            placeholder="dd/mm/aaaa hh:mm"
                            value={fields.start_time.clone()}
                            onchange={text_change(&props.on_field_change, RouteField::StartTime)}
                            disabled={submitting}
                        />
                    </div>
                    <div class="form-group">
                        <label for="id_end_time">{"Término"}</label>
                        <input
                            id="id_end_time"
                            type="text"
                            class="datetimepicker"
                            placeholder="dd/mm/aaaa hh:mm"
                            value={fields.end_time.clone()}
                            onchange={text_change(&props.on_field_change, RouteField::EndTime)}
                            disabled={submitting}
                        />
                    </div>

                    <div class="form-buttons">
                        <button
                            id="save-route-button"
                            type="submit"
                            class="btn btn-primary"
                            disabled={submitting}
                        >
                            {props.state.phase.submit_label()}
                        </button>
                        <button
                            type="button"
                            class="btn btn-secondary close-modal"
                            onclick={on_cancel}
                            disabled={submitting}
                        >
                            {"Cancelar"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn text_change(
    on_field_change: &Callback<(RouteField, String)>,
    field: RouteField,
) -> Callback<Event> {
    let on_field_change = on_field_change.clone();
    Callback::from(move |event: Event| {
        let input: HtmlInputElement = event.target_unchecked_into();
        on_field_change.emit((field, input.value()));
    })
}

fn select_change(
    on_field_change: &Callback<(RouteField, String)>,
    field: RouteField,
) -> Callback<Event> {
    let on_field_change = on_field_change.clone();
    Callback::from(move |event: Event| {
        let select: HtmlSelectElement = event.target_unchecked_into();
        on_field_change.emit((field, select.value()));
    })
}
