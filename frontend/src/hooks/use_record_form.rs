use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use shared::{RouteRow, RouteSummary, ValidationErrorSet};

use crate::services::api::{ApiClient, SubmissionOutcome};
use crate::services::logging::Logger;
use crate::state::form::{FormAction, RouteField, RouteFormFields, SubmitPhase};

/// Snapshot of the route form the modal renders from.
#[derive(Clone, PartialEq)]
pub struct RecordFormState {
    pub is_open: bool,
    pub action: FormAction,
    pub fields: RouteFormFields,
    pub phase: SubmitPhase,
    pub errors: ValidationErrorSet,
    pub summary: Option<RouteSummary>,
}

#[derive(Clone, PartialEq)]
pub struct RecordFormActions {
    pub open_add: Callback<()>,
    pub open_edit: Callback<RouteRow>,
    pub close: Callback<()>,
    pub dismiss_summary: Callback<()>,
    pub edit_field: Callback<(RouteField, String)>,
    pub submit: Callback<()>,
}

pub struct UseRecordFormResult {
    pub state: RecordFormState,
    pub actions: RecordFormActions,
}

/// Form submission controller for the route record form.
///
/// Submitting enters `Submitting` synchronously, so the submit control is
/// disabled and relabeled before the POST is in flight. The restore to
/// `Idle` runs after the outcome regardless of which branch it took, so the
/// control can never be left stuck. A second submit is not blocked here; the
/// disabled control is the only safeguard.
#[hook]
pub fn use_record_form(api: &ApiClient, csrf_token: &str) -> UseRecordFormResult {
    let is_open = use_state(|| false);
    let action = use_state(FormAction::default);
    let fields = use_state(RouteFormFields::default);
    let phase = use_state(SubmitPhase::default);
    let errors = use_state(ValidationErrorSet::default);
    let summary = use_state(|| Option::<RouteSummary>::None);

    let open_add = {
        let is_open = is_open.clone();
        let action = action.clone();
        let fields = fields.clone();
        let errors = errors.clone();
        Callback::from(move |_| {
            fields.set(RouteFormFields::default());
            action.set(FormAction::Add);
            errors.set(ValidationErrorSet::default());
            is_open.set(true);
        })
    };

    let open_edit = {
        let is_open = is_open.clone();
        let action = action.clone();
        let fields = fields.clone();
        let errors = errors.clone();
        Callback::from(move |row: RouteRow| {
            fields.set(RouteFormFields::from_row(&row));
            action.set(FormAction::Update(row.id));
            errors.set(ValidationErrorSet::default());
            is_open.set(true);
        })
    };

    let close = {
        let is_open = is_open.clone();
        Callback::from(move |_| is_open.set(false))
    };

    let dismiss_summary = {
        let summary = summary.clone();
        Callback::from(move |_| summary.set(None))
    };

    let edit_field = {
        let fields = fields.clone();
        Callback::from(move |(field, value): (RouteField, String)| {
            let mut next = (*fields).clone();
            next.set(field, value);
            fields.set(next);
        })
    };

    let submit = {
        let api = api.clone();
        let csrf_token = csrf_token.to_string();
        let is_open = is_open.clone();
        let action = action.clone();
        let fields = fields.clone();
        let phase = phase.clone();
        let errors = errors.clone();
        let summary = summary.clone();
        Callback::from(move |_| {
            // Clear anything rendered by a previous attempt, then flag the
            // in-flight state before the request starts.
            errors.set(ValidationErrorSet::default());
            phase.set(SubmitPhase::Submitting);

            let pairs = (*fields).serialize();
            let path = action.action_path();
            let api = api.clone();
            let csrf_token = csrf_token.clone();
            let is_open = is_open.clone();
            let phase = phase.clone();
            let errors = errors.clone();
            let summary = summary.clone();
            spawn_local(async move {
                match api.submit_record(&path, &pairs, &csrf_token).await {
                    SubmissionOutcome::Success(route_summary) => {
                        is_open.set(false);
                        summary.set(Some(route_summary));
                    }
                    SubmissionOutcome::ValidationFailed(error_set) => {
                        // Modal stays open; the server's messages render inline.
                        errors.set(error_set);
                    }
                    SubmissionOutcome::UnexpectedFailure(message) => {
                        Logger::warn_with_component(
                            "record-form",
                            &format!("falha na submissão: {message}"),
                        );
                        errors.set(ValidationErrorSet::form_wide(message));
                    }
                }
                // Restore runs on every path: the control is never left
                // disabled.
                phase.set(SubmitPhase::Idle);
            });
        })
    };

    UseRecordFormResult {
        state: RecordFormState {
            is_open: *is_open,
            action: *action,
            fields: (*fields).clone(),
            phase: *phase,
            errors: (*errors).clone(),
            summary: (*summary).clone(),
        },
        actions: RecordFormActions {
            open_add,
            open_edit,
            close,
            dismiss_summary,
            edit_field,
            submit,
        },
    }
}
