use gloo::net::http::Request;
use shared::{
    HistoryKind, MaintenanceHistoryResponse, MutationResponse, RouteHistoryResponse, RouteSummary,
    ValidationErrorSet,
};
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::FormData;

use crate::state::history::HistoryRecords;
use crate::state::panel::EntityRef;

/// Shown when the request itself failed or the body was not decodable.
pub const CONNECTION_ERROR: &str = "Erro de conexão. Tente novamente.";
/// Shown for any status/body combination outside the known contract.
pub const UNEXPECTED_ERROR: &str = "Ocorreu um erro inesperado.";
/// Painted into a history panel whose fetch failed.
pub const HISTORY_ERROR: &str = "Erro ao carregar o histórico. Tente novamente.";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("falha de rede: {0}")]
    Transport(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("corpo inválido: {0}")]
    Decode(String),
}

/// Result of one record submission, fully interpreted. Transport problems
/// are absorbed into `UnexpectedFailure`, so callers never see an error type.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Success(RouteSummary),
    ValidationFailed(ValidationErrorSet),
    UnexpectedFailure(String),
}

/// API client for the fleet backend. An empty base URL means same-origin,
/// which is how the app is served in production.
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// Fetch one history tab's records.
    ///
    /// Called at most once per (entity, kind) while a panel is open; the
    /// state machine's cache enforces that, not this function.
    pub async fn fetch_history(
        &self,
        entity: EntityRef,
        kind: HistoryKind,
    ) -> Result<HistoryRecords, FetchError> {
        let url = format!(
            "{}/{}/{}/{}/",
            self.base_url,
            entity.kind.as_path(),
            entity.id,
            kind.as_path()
        );
        let response = Request::get(&url)
            .send()
            .await
            .map_err(|error| FetchError::Transport(error.to_string()))?;
        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        match kind {
            HistoryKind::Maintenance => {
                let body: MaintenanceHistoryResponse = response
                    .json()
                    .await
                    .map_err(|error| FetchError::Decode(error.to_string()))?;
                Ok(HistoryRecords::Maintenance(body.history))
            }
            HistoryKind::Route => {
                let body: RouteHistoryResponse = response
                    .json()
                    .await
                    .map_err(|error| FetchError::Decode(error.to_string()))?;
                Ok(HistoryRecords::Route(body.history))
            }
        }
    }

    /// POST a record form to its action path as multipart form data, marked
    /// as a programmatic request, and interpret the structured result.
    pub async fn submit_record(
        &self,
        action_path: &str,
        fields: &[(String, String)],
        csrf_token: &str,
    ) -> SubmissionOutcome {
        let form = match build_form_data(fields, csrf_token) {
            Ok(form) => form,
            Err(_) => return SubmissionOutcome::UnexpectedFailure(UNEXPECTED_ERROR.to_string()),
        };

        let request = Request::post(&format!("{}{}", self.base_url, action_path))
            .header("X-Requested-With", "XMLHttpRequest")
            .header("X-CSRFToken", csrf_token)
            .body(form);
        let request = match request {
            Ok(request) => request,
            Err(_) => return SubmissionOutcome::UnexpectedFailure(UNEXPECTED_ERROR.to_string()),
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(_) => return SubmissionOutcome::UnexpectedFailure(CONNECTION_ERROR.to_string()),
        };

        let status = response.status();
        let body = response.json::<MutationResponse>().await.ok();
        interpret_submission(status, body)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn build_form_data(fields: &[(String, String)], csrf_token: &str) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    form.append_with_str("csrfmiddlewaretoken", csrf_token)?;
    for (name, value) in fields {
        form.append_with_str(name, value)?;
    }
    Ok(form)
}

/// The status × body.success contract table as a pure function:
/// `200 + success` carries a summary, `400 + !success` carries a validation
/// error set, and everything else (including an undecodable body, passed as
/// `None`) maps to a generic localized failure.
pub fn interpret_submission(status: u16, body: Option<MutationResponse>) -> SubmissionOutcome {
    let Some(body) = body else {
        return SubmissionOutcome::UnexpectedFailure(CONNECTION_ERROR.to_string());
    };

    match (status, body.success) {
        (200, true) => match body.summary {
            Some(summary) => SubmissionOutcome::Success(summary),
            None => SubmissionOutcome::UnexpectedFailure(UNEXPECTED_ERROR.to_string()),
        },
        (400, false) => match body.errors {
            Some(errors) if !errors.is_empty() => SubmissionOutcome::ValidationFailed(errors),
            _ => SubmissionOutcome::UnexpectedFailure(UNEXPECTED_ERROR.to_string()),
        },
        _ => SubmissionOutcome::UnexpectedFailure(UNEXPECTED_ERROR.to_string()),
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn form_data_carries_every_field_and_the_token() {
        let form = build_form_data(
            &[("start_location".to_string(), "São Paulo, SP".to_string())],
            "tok",
        )
        .unwrap();
        assert_eq!(
            form.get("csrfmiddlewaretoken").as_string().as_deref(),
            Some("tok")
        );
        assert_eq!(
            form.get("start_location").as_string().as_deref(),
            Some("São Paulo, SP")
        );
    }
}
