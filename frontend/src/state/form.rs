//! Route form state: field values, the add/update target, and the
//! two-phase submission flag the submit control renders from.

use shared::RouteRow;

/// Addressable fields of the route form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteField {
    StartLocation,
    EndLocation,
    Vehicle,
    Driver,
    StartTime,
    EndTime,
}

/// Current values of the route form inputs, kept as entered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteFormFields {
    pub start_location: String,
    pub end_location: String,
    /// Selected vehicle id, as the select option value.
    pub vehicle: String,
    /// Selected driver id, as the select option value.
    pub driver: String,
    pub start_time: String,
    pub end_time: String,
}

impl RouteFormFields {
    /// Pre-fill for edit mode from an existing route card.
    pub fn from_row(row: &RouteRow) -> Self {
        Self {
            start_location: row.start_location.clone(),
            end_location: row.end_location.clone(),
            vehicle: row.vehicle_id.to_string(),
            driver: row.driver_id.to_string(),
            start_time: row.start_time.clone(),
            end_time: row.end_time.clone(),
        }
    }

    pub fn set(&mut self, field: RouteField, value: String) {
        match field {
            RouteField::StartLocation => self.start_location = value,
            RouteField::EndLocation => self.end_location = value,
            RouteField::Vehicle => self.vehicle = value,
            RouteField::Driver => self.driver = value,
            RouteField::StartTime => self.start_time = value,
            RouteField::EndTime => self.end_time = value,
        }
    }

    /// Field pairs under the names the backend form expects. The anti-forgery
    /// token is appended by the transport layer, not here.
    pub fn serialize(&self) -> Vec<(String, String)> {
        vec![
            ("start_location".into(), self.start_location.clone()),
            ("end_location".into(), self.end_location.clone()),
            ("vehicle".into(), self.vehicle.clone()),
            ("driver".into(), self.driver.clone()),
            ("start_time".into(), self.start_time.clone()),
            ("end_time".into(), self.end_time.clone()),
        ]
    }
}

/// Where the form posts: a new record or an update of an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormAction {
    #[default]
    Add,
    Update(i64),
}

impl FormAction {
    pub fn action_path(self) -> String {
        match self {
            FormAction::Add => "/routes/add/".to_string(),
            FormAction::Update(id) => format!("/routes/{id}/update/"),
        }
    }

    pub fn modal_title(self) -> &'static str {
        match self {
            FormAction::Add => "Adicionar Nova Rota",
            FormAction::Update(_) => "Editar Rota",
        }
    }
}

/// Submission phase. `Submitting` is entered synchronously on submit, before
/// the request is sent, and left unconditionally when the outcome lands.
/// The submit control's disabled state and label derive from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

impl SubmitPhase {
    pub fn is_submitting(self) -> bool {
        self == SubmitPhase::Submitting
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            SubmitPhase::Idle => "Salvar Rota",
            SubmitPhase::Submitting => "Salvando...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_under_backend_field_names() {
        let mut fields = RouteFormFields::default();
        fields.set(RouteField::StartLocation, "São Paulo, SP".into());
        fields.set(RouteField::EndLocation, "Campinas, SP".into());
        fields.set(RouteField::Vehicle, "3".into());
        fields.set(RouteField::Driver, "7".into());
        fields.set(RouteField::StartTime, "01/07/2026 08:00".into());
        fields.set(RouteField::EndTime, "01/07/2026 12:00".into());

        assert_eq!(
            fields.serialize(),
            vec![
                ("start_location".to_string(), "São Paulo, SP".to_string()),
                ("end_location".to_string(), "Campinas, SP".to_string()),
                ("vehicle".to_string(), "3".to_string()),
                ("driver".to_string(), "7".to_string()),
                ("start_time".to_string(), "01/07/2026 08:00".to_string()),
                ("end_time".to_string(), "01/07/2026 12:00".to_string()),
            ]
        );
    }

    #[test]
    fn action_paths_match_the_backend_urls() {
        assert_eq!(FormAction::Add.action_path(), "/routes/add/");
        assert_eq!(FormAction::Update(42).action_path(), "/routes/42/update/");
    }

    #[test]
    fn titles_follow_the_action() {
        assert_eq!(FormAction::Add.modal_title(), "Adicionar Nova Rota");
        assert_eq!(FormAction::Update(1).modal_title(), "Editar Rota");
    }

    #[test]
    fn edit_prefill_copies_the_row() {
        let row = RouteRow {
            id: 42,
            start_location: "A".into(),
            end_location: "B".into(),
            vehicle_id: 3,
            driver_id: 7,
            start_time: "01/07/2026 08:00".into(),
            end_time: "01/07/2026 12:00".into(),
            status_display: "Agendada".into(),
        };
        let fields = RouteFormFields::from_row(&row);
        assert_eq!(fields.vehicle, "3");
        assert_eq!(fields.driver, "7");
        assert_eq!(fields.start_location, "A");
    }

    #[test]
    fn submit_control_reflects_the_phase() {
        assert!(!SubmitPhase::Idle.is_submitting());
        assert_eq!(SubmitPhase::Idle.submit_label(), "Salvar Rota");
        assert!(SubmitPhase::Submitting.is_submitting());
        assert_eq!(SubmitPhase::Submitting.submit_label(), "Salvando...");
    }
}
