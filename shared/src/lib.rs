use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Synthetic field key used by the backend (and by the client as a fallback)
/// for errors that do not belong to a single form field.
pub const FORM_WIDE_KEY: &str = "__all__";

/// The closed set of history categories a details panel can show.
///
/// The wire path segment doubles as the cache discriminant, so adding a kind
/// here is all that is needed to route a new history tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HistoryKind {
    Maintenance,
    Route,
}

impl HistoryKind {
    /// URL path segment of the history endpoint for this kind.
    pub fn as_path(self) -> &'static str {
        match self {
            HistoryKind::Maintenance => "maintenance_history",
            HistoryKind::Route => "route_history",
        }
    }

    /// Heading of the history panel.
    pub fn label(self) -> &'static str {
        match self {
            HistoryKind::Maintenance => "Histórico de Manutenção",
            HistoryKind::Route => "Histórico de Rotas",
        }
    }

    /// Short label of the tab link.
    pub fn tab_label(self) -> &'static str {
        match self {
            HistoryKind::Maintenance => "Manutenção",
            HistoryKind::Route => "Rotas",
        }
    }
}

/// One completed maintenance job, as returned by
/// `GET /vehicles/{id}/maintenance_history/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenanceRecord {
    pub service_type: String,
    pub shop_name: String,
    /// Completion date, already formatted by the server (`dd/mm/yyyy` or "N/A").
    pub end_date: String,
    /// Actual cost; missing or null counts as zero when aggregating.
    #[serde(default)]
    pub cost: Option<f64>,
}

/// One completed route, as returned by the vehicle and driver route history
/// endpoints. `vehicle_plate` is only present on driver history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub start_location: String,
    pub end_location: String,
    /// Completion timestamp, already formatted by the server (`dd/mm/yyyy HH:MM`).
    pub end_time: String,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub fuel_cost: Option<f64>,
    #[serde(default)]
    pub toll_cost: Option<f64>,
    #[serde(default)]
    pub vehicle_plate: Option<String>,
}

/// Body of a maintenance history response. The server also sends a
/// pre-aggregated `total_cost`; the client recomputes totals from the records
/// instead, so that field is not modeled.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MaintenanceHistoryResponse {
    pub history: Vec<MaintenanceRecord>,
}

/// Body of a route history response. Server-side `stats` are ignored for the
/// same reason as above.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteHistoryResponse {
    pub history: Vec<RouteRecord>,
}

/// Summary block of a successful route mutation.
///
/// The backend serializes its decimal columns as strings, so the numeric
/// fields accept either a JSON number or a decimal string; anything else
/// coerces to zero.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteSummary {
    pub start_location: String,
    pub end_location: String,
    #[serde(default, deserialize_with = "flexible_f64")]
    pub distance: f64,
    #[serde(default, deserialize_with = "flexible_f64")]
    pub toll_cost: f64,
    #[serde(default, deserialize_with = "flexible_f64")]
    pub fuel_cost: f64,
}

fn flexible_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_f64(&value))
}

/// `parseFloat`-style coercion: numbers pass through, decimal strings parse,
/// everything else is zero.
pub fn coerce_f64(value: &serde_json::Value) -> f64 {
    match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Server-declared validation errors, normalized to field → messages.
///
/// The wire shape is inconsistent: a field's list may contain
/// `{"message": "..."}` objects or bare strings, sometimes mixed. Both are
/// flattened to plain strings here, at the parse boundary, so rendering never
/// has to care.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrorSet {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrorSet {
    /// A set holding a single form-wide message under [`FORM_WIDE_KEY`].
    pub fn form_wide(message: impl Into<String>) -> Self {
        let mut set = Self::default();
        set.push(FORM_WIDE_KEY, message);
        set
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.values().all(|messages| messages.is_empty())
    }

    /// Total number of messages across all fields.
    pub fn message_count(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    /// Every message, in field-sorted order (form-wide `__all__` sorts first),
    /// preserving the server's order within a field.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.fields
            .values()
            .flat_map(|messages| messages.iter().map(String::as_str))
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.fields
            .iter()
            .map(|(field, messages)| (field.as_str(), messages.as_slice()))
    }
}

impl<'de> Deserialize<'de> for ValidationErrorSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawMessage {
            Tagged { message: String },
            Plain(String),
        }

        impl RawMessage {
            fn into_text(self) -> String {
                match self {
                    RawMessage::Tagged { message } => message,
                    RawMessage::Plain(text) => text,
                }
            }
        }

        let raw = BTreeMap::<String, Vec<RawMessage>>::deserialize(deserializer)?;
        let fields = raw
            .into_iter()
            .map(|(field, messages)| {
                (
                    field,
                    messages.into_iter().map(RawMessage::into_text).collect(),
                )
            })
            .collect();
        Ok(ValidationErrorSet { fields })
    }
}

/// Body of a record mutation response, success and failure alike.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    #[serde(default)]
    pub summary: Option<RouteSummary>,
    #[serde(default)]
    pub errors: Option<ValidationErrorSet>,
}

/// Row data for one vehicle, as rendered into the host page. The details tab
/// is painted from this alone; no network call is involved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRow {
    pub id: i64,
    pub plate: String,
    pub model: String,
    pub year: i32,
    /// Status slug, used for the status tag CSS class.
    pub status: String,
    pub status_display: String,
    pub mileage: f64,
    /// ISO date (`yyyy-mm-dd`).
    pub acquisition_date: String,
    #[serde(default)]
    pub driver_name: Option<String>,
    #[serde(default)]
    pub average_fuel_consumption: Option<f64>,
}

/// Row data for one driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverRow {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub license_number: String,
    /// ISO date (`yyyy-mm-dd`).
    pub admission_date: String,
    pub is_active: bool,
    #[serde(default)]
    pub demission_date: Option<String>,
}

/// Row data for one route card. Editing a route pre-fills the form from
/// this, with no extra request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRow {
    pub id: i64,
    pub start_location: String,
    pub end_location: String,
    pub vehicle_id: i64,
    pub driver_id: i64,
    /// `dd/mm/yyyy HH:MM`, as the form's datetime inputs expect.
    pub start_time: String,
    pub end_time: String,
    pub status_display: String,
}

/// Everything the host page hands the client at startup: the anti-forgery
/// token and the row data the tables and details tabs render from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BootstrapData {
    pub csrf_token: String,
    #[serde(default)]
    pub vehicles: Vec<VehicleRow>,
    #[serde(default)]
    pub drivers: Vec<DriverRow>,
    #[serde(default)]
    pub routes: Vec<RouteRow>,
}
