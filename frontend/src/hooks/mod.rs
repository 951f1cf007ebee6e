pub mod use_entity_panel;
pub mod use_record_form;

pub use use_entity_panel::{use_entity_panel, EntityPanelActions, UseEntityPanelResult};
pub use use_record_form::{use_record_form, RecordFormActions, RecordFormState, UseRecordFormResult};
