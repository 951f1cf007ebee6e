pub mod driver_details_modal;
pub mod driver_table;
pub mod history_panel;
pub mod route_cards;
pub mod route_form_modal;
pub mod summary_modal;
pub mod vehicle_details_modal;
pub mod vehicle_table;
