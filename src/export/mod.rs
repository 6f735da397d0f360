//! CSV export for SAP import tooling.
//!
//! Column order and header labels are part of the contract with the
//! downstream SAP import process and must not be reordered.

mod files;
mod writers;

pub use files::ExportFile;
pub use writers::{
    calendar_id_csv, check_range_csv, pay_date_csv, pay_period_csv, payment_method_csv,
    payroll_area_config_csv, payroll_areas_csv, pre_notification_csv,
};
