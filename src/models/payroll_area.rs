//! The payroll area record.

use serde::{Deserialize, Serialize};

/// A generated SAP payroll area.
///
/// One area groups employees that share a pay calendar, business unit, and
/// geographic region. Codes are sequential `Z{n}` across all generated
/// areas; all areas derived from the same calendar combination share one
/// `calendar_id`.
///
/// Serialized field names follow the questionnaire frontend's JSON shape
/// (`periodPattern`, `payDay`, `calendarId`, ...).
///
/// # Example
///
/// ```
/// use payroll_config_engine::models::PayrollArea;
///
/// let area = PayrollArea {
///     code: "Z1".to_string(),
///     description: "Wkly PDAY Fri".to_string(),
///     frequency: "weekly".to_string(),
///     period_pattern: "mon-sun".to_string(),
///     pay_day: "friday".to_string(),
///     calendar_id: "80".to_string(),
///     employee_count: 0,
///     business_unit: None,
///     region: None,
///     reasoning: vec!["Pay frequency: weekly".to_string()],
/// };
/// assert!(area.description.chars().count() <= 20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayrollArea {
    /// Sequential area code, `Z1`, `Z2`, ...
    pub code: String,
    /// SAP description, at most 20 characters.
    pub description: String,
    /// The pay frequency, e.g. `weekly`.
    pub frequency: String,
    /// The period pattern, e.g. `mon-sun`.
    pub period_pattern: String,
    /// The payday, e.g. `friday`.
    pub pay_day: String,
    /// Calendar id shared by all areas of the same calendar combination.
    pub calendar_id: String,
    /// Employee head count, filled in by the user after generation.
    pub employee_count: u32,
    /// Business unit, when the calendar is separated by business unit.
    pub business_unit: Option<String>,
    /// Region, when the calendar is separated geographically. `None` for
    /// mainland employees.
    pub region: Option<String>,
    /// Human-readable derivation trace for this area.
    pub reasoning: Vec<String>,
}
