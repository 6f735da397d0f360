//! Pay period and pay date schedule rows.
//!
//! Schedule rows are generated sequences, not persisted entities: they are
//! computed on demand from a payroll area and a requested year count, and
//! always regenerated from the anchor date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One pay period of a generated calendar.
///
/// `payroll_year` and `prior_period_year` both carry the period *end*
/// date's year. The period counter resets to 1 whenever the year changes
/// between consecutive rows; it depends on emission order, not on a fixed
/// period-of-year formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayPeriodRow {
    /// The calendar id these periods belong to.
    pub period_parameters: String,
    /// The payroll year (the end date's year).
    pub payroll_year: i32,
    /// The period number within the payroll year, starting at 1.
    pub payroll_period: u32,
    /// First day of the period.
    pub period_begin_date: NaiveDate,
    /// Last day of the period.
    pub period_end_date: NaiveDate,
    /// The prior-period year (equals the payroll year).
    pub prior_period_year: i32,
    /// The prior-period number (tracks the same reset counter).
    pub prior_period_period: u32,
}

/// One pay date of a generated calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayDateRow {
    /// SAP country grouping.
    pub molga: String,
    /// SAP date modifier.
    pub date_modifier: String,
    /// The calendar id these dates belong to.
    pub period_parameters: String,
    /// The payroll year (the pay date's year).
    pub payroll_year: i32,
    /// The period number within the payroll year, starting at 1.
    pub payroll_period: u32,
    /// SAP date type.
    pub date_type: String,
    /// The pay date.
    pub date: NaiveDate,
}

/// The full exportable schedule of one payroll area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// The pay period rows.
    pub periods: Vec<PayPeriodRow>,
    /// The pay date rows.
    pub dates: Vec<PayDateRow>,
}
