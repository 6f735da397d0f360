//! The configuration decision engine.
//!
//! This module contains the question-routing state machine and the artifact
//! derivation passes: calendar combination resolution, dynamic per-calendar
//! question synthesis, payroll area and payment method generation, and
//! pay-period/pay-date schedule emission.

mod areas;
mod combos;
mod driver;
mod dynamic;
mod payment;
mod registry;
mod router;
mod schedule;

pub use areas::generate_payroll_areas;
pub use combos::resolve_calendar_combos;
pub use driver::{Artifacts, Engine};
pub use dynamic::{DynamicQuestionKind, dynamic_question};
pub use payment::generate_payment_methods;
pub use registry::ModuleRegistry;
pub use router::{RouterState, next_payment_question, next_payroll_question, next_question};
pub use schedule::{
    CALENDAR_START_DATE, DATE_MODIFIER, DATE_TYPE, MOLGA, PAYROLL_AREA_TEXT, RUN_PAYROLL,
    TIME_UNIT, emit_schedule, generate_pay_dates, generate_pay_periods, period_anchor,
};
