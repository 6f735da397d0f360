//! Core data models for the configuration decision engine.
//!
//! This module contains all the domain models used throughout the engine.

mod answer;
mod combo;
mod payment_method;
mod payroll_area;
mod question;
mod schedule;

pub use answer::{AnswerSet, AnswerValue};
pub use combo::{CalendarCombo, PayFrequency};
pub(crate) use combo::DEFAULT_CALENDAR_BASE;
pub use payment_method::{CheckRange, PaymentMethodRecord};
pub use payroll_area::PayrollArea;
pub use question::{ChoiceOption, Question, QuestionKind, ShowIf};
pub use schedule::{PayDateRow, PayPeriodRow, Schedule};
