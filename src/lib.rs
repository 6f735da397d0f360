//! Configuration Decision Engine for SAP payroll onboarding.
//!
//! This crate drives a multi-step questionnaire that configures SAP payroll
//! areas and payment methods, then deterministically derives the resulting
//! configuration artifacts (payroll areas, calendars, pay periods, pay dates,
//! payment method records) and serializes them to CSV for SAP import.

#![warn(missing_docs)]

pub mod catalog;
pub mod engine;
pub mod error;
pub mod export;
pub mod models;
pub mod session;
