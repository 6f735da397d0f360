//! The engine facade.
//!
//! Bundles a question catalog and a module registry behind the two
//! operations each module exposes: `advance` drives the question router,
//! `finalize` derives the configuration artifacts once routing reports
//! completion.

use std::path::Path;

use tracing::info;

use crate::catalog::{ConfigModule, QuestionCatalog};
use crate::error::EngineResult;
use crate::models::{
    AnswerSet, AnswerValue, PayPeriodRow, PaymentMethodRecord, PayrollArea, Question, Schedule,
};

use super::areas::generate_payroll_areas;
use super::payment::generate_payment_methods;
use super::registry::ModuleRegistry;
use super::router::{RouterState, next_question};
use super::schedule::{emit_schedule, generate_pay_periods};

/// The artifacts produced by finalizing one module.
#[derive(Debug, Clone, PartialEq)]
pub enum Artifacts {
    /// Payroll areas from the payroll-area module.
    PayrollAreas(Vec<PayrollArea>),
    /// Payment method records from the payment-method module.
    PaymentMethods(Vec<PaymentMethodRecord>),
}

/// The configuration decision engine.
///
/// Stateless per call: every operation is a pure transformation of the
/// supplied answer set. Suspension, retries, and persistence belong to the
/// surrounding session layer.
///
/// # Example
///
/// ```
/// use payroll_config_engine::catalog::ConfigModule;
/// use payroll_config_engine::engine::Engine;
/// use payroll_config_engine::models::AnswerSet;
///
/// let engine = Engine::with_builtin_catalog();
/// let state = engine
///     .advance(ConfigModule::PayrollArea, &AnswerSet::new())
///     .unwrap();
/// assert_eq!(state.question_id(), Some("q1_frequencies"));
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    catalog: QuestionCatalog,
    registry: ModuleRegistry,
}

impl Engine {
    /// Creates an engine from an explicit catalog and registry.
    pub fn new(catalog: QuestionCatalog, registry: ModuleRegistry) -> Self {
        Self { catalog, registry }
    }

    /// Creates an engine with the built-in catalog and default registry.
    pub fn with_builtin_catalog() -> Self {
        Self::new(QuestionCatalog::builtin(), ModuleRegistry::default())
    }

    /// Returns the question catalog.
    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Returns the module registry.
    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    /// Replaces the catalog with a fresh load from a directory.
    ///
    /// On error the current catalog stays in effect.
    pub fn reload_catalog<P: AsRef<Path>>(&mut self, dir: P) -> EngineResult<()> {
        self.catalog.reload(dir)
    }

    /// Resolves the module for an operation.
    ///
    /// An explicit module tag always wins; the registry's prefix inference
    /// is a fallback for stale caller state only.
    pub fn resolve_module(
        &self,
        explicit: Option<ConfigModule>,
        answers: &AnswerSet,
    ) -> EngineResult<ConfigModule> {
        self.registry.resolve(explicit, answers)
    }

    /// Determines the next question for a module, or completion.
    pub fn advance(
        &self,
        module: ConfigModule,
        answers: &AnswerSet,
    ) -> EngineResult<RouterState> {
        next_question(&self.catalog, module, answers)
    }

    /// Validates and records an answer to a served question.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidAnswer`](crate::error::EngineError::InvalidAnswer)
    /// when the value's shape does not match the question's declared kind;
    /// nothing is recorded in that case.
    pub fn record_answer(
        &self,
        question: &Question,
        answers: &mut AnswerSet,
        value: AnswerValue,
    ) -> EngineResult<()> {
        question.validate_answer(&value)?;
        answers.record(question.id.clone(), value);
        Ok(())
    }

    /// Derives the configuration artifacts for a completed module.
    pub fn finalize(
        &self,
        module: ConfigModule,
        answers: &AnswerSet,
    ) -> EngineResult<Artifacts> {
        let artifacts = match module {
            ConfigModule::PayrollArea => {
                Artifacts::PayrollAreas(generate_payroll_areas(answers))
            }
            ConfigModule::PaymentMethod => {
                Artifacts::PaymentMethods(generate_payment_methods(answers))
            }
        };
        info!(module = %module, "finalized configuration module");
        Ok(artifacts)
    }

    /// Emits the full schedule for one generated payroll area.
    pub fn emit_schedule(&self, area: &PayrollArea, num_years: u32) -> EngineResult<Schedule> {
        emit_schedule(area, num_years)
    }

    /// Generates the pay period rows for one generated payroll area.
    ///
    /// Available for every frequency, unlike the full schedule whose pay
    /// dates are restricted to weekly and biweekly calendars.
    pub fn pay_periods(&self, area: &PayrollArea, num_years: u32) -> Vec<PayPeriodRow> {
        generate_pay_periods(area, num_years)
    }
}
