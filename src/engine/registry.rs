//! Module sequencing and fallback module inference.
//!
//! Dispatch by an explicit module tag is always primary. The registry's
//! prefix inference exists solely to tolerate stale caller state where the
//! tag is missing, and must never override an explicit tag.

use crate::catalog::ConfigModule;
use crate::error::{EngineError, EngineResult};
use crate::models::AnswerSet;

/// An ordered list of `(module, prefix-set)` pairs plus the fixed module
/// sequence.
///
/// The prefix sets are disjoint; inference scans them longest-prefix-first
/// so that the payment module's `q1_payment_method` family wins over the
/// payroll module's generic `q1_` family.
///
/// # Example
///
/// ```
/// use payroll_config_engine::catalog::ConfigModule;
/// use payroll_config_engine::engine::ModuleRegistry;
/// use payroll_config_engine::models::{AnswerSet, AnswerValue};
///
/// let registry = ModuleRegistry::default();
/// let answers = AnswerSet::from([("q1_payment_method_p", AnswerValue::from("yes"))]);
/// assert_eq!(
///     registry.infer_module(&answers),
///     Some(ConfigModule::PaymentMethod)
/// );
/// ```
#[derive(Debug, Clone)]
pub struct ModuleRegistry {
    sequence: Vec<ConfigModule>,
    prefixes: Vec<(ConfigModule, Vec<String>)>,
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new(
            vec![ConfigModule::PayrollArea, ConfigModule::PaymentMethod],
            vec![
                (
                    ConfigModule::PaymentMethod,
                    vec![
                        "q1_payment_method".to_string(),
                        "q1_p_".to_string(),
                        "q2_payment_method".to_string(),
                        "q2_q_".to_string(),
                        "q3_payment_method".to_string(),
                        "q4_payment_method".to_string(),
                        "q5_pre_note".to_string(),
                    ],
                ),
                (
                    ConfigModule::PayrollArea,
                    vec![
                        "q1_frequencies".to_string(),
                        "q1_".to_string(),
                        "business_names_".to_string(),
                        "business_".to_string(),
                        "geographic_".to_string(),
                        "regions_".to_string(),
                    ],
                ),
            ],
        )
    }
}

impl ModuleRegistry {
    /// Creates a registry from an explicit sequence and prefix table.
    pub fn new(sequence: Vec<ConfigModule>, prefixes: Vec<(ConfigModule, Vec<String>)>) -> Self {
        Self { sequence, prefixes }
    }

    /// Returns the fixed module sequence.
    pub fn sequence(&self) -> &[ConfigModule] {
        &self.sequence
    }

    /// Returns the first module of the sequence not yet completed.
    pub fn next_module(&self, completed: &[ConfigModule]) -> Option<ConfigModule> {
        self.sequence
            .iter()
            .find(|module| !completed.contains(module))
            .copied()
    }

    /// Infers the module owning an answer set from its question-id prefixes.
    ///
    /// Scans all registered prefixes longest-first; the first prefix that
    /// matches any answer key decides the module. Returns `None` when no
    /// key matches any prefix.
    pub fn infer_module(&self, answers: &AnswerSet) -> Option<ConfigModule> {
        let mut ranked: Vec<(&str, ConfigModule)> = self
            .prefixes
            .iter()
            .flat_map(|(module, prefixes)| {
                prefixes.iter().map(|prefix| (prefix.as_str(), *module))
            })
            .collect();
        ranked.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(b.0)));

        for (prefix, module) in ranked {
            if answers.iter().any(|(key, _)| key.starts_with(prefix)) {
                return Some(module);
            }
        }
        None
    }

    /// Resolves the module for an operation.
    ///
    /// An explicit module tag always wins; inference is consulted only as a
    /// fallback.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ModuleNotRecognized`] when no tag is supplied
    /// and no answer key matches a registered prefix.
    pub fn resolve(
        &self,
        explicit: Option<ConfigModule>,
        answers: &AnswerSet,
    ) -> EngineResult<ConfigModule> {
        if let Some(module) = explicit {
            return Ok(module);
        }
        self.infer_module(answers)
            .ok_or_else(|| EngineError::ModuleNotRecognized {
                message: "no explicit module and no answer key matches a known prefix"
                    .to_string(),
            })
    }
}
