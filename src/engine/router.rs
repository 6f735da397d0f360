//! The question-routing state machine.
//!
//! Given the accumulated answers, the router decides the single next
//! unanswered, visible question (static or dynamic) or signals completion.
//! The walk is left-to-right and depth-first with no backtracking: an
//! answer change on an earlier question does not re-trigger later questions
//! that were already answered.

use tracing::debug;

use crate::catalog::{ConfigModule, QuestionCatalog};
use crate::error::EngineResult;
use crate::models::{AnswerSet, Question};

use super::combos::{FREQUENCIES_QUESTION_ID, resolve_calendar_combos};
use super::dynamic::{DynamicQuestionKind, dynamic_question};

/// The router's verdict for one `advance` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterState {
    /// The next question comes from the static catalog.
    AskingStatic {
        /// The question id.
        id: String,
        /// The catalog-resolved question.
        question: Question,
    },
    /// The next question was synthesized for a calendar combination.
    AskingDynamic {
        /// The question id.
        id: String,
        /// The synthesized question.
        question: Question,
    },
    /// Every required question has been answered.
    Complete,
}

impl RouterState {
    /// Checks whether the flow is complete.
    pub fn is_complete(&self) -> bool {
        matches!(self, RouterState::Complete)
    }

    /// Returns the next question id, if the flow is not complete.
    pub fn question_id(&self) -> Option<&str> {
        match self {
            RouterState::AskingStatic { id, .. } | RouterState::AskingDynamic { id, .. } => {
                Some(id)
            }
            RouterState::Complete => None,
        }
    }

    /// Returns the next question, if the flow is not complete.
    pub fn question(&self) -> Option<&Question> {
        match self {
            RouterState::AskingStatic { question, .. }
            | RouterState::AskingDynamic { question, .. } => Some(question),
            RouterState::Complete => None,
        }
    }
}

/// Determines the next question for a module.
pub fn next_question(
    catalog: &QuestionCatalog,
    module: ConfigModule,
    answers: &AnswerSet,
) -> EngineResult<RouterState> {
    match module {
        ConfigModule::PayrollArea => next_payroll_question(catalog, answers),
        ConfigModule::PaymentMethod => next_payment_question(catalog, answers),
    }
}

/// Determines the next payroll-area question.
///
/// The walk order is fixed: the frequency selection first, then a pattern
/// (skipped for monthly) and payday question per selected frequency in
/// selection order, then the per-combo dynamic questions in combo order:
/// business unit, business-unit names (iff the business answer is exactly
/// `"yes"`), geographic, regions (iff the geographic answer is exactly
/// `"multiple"`).
///
/// # Errors
///
/// Returns [`QuestionNotFound`](crate::error::EngineError::QuestionNotFound)
/// when a static question id the walk needs is missing from the catalog.
pub fn next_payroll_question(
    catalog: &QuestionCatalog,
    answers: &AnswerSet,
) -> EngineResult<RouterState> {
    let module = ConfigModule::PayrollArea;

    if !answers.contains(FREQUENCIES_QUESTION_ID) {
        return asking_static(catalog, module, FREQUENCIES_QUESTION_ID);
    }

    let frequencies = answers
        .get(FREQUENCIES_QUESTION_ID)
        .map(|a| a.as_list())
        .unwrap_or_default();

    for frequency in &frequencies {
        let pattern_id = format!("q1_{frequency}_pattern");
        let payday_id = format!("q1_{frequency}_payday");

        // Monthly calendars always run 1st to month end.
        if frequency != "monthly" && !answers.contains(&pattern_id) {
            return asking_static(catalog, module, &pattern_id);
        }
        if !answers.contains(&payday_id) {
            return asking_static(catalog, module, &payday_id);
        }
    }

    for combo in resolve_calendar_combos(answers) {
        let business_id = combo.business_question_id();
        if !answers.contains(&business_id) {
            return asking_dynamic(business_id, dynamic_question(&combo, DynamicQuestionKind::BusinessUnit));
        }

        if answers.get(&business_id).is_some_and(|a| a.is_exactly("yes")) {
            let names_id = combo.business_names_question_id();
            if !answers.contains(&names_id) {
                return asking_dynamic(
                    names_id,
                    dynamic_question(&combo, DynamicQuestionKind::BusinessUnitNames),
                );
            }
        }

        let geographic_id = combo.geographic_question_id();
        if !answers.contains(&geographic_id) {
            return asking_dynamic(
                geographic_id,
                dynamic_question(&combo, DynamicQuestionKind::Geographic),
            );
        }

        if answers
            .get(&geographic_id)
            .is_some_and(|a| a.is_exactly("multiple"))
        {
            let regions_id = combo.regions_question_id();
            if !answers.contains(&regions_id) {
                return asking_dynamic(
                    regions_id,
                    dynamic_question(&combo, DynamicQuestionKind::Regions),
                );
            }
        }
    }

    debug!(module = %module, "payroll question flow complete");
    Ok(RouterState::Complete)
}

/// Determines the next payment-method question.
///
/// Walks the catalog in flow order, skipping answered questions and
/// questions whose `showIf` predicate is unsatisfied; the first remaining
/// eligible question is the next one.
pub fn next_payment_question(
    catalog: &QuestionCatalog,
    answers: &AnswerSet,
) -> EngineResult<RouterState> {
    for question in catalog.questions(ConfigModule::PaymentMethod) {
        if answers.contains(&question.id) {
            continue;
        }
        if !question.is_visible(answers) {
            continue;
        }

        debug!(question_id = %question.id, "next payment question");
        return Ok(RouterState::AskingStatic {
            id: question.id.clone(),
            question: question.clone(),
        });
    }

    debug!("payment question flow complete");
    Ok(RouterState::Complete)
}

fn asking_static(
    catalog: &QuestionCatalog,
    module: ConfigModule,
    id: &str,
) -> EngineResult<RouterState> {
    let question = catalog.require_question(module, id)?;
    debug!(question_id = %id, "next static question");
    Ok(RouterState::AskingStatic {
        id: id.to_string(),
        question: question.clone(),
    })
}

fn asking_dynamic(id: String, question: Question) -> EngineResult<RouterState> {
    debug!(question_id = %id, "next dynamic question");
    Ok(RouterState::AskingDynamic { id, question })
}
