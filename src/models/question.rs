//! Question definitions.
//!
//! Questions are a closed tagged union of kinds rather than loosely-typed
//! dictionaries: every variant declares the shape of answer it accepts, and
//! answers are validated against that shape at write time.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AnswerSet, AnswerValue};

/// A single-parent-answer equality visibility predicate.
///
/// A question carrying a `ShowIf` is only eligible once its parent question
/// has been answered with the expected answer id.
///
/// # Example
///
/// ```
/// use payroll_config_engine::models::{AnswerSet, AnswerValue, ShowIf};
///
/// let show_if = ShowIf {
///     question_id: "q1_payment_method_p".to_string(),
///     answer_id: "yes".to_string(),
/// };
///
/// let mut answers = AnswerSet::new();
/// assert!(!show_if.is_satisfied(&answers));
/// answers.record("q1_payment_method_p", AnswerValue::from("yes"));
/// assert!(show_if.is_satisfied(&answers));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowIf {
    /// The id of the parent question.
    pub question_id: String,
    /// The answer id the parent must have.
    pub answer_id: String,
}

impl ShowIf {
    /// Evaluates the predicate against the accumulated answers.
    pub fn is_satisfied(&self, answers: &AnswerSet) -> bool {
        answers
            .get(&self.question_id)
            .is_some_and(|answer| answer.is_exactly(&self.answer_id))
    }
}

/// One selectable option of a choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// The stable option id recorded as the answer value.
    pub id: String,
    /// The human-readable option label.
    pub label: String,
    /// An optional longer description shown under the label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ChoiceOption {
    /// Creates an option with no description.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: None,
        }
    }

    /// Creates an option with a description.
    pub fn described(
        id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: Some(description.into()),
        }
    }
}

/// The kind of a question, including its kind-specific payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionKind {
    /// Pick exactly one of the listed options.
    MultipleChoice {
        /// The selectable options.
        options: Vec<ChoiceOption>,
    },
    /// Pick any number of the listed options.
    MultipleSelect {
        /// The selectable options.
        options: Vec<ChoiceOption>,
    },
    /// Free-text answer.
    Text {
        /// An optional placeholder shown in the input field.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        placeholder: Option<String>,
    },
}

impl QuestionKind {
    /// Returns the wire name of this kind.
    pub fn name(&self) -> &'static str {
        match self {
            QuestionKind::MultipleChoice { .. } => "multiple_choice",
            QuestionKind::MultipleSelect { .. } => "multiple_select",
            QuestionKind::Text { .. } => "text",
        }
    }

    /// Returns the options of a choice kind, or an empty slice for text.
    pub fn options(&self) -> &[ChoiceOption] {
        match self {
            QuestionKind::MultipleChoice { options } | QuestionKind::MultipleSelect { options } => {
                options
            }
            QuestionKind::Text { .. } => &[],
        }
    }
}

/// A question presented to the user.
///
/// Static questions come from the question catalog; dynamic questions are
/// synthesized per calendar combination and carry no `show_if` predicate
/// (their eligibility is decided procedurally by the router).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// The unique question id within its module.
    pub id: String,
    /// The question text presented to the user.
    pub text: String,
    /// The question kind and its payload.
    #[serde(flatten)]
    pub kind: QuestionKind,
    /// Optional visibility predicate referencing a prior answer.
    #[serde(rename = "showIf", default, skip_serializing_if = "Option::is_none")]
    pub show_if: Option<ShowIf>,
}

impl Question {
    /// Checks whether the question is currently visible.
    ///
    /// A question with no `show_if` predicate is always visible.
    pub fn is_visible(&self, answers: &AnswerSet) -> bool {
        self.show_if
            .as_ref()
            .is_none_or(|show_if| show_if.is_satisfied(answers))
    }

    /// Validates an answer value against this question's declared kind.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidAnswer`] when the value's shape does not
    /// match the kind: choice questions require a known option id (a boolean
    /// is accepted where the options are yes/no), multi-select questions
    /// require a list of known option ids (a scalar is coerced to a
    /// single-element list), and text questions require text.
    pub fn validate_answer(&self, value: &AnswerValue) -> EngineResult<()> {
        match &self.kind {
            QuestionKind::MultipleChoice { options } => {
                let selected = match value {
                    AnswerValue::Text(s) => s.clone(),
                    AnswerValue::Bool(true) => "yes".to_string(),
                    AnswerValue::Bool(false) => "no".to_string(),
                    AnswerValue::List(_) => {
                        return Err(self.invalid_answer("expected a single choice, got a list"));
                    }
                };
                if options.iter().any(|o| o.id == selected) {
                    Ok(())
                } else {
                    Err(self.invalid_answer(&format!("'{}' is not a known option", selected)))
                }
            }
            QuestionKind::MultipleSelect { options } => {
                let selected = value.as_list();
                if selected.is_empty() {
                    return Err(self.invalid_answer("expected at least one selection"));
                }
                for item in &selected {
                    if !options.iter().any(|o| &o.id == item) {
                        return Err(
                            self.invalid_answer(&format!("'{}' is not a known option", item))
                        );
                    }
                }
                Ok(())
            }
            QuestionKind::Text { .. } => match value {
                AnswerValue::Text(_) => Ok(()),
                _ => Err(self.invalid_answer("expected free text")),
            },
        }
    }

    fn invalid_answer(&self, message: &str) -> EngineError {
        EngineError::InvalidAnswer {
            id: self.id.clone(),
            message: message.to_string(),
        }
    }
}
