//! Answer values and the accumulated answer set.
//!
//! Answers are the engine's only input: every routing and derivation
//! operation is a pure function of the [`AnswerSet`] collected so far.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single answer value.
///
/// Answers arrive from the questionnaire frontend as free text, a yes/no
/// boolean, or a multi-select list. The engine coerces scalars to
/// single-element lists where a list is expected; values of the wrong shape
/// are treated as absent rather than failing hard.
///
/// # Example
///
/// ```
/// use payroll_config_engine::models::AnswerValue;
///
/// let answer = AnswerValue::from("weekly");
/// assert_eq!(answer.as_list(), vec!["weekly".to_string()]);
/// assert!(answer.is_exactly("weekly"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// A yes/no style boolean answer.
    Bool(bool),
    /// A free-text or single-choice answer.
    Text(String),
    /// A multi-select answer.
    List(Vec<String>),
}

impl AnswerValue {
    /// Returns the answer as text, if it is a text answer.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the answer as a boolean, if it is a boolean answer.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            AnswerValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the answer as a list of strings.
    ///
    /// A scalar text answer is coerced to a single-element list. A boolean
    /// has no list interpretation and yields an empty list.
    pub fn as_list(&self) -> Vec<String> {
        match self {
            AnswerValue::List(items) => items.clone(),
            AnswerValue::Text(s) => vec![s.clone()],
            AnswerValue::Bool(_) => Vec::new(),
        }
    }

    /// Checks whether the answer is exactly the given text value.
    ///
    /// Only text answers compare equal; booleans and lists never match.
    pub fn is_exactly(&self, value: &str) -> bool {
        matches!(self, AnswerValue::Text(s) if s == value)
    }

    /// Checks whether the answer affirms a yes/no question.
    ///
    /// The literal text `"yes"` and the boolean `true` both count as yes.
    pub fn is_yes(&self) -> bool {
        matches!(self, AnswerValue::Text(s) if s == "yes") || matches!(self, AnswerValue::Bool(true))
    }

    /// Checks whether the answer is the literal text `"no"`.
    pub fn is_no(&self) -> bool {
        self.is_exactly("no")
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

impl From<bool> for AnswerValue {
    fn from(value: bool) -> Self {
        AnswerValue::Bool(value)
    }
}

impl From<Vec<String>> for AnswerValue {
    fn from(value: Vec<String>) -> Self {
        AnswerValue::List(value)
    }
}

impl From<Vec<&str>> for AnswerValue {
    fn from(value: Vec<&str>) -> Self {
        AnswerValue::List(value.into_iter().map(str::to_string).collect())
    }
}

/// The accumulated set of answers for a session.
///
/// The answer set grows monotonically: keys are never removed, and the
/// router never re-asks an answered question. Re-recording an existing key
/// overwrites the previous value (last-write-wins) but does not invalidate
/// later answers that were collected under the old value.
///
/// Iteration order is the lexicographic key order, so every derived output
/// is deterministic for a given set of answers.
///
/// # Example
///
/// ```
/// use payroll_config_engine::models::{AnswerSet, AnswerValue};
///
/// let mut answers = AnswerSet::new();
/// answers.record("q1_frequencies", AnswerValue::from(vec!["weekly"]));
/// assert!(answers.contains("q1_frequencies"));
/// assert_eq!(answers.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    entries: BTreeMap<String, AnswerValue>,
}

impl AnswerSet {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer for a question id.
    ///
    /// Overwrites any previous value for the same id.
    pub fn record(&mut self, question_id: impl Into<String>, value: AnswerValue) {
        self.entries.insert(question_id.into(), value);
    }

    /// Returns the answer for a question id, if present.
    pub fn get(&self, question_id: &str) -> Option<&AnswerValue> {
        self.entries.get(question_id)
    }

    /// Checks whether a question has been answered.
    pub fn contains(&self, question_id: &str) -> bool {
        self.entries.contains_key(question_id)
    }

    /// Returns the number of recorded answers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether no answers have been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(question_id, answer)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &AnswerValue)> {
        self.entries.iter()
    }
}

impl<const N: usize> From<[(&str, AnswerValue); N]> for AnswerSet {
    fn from(pairs: [(&str, AnswerValue); N]) -> Self {
        let mut set = AnswerSet::new();
        for (id, value) in pairs {
            set.record(id, value);
        }
        set
    }
}
