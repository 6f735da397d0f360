//! Dynamic per-calendar question synthesis.
//!
//! Business-unit and geographic separation are asked per calendar
//! combination, not globally. These questions are not present in the static
//! catalog: they are synthesized on demand, parameterized by the combo's
//! key and label, and carry no `showIf` predicate (the router decides their
//! eligibility procedurally).

use std::str::FromStr;

use crate::error::{EngineError, EngineResult};
use crate::models::{CalendarCombo, ChoiceOption, Question, QuestionKind};

/// The kinds of dynamic question that can be synthesized for a combo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DynamicQuestionKind {
    /// Whether the calendar is separated by business unit.
    BusinessUnit,
    /// Which business units use the calendar.
    BusinessUnitNames,
    /// Whether the calendar is separated by geographic region.
    Geographic,
    /// Which regions have employees on the calendar.
    Regions,
}

impl DynamicQuestionKind {
    /// Returns the wire name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            DynamicQuestionKind::BusinessUnit => "business",
            DynamicQuestionKind::BusinessUnitNames => "business_names",
            DynamicQuestionKind::Geographic => "geographic",
            DynamicQuestionKind::Regions => "regions",
        }
    }
}

impl FromStr for DynamicQuestionKind {
    type Err = EngineError;

    /// Parses a kind name; an unrecognized name is a contract violation of
    /// the caller, not a user-facing condition.
    fn from_str(value: &str) -> EngineResult<Self> {
        match value {
            "business" => Ok(DynamicQuestionKind::BusinessUnit),
            "business_names" => Ok(DynamicQuestionKind::BusinessUnitNames),
            "geographic" => Ok(DynamicQuestionKind::Geographic),
            "regions" => Ok(DynamicQuestionKind::Regions),
            other => Err(EngineError::UnknownDynamicKind {
                kind: other.to_string(),
            }),
        }
    }
}

/// Synthesizes the dynamic question of the given kind for a combo.
///
/// The produced shape is fixed per kind; only the text and id vary with the
/// combo's label and key.
///
/// # Example
///
/// ```
/// use payroll_config_engine::engine::{DynamicQuestionKind, dynamic_question};
/// use payroll_config_engine::models::CalendarCombo;
///
/// let combo = CalendarCombo {
///     key: "weekly_monsun_friday".to_string(),
///     label: "Weekly Mon-Sun (Payday: Friday)".to_string(),
///     frequency: "weekly".to_string(),
///     pattern: "mon-sun".to_string(),
///     payday: "friday".to_string(),
/// };
///
/// let question = dynamic_question(&combo, DynamicQuestionKind::BusinessUnit);
/// assert_eq!(question.id, "business_weekly_monsun_friday");
/// ```
pub fn dynamic_question(combo: &CalendarCombo, kind: DynamicQuestionKind) -> Question {
    let label = &combo.label;

    match kind {
        DynamicQuestionKind::BusinessUnit => Question {
            id: combo.business_question_id(),
            text: format!("Does {label} need to be separated by business unit?"),
            kind: QuestionKind::MultipleChoice {
                options: vec![
                    ChoiceOption::described(
                        "yes",
                        "Yes",
                        "This calendar needs separate areas per business unit",
                    ),
                    ChoiceOption::described(
                        "no",
                        "No",
                        "All business units can share this calendar",
                    ),
                ],
            },
            show_if: None,
        },
        DynamicQuestionKind::BusinessUnitNames => Question {
            id: combo.business_names_question_id(),
            text: format!("What business units use {label}?"),
            kind: QuestionKind::Text {
                placeholder: Some(
                    "e.g., Construction, Services, Corporate (comma-separated)".to_string(),
                ),
            },
            show_if: None,
        },
        DynamicQuestionKind::Geographic => Question {
            id: combo.geographic_question_id(),
            text: format!("Does {label} need to be separated by geographic region?"),
            kind: QuestionKind::MultipleChoice {
                options: vec![
                    ChoiceOption::described(
                        "mainland_only",
                        "Mainland US only",
                        "All employees in contiguous US states",
                    ),
                    ChoiceOption::described(
                        "multiple",
                        "Multiple regions",
                        "Employees in Hawaii, Puerto Rico, Alaska, etc.",
                    ),
                ],
            },
            show_if: None,
        },
        DynamicQuestionKind::Regions => Question {
            id: combo.regions_question_id(),
            text: format!("Which regions have employees on {label}?"),
            kind: QuestionKind::MultipleSelect {
                options: vec![
                    ChoiceOption::described("mainland", "Mainland US", "Contiguous 48 states"),
                    ChoiceOption::described("hawaii", "Hawaii", "Hawaii time zone"),
                    ChoiceOption::described("puerto_rico", "Puerto Rico", "Atlantic time zone"),
                    ChoiceOption::described("alaska", "Alaska", "Alaska time zone"),
                ],
            },
            show_if: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn combo() -> CalendarCombo {
        CalendarCombo {
            key: "biweekly_sunsat_thursday".to_string(),
            label: "Bi-weekly Sun-Sat (Payday: Thursday)".to_string(),
            frequency: "biweekly".to_string(),
            pattern: "sun-sat".to_string(),
            payday: "thursday".to_string(),
        }
    }

    #[test]
    fn test_business_question_shape() {
        let question = dynamic_question(&combo(), DynamicQuestionKind::BusinessUnit);
        assert_eq!(question.id, "business_biweekly_sunsat_thursday");
        assert_eq!(
            question.text,
            "Does Bi-weekly Sun-Sat (Payday: Thursday) need to be separated by business unit?"
        );
        assert_eq!(question.kind.name(), "multiple_choice");
        let option_ids: Vec<&str> = question.kind.options().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(option_ids, vec!["yes", "no"]);
        assert!(question.show_if.is_none());
    }

    #[test]
    fn test_business_names_question_is_free_text() {
        let question = dynamic_question(&combo(), DynamicQuestionKind::BusinessUnitNames);
        assert_eq!(question.id, "business_names_biweekly_sunsat_thursday");
        assert_eq!(question.kind.name(), "text");
    }

    #[test]
    fn test_geographic_question_options() {
        let question = dynamic_question(&combo(), DynamicQuestionKind::Geographic);
        let option_ids: Vec<&str> = question.kind.options().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(option_ids, vec!["mainland_only", "multiple"]);
    }

    #[test]
    fn test_regions_question_is_multi_select() {
        let question = dynamic_question(&combo(), DynamicQuestionKind::Regions);
        assert_eq!(question.kind.name(), "multiple_select");
        let option_ids: Vec<&str> = question.kind.options().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(option_ids, vec!["mainland", "hawaii", "puerto_rico", "alaska"]);
    }

    #[test]
    fn test_same_combo_and_kind_yield_identical_questions() {
        let a = dynamic_question(&combo(), DynamicQuestionKind::Regions);
        let b = dynamic_question(&combo(), DynamicQuestionKind::Regions);
        assert_eq!(a, b);
    }

    #[test]
    fn test_kind_parsing_round_trip() {
        for kind in [
            DynamicQuestionKind::BusinessUnit,
            DynamicQuestionKind::BusinessUnitNames,
            DynamicQuestionKind::Geographic,
            DynamicQuestionKind::Regions,
        ] {
            assert_eq!(kind.as_str().parse::<DynamicQuestionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_unknown_kind_name_is_rejected() {
        let result = "payday_names".parse::<DynamicQuestionKind>();
        assert!(matches!(
            result,
            Err(EngineError::UnknownDynamicKind { kind }) if kind == "payday_names"
        ));
    }
}
