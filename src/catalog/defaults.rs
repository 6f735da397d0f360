//! Built-in question definitions.
//!
//! These mirror the questionnaire shipped with the product: the payroll
//! module's frequency/pattern/payday questions and the payment module's
//! method confirmations with their follow-ups.

use crate::models::{ChoiceOption, Question, QuestionKind, ShowIf};

fn weekday_options() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::new("monday", "Monday"),
        ChoiceOption::new("tuesday", "Tuesday"),
        ChoiceOption::new("wednesday", "Wednesday"),
        ChoiceOption::new("thursday", "Thursday"),
        ChoiceOption::new("friday", "Friday"),
    ]
}

fn week_pattern_options() -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::described("mon-sun", "Mon-Sun", "Periods run Monday through Sunday"),
        ChoiceOption::described("sun-sat", "Sun-Sat", "Periods run Sunday through Saturday"),
    ]
}

fn payday_question(freq: &str, freq_label: &str) -> Question {
    Question {
        id: format!("q1_{freq}_payday"),
        text: format!("What day of the week is payday for {freq_label} employees?"),
        kind: QuestionKind::MultipleChoice {
            options: weekday_options(),
        },
        show_if: None,
    }
}

fn yes_no_options(yes_description: &str, no_description: &str) -> Vec<ChoiceOption> {
    vec![
        ChoiceOption::described("yes", "Yes", yes_description),
        ChoiceOption::described("no", "No", no_description),
    ]
}

/// The payroll-area module's static questions, in flow order.
pub(super) fn payroll_area_questions() -> Vec<Question> {
    vec![
        Question {
            id: "q1_frequencies".to_string(),
            text: "Which pay frequencies does your organization use?".to_string(),
            kind: QuestionKind::MultipleSelect {
                options: vec![
                    ChoiceOption::described("weekly", "Weekly", "52 pay periods per year"),
                    ChoiceOption::described("biweekly", "Bi-weekly", "26 pay periods per year"),
                    ChoiceOption::described(
                        "semimonthly",
                        "Semi-monthly",
                        "24 pay periods per year",
                    ),
                    ChoiceOption::described("monthly", "Monthly", "12 pay periods per year"),
                ],
            },
            show_if: None,
        },
        Question {
            id: "q1_weekly_pattern".to_string(),
            text: "What is the weekly pay period pattern?".to_string(),
            kind: QuestionKind::MultipleChoice {
                options: week_pattern_options(),
            },
            show_if: None,
        },
        payday_question("weekly", "weekly"),
        Question {
            id: "q1_biweekly_pattern".to_string(),
            text: "What is the bi-weekly pay period pattern?".to_string(),
            kind: QuestionKind::MultipleChoice {
                options: week_pattern_options(),
            },
            show_if: None,
        },
        payday_question("biweekly", "bi-weekly"),
        Question {
            id: "q1_semimonthly_pattern".to_string(),
            text: "What is the semi-monthly pay period pattern?".to_string(),
            kind: QuestionKind::MultipleChoice {
                options: vec![ChoiceOption::described(
                    "1-15_16-end",
                    "1st-15th & 16th-End",
                    "Periods run from the 1st to the 15th and the 16th to month end",
                )],
            },
            show_if: None,
        },
        payday_question("semimonthly", "semi-monthly"),
        payday_question("monthly", "monthly"),
    ]
}

/// The payment-method module's static questions, in flow order.
pub(super) fn payment_method_questions() -> Vec<Question> {
    vec![
        Question {
            id: "q1_payment_method_p".to_string(),
            text: "Is P - Direct Deposit (ACH) used?".to_string(),
            kind: QuestionKind::MultipleChoice {
                options: yes_no_options(
                    "Employees are paid by direct deposit",
                    "Direct deposit is not offered",
                ),
            },
            show_if: None,
        },
        Question {
            id: "q1_p_house_banks".to_string(),
            text: "Which house banks originate the ACH files?".to_string(),
            kind: QuestionKind::Text {
                placeholder: Some("e.g., Bank A, Bank B (comma-separated)".to_string()),
            },
            show_if: Some(ShowIf {
                question_id: "q1_payment_method_p".to_string(),
                answer_id: "yes".to_string(),
            }),
        },
        Question {
            id: "q1_p_ach_spec".to_string(),
            text: "What ACH file specification does your bank require?".to_string(),
            kind: QuestionKind::Text {
                placeholder: Some("e.g., NACHA standard file".to_string()),
            },
            show_if: Some(ShowIf {
                question_id: "q1_payment_method_p".to_string(),
                answer_id: "yes".to_string(),
            }),
        },
        Question {
            id: "q2_payment_method_q".to_string(),
            text: "Is Q - Physical Check used?".to_string(),
            kind: QuestionKind::MultipleChoice {
                options: yes_no_options(
                    "Some employees receive printed checks",
                    "No checks are printed",
                ),
            },
            show_if: None,
        },
        Question {
            id: "q2_q_volume".to_string(),
            text: "Roughly how many checks are printed per pay period?".to_string(),
            kind: QuestionKind::Text {
                placeholder: Some("e.g., 200 checks per pay period".to_string()),
            },
            show_if: Some(ShowIf {
                question_id: "q2_payment_method_q".to_string(),
                answer_id: "yes".to_string(),
            }),
        },
        Question {
            id: "q2_q_check_range".to_string(),
            text: "What check number range is reserved for payroll?".to_string(),
            kind: QuestionKind::Text {
                placeholder: Some("e.g., 100000-199999".to_string()),
            },
            show_if: Some(ShowIf {
                question_id: "q2_payment_method_q".to_string(),
                answer_id: "yes".to_string(),
            }),
        },
        Question {
            id: "q3_payment_method_k".to_string(),
            text: "Is K - Pay Card (Debit Card) used?".to_string(),
            kind: QuestionKind::MultipleChoice {
                options: yes_no_options(
                    "Employees can be paid onto a pay card",
                    "Pay cards are not offered",
                ),
            },
            show_if: None,
        },
        Question {
            id: "q4_payment_method_m".to_string(),
            text: "Is M - Manual / Off-cycle Check used?".to_string(),
            kind: QuestionKind::MultipleChoice {
                options: yes_no_options(
                    "Off-cycle corrections are paid by manual check",
                    "No manual checks are issued",
                ),
            },
            show_if: None,
        },
        Question {
            id: "q5_pre_note_confirmation".to_string(),
            text: "We recommend not using the pre-note process and relying on check \
                   replacement for failed transfers. Do you agree?"
                .to_string(),
            kind: QuestionKind::MultipleChoice {
                options: vec![
                    ChoiceOption::described("agree", "Agree", "Skip the pre-note process"),
                    ChoiceOption::described(
                        "disagree",
                        "Disagree",
                        "Run a pre-note cycle before the first deposit",
                    ),
                ],
            },
            show_if: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payroll_flow_starts_with_frequencies() {
        let questions = payroll_area_questions();
        assert_eq!(questions[0].id, "q1_frequencies");
    }

    #[test]
    fn test_every_frequency_has_a_payday_question() {
        let questions = payroll_area_questions();
        for freq in ["weekly", "biweekly", "semimonthly", "monthly"] {
            let id = format!("q1_{freq}_payday");
            assert!(
                questions.iter().any(|q| q.id == id),
                "missing payday question for {freq}"
            );
        }
    }

    #[test]
    fn test_monthly_has_no_pattern_question() {
        let questions = payroll_area_questions();
        assert!(!questions.iter().any(|q| q.id == "q1_monthly_pattern"));
    }

    #[test]
    fn test_payment_follow_ups_are_gated_on_yes() {
        let questions = payment_method_questions();
        let house_banks = questions
            .iter()
            .find(|q| q.id == "q1_p_house_banks")
            .unwrap();
        let show_if = house_banks.show_if.as_ref().unwrap();
        assert_eq!(show_if.question_id, "q1_payment_method_p");
        assert_eq!(show_if.answer_id, "yes");
    }

    #[test]
    fn test_payment_flow_ends_with_pre_note() {
        let questions = payment_method_questions();
        assert_eq!(questions.last().unwrap().id, "q5_pre_note_confirmation");
    }
}
