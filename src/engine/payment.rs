//! Payment method record generation.
//!
//! Five independent checks against fixed answer keys, each yielding at
//! most one record. A method's record is emitted only when its governing
//! yes/no question was answered; an unanswered question produces nothing.
//! The pre-note preference is emitted whenever its answer exists,
//! independent of the other four.

use tracing::info;

use crate::models::{AnswerSet, AnswerValue, PaymentMethodRecord};

fn detail(answers: &AnswerSet, question_id: &str) -> Option<String> {
    answers
        .get(question_id)
        .and_then(|a| a.as_text().map(str::to_string))
}

fn raw_answer_string(value: &AnswerValue) -> String {
    match value {
        AnswerValue::Text(s) => s.clone(),
        AnswerValue::Bool(b) => b.to_string(),
        AnswerValue::List(items) => items.join(", "),
    }
}

/// Generates the payment method records from collected answers.
///
/// Emission order is fixed: P, Q, K, M, pre-note. The literal strings
/// `"yes"`/`"no"` and the boolean `true` are accepted for the yes/no
/// questions; any other value leaves that method without a record.
///
/// # Example
///
/// ```
/// use payroll_config_engine::engine::generate_payment_methods;
/// use payroll_config_engine::models::{AnswerSet, AnswerValue};
///
/// let answers = AnswerSet::from([
///     ("q3_payment_method_k", AnswerValue::from("no")),
/// ]);
///
/// let records = generate_payment_methods(&answers);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].code(), "K");
/// assert_eq!(records[0].used(), Some(false));
/// ```
pub fn generate_payment_methods(answers: &AnswerSet) -> Vec<PaymentMethodRecord> {
    let mut records = Vec::new();

    // P: Direct Deposit ACH
    if let Some(answer) = answers.get("q1_payment_method_p") {
        if answer.is_yes() {
            records.push(PaymentMethodRecord::Ach {
                used: true,
                house_banks: detail(answers, "q1_p_house_banks"),
                ach_file_spec: detail(answers, "q1_p_ach_spec"),
                reasoning: vec![
                    "Customer confirmed P - Direct Deposit ACH is used.".to_string(),
                    "Collected house bank names and ACH file specification.".to_string(),
                ],
            });
        } else if answer.is_no() {
            records.push(PaymentMethodRecord::Ach {
                used: false,
                house_banks: None,
                ach_file_spec: None,
                reasoning: vec![
                    "Customer confirmed P - Direct Deposit ACH is not used.".to_string(),
                ],
            });
        }
    }

    // Q: Physical Check
    if let Some(answer) = answers.get("q2_payment_method_q") {
        if answer.is_yes() {
            records.push(PaymentMethodRecord::Check {
                used: true,
                check_volume: detail(answers, "q2_q_volume"),
                check_number_range: detail(answers, "q2_q_check_range"),
                reasoning: vec![
                    "Customer confirmed Q - Physical Check is used.".to_string(),
                    "Collected volume and check number range details.".to_string(),
                ],
            });
        } else if answer.is_no() {
            records.push(PaymentMethodRecord::Check {
                used: false,
                check_volume: None,
                check_number_range: None,
                reasoning: vec!["Customer confirmed Q - Physical Check is not used.".to_string()],
            });
        }
    }

    // K: Pay Card (Debit Card)
    if let Some(answer) = answers.get("q3_payment_method_k") {
        if answer.is_yes() {
            records.push(PaymentMethodRecord::PayCard {
                used: true,
                reasoning: vec![
                    "Customer confirmed K - Pay Card (Debit Card) is used.".to_string(),
                ],
            });
        } else if answer.is_no() {
            records.push(PaymentMethodRecord::PayCard {
                used: false,
                reasoning: vec![
                    "Customer confirmed K - Pay Card (Debit Card) is not used.".to_string(),
                ],
            });
        }
    }

    // M: Manual / Off-cycle Check
    if let Some(answer) = answers.get("q4_payment_method_m") {
        if answer.is_yes() {
            records.push(PaymentMethodRecord::ManualCheck {
                used: true,
                reasoning: vec![
                    "Customer confirmed M - Manual / Off-cycle Check is used.".to_string(),
                ],
            });
        } else if answer.is_no() {
            records.push(PaymentMethodRecord::ManualCheck {
                used: false,
                reasoning: vec![
                    "Customer confirmed M - Manual / Off-cycle Check is not used.".to_string(),
                ],
            });
        }
    }

    // Pre-note preference: a global setting, not a payment method. Emitted
    // whenever the question was answered at all.
    if let Some(answer) = answers.get("q5_pre_note_confirmation") {
        records.push(PaymentMethodRecord::PreNote {
            agree_no_pre_note: answer.is_exactly("agree"),
            raw_answer: raw_answer_string(answer),
            reasoning: vec![
                "Customer responded to recommendation to NOT use pre-note and rely on check \
                 replacement for failed transfers."
                    .to_string(),
            ],
        });
    }

    info!(record_count = records.len(), "generated payment methods");
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_answer_set_emits_all_records() {
        let answers = AnswerSet::from([
            ("q1_payment_method_p", AnswerValue::from("yes")),
            ("q1_p_house_banks", AnswerValue::from("Bank A, Bank B")),
            ("q1_p_ach_spec", AnswerValue::from("NACHA standard file")),
            ("q2_payment_method_q", AnswerValue::from("yes")),
            ("q2_q_volume", AnswerValue::from("200 checks per pay period")),
            ("q2_q_check_range", AnswerValue::from("100000-199999")),
            ("q3_payment_method_k", AnswerValue::from("no")),
            ("q4_payment_method_m", AnswerValue::from("yes")),
            ("q5_pre_note_confirmation", AnswerValue::from("agree")),
        ]);

        let records = generate_payment_methods(&answers);
        let codes: Vec<&str> = records.iter().map(|r| r.code()).collect();
        assert_eq!(codes, vec!["P", "Q", "K", "M", "PRE_NOTE"]);

        let PaymentMethodRecord::Ach {
            used,
            house_banks,
            ach_file_spec,
            ..
        } = &records[0]
        else {
            panic!("expected ACH record first");
        };
        assert!(*used);
        assert_eq!(house_banks.as_deref(), Some("Bank A, Bank B"));
        assert_eq!(ach_file_spec.as_deref(), Some("NACHA standard file"));
    }

    #[test]
    fn test_unanswered_methods_are_absent_not_unused() {
        let answers = AnswerSet::from([
            ("q1_payment_method_p", AnswerValue::from("yes")),
            ("q3_payment_method_k", AnswerValue::from("no")),
            ("q5_pre_note_confirmation", AnswerValue::from("agree")),
        ]);

        let records = generate_payment_methods(&answers);
        let codes: Vec<&str> = records.iter().map(|r| r.code()).collect();
        assert_eq!(codes, vec!["P", "K", "PRE_NOTE"]);
    }

    #[test]
    fn test_boolean_true_counts_as_yes() {
        let answers = AnswerSet::from([("q4_payment_method_m", AnswerValue::from(true))]);
        let records = generate_payment_methods(&answers);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].used(), Some(true));
    }

    #[test]
    fn test_boolean_false_emits_nothing() {
        let answers = AnswerSet::from([("q4_payment_method_m", AnswerValue::from(false))]);
        assert!(generate_payment_methods(&answers).is_empty());
    }

    #[test]
    fn test_no_answer_collects_no_details() {
        let answers = AnswerSet::from([
            ("q2_payment_method_q", AnswerValue::from("no")),
            // Stale detail answers must not leak into an unused record.
            ("q2_q_volume", AnswerValue::from("500")),
        ]);

        let records = generate_payment_methods(&answers);
        let PaymentMethodRecord::Check {
            used, check_volume, ..
        } = &records[0]
        else {
            panic!("expected check record");
        };
        assert!(!used);
        assert_eq!(*check_volume, None);
    }

    #[test]
    fn test_pre_note_disagree() {
        let answers =
            AnswerSet::from([("q5_pre_note_confirmation", AnswerValue::from("disagree"))]);
        let records = generate_payment_methods(&answers);

        let PaymentMethodRecord::PreNote {
            agree_no_pre_note,
            raw_answer,
            ..
        } = &records[0]
        else {
            panic!("expected pre-note record");
        };
        assert!(!agree_no_pre_note);
        assert_eq!(raw_answer, "disagree");
    }

    #[test]
    fn test_pre_note_emitted_independently() {
        let answers = AnswerSet::from([("q5_pre_note_confirmation", AnswerValue::from("agree"))]);
        let records = generate_payment_methods(&answers);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].code(), "PRE_NOTE");
    }

    #[test]
    fn test_empty_answers_emit_nothing() {
        assert!(generate_payment_methods(&AnswerSet::new()).is_empty());
    }

    #[test]
    fn test_generation_is_deterministic() {
        let answers = AnswerSet::from([
            ("q1_payment_method_p", AnswerValue::from("yes")),
            ("q5_pre_note_confirmation", AnswerValue::from("agree")),
        ]);
        assert_eq!(
            generate_payment_methods(&answers),
            generate_payment_methods(&answers)
        );
    }
}
