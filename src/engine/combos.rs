//! Calendar combination resolution.
//!
//! Derives, from the frequency answers, the distinct calendar combinations
//! (frequency × period pattern × payday) that require their own follow-up
//! questions and calendar ids.

use std::collections::HashSet;

use crate::models::{AnswerSet, CalendarCombo, PayFrequency};

/// The question id holding the selected pay frequencies.
pub(crate) const FREQUENCIES_QUESTION_ID: &str = "q1_frequencies";

/// Uppercases the first character and lowercases the rest.
pub(crate) fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

/// Resolves the period pattern and its display label for a frequency.
///
/// Monthly calendars always run 1st to month end and never get a pattern
/// question; other frequencies read their pattern answer, falling back to
/// the conventional default when the answer is absent.
fn resolve_pattern(frequency: &str, answers: &AnswerSet) -> (String, String) {
    if frequency == "monthly" {
        return ("1-end".to_string(), "1st-End".to_string());
    }

    let answered = answers
        .get(&format!("q1_{frequency}_pattern"))
        .and_then(|a| a.as_text().map(str::to_string));

    if frequency == "semimonthly" {
        let pattern = answered.unwrap_or_else(|| "1-15_16-end".to_string());
        let label = match pattern.as_str() {
            "1-15_16-end" => "1st-15th & 16th-End".to_string(),
            other => other.to_string(),
        };
        (pattern, label)
    } else {
        let pattern = answered.unwrap_or_else(|| "mon-sun".to_string());
        let label = match pattern.as_str() {
            "mon-sun" => "Mon-Sun".to_string(),
            "sun-sat" => "Sun-Sat".to_string(),
            other => other.to_string(),
        };
        (pattern, label)
    }
}

/// Extracts all calendar combinations from the answers, in selection order.
///
/// One combo is produced per element of the `q1_frequencies` answer (a
/// scalar answer is coerced to a single-element list). Two identical
/// (frequency, pattern, payday) triples collapse to a single combo: the
/// normalized key is the identity, and duplicates are skipped.
///
/// # Example
///
/// ```
/// use payroll_config_engine::engine::resolve_calendar_combos;
/// use payroll_config_engine::models::{AnswerSet, AnswerValue};
///
/// let answers = AnswerSet::from([
///     ("q1_frequencies", AnswerValue::from(vec!["weekly"])),
///     ("q1_weekly_pattern", AnswerValue::from("mon-sun")),
///     ("q1_weekly_payday", AnswerValue::from("friday")),
/// ]);
///
/// let combos = resolve_calendar_combos(&answers);
/// assert_eq!(combos.len(), 1);
/// assert_eq!(combos[0].key, "weekly_monsun_friday");
/// assert_eq!(combos[0].label, "Weekly Mon-Sun (Payday: Friday)");
/// ```
pub fn resolve_calendar_combos(answers: &AnswerSet) -> Vec<CalendarCombo> {
    let frequencies = answers
        .get(FREQUENCIES_QUESTION_ID)
        .map(|a| a.as_list())
        .unwrap_or_default();

    let mut combos = Vec::new();
    let mut seen = HashSet::new();

    for frequency in frequencies {
        let (pattern, pattern_label) = resolve_pattern(&frequency, answers);

        let payday = answers
            .get(&format!("q1_{frequency}_payday"))
            .and_then(|a| a.as_text().map(str::to_string))
            .unwrap_or_else(|| "friday".to_string());
        let payday_label = capitalize(&payday);

        // Question ids cannot carry the pattern's separators.
        let pattern_key: String = pattern.chars().filter(|c| *c != '-' && *c != '_').collect();
        let key = format!("{frequency}_{pattern_key}_{payday}");
        if !seen.insert(key.clone()) {
            continue;
        }

        let frequency_label = PayFrequency::parse(&frequency)
            .map(|f| f.display_label().to_string())
            .unwrap_or_else(|| capitalize(&frequency));
        let label = format!("{frequency_label} {pattern_label} (Payday: {payday_label})");

        combos.push(CalendarCombo {
            key,
            label,
            frequency,
            pattern,
            payday,
        });
    }

    combos
}
