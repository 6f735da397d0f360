//! Payroll area generation.
//!
//! Expands completed answers into the concrete list of payroll areas: the
//! cross product of business units and regions per calendar combination,
//! with sequential codes and shared calendar ids.

use tracing::info;

use crate::models::{AnswerSet, CalendarCombo, DEFAULT_CALENDAR_BASE, PayFrequency, PayrollArea};

use super::combos::{capitalize, resolve_calendar_combos};

/// Resolves the business units of one combo.
///
/// Only a business answer of exactly `"yes"` triggers separation. The
/// names answer splits on commas with trimming; when nothing usable
/// remains the combo falls back to a single unattributed area.
fn business_units(combo: &CalendarCombo, answers: &AnswerSet) -> Vec<Option<String>> {
    let separated = answers
        .get(&combo.business_question_id())
        .is_some_and(|a| a.is_exactly("yes"));
    if !separated {
        return vec![None];
    }

    let raw = answers
        .get(&combo.business_names_question_id())
        .and_then(|a| a.as_text().map(str::to_string))
        .unwrap_or_default();

    let units: Vec<Option<String>> = raw
        .split(',')
        .map(str::trim)
        .filter(|unit| !unit.is_empty())
        .map(|unit| Some(unit.to_string()))
        .collect();

    if units.is_empty() { vec![None] } else { units }
}

/// Resolves the regions of one combo.
///
/// Only a geographic answer of exactly `"multiple"` triggers separation;
/// an absent regions answer defaults to mainland.
fn regions(combo: &CalendarCombo, answers: &AnswerSet) -> Vec<Option<String>> {
    let separated = answers
        .get(&combo.geographic_question_id())
        .is_some_and(|a| a.is_exactly("multiple"));
    if !separated {
        return vec![None];
    }

    match answers.get(&combo.regions_question_id()) {
        Some(answer) => answer.as_list().into_iter().map(Some).collect(),
        None => vec![Some("mainland".to_string())],
    }
}

/// Builds the SAP description for one area, truncated to 20 characters.
fn build_description(
    frequency: &str,
    payday: &str,
    business_unit: Option<&str>,
    region: Option<&str>,
) -> String {
    let frequency_abbrev = PayFrequency::parse(frequency)
        .map(|f| f.abbreviation().to_string())
        .unwrap_or_else(|| frequency.chars().take(4).collect());

    let payday_abbrev = if payday.is_empty() {
        "Fri".to_string()
    } else {
        capitalize(&payday.chars().take(3).collect::<String>())
    };

    let mut parts = vec![frequency_abbrev, format!("PDAY {payday_abbrev}")];

    if let Some(unit) = business_unit {
        parts.push(unit.chars().take(6).collect());
    }

    if let Some(region) = region {
        if region != "mainland" {
            let abbrev = match region {
                "hawaii" => "HI".to_string(),
                "puerto_rico" => "PR".to_string(),
                "alaska" => "AK".to_string(),
                other => other.chars().take(2).collect::<String>().to_uppercase(),
            };
            parts.push(abbrev);
        }
    }

    parts.join(" ").chars().take(20).collect()
}

/// Generates the payroll areas from completed answers.
///
/// Output order and codes are fully determined by combo order (frequency
/// selection order) and the business-unit/region list order; no sorting is
/// applied. Each combo's calendar id is fixed before its cross product:
/// `base(frequency) + areas emitted so far`, so every area of a combo
/// shares one id.
///
/// # Example
///
/// ```
/// use payroll_config_engine::engine::generate_payroll_areas;
/// use payroll_config_engine::models::{AnswerSet, AnswerValue};
///
/// let answers = AnswerSet::from([
///     ("q1_frequencies", AnswerValue::from(vec!["weekly"])),
///     ("q1_weekly_pattern", AnswerValue::from("mon-sun")),
///     ("q1_weekly_payday", AnswerValue::from("friday")),
///     ("business_weekly_monsun_friday", AnswerValue::from("no")),
///     ("geographic_weekly_monsun_friday", AnswerValue::from("mainland_only")),
/// ]);
///
/// let areas = generate_payroll_areas(&answers);
/// assert_eq!(areas.len(), 1);
/// assert_eq!(areas[0].code, "Z1");
/// assert_eq!(areas[0].calendar_id, "80");
/// ```
pub fn generate_payroll_areas(answers: &AnswerSet) -> Vec<PayrollArea> {
    let combos = resolve_calendar_combos(answers);
    let mut areas: Vec<PayrollArea> = Vec::new();

    for combo in &combos {
        let units = business_units(combo, answers);
        let combo_regions = regions(combo, answers);

        let base = PayFrequency::parse(&combo.frequency)
            .map(|freq| freq.calendar_base())
            .unwrap_or(DEFAULT_CALENDAR_BASE);
        // Fixed per combo, before the cross product: every area of this
        // combo shares the id.
        let calendar_id = (base as usize + areas.len()).to_string();

        for unit in &units {
            for region in &combo_regions {
                let code = format!("Z{}", areas.len() + 1);
                let description = build_description(
                    &combo.frequency,
                    &combo.payday,
                    unit.as_deref(),
                    region.as_deref(),
                );

                let mut reasoning = vec![
                    format!("Pay frequency: {}", combo.frequency),
                    format!("Period pattern: {}", combo.pattern),
                    format!("Pay day: {}", combo.payday),
                ];
                if let Some(unit) = unit {
                    reasoning.push(format!("Business unit: {unit}"));
                }
                if let Some(region) = region {
                    if region != "mainland" {
                        reasoning.push(format!("Region: {region}"));
                    }
                }

                areas.push(PayrollArea {
                    code,
                    description,
                    frequency: combo.frequency.clone(),
                    period_pattern: combo.pattern.clone(),
                    pay_day: combo.payday.clone(),
                    calendar_id: calendar_id.clone(),
                    employee_count: 0,
                    business_unit: unit.clone(),
                    region: region.clone().filter(|r| r != "mainland"),
                    reasoning,
                });
            }
        }
    }

    info!(
        combo_count = combos.len(),
        area_count = areas.len(),
        "generated payroll areas"
    );
    areas
}
