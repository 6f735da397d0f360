//! Property tests for the engine's structural invariants.

use proptest::prelude::*;

use payroll_config_engine::engine::{generate_pay_periods, generate_payroll_areas};
use payroll_config_engine::models::{AnswerSet, AnswerValue, PayrollArea};

fn weekly_answers(business_names: &str, regions: Vec<String>) -> AnswerSet {
    AnswerSet::from([
        ("q1_frequencies", AnswerValue::from(vec!["weekly"])),
        ("q1_weekly_pattern", AnswerValue::from("mon-sun")),
        ("q1_weekly_payday", AnswerValue::from("friday")),
        ("business_weekly_monsun_friday", AnswerValue::from("yes")),
        (
            "business_names_weekly_monsun_friday",
            AnswerValue::from(business_names),
        ),
        (
            "geographic_weekly_monsun_friday",
            AnswerValue::from("multiple"),
        ),
        (
            "regions_weekly_monsun_friday",
            AnswerValue::List(regions),
        ),
    ])
}

proptest! {
    /// Generated descriptions never exceed the 20-character SAP limit, no
    /// matter what business unit names and regions the user supplies.
    #[test]
    fn prop_description_stays_within_limit(
        business_names in "[a-zA-Z ,]{0,60}",
        regions in proptest::collection::vec("[a-z_]{1,20}", 1..4),
    ) {
        let answers = weekly_answers(&business_names, regions);
        for area in generate_payroll_areas(&answers) {
            prop_assert!(area.description.chars().count() <= 20);
        }
    }

    /// Identical answer sets always derive identical areas.
    #[test]
    fn prop_generation_is_deterministic(
        business_names in "[a-zA-Z ,]{0,40}",
    ) {
        let answers = weekly_answers(&business_names, vec!["hawaii".to_string()]);
        prop_assert_eq!(
            generate_payroll_areas(&answers),
            generate_payroll_areas(&answers)
        );
    }

    /// Area codes are always sequential Z1..Zn and every area of one
    /// calendar combination shares a calendar id.
    #[test]
    fn prop_codes_are_sequential(
        regions in proptest::collection::vec("[a-z]{2,10}", 1..5),
    ) {
        let answers = weekly_answers("IT, Finance", regions);
        let areas = generate_payroll_areas(&answers);

        for (i, area) in areas.iter().enumerate() {
            let expected_code = format!("Z{}", i + 1);
            prop_assert_eq!(area.code.as_str(), expected_code.as_str());
            prop_assert_eq!(area.calendar_id.as_str(), "80");
        }
    }

    /// Pay period rows never overlap and never leave a gap for the
    /// fixed-window frequencies.
    #[test]
    fn prop_weekly_periods_are_contiguous(years in 1u32..6) {
        let area = PayrollArea {
            code: "Z1".to_string(),
            description: "Wkly PDAY Fri".to_string(),
            frequency: "weekly".to_string(),
            period_pattern: "mon-sun".to_string(),
            pay_day: "friday".to_string(),
            calendar_id: "80".to_string(),
            employee_count: 0,
            business_unit: None,
            region: None,
            reasoning: vec![],
        };

        let rows = generate_pay_periods(&area, years);
        prop_assert_eq!(rows.len(), 52 * years as usize);

        for pair in rows.windows(2) {
            let gap = pair[1].period_begin_date - pair[0].period_end_date;
            prop_assert_eq!(gap.num_days(), 1);
        }
    }
}
