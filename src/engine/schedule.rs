//! Pay period and pay date sequence generation.
//!
//! Schedules are anchored at a fixed start date and generated per payroll
//! area: weekly and biweekly calendars step in fixed-size windows,
//! semimonthly and monthly calendars follow the calendar month. Pay dates
//! exist for weekly and biweekly calendars only; the weekday-snap rule for
//! uneven month lengths has no reference behavior, so semimonthly and
//! monthly pay dates are rejected rather than guessed.

use chrono::{Datelike, Duration, NaiveDate};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{PayDateRow, PayFrequency, PayPeriodRow, PayrollArea, Schedule};

/// SAP country grouping for the United States.
pub const MOLGA: &str = "10";
/// SAP date modifier applied to all generated rows.
pub const DATE_MODIFIER: &str = "01";
/// SAP date type for pay dates.
pub const DATE_TYPE: &str = "01";
/// SAP time unit for period parameters.
pub const TIME_UNIT: &str = "D";
/// SAP calendar validity start, `YYYYMMDD`.
pub const CALENDAR_START_DATE: &str = "19000101";
/// Fixed text for generated payroll area rows.
pub const PAYROLL_AREA_TEXT: &str = "Payroll Area";
/// SAP run-payroll marker.
pub const RUN_PAYROLL: &str = "X";

/// The fixed anchor date all schedules are generated from.
pub fn period_anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid anchor date")
}

/// Tracks the period counter that resets whenever the year changes
/// between consecutive rows.
struct PeriodSequencer {
    current_year: Option<i32>,
    counter: u32,
}

impl PeriodSequencer {
    fn new() -> Self {
        Self {
            current_year: None,
            counter: 0,
        }
    }

    fn next(&mut self, year: i32) -> u32 {
        if self.current_year != Some(year) {
            self.current_year = Some(year);
            self.counter = 1;
        } else {
            self.counter += 1;
        }
        self.counter
    }
}

/// Computes the last day of a month.
///
/// Adds four days to the 28th, then backs up to the day before that
/// month's first, so the computation holds for every month length.
fn last_day_of_month(year: i32, month: u32) -> NaiveDate {
    let into_next_month =
        NaiveDate::from_ymd_opt(year, month, 28).expect("valid day 28") + Duration::days(4);
    into_next_month
        .with_day(1)
        .expect("valid first of month")
        - Duration::days(1)
}

/// Maps a payday name to its Sunday-based weekday index.
fn weekday_index(name: &str) -> Option<i64> {
    match name {
        "sunday" => Some(0),
        "monday" => Some(1),
        "tuesday" => Some(2),
        "wednesday" => Some(3),
        "thursday" => Some(4),
        "friday" => Some(5),
        "saturday" => Some(6),
        _ => None,
    }
}

/// Finds the occurrence of the target weekday nearest to the base date.
///
/// Whichever of "forward to the next occurrence" or "backward to the
/// previous occurrence" has the smaller absolute day offset wins; ties
/// resolve forward. An unrecognized weekday name leaves the base date
/// unchanged.
fn nearest_weekday(base: NaiveDate, weekday_name: &str) -> NaiveDate {
    let Some(target) = weekday_index(weekday_name) else {
        return base;
    };

    let base_dow = i64::from(base.weekday().num_days_from_sunday());
    let forward = (target - base_dow + 7) % 7;
    let backward = (base_dow - target + 7) % 7;
    let offset = if forward <= backward {
        forward
    } else {
        -backward
    };
    base + Duration::days(offset)
}

/// Generates the pay period rows for one payroll area.
///
/// Weekly calendars emit 52 seven-day windows per year, biweekly 26
/// fourteen-day windows, semimonthly 24 rows (1st-15th and 16th-end per
/// month), monthly 12 full-month rows. An unrecognized frequency falls
/// back to the weekly cadence.
///
/// # Example
///
/// ```
/// use payroll_config_engine::engine::generate_pay_periods;
/// # use payroll_config_engine::models::PayrollArea;
/// # let area = PayrollArea {
/// #     code: "Z1".to_string(),
/// #     description: "Wkly PDAY Fri".to_string(),
/// #     frequency: "weekly".to_string(),
/// #     period_pattern: "mon-sun".to_string(),
/// #     pay_day: "friday".to_string(),
/// #     calendar_id: "80".to_string(),
/// #     employee_count: 0,
/// #     business_unit: None,
/// #     region: None,
/// #     reasoning: vec![],
/// # };
///
/// let periods = generate_pay_periods(&area, 1);
/// assert_eq!(periods.len(), 52);
/// ```
pub fn generate_pay_periods(area: &PayrollArea, num_years: u32) -> Vec<PayPeriodRow> {
    let anchor = period_anchor();
    let calendar_id = area.calendar_id.as_str();

    let mut rows = Vec::new();
    let mut sequencer = PeriodSequencer::new();

    let mut push_row = |rows: &mut Vec<PayPeriodRow>, begin: NaiveDate, end: NaiveDate| {
        let year = end.year();
        let period = sequencer.next(year);
        rows.push(PayPeriodRow {
            period_parameters: calendar_id.to_string(),
            payroll_year: year,
            payroll_period: period,
            period_begin_date: begin,
            period_end_date: end,
            prior_period_year: year,
            prior_period_period: period,
        });
    };

    match PayFrequency::parse(&area.frequency) {
        Some(PayFrequency::Biweekly) => {
            for i in 0..26 * i64::from(num_years) {
                let begin = anchor + Duration::days(i * 14);
                push_row(&mut rows, begin, begin + Duration::days(13));
            }
        }
        Some(PayFrequency::Semimonthly) => {
            let mut cursor = anchor;
            for _ in 0..12 * num_years {
                let (year, month) = (cursor.year(), cursor.month());
                let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid first of month");
                let fifteenth =
                    NaiveDate::from_ymd_opt(year, month, 15).expect("valid fifteenth");
                let sixteenth =
                    NaiveDate::from_ymd_opt(year, month, 16).expect("valid sixteenth");
                push_row(&mut rows, first, fifteenth);
                push_row(&mut rows, sixteenth, last_day_of_month(year, month));
                cursor = next_month_start(year, month);
            }
        }
        Some(PayFrequency::Monthly) => {
            let mut cursor = anchor;
            for _ in 0..12 * num_years {
                let (year, month) = (cursor.year(), cursor.month());
                let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid first of month");
                push_row(&mut rows, first, last_day_of_month(year, month));
                cursor = next_month_start(year, month);
            }
        }
        // Weekly, and the fallback cadence for unrecognized frequencies.
        Some(PayFrequency::Weekly) | None => {
            for i in 0..52 * i64::from(num_years) {
                let begin = anchor + Duration::days(i * 7);
                push_row(&mut rows, begin, begin + Duration::days(6));
            }
        }
    }

    debug!(
        calendar_id = %calendar_id,
        frequency = %area.frequency,
        row_count = rows.len(),
        "generated pay periods"
    );
    rows
}

fn next_month_start(year: i32, month: u32) -> NaiveDate {
    let (year, month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).expect("valid first of month")
}

/// Generates the pay date rows for one payroll area.
///
/// The first pay date snaps the anchor to the area's payday weekday via
/// the nearer-direction rule, then steps by 7 or 14 days. The period
/// counter resets on year change exactly as in pay-period generation.
///
/// # Errors
///
/// Returns [`EngineError::UnsupportedPayDateFrequency`] for any frequency
/// other than weekly or biweekly; the engine never fabricates a schedule
/// it has no rule for.
pub fn generate_pay_dates(area: &PayrollArea, num_years: u32) -> EngineResult<Vec<PayDateRow>> {
    let (step, per_year) = match PayFrequency::parse(&area.frequency) {
        Some(PayFrequency::Weekly) => (7i64, 52u32),
        Some(PayFrequency::Biweekly) => (14, 26),
        _ => {
            return Err(EngineError::UnsupportedPayDateFrequency {
                frequency: area.frequency.clone(),
            });
        }
    };

    let payday = area.pay_day.to_lowercase();
    let mut current = nearest_weekday(period_anchor(), &payday);

    let mut rows = Vec::new();
    let mut sequencer = PeriodSequencer::new();

    for _ in 0..per_year * num_years {
        let year = current.year();
        rows.push(PayDateRow {
            molga: MOLGA.to_string(),
            date_modifier: DATE_MODIFIER.to_string(),
            period_parameters: area.calendar_id.clone(),
            payroll_year: year,
            payroll_period: sequencer.next(year),
            date_type: DATE_TYPE.to_string(),
            date: current,
        });
        current = current + Duration::days(step);
    }

    debug!(
        calendar_id = %area.calendar_id,
        frequency = %area.frequency,
        row_count = rows.len(),
        "generated pay dates"
    );
    Ok(rows)
}

/// Emits the full exportable schedule for one payroll area.
///
/// # Errors
///
/// Propagates the pay-date frequency restriction: a semimonthly or monthly
/// area has no full schedule.
pub fn emit_schedule(area: &PayrollArea, num_years: u32) -> EngineResult<Schedule> {
    Ok(Schedule {
        periods: generate_pay_periods(area, num_years),
        dates: generate_pay_dates(area, num_years)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn area(frequency: &str, payday: &str) -> PayrollArea {
        PayrollArea {
            code: "Z1".to_string(),
            description: "Wkly PDAY Fri".to_string(),
            frequency: frequency.to_string(),
            period_pattern: "mon-sun".to_string(),
            pay_day: payday.to_string(),
            calendar_id: "80".to_string(),
            employee_count: 0,
            business_unit: None,
            region: None,
            reasoning: vec![],
        }
    }

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_weekly_periods_single_year() {
        let rows = generate_pay_periods(&area("weekly", "friday"), 1);
        assert_eq!(rows.len(), 52);

        assert_eq!(rows[0].period_begin_date, ymd(2024, 1, 1));
        assert_eq!(rows[0].period_end_date, ymd(2024, 1, 7));
        assert_eq!(rows[0].payroll_period, 1);

        // Seven-day spacing throughout, no year reset within 2024.
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(
                row.period_begin_date,
                ymd(2024, 1, 1) + Duration::days(i as i64 * 7)
            );
            assert_eq!(row.payroll_period, i as u32 + 1);
            assert_eq!(row.payroll_year, 2024);
            assert_eq!(row.prior_period_period, row.payroll_period);
        }
        assert_eq!(rows[51].period_end_date, ymd(2024, 12, 29));
    }

    #[test]
    fn test_weekly_periods_reset_on_year_change() {
        let rows = generate_pay_periods(&area("weekly", "friday"), 2);
        assert_eq!(rows.len(), 104);

        // Row 53 is the first whose end date falls in 2025.
        assert_eq!(rows[52].period_begin_date, ymd(2024, 12, 30));
        assert_eq!(rows[52].period_end_date, ymd(2025, 1, 5));
        assert_eq!(rows[52].payroll_year, 2025);
        assert_eq!(rows[52].payroll_period, 1);
        assert_eq!(rows[53].payroll_period, 2);
    }

    #[test]
    fn test_biweekly_periods() {
        let rows = generate_pay_periods(&area("biweekly", "friday"), 1);
        assert_eq!(rows.len(), 26);
        assert_eq!(rows[0].period_begin_date, ymd(2024, 1, 1));
        assert_eq!(rows[0].period_end_date, ymd(2024, 1, 14));
        assert_eq!(rows[1].period_begin_date, ymd(2024, 1, 15));
    }

    #[test]
    fn test_semimonthly_periods_follow_month_lengths() {
        let rows = generate_pay_periods(&area("semimonthly", "friday"), 1);
        assert_eq!(rows.len(), 24);

        assert_eq!(rows[0].period_begin_date, ymd(2024, 1, 1));
        assert_eq!(rows[0].period_end_date, ymd(2024, 1, 15));
        assert_eq!(rows[1].period_begin_date, ymd(2024, 1, 16));
        assert_eq!(rows[1].period_end_date, ymd(2024, 1, 31));

        // 2024 is a leap year.
        assert_eq!(rows[3].period_end_date, ymd(2024, 2, 29));
        // April has 30 days.
        assert_eq!(rows[7].period_end_date, ymd(2024, 4, 30));
        assert_eq!(rows[23].period_end_date, ymd(2024, 12, 31));
    }

    #[test]
    fn test_monthly_periods() {
        let rows = generate_pay_periods(&area("monthly", "friday"), 1);
        assert_eq!(rows.len(), 12);
        assert_eq!(rows[0].period_begin_date, ymd(2024, 1, 1));
        assert_eq!(rows[0].period_end_date, ymd(2024, 1, 31));
        assert_eq!(rows[1].period_end_date, ymd(2024, 2, 29));
        assert_eq!(rows[11].period_end_date, ymd(2024, 12, 31));
    }

    #[test]
    fn test_unknown_frequency_falls_back_to_weekly() {
        let rows = generate_pay_periods(&area("quarterly", "friday"), 1);
        assert_eq!(rows.len(), 52);
        assert_eq!(rows[0].period_end_date, ymd(2024, 1, 7));
    }

    #[test]
    fn test_period_rows_carry_calendar_id() {
        let rows = generate_pay_periods(&area("weekly", "friday"), 1);
        assert!(rows.iter().all(|r| r.period_parameters == "80"));
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(last_day_of_month(2024, 2), ymd(2024, 2, 29));
        assert_eq!(last_day_of_month(2023, 2), ymd(2023, 2, 28));
        assert_eq!(last_day_of_month(2024, 4), ymd(2024, 4, 30));
        assert_eq!(last_day_of_month(2024, 12), ymd(2024, 12, 31));
    }

    #[test]
    fn test_nearest_weekday_prefers_smaller_offset() {
        // 2024-01-01 is a Monday. Friday is 3 days back, 4 days forward.
        assert_eq!(nearest_weekday(ymd(2024, 1, 1), "friday"), ymd(2023, 12, 29));
        // Thursday is 3 days forward, 4 back.
        assert_eq!(nearest_weekday(ymd(2024, 1, 1), "thursday"), ymd(2024, 1, 4));
        // Saturday is 2 days back, 5 forward.
        assert_eq!(nearest_weekday(ymd(2024, 1, 1), "saturday"), ymd(2023, 12, 30));
        // Same weekday stays put.
        assert_eq!(nearest_weekday(ymd(2024, 1, 1), "monday"), ymd(2024, 1, 1));
        // Unknown names leave the base unchanged.
        assert_eq!(nearest_weekday(ymd(2024, 1, 1), "someday"), ymd(2024, 1, 1));
    }

    #[test]
    fn test_weekly_pay_dates_land_on_payday() {
        let rows = generate_pay_dates(&area("weekly", "friday"), 1).unwrap();
        assert_eq!(rows.len(), 52);

        assert_eq!(rows[0].date, ymd(2023, 12, 29));
        assert!(rows.iter().all(|r| r.date.weekday() == Weekday::Fri));
        assert!(rows.iter().all(|r| r.molga == "10"));
        assert!(rows.iter().all(|r| r.date_type == "01"));
    }

    #[test]
    fn test_pay_date_counter_resets_on_year_change() {
        let rows = generate_pay_dates(&area("weekly", "friday"), 1).unwrap();

        // The snapped first date falls in 2023; the counter restarts at
        // the first 2024 date.
        assert_eq!(rows[0].payroll_year, 2023);
        assert_eq!(rows[0].payroll_period, 1);
        assert_eq!(rows[1].date, ymd(2024, 1, 5));
        assert_eq!(rows[1].payroll_year, 2024);
        assert_eq!(rows[1].payroll_period, 1);
        assert_eq!(rows[2].payroll_period, 2);
    }

    #[test]
    fn test_biweekly_pay_dates_step_fourteen_days() {
        let rows = generate_pay_dates(&area("biweekly", "thursday"), 1).unwrap();
        assert_eq!(rows.len(), 26);
        assert_eq!(rows[0].date, ymd(2024, 1, 4));
        assert_eq!(rows[1].date, ymd(2024, 1, 18));
    }

    #[test]
    fn test_pay_dates_rejected_for_semimonthly() {
        let result = generate_pay_dates(&area("semimonthly", "friday"), 1);
        assert!(matches!(
            result,
            Err(EngineError::UnsupportedPayDateFrequency { frequency }) if frequency == "semimonthly"
        ));
    }

    #[test]
    fn test_pay_dates_rejected_for_monthly_and_unknown() {
        assert!(generate_pay_dates(&area("monthly", "friday"), 1).is_err());
        assert!(generate_pay_dates(&area("quarterly", "friday"), 1).is_err());
    }

    #[test]
    fn test_emit_schedule_bundles_periods_and_dates() {
        let schedule = emit_schedule(&area("biweekly", "friday"), 2).unwrap();
        assert_eq!(schedule.periods.len(), 52);
        assert_eq!(schedule.dates.len(), 52);
    }

    #[test]
    fn test_emit_schedule_propagates_pay_date_restriction() {
        assert!(emit_schedule(&area("monthly", "friday"), 1).is_err());
    }

    #[test]
    fn test_multi_year_generation_is_contiguous() {
        let rows = generate_pay_periods(&area("monthly", "friday"), 2);
        assert_eq!(rows.len(), 24);
        assert_eq!(rows[12].period_begin_date, ymd(2025, 1, 1));
        assert_eq!(rows[12].payroll_period, 1);
        assert_eq!(rows[12].payroll_year, 2025);
    }
}
