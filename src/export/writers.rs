//! Fixed-column CSV writers.
//!
//! Every writer emits a header row followed by data rows with `\n` record
//! terminators. Dates render as `YYYYMMDD` and period numbers are
//! zero-padded to two digits, per the SAP import layout.

use chrono::NaiveDate;
use csv::Writer;

use crate::engine::{
    CALENDAR_START_DATE, DATE_MODIFIER, PAYROLL_AREA_TEXT, RUN_PAYROLL, TIME_UNIT,
    generate_pay_dates, generate_pay_periods,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{CheckRange, PayFrequency, PaymentMethodRecord, PayrollArea};

fn into_csv_string(writer: Writer<Vec<u8>>) -> EngineResult<String> {
    let bytes = writer.into_inner().map_err(|e| EngineError::CsvError {
        message: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| EngineError::CsvError {
        message: e.to_string(),
    })
}

fn format_date_padded(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

fn frequency_description(frequency: &str) -> String {
    PayFrequency::parse(frequency)
        .map(|f| f.display_label().to_string())
        .unwrap_or_else(|| frequency.to_string())
}

/// Renders the payroll areas file.
pub fn payroll_areas_csv(areas: &[PayrollArea]) -> EngineResult<String> {
    let mut writer = Writer::from_writer(vec![]);
    writer.write_record([
        "Code",
        "Description",
        "Frequency",
        "Period Pattern",
        "Pay Day",
        "Calendar ID",
        "Employee Count",
        "Business Unit",
        "Region",
    ])?;

    for area in areas {
        let employee_count = area.employee_count.to_string();
        writer.write_record([
            area.code.as_str(),
            area.description.as_str(),
            area.frequency.as_str(),
            area.period_pattern.as_str(),
            area.pay_day.as_str(),
            area.calendar_id.as_str(),
            employee_count.as_str(),
            area.business_unit.as_deref().unwrap_or(""),
            area.region.as_deref().unwrap_or(""),
        ])?;
    }

    into_csv_string(writer)
}

/// Renders the calendar id definitions file.
///
/// Calendar ids are deduplicated in first-seen order: all areas sharing a
/// calendar combination share one id and therefore one definition row.
pub fn calendar_id_csv(areas: &[PayrollArea]) -> EngineResult<String> {
    let mut writer = Writer::from_writer(vec![]);
    writer.write_record([
        "period_parameters",
        "period_parameter_name",
        "time_unit",
        "time_unit_desc",
        "start_date",
    ])?;

    let mut seen = std::collections::HashSet::new();
    for area in areas {
        if !seen.insert(area.calendar_id.clone()) {
            continue;
        }

        let frequency_desc = frequency_description(&area.frequency);
        let name = if area.description.is_empty() {
            format!("{frequency_desc} Payroll")
        } else {
            area.description.clone()
        };

        writer.write_record([
            area.calendar_id.as_str(),
            name.as_str(),
            TIME_UNIT,
            frequency_desc.as_str(),
            CALENDAR_START_DATE,
        ])?;
    }

    into_csv_string(writer)
}

/// Renders the payroll area configuration file.
pub fn payroll_area_config_csv(areas: &[PayrollArea]) -> EngineResult<String> {
    let mut writer = Writer::from_writer(vec![]);
    writer.write_record([
        "payroll_area",
        "payroll_area_text",
        "period_parameters",
        "run_payroll",
        "date_modifier",
    ])?;

    for area in areas {
        // The import layout keys the row by region where one exists.
        let payroll_area = area.region.as_deref().unwrap_or(area.code.as_str());
        writer.write_record([
            payroll_area,
            PAYROLL_AREA_TEXT,
            area.calendar_id.as_str(),
            RUN_PAYROLL,
            DATE_MODIFIER,
        ])?;
    }

    into_csv_string(writer)
}

/// Renders the pay period schedule file for one area.
pub fn pay_period_csv(area: &PayrollArea, num_years: u32) -> EngineResult<String> {
    let mut writer = Writer::from_writer(vec![]);
    writer.write_record([
        "period_parameters",
        "payroll_year",
        "payroll_period",
        "period_begin_date",
        "period_end_date",
        "prior_period_year",
        "prior_period_period",
    ])?;

    for row in generate_pay_periods(area, num_years) {
        let payroll_year = row.payroll_year.to_string();
        let payroll_period = format!("{:02}", row.payroll_period);
        let begin = format_date_padded(row.period_begin_date);
        let end = format_date_padded(row.period_end_date);
        let prior_year = row.prior_period_year.to_string();
        let prior_period = format!("{:02}", row.prior_period_period);
        writer.write_record([
            row.period_parameters.as_str(),
            payroll_year.as_str(),
            payroll_period.as_str(),
            begin.as_str(),
            end.as_str(),
            prior_year.as_str(),
            prior_period.as_str(),
        ])?;
    }

    into_csv_string(writer)
}

/// Renders the pay date schedule file for one area.
///
/// # Errors
///
/// Fails for semimonthly and monthly areas, whose pay dates the engine
/// does not generate.
pub fn pay_date_csv(area: &PayrollArea, num_years: u32) -> EngineResult<String> {
    let rows = generate_pay_dates(area, num_years)?;

    let mut writer = Writer::from_writer(vec![]);
    writer.write_record([
        "molga",
        "date_modifier",
        "period_parameters",
        "payroll_year",
        "payroll_period",
        "date_type",
        "date",
    ])?;

    for row in rows {
        let payroll_year = row.payroll_year.to_string();
        let payroll_period = format!("{:02}", row.payroll_period);
        let date = format_date_padded(row.date);
        writer.write_record([
            row.molga.as_str(),
            row.date_modifier.as_str(),
            row.period_parameters.as_str(),
            payroll_year.as_str(),
            payroll_period.as_str(),
            row.date_type.as_str(),
            date.as_str(),
        ])?;
    }

    into_csv_string(writer)
}

/// Renders the payment method file.
pub fn payment_method_csv(methods: &[PaymentMethodRecord]) -> EngineResult<String> {
    let mut writer = Writer::from_writer(vec![]);
    writer.write_record(["Payment_Method", "Description", "Used"])?;

    for method in methods {
        let used = match method.used() {
            Some(true) => "true",
            Some(false) => "false",
            None => "",
        };
        writer.write_record([method.code(), method.description(), used])?;
    }

    into_csv_string(writer)
}

/// Renders the check range file.
pub fn check_range_csv(ranges: &[CheckRange]) -> EngineResult<String> {
    let mut writer = Writer::from_writer(vec![]);
    writer.write_record(["Company_Code", "Bank_Account", "Check_Number_Range"])?;

    for range in ranges {
        writer.write_record([
            range.company_code.as_str(),
            range.bank_account.as_str(),
            range.check_number_range.as_str(),
        ])?;
    }

    into_csv_string(writer)
}

/// Renders the pre-notification preference file.
pub fn pre_notification_csv(required: bool) -> EngineResult<String> {
    let mut writer = Writer::from_writer(vec![]);
    writer.write_record(["Pre_Notification_Required"])?;
    writer.write_record([if required { "Yes" } else { "No" }])?;
    into_csv_string(writer)
}
