//! Calendar combinations and pay frequencies.
//!
//! A calendar combination is a derived value, never stored: one distinct
//! (frequency, period pattern, payday) triple that requires its own
//! follow-up questions and its own shared calendar id.

use serde::{Deserialize, Serialize};

/// A pay frequency with a defined calendar cadence.
///
/// Frequencies arrive from answers as strings; [`PayFrequency::parse`]
/// recognizes the known cadences, and unrecognized strings fall through to
/// documented defaults at each call site (calendar base 90, weekly period
/// cadence).
///
/// # Example
///
/// ```
/// use payroll_config_engine::models::PayFrequency;
///
/// let freq = PayFrequency::parse("biweekly").unwrap();
/// assert_eq!(freq.calendar_base(), 20);
/// assert_eq!(freq.periods_per_year(), 26);
/// assert_eq!(freq.display_label(), "Bi-weekly");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayFrequency {
    /// 52 pay periods per year, 7-day windows.
    Weekly,
    /// 26 pay periods per year, 14-day windows.
    Biweekly,
    /// 24 pay periods per year, two per calendar month.
    Semimonthly,
    /// 12 pay periods per year, one per calendar month.
    Monthly,
}

impl PayFrequency {
    /// Parses a frequency answer string.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "weekly" => Some(PayFrequency::Weekly),
            "biweekly" => Some(PayFrequency::Biweekly),
            "semimonthly" => Some(PayFrequency::Semimonthly),
            "monthly" => Some(PayFrequency::Monthly),
            _ => None,
        }
    }

    /// Returns the wire name of the frequency.
    pub fn as_str(&self) -> &'static str {
        match self {
            PayFrequency::Weekly => "weekly",
            PayFrequency::Biweekly => "biweekly",
            PayFrequency::Semimonthly => "semimonthly",
            PayFrequency::Monthly => "monthly",
        }
    }

    /// Returns the human-readable frequency label.
    pub fn display_label(&self) -> &'static str {
        match self {
            PayFrequency::Weekly => "Weekly",
            PayFrequency::Biweekly => "Bi-weekly",
            PayFrequency::Semimonthly => "Semi-monthly",
            PayFrequency::Monthly => "Monthly",
        }
    }

    /// Returns the short form used in payroll area descriptions.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            PayFrequency::Weekly => "Wkly",
            PayFrequency::Biweekly => "BiWk",
            PayFrequency::Semimonthly => "SemiMo",
            PayFrequency::Monthly => "Mo",
        }
    }

    /// Returns the calendar-id base for this frequency.
    ///
    /// All payroll areas sharing a calendar combination share one calendar
    /// id of `base + running-area-count-at-assignment-time`.
    pub fn calendar_base(&self) -> u32 {
        match self {
            PayFrequency::Weekly => 80,
            PayFrequency::Biweekly => 20,
            PayFrequency::Semimonthly => 30,
            PayFrequency::Monthly => 40,
        }
    }

    /// Returns the number of pay periods generated per calendar year.
    pub fn periods_per_year(&self) -> u32 {
        match self {
            PayFrequency::Weekly => 52,
            PayFrequency::Biweekly => 26,
            PayFrequency::Semimonthly => 24,
            PayFrequency::Monthly => 12,
        }
    }
}

/// The calendar-id base used for frequencies with no recognized cadence.
pub(crate) const DEFAULT_CALENDAR_BASE: u32 = 90;

/// One distinct (frequency, period pattern, payday) combination.
///
/// The `key` is a normalized composite used both as a deterministic
/// identifier and as the suffix of the per-combo dynamic question ids
/// (`business_{key}`, `business_names_{key}`, `geographic_{key}`,
/// `regions_{key}`). Two combos with identical triples collapse to one key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCombo {
    /// Normalized `frequency_pattern_payday` composite (pattern separators stripped).
    pub key: String,
    /// Human-readable label, e.g. `Weekly Mon-Sun (Payday: Friday)`.
    pub label: String,
    /// The raw frequency answer, e.g. `weekly`.
    pub frequency: String,
    /// The period pattern, e.g. `mon-sun` or `1-15_16-end`.
    pub pattern: String,
    /// The payday answer, e.g. `friday`.
    pub payday: String,
}

impl CalendarCombo {
    /// The id of this combo's business-unit separation question.
    pub fn business_question_id(&self) -> String {
        format!("business_{}", self.key)
    }

    /// The id of this combo's business-unit names question.
    pub fn business_names_question_id(&self) -> String {
        format!("business_names_{}", self.key)
    }

    /// The id of this combo's geographic separation question.
    pub fn geographic_question_id(&self) -> String {
        format!("geographic_{}", self.key)
    }

    /// The id of this combo's region selection question.
    pub fn regions_question_id(&self) -> String {
        format!("regions_{}", self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_frequencies() {
        assert_eq!(PayFrequency::parse("weekly"), Some(PayFrequency::Weekly));
        assert_eq!(
            PayFrequency::parse("biweekly"),
            Some(PayFrequency::Biweekly)
        );
        assert_eq!(
            PayFrequency::parse("semimonthly"),
            Some(PayFrequency::Semimonthly)
        );
        assert_eq!(PayFrequency::parse("monthly"), Some(PayFrequency::Monthly));
    }

    #[test]
    fn test_parse_unknown_frequency_returns_none() {
        assert_eq!(PayFrequency::parse("quarterly"), None);
        assert_eq!(PayFrequency::parse("Weekly"), None);
    }

    #[test]
    fn test_calendar_bases() {
        assert_eq!(PayFrequency::Weekly.calendar_base(), 80);
        assert_eq!(PayFrequency::Biweekly.calendar_base(), 20);
        assert_eq!(PayFrequency::Semimonthly.calendar_base(), 30);
        assert_eq!(PayFrequency::Monthly.calendar_base(), 40);
    }

    #[test]
    fn test_periods_per_year() {
        assert_eq!(PayFrequency::Weekly.periods_per_year(), 52);
        assert_eq!(PayFrequency::Biweekly.periods_per_year(), 26);
        assert_eq!(PayFrequency::Semimonthly.periods_per_year(), 24);
        assert_eq!(PayFrequency::Monthly.periods_per_year(), 12);
    }

    #[test]
    fn test_dynamic_question_ids_use_combo_key() {
        let combo = CalendarCombo {
            key: "weekly_monsun_friday".to_string(),
            label: "Weekly Mon-Sun (Payday: Friday)".to_string(),
            frequency: "weekly".to_string(),
            pattern: "mon-sun".to_string(),
            payday: "friday".to_string(),
        };

        assert_eq!(
            combo.business_question_id(),
            "business_weekly_monsun_friday"
        );
        assert_eq!(
            combo.business_names_question_id(),
            "business_names_weekly_monsun_friday"
        );
        assert_eq!(
            combo.geographic_question_id(),
            "geographic_weekly_monsun_friday"
        );
        assert_eq!(combo.regions_question_id(), "regions_weekly_monsun_friday");
    }
}
