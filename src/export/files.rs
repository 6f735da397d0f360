//! The export file registry.

use crate::catalog::ConfigModule;
use crate::error::{EngineError, EngineResult};

/// One downloadable export file.
///
/// File ids are stable API: callers request a file by id and receive the
/// fixed filename. Ids are normalized on lookup (underscores become
/// hyphens, surrounding whitespace is dropped, case is folded).
///
/// # Example
///
/// ```
/// use payroll_config_engine::export::ExportFile;
///
/// let file = ExportFile::from_id("Pay_Period").unwrap();
/// assert_eq!(file, ExportFile::PayPeriod);
/// assert_eq!(file.filename(), "pay_period.csv");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFile {
    /// The generated payroll areas.
    PayrollAreas,
    /// The deduplicated calendar id definitions.
    CalendarId,
    /// The payroll area configuration rows.
    PayrollAreaConfig,
    /// The pay period schedule.
    PayPeriod,
    /// The pay date schedule.
    PayDate,
    /// The payment method records.
    PaymentMethod,
    /// The check number ranges.
    CheckRange,
    /// The pre-notification preference.
    PreNotification,
}

impl ExportFile {
    /// Every export file, in registry order.
    pub const ALL: [ExportFile; 8] = [
        ExportFile::PayrollAreas,
        ExportFile::CalendarId,
        ExportFile::PayrollAreaConfig,
        ExportFile::PayPeriod,
        ExportFile::PayDate,
        ExportFile::PaymentMethod,
        ExportFile::CheckRange,
        ExportFile::PreNotification,
    ];

    /// Resolves a file id, normalizing separators, whitespace, and case.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownExportFile`] for ids outside the
    /// registry; the engine never fabricates a file for an unknown id.
    pub fn from_id(raw: &str) -> EngineResult<Self> {
        let normalized = raw.replace('_', "-").trim().to_lowercase();
        Self::ALL
            .iter()
            .find(|file| file.id() == normalized)
            .copied()
            .ok_or_else(|| EngineError::UnknownExportFile {
                file_id: raw.to_string(),
            })
    }

    /// Returns the canonical file id.
    pub fn id(&self) -> &'static str {
        match self {
            ExportFile::PayrollAreas => "payroll-areas",
            ExportFile::CalendarId => "calendar-id",
            ExportFile::PayrollAreaConfig => "payroll-area-config",
            ExportFile::PayPeriod => "pay-period",
            ExportFile::PayDate => "pay-date",
            ExportFile::PaymentMethod => "payment-method",
            ExportFile::CheckRange => "check-range",
            ExportFile::PreNotification => "pre-notification",
        }
    }

    /// Returns the download filename.
    pub fn filename(&self) -> &'static str {
        match self {
            ExportFile::PayrollAreas => "payroll_areas.csv",
            ExportFile::CalendarId => "calendar_id.csv",
            ExportFile::PayrollAreaConfig => "payroll_area_config.csv",
            ExportFile::PayPeriod => "pay_period.csv",
            ExportFile::PayDate => "pay_date.csv",
            ExportFile::PaymentMethod => "payment_method.csv",
            ExportFile::CheckRange => "check_range.csv",
            ExportFile::PreNotification => "pre_notification.csv",
        }
    }

    /// Returns the module the file belongs to.
    pub fn module(&self) -> ConfigModule {
        match self {
            ExportFile::PayrollAreas
            | ExportFile::CalendarId
            | ExportFile::PayrollAreaConfig
            | ExportFile::PayPeriod
            | ExportFile::PayDate => ConfigModule::PayrollArea,
            ExportFile::PaymentMethod | ExportFile::CheckRange | ExportFile::PreNotification => {
                ConfigModule::PaymentMethod
            }
        }
    }
}
