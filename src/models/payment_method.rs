//! Payment method configuration records.

use serde::{Deserialize, Serialize};

/// A generated SAP payment method configuration record.
///
/// At most one record exists per code. A record is emitted only when its
/// governing question was answered; an unanswered question produces no
/// record at all rather than a `used: false` one. The pre-note preference is
/// modeled as a pseudo payment-method record with its own payload.
///
/// # Example
///
/// ```
/// use payroll_config_engine::models::PaymentMethodRecord;
///
/// let record = PaymentMethodRecord::PayCard {
///     used: true,
///     reasoning: vec!["Customer confirmed K - Pay Card (Debit Card) is used.".to_string()],
/// };
/// assert_eq!(record.code(), "K");
/// assert_eq!(record.used(), Some(true));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum PaymentMethodRecord {
    /// P - Direct Deposit ACH.
    #[serde(rename = "P")]
    Ach {
        /// Whether the customer uses direct deposit.
        used: bool,
        /// House bank names collected when the method is used.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        house_banks: Option<String>,
        /// ACH file specification collected when the method is used.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ach_file_spec: Option<String>,
        /// Human-readable derivation trace.
        reasoning: Vec<String>,
    },
    /// Q - Physical Check.
    #[serde(rename = "Q")]
    Check {
        /// Whether the customer prints physical checks.
        used: bool,
        /// Expected check volume collected when the method is used.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        check_volume: Option<String>,
        /// Check number range collected when the method is used.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        check_number_range: Option<String>,
        /// Human-readable derivation trace.
        reasoning: Vec<String>,
    },
    /// K - Pay Card (Debit Card).
    #[serde(rename = "K")]
    PayCard {
        /// Whether the customer offers pay cards.
        used: bool,
        /// Human-readable derivation trace.
        reasoning: Vec<String>,
    },
    /// M - Manual / Off-cycle Check.
    #[serde(rename = "M")]
    ManualCheck {
        /// Whether the customer issues manual checks.
        used: bool,
        /// Human-readable derivation trace.
        reasoning: Vec<String>,
    },
    /// Pre-note process preference.
    #[serde(rename = "PRE_NOTE")]
    PreNote {
        /// Whether the customer agreed to skip the pre-note process.
        agree_no_pre_note: bool,
        /// The raw answer as given.
        raw_answer: String,
        /// Human-readable derivation trace.
        reasoning: Vec<String>,
    },
}

impl PaymentMethodRecord {
    /// Returns the SAP payment method code.
    pub fn code(&self) -> &'static str {
        match self {
            PaymentMethodRecord::Ach { .. } => "P",
            PaymentMethodRecord::Check { .. } => "Q",
            PaymentMethodRecord::PayCard { .. } => "K",
            PaymentMethodRecord::ManualCheck { .. } => "M",
            PaymentMethodRecord::PreNote { .. } => "PRE_NOTE",
        }
    }

    /// Returns the fixed description for the code.
    pub fn description(&self) -> &'static str {
        match self {
            PaymentMethodRecord::Ach { .. } => "Direct Deposit ACH",
            PaymentMethodRecord::Check { .. } => "Physical Check",
            PaymentMethodRecord::PayCard { .. } => "Pay Card / Debit Card",
            PaymentMethodRecord::ManualCheck { .. } => "Manual / Off-cycle Check",
            PaymentMethodRecord::PreNote { .. } => "Pre-note process preference",
        }
    }

    /// Returns the used flag, when the record carries one.
    ///
    /// The pre-note record is a preference, not a method, and has no flag.
    pub fn used(&self) -> Option<bool> {
        match self {
            PaymentMethodRecord::Ach { used, .. }
            | PaymentMethodRecord::Check { used, .. }
            | PaymentMethodRecord::PayCard { used, .. }
            | PaymentMethodRecord::ManualCheck { used, .. } => Some(*used),
            PaymentMethodRecord::PreNote { .. } => None,
        }
    }

    /// Returns the derivation trace.
    pub fn reasoning(&self) -> &[String] {
        match self {
            PaymentMethodRecord::Ach { reasoning, .. }
            | PaymentMethodRecord::Check { reasoning, .. }
            | PaymentMethodRecord::PayCard { reasoning, .. }
            | PaymentMethodRecord::ManualCheck { reasoning, .. }
            | PaymentMethodRecord::PreNote { reasoning, .. } => reasoning,
        }
    }
}

/// A check number range for one company code and bank account.
///
/// Supplied by the caller alongside generated payment methods; consumed by
/// the check-range export file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRange {
    /// SAP company code.
    pub company_code: String,
    /// The bank account the checks draw on.
    pub bank_account: String,
    /// The reserved check number range, e.g. `100000-199999`.
    pub check_number_range: String,
}
