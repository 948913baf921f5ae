//! Analyzed fund record and its classification enums.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Asset category of a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetCategory {
    /// Equity and equity-oriented hybrid schemes.
    Equity,
    /// Debt, liquid, gilt, and other fixed-income schemes.
    Debt,
    /// Gold, silver, and commodity schemes.
    Gold,
}

impl AssetCategory {
    /// All categories, in reporting order.
    pub const ALL: [AssetCategory; 3] = [
        AssetCategory::Equity,
        AssetCategory::Debt,
        AssetCategory::Gold,
    ];
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetCategory::Equity => "Equity",
            AssetCategory::Debt => "Debt",
            AssetCategory::Gold => "Gold",
        };
        write!(f, "{name}")
    }
}

/// Distribution channel of a scheme.
///
/// Direct plans carry no intermediary commission; Regular plans embed an
/// advisor/distributor trail commission in their expense ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    /// Bought directly from the AMC.
    Direct,
    /// Bought through an advisor or distributor.
    Regular,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Direct => "Direct",
            Channel::Regular => "Regular",
        };
        write!(f, "{name}")
    }
}

/// Outcome of the money-weighted-return solve for a fund.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnStatus {
    /// A return was solved and passed sanity checks.
    Complete,
    /// Transactions were present but none were usable as dated flows.
    #[serde(rename = "No Data")]
    NoData,
    /// The scheme had no transaction history at all.
    #[serde(rename = "No Transactions")]
    NoTransactions,
    /// The root finder failed to converge or the flows had no sign change.
    #[serde(rename = "Calculation Error")]
    CalculationError,
    /// A rate was found but its magnitude suggests partial cash-flow capture.
    #[serde(rename = "Partial Data")]
    PartialData,
}

impl fmt::Display for ReturnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReturnStatus::Complete => "Complete",
            ReturnStatus::NoData => "No Data",
            ReturnStatus::NoTransactions => "No Transactions",
            ReturnStatus::CalculationError => "Calculation Error",
            ReturnStatus::PartialData => "Partial Data",
        };
        write!(f, "{name}")
    }
}

/// Qualitative health rating derived from a fund's annualized return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HealthRating {
    /// Annualized return above 20%.
    #[serde(rename = "In-Form")]
    InForm,
    /// Annualized return between 12% and 20%.
    #[serde(rename = "On-Track")]
    OnTrack,
    /// Annualized return between 0% and 12%.
    #[serde(rename = "Off-Track")]
    OffTrack,
    /// Negative annualized return.
    #[serde(rename = "Out-of-Form")]
    OutOfForm,
    /// No return could be computed.
    Unknown,
}

impl HealthRating {
    /// Maps a solved fractional return (e.g. 0.18 for 18%) to a rating.
    ///
    /// `None` maps to [`HealthRating::Unknown`].
    #[must_use]
    pub fn from_rate(rate: Option<f64>) -> Self {
        let Some(rate) = rate else {
            return HealthRating::Unknown;
        };
        let percent = rate * 100.0;
        if percent > 20.0 {
            HealthRating::InForm
        } else if percent >= 12.0 {
            HealthRating::OnTrack
        } else if percent >= 0.0 {
            HealthRating::OffTrack
        } else {
            HealthRating::OutOfForm
        }
    }
}

impl fmt::Display for HealthRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HealthRating::InForm => "In-Form",
            HealthRating::OnTrack => "On-Track",
            HealthRating::OffTrack => "Off-Track",
            HealthRating::OutOfForm => "Out-of-Form",
            HealthRating::Unknown => "Unknown",
        };
        write!(f, "{name}")
    }
}

/// Analyzed record for a single scheme holding.
///
/// Produced once per qualifying scheme and immutable afterwards. Monetary
/// fields are rounded to 2 decimal places at construction; `return_rate` is
/// present exactly when `return_status` is [`ReturnStatus::Complete`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundRecord {
    /// Scheme display name.
    pub name: String,
    /// Asset category from the classifier.
    pub category: AssetCategory,
    /// Distribution channel from the classifier.
    pub channel: Channel,
    /// Current valuation. Always positive; zero-valued schemes are excluded
    /// before analysis.
    pub current_value: Decimal,
    /// Net invested capital, floored at zero.
    pub invested_capital: Decimal,
    /// Solved money-weighted return as a fraction (0.18 = 18%).
    pub return_rate: Option<f64>,
    /// Outcome of the return solve.
    pub return_status: ReturnStatus,
    /// Qualitative rating derived from the return.
    pub health_rating: HealthRating,
    /// Estimated annual distributor commission for Regular holdings.
    pub annual_channel_cost: Decimal,
    /// Asset management company name.
    pub amc: String,
    /// Folio number the scheme was held under.
    pub folio: String,
    /// Transactions dropped by the skip-and-count policy during analysis.
    pub skipped_transactions: usize,
}

impl FundRecord {
    /// Unrealized gain over invested capital.
    #[must_use]
    pub fn gain(&self) -> Decimal {
        self.current_value - self.invested_capital
    }
}
