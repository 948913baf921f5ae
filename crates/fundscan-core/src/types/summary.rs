//! Portfolio-level rollup types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{AssetCategory, FundRecord};

/// Asset-allocation percentages by category.
///
/// Percentages of net worth, summing to 100 (within rounding) when net worth
/// is positive and all zero otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetAllocation {
    /// Equity share of net worth, in percent.
    pub equity: Decimal,
    /// Debt share of net worth, in percent.
    pub debt: Decimal,
    /// Gold/commodity share of net worth, in percent.
    pub gold: Decimal,
}

impl AssetAllocation {
    /// Returns the percentage for a category.
    #[must_use]
    pub fn for_category(&self, category: AssetCategory) -> Decimal {
        match category {
            AssetCategory::Equity => self.equity,
            AssetCategory::Debt => self.debt,
            AssetCategory::Gold => self.gold,
        }
    }

    /// Sets the percentage for a category.
    pub fn set(&mut self, category: AssetCategory, percent: Decimal) {
        match category {
            AssetCategory::Equity => self.equity = percent,
            AssetCategory::Debt => self.debt = percent,
            AssetCategory::Gold => self.gold = percent,
        }
    }

    /// Sum of all category percentages.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.equity + self.debt + self.gold
    }
}

/// Aggregate metrics over all analyzed funds in a statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Sum of current valuations.
    pub net_worth: Decimal,
    /// Sum of net invested capital.
    pub total_invested: Decimal,
    /// Net worth minus invested capital.
    pub total_gain: Decimal,
    /// Gain as a percentage of invested capital; zero when nothing invested.
    pub total_gain_percent: Decimal,
    /// Sum of estimated annual distributor commissions.
    pub total_channel_cost: Decimal,
    /// Value-weighted health score in [0, 100].
    pub health_score: u8,
    /// Number of analyzed funds.
    pub funds_count: usize,
    /// Funds held through the Direct channel.
    pub direct_funds_count: usize,
    /// Funds held through the Regular channel.
    pub regular_funds_count: usize,
    /// Allocation percentages by asset category.
    pub asset_allocation: AssetAllocation,
}

/// Complete scan output: the portfolio rollup plus per-fund detail.
///
/// Serializes with the summary fields flattened alongside `funds`, which is
/// the shape the transport layer returns to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Portfolio-level aggregates.
    #[serde(flatten)]
    pub summary: PortfolioSummary,
    /// Per-fund records in statement order.
    pub funds: Vec<FundRecord>,
}
