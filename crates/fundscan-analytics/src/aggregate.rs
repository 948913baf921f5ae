//! Portfolio-level aggregation.
//!
//! Rolls analyzed fund records up into a [`PortfolioSummary`]: totals, asset
//! allocation, channel mix, and a single value-weighted health score. An
//! empty fund list is a hard error: "no valid funds" must reach the user as
//! a failure, never as a zero-value summary.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use fundscan_core::types::{
    AssetAllocation, AssetCategory, Channel, FundRecord, HealthRating, PortfolioSummary,
};

use crate::error::{AnalyticsError, AnalyticsResult};

/// Score deduction applied to Regular-channel funds.
///
/// Regular holdings typically underperform their Direct counterparts net of
/// the embedded trail commission.
const REGULAR_CHANNEL_PENALTY: f64 = 10.0;

/// Percent scale.
const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Aggregates analyzed funds into a portfolio summary.
///
/// # Errors
///
/// Returns [`AnalyticsError::NoValidFunds`] for an empty input; callers must
/// treat that as a user-facing condition distinct from a zero-value result.
pub fn aggregate(funds: &[FundRecord]) -> AnalyticsResult<PortfolioSummary> {
    if funds.is_empty() {
        return Err(AnalyticsError::NoValidFunds);
    }

    let net_worth: Decimal = funds.iter().map(|f| f.current_value).sum();
    let total_invested: Decimal = funds.iter().map(|f| f.invested_capital).sum();
    let total_channel_cost: Decimal = funds.iter().map(|f| f.annual_channel_cost).sum();

    let total_gain = net_worth - total_invested;
    let total_gain_percent = if total_invested > Decimal::ZERO {
        (total_gain / total_invested * HUNDRED).round_dp(2)
    } else {
        Decimal::ZERO
    };

    let mut asset_allocation = AssetAllocation::default();
    if net_worth > Decimal::ZERO {
        for category in AssetCategory::ALL {
            let value: Decimal = funds
                .iter()
                .filter(|f| f.category == category)
                .map(|f| f.current_value)
                .sum();
            asset_allocation.set(category, (value / net_worth * HUNDRED).round_dp(2));
        }
    }

    let direct_funds_count = funds.iter().filter(|f| f.channel == Channel::Direct).count();
    let regular_funds_count = funds.len() - direct_funds_count;

    Ok(PortfolioSummary {
        net_worth,
        total_invested,
        total_gain,
        total_gain_percent,
        total_channel_cost,
        health_score: weighted_health_score(funds),
        funds_count: funds.len(),
        direct_funds_count,
        regular_funds_count,
        asset_allocation,
    })
}

/// Value-weighted portfolio health score in [0, 100].
///
/// Each fund contributes its rating's base score, less the Regular-channel
/// penalty, weighted by its share of net worth. Zero net worth (no data)
/// scores zero.
#[must_use]
pub fn weighted_health_score(funds: &[FundRecord]) -> u8 {
    let net_worth: Decimal = funds.iter().map(|f| f.current_value).sum();
    let Some(net_worth) = net_worth.to_f64().filter(|n| *n > 0.0) else {
        return 0;
    };

    let mut score = 0.0;
    for fund in funds {
        let mut fund_score = base_score(fund.health_rating);
        if fund.channel == Channel::Regular {
            fund_score -= REGULAR_CHANNEL_PENALTY;
        }
        let weight = fund.current_value.to_f64().unwrap_or(0.0) / net_worth;
        score += weight * fund_score;
    }

    (score as i64).clamp(0, 100) as u8
}

/// Base score per rating tier.
fn base_score(rating: HealthRating) -> f64 {
    match rating {
        HealthRating::InForm => 100.0,
        HealthRating::OnTrack => 75.0,
        HealthRating::OffTrack => 50.0,
        HealthRating::OutOfForm => 25.0,
        HealthRating::Unknown => 50.0,
    }
}
