//! Per-scheme analysis.
//!
//! Takes a normalized scheme snapshot and produces the immutable
//! [`FundRecord`]: net invested capital, the solved money-weighted return,
//! a health rating, and the estimated annual distributor cost.
//!
//! Transaction classification is by type label: anything containing
//! "REDEMPTION" or "DIVIDEND" (case-insensitive) is money returning to the
//! investor; everything else is treated as a purchase. Transactions that
//! cannot contribute a dated flow are skipped and counted, never fatal.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use fundscan_core::classify::{category_of, channel_of};
use fundscan_core::types::{CashFlow, Channel, Date, FundRecord, HealthRating, ReturnStatus};

use crate::solver::{solve_return, SolverConfig};

/// Assumed annual trail commission on Regular-channel holdings.
const REGULAR_TRAIL_RATE: Decimal = dec!(0.01);

/// Type-label substrings marking money returned to the investor.
const INFLOW_MARKERS: &[&str] = &["REDEMPTION", "DIVIDEND"];

/// A statement transaction after normalization.
///
/// The date stays optional: an undated transaction still counts toward
/// invested capital, it just cannot enter the cash-flow series.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemeTransaction {
    /// Transaction date, when one could be parsed.
    pub date: Option<Date>,
    /// Raw type label from the statement.
    pub label: String,
    /// Unsigned-as-reported amount; sign is derived from the label.
    pub amount: Decimal,
}

impl SchemeTransaction {
    /// Creates a normalized transaction.
    #[must_use]
    pub fn new(date: Option<Date>, label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            date,
            label: label.into(),
            amount,
        }
    }

    /// True when this transaction returns money to the investor.
    #[must_use]
    pub fn is_investor_inflow(&self) -> bool {
        let upper = self.label.to_uppercase();
        INFLOW_MARKERS.iter().any(|marker| upper.contains(marker))
    }
}

/// A scheme holding ready for analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemeSnapshot {
    /// Scheme display name.
    pub name: String,
    /// Asset management company.
    pub amc: String,
    /// Folio number.
    pub folio: String,
    /// Current valuation; positive by the normalizer's filter.
    pub current_value: Decimal,
    /// Normalized transaction history.
    pub transactions: Vec<SchemeTransaction>,
    /// Transactions dropped during normalization (unusable amounts).
    pub dropped_transactions: usize,
}

/// Analyzes one scheme into a [`FundRecord`].
///
/// Callers guarantee `current_value > 0`; schemes without a positive
/// valuation are filtered out before analysis.
///
/// The `as_of` date anchors the terminal valuation flow. Production callers
/// pass today; tests pin a fixed date to make solved rates reproducible.
#[must_use]
pub fn analyze_scheme(
    snapshot: &SchemeSnapshot,
    as_of: Date,
    config: &SolverConfig,
) -> FundRecord {
    debug_assert!(snapshot.current_value > Decimal::ZERO);

    let invested = invested_capital(&snapshot.transactions);
    let (flows, undated_or_zero) =
        build_cash_flows(&snapshot.transactions, snapshot.current_value, as_of);

    let had_history = !snapshot.transactions.is_empty() || snapshot.dropped_transactions > 0;
    let (rate, return_status) = if !had_history {
        (None, ReturnStatus::NoTransactions)
    } else if flows.len() == 1 {
        // Only the terminal valuation survived: nothing to discount against.
        (None, ReturnStatus::NoData)
    } else {
        solve_return(&flows, config)
    };

    let skipped = snapshot.dropped_transactions + undated_or_zero;
    if skipped > 0 {
        debug!(
            scheme = %snapshot.name,
            skipped,
            "transactions excluded from cash-flow series"
        );
    }

    let channel = channel_of(&snapshot.name);
    let annual_channel_cost = match channel {
        Channel::Regular => snapshot.current_value * REGULAR_TRAIL_RATE,
        Channel::Direct => Decimal::ZERO,
    };

    FundRecord {
        category: category_of(&snapshot.name),
        channel,
        current_value: snapshot.current_value.round_dp(2),
        invested_capital: invested.round_dp(2),
        return_rate: rate.map(round_rate),
        return_status,
        health_rating: HealthRating::from_rate(rate),
        annual_channel_cost: annual_channel_cost.round_dp(2),
        name: snapshot.name.clone(),
        amc: snapshot.amc.clone(),
        folio: snapshot.folio.clone(),
        skipped_transactions: skipped,
    }
}

/// Net invested capital over the transaction history, floored at zero.
///
/// Dates are irrelevant here; only the amounts and labels matter.
fn invested_capital(transactions: &[SchemeTransaction]) -> Decimal {
    let mut invested = Decimal::ZERO;
    for txn in transactions {
        if txn.is_investor_inflow() {
            invested -= txn.amount.abs();
        } else {
            invested += txn.amount.abs();
        }
    }
    invested.max(Decimal::ZERO)
}

/// Builds the solver's cash-flow series and counts excluded transactions.
///
/// Purchases become negative flows, investor inflows positive flows, and the
/// current valuation is appended as a terminal positive flow at `as_of`.
fn build_cash_flows(
    transactions: &[SchemeTransaction],
    current_value: Decimal,
    as_of: Date,
) -> (Vec<CashFlow>, usize) {
    let mut flows = Vec::with_capacity(transactions.len() + 1);
    let mut skipped = 0;

    for txn in transactions {
        let Some(date) = txn.date else {
            skipped += 1;
            continue;
        };
        if txn.amount.is_zero() {
            skipped += 1;
            continue;
        }
        let amount = if txn.is_investor_inflow() {
            txn.amount.abs()
        } else {
            -txn.amount.abs()
        };
        flows.push(CashFlow::new(date, amount));
    }

    flows.push(CashFlow::new(as_of, current_value.abs()));
    (flows, skipped)
}

/// Rounds a fractional rate to four decimal places (two of the percentage).
fn round_rate(rate: f64) -> f64 {
    (rate * 10_000.0).round() / 10_000.0
}
