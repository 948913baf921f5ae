//! Cash flow type for money-weighted return calculations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;

/// A dated cash flow in a scheme's transaction history.
///
/// Sign convention follows money-weighted-return semantics: outflows from the
/// investor (purchases, reinvestments) are negative, inflows (redemptions,
/// dividend payouts, the terminal valuation) are positive.
///
/// # Example
///
/// ```rust
/// use fundscan_core::types::{CashFlow, Date};
/// use rust_decimal_macros::dec;
///
/// let purchase = CashFlow::new(Date::from_ymd(2023, 1, 1).unwrap(), dec!(-10000));
/// assert!(purchase.is_outflow());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Date the flow occurred.
    pub date: Date,
    /// Signed amount.
    pub amount: Decimal,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(date: Date, amount: Decimal) -> Self {
        Self { date, amount }
    }

    /// Returns true if this is money leaving the investor (negative amount).
    #[must_use]
    pub fn is_outflow(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Returns true if this is money returning to the investor.
    #[must_use]
    pub fn is_inflow(&self) -> bool {
        self.amount > Decimal::ZERO
    }
}

impl fmt::Display for CashFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.amount)
    }
}
