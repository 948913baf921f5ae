//! Money-weighted-return solver.
//!
//! Solves for the annualized rate `r` that zeroes the net present value of a
//! dated cash-flow series:
//!
//! ```text
//! sum( amount_i / (1 + r)^((date_i - date_0) / 365) ) = 0
//! ```
//!
//! This is standard XIRR semantics. Newton-Raphson is tried first for its
//! quadratic convergence; when it diverges or hits a flat slope, a bisection
//! pass over a ladder of sign-changing brackets takes over. Both paths are
//! iteration-capped so a solve always terminates.

use rust_decimal::prelude::ToPrimitive;

use fundscan_core::types::{CashFlow, ReturnStatus};

/// Default convergence tolerance.
///
/// Tight enough that the rate is stable to well past two decimal places of
/// the percentage.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default iteration cap for both Newton and bisection passes.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Rates below this would put the discount base at or below zero.
const MIN_RATE: f64 = -0.999_999;

/// Initial Newton guess; a plausible annual return.
const INITIAL_GUESS: f64 = 0.1;

/// Bisection brackets, tried in order until one straddles a sign change.
const BRACKETS: &[(f64, f64)] = &[
    (MIN_RATE, 0.0),
    (0.0, 1.0),
    (1.0, 10.0),
    (MIN_RATE, 10.0),
];

/// Configuration for the return solver.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations per pass.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Solves the money-weighted return of a cash-flow series.
///
/// Returns the solved fractional rate together with a status. The rate is
/// present exactly when the status is [`ReturnStatus::Complete`].
///
/// Outcomes:
/// - empty series → `NoData`
/// - no sign change in the amounts → `CalculationError` (a return is not
///   meaningful without both an investment and a payout)
/// - root finder fails to converge within the cap → `CalculationError`
/// - converged `|rate| > 1.0` → `PartialData`; rates past ±100% annualized
///   almost always mean the statement captured only part of the flow
///   history, so the value is discarded rather than reported
///
/// # Example
///
/// ```rust
/// use fundscan_analytics::solver::{solve_return, SolverConfig};
/// use fundscan_core::types::{CashFlow, Date, ReturnStatus};
/// use rust_decimal_macros::dec;
///
/// let flows = [
///     CashFlow::new(Date::from_ymd(2023, 1, 1).unwrap(), dec!(-10000)),
///     CashFlow::new(Date::from_ymd(2024, 1, 1).unwrap(), dec!(12000)),
/// ];
/// let (rate, status) = solve_return(&flows, &SolverConfig::default());
/// assert_eq!(status, ReturnStatus::Complete);
/// assert!((rate.unwrap() - 0.20).abs() < 1e-6);
/// ```
#[must_use]
pub fn solve_return(flows: &[CashFlow], config: &SolverConfig) -> (Option<f64>, ReturnStatus) {
    if flows.is_empty() {
        return (None, ReturnStatus::NoData);
    }

    let has_outflow = flows.iter().any(CashFlow::is_outflow);
    let has_inflow = flows.iter().any(CashFlow::is_inflow);
    if !has_outflow || !has_inflow {
        return (None, ReturnStatus::CalculationError);
    }

    let origin = flows[0].date;
    let series: Vec<(f64, f64)> = flows
        .iter()
        .map(|flow| {
            (
                origin.year_fraction(&flow.date),
                flow.amount.to_f64().unwrap_or(0.0),
            )
        })
        .collect();

    match newton(&series, config).or_else(|| bisect(&series, config)) {
        Some(rate) if rate.is_finite() => {
            if rate.abs() > 1.0 {
                (None, ReturnStatus::PartialData)
            } else {
                (Some(rate), ReturnStatus::Complete)
            }
        }
        _ => (None, ReturnStatus::CalculationError),
    }
}

/// Net present value of the series at a given rate.
fn npv(series: &[(f64, f64)], rate: f64) -> f64 {
    series
        .iter()
        .map(|(years, amount)| amount / (1.0 + rate).powf(*years))
        .sum()
}

/// Analytic derivative of [`npv`] with respect to the rate.
fn npv_derivative(series: &[(f64, f64)], rate: f64) -> f64 {
    series
        .iter()
        .map(|(years, amount)| -years * amount * (1.0 + rate).powf(-years - 1.0))
        .sum()
}

/// Newton-Raphson pass. `None` means the pass gave up, not that no root
/// exists.
fn newton(series: &[(f64, f64)], config: &SolverConfig) -> Option<f64> {
    let mut rate = INITIAL_GUESS;

    for _ in 0..config.max_iterations {
        let value = npv(series, rate);
        if !value.is_finite() {
            return None;
        }
        if value.abs() < config.tolerance {
            return Some(rate);
        }

        let slope = npv_derivative(series, rate);
        if !slope.is_finite() || slope.abs() < 1e-15 {
            return None;
        }

        let step = value / slope;
        rate = (rate - step).max(MIN_RATE);

        if step.abs() < config.tolerance {
            return Some(rate);
        }
    }

    None
}

/// Bisection fallback over the bracket ladder.
fn bisect(series: &[(f64, f64)], config: &SolverConfig) -> Option<f64> {
    for &(lo, hi) in BRACKETS {
        let f_lo = npv(series, lo);
        let f_hi = npv(series, hi);
        if !f_lo.is_finite() || !f_hi.is_finite() || f_lo * f_hi > 0.0 {
            continue;
        }
        if let Some(rate) = bisect_bracket(series, lo, hi, f_lo, config) {
            return Some(rate);
        }
    }
    None
}

fn bisect_bracket(
    series: &[(f64, f64)],
    mut lo: f64,
    mut hi: f64,
    mut f_lo: f64,
    config: &SolverConfig,
) -> Option<f64> {
    for _ in 0..config.max_iterations {
        let mid = (lo + hi) / 2.0;
        let f_mid = npv(series, mid);
        if !f_mid.is_finite() {
            return None;
        }
        if f_mid.abs() < config.tolerance || (hi - lo) / 2.0 < config.tolerance {
            return Some(mid);
        }
        if f_lo * f_mid < 0.0 {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }
    None
}
