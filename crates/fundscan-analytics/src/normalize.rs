//! Statement normalization and the scan entry point.
//!
//! The parsed-statement tree is loose: any field may be missing, lists may
//! be null, dates arrive as strings in several formats. This module is the
//! single place that looseness is absorbed: downstream code only ever sees
//! [`SchemeSnapshot`]s with defaults applied and unusable records already
//! counted out.

use rust_decimal::Decimal;
use tracing::{debug, info};

use fundscan_core::types::{CasStatement, Date, ScanReport};

use crate::aggregate::aggregate;
use crate::analyzer::{analyze_scheme, SchemeSnapshot, SchemeTransaction};
use crate::error::AnalyticsResult;
use crate::solver::SolverConfig;

/// Sentinel for a folio without a number.
const UNKNOWN_FOLIO: &str = "Unknown";
/// Sentinel for a folio without an AMC name.
const UNKNOWN_AMC: &str = "Unknown AMC";
/// Sentinel for a scheme without a name.
const UNKNOWN_SCHEME: &str = "Unknown Scheme";

/// Walks the statement tree into analyzable scheme snapshots.
///
/// Schemes without a positive valuation are dropped here; transactions with
/// unusable amounts are dropped and counted on the snapshot; transactions
/// whose date cannot be parsed are kept undated (they still count toward
/// invested capital).
#[must_use]
pub fn normalize_statement(statement: &CasStatement) -> Vec<SchemeSnapshot> {
    let mut snapshots = Vec::new();

    for folio in &statement.folios {
        let folio_number = folio
            .folio
            .clone()
            .unwrap_or_else(|| UNKNOWN_FOLIO.to_string());
        let amc = folio.amc.clone().unwrap_or_else(|| UNKNOWN_AMC.to_string());

        for scheme in &folio.schemes {
            let name = scheme
                .name
                .clone()
                .unwrap_or_else(|| UNKNOWN_SCHEME.to_string());

            let Some(value) = scheme.valuation.as_ref().and_then(|v| v.value) else {
                debug!(scheme = %name, "skipping scheme without valuation");
                continue;
            };
            if value <= Decimal::ZERO {
                debug!(scheme = %name, %value, "skipping scheme with non-positive valuation");
                continue;
            }

            let mut transactions = Vec::with_capacity(scheme.transactions.len());
            let mut dropped = 0;
            for txn in &scheme.transactions {
                let Some(amount) = txn.amount else {
                    dropped += 1;
                    continue;
                };
                let date = txn.date.as_deref().and_then(|raw| match Date::parse(raw) {
                    Ok(date) => Some(date),
                    Err(_) => {
                        debug!(scheme = %name, raw, "unparseable transaction date");
                        None
                    }
                });
                let label = txn.txn_type.clone().unwrap_or_default();
                transactions.push(SchemeTransaction::new(date, label, amount));
            }

            snapshots.push(SchemeSnapshot {
                name,
                amc: amc.clone(),
                folio: folio_number.clone(),
                current_value: value,
                transactions,
                dropped_transactions: dropped,
            });
        }
    }

    snapshots
}

/// Scans a parsed statement into a full report.
///
/// This is the single operation the transport layer calls. The `as_of` date
/// anchors every scheme's terminal valuation flow; production callers pass
/// today.
///
/// # Errors
///
/// Returns [`crate::AnalyticsError::NoValidFunds`] when no scheme qualifies
/// for analysis.
pub fn scan_statement(statement: &CasStatement, as_of: Date) -> AnalyticsResult<ScanReport> {
    let config = SolverConfig::default();
    let snapshots = normalize_statement(statement);
    let funds: Vec<_> = snapshots
        .iter()
        .map(|snapshot| analyze_scheme(snapshot, as_of, &config))
        .collect();

    let summary = aggregate(&funds)?;
    info!(
        funds = funds.len(),
        net_worth = %summary.net_worth,
        health_score = summary.health_score,
        "statement scan complete"
    );

    Ok(ScanReport { summary, funds })
}
