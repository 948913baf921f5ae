//! Keyword-based scheme classification.
//!
//! CAS statements carry no structured taxonomy, only display names, so
//! category and channel are inferred from the name. The rules are an ordered
//! table evaluated top to bottom with case-insensitive substring matching;
//! debt and commodity keywords are checked before defaulting to equity.
//! These are heuristics over marketing names, not a registrar taxonomy.

use crate::types::{AssetCategory, Channel};

/// Ordered classification rules: first keyword hit wins.
const CATEGORY_RULES: &[(&[&str], AssetCategory)] = &[
    (
        &[
            "LIQUID",
            "DEBT",
            "BOND",
            "OVERNIGHT",
            "MONEY MARKET",
            "GILT",
            "CORPORATE",
            "FIXED",
        ],
        AssetCategory::Debt,
    ),
    (&["GOLD", "SILVER", "COMMODITY"], AssetCategory::Gold),
];

/// Keyword marking a direct plan.
const DIRECT_KEYWORD: &str = "DIRECT";

/// Maps a scheme name to its asset category.
///
/// Total function: unmatched names fall through to [`AssetCategory::Equity`].
///
/// # Example
///
/// ```rust
/// use fundscan_core::classify::category_of;
/// use fundscan_core::types::AssetCategory;
///
/// assert_eq!(category_of("HDFC Liquid Fund"), AssetCategory::Debt);
/// assert_eq!(category_of("Axis Gold ETF FoF"), AssetCategory::Gold);
/// assert_eq!(category_of("Parag Parikh Flexi Cap"), AssetCategory::Equity);
/// ```
#[must_use]
pub fn category_of(scheme_name: &str) -> AssetCategory {
    let upper = scheme_name.to_uppercase();
    for (keywords, category) in CATEGORY_RULES {
        if keywords.iter().any(|keyword| upper.contains(keyword)) {
            return *category;
        }
    }
    AssetCategory::Equity
}

/// Maps a scheme name to its distribution channel.
///
/// Total function: anything without a "DIRECT" marker is treated as Regular,
/// matching how AMCs label plans.
#[must_use]
pub fn channel_of(scheme_name: &str) -> Channel {
    if scheme_name.to_uppercase().contains(DIRECT_KEYWORD) {
        Channel::Direct
    } else {
        Channel::Regular
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debt_keywords() {
        for name in [
            "ABC Liquid Fund",
            "XYZ Short Duration Debt Fund",
            "Dynamic Bond Fund",
            "Overnight Fund - Growth",
            "Money Market Fund",
            "Gilt Fund 10Y",
            "Corporate Bond Fund",
            "Fixed Maturity Plan 2026",
        ] {
            assert_eq!(category_of(name), AssetCategory::Debt, "{name}");
        }
    }

    #[test]
    fn test_gold_keywords() {
        assert_eq!(category_of("Nippon Gold Savings"), AssetCategory::Gold);
        assert_eq!(category_of("ICICI Silver ETF FoF"), AssetCategory::Gold);
        assert_eq!(category_of("Commodity Opportunities"), AssetCategory::Gold);
    }

    #[test]
    fn test_equity_default() {
        assert_eq!(category_of("Flexi Cap Fund"), AssetCategory::Equity);
        assert_eq!(category_of(""), AssetCategory::Equity);
    }

    #[test]
    fn test_debt_takes_precedence_over_gold() {
        // "Gold" appears, but the debt rule is evaluated first.
        assert_eq!(
            category_of("Golden Bond Fund"),
            AssetCategory::Debt
        );
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(category_of("ultra short liquid fund"), AssetCategory::Debt);
        assert_eq!(channel_of("xyz direct growth"), Channel::Direct);
    }

    #[test]
    fn test_channel() {
        assert_eq!(channel_of("UTI Nifty 50 Index Fund - Direct"), Channel::Direct);
        assert_eq!(channel_of("UTI Nifty 50 Index Fund - Regular"), Channel::Regular);
        assert_eq!(channel_of("Some Growth Fund"), Channel::Regular);
    }
}
