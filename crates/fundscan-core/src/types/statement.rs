//! Typed tree for a parsed Consolidated Account Statement.
//!
//! The statement-parsing collaborator emits a folio → scheme → transaction
//! hierarchy in which any field may be absent or null. These types absorb
//! that looseness once, at the deserialization boundary: lists tolerate
//! `null`, amounts tolerate numbers or numeric strings, and everything else
//! surfaces as an `Option` for the normalizer to default or skip.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// A parsed CAS: the root of the statement tree.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CasStatement {
    /// Folios in the statement.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub folios: Vec<Folio>,
}

/// An account-like grouping of holdings under one AMC relationship.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Folio {
    /// Folio number as printed on the statement.
    #[serde(default)]
    pub folio: Option<String>,
    /// Asset management company name.
    #[serde(default)]
    pub amc: Option<String>,
    /// Schemes held under this folio.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub schemes: Vec<Scheme>,
}

/// A mutual-fund scheme held within a folio.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scheme {
    /// Scheme display name.
    #[serde(rename = "scheme", default)]
    pub name: Option<String>,
    /// Closing valuation, if the parser found one.
    #[serde(default)]
    pub valuation: Option<Valuation>,
    /// Transaction history for the statement period.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub transactions: Vec<Transaction>,
}

/// Closing valuation of a scheme.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Valuation {
    /// Market value of the holding.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub value: Option<Decimal>,
}

/// A single statement transaction.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Transaction {
    /// Transaction date string as emitted by the parser.
    #[serde(default)]
    pub date: Option<String>,
    /// Transaction type label, e.g. "PURCHASE" or "REDEMPTION".
    #[serde(rename = "type", default)]
    pub txn_type: Option<String>,
    /// Transaction amount.
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub amount: Option<Decimal>,
}

/// Accepts `null` in place of a list.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

/// Raw amount as emitted by upstream parsers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(Decimal),
    Text(String),
    Other(serde_json::Value),
}

/// Accepts a JSON number, a numeric string (with thousands separators), or
/// anything else, the last collapsing to `None` rather than failing the
/// whole statement.
fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawAmount>::deserialize(deserializer)? {
        Some(RawAmount::Number(value)) => Some(value),
        Some(RawAmount::Text(text)) => text.trim().replace(',', "").parse().ok(),
        Some(RawAmount::Other(_)) | None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_full_tree() {
        let statement: CasStatement = serde_json::from_str(
            r#"{
                "folios": [{
                    "folio": "12345/67",
                    "amc": "Example AMC",
                    "schemes": [{
                        "scheme": "Example Direct Growth Fund",
                        "valuation": {"value": 15000.50},
                        "transactions": [
                            {"date": "2023-01-15", "type": "PURCHASE", "amount": 10000}
                        ]
                    }]
                }]
            }"#,
        )
        .unwrap();

        assert_eq!(statement.folios.len(), 1);
        let scheme = &statement.folios[0].schemes[0];
        assert_eq!(scheme.valuation.as_ref().unwrap().value, Some(dec!(15000.50)));
        assert_eq!(scheme.transactions[0].amount, Some(dec!(10000)));
    }

    #[test]
    fn test_missing_and_null_fields() {
        let statement: CasStatement = serde_json::from_str(
            r#"{
                "folios": [{
                    "schemes": [{
                        "scheme": null,
                        "valuation": {"value": null},
                        "transactions": null
                    }]
                }]
            }"#,
        )
        .unwrap();

        let folio = &statement.folios[0];
        assert!(folio.folio.is_none());
        assert!(folio.amc.is_none());
        let scheme = &folio.schemes[0];
        assert!(scheme.name.is_none());
        assert_eq!(scheme.valuation.as_ref().unwrap().value, None);
        assert!(scheme.transactions.is_empty());
    }

    #[test]
    fn test_empty_statement() {
        let statement: CasStatement = serde_json::from_str("{}").unwrap();
        assert!(statement.folios.is_empty());

        let statement: CasStatement = serde_json::from_str(r#"{"folios": null}"#).unwrap();
        assert!(statement.folios.is_empty());
    }

    #[test]
    fn test_lenient_amounts() {
        let txn: Transaction =
            serde_json::from_str(r#"{"amount": "1,23,456.78"}"#).unwrap();
        assert_eq!(txn.amount, Some(dec!(123456.78)));

        let txn: Transaction = serde_json::from_str(r#"{"amount": "n/a"}"#).unwrap();
        assert_eq!(txn.amount, None);

        let txn: Transaction = serde_json::from_str(r#"{"amount": {"bad": true}}"#).unwrap();
        assert_eq!(txn.amount, None);
    }
}
