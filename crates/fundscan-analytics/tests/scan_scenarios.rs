//! End-to-end scan scenarios over parsed statement JSON.

use fundscan_analytics::{scan_statement, AnalyticsError};
use fundscan_core::types::{
    AssetCategory, CasStatement, Channel, Date, HealthRating, ReturnStatus,
};
use rust_decimal_macros::dec;

fn parse(json: &str) -> CasStatement {
    serde_json::from_str(json).expect("statement json")
}

fn as_of() -> Date {
    Date::from_ymd(2024, 1, 1).unwrap()
}

#[test]
fn single_direct_equity_fund() {
    let statement = parse(
        r#"{"folios": [{"folio": "910/55", "amc": "XYZ AMC", "schemes": [{
            "scheme": "XYZ Direct Equity Fund",
            "valuation": {"value": 12000},
            "transactions": [
                {"date": "2023-01-02", "type": "PURCHASE", "amount": 10000}
            ]
        }]}]}"#,
    );

    let report = scan_statement(&statement, as_of()).unwrap();
    assert_eq!(report.funds.len(), 1);

    let fund = &report.funds[0];
    assert_eq!(fund.category, AssetCategory::Equity);
    assert_eq!(fund.channel, Channel::Direct);
    assert_eq!(fund.invested_capital, dec!(10000));
    assert_eq!(fund.return_status, ReturnStatus::Complete);
    assert!((fund.return_rate.unwrap() - 0.20).abs() < 0.005);
    assert_eq!(fund.health_rating, HealthRating::InForm);
    assert_eq!(fund.annual_channel_cost, dec!(0));
    assert_eq!(fund.amc, "XYZ AMC");
    assert_eq!(fund.folio, "910/55");

    let summary = &report.summary;
    assert_eq!(summary.net_worth, dec!(12000));
    assert_eq!(summary.total_invested, dec!(10000));
    assert_eq!(summary.total_gain, dec!(2000));
    assert_eq!(summary.total_gain_percent, dec!(20.00));
    assert_eq!(summary.asset_allocation.equity, dec!(100.00));
    assert_eq!(summary.asset_allocation.debt, dec!(0));
    // Single Direct In-Form fund scores a full 100.
    assert_eq!(summary.health_score, 100);
}

#[test]
fn regular_liquid_fund_without_transactions() {
    let statement = parse(
        r#"{"folios": [{"schemes": [{
            "scheme": "ABC Regular Liquid Fund",
            "valuation": {"value": 5000},
            "transactions": []
        }]}]}"#,
    );

    let report = scan_statement(&statement, as_of()).unwrap();
    let fund = &report.funds[0];

    assert_eq!(fund.category, AssetCategory::Debt);
    assert_eq!(fund.channel, Channel::Regular);
    assert_eq!(fund.return_status, ReturnStatus::NoTransactions);
    assert!(fund.return_rate.is_none());
    assert_eq!(fund.health_rating, HealthRating::Unknown);
    assert_eq!(fund.annual_channel_cost, dec!(50.00));

    // Unknown Regular fund: 50 - 10 = 40.
    assert_eq!(report.summary.health_score, 40);
}

#[test]
fn mixed_portfolio_weighted_score() {
    // 6000 In-Form Direct + 4000 Out-of-Form Regular => 66.
    // The first fund doubles in under a year but stays below +100%
    // annualized; the second loses modestly over a long holding.
    let statement = parse(
        r#"{"folios": [{"folio": "F1", "amc": "AMC One", "schemes": [
            {
                "scheme": "Growth Direct Flexi Cap",
                "valuation": {"value": 6000},
                "transactions": [
                    {"date": "2023-04-01", "type": "PURCHASE", "amount": 4000}
                ]
            },
            {
                "scheme": "Laggard Value Fund",
                "valuation": {"value": 4000},
                "transactions": [
                    {"date": "2020-01-01", "type": "PURCHASE", "amount": 5000}
                ]
            }
        ]}]}"#,
    );

    let report = scan_statement(&statement, as_of()).unwrap();
    assert_eq!(report.funds.len(), 2);

    let growth = &report.funds[0];
    assert_eq!(growth.health_rating, HealthRating::InForm);
    assert_eq!(growth.channel, Channel::Direct);

    let laggard = &report.funds[1];
    assert_eq!(laggard.health_rating, HealthRating::OutOfForm);
    assert_eq!(laggard.channel, Channel::Regular);

    assert_eq!(report.summary.health_score, 66);
    assert_eq!(report.summary.net_worth, dec!(10000));
}

#[test]
fn statement_without_qualifying_schemes_fails() {
    let statement = parse(
        r#"{"folios": [
            {"schemes": [{"scheme": "Zeroed Out Fund", "valuation": {"value": 0}}]},
            {"schemes": []}
        ]}"#,
    );
    assert_eq!(
        scan_statement(&statement, as_of()).unwrap_err(),
        AnalyticsError::NoValidFunds
    );
}

#[test]
fn one_bad_scheme_does_not_block_the_rest() {
    let statement = parse(
        r#"{"folios": [{"schemes": [
            {
                "scheme": "Broken Records Fund",
                "valuation": {"value": 1000},
                "transactions": [
                    {"date": "garbage", "type": "PURCHASE", "amount": "not-a-number"},
                    {"amount": null}
                ]
            },
            {
                "scheme": "Healthy Direct Fund",
                "valuation": {"value": 2000},
                "transactions": [
                    {"date": "2023-01-01", "type": "PURCHASE", "amount": 1500}
                ]
            }
        ]}]}"#,
    );

    let report = scan_statement(&statement, as_of()).unwrap();
    assert_eq!(report.funds.len(), 2);

    let broken = &report.funds[0];
    // Both rows were unusable: no dated flows, so no return; the scheme
    // itself still produced a record.
    assert_eq!(broken.return_status, ReturnStatus::NoData);
    assert_eq!(broken.skipped_transactions, 2);
    assert_eq!(broken.health_rating, HealthRating::Unknown);

    let healthy = &report.funds[1];
    assert_eq!(healthy.return_status, ReturnStatus::Complete);
}
