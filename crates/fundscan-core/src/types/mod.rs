//! Domain types for CAS portfolio analytics.

mod cashflow;
mod date;
mod fund;
mod statement;
mod summary;

pub use cashflow::CashFlow;
pub use date::Date;
pub use fund::{AssetCategory, Channel, FundRecord, HealthRating, ReturnStatus};
pub use statement::{CasStatement, Folio, Scheme, Transaction, Valuation};
pub use summary::{AssetAllocation, PortfolioSummary, ScanReport};
