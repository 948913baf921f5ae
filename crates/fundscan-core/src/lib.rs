//! # Fundscan Core
//!
//! Core types and classification rules for the Fundscan CAS analytics service.
//!
//! This crate provides the foundational building blocks used throughout
//! Fundscan:
//!
//! - **Types**: Domain types like [`types::Date`], [`types::CashFlow`],
//!   [`types::FundRecord`], and the parsed-statement tree
//! - **Classification**: Keyword-rule mapping from scheme names to asset
//!   categories and distribution channels
//!
//! ## Design Philosophy
//!
//! - **Strict at the boundary**: heterogeneous upstream records are
//!   normalized into a typed tree once, so downstream code never probes for
//!   missing fields
//! - **Derived, immutable outputs**: fund records and summaries are produced
//!   once per scan and never mutated

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod classify;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::classify::{category_of, channel_of};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        AssetAllocation, AssetCategory, CasStatement, CashFlow, Channel, Date, FundRecord,
        HealthRating, PortfolioSummary, ReturnStatus, ScanReport,
    };
}

// Re-export commonly used types at crate root
pub use error::{CoreError, CoreResult};
pub use types::{AssetCategory, Channel, Date, FundRecord, HealthRating, ReturnStatus};
