pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::{CliArgs, Command};

pub use crate::adapters::csv_storage::{load, save, CsvFileStorage};
pub use crate::app::Session;
pub use crate::config::AppConfig;
pub use crate::core::analytics::{summarize, SalesSummary, TopItem};
pub use crate::core::pricing::{
    discount, price, subtotal, tax, total, DiscountPolicy, PriceBreakdown, PricingConfig,
};
pub use crate::core::receipt::{render_receipt, render_summary};
pub use crate::domain::model::{Ledger, SalesRecord};
pub use crate::domain::ports::LedgerStorage;
pub use crate::utils::error::{LedgerError, Result};
