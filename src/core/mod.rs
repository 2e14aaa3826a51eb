pub mod analytics;
pub mod pricing;
pub mod receipt;

pub use crate::domain::model::{Ledger, SalesRecord};
pub use crate::domain::ports::LedgerStorage;
pub use crate::utils::error::Result;
