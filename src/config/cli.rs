use crate::config::toml_config::TomlConfig;
use crate::config::{AppConfig, ConfigOverrides};
use crate::core::pricing::DiscountPolicy;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "sales-ledger")]
#[command(about = "Record sales, print receipts and sales analytics")]
pub struct CliArgs {
    /// Sales data file (CSV: item,quantity,unit_price) [default: sales_data.csv]
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Tax rate as a fraction, e.g. 0.07 [default: 0.07]
    #[arg(long, global = true)]
    pub tax_rate: Option<Decimal>,

    /// Discount policy: none or bogo
    #[arg(long, global = true)]
    pub discount: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add or update a sale, then save
    #[command(allow_negative_numbers = true)]
    Add {
        item: String,
        quantity: i64,
        price: Decimal,
    },
    /// Print a receipt for the current ledger
    Receipt,
    /// Print sales analytics
    Analytics {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}

impl CliArgs {
    /// 載入 TOML（如有指定）並套用命令列覆蓋設定
    pub fn resolve(&self) -> Result<AppConfig> {
        let file = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                let file = TomlConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let overrides = ConfigOverrides {
            data_file: self.data_file.clone(),
            tax_rate: self.tax_rate,
            discount: self.discount.as_deref().map(DiscountPolicy::parse),
        };

        Ok(AppConfig::resolve(file.as_ref(), overrides))
    }
}
