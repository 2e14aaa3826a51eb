#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::pricing::{DiscountPolicy, PricingConfig};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};
use rust_decimal::Decimal;
use std::path::PathBuf;
use toml_config::TomlConfig;

pub const DEFAULT_DATA_FILE: &str = "sales_data.csv";

/// 合併後的執行設定（CLI > TOML > 預設值）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub pricing: PricingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            pricing: PricingConfig::default(),
        }
    }
}

/// Values supplied on the command line; `None` falls through to the file or default.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub data_file: Option<PathBuf>,
    pub tax_rate: Option<Decimal>,
    pub discount: Option<DiscountPolicy>,
}

impl AppConfig {
    pub fn resolve(file: Option<&TomlConfig>, overrides: ConfigOverrides) -> Self {
        let mut config = AppConfig::default();

        if let Some(file) = file {
            if let Some(path) = file.data_file() {
                config.data_file = PathBuf::from(path);
            }
            if let Some(rate) = file.tax_rate() {
                config.pricing.tax_rate = rate;
            }
            if let Some(discount) = file.default_discount() {
                config.pricing.discount = discount;
            }
        }

        if let Some(path) = overrides.data_file {
            config.data_file = path;
        }
        if let Some(rate) = overrides.tax_rate {
            config.pricing.tax_rate = rate;
        }
        if let Some(discount) = overrides.discount {
            config.pricing.discount = discount;
        }

        config
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_path("data_file", &self.data_file.to_string_lossy())?;
        validate_range(
            "tax_rate",
            self.pricing.tax_rate,
            Decimal::ZERO,
            Decimal::ONE,
        )?;
        Ok(())
    }
}
