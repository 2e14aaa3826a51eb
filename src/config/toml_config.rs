use crate::core::pricing::DiscountPolicy;
use crate::utils::error::{LedgerError, Result};
use crate::utils::validation::{validate_path, validate_range, Validate};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub storage: Option<StorageConfig>,
    pub pricing: Option<PricingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricingSection {
    pub tax_rate: Option<Decimal>,
    pub default_discount: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LedgerError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LedgerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SALES_DATA_DIR})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LedgerError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn data_file(&self) -> Option<&str> {
        self.storage.as_ref().and_then(|s| s.data_file.as_deref())
    }

    pub fn tax_rate(&self) -> Option<Decimal> {
        self.pricing.as_ref().and_then(|p| p.tax_rate)
    }

    pub fn default_discount(&self) -> Option<DiscountPolicy> {
        self.pricing
            .as_ref()
            .and_then(|p| p.default_discount.as_deref())
            .map(DiscountPolicy::parse)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.data_file() {
            validate_path("storage.data_file", path)?;
        }
        if let Some(rate) = self.tax_rate() {
            validate_range("pricing.tax_rate", rate, Decimal::ZERO, Decimal::ONE)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[storage]
data_file = "./data/sales.csv"

[pricing]
tax_rate = 0.0825
default_discount = "BOGO"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.data_file(), Some("./data/sales.csv"));
        assert_eq!(config.tax_rate(), Some(dec!(0.0825)));
        assert_eq!(config.default_discount(), Some(DiscountPolicy::Bogo));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_tax_rate_as_string() {
        let config = TomlConfig::from_toml_str("[pricing]\ntax_rate = \"0.1\"\n").unwrap();
        assert_eq!(config.tax_rate(), Some(dec!(0.1)));
    }

    #[test]
    fn test_empty_config_has_no_overrides() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert_eq!(config.data_file(), None);
        assert_eq!(config.tax_rate(), None);
        assert_eq!(config.default_discount(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("SALES_LEDGER_TEST_DIR", "/tmp/ledger");

        let config =
            TomlConfig::from_toml_str("[storage]\ndata_file = \"${SALES_LEDGER_TEST_DIR}/s.csv\"\n")
                .unwrap();
        assert_eq!(config.data_file(), Some("/tmp/ledger/s.csv"));

        std::env::remove_var("SALES_LEDGER_TEST_DIR");
    }

    #[test]
    fn test_out_of_range_tax_rate_fails_validation() {
        let config = TomlConfig::from_toml_str("[pricing]\ntax_rate = 7\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[pricing\ntax_rate = ").unwrap_err();
        assert!(matches!(err, LedgerError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[pricing]\ndefault_discount = \"none\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.default_discount(), Some(DiscountPolicy::None));
    }
}
