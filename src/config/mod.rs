#[cfg(feature = "cli")]
pub mod cli;
pub mod credentials;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::client::{DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
use crate::utils::validation::{validate_path, validate_range, validate_url};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_FILE: &str = "phone_numbers.csv";
pub const DEFAULT_OUTPUT_FILE: &str = "phone_numbers_with_carrier.csv";
pub const DEFAULT_RATE_LIMIT: u32 = 10;
pub const MAX_RATE_LIMIT: u32 = 1000;
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, clap::Parser)]
#[command(name = "carrier-lookup")]
#[command(about = "Bulk phone number carrier lookup via the Ytel API")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_INPUT_FILE)]
    pub input: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: String,

    #[arg(long, default_value = credentials::DEFAULT_CREDENTIALS_FILE)]
    pub credentials_file: String,

    #[arg(long, default_value = DEFAULT_API_BASE_URL)]
    pub api_base_url: String,

    #[arg(long, default_value_t = DEFAULT_RATE_LIMIT, help = "Requests per second")]
    pub rate_limit: u32,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, help = "TOML configuration file; replaces the I/O and API flags")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(long, help = "Log CPU and memory usage per phase")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    fn credentials_file(&self) -> &str {
        &self.credentials_file
    }

    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output
    }

    fn rate_limit(&self) -> u32 {
        self.rate_limit
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}

/// CLI 與 TOML 兩種設定來源共用的檢查
pub fn validate_provider<C: ConfigProvider + ?Sized>(config: &C) -> Result<()> {
    validate_url("api_base_url", config.api_base_url())?;
    validate_path("credentials_file", config.credentials_file())?;
    validate_path("input", config.input_path())?;
    validate_path("output", config.output_path())?;
    validate_range("rate_limit", config.rate_limit(), 1, MAX_RATE_LIMIT)?;
    validate_range(
        "timeout_seconds",
        config.timeout_seconds(),
        1,
        MAX_TIMEOUT_SECONDS,
    )?;
    Ok(())
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["carrier-lookup"]);

        assert_eq!(config.input_path(), "phone_numbers.csv");
        assert_eq!(config.output_path(), "phone_numbers_with_carrier.csv");
        assert_eq!(config.credentials_file(), ".env.ytel");
        assert_eq!(
            config.api_base_url(),
            "https://api.ytel.com/api/v4/carrier/lookup"
        );
        assert_eq!(config.rate_limit(), 10);
        assert_eq!(config.timeout_seconds(), 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_rejects_zero_rate() {
        let config = CliConfig::parse_from(["carrier-lookup", "--rate-limit", "0"]);
        assert!(config.validate().is_err());
    }
}
