use crate::config::credentials::DEFAULT_CREDENTIALS_FILE;
use crate::config::{validate_provider, DEFAULT_INPUT_FILE, DEFAULT_OUTPUT_FILE, DEFAULT_RATE_LIMIT};
use crate::core::client::{DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
use crate::core::ConfigProvider;
use crate::utils::error::{LookupError, Result};
use crate::utils::validation::Validate;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// 以 TOML 檔描述一次批次查詢；所有欄位皆有預設值
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub api: ApiConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub credentials_file: String,
    pub rate_limit: u32,
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            credentials_file: DEFAULT_CREDENTIALS_FILE.to_string(),
            rate_limit: DEFAULT_RATE_LIMIT,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub path: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_INPUT_FILE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| LookupError::ConfigError {
            message: format!("Cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);
        Ok(toml::from_str(&processed)?)
    }
}

/// 替換環境變數 (例如 ${INPUT_DIR})；未設定的變數保留原樣
fn substitute_env_vars(content: &str) -> String {
    static ENV_VAR: OnceLock<Regex> = OnceLock::new();
    let re = ENV_VAR.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
    });

    re.replace_all(content, |caps: &Captures| {
        std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
    })
    .into_owned()
}

impl ConfigProvider for TomlConfig {
    fn api_base_url(&self) -> &str {
        &self.api.base_url
    }

    fn credentials_file(&self) -> &str {
        &self.api.credentials_file
    }

    fn input_path(&self) -> &str {
        &self.input.path
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn rate_limit(&self) -> u32 {
        self.api.rate_limit
    }

    fn timeout_seconds(&self) -> u64 {
        self.api.timeout_seconds
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self)
    }
}
