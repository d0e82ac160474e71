pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{cli::LocalStorage, CliConfig};

pub use crate::config::{credentials::ApiKey, toml_config::TomlConfig};
pub use crate::core::{
    client::CarrierClient,
    etl::{EtlEngine, RunReport},
    pipeline::LookupPipeline,
    rate_limiter::RateLimiter,
};
pub use crate::domain::model::{CarrierRecord, LookupRequest, LookupSummary, RawLookupResult};
pub use crate::utils::error::{LookupError, Result};
