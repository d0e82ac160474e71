use crate::utils::error::{LookupError, Result};
use std::fmt;
use std::path::Path;

pub const DEFAULT_CREDENTIALS_FILE: &str = ".env.ytel";

/// Bearer token；Debug 輸出時遮蔽內容
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// 讀取檔案第一行作為 token
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LookupError::MissingCredentialError {
                path: path_str.clone(),
            },
            _ => LookupError::IoError(e),
        })?;

        let token = content.lines().next().unwrap_or_default().trim();
        if token.is_empty() {
            return Err(LookupError::EmptyCredentialError { path: path_str });
        }

        tracing::debug!("Loaded API key from {}", path_str);
        Ok(Self(token.to_string()))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}
