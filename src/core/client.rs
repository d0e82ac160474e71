//! Ytel 電信業者查詢 API 用戶端

use crate::config::credentials::ApiKey;
use crate::core::{CarrierLookup, ConfigProvider, RawLookupResult, TransportFailureKind};
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::time::Duration;

pub const DEFAULT_API_BASE_URL: &str = "https://api.ytel.com/api/v4/carrier/lookup";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

pub struct CarrierClient {
    client: Client,
    base_url: String,
    api_key: ApiKey,
}

impl CarrierClient {
    pub fn new(base_url: impl Into<String>, api_key: ApiKey, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
        })
    }

    /// 讀取憑證並依設定建立用戶端；憑證缺失或為空時直接失敗
    pub fn from_config<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        let api_key = ApiKey::from_file(config.credentials_file())?;
        Self::new(
            config.api_base_url(),
            api_key,
            Duration::from_secs(config.timeout_seconds()),
        )
    }

    pub fn lookup_url(&self, phone_number: &str) -> String {
        build_lookup_url(&self.base_url, phone_number)
    }
}

/// 號碼放在路徑中，`+` 必須編碼成 `%2B`，否則會被伺服器當成空白
pub fn build_lookup_url(base_url: &str, phone_number: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(phone_number)
    )
}

#[async_trait]
impl CarrierLookup for CarrierClient {
    async fn lookup(&self, phone_number: &str) -> RawLookupResult {
        let url = self.lookup_url(phone_number);
        tracing::debug!("Making API request to: {}", url);

        let response = match self
            .client
            .get(&url)
            .bearer_auth(self.api_key.expose())
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return transport_failure(e),
        };

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return RawLookupResult::ApiFailure {
                http_status: status.as_u16(),
                body,
            };
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return transport_failure(e),
        };

        match serde_json::from_str(&body) {
            Ok(payload) => RawLookupResult::Success { payload },
            Err(e) => RawLookupResult::TransportFailure {
                kind: TransportFailureKind::NetworkError,
                detail: format!("Response body is not valid JSON: {}", e),
            },
        }
    }
}

fn transport_failure(e: reqwest::Error) -> RawLookupResult {
    let kind = if e.is_timeout() {
        TransportFailureKind::Timeout
    } else {
        TransportFailureKind::NetworkError
    };

    RawLookupResult::TransportFailure {
        kind,
        detail: e.to_string(),
    }
}
