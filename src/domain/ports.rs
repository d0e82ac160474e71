use crate::domain::model::{LookupOutcome, LookupRequest, RawLookupResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn credentials_file(&self) -> &str;
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn rate_limit(&self) -> u32;
    fn timeout_seconds(&self) -> u64;
}

/// 查詢單一號碼的電信業者資訊；失敗一律以 `RawLookupResult` 表示，不回傳錯誤
#[async_trait]
pub trait CarrierLookup: Send + Sync {
    async fn lookup(&self, phone_number: &str) -> RawLookupResult;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<LookupRequest>>;
    async fn transform(&self, requests: Vec<LookupRequest>) -> Result<LookupOutcome>;
    async fn load(&self, outcome: &LookupOutcome) -> Result<String>;
}
