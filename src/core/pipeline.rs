use crate::core::normalizer::normalize;
use crate::core::rate_limiter::RateLimiter;
use crate::core::{
    tabular, CarrierLookup, CarrierRecord, ConfigProvider, LookupOutcome, LookupRequest,
    LookupSummary, Pipeline, RawLookupResult, Storage,
};
use crate::utils::error::{LookupError, Result};

/// 依序查詢每個號碼：一次只有一個請求在途，請求之間以固定間隔限流
pub struct LookupPipeline<S: Storage, C: ConfigProvider, L: CarrierLookup> {
    storage: S,
    config: C,
    lookup: L,
}

impl<S: Storage, C: ConfigProvider, L: CarrierLookup> LookupPipeline<S, C, L> {
    pub fn new(storage: S, config: C, lookup: L) -> Self {
        Self {
            storage,
            config,
            lookup,
        }
    }

    /// 每個請求恰好產生一筆記錄，順序與輸入相同；單筆失敗不會中斷批次
    pub async fn run(&self, requests: &[LookupRequest]) -> (Vec<CarrierRecord>, LookupSummary) {
        let total = requests.len();
        let mut limiter = RateLimiter::new(self.config.rate_limit());
        let mut records = Vec::with_capacity(total);

        for (idx, request) in requests.iter().enumerate() {
            tracing::info!(
                "[{}/{}] Processing {}...",
                idx + 1,
                total,
                request.phone_number
            );
            // acquire 之後緊接著送出請求
            limiter.acquire().await;
            let result = self.lookup.lookup(&request.phone_number).await;
            let record = normalize(request, &result);

            match result {
                RawLookupResult::Success { .. } => tracing::info!("✓ Success"),
                _ => tracing::warn!("✗ Failed: {}", record.error),
            }

            records.push(record);
        }

        let summary = LookupSummary::from_records(&records);
        (records, summary)
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, L: CarrierLookup> Pipeline for LookupPipeline<S, C, L> {
    async fn extract(&self) -> Result<Vec<LookupRequest>> {
        let path = self.config.input_path();

        let data = match self.storage.read_file(path).await {
            Ok(data) => data,
            Err(LookupError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(LookupError::InputNotFoundError {
                    path: path.to_string(),
                });
            }
            Err(e) => return Err(e),
        };

        let requests = tabular::parse_requests(&data)?;
        tracing::info!("Loaded {} phone numbers from {}", requests.len(), path);
        Ok(requests)
    }

    async fn transform(&self, requests: Vec<LookupRequest>) -> Result<LookupOutcome> {
        tracing::info!(
            "Rate limit: {} requests/second ({:.3}s between requests)",
            self.config.rate_limit(),
            1.0 / f64::from(self.config.rate_limit().max(1))
        );

        let (records, summary) = self.run(&requests).await;
        Ok(LookupOutcome { records, summary })
    }

    async fn load(&self, outcome: &LookupOutcome) -> Result<String> {
        let output_path = self.config.output_path();
        tracing::info!("Writing results to {}...", output_path);

        let data = tabular::render_records(&outcome.records)?;
        self.storage.write_file(output_path, &data).await?;

        Ok(output_path.to_string())
    }
}
