use std::time::{Duration, Instant};
use tokio::time::sleep;

/// 固定間隔限流：相鄰兩次操作的開始時間至少相隔 `1/rate` 秒，不允許突發
#[derive(Debug)]
pub struct RateLimiter {
    interval: Duration,
    last_start: Option<Instant>,
}

impl RateLimiter {
    /// `requests_per_second` 必須大於 0（由設定驗證保證）
    pub fn new(requests_per_second: u32) -> Self {
        Self::with_interval(Duration::from_nanos(
            1_000_000_000 / u64::from(requests_per_second.max(1)),
        ))
    }

    pub fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            last_start: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// 第一次呼叫立即返回，之後等到距上一次開始滿一個間隔；回傳本次開始時間
    pub async fn acquire(&mut self) -> Instant {
        if let Some(last) = self.last_start {
            let elapsed = last.elapsed();
            if elapsed < self.interval {
                sleep(self.interval - elapsed).await;
            }
        }
        let now = Instant::now();
        self.last_start = Some(now);
        now
    }
}
