use crate::core::{LookupSummary, Pipeline};
use crate::utils::error::Result;
use crate::utils::monitor::ResourceMonitor;

#[derive(Debug, Clone)]
pub struct RunReport {
    pub output_path: String,
    pub summary: LookupSummary,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
    monitor_enabled: bool,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self::new_with_monitoring(pipeline, false)
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor_enabled,
        }
    }

    pub async fn run(&self) -> Result<RunReport> {
        let mut monitor = ResourceMonitor::new(self.monitor_enabled);
        tracing::info!("Starting carrier lookup...");

        // Extract：讀不到輸入就直接失敗，不產生任何輸出
        let requests = self.pipeline.extract().await?;
        tracing::info!("Extracted {} lookup requests", requests.len());
        monitor.log_stats("Extract");

        // Transform
        let outcome = self.pipeline.transform(requests).await?;
        tracing::info!(
            "Looked up {} numbers ({} successful, {} failed)",
            outcome.summary.total,
            outcome.summary.successful,
            outcome.summary.failed
        );
        monitor.log_stats("Transform");

        // Load
        let output_path = self.pipeline.load(&outcome).await?;
        tracing::info!("Output saved to: {}", output_path);
        monitor.log_stats("Load");
        monitor.log_final_stats();

        Ok(RunReport {
            output_path,
            summary: outcome.summary,
        })
    }
}
