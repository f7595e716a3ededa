use crate::core::{FetchResult, Fetcher, Result};
use crate::utils::transcript::Transcript;
use async_trait::async_trait;
use std::time::Duration;

pub const FETCH_OPERATION: &str = "fetch_data";
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_secs(1);

/// Pretends to call a remote API: announces the URL, sleeps, returns a fixed payload.
/// No request is ever sent.
#[derive(Debug, Clone)]
pub struct SimulatedFetcher {
    delay: Duration,
    transcript: Transcript,
}

impl SimulatedFetcher {
    pub fn new(delay: Duration, transcript: Transcript) -> Self {
        Self { delay, transcript }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl Fetcher for SimulatedFetcher {
    fn name(&self) -> &str {
        FETCH_OPERATION
    }

    async fn fetch(&self, url: &str) -> Result<FetchResult> {
        self.transcript.line(format!("Fetching data from {}", url));
        tracing::debug!("Simulating {:?} of latency for {}", self.delay, url);

        // 模擬網路延遲
        tokio::time::sleep(self.delay).await;

        Ok(FetchResult::success())
    }
}

/// Runs both fetches concurrently on the current task and waits for both.
/// The pair comes back in call order no matter which finished first.
pub async fn fetch_pair<F>(fetcher: &F, first: &str, second: &str) -> Result<(FetchResult, FetchResult)>
where
    F: Fetcher + ?Sized,
{
    tokio::try_join!(fetcher.fetch(first), fetcher.fetch(second))
}
