use crate::core::{FetchResult, Fetcher, Result};
use crate::utils::transcript::Transcript;
use async_trait::async_trait;
use std::future::Future;
use tokio::time::Instant;

/// Awaits `operation` and reports `<name> took <secs> seconds`.
///
/// The output is returned untouched, errors included; the timing line is
/// written either way since the operation did finish.
pub async fn timed<F, T>(name: &str, transcript: &Transcript, operation: F) -> T
where
    F: Future<Output = T>,
{
    let start = Instant::now();
    let result = operation.await;
    let elapsed = start.elapsed();

    transcript.line(format!("{} took {:.2} seconds", name, elapsed.as_secs_f64()));
    tracing::debug!(operation = name, elapsed_ms = elapsed.as_millis() as u64, "timed call finished");

    result
}

/// Decorates any [`Fetcher`] with [`timed`] while keeping its interface.
pub struct Timed<F> {
    inner: F,
    transcript: Transcript,
}

impl<F: Fetcher> Timed<F> {
    pub fn new(inner: F, transcript: Transcript) -> Self {
        Self { inner, transcript }
    }
}

#[async_trait]
impl<F: Fetcher> Fetcher for Timed<F> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn fetch(&self, url: &str) -> Result<FetchResult> {
        timed(self.inner.name(), &self.transcript, self.inner.fetch(url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::TourError;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_timed_reports_elapsed_with_two_decimals() {
        let transcript = Transcript::silent();
        let value = timed("slow_op", &transcript, async {
            tokio::time::sleep(Duration::from_millis(1500)).await;
            42
        })
        .await;

        assert_eq!(value, 42);
        assert_eq!(transcript.lines(), vec!["slow_op took 1.50 seconds"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timed_passes_errors_through() {
        let transcript = Transcript::silent();
        let result: Result<()> = timed("failing_op", &transcript, async {
            Err(TourError::ConfigError {
                message: "boom".to_string(),
            })
        })
        .await;

        assert!(matches!(result, Err(TourError::ConfigError { .. })));
        assert_eq!(transcript.lines(), vec!["failing_op took 0.00 seconds"]);
    }

    struct Echo;

    #[async_trait]
    impl Fetcher for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        async fn fetch(&self, url: &str) -> Result<FetchResult> {
            Ok(FetchResult {
                status: "success".to_string(),
                data: url.to_string(),
            })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_decorator_keeps_name_and_result() {
        let transcript = Transcript::silent();
        let fetcher = Timed::new(Echo, transcript.clone());

        assert_eq!(fetcher.name(), "echo");
        let result = fetcher.fetch("https://example.com").await.unwrap();
        assert_eq!(result.data, "https://example.com");
        assert_eq!(transcript.lines(), vec!["echo took 0.00 seconds"]);
    }
}
