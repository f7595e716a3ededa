use crate::domain::model::FetchResult;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// An async operation that turns a URL into a [`FetchResult`].
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Name used when reporting on this operation, e.g. by the timing wrapper.
    fn name(&self) -> &str;

    async fn fetch(&self, url: &str) -> Result<FetchResult>;
}

pub trait TourSettings: Send + Sync {
    fn output_path(&self) -> &str;
    fn message(&self) -> &str;
    fn fetch_delay(&self) -> Duration;
    fn primary_url(&self) -> &str;
    fn secondary_url(&self) -> &str;
}
