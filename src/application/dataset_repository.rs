// Repository trait for race result data access
use crate::domain::record::RaceRecord;
use async_trait::async_trait;

#[async_trait]
pub trait DatasetRepository: Send + Sync {
    /// Fetch the full race result dataset
    async fn fetch_records(&self) -> anyhow::Result<Vec<RaceRecord>>;
}
