use crate::model::quote::QuoteRecord;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

/// Storage seam for accepted quote requests. The shipped implementation is
/// in-process; a real datastore slots in behind this trait without touching
/// validation or estimation.
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    async fn save(&self, record: QuoteRecord) -> RepositoryResult<QuoteRecord>;
    async fn find_by_id(&self, id: &str) -> RepositoryResult<QuoteRecord>;
    async fn list(&self, page: u32, limit: u32) -> RepositoryResult<Vec<QuoteRecord>>;
    async fn count(&self) -> RepositoryResult<u64>;
}

#[derive(Default)]
pub struct InMemoryQuoteRepository {
    records: RwLock<Vec<QuoteRecord>>,
}

impl InMemoryQuoteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuoteRepository for InMemoryQuoteRepository {
    #[tracing::instrument(skip(self, record), fields(id = %record.id))]
    async fn save(&self, record: QuoteRecord) -> RepositoryResult<QuoteRecord> {
        let mut records = self.records.write().await;
        if records.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::already_exists(format!(
                "Quote id collision: {}",
                record.id
            )));
        }
        records.push(record.clone());
        info!("Quote stored, {} total", records.len());
        Ok(record)
    }

    async fn find_by_id(&self, id: &str) -> RepositoryResult<QuoteRecord> {
        let records = self.records.read().await;
        records
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(format!("Quote not found for id: {}", id)))
    }

    async fn list(&self, page: u32, limit: u32) -> RepositoryResult<Vec<QuoteRecord>> {
        let records = self.records.read().await;
        let skip = page.saturating_sub(1) * limit;
        Ok(records
            .iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let records = self.records.read().await;
        Ok(records.len() as u64)
    }
}
