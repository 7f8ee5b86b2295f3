use crate::model::contact::ContactRecord;
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

/// Storage seam for accepted contact messages.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn save(&self, record: ContactRecord) -> RepositoryResult<ContactRecord>;
    async fn find_by_id(&self, id: &str) -> RepositoryResult<ContactRecord>;
    async fn count(&self) -> RepositoryResult<u64>;
}

#[derive(Default)]
pub struct InMemoryContactRepository {
    records: RwLock<Vec<ContactRecord>>,
}

impl InMemoryContactRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    #[tracing::instrument(skip(self, record), fields(id = %record.id))]
    async fn save(&self, record: ContactRecord) -> RepositoryResult<ContactRecord> {
        let mut records = self.records.write().await;
        if records.iter().any(|existing| existing.id == record.id) {
            return Err(RepositoryError::already_exists(format!(
                "Contact id collision: {}",
                record.id
            )));
        }
        records.push(record.clone());
        info!("Contact message stored, {} total", records.len());
        Ok(record)
    }

    async fn find_by_id(&self, id: &str) -> RepositoryResult<ContactRecord> {
        let records = self.records.read().await;
        records
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(format!("Contact not found for id: {}", id)))
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let records = self.records.read().await;
        Ok(records.len() as u64)
    }
}
