use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, instrument, warn};

use crate::dto::contact_dto::CreateContactRequest;
use crate::model::contact::ContactRecord;
use crate::repository::contact_repo::ContactRepository;
use crate::util::email::Notifier;
use crate::util::error::ServiceError;
use crate::util::id;

#[derive(Debug, Clone)]
pub struct ContactReceipt {
    pub contact_id: String,
}

#[async_trait]
pub trait ContactService: Send + Sync {
    async fn submit_contact(
        &self,
        request: CreateContactRequest,
    ) -> Result<ContactReceipt, ServiceError>;
}

pub struct ContactServiceImpl {
    pub contact_repo: Arc<dyn ContactRepository>,
    pub notifier: Arc<dyn Notifier>,
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    #[instrument(skip(self, request), fields(email = %request.email))]
    async fn submit_contact(
        &self,
        request: CreateContactRequest,
    ) -> Result<ContactReceipt, ServiceError> {
        let message = request.into_domain();
        let id = id::submission_id(id::CONTACT_PREFIX);
        let record = ContactRecord {
            id,
            message,
            created_at: chrono::Utc::now().to_rfc3339(),
        };

        let record = self
            .contact_repo
            .save(record)
            .await
            .map_err(ServiceError::from)?;

        info!(
            contact_id = %record.id,
            name = %record.message.name,
            email = %record.message.email,
            phone = %record.message.phone,
            subject = %record.message.subject,
            "New contact form submission"
        );

        if let Err(e) = self.notifier.contact_received(&record).await {
            warn!("Failed to send contact notifications: {e}");
        }

        Ok(ContactReceipt {
            contact_id: record.id,
        })
    }
}
