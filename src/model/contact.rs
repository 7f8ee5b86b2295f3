use serde::{Deserialize, Serialize};

/// A validated contact-form message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// A contact message that has been accepted and assigned an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRecord {
    pub id: String,
    pub message: ContactMessage,
    pub created_at: String,
}
