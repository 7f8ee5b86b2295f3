use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::contact::ContactMessage;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateContactRequest {
    #[serde(default)]
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[serde(default)]
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 10, message = "Please enter a valid phone number"))]
    pub phone: String,

    #[serde(default)]
    #[validate(length(min = 5, message = "Subject must be at least 5 characters"))]
    pub subject: String,

    #[serde(default)]
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}

impl CreateContactRequest {
    pub fn into_domain(self) -> ContactMessage {
        ContactMessage {
            name: self.name,
            email: self.email,
            phone: self.phone,
            subject: self.subject,
            message: self.message,
        }
    }
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmissionResponse {
    pub success: bool,
    pub contactId: String,
    pub message: String,
}
