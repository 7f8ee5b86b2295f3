use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::model::quote::{HomeSize, LeadSource, MoveType, QuoteRequest};

// Wire-facing structs keep the site's camelCase field names so validation
// errors report the exact field the client submitted.

#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateQuoteRequest {
    #[serde(default)]
    #[validate(length(min = 2, message = "First name must be at least 2 characters"))]
    pub firstName: String,

    #[serde(default)]
    #[validate(length(min = 2, message = "Last name must be at least 2 characters"))]
    pub lastName: String,

    #[serde(default)]
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,

    #[serde(default)]
    #[validate(length(min = 10, message = "Please enter a valid phone number"))]
    pub phone: String,

    #[serde(default)]
    #[validate(custom(function = "validate_move_type", message = "Please select a move type"))]
    pub moveType: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "Please select a move date"))]
    pub moveDate: String,

    #[serde(default)]
    #[validate(length(min = 5, message = "Please enter a valid origin address"))]
    pub fromAddress: String,

    #[serde(default)]
    #[validate(length(min = 2, message = "Please enter origin city"))]
    pub fromCity: String,

    #[serde(default)]
    #[validate(length(min = 2, message = "Please enter origin state"))]
    pub fromState: String,

    #[serde(default)]
    #[validate(length(min = 5, message = "Please enter valid ZIP code"))]
    pub fromZip: String,

    #[serde(default)]
    #[validate(length(min = 5, message = "Please enter a valid destination address"))]
    pub toAddress: String,

    #[serde(default)]
    #[validate(length(min = 2, message = "Please enter destination city"))]
    pub toCity: String,

    #[serde(default)]
    #[validate(length(min = 2, message = "Please enter destination state"))]
    pub toState: String,

    #[serde(default)]
    #[validate(length(min = 5, message = "Please enter valid ZIP code"))]
    pub toZip: String,

    #[serde(default)]
    #[validate(custom(function = "validate_home_size", message = "Please select property size"))]
    pub homeSize: String,

    #[serde(default)]
    pub packingService: bool,

    #[serde(default)]
    pub storageService: bool,

    pub specialItems: Option<String>,

    pub additionalNotes: Option<String>,

    #[validate(custom(function = "validate_lead_source", message = "Please select a valid option"))]
    pub hearAboutUs: Option<String>,
}

impl CreateQuoteRequest {
    /// Convert into the domain entity. Only meaningful after `validate()`
    /// has passed; enum fields that fail to parse yield `None`.
    pub fn into_domain(self) -> Option<QuoteRequest> {
        let move_type = MoveType::parse(&self.moveType)?;
        let home_size = HomeSize::parse(&self.homeSize)?;
        let hear_about_us = match self.hearAboutUs {
            Some(value) => Some(LeadSource::parse(&value)?),
            None => None,
        };
        Some(QuoteRequest {
            first_name: self.firstName,
            last_name: self.lastName,
            email: self.email,
            phone: self.phone,
            move_type,
            move_date: self.moveDate,
            from_address: self.fromAddress,
            from_city: self.fromCity,
            from_state: self.fromState,
            from_zip: self.fromZip,
            to_address: self.toAddress,
            to_city: self.toCity,
            to_state: self.toState,
            to_zip: self.toZip,
            home_size,
            packing_service: self.packingService,
            storage_service: self.storageService,
            special_items: self.specialItems,
            additional_notes: self.additionalNotes,
            hear_about_us,
        })
    }
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteSubmissionResponse {
    pub success: bool,
    pub quoteId: String,
    pub estimatedCost: i64,
    pub message: String,
}

fn validate_move_type(value: &str) -> Result<(), ValidationError> {
    if MoveType::parse(value).is_some() {
        Ok(())
    } else {
        Err(ValidationError::new("move_type"))
    }
}

fn validate_home_size(value: &str) -> Result<(), ValidationError> {
    if HomeSize::parse(value).is_some() {
        Ok(())
    } else {
        Err(ValidationError::new("home_size"))
    }
}

fn validate_lead_source(value: &str) -> Result<(), ValidationError> {
    if LeadSource::parse(value).is_some() {
        Ok(())
    } else {
        Err(ValidationError::new("lead_source"))
    }
}
