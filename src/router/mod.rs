pub mod contact_router;
pub mod payment_router;
pub mod quote_router;
