pub mod contact_handler;
pub mod payment_handler;
pub mod quote_handler;
