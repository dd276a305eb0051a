pub mod create_payment;
pub mod dto;
pub mod get_payment_status;
