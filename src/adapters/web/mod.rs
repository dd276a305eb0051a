pub mod api_docs;
pub mod errors;
pub mod payments_handler;
pub mod payments_status_handler;
pub mod schema;
