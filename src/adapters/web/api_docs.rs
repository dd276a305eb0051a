//! OpenAPI 3 document for the payment-intake API.
//!
//! Pure tooling: the interactive Swagger UI served from this document is
//! mounted at `/swagger/` and is not part of the functional contract.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
	info(
		title = "Payment System API",
		description = "API for creating payments and checking payment status",
		version = "1.0"
	),
	paths(
		crate::adapters::web::payments_handler::payments,
		crate::adapters::web::payments_status_handler::payments_status
	),
	components(schemas(
		crate::adapters::web::schema::PaymentRequest,
		crate::domain::payment::Payment,
		crate::domain::payment::PaymentStatus
	))
)]
pub struct ApiDoc;
