use actix_web::{HttpResponse, web};
use log::info;

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::PaymentRequest;
use crate::domain::payment::Payment;
use crate::infrastructure::id_generator::uuid_payment_id_generator::UuidPaymentIdGenerator;
use crate::use_cases::create_payment::CreatePaymentUseCase;
use crate::use_cases::dto::CreatePaymentCommand;

#[utoipa::path(
	post,
	path = "/payments",
	request_body = PaymentRequest,
	responses(
		(status = 201, description = "Payment accepted", body = Payment),
		(status = 400, description = "Invalid JSON, non-positive amount or missing currency"),
		(status = 405, description = "Invalid method")
	),
	tag = "payments"
)]
pub async fn payments(
	payload: web::Json<PaymentRequest>,
	create_payment_use_case: web::Data<
		CreatePaymentUseCase<UuidPaymentIdGenerator>,
	>,
) -> Result<HttpResponse, ApiError> {
	let request = payload.into_inner();
	let command = CreatePaymentCommand {
		amount:      request.amount,
		currency:    request.currency,
		description: request.description,
	};

	let payment = create_payment_use_case.execute(command)?;

	info!(
		"Payment created: id={}, amount={} {}, status={}, description={:?}",
		payment.id,
		payment.amount,
		payment.currency,
		payment.status,
		payment.description
	);

	Ok(HttpResponse::Created().json(payment))
}
