use actix_web::{HttpResponse, web};

use crate::domain::payment::Payment;
use crate::use_cases::get_payment_status::GetPaymentStatusUseCase;

#[utoipa::path(
	get,
	path = "/payments/status",
	responses(
		(status = 200, description = "Payment status", body = Payment),
		(status = 405, description = "Invalid method")
	),
	tag = "payments"
)]
pub async fn payments_status(
	get_payment_status_use_case: web::Data<GetPaymentStatusUseCase>,
) -> HttpResponse {
	HttpResponse::Ok().json(get_payment_status_use_case.execute())
}
