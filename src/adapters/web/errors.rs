use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, ResponseError, error, web};
use derive_more::derive::{Display, Error};
use log::error;

use crate::use_cases::create_payment::CreatePaymentError;

/// The full error surface of the API.
///
/// Each variant maps to one status code and one fixed text body. Internal
/// detail, notably JSON parser diagnostics, goes to the operational log
/// and never into a response.
#[derive(Debug, Display, Error)]
pub enum ApiError {
	#[display("Invalid method")]
	MethodNotAllowed,
	#[display("Invalid JSON")]
	MalformedInput,
	#[display("Amount must be positive")]
	InvalidAmount,
	#[display("Currency is required")]
	MissingCurrency,
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.content_type(ContentType::plaintext())
			.body(self.to_string())
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
			ApiError::MalformedInput |
			ApiError::InvalidAmount |
			ApiError::MissingCurrency => StatusCode::BAD_REQUEST,
		}
	}
}

impl From<CreatePaymentError> for ApiError {
	fn from(e: CreatePaymentError) -> Self {
		match e {
			CreatePaymentError::NonPositiveAmount => ApiError::InvalidAmount,
			CreatePaymentError::EmptyCurrency => ApiError::MissingCurrency,
		}
	}
}

/// Json extractor configuration for the payment endpoints: decode failures
/// are logged with their parser detail and answered with the generic
/// `Invalid JSON` body. The `Content-Type` header is not enforced; the
/// body alone decides whether a request parses.
pub fn json_config() -> web::JsonConfig {
	web::JsonConfig::default()
		.content_type_required(false)
		.error_handler(|err, _req| {
			error!("Error decoding JSON: {err}");
			ApiError::MalformedInput.into()
		})
}

/// Fallback route for a resource hit with an unsupported verb.
pub async fn invalid_method() -> HttpResponse {
	ApiError::MethodNotAllowed.error_response()
}
