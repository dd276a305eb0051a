use std::sync::Arc;
use std::time::Duration;

use actix_web::{App, HttpServer, web};
use log::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::adapters::web::api_docs::ApiDoc;
use crate::adapters::web::errors::{invalid_method, json_config};
use crate::adapters::web::payments_handler::payments;
use crate::adapters::web::payments_status_handler::payments_status;
use crate::config::Config;
use crate::infrastructure::id_generator::uuid_payment_id_generator::UuidPaymentIdGenerator;
use crate::use_cases::create_payment::CreatePaymentUseCase;
use crate::use_cases::get_payment_status::GetPaymentStatusUseCase;

pub mod adapters;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod use_cases;

pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	env_logger::init();

	let create_payment_use_case =
		CreatePaymentUseCase::new(UuidPaymentIdGenerator);
	let get_payment_status_use_case = GetPaymentStatusUseCase;

	info!(
		"Starting Actix-Web server on {}:{}...",
		config.server_host, config.server_port
	);
	info!(
		"Swagger UI: http://{}:{}/swagger/",
		config.server_host, config.server_port
	);
	HttpServer::new(move || {
		App::new()
			.app_data(json_config())
			.app_data(web::Data::new(create_payment_use_case.clone()))
			.app_data(web::Data::new(get_payment_status_use_case))
			.service(
				web::resource("/payments")
					.route(web::post().to(payments))
					.default_service(web::route().to(invalid_method)),
			)
			.service(
				web::resource("/payments/status")
					.route(web::get().to(payments_status))
					.default_service(web::route().to(invalid_method)),
			)
			.service(
				SwaggerUi::new("/swagger/{_:.*}")
					.url("/api-docs/openapi.json", ApiDoc::openapi()),
			)
	})
	.keep_alive(Duration::from_secs(config.server_keepalive))
	.bind((config.server_host.as_str(), config.server_port))?
	.run()
	.await
}
