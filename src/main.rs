use std::sync::Arc;

use payment_intake::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	let config = Arc::new(
		payment_intake::config::Config::load()
			.expect("Failed to load configuration"),
	);
	run(config).await
}
