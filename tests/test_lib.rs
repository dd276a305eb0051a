use std::sync::Arc;

use payment_intake::config::Config;

#[actix_web::test]
async fn test_run_bind_error() {
	let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
	let port = listener.local_addr().unwrap().port();

	let config = Arc::new(Config {
		server_host: "127.0.0.1".to_string(),
		server_port: port,
		server_keepalive: 60,
	});

	assert!(payment_intake::run(config).await.is_err());
	drop(listener);
}
