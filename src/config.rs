use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub server_host: String,
	pub server_port: u16,
	pub server_keepalive: u64,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("server_host", "0.0.0.0")?
			.set_default("server_port", 8080_i64)?
			.set_default("server_keepalive", 60_i64)?
			.add_source(config::Environment::with_prefix("APP"))
			.build()?;

		config_builder.try_deserialize()
	}
}
