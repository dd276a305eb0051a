/// Source of server-assigned payment identifiers.
pub trait PaymentIdGenerator: Send + Sync + 'static {
	fn generate(&self) -> String;
}
