use uuid::Uuid;

use crate::domain::id_generator::PaymentIdGenerator;

/// Assigns `pay_`-prefixed random v4 UUID identifiers.
///
/// The prototype this service grew from handed out the constant
/// `pay_12345` for every creation; unique identifiers were always the
/// intent, so a fresh UUID is drawn per payment instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidPaymentIdGenerator;

impl PaymentIdGenerator for UuidPaymentIdGenerator {
	fn generate(&self) -> String {
		format!("pay_{}", Uuid::new_v4().simple())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_generated_ids_carry_the_pay_prefix() {
		let id = UuidPaymentIdGenerator.generate();
		assert!(id.starts_with("pay_"));
		assert!(id.len() > "pay_".len());
	}

	#[test]
	fn test_generated_ids_are_unique() {
		let generator = UuidPaymentIdGenerator;
		assert_ne!(generator.generate(), generator.generate());
	}
}
