use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::money::Money;

/// Wire shape of a payment-creation request.
///
/// `id` and `status` are deliberately absent here: both are assigned by
/// server logic and never trusted from the client.
#[derive(Debug, Deserialize, Serialize, Clone, ToSchema)]
pub struct PaymentRequest {
	#[schema(value_type = f64, example = 100.5)]
	pub amount:      Money,
	pub currency:    String,
	#[serde(default)]
	pub description: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_description_defaults_to_none() {
		let request: PaymentRequest =
			serde_json::from_str(r#"{"amount":100.5,"currency":"RUB"}"#)
				.unwrap();

		assert_eq!(request.amount, Money::from_minor_units(10050));
		assert_eq!(request.currency, "RUB");
		assert_eq!(request.description, None);
	}

	#[test]
	fn test_wrong_types_are_rejected() {
		let result = serde_json::from_str::<PaymentRequest>(
			r#"{"amount":"a lot","currency":"RUB"}"#,
		);

		assert!(result.is_err());
	}
}
