use serde::{Deserialize, Serialize};

use crate::domain::money::Money;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CreatePaymentCommand {
	pub amount:      Money,
	pub currency:    String,
	pub description: Option<String>,
}
