use derive_more::derive::Display;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::money::Money;

#[derive(
	Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Display, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
	#[display("pending")]
	Pending,
	#[display("succeeded")]
	Succeeded,
	#[display("failed")]
	Failed,
}

/// A payment as served to clients. `id` and `status` are always assigned
/// by server logic, never taken from client input.
#[derive(Debug, Deserialize, Serialize, Clone, ToSchema)]
pub struct Payment {
	pub id: String,
	#[schema(value_type = f64, example = 1000.5)]
	pub amount: Money,
	pub currency: String,
	pub status: PaymentStatus,
	#[serde(skip_serializing_if = "Option::is_none", default)]
	pub description: Option<String>,
}
