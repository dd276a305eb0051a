use crate::domain::money::Money;
use crate::domain::payment::{Payment, PaymentStatus};

/// Answers a status lookup.
///
/// There is no storage behind this service, so the lookup always returns
/// the same canned record. A real lookup needs a persistence seam keyed by
/// payment id first; until then the response illustrates the shape of a
/// settled payment.
#[derive(Debug, Clone, Copy, Default)]
pub struct GetPaymentStatusUseCase;

impl GetPaymentStatusUseCase {
	pub fn execute(&self) -> Payment {
		Payment {
			id: "pay_12345".to_string(),
			amount: Money::from_minor_units(100_050),
			currency: "RUB".to_string(),
			status: PaymentStatus::Succeeded,
			description: None,
		}
	}
}
