use derive_more::derive::{Display, Error};

use crate::domain::id_generator::PaymentIdGenerator;
use crate::domain::payment::{Payment, PaymentStatus};
use crate::use_cases::dto::CreatePaymentCommand;

#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum CreatePaymentError {
	#[display("Amount must be positive")]
	NonPositiveAmount,
	#[display("Currency is required")]
	EmptyCurrency,
}

#[derive(Clone)]
pub struct CreatePaymentUseCase<G: PaymentIdGenerator> {
	id_generator: G,
}

impl<G: PaymentIdGenerator> CreatePaymentUseCase<G> {
	pub fn new(id_generator: G) -> Self {
		Self { id_generator }
	}

	/// Validates the command and enriches it into an accepted payment.
	///
	/// Checks run in order and stop at the first failure: the amount must
	/// be strictly positive, then the currency must be non-empty. The
	/// accepted payment gets a fresh id and starts out `pending`.
	pub fn execute(
		&self,
		command: CreatePaymentCommand,
	) -> Result<Payment, CreatePaymentError> {
		if !command.amount.is_positive() {
			return Err(CreatePaymentError::NonPositiveAmount);
		}
		if command.currency.is_empty() {
			return Err(CreatePaymentError::EmptyCurrency);
		}

		Ok(Payment {
			id: self.id_generator.generate(),
			amount: command.amount,
			currency: command.currency,
			status: PaymentStatus::Pending,
			// An empty description means "no description", matching the
			// omit-when-empty wire contract.
			description: command.description.filter(|d| !d.is_empty()),
		})
	}
}
