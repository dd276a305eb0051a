use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Monetary amount held as a count of minor units, two decimal places.
///
/// Amounts cross the JSON boundary as plain numbers (`1000.5`), but every
/// comparison after acceptance works on the integer minor-unit count, so
/// no binary floating-point error leaks into the domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Money(i64);

const MINOR_UNITS_PER_MAJOR: i64 = 100;

impl Money {
	pub const fn from_minor_units(minor_units: i64) -> Self {
		Money(minor_units)
	}

	/// Converts a major-unit value (e.g. `100.5`) to minor units, rounding
	/// to the nearest unit. Anything below half a minor unit collapses to
	/// zero and is therefore not an acceptable payment amount.
	pub fn from_major_units(value: f64) -> Self {
		Money((value * MINOR_UNITS_PER_MAJOR as f64).round() as i64)
	}

	pub const fn minor_units(self) -> i64 {
		self.0
	}

	pub fn as_major_units(self) -> f64 {
		self.0 as f64 / MINOR_UNITS_PER_MAJOR as f64
	}

	pub const fn is_positive(self) -> bool {
		self.0 > 0
	}
}

impl fmt::Display for Money {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:.2}", self.as_major_units())
	}
}

impl Serialize for Money {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_f64(self.as_major_units())
	}
}

impl<'de> Deserialize<'de> for Money {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = f64::deserialize(deserializer)?;
		Ok(Money::from_major_units(value))
	}
}
