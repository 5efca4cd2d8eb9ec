use crate::value::ty::Operator;
use crate::value::Typename;
use std::fmt::{self, Display, Formatter};

/// An error type that contains both an [`ErrorKind`] and the handler it was raised in, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct Error {
	pub kind: ErrorKind,

	/// The qualified name of the handler (eg `int32.__div`) the error escaped from.
	pub context: Option<&'static str>,
}

/// Type alias for [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Possible errors that can be raised by the integer bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
#[non_exhaustive]
pub enum ErrorKind {
	/// Division or modulo by a zero divisor.
	DivisionByZero,

	/// Exponentiation with a zero exponent, which the exponentiation routine has no base case for.
	ZeroExponent,

	/// A byte string longer than eight bytes was given where an integer was expected.
	ArgumentTooLong {
		position: usize,
		len: usize,
	},

	/// An `expected` type was required at `position`, but a `given` was given.
	InvalidTypeGiven {
		position: usize,
		expected: Typename,
		given: Typename,
	},

	/// A handler was given the wrong amount of arguments.
	PositionalArgumentMismatch {
		given: usize,
		expected: usize,
	},

	/// None of the operands of `operator` have a handler for it.
	NoHandler {
		operator: Operator,
		given: Typename,
	},
}

impl Error {
	/// Annotates `self` with the handler it escaped from, unless it's already annotated.
	pub fn within(mut self, context: &'static str) -> Self {
		self.context.get_or_insert(context);
		self
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self.context {
			Some(context) if f.alternate() => write!(f, "error in {context}: {}", self.kind),
			_ => Display::fmt(&self.kind, f),
		}
	}
}

impl Display for ErrorKind {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Self::DivisionByZero => write!(f, "division by zero"),
			Self::ZeroExponent => write!(f, "exponentiation by a zero exponent is undefined"),
			Self::ArgumentTooLong { position, len } => write!(
				f,
				"bad argument #{position} (the string (length = {len}) is too long to be an argument)"
			),
			Self::InvalidTypeGiven { position, expected, given } => {
				write!(f, "bad argument #{position} ({expected} expected, got {given})")
			}
			Self::PositionalArgumentMismatch { given, expected } => {
				write!(f, "positional argument count mismatch (given {given} expected {expected})")
			}
			Self::NoHandler { operator, given } => {
				write!(f, "attempt to perform '{}' on a {given} value", operator.symbol())
			}
		}
	}
}

impl From<ErrorKind> for Error {
	fn from(kind: ErrorKind) -> Self {
		Self { kind, context: None }
	}
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_division_by_zero_message() {
		assert_eq!("division by zero", Error::from(ErrorKind::DivisionByZero).to_string());
	}

	#[test]
	fn test_argument_too_long_names_position_and_length() {
		let err = Error::from(ErrorKind::ArgumentTooLong { position: 2, len: 9 });

		assert_eq!(
			"bad argument #2 (the string (length = 9) is too long to be an argument)",
			err.to_string()
		);
	}

	#[test]
	fn test_alternate_display_includes_context() {
		let err = Error::from(ErrorKind::DivisionByZero).within("int32.__div");

		assert_eq!("division by zero", format!("{err}"));
		assert_eq!("error in int32.__div: division by zero", format!("{err:#}"));
	}

	#[test]
	fn test_within_keeps_innermost_context() {
		let err = Error::from(ErrorKind::DivisionByZero).within("int32.__mod").within("int32.__div");

		assert_eq!(Some("int32.__mod"), err.context);
	}
}
