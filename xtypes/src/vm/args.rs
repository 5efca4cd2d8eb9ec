use crate::value::ty::{Int, Repr};
use crate::value::{Gc, Value};
use crate::{ErrorKind, Result};

/// The window of the host call stack a handler is given.
///
/// Argument positions are 1-based, matching how the host numbers them in error messages.
#[derive(Default, Debug, Clone, Copy)]
pub struct Args<'a> {
	positional: &'a [Value],
}

impl<'a> Args<'a> {
	#[must_use]
	pub const fn new(positional: &'a [Value]) -> Self {
		Self { positional }
	}

	#[must_use]
	pub const fn positional(self) -> &'a [Value] {
		self.positional
	}

	#[must_use]
	pub const fn len(self) -> usize {
		self.positional.len()
	}

	#[must_use]
	pub const fn is_empty(self) -> bool {
		self.len() == 0
	}

	/// Gets the argument at the 1-based `position`.
	#[must_use]
	pub fn get(self, position: usize) -> Option<&'a Value> {
		position.checked_sub(1).and_then(|index| self.positional.get(index))
	}

	/// Gets the argument at the 1-based `position`, erroring if it wasn't given.
	pub fn try_get(self, position: usize) -> Result<&'a Value> {
		self.get(position).ok_or_else(|| {
			ErrorKind::PositionalArgumentMismatch { given: self.len(), expected: position }.into()
		})
	}

	/// Gets the boxed integer at the 1-based `position`, without any coercion.
	pub fn try_downcast<T: Repr>(self, position: usize) -> Result<&'a Gc<Int<T>>> {
		let value = self.try_get(position)?;

		value.downcast::<T>().ok_or_else(|| {
			ErrorKind::InvalidTypeGiven { position, expected: T::TYPENAME, given: value.typename() }
				.into()
		})
	}

	pub fn assert_positional_len(self, len: usize) -> Result<()> {
		if self.positional.len() == len {
			Ok(())
		} else {
			Err(ErrorKind::PositionalArgumentMismatch { given: self.positional.len(), expected: len }
				.into())
		}
	}
}

impl<'a> From<&'a [Value]> for Args<'a> {
	fn from(positional: &'a [Value]) -> Self {
		Self::new(positional)
	}
}

impl std::ops::Index<usize> for Args<'_> {
	type Output = Value;

	fn index(&self, index: usize) -> &Self::Output {
		&self.positional[index]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_positions_are_one_based() {
		let values = [Value::from(1), Value::from("two")];
		let args = Args::new(&values);

		assert!(args.get(0).is_none());
		assert_eq!("number", args.get(1).unwrap().typename());
		assert_eq!("string", args.get(2).unwrap().typename());
		assert!(args.get(3).is_none());
		assert_eq!("string", args[1].typename());
	}

	#[test]
	fn test_try_get_missing_argument() {
		assert_matches!(
			Args::default().try_get(1),
			Err(crate::Error {
				kind: ErrorKind::PositionalArgumentMismatch { given: 0, expected: 1 },
				..
			})
		);
	}

	#[test]
	fn test_assert_positional_len() {
		let values = [Value::NIL, Value::NIL];
		let args = Args::from(&values[..]);

		assert!(args.assert_positional_len(2).is_ok());
		assert_matches!(
			args.assert_positional_len(1),
			Err(crate::Error {
				kind: ErrorKind::PositionalArgumentMismatch { given: 2, expected: 1 },
				..
			})
		);
	}

	#[test]
	fn test_try_downcast() {
		let values = [Value::from(Int::new(3_u32)), Value::from(3)];
		let args = Args::new(&values);

		assert_eq!(3, args.try_downcast::<u32>(1).unwrap().get());
		assert_matches!(
			args.try_downcast::<u32>(2),
			Err(crate::Error {
				kind: ErrorKind::InvalidTypeGiven { position: 2, expected: "uint32", given: "number" },
				..
			})
		);
	}
}
