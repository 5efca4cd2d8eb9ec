//! Lenient conversion of host call-stack values into [`Int`]s.
//!
//! Conversions never range-check: numbers are truncated and reinterpreted, and byte strings are
//! read as packed little-endian integers.

use crate::value::ty::{Int, Repr};
use crate::value::Value;
use crate::vm::Args;
use crate::{ErrorKind, Result};

/// The longest byte string that can be read as an integer.
pub const MAX_BYTES: usize = 8;

impl<T: Repr> Int<T> {
	/// Converts the argument at the 1-based `position` into an integer.
	///
	/// Boxed integers of the same representation are used as-is; host numbers and byte strings of
	/// up to [`MAX_BYTES`] bytes are converted. Everything else is a type error.
	pub fn coerce(args: Args<'_>, position: usize) -> Result<Self> {
		let value = args.try_get(position)?;

		let int = match value {
			Value::Integer(integer) => Self::from_integer(*integer),
			Value::Float(float) => Self::from_float(*float),
			Value::Text(text) => Self::from_bytes(text.as_bytes(), position)?,
			_ => return args.try_downcast::<T>(position).map(|int| **int),
		};

		trace!(typename = T::TYPENAME, position, ?value, %int, "coerced argument");
		Ok(int)
	}

	/// Reinterprets a host integer as two's complement, then narrows it.
	#[must_use]
	pub fn from_integer(integer: i64) -> Self {
		Self::from_bits(integer as u64)
	}

	/// Truncates a host float toward zero, then narrows it.
	///
	/// Non-negative floats go through `u64` so the whole unsigned range survives; negative ones go
	/// through `i64`. Both saturate at the 64-bit bounds and `NaN` becomes zero.
	#[must_use]
	pub fn from_float(float: f64) -> Self {
		if float >= 0.0 {
			Self::from_bits(float as u64)
		} else {
			Self::from_integer(float as i64)
		}
	}

	/// Reads `bytes` as a little-endian unsigned integer, then narrows it.
	///
	/// `position` is only used for reporting strings longer than [`MAX_BYTES`].
	pub fn from_bytes(bytes: &[u8], position: usize) -> Result<Self> {
		if bytes.len() > MAX_BYTES {
			return Err(ErrorKind::ArgumentTooLong { position, len: bytes.len() }.into());
		}

		let bits = bytes
			.iter()
			.enumerate()
			.fold(0_u64, |bits, (i, &byte)| bits | (u64::from(byte) << (i * 8)));

		Ok(Self::from_bits(bits))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::Gc;

	fn coerce<T: Repr>(value: Value) -> Result<Int<T>> {
		Int::coerce(Args::new(&[value]), 1)
	}

	#[test]
	fn test_boxed_value_is_used_directly() {
		assert_eq!(Ok(Int::new(-9_i32)), coerce::<i32>(Int::new(-9_i32).into()));
		assert_eq!(Ok(Int::new(u64::MAX)), coerce::<u64>(Gc::new(Int::new(u64::MAX)).into()));
	}

	#[test]
	fn test_integers_truncate() {
		assert_eq!(Ok(Int::new(1_i32)), coerce::<i32>(Value::from(1)));
		assert_eq!(Ok(Int::new(u32::MAX)), coerce::<u32>(Value::from(-1)));
		assert_eq!(Ok(Int::new(u64::MAX)), coerce::<u64>(Value::from(-1)));
		assert_eq!(Ok(Int::new(0_u32)), coerce::<u32>(Value::from(1_i64 << 32)));
		assert_eq!(Ok(Int::new(i32::MIN)), coerce::<i32>(Value::from(0x8000_0000_i64)));
		assert_eq!(Ok(Int::new(i64::MIN)), coerce::<i64>(Value::from(i64::MIN)));
	}

	#[test]
	fn test_floats_truncate_toward_zero() {
		assert_eq!(Ok(Int::new(2_i32)), coerce::<i32>(Value::from(2.9)));
		assert_eq!(Ok(Int::new(-2_i32)), coerce::<i32>(Value::from(-2.9)));
		assert_eq!(Ok(Int::new(u32::MAX)), coerce::<u32>(Value::from(-1.0)));
		assert_eq!(Ok(Int::new(1_u64 << 63)), coerce::<u64>(Value::from(9223372036854775808.0)));
		assert_eq!(Ok(Int::new(0_i64)), coerce::<i64>(Value::from(f64::NAN)));
	}

	#[test]
	fn test_bytes_are_little_endian() {
		assert_eq!(Ok(Int::new(1_u32)), coerce::<u32>(Value::from(&[1_u8, 0, 0, 0])));
		assert_eq!(Ok(Int::new(0x0102_i32)), coerce::<i32>(Value::from(&[2_u8, 1])));
		assert_eq!(Ok(Int::new(0_u64)), coerce::<u64>(Value::from("")));
		assert_eq!(Ok(Int::new(u64::MAX)), coerce::<u64>(Value::from(&[0xff_u8; 8])));
		assert_eq!(Ok(Int::new(-1_i64)), coerce::<i64>(Value::from(&[0xff_u8; 8])));
		assert_eq!(Ok(Int::new(i64::from(b'a'))), coerce::<i64>(Value::from("a")));
	}

	#[test]
	fn test_bytes_narrow_to_the_width() {
		assert_eq!(
			Ok(Int::new(0x0403_0201_u32)),
			coerce::<u32>(Value::from(&[1_u8, 2, 3, 4, 5, 6, 7, 8]))
		);
		assert_eq!(Ok(Int::new(-1_i32)), coerce::<i32>(Value::from(&[0xff_u8, 0xff, 0xff, 0xff, 1])));
	}

	#[test]
	fn test_long_bytes_are_rejected() {
		assert_matches!(
			coerce::<u64>(Value::from(&[0_u8; 9])),
			Err(crate::Error { kind: ErrorKind::ArgumentTooLong { position: 1, len: 9 }, .. })
		);

		let args = [Value::from(1), Value::from("hello, world")];
		assert_matches!(
			Int::<i32>::coerce(Args::new(&args), 2),
			Err(crate::Error { kind: ErrorKind::ArgumentTooLong { position: 2, len: 12 }, .. })
		);
	}

	#[test]
	fn test_other_types_are_rejected() {
		assert_matches!(
			coerce::<i32>(Value::NIL),
			Err(crate::Error {
				kind: ErrorKind::InvalidTypeGiven { position: 1, expected: "int32", given: "nil" },
				..
			})
		);
		assert_matches!(
			coerce::<i32>(Value::TRUE),
			Err(crate::Error {
				kind: ErrorKind::InvalidTypeGiven { position: 1, expected: "int32", given: "boolean" },
				..
			})
		);
		assert_matches!(
			coerce::<i32>(Int::new(1_u32).into()),
			Err(crate::Error {
				kind: ErrorKind::InvalidTypeGiven { position: 1, expected: "int32", given: "uint32" },
				..
			})
		);
	}
}
