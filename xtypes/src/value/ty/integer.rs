use crate::value::ty::Repr;
use crate::{ErrorKind, Result};
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Mul, Neg, Sub};

/// A fixed-width integer boxed for the host.
///
/// All arithmetic wraps modulo `2^width`, exactly like the native type does in release builds.
/// Division and modulo by zero are the only failing operations; everything else always succeeds.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Int<T>(T);

sa::assert_eq_size!(Int<i32>, i32);
sa::assert_eq_size!(Int<u32>, u32);
sa::assert_eq_size!(Int<i64>, i64);
sa::assert_eq_size!(Int<u64>, u64);

impl<T> Int<T> {
	#[must_use]
	pub const fn new(value: T) -> Self {
		Self(value)
	}
}

impl<T: Repr> Int<T> {
	pub fn get(self) -> T {
		self.0
	}

	/// Narrows the low bits of a 64-bit pattern into an integer.
	#[must_use]
	pub fn from_bits(bits: u64) -> Self {
		Self(T::from_bits(bits))
	}

	/// Truncating division.
	///
	/// Dividing the minimum of a signed representation by `-1` wraps back around to the minimum.
	pub fn checked_div(self, rhs: Self) -> Result<Self> {
		if rhs.0.is_zero() {
			return Err(ErrorKind::DivisionByZero.into());
		}

		Ok(Self(self.0.checked_div(&rhs.0).unwrap_or_else(<T as num_traits::Bounded>::min_value)))
	}

	/// Truncating remainder, taking the sign of `self`.
	pub fn checked_rem(self, rhs: Self) -> Result<Self> {
		if rhs.0.is_zero() {
			return Err(ErrorKind::DivisionByZero.into());
		}

		Ok(Self(self.0.checked_rem(&rhs.0).unwrap_or_else(<T as num_traits::Zero>::zero)))
	}

	/// Raises `self` to `exponent`, wrapping on overflow.
	///
	/// Both operands are widened to 64 bits (so a negative exponent is a very large one) and the
	/// result is narrowed back down. A zero exponent is rejected with [`ErrorKind::ZeroExponent`].
	pub fn checked_pow(self, exponent: Self) -> Result<Self> {
		if exponent.0.is_zero() {
			return Err(ErrorKind::ZeroExponent.into());
		}

		Ok(Self::from_bits(power(self.0.to_bits(), exponent.0.to_bits())))
	}
}

/// Square-and-multiply exponentiation modulo `2^64`.
///
/// There's no base case for `exponent == 0`: halving zero never reaches one, so callers must
/// rule it out first.
fn power(base: u64, exponent: u64) -> u64 {
	debug_assert_ne!(exponent, 0);

	if exponent == 1 {
		return base;
	}

	let squared = base.wrapping_mul(base);

	if exponent % 2 == 1 {
		power(squared, exponent / 2).wrapping_mul(base)
	} else {
		power(squared, exponent / 2)
	}
}

impl<T: Repr> Add for Int<T> {
	type Output = Self;

	fn add(self, rhs: Self) -> Self {
		Self(self.0.wrapping_add(&rhs.0))
	}
}

impl<T: Repr> Sub for Int<T> {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self {
		Self(self.0.wrapping_sub(&rhs.0))
	}
}

impl<T: Repr> Mul for Int<T> {
	type Output = Self;

	fn mul(self, rhs: Self) -> Self {
		Self(self.0.wrapping_mul(&rhs.0))
	}
}

impl<T: Repr> Neg for Int<T> {
	type Output = Self;

	fn neg(self) -> Self {
		Self(self.0.wrapping_neg())
	}
}

impl<T: Display> Display for Int<T> {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

pub mod funcs {
	use super::*;
	use crate::value::ty::Text;
	use crate::value::Value;
	use crate::vm::Args;

	fn operands<T: Repr>(args: Args<'_>) -> Result<(Int<T>, Int<T>)> {
		args.assert_positional_len(2)?;

		Ok((Int::coerce(args, 1)?, Int::coerce(args, 2)?))
	}

	pub fn add<T: Repr>(args: Args<'_>) -> Result<Value> {
		let (lhs, rhs) = operands::<T>(args)?;

		Ok((lhs + rhs).into())
	}

	pub fn sub<T: Repr>(args: Args<'_>) -> Result<Value> {
		let (lhs, rhs) = operands::<T>(args)?;

		Ok((lhs - rhs).into())
	}

	pub fn mul<T: Repr>(args: Args<'_>) -> Result<Value> {
		let (lhs, rhs) = operands::<T>(args)?;

		Ok((lhs * rhs).into())
	}

	pub fn div<T: Repr>(args: Args<'_>) -> Result<Value> {
		let (lhs, rhs) = operands::<T>(args)?;

		lhs.checked_div(rhs).map(Value::from)
	}

	pub fn r#mod<T: Repr>(args: Args<'_>) -> Result<Value> {
		let (lhs, rhs) = operands::<T>(args)?;

		lhs.checked_rem(rhs).map(Value::from)
	}

	pub fn pow<T: Repr>(args: Args<'_>) -> Result<Value> {
		let (lhs, rhs) = operands::<T>(args)?;

		lhs.checked_pow(rhs).map(Value::from)
	}

	pub fn eq<T: Repr>(args: Args<'_>) -> Result<Value> {
		let (lhs, rhs) = operands::<T>(args)?;

		Ok((lhs == rhs).into())
	}

	pub fn lt<T: Repr>(args: Args<'_>) -> Result<Value> {
		let (lhs, rhs) = operands::<T>(args)?;

		Ok((lhs < rhs).into())
	}

	pub fn le<T: Repr>(args: Args<'_>) -> Result<Value> {
		let (lhs, rhs) = operands::<T>(args)?;

		Ok((lhs <= rhs).into())
	}

	pub fn neg<T: Repr>(args: Args<'_>) -> Result<Value> {
		args.assert_positional_len(1)?;

		Ok((-Int::<T>::coerce(args, 1)?).into())
	}

	// Unlike every other handler, this doesn't coerce: only boxed values can be converted.
	pub fn tostring<T: Repr>(args: Args<'_>) -> Result<Value> {
		args.assert_positional_len(1)?;

		let int = args.try_downcast::<T>(1)?;

		Ok(Text::from_string(int.to_string()).into())
	}

	pub fn new<T: Repr>(args: Args<'_>) -> Result<Value> {
		args.assert_positional_len(1)?;

		Ok(Int::<T>::coerce(args, 1)?.into())
	}
}
