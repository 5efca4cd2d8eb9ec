use crate::value::ty::{Binding, Int};
use crate::value::{Gc, Typename, Value};
use num_traits::{CheckedRem, PrimInt, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub};
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A fixed-width native integer that an [`Int`] can wrap.
///
/// This is implemented for exactly `i32`, `u32`, `i64`, and `u64`; each of them is registered
/// with the host under its [`TYPENAME`](Repr::TYPENAME).
pub trait Repr:
	PrimInt
	+ WrappingAdd
	+ WrappingSub
	+ WrappingMul
	+ WrappingNeg
	+ CheckedRem
	+ Hash
	+ Default
	+ Debug
	+ Display
	+ 'static
{
	/// The name the type is registered with.
	const TYPENAME: Typename;

	/// Narrows a 64-bit pattern, discarding the high bits.
	fn from_bits(bits: u64) -> Self;

	/// Widens `self` to 64 bits: sign-extended when signed, zero-extended when unsigned.
	fn to_bits(self) -> u64;

	/// Boxes an [`Int`] of this representation into a host value.
	fn into_value(int: Gc<Int<Self>>) -> Value;

	/// The inverse of [`Repr::into_value`].
	fn unbox(value: &Value) -> Option<&Gc<Int<Self>>>;

	/// The operator table for this representation, built on first use.
	fn binding() -> &'static Binding;
}

macro_rules! impl_repr {
	($($repr:ty => $typename:literal, $variant:ident;)*) => {$(
		impl Repr for $repr {
			const TYPENAME: Typename = $typename;

			#[inline]
			fn from_bits(bits: u64) -> Self {
				bits as Self
			}

			#[inline]
			fn to_bits(self) -> u64 {
				self as u64
			}

			fn into_value(int: Gc<Int<Self>>) -> Value {
				Value::$variant(int)
			}

			fn unbox(value: &Value) -> Option<&Gc<Int<Self>>> {
				if let Value::$variant(int) = value {
					Some(int)
				} else {
					None
				}
			}

			fn binding() -> &'static Binding {
				use once_cell::sync::OnceCell;

				static BINDING: OnceCell<Binding> = OnceCell::new();

				BINDING.get_or_init(|| create_binding!($typename, $repr))
			}
		}
	)*};
}

impl_repr! {
	i32 => "int32", Int32;
	u32 => "uint32", UInt32;
	i64 => "int64", Int64;
	u64 => "uint64", UInt64;
}
