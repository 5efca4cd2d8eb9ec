use crate::value::ty::{Int, Repr, Text};
use crate::value::{Gc, Typename};
use std::fmt::{self, Debug, Formatter};

/// Any value the host can place on the call stack.
///
/// Only the kinds the integer bindings care about are modelled: host numbers and byte strings
/// (which can be coerced into integers), booleans and nil (which can't), and the four boxed
/// integer types themselves.
#[derive(Clone, Default)]
pub enum Value {
	#[default]
	Nil,
	Boolean(bool),
	Integer(i64),
	Float(f64),
	Text(Gc<Text>),
	Int32(Gc<Int<i32>>),
	UInt32(Gc<Int<u32>>),
	Int64(Gc<Int<i64>>),
	UInt64(Gc<Int<u64>>),
}

sa::assert_eq_size!(Value, [u64; 2]);

impl Value {
	pub const NIL: Self = Self::Nil;
	pub const TRUE: Self = Self::Boolean(true);
	pub const FALSE: Self = Self::Boolean(false);

	/// The name the host reports for the type of `self`.
	#[must_use]
	pub fn typename(&self) -> Typename {
		match self {
			Self::Nil => "nil",
			Self::Boolean(_) => "boolean",
			Self::Integer(_) | Self::Float(_) => "number",
			Self::Text(_) => "string",
			Self::Int32(_) => <i32 as Repr>::TYPENAME,
			Self::UInt32(_) => <u32 as Repr>::TYPENAME,
			Self::Int64(_) => <i64 as Repr>::TYPENAME,
			Self::UInt64(_) => <u64 as Repr>::TYPENAME,
		}
	}

	/// Returns whether `self` is one of the boxed integer types.
	#[must_use]
	pub const fn is_boxed(&self) -> bool {
		matches!(self, Self::Int32(_) | Self::UInt32(_) | Self::Int64(_) | Self::UInt64(_))
	}

	/// Gets the boxed integer of representation `T`, if `self` is one.
	#[must_use]
	pub fn downcast<T: Repr>(&self) -> Option<&Gc<Int<T>>> {
		T::unbox(self)
	}

	/// Gets the boolean `self` holds, if it's a boolean.
	#[must_use]
	pub fn as_bool(&self) -> Option<bool> {
		if let Self::Boolean(b) = self {
			Some(*b)
		} else {
			None
		}
	}

	/// Gets the text `self` holds, if it's a string.
	#[must_use]
	pub fn as_text(&self) -> Option<&Gc<Text>> {
		if let Self::Text(text) = self {
			Some(text)
		} else {
			None
		}
	}
}

impl Debug for Value {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		match self {
			Self::Nil => write!(f, "nil"),
			Self::Boolean(b) => Debug::fmt(b, f),
			Self::Integer(i) => Debug::fmt(i, f),
			Self::Float(x) => Debug::fmt(x, f),
			Self::Text(text) => Debug::fmt(&**text, f),
			Self::Int32(int) => Debug::fmt(&**int, f),
			Self::UInt32(int) => Debug::fmt(&**int, f),
			Self::Int64(int) => Debug::fmt(&**int, f),
			Self::UInt64(int) => Debug::fmt(&**int, f),
		}
	}
}

impl From<bool> for Value {
	fn from(b: bool) -> Self {
		Self::Boolean(b)
	}
}

impl From<i32> for Value {
	fn from(integer: i32) -> Self {
		Self::Integer(integer.into())
	}
}

impl From<i64> for Value {
	fn from(integer: i64) -> Self {
		Self::Integer(integer)
	}
}

impl From<f64> for Value {
	fn from(float: f64) -> Self {
		Self::Float(float)
	}
}

impl From<Text> for Value {
	fn from(text: Text) -> Self {
		Self::Text(Gc::new(text))
	}
}

impl From<&str> for Value {
	fn from(string: &str) -> Self {
		Text::from(string).into()
	}
}

impl From<&[u8]> for Value {
	fn from(bytes: &[u8]) -> Self {
		Text::from(bytes).into()
	}
}

impl<const N: usize> From<&[u8; N]> for Value {
	fn from(bytes: &[u8; N]) -> Self {
		Text::from(&bytes[..]).into()
	}
}

impl<T: Repr> From<Int<T>> for Value {
	fn from(int: Int<T>) -> Self {
		T::into_value(Gc::new(int))
	}
}

impl<T: Repr> From<Gc<Int<T>>> for Value {
	fn from(int: Gc<Int<T>>) -> Self {
		T::into_value(int)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_typename() {
		assert_eq!("nil", Value::NIL.typename());
		assert_eq!("boolean", Value::TRUE.typename());
		assert_eq!("number", Value::from(1).typename());
		assert_eq!("number", Value::from(1.5).typename());
		assert_eq!("string", Value::from("hi").typename());
		assert_eq!("int32", Value::from(Int::new(1_i32)).typename());
		assert_eq!("uint32", Value::from(Int::new(1_u32)).typename());
		assert_eq!("int64", Value::from(Int::new(1_i64)).typename());
		assert_eq!("uint64", Value::from(Int::new(1_u64)).typename());
	}

	#[test]
	fn test_downcast() {
		let value = Value::from(Int::new(-5_i64));

		assert!(value.is_boxed());
		assert_eq!(Some(Int::new(-5)), value.downcast::<i64>().map(|int| **int));
		assert!(value.downcast::<u64>().is_none());
		assert!(value.downcast::<i32>().is_none());

		assert!(!Value::from(-5).is_boxed());
		assert!(Value::from(-5).downcast::<i64>().is_none());
	}
}
