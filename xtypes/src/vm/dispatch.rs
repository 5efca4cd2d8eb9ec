use crate::value::ty::{Binding, Operator, Repr};
use crate::value::Value;
use crate::vm::Args;
use crate::{ErrorKind, Result};

impl Value {
	/// The binding that handles operators on `self`, if `self` is a boxed integer.
	#[must_use]
	pub fn binding(&self) -> Option<&'static Binding> {
		match self {
			Self::Int32(_) => Some(i32::binding()),
			Self::UInt32(_) => Some(u32::binding()),
			Self::Int64(_) => Some(i64::binding()),
			Self::UInt64(_) => Some(u64::binding()),
			_ => None,
		}
	}
}

/// Applies `op` to `operands` the way the host's operator overloading does.
///
/// The handler comes from the first operand that's a boxed integer: for `int32(1) + 2` that's
/// `int32`'s, and for `2 + int32(1)` it's also `int32`'s, with the operands left in place. When
/// both operands are boxed but of different types, the left one wins and the right one then
/// fails to coerce.
pub fn dispatch(op: Operator, operands: &[Value]) -> Result<Value> {
	let binding = operands
		.iter()
		.take(op.arity())
		.find_map(Value::binding)
		.ok_or_else(|| ErrorKind::NoHandler {
			operator: op,
			given: operands.first().map_or("nil", Value::typename),
		})?;

	trace!(%op, typename = binding.name(), "dispatching");
	binding.call(op, Args::new(operands))
}
