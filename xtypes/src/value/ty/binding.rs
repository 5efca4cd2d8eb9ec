use crate::value::ty::Operator;
use crate::value::{Typename, Value};
use crate::vm::Args;
use crate::{ErrorKind, Result};
use hashbrown::HashMap;
use std::fmt::{self, Debug, Formatter};

pub type Function = for<'a> fn(Args<'a>) -> Result<Value>;

/// A native handler registered with the host.
#[derive(Clone, Copy)]
pub struct RustFn {
	name: &'static str,
	func: Function,
}

impl RustFn {
	#[must_use]
	pub const fn new(name: &'static str, func: Function) -> Self {
		Self { name, func }
	}

	#[must_use]
	pub const fn name(self) -> &'static str {
		self.name
	}

	#[must_use]
	pub fn func(self) -> Function {
		self.func
	}

	/// Calls the handler, annotating any error it raises with the handler's name.
	pub fn call(self, args: Args<'_>) -> Result<Value> {
		trace!(handler = self.name, args = args.len(), "calling handler");

		(self.func)(args).map_err(|err| {
			debug!(handler = self.name, %err, "handler failed");
			err.within(self.name)
		})
	}
}

impl Eq for RustFn {}
impl PartialEq for RustFn {
	fn eq(&self, rhs: &Self) -> bool {
		self.name == rhs.name && self.func as usize == rhs.func as usize
	}
}

impl Debug for RustFn {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "RustFn({:?}:{:p})", self.name, self.func as usize as *const u8)
	}
}

/// The operator table of a single registered type.
#[derive(Debug)]
pub struct Binding {
	name: Typename,
	methods: HashMap<Operator, RustFn>,
}

impl Binding {
	#[must_use]
	pub fn new(name: Typename) -> Self {
		Self { name, methods: HashMap::with_capacity(Operator::ALL.len()) }
	}

	/// The name the type is registered under.
	#[must_use]
	pub const fn name(&self) -> Typename {
		self.name
	}

	/// Registers `func` as the handler for `op`, replacing any previous one.
	pub fn register(&mut self, op: Operator, func: RustFn) {
		if let Some(old) = self.methods.insert(op, func) {
			warn!(typename = self.name, %op, old = old.name(), "replaced handler");
		}
	}

	#[must_use]
	pub fn get(&self, op: Operator) -> Option<RustFn> {
		self.methods.get(&op).copied()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.methods.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.methods.is_empty()
	}

	/// Iterates over the registered handlers that are called on instances.
	pub fn methods(&self) -> impl Iterator<Item = (Operator, RustFn)> + '_ {
		self.methods.iter().filter(|(op, _)| !op.is_static()).map(|(&op, &func)| (op, func))
	}

	/// Iterates over the registered handlers that are called on the type itself.
	pub fn static_methods(&self) -> impl Iterator<Item = (Operator, RustFn)> + '_ {
		self.methods.iter().filter(|(op, _)| op.is_static()).map(|(&op, &func)| (op, func))
	}

	/// Calls the handler for `op` with `args`.
	pub fn call(&self, op: Operator, args: Args<'_>) -> Result<Value> {
		let func = self.get(op).ok_or(ErrorKind::NoHandler { operator: op, given: self.name })?;

		func.call(args)
	}

	/// Calls the constructor with a single argument.
	pub fn construct(&self, value: Value) -> Result<Value> {
		self.call(Operator::New, Args::new(std::slice::from_ref(&value)))
	}
}
