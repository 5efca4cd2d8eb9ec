use crate::value::ty::{Binding, Repr};
use crate::value::{Typename, Value};
use crate::Result;
use hashbrown::HashMap;
use once_cell::sync::OnceCell;

/// The table the module hands to the host when it's loaded.
#[derive(Debug)]
pub struct Module {
	bindings: HashMap<Typename, &'static Binding>,
}

/// Registers the four integer types and returns the module table.
///
/// Registration only happens the first time this is called; later calls return the same table.
pub fn open() -> &'static Module {
	static MODULE: OnceCell<Module> = OnceCell::new();

	MODULE.get_or_init(|| {
		let mut module = Module { bindings: HashMap::with_capacity(4) };

		module.register::<i32>();
		module.register::<u32>();
		module.register::<i64>();
		module.register::<u64>();

		debug!(types = module.bindings.len(), "opened module");
		module
	})
}

impl Module {
	fn register<T: Repr>(&mut self) {
		self.bindings.insert(T::TYPENAME, T::binding());
	}

	/// Gets the binding registered under `name`.
	#[must_use]
	pub fn get(&self, name: &str) -> Option<&'static Binding> {
		self.bindings.get(name).copied()
	}

	/// Calls the constructor of the type registered under `name`, if there is one.
	pub fn construct(&self, name: &str, value: Value) -> Option<Result<Value>> {
		self.get(name).map(|binding| binding.construct(value))
	}

	pub fn iter(&self) -> impl Iterator<Item = (Typename, &'static Binding)> + '_ {
		self.bindings.iter().map(|(&name, &binding)| (name, binding))
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.bindings.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.bindings.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_registers_all_four_types() {
		let module = open();

		assert_eq!(4, module.len());
		for name in ["int32", "uint32", "int64", "uint64"] {
			assert_eq!(name, module.get(name).unwrap().name());
		}

		assert!(module.get("int16").is_none());
		assert!(std::ptr::eq(module, open()));
	}

	#[test]
	fn test_construct_by_name() {
		let value = open().construct("uint32", Value::from(-1)).unwrap().unwrap();
		assert_eq!(u32::MAX, value.downcast::<u32>().unwrap().get());

		assert!(open().construct("int8", Value::from(1)).is_none());
	}
}
