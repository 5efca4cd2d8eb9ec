/// Builds the [`Binding`](crate::value::ty::Binding) for one integer representation.
///
/// Every representation registers the same handlers, so the only inputs are the name the type is
/// registered with and the representation itself. Handler names are qualified with the typename
/// (eg `int32.__add`) so errors can say where they came from.
macro_rules! create_binding {
	($typename:literal, $repr:ty) => {
		create_binding! { $typename, $repr;
			Add "__add" => add,
			Sub "__sub" => sub,
			Mul "__mul" => mul,
			Div "__div" => div,
			Mod "__mod" => r#mod,
			Pow "__pow" => pow,
			Eq "__eq" => eq,
			Lt "__lt" => lt,
			Le "__le" => le,
			Neg "__unm" => neg,
			ToString "__tostring" => tostring,
			New "new" => new,
		}
	};

	($typename:literal, $repr:ty; $($op:ident $metamethod:literal => $func:ident,)*) => {{
		use $crate::value::ty::{integer::funcs, Binding, Operator, RustFn};

		let mut binding = Binding::new($typename);
		$(
			debug_assert_eq!(Operator::$op.as_str(), $metamethod);
			binding.register(
				Operator::$op,
				RustFn::new(concat!($typename, ".", $metamethod), funcs::$func::<$repr>),
			);
		)*

		debug!(typename = $typename, operators = binding.len(), "registered binding");
		binding
	}};
}
