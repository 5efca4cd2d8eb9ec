use std::fmt::{self, Display, Formatter};

macro_rules! define_operators {
	($($name:ident $metamethod:literal $symbol:literal $arity:literal,)*) => {
		/// The operations every integer binding registers a handler for.
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
		pub enum Operator {
			$($name,)*
		}

		impl Operator {
			/// Every operator, in registration order.
			pub const ALL: &'static [Self] = &[$(Self::$name),*];

			/// The name the host looks the handler up by.
			#[must_use]
			pub const fn as_str(self) -> &'static str {
				match self {
					$(Self::$name => $metamethod,)*
				}
			}

			/// How the operator is spelled in host source code.
			#[must_use]
			pub const fn symbol(self) -> &'static str {
				match self {
					$(Self::$name => $symbol,)*
				}
			}

			/// The amount of positional arguments the handler takes.
			#[must_use]
			pub const fn arity(self) -> usize {
				match self {
					$(Self::$name => $arity,)*
				}
			}

			#[must_use]
			#[allow(clippy::should_implement_trait)]
			pub fn from_str(name: &str) -> Option<Self> {
				match name {
					$($metamethod => Some(Self::$name),)*
					_ => None,
				}
			}
		}
	};
}

define_operators! {
	Add      "__add"      "+"        2,
	Sub      "__sub"      "-"        2,
	Mul      "__mul"      "*"        2,
	Div      "__div"      "/"        2,
	Mod      "__mod"      "%"        2,
	Pow      "__pow"      "**"       2,
	Eq       "__eq"       "=="       2,
	Lt       "__lt"       "<"        2,
	Le       "__le"       "<="       2,
	Neg      "__unm"      "-@"       1,
	ToString "__tostring" "tostring" 1,
	New      "new"        "new"      1,
}

impl Operator {
	/// Whether the handler is looked up on the type itself rather than on an instance.
	#[must_use]
	pub const fn is_static(self) -> bool {
		matches!(self, Self::New)
	}
}

impl Display for Operator {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_from_str_round_trips_every_operator() {
		for &op in Operator::ALL {
			assert_eq!(Some(op), Operator::from_str(op.as_str()));
		}

		assert_eq!(None, Operator::from_str("__concat"));
		assert_eq!(None, Operator::from_str("+"));
	}

	#[test]
	fn test_arity() {
		assert_eq!(2, Operator::Pow.arity());
		assert_eq!(2, Operator::Le.arity());
		assert_eq!(1, Operator::Neg.arity());
		assert_eq!(1, Operator::New.arity());
		assert!(Operator::New.is_static());
		assert!(!Operator::ToString.is_static());
	}
}
