#[macro_use]
mod macros;

pub mod binding;
pub mod coerce;
pub mod integer;
pub mod operator;
pub mod repr;
pub mod text;

pub use binding::{Binding, Function, RustFn};
pub use integer::Int;
pub use operator::Operator;
pub use repr::Repr;
pub use text::Text;
