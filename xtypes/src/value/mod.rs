#[macro_use]
pub mod ty;

mod gc;
mod value;

pub use gc::Gc;
pub use value::Value;

pub type Typename = &'static str;
pub trait NamedType {
	const TYPENAME: Typename;
}
