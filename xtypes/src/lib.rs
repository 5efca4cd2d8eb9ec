#![allow(
	clippy::unreadable_literal, // there's only a handful and they're not meant to be readable.

	// TODOS:
	clippy::missing_errors_doc,
	clippy::missing_panics_doc,

	// Wrapping and truncating casts are the entire point of this crate.
	clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss,

	// Simply my coding style, bite me clippy
	clippy::module_inception,
	clippy::module_name_repetitions,
)]

extern crate static_assertions as sa;

#[macro_use]
extern crate tracing;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

mod error;

#[macro_use]
pub mod value;
pub mod module;
pub mod vm;

pub use error::{Error, ErrorKind, Result};
pub use module::{open, Module};
pub use value::ty::{Int, Operator};
pub use value::{Gc, Value};
pub use vm::{dispatch, Args};
