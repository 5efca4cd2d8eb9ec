use std::fmt::{self, Debug, Display, Formatter};
use std::ops::Deref;
use std::rc::Rc;

/// A boxed value handed to the host.
///
/// Ownership is entirely delegated to whoever holds the [`Gc`]: it's freed once the last
/// reference is dropped. Boxed values are immutable, so there's no interior locking.
#[repr(transparent)]
pub struct Gc<T: ?Sized>(Rc<T>);

sa::assert_eq_size!(Gc<i64>, *const ());
sa::assert_eq_size!(Gc<i64>, Option<Gc<i64>>);
sa::assert_not_impl_any!(Gc<i64>: Send, Sync);

impl<T> Gc<T> {
	/// Boxes `data`.
	pub fn new(data: T) -> Self {
		Self(Rc::new(data))
	}
}

impl<T: ?Sized> Gc<T> {
	/// Checks to see whether `self` and `rhs` point to the same allocation.
	#[must_use]
	pub fn ptr_eq(&self, rhs: &Self) -> bool {
		Rc::ptr_eq(&self.0, &rhs.0)
	}
}

impl<T: ?Sized> Clone for Gc<T> {
	fn clone(&self) -> Self {
		Self(Rc::clone(&self.0))
	}
}

impl<T: ?Sized> Deref for Gc<T> {
	type Target = T;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl<T: ?Sized> AsRef<T> for Gc<T> {
	fn as_ref(&self) -> &T {
		&self.0
	}
}

impl<T: ?Sized + Debug> Debug for Gc<T> {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "Gc({:?})", &*self.0)
	}
}

impl<T: ?Sized + Display> Display for Gc<T> {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		Display::fmt(&*self.0, f)
	}
}
