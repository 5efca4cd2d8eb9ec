use std::fmt::{self, Debug, Display, Formatter};

/// An immutable host string.
///
/// Host strings are arbitrary byte sequences: they aren't required to be valid UTF-8, which is
/// what lets the integer bindings accept packed little-endian bytes as arguments.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Text(Box<[u8]>);

impl Text {
	#[must_use]
	pub fn from_string(string: String) -> Self {
		Self(string.into_bytes().into_boxed_slice())
	}

	#[must_use]
	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	/// Gets the contents as a `str`, if they're valid UTF-8.
	#[must_use]
	pub fn as_str(&self) -> Option<&str> {
		std::str::from_utf8(&self.0).ok()
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<&str> for Text {
	fn from(string: &str) -> Self {
		Self(string.as_bytes().into())
	}
}

impl From<&[u8]> for Text {
	fn from(bytes: &[u8]) -> Self {
		Self(bytes.into())
	}
}

impl From<String> for Text {
	fn from(string: String) -> Self {
		Self::from_string(string)
	}
}

impl Display for Text {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		Display::fmt(&String::from_utf8_lossy(&self.0), f)
	}
}

impl Debug for Text {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		Debug::fmt(&String::from_utf8_lossy(&self.0), f)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_non_utf8_bytes() {
		let text = Text::from(&[0xff, 0x00][..]);

		assert_eq!(2, text.len());
		assert_eq!(&[0xff, 0x00], text.as_bytes());
		assert_eq!(None, text.as_str());
	}

	#[test]
	fn test_as_str() {
		assert_eq!(Some("4294967295"), Text::from_string("4294967295".to_string()).as_str());
		assert!(Text::default().is_empty());
	}
}
