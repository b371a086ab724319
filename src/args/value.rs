/// A single argument value to be rendered into a placeholder.
///
/// Values are primitive: there are no nested or structured values.
/// Most of the time you will not construct these by hand,
/// but convert from a Rust value with [`From`] or the [`args!`][crate::args!] macro.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
	/// A string, rendered verbatim without quoting or escaping.
	Str(&'a str),

	/// A signed integer, rendered in base 10.
	Int(i64),

	/// An unsigned integer, rendered in base 10.
	Uint(u64),

	/// A floating point number, rendered with the shortest representation that round-trips.
	Float(f64),

	/// A boolean, rendered as `true` or `false`.
	Bool(bool),

	/// A single character.
	Char(char),

	/// No value at all.
	///
	/// Sources with a default value substitute the default for this marker.
	/// Otherwise it renders as an empty value.
	Nil,
}

impl Value<'_> {
	/// Check if this is the [`Value::Nil`] marker.
	#[inline]
	pub fn is_nil(&self) -> bool {
		matches!(self, Self::Nil)
	}

	/// Append the formatted value to a byte buffer.
	///
	/// This does not allocate anything other than growing `output`.
	pub fn write_to_vec(&self, output: &mut Vec<u8>) {
		use std::io::Write;
		match self {
			Self::Str(x) => output.extend_from_slice(x.as_bytes()),
			Self::Char(x) => output.extend_from_slice(x.encode_utf8(&mut [0; 4]).as_bytes()),
			Self::Nil => (),
			// Writing to a `Vec<u8>` never fails.
			other => {
				let _ = write!(output, "{other}");
			},
		}
	}

	/// Write the formatted value to an I/O stream.
	pub fn write_to<W: std::io::Write + ?Sized>(&self, output: &mut W) -> std::io::Result<()> {
		match self {
			Self::Str(x) => output.write_all(x.as_bytes()),
			Self::Nil => Ok(()),
			other => write!(output, "{other}"),
		}
	}
}

impl std::fmt::Display for Value<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Str(x) => f.write_str(x),
			Self::Int(x) => std::fmt::Display::fmt(x, f),
			Self::Uint(x) => std::fmt::Display::fmt(x, f),
			Self::Float(x) => std::fmt::Display::fmt(x, f),
			Self::Bool(x) => std::fmt::Display::fmt(x, f),
			Self::Char(x) => std::fmt::Display::fmt(x, f),
			Self::Nil => Ok(()),
		}
	}
}

impl<'a> From<&'a str> for Value<'a> {
	#[inline]
	fn from(other: &'a str) -> Self {
		Self::Str(other)
	}
}

impl<'a> From<&'a String> for Value<'a> {
	#[inline]
	fn from(other: &'a String) -> Self {
		Self::Str(other.as_str())
	}
}

impl<'a, 'b> From<&'b Value<'a>> for Value<'a> {
	#[inline]
	fn from(other: &'b Value<'a>) -> Self {
		*other
	}
}

impl<'a, T> From<Option<T>> for Value<'a>
where
	T: Into<Value<'a>>,
{
	#[inline]
	fn from(other: Option<T>) -> Self {
		match other {
			Some(x) => x.into(),
			None => Self::Nil,
		}
	}
}

macro_rules! impl_from {
	($variant:ident as $target:ty: $($source:ty),*) => {
		$(
			impl From<$source> for Value<'_> {
				#[inline]
				fn from(other: $source) -> Self {
					Self::$variant(other as $target)
				}
			}
		)*
	};
}

impl_from!(Int as i64: i8, i16, i32, i64, isize);
impl_from!(Uint as u64: u8, u16, u32, u64, usize);
impl_from!(Float as f64: f32, f64);

impl From<bool> for Value<'_> {
	#[inline]
	fn from(other: bool) -> Self {
		Self::Bool(other)
	}
}

impl From<char> for Value<'_> {
	#[inline]
	fn from(other: char) -> Self {
		Self::Char(other)
	}
}
