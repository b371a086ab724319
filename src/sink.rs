use std::convert::Infallible;

use crate::args::Value;

/// Output for rendered lines and bare templates.
///
/// Rendering and extraction only ever write whole UTF-8 string slices and formatted values,
/// so the same code can target byte buffers, strings, I/O streams and formatters.
pub trait Sink {
	/// The error produced when writing fails.
	type Error;

	/// Write a string slice verbatim.
	fn write_str(&mut self, data: &str) -> Result<(), Self::Error>;

	/// Write a formatted argument value.
	fn write_value(&mut self, value: &Value<'_>) -> Result<(), Self::Error>;
}

/// Failure of a rendering or extraction pass.
///
/// Either the input was rejected, or the sink failed.
pub enum Failure<E, S> {
	Input(E),
	Sink(S),
}

impl<E> Failure<E, Infallible> {
	/// Get the input error of a pass over a sink that can not fail.
	#[inline]
	pub fn into_input(self) -> E {
		match self {
			Self::Input(e) => e,
			Self::Sink(never) => match never {},
		}
	}
}

impl Sink for Vec<u8> {
	type Error = Infallible;

	#[inline]
	fn write_str(&mut self, data: &str) -> Result<(), Self::Error> {
		self.extend_from_slice(data.as_bytes());
		Ok(())
	}

	#[inline]
	fn write_value(&mut self, value: &Value<'_>) -> Result<(), Self::Error> {
		value.write_to_vec(self);
		Ok(())
	}
}

impl Sink for String {
	type Error = Infallible;

	#[inline]
	fn write_str(&mut self, data: &str) -> Result<(), Self::Error> {
		self.push_str(data);
		Ok(())
	}

	#[inline]
	fn write_value(&mut self, value: &Value<'_>) -> Result<(), Self::Error> {
		use std::fmt::Write;
		match value {
			Value::Str(x) => self.push_str(x),
			// Writing to a `String` never fails.
			other => {
				let _ = write!(self, "{other}");
			},
		}
		Ok(())
	}
}

impl Sink for std::fmt::Formatter<'_> {
	type Error = std::fmt::Error;

	#[inline]
	fn write_str(&mut self, data: &str) -> Result<(), Self::Error> {
		std::fmt::Formatter::write_str(self, data)
	}

	#[inline]
	fn write_value(&mut self, value: &Value<'_>) -> Result<(), Self::Error> {
		// Use `write!` rather than `Display::fmt` so width and fill flags do not apply to each value.
		write!(self, "{value}")
	}
}

/// Adapter to use an [`std::io::Write`] as [`Sink`].
pub struct IoSink<'w, W: ?Sized>(pub &'w mut W);

impl<W> Sink for IoSink<'_, W>
where
	W: std::io::Write + ?Sized,
{
	type Error = std::io::Error;

	#[inline]
	fn write_str(&mut self, data: &str) -> Result<(), Self::Error> {
		self.0.write_all(data.as_bytes())
	}

	#[inline]
	fn write_value(&mut self, value: &Value<'_>) -> Result<(), Self::Error> {
		value.write_to(&mut *self.0)
	}
}
