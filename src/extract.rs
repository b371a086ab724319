//! Extraction of values from rendered lines.
//!
//! A rendered line contains tokens of the form `` `name:value` ``.
//! Extraction recovers the values of all tokens,
//! and at the same time reconstructs the bare template of the line:
//! the line with each token reduced to `` `name` ``.
//! Two lines rendered from the same template always have the same bare template.
//!
//! Values are returned as raw text.
//! Extraction does not know the types of the values that were rendered.

use indexmap::IndexMap;

use crate::error::{self, ExtractError, MalformedLine};
use crate::sink::{Failure, IoSink, Sink};
use crate::{DELIMITER, DELIMITER_STR, SEPARATOR};

/// The values extracted from a rendered line, grouped by token name.
///
/// Names are kept in the order they first appear in the line.
/// If a name appears multiple times, all of its values are kept in the order they appear.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values<'a> {
	map: IndexMap<&'a str, Vec<&'a str>>,
}

impl<'a> Values<'a> {
	/// Create an empty set of values.
	#[inline]
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a value for a name.
	#[inline]
	pub fn push(&mut self, name: &'a str, value: &'a str) {
		self.map.entry(name).or_default().push(value);
	}

	/// Get all values for a name, in the order they appeared.
	#[inline]
	pub fn get(&self, name: &str) -> Option<&[&'a str]> {
		self.map.get(name).map(Vec::as_slice)
	}

	/// Get the first value for a name.
	#[inline]
	pub fn first(&self, name: &str) -> Option<&'a str> {
		self.map.get(name)?.first().copied()
	}

	/// Check if a name has at least one value.
	#[inline]
	pub fn contains(&self, name: &str) -> bool {
		self.map.contains_key(name)
	}

	/// Get the number of distinct names.
	#[inline]
	pub fn len(&self) -> usize {
		self.map.len()
	}

	/// Check if no values were extracted.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}

	/// Iterate over the names, in order of first appearance.
	pub fn names(&self) -> impl Iterator<Item = &'a str> + '_ {
		self.map.keys().copied()
	}

	/// Iterate over the names and their values, in order of first appearance.
	pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a str])> + '_ {
		self.map.iter().map(|(name, values)| (*name, values.as_slice()))
	}

	/// Get the underlying map.
	#[inline]
	pub fn into_inner(self) -> IndexMap<&'a str, Vec<&'a str>> {
		self.map
	}

	/// Copy all names and values into an owned map.
	pub fn into_owned(self) -> IndexMap<String, Vec<String>> {
		self.map
			.into_iter()
			.map(|(name, values)| (name.to_owned(), values.into_iter().map(str::to_owned).collect()))
			.collect()
	}
}

impl<'a> std::ops::Index<&str> for Values<'a> {
	type Output = [&'a str];

	/// Get all values for a name.
	///
	/// # Panics
	/// Panics if the name does not appear in the values.
	fn index(&self, name: &str) -> &Self::Output {
		match self.get(name) {
			Some(values) => values,
			None => panic!("no values for name {name:?}"),
		}
	}
}

impl<'a> IntoIterator for Values<'a> {
	type Item = (&'a str, Vec<&'a str>);
	type IntoIter = indexmap::map::IntoIter<&'a str, Vec<&'a str>>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.map.into_iter()
	}
}

/// Extract the values from a rendered line.
///
/// The bare template of the line is written to `template`:
/// literal text is copied verbatim and every token is reduced to its delimited name.
///
/// A token is split into name and value at the first colon.
/// Any further colons belong to the value.
/// A token without a colon has no value: it is copied to the bare template as-is.
///
/// When an error occurs, part of the bare template may already have been written to `template`.
///
/// # Example
/// ```rust
/// # fn main() -> Result<(), tickline::error::ExtractError> {
/// let mut template = Vec::new();
/// let values = tickline::extract("Sent `signal:SIGHUP` to `process:1611`.", &mut template)?;
///
/// assert_eq!(template, b"Sent `signal` to `process`.");
/// assert_eq!(values.first("signal"), Some("SIGHUP"));
/// assert_eq!(values.first("process"), Some("1611"));
/// # Ok(())
/// # }
/// ```
pub fn extract<'a, W>(line: &'a str, template: &mut W) -> Result<Values<'a>, ExtractError>
where
	W: std::io::Write + ?Sized,
{
	let mut values = Values::new();
	extract_with(line, template, |name, value| values.push(name, value))?;
	Ok(values)
}

/// Extract the values from a rendered line, passing them to a callback.
///
/// This works like [`extract()`], except that each `(name, value)` pair is given to `on_value`
/// instead of being collected.
/// If extraction fails, `on_value` may already have been called for earlier tokens.
pub fn extract_with<'a, W, F>(line: &'a str, template: &mut W, on_value: F) -> Result<(), ExtractError>
where
	W: std::io::Write + ?Sized,
	F: FnMut(&'a str, &'a str),
{
	scan(line, &mut IoSink(template), on_value).map_err(|e| match e {
		Failure::Input(e) => ExtractError::MalformedLine(e),
		Failure::Sink(e) => ExtractError::Io(e),
	})
}

/// Extract the values and the bare template from a rendered line.
///
/// # Example
/// ```rust
/// # fn main() -> Result<(), tickline::error::MalformedLine> {
/// let (template, values) = tickline::extract_to_string("`pid:7` and `pid:8`")?;
///
/// assert_eq!(template, "`pid` and `pid`");
/// assert_eq!(values.get("pid"), Some(["7", "8"].as_slice()));
/// # Ok(())
/// # }
/// ```
pub fn extract_to_string(line: &str) -> Result<(String, Values<'_>), MalformedLine> {
	let mut template = String::with_capacity(line.len());
	let mut values = Values::new();
	scan(line, &mut template, |name, value| values.push(name, value)).map_err(Failure::into_input)?;
	Ok((template, values))
}

/// Get the bare template of a rendered line, discarding the values.
///
/// Use this to check if two rendered lines have the same shape.
pub fn bare_template(line: &str) -> Result<String, MalformedLine> {
	let mut template = String::with_capacity(line.len());
	scan(line, &mut template, |_, _| ()).map_err(Failure::into_input)?;
	Ok(template)
}

/// Scan a rendered line in a single pass.
///
/// Writes the bare template to the sink and calls `on_value` for every token with a value.
fn scan<'a, S, F>(line: &'a str, sink: &mut S, mut on_value: F) -> Result<(), Failure<MalformedLine, S::Error>>
where
	S: Sink + ?Sized,
	F: FnMut(&'a str, &'a str),
{
	let bytes = line.as_bytes();
	let mut finger = 0;
	while let Some(x) = memchr::memchr(DELIMITER, &bytes[finger..]) {
		let open = finger + x;
		let body_start = open + 1;
		let close = match memchr::memchr(DELIMITER, &bytes[body_start..]) {
			Some(x) => body_start + x,
			None => return Err(Failure::Input(error::UnterminatedToken { position: open }.into())),
		};

		// Split the token body at the first separator.
		let body = &line[body_start..close];
		let (name, value) = match memchr::memchr(SEPARATOR, body.as_bytes()) {
			Some(x) => (&body[..x], Some(&body[x + 1..])),
			None => (body, None),
		};
		if name.is_empty() {
			return Err(Failure::Input(
				error::EmptyTokenName {
					position: open,
					len: close + 1 - open,
				}
				.into(),
			));
		}

		// Literal text up to and including the name, then the closing delimiter.
		sink.write_str(&line[finger..body_start + name.len()]).map_err(Failure::Sink)?;
		sink.write_str(DELIMITER_STR).map_err(Failure::Sink)?;
		if let Some(value) = value {
			on_value(name, value);
		}
		finger = close + 1;
	}

	sink.write_str(&line[finger..]).map_err(Failure::Sink)
}
