use std::borrow::Cow;

use crate::args::{with_default, Arguments, Value};
use crate::error::{IndexOutOfRange, MalformedTemplate, RenderError};
use crate::sink::{Failure, IoSink};

mod raw;

/// A compiled line template.
///
/// You can compile the template once and call [`Self::render()`] multiple times.
/// This is generally more efficient than calling [`render()`][crate::render] multiple times on the same pattern.
///
/// This template borrows the pattern string.
/// You can use [`TemplateBuf`] if you need a template that owns the pattern.
///
/// A template is immutable once compiled, so it can be shared freely between threads.
#[derive(Clone)]
pub struct Template<'a> {
	source: Cow<'a, str>,
	raw: raw::Template,
}

impl std::fmt::Debug for Template<'_> {
	#[inline]
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("Template").field(&self.source).finish()
	}
}

/// Templates are equal if they were compiled from the same pattern.
impl PartialEq for Template<'_> {
	#[inline]
	fn eq(&self, other: &Self) -> bool {
		self.source == other.source
	}
}

impl Eq for Template<'_> {}

impl<'a> Template<'a> {
	/// Compile a template from a pattern string.
	///
	/// Placeholders in the pattern have the form `` `name` ``.
	/// A name can contain anything except backticks and colons,
	/// and it can not be empty.
	///
	/// There is no escape sequence: a backtick always opens or closes a placeholder.
	#[inline]
	#[allow(clippy::should_implement_trait)]
	pub fn from_str(source: &'a str) -> Result<Self, MalformedTemplate> {
		Ok(Self {
			raw: raw::Template::parse(source.as_bytes())?,
			source: Cow::Borrowed(source),
		})
	}

	/// Get the original pattern string.
	#[inline]
	pub fn source(&self) -> &str {
		&self.source
	}

	/// Get the number of placeholders in the template.
	#[inline]
	pub fn placeholder_count(&self) -> usize {
		self.raw.placeholders()
	}

	/// Iterate over the names of the placeholders, in the order they bind to arguments.
	pub fn placeholders(&self) -> impl Iterator<Item = &str> + '_ {
		self.segments().filter_map(|segment| match segment {
			Segment::Literal(_) => None,
			Segment::Placeholder(name) => Some(name),
		})
	}

	/// Iterate over the literal and placeholder segments of the template.
	pub fn segments(&self) -> Segments<'_> {
		Segments {
			source: &self.source,
			parts: self.raw.parts().iter(),
		}
	}

	/// Render the template to an I/O stream.
	///
	/// The n-th placeholder is replaced by a `` `name:value` `` token
	/// where the value is taken from position n of `args`.
	///
	/// When an error occurs, part of the line may already have been written to `output`.
	pub fn render<W, A>(&self, output: &mut W, args: &A) -> Result<(), RenderError>
	where
		W: std::io::Write + ?Sized,
		A: Arguments + ?Sized,
	{
		self.raw
			.render(&mut IoSink(output), &self.source, args)
			.map_err(|e| match e {
				Failure::Input(e) => RenderError::IndexOutOfRange(e),
				Failure::Sink(e) => RenderError::Io(e),
			})
	}

	/// Render the template by appending to a byte buffer.
	///
	/// Nothing is allocated except for growing the buffer.
	/// On success, the whole buffer is returned, including the data that was in it before.
	/// On failure, the buffer is restored to its original length.
	pub fn render_append<'b, A>(&self, buffer: &'b mut Vec<u8>, args: &A) -> Result<&'b [u8], IndexOutOfRange>
	where
		A: Arguments + ?Sized,
	{
		let len = buffer.len();
		if let Err(e) = self.raw.render(&mut *buffer, &self.source, args) {
			buffer.truncate(len);
			return Err(e.into_input());
		}
		Ok(buffer.as_slice())
	}

	/// Render the template to a new string.
	pub fn render_to_string<A>(&self, args: &A) -> Result<String, IndexOutOfRange>
	where
		A: Arguments + ?Sized,
	{
		let mut output = String::with_capacity(self.source.len() + self.source.len() / 2);
		self.raw
			.render(&mut output, &self.source, args)
			.map_err(Failure::into_input)?;
		Ok(output)
	}

	/// Get a value that renders the template when formatted with [`Display`][std::fmt::Display].
	///
	/// Rendering happens directly into the formatter, without intermediate buffers.
	/// Formatting never fails because of the arguments:
	/// a placeholder without an argument renders with an empty value, the same as [`Value::Nil`][crate::args::Value::Nil].
	/// Use [`with_default()`][crate::args::with_default] to render a visible marker instead.
	#[inline]
	pub fn display<'t, A>(&'t self, args: &'t A) -> Message<'t, A>
	where
		A: Arguments + ?Sized,
	{
		Message {
			template: self,
			args,
		}
	}
}

/// A compiled line template that owns the pattern string.
///
/// You can compile the template once and call [`Self::render()`] multiple times.
///
/// This template owns the pattern.
/// If you do not need ownership, you can also use [`Template`] to borrow it instead.
/// A [`TemplateBuf`] is [`Send`] and [`Sync`]: wrap it in an [`Arc`][std::sync::Arc] to share it between threads.
#[derive(Clone)]
pub struct TemplateBuf {
	template: Template<'static>,
}

impl std::fmt::Debug for TemplateBuf {
	#[inline]
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("TemplateBuf").field(&self.template.source()).finish()
	}
}

impl PartialEq for TemplateBuf {
	#[inline]
	fn eq(&self, other: &Self) -> bool {
		self.template == other.template
	}
}

impl Eq for TemplateBuf {}

impl TemplateBuf {
	/// Compile a template from a pattern string.
	///
	/// This takes ownership of the string.
	///
	/// See [`Template::from_str()`] for the pattern syntax.
	#[inline]
	pub fn from_string(source: String) -> Result<Self, MalformedTemplate> {
		let raw = raw::Template::parse(source.as_bytes())?;
		let template = Template {
			source: Cow::Owned(source),
			raw,
		};
		Ok(Self { template })
	}

	/// Consume the template to get the original pattern string.
	#[inline]
	pub fn into_source(self) -> String {
		self.template.source.into_owned()
	}

	/// Borrow the template.
	#[inline]
	pub fn as_template(&self) -> &Template<'_> {
		&self.template
	}

	/// Render the template to an I/O stream.
	///
	/// See [`Template::render()`].
	#[inline]
	pub fn render<W, A>(&self, output: &mut W, args: &A) -> Result<(), RenderError>
	where
		W: std::io::Write + ?Sized,
		A: Arguments + ?Sized,
	{
		self.as_template().render(output, args)
	}

	/// Render the template by appending to a byte buffer.
	///
	/// See [`Template::render_append()`].
	#[inline]
	pub fn render_append<'b, A>(&self, buffer: &'b mut Vec<u8>, args: &A) -> Result<&'b [u8], IndexOutOfRange>
	where
		A: Arguments + ?Sized,
	{
		self.as_template().render_append(buffer, args)
	}

	/// Render the template to a new string.
	///
	/// See [`Template::render_to_string()`].
	#[inline]
	pub fn render_to_string<A>(&self, args: &A) -> Result<String, IndexOutOfRange>
	where
		A: Arguments + ?Sized,
	{
		self.as_template().render_to_string(args)
	}

	/// Get a value that renders the template when formatted with [`Display`][std::fmt::Display].
	///
	/// See [`Template::display()`].
	#[inline]
	pub fn display<'t, A>(&'t self, args: &'t A) -> Message<'t, A>
	where
		A: Arguments + ?Sized,
	{
		self.as_template().display(args)
	}
}

impl std::ops::Deref for TemplateBuf {
	type Target = Template<'static>;

	#[inline]
	fn deref(&self) -> &Self::Target {
		&self.template
	}
}

impl<'a> From<&'a TemplateBuf> for &'a Template<'a> {
	#[inline]
	fn from(other: &'a TemplateBuf) -> Self {
		other.as_template()
	}
}

impl From<&Template<'_>> for TemplateBuf {
	#[inline]
	fn from(other: &Template<'_>) -> Self {
		other.clone().into()
	}
}

impl From<Template<'_>> for TemplateBuf {
	#[inline]
	fn from(other: Template<'_>) -> Self {
		let template = Template {
			source: Cow::Owned(other.source.into_owned()),
			raw: other.raw,
		};
		Self { template }
	}
}

/// One segment of a compiled template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
	/// Literal text, copied verbatim when rendering.
	Literal(&'a str),

	/// A placeholder with the given name, without delimiters.
	Placeholder(&'a str),
}

/// Iterator over the segments of a template.
///
/// Returned by [`Template::segments()`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
	source: &'a str,
	parts: std::slice::Iter<'a, raw::Part>,
}

impl<'a> Iterator for Segments<'a> {
	type Item = Segment<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		let segment = match self.parts.next()? {
			raw::Part::Literal(x) => Segment::Literal(&self.source[x.range.clone()]),
			raw::Part::Placeholder(x) => Segment::Placeholder(&self.source[x.name.clone()]),
		};
		Some(segment)
	}

	#[inline]
	fn size_hint(&self) -> (usize, Option<usize>) {
		self.parts.size_hint()
	}
}

impl ExactSizeIterator for Segments<'_> {}

/// A template together with its arguments, rendered when formatted.
///
/// Returned by [`Template::display()`].
pub struct Message<'t, A: ?Sized> {
	template: &'t Template<'t>,
	args: &'t A,
}

impl<A: ?Sized> Clone for Message<'_, A> {
	#[inline]
	fn clone(&self) -> Self {
		*self
	}
}

impl<A: ?Sized> Copy for Message<'_, A> {}

impl<A: ?Sized> std::fmt::Debug for Message<'_, A> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Message")
			.field("template", &self.template.source())
			.finish_non_exhaustive()
	}
}

impl<A> std::fmt::Display for Message<'_, A>
where
	A: Arguments + ?Sized,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let args = with_default(self.args, Value::Nil);
		match self.template.raw.render(f, &self.template.source, &args) {
			Ok(()) => Ok(()),
			Err(Failure::Sink(e)) => Err(e),
			// Sources with a default value never report missing arguments.
			Err(Failure::Input(_)) => Ok(()),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use assert2::{assert, check, let_assert};

	const PATTERN: &str = "`service`: Sent `signal` to main `process` (`name`) on client request.";
	const LINE: &str = "`service:rsyslog`: Sent `signal:SIGHUP` to main `process:1611` (`name:rsyslogd`) on client request.";

	#[test]
	fn render_to_stream() {
		let_assert!(Ok(template) = Template::from_str(PATTERN));
		let args = with_default(crate::args!["rsyslog", "SIGHUP", 1611, "rsyslogd"], "???");
		let mut output = Vec::new();
		let_assert!(Ok(()) = template.render(&mut output, &args));
		assert!(output == LINE.as_bytes());
	}

	#[test]
	fn render_append_reuses_buffer() {
		let_assert!(Ok(template) = Template::from_str(PATTERN));
		let args = crate::args!["rsyslog", "SIGHUP", 1611, "rsyslogd"];

		let mut buffer = b"<30>".to_vec();
		let_assert!(Ok(line) = template.render_append(&mut buffer, &args));
		assert!(line == format!("<30>{LINE}").as_bytes());

		buffer.clear();
		let capacity = buffer.capacity();
		let_assert!(Ok(line) = template.render_append(&mut buffer, &args));
		assert!(line == LINE.as_bytes());
		assert!(buffer.capacity() == capacity);
	}

	#[test]
	fn render_append_restores_buffer_on_error() {
		let_assert!(Ok(template) = Template::from_str(PATTERN));
		let args = crate::args!["rsyslog", "SIGHUP"];

		let mut buffer = b"prefix".to_vec();
		let_assert!(Err(e) = template.render_append(&mut buffer, &args));
		assert!(e == IndexOutOfRange { position: 2, len: 2 });
		assert!(buffer == b"prefix");
	}

	#[test]
	fn render_to_stream_reports_missing_argument() {
		let_assert!(Ok(template) = Template::from_str(PATTERN));
		let mut output = Vec::new();
		let_assert!(Err(RenderError::IndexOutOfRange(e)) = template.render(&mut output, &crate::args!["rsyslog"]));
		assert!(e.position == 1);
	}

	#[test]
	fn render_to_failing_stream() {
		struct Broken;

		impl std::io::Write for Broken {
			fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
				Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken"))
			}

			fn flush(&mut self) -> std::io::Result<()> {
				Ok(())
			}
		}

		let_assert!(Ok(template) = Template::from_str("`a`"));
		let_assert!(Err(RenderError::Io(e)) = template.render(&mut Broken, &crate::args![1]));
		assert!(e.kind() == std::io::ErrorKind::BrokenPipe);
	}

	#[test]
	fn display_message() {
		let_assert!(Ok(template) = Template::from_str(PATTERN));
		let args = crate::args!["rsyslog", "SIGHUP", 1611u32, "rsyslogd"];
		assert!(template.display(&args).to_string() == LINE);

		// Formatting flags do not leak into the values.
		let_assert!(Ok(template) = Template::from_str("pid `pid`"));
		assert!(format!("{:>20}", template.display(&crate::args![7])) == "pid `pid:7`");
	}

	#[test]
	fn display_with_missing_arguments() {
		let_assert!(Ok(template) = Template::from_str("`a` `b`"));
		assert!(template.display(&crate::args![1]).to_string() == "`a:1` `b:`");
		assert!(format!("{}", template.display(&crate::args::NoArguments)) == "`a:` `b:`");
		assert!(template.display(&with_default(crate::args![1], "?")).to_string() == "`a:1` `b:?`");
	}

	#[test]
	fn compile_twice_renders_identically() {
		let args = crate::args!["rsyslog", "SIGHUP", 1611, "rsyslogd"];
		let_assert!(Ok(first) = Template::from_str(PATTERN));
		let_assert!(Ok(second) = TemplateBuf::from_string(PATTERN.to_string()));
		assert!(first.render_to_string(&args) == second.render_to_string(&args));
		assert!(TemplateBuf::from(&first) == second);
	}

	#[test]
	fn inspect_segments() {
		let_assert!(Ok(template) = Template::from_str(PATTERN));
		check!(template.placeholder_count() == 4);
		check!(template.placeholders().collect::<Vec<_>>() == ["service", "signal", "process", "name"]);
		check!(template.segments().len() == 8);
		check!(template.segments().nth(1) == Some(Segment::Literal(": Sent ")));

		// Segments reproduce the pattern.
		let rebuilt: String = template.segments()
			.map(|segment| match segment {
				Segment::Literal(x) => x.to_string(),
				Segment::Placeholder(x) => format!("`{x}`"),
			})
			.collect();
		assert!(rebuilt == PATTERN);
	}

	#[test]
	fn template_buf_conversions() {
		let_assert!(Ok(template) = Template::from_str(PATTERN));
		let owned = TemplateBuf::from(&template);
		drop(template);
		assert!(owned.source() == PATTERN);
		assert!(owned.placeholder_count() == 4);

		let clone = owned.clone();
		assert!(owned.into_source() == PATTERN);
		let_assert!(Ok(line) = clone.render_to_string(&[Value::from("a"), Value::from("b"), Value::from(3), Value::from("d")]));
		assert!(line.starts_with("`service:a`"));
	}

	#[test]
	fn share_between_threads() {
		let_assert!(Ok(template) = TemplateBuf::from_string(PATTERN.to_string()));
		let template = std::sync::Arc::new(template);
		let handles: Vec<_> = (0..4)
			.map(|pid| {
				let template = template.clone();
				std::thread::spawn(move || template.render_to_string(&crate::args!["svc", "SIGHUP", pid, "proc"]))
			})
			.collect();

		for (pid, handle) in handles.into_iter().enumerate() {
			let_assert!(Ok(Ok(line)) = handle.join());
			assert!(line.contains(&format!("`process:{pid}`")));
		}
	}

	#[test]
	fn debug_shows_source() {
		let_assert!(Ok(template) = Template::from_str("`a`"));
		assert!(format!("{template:?}") == "Template(\"`a`\")");
		let owned = TemplateBuf::from(template);
		assert!(format!("{owned:?}") == "TemplateBuf(\"`a`\")");
	}
}
