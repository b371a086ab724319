//! Module containing error details.

/// An error that can occur in the pattern-taking convenience functions.
///
/// The more specific operations return narrower error types,
/// which all convert into this type.
#[derive(Debug)]
pub enum Error {
	/// The pattern could not be compiled.
	MalformedTemplate(MalformedTemplate),

	/// A strict argument source has no value for a placeholder.
	IndexOutOfRange(IndexOutOfRange),

	/// A rendered line could not be parsed.
	MalformedLine(MalformedLine),

	/// Writing to the output sink failed.
	Io(std::io::Error),
}

impl From<MalformedTemplate> for Error {
	#[inline]
	fn from(other: MalformedTemplate) -> Self {
		Self::MalformedTemplate(other)
	}
}

impl From<IndexOutOfRange> for Error {
	#[inline]
	fn from(other: IndexOutOfRange) -> Self {
		Self::IndexOutOfRange(other)
	}
}

impl From<MalformedLine> for Error {
	#[inline]
	fn from(other: MalformedLine) -> Self {
		Self::MalformedLine(other)
	}
}

impl From<std::io::Error> for Error {
	#[inline]
	fn from(other: std::io::Error) -> Self {
		Self::Io(other)
	}
}

impl From<RenderError> for Error {
	#[inline]
	fn from(other: RenderError) -> Self {
		match other {
			RenderError::IndexOutOfRange(e) => Self::IndexOutOfRange(e),
			RenderError::Io(e) => Self::Io(e),
		}
	}
}

impl From<ExtractError> for Error {
	#[inline]
	fn from(other: ExtractError) -> Self {
		match other {
			ExtractError::MalformedLine(e) => Self::MalformedLine(e),
			ExtractError::Io(e) => Self::Io(e),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Io(e) => Some(e),
			_ => None,
		}
	}
}

impl std::fmt::Display for Error {
	#[inline]
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::MalformedTemplate(e) => e.fmt(f),
			Self::IndexOutOfRange(e) => e.fmt(f),
			Self::MalformedLine(e) => e.fmt(f),
			Self::Io(e) => write!(f, "Failed to write output: {e}"),
		}
	}
}

/// An error that can occur while compiling a template.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Eq, PartialEq))]
pub enum MalformedTemplate {
	/// The pattern contains a placeholder without a closing delimiter.
	UnterminatedPlaceholder(UnterminatedPlaceholder),

	/// The pattern contains a placeholder without a name (two adjacent delimiters).
	EmptyPlaceholderName(EmptyPlaceholderName),

	/// The pattern contains a placeholder name with a colon in it.
	///
	/// The colon separates names from values in rendered tokens,
	/// so such a name could not be extracted again.
	SeparatorInPlaceholderName(SeparatorInPlaceholderName),
}

impl From<UnterminatedPlaceholder> for MalformedTemplate {
	#[inline]
	fn from(other: UnterminatedPlaceholder) -> Self {
		Self::UnterminatedPlaceholder(other)
	}
}

impl From<EmptyPlaceholderName> for MalformedTemplate {
	#[inline]
	fn from(other: EmptyPlaceholderName) -> Self {
		Self::EmptyPlaceholderName(other)
	}
}

impl From<SeparatorInPlaceholderName> for MalformedTemplate {
	#[inline]
	fn from(other: SeparatorInPlaceholderName) -> Self {
		Self::SeparatorInPlaceholderName(other)
	}
}

impl std::error::Error for MalformedTemplate {}

impl std::fmt::Display for MalformedTemplate {
	#[inline]
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::UnterminatedPlaceholder(e) => e.fmt(f),
			Self::EmptyPlaceholderName(e) => e.fmt(f),
			Self::SeparatorInPlaceholderName(e) => e.fmt(f),
		}
	}
}

impl MalformedTemplate {
	/// Get the range in the source text that contains the error.
	pub fn source_range(&self) -> std::ops::Range<usize> {
		match self {
			Self::UnterminatedPlaceholder(e) => e.position..e.position + 1,
			Self::EmptyPlaceholderName(e) => e.position..e.position + 2,
			Self::SeparatorInPlaceholderName(e) => e.position..e.position + 1,
		}
	}

	/// Get the line of source that contains the error.
	///
	/// # Panics
	/// May panic if the source text is not the original source that contains the error.
	#[inline]
	pub fn source_line<'a>(&self, source: &'a [u8]) -> &'a [u8] {
		source_line(source, self.source_range().start)
	}

	/// Write source highlighting for the error location.
	///
	/// The highlighting ends with a newline.
	///
	/// Note: this function doesn't print anything if the source line exceeds 60 characters in width.
	/// For more control over this behaviour, consider using [`Self::source_range()`] and [`Self::source_line()`] instead.
	#[inline]
	pub fn write_source_highlighting(&self, f: &mut impl std::fmt::Write, source: &[u8]) -> std::fmt::Result {
		write_source_highlighting(f, source, self.source_range())
	}

	/// Get source highlighting for the error location as a string.
	///
	/// The highlighting ends with a newline.
	pub fn source_highlighting(&self, source: &[u8]) -> String {
		let mut output = String::new();
		// Writing to a String can only fail if the source is not UTF-8, in which case we give an empty string.
		let _ = self.write_source_highlighting(&mut output, source);
		output
	}
}

/// The pattern contains a placeholder without a closing delimiter.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Eq, PartialEq))]
pub struct UnterminatedPlaceholder {
	/// The byte offset within the input where the error occurs.
	///
	/// This points to the opening delimiter of the placeholder.
	pub position: usize,
}

impl std::error::Error for UnterminatedPlaceholder {}

impl std::fmt::Display for UnterminatedPlaceholder {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "Unterminated placeholder: missing closing delimiter")
	}
}

/// The pattern contains a placeholder without a name.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Eq, PartialEq))]
pub struct EmptyPlaceholderName {
	/// The byte offset within the input where the error occurs.
	///
	/// This points to the opening delimiter of the empty placeholder.
	pub position: usize,
}

impl std::error::Error for EmptyPlaceholderName {}

impl std::fmt::Display for EmptyPlaceholderName {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "Missing placeholder name")
	}
}

/// The pattern contains a placeholder name with a colon in it.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Eq, PartialEq))]
pub struct SeparatorInPlaceholderName {
	/// The byte offset within the input where the error occurs.
	///
	/// This points to the first colon in the placeholder name.
	pub position: usize,
}

impl std::error::Error for SeparatorInPlaceholderName {}

impl std::fmt::Display for SeparatorInPlaceholderName {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "Unexpected character: ':' is not allowed in placeholder names")
	}
}

/// A strict argument source was asked for a position it has no value for.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct IndexOutOfRange {
	/// The requested argument position.
	pub position: usize,

	/// The number of values the source has.
	pub len: usize,
}

impl std::error::Error for IndexOutOfRange {}

impl std::fmt::Display for IndexOutOfRange {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "No argument for position {}: only {} values supplied", self.position, self.len)
	}
}

/// An error that can occur while extracting values from a rendered line.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Eq, PartialEq))]
pub enum MalformedLine {
	/// The line contains a token without a closing delimiter.
	UnterminatedToken(UnterminatedToken),

	/// The line contains a token without a name.
	EmptyTokenName(EmptyTokenName),
}

impl From<UnterminatedToken> for MalformedLine {
	#[inline]
	fn from(other: UnterminatedToken) -> Self {
		Self::UnterminatedToken(other)
	}
}

impl From<EmptyTokenName> for MalformedLine {
	#[inline]
	fn from(other: EmptyTokenName) -> Self {
		Self::EmptyTokenName(other)
	}
}

impl std::error::Error for MalformedLine {}

impl std::fmt::Display for MalformedLine {
	#[inline]
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::UnterminatedToken(e) => e.fmt(f),
			Self::EmptyTokenName(e) => e.fmt(f),
		}
	}
}

impl MalformedLine {
	/// Get the range in the line that contains the error.
	pub fn source_range(&self) -> std::ops::Range<usize> {
		match self {
			Self::UnterminatedToken(e) => e.position..e.position + 1,
			Self::EmptyTokenName(e) => e.position..e.position + e.len,
		}
	}

	/// Get the line of source that contains the error.
	///
	/// Rendered lines are normally a single line already,
	/// but extraction does not forbid embedded newlines.
	///
	/// # Panics
	/// May panic if the source text is not the original source that contains the error.
	#[inline]
	pub fn source_line<'a>(&self, source: &'a [u8]) -> &'a [u8] {
		source_line(source, self.source_range().start)
	}

	/// Write source highlighting for the error location.
	///
	/// The highlighting ends with a newline.
	///
	/// Note: this function doesn't print anything if the source line exceeds 60 characters in width.
	#[inline]
	pub fn write_source_highlighting(&self, f: &mut impl std::fmt::Write, source: &[u8]) -> std::fmt::Result {
		write_source_highlighting(f, source, self.source_range())
	}

	/// Get source highlighting for the error location as a string.
	///
	/// The highlighting ends with a newline.
	pub fn source_highlighting(&self, source: &[u8]) -> String {
		let mut output = String::new();
		let _ = self.write_source_highlighting(&mut output, source);
		output
	}
}

/// The line contains a token without a closing delimiter.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Eq, PartialEq))]
pub struct UnterminatedToken {
	/// The byte offset within the line where the error occurs.
	///
	/// This points to the opening delimiter of the token.
	pub position: usize,
}

impl std::error::Error for UnterminatedToken {}

impl std::fmt::Display for UnterminatedToken {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "Unterminated token: missing closing delimiter")
	}
}

/// The line contains a token without a name.
#[derive(Debug, Clone)]
#[cfg_attr(test, derive(Eq, PartialEq))]
pub struct EmptyTokenName {
	/// The byte offset within the line where the error occurs.
	///
	/// This points to the opening delimiter of the token.
	pub position: usize,

	/// The length of the entire token in bytes, including both delimiters.
	pub len: usize,
}

impl std::error::Error for EmptyTokenName {}

impl std::fmt::Display for EmptyTokenName {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "Missing token name")
	}
}

/// An error that can occur while rendering a template.
#[derive(Debug)]
pub enum RenderError {
	/// A strict argument source has no value for a placeholder.
	IndexOutOfRange(IndexOutOfRange),

	/// Writing to the output sink failed.
	Io(std::io::Error),
}

impl From<IndexOutOfRange> for RenderError {
	#[inline]
	fn from(other: IndexOutOfRange) -> Self {
		Self::IndexOutOfRange(other)
	}
}

impl From<std::io::Error> for RenderError {
	#[inline]
	fn from(other: std::io::Error) -> Self {
		Self::Io(other)
	}
}

impl std::error::Error for RenderError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::IndexOutOfRange(_) => None,
			Self::Io(e) => Some(e),
		}
	}
}

impl std::fmt::Display for RenderError {
	#[inline]
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::IndexOutOfRange(e) => e.fmt(f),
			Self::Io(e) => write!(f, "Failed to write output: {e}"),
		}
	}
}

/// An error that can occur while extracting values from a rendered line.
#[derive(Debug)]
pub enum ExtractError {
	/// The line could not be parsed.
	MalformedLine(MalformedLine),

	/// Writing the bare template to the output sink failed.
	Io(std::io::Error),
}

impl From<MalformedLine> for ExtractError {
	#[inline]
	fn from(other: MalformedLine) -> Self {
		Self::MalformedLine(other)
	}
}

impl From<UnterminatedToken> for ExtractError {
	#[inline]
	fn from(other: UnterminatedToken) -> Self {
		Self::MalformedLine(other.into())
	}
}

impl From<EmptyTokenName> for ExtractError {
	#[inline]
	fn from(other: EmptyTokenName) -> Self {
		Self::MalformedLine(other.into())
	}
}

impl From<std::io::Error> for ExtractError {
	#[inline]
	fn from(other: std::io::Error) -> Self {
		Self::Io(other)
	}
}

impl std::error::Error for ExtractError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::MalformedLine(_) => None,
			Self::Io(e) => Some(e),
		}
	}
}

impl std::fmt::Display for ExtractError {
	#[inline]
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::MalformedLine(e) => e.fmt(f),
			Self::Io(e) => write!(f, "Failed to write output: {e}"),
		}
	}
}

fn source_line(source: &[u8], position: usize) -> &[u8] {
	let start = line_start(source, position);
	let end = line_end(source, position);
	&source[start..end]
}

fn line_start(source: &[u8], position: usize) -> usize {
	match source[..position].iter().rposition(|&c| c == b'\n' || c == b'\r') {
		Some(line_end) => line_end + 1,
		None => 0,
	}
}

fn line_end(source: &[u8], position: usize) -> usize {
	match source[position..].iter().position(|&c| c == b'\n' || c == b'\r') {
		Some(line_end) => position + line_end,
		None => source.len(),
	}
}

fn write_source_highlighting(f: &mut impl std::fmt::Write, source: &[u8], range: std::ops::Range<usize>) -> std::fmt::Result {
	use unicode_width::UnicodeWidthStr;

	let start = line_start(source, range.start);
	let line = source_line(source, range.start);
	let line = match std::str::from_utf8(line) {
		Ok(line) => line,
		Err(_) => return Err(std::fmt::Error),
	};
	if line.width() > 60 {
		return Ok(());
	}
	let range = range.start - start..(range.end - start).min(line.len());
	write!(f, "  {}\n  ", line)?;
	write_underline(f, line, range)?;
	writeln!(f)
}

fn write_underline(f: &mut impl std::fmt::Write, line: &str, range: std::ops::Range<usize>) -> std::fmt::Result {
	use unicode_width::UnicodeWidthStr;
	let spaces = line[..range.start].width();
	let carets = line[range].width().max(1);
	write!(f, "{}", " ".repeat(spaces))?;
	write!(f, "{}", "^".repeat(carets))?;
	Ok(())
}

#[cfg(test)]
#[rustfmt::skip]
mod test {
	use super::*;
	use assert2::assert;

	#[test]
	fn highlight_unterminated_placeholder() {
		let source = "Sent `signal to main";
		let error = MalformedTemplate::from(UnterminatedPlaceholder { position: 5 });
		assert!(error.to_string() == "Unterminated placeholder: missing closing delimiter");
		assert!(error.source_highlighting(source.as_bytes()) == concat!(
			"  Sent `signal to main\n",
			"       ^\n",
		));
	}

	#[test]
	fn highlight_on_second_line() {
		let source = "first line\nsecond `` line";
		let error = MalformedTemplate::from(EmptyPlaceholderName { position: 18 });
		assert!(error.source_line(source.as_bytes()) == b"second `` line");
		assert!(error.source_highlighting(source.as_bytes()) == concat!(
			"  second `` line\n",
			"         ^^\n",
		));
	}

	#[test]
	fn highlight_empty_token_name() {
		let source = "`:1611` exited";
		let error = MalformedLine::from(EmptyTokenName { position: 0, len: 7 });
		assert!(error.to_string() == "Missing token name");
		assert!(error.source_highlighting(source.as_bytes()) == concat!(
			"  `:1611` exited\n",
			"  ^^^^^^^\n",
		));
	}

	#[test]
	fn no_highlight_for_wide_lines() {
		let source = format!("{}`", "x".repeat(80));
		let error = MalformedLine::from(UnterminatedToken { position: 80 });
		assert!(error.source_highlighting(source.as_bytes()) == "");
	}

	#[test]
	fn convert_to_crate_error() {
		let error: Error = RenderError::IndexOutOfRange(IndexOutOfRange { position: 3, len: 2 }).into();
		assert!(error.to_string() == "No argument for position 3: only 2 values supplied");
		assert!(let Error::IndexOutOfRange(IndexOutOfRange { position: 3, len: 2 }) = error);

		let error: Error = ExtractError::from(UnterminatedToken { position: 1 }).into();
		assert!(let Error::MalformedLine(MalformedLine::UnterminatedToken(_)) = error);
	}
}
