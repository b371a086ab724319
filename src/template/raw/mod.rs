mod parse;
mod render;

/// Raw template that doesn't track the original source.
///
/// Internally, this keeps a bunch of offsets into the original source.
#[derive(Debug, Clone)]
pub struct Template {
	/// The individual parts that make up the template.
	parts: Vec<Part>,

	/// The number of placeholders in `parts`.
	placeholders: usize,
}

/// One piece of a parsed template.
#[derive(Debug, Clone)]
pub enum Part {
	/// A literal string to be used verbatim from the original source.
	Literal(Literal),

	/// A placeholder to be replaced by a token at render time.
	Placeholder(Placeholder),
}

/// A literal string to be used verbatim from the original source.
#[derive(Debug, Clone)]
pub struct Literal {
	/// The range of the literal in the original source.
	///
	/// The literal never contains a delimiter.
	pub range: std::ops::Range<usize>,
}

/// A placeholder to be replaced by a token at render time.
#[derive(Debug, Clone)]
pub struct Placeholder {
	/// The range in the source defining the name of the placeholder, without delimiters.
	pub name: std::ops::Range<usize>,

	/// The argument position this placeholder is bound to.
	pub index: usize,
}

impl Template {
	/// Get the parts of the template.
	#[inline]
	pub fn parts(&self) -> &[Part] {
		&self.parts
	}

	/// Get the number of placeholders in the template.
	#[inline]
	pub fn placeholders(&self) -> usize {
		self.placeholders
	}
}
