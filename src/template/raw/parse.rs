use super::{Literal, Part, Placeholder, Template};
use crate::error::{self, MalformedTemplate};
use crate::{DELIMITER, SEPARATOR};

impl Template {
	/// Parse the template from a source slice.
	pub fn parse(source: &[u8]) -> Result<Self, MalformedTemplate> {
		let mut parts = Vec::with_capacity(1);
		let mut placeholders = 0;
		let mut finger = 0;
		while finger < source.len() {
			let next = match memchr::memchr(DELIMITER, &source[finger..]) {
				Some(x) => finger + x,
				None => source.len(),
			};

			// If we found a non-empty string up to the next delimiter,
			// then we have a piece of literal text.
			if next != finger {
				parts.push(Part::Literal(Literal { range: finger..next }));
			}

			// If we hit the end of the string, we're done.
			if next == source.len() {
				break;
			}

			let (placeholder, end) = Placeholder::parse(source, next, placeholders)?;
			parts.push(Part::Placeholder(placeholder));
			placeholders += 1;
			finger = end;
		}

		Ok(Self { parts, placeholders })
	}
}

impl Placeholder {
	/// Parse a placeholder from the source.
	///
	/// The finger must be the position of the opening delimiter in the source.
	///
	/// Returns the parsed placeholder and the index of the byte after the closing delimiter.
	fn parse(source: &[u8], finger: usize, index: usize) -> Result<(Self, usize), MalformedTemplate> {
		let name_start = finger + 1;
		let name_end = match memchr::memchr(DELIMITER, &source[name_start..]) {
			Some(x) => name_start + x,
			None => return Err(error::UnterminatedPlaceholder { position: finger }.into()),
		};

		if name_start == name_end {
			return Err(error::EmptyPlaceholderName { position: finger }.into());
		}

		if let Some(x) = memchr::memchr(SEPARATOR, &source[name_start..name_end]) {
			return Err(error::SeparatorInPlaceholderName { position: name_start + x }.into());
		}

		let placeholder = Placeholder {
			name: name_start..name_end,
			index,
		};
		Ok((placeholder, name_end + 1))
	}
}

#[cfg(test)]
#[rustfmt::skip]
mod test {
	use super::*;
	use assert2::{assert, let_assert};

	fn describe(source: &str) -> Vec<String> {
		let_assert!(Ok(template) = Template::parse(source.as_bytes()));
		template.parts().iter()
			.map(|part| match part {
				Part::Literal(x) => format!("L({})", &source[x.range.clone()]),
				Part::Placeholder(x) => format!("P{}({})", x.index, &source[x.name.clone()]),
			})
			.collect()
	}

	#[test]
	fn parse_segments() {
		assert!(describe("`service`: Sent `signal` to main `process` (`name`) on client request.") == [
			"P0(service)",
			"L(: Sent )",
			"P1(signal)",
			"L( to main )",
			"P2(process)",
			"L( ()",
			"P3(name)",
			"L() on client request.)",
		]);
	}

	#[test]
	fn parse_without_placeholders() {
		assert!(describe("") == Vec::<String>::new());
		assert!(describe("just text") == ["L(just text)"]);
	}

	#[test]
	fn parse_adjacent_placeholders() {
		assert!(describe("`a``b`") == ["P0(a)", "P1(b)"]);
		assert!(describe("`a` `a`") == ["P0(a)", "L( )", "P1(a)"]);
	}

	#[test]
	fn names_are_verbatim() {
		assert!(describe("`process name` `❤`") == ["P0(process name)", "L( )", "P1(❤)"]);
	}

	#[test]
	fn count_placeholders() {
		let_assert!(Ok(template) = Template::parse(b"`a` and `b` and `a`"));
		assert!(template.placeholders() == 3);
	}

	#[test]
	fn unterminated_placeholder() {
		let_assert!(Err(e) = Template::parse(b"Sent `signal to main"));
		assert!(e == MalformedTemplate::from(error::UnterminatedPlaceholder { position: 5 }));

		let_assert!(Err(e) = Template::parse(b"trailing `"));
		assert!(e == MalformedTemplate::from(error::UnterminatedPlaceholder { position: 9 }));
	}

	#[test]
	fn empty_placeholder_name() {
		let_assert!(Err(e) = Template::parse(b"Sent `` to main"));
		assert!(e == MalformedTemplate::from(error::EmptyPlaceholderName { position: 5 }));
	}

	#[test]
	fn separator_in_placeholder_name() {
		let_assert!(Err(e) = Template::parse(b"Sent `signal:SIGHUP` to main"));
		assert!(e == MalformedTemplate::from(error::SeparatorInPlaceholderName { position: 12 }));
	}
}
