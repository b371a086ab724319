use std::marker::PhantomData;

use serde::{
	de::{Error, Visitor},
	ser::SerializeMap,
	Deserialize,
	Deserializer,
	Serialize,
	Serializer,
};

use crate::{Template, TemplateBuf, Values};

struct TemplateVisitor<'de> {
	_lifetime: PhantomData<&'de ()>,
}

impl<'de> TemplateVisitor<'de> {
	const fn new() -> Self {
		Self { _lifetime: PhantomData }
	}
}

impl<'de> Visitor<'de> for TemplateVisitor<'de> {
	type Value = Template<'de>;

	fn visit_borrowed_str<E>(self, v: &'de str) -> Result<Self::Value, E>
	where
		E: Error,
	{
		Template::from_str(v).map_err(E::custom)
	}

	fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
		formatter.write_str("a borrowed line pattern")
	}
}

struct TemplateBufVisitor;

impl<'de> Visitor<'de> for TemplateBufVisitor {
	type Value = TemplateBuf;

	fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
		formatter.write_str("a line pattern")
	}

	fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
	where
		E: Error,
	{
		self.visit_string(v.to_owned())
	}

	fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
	where
		E: Error,
	{
		TemplateBuf::from_string(v).map_err(E::custom)
	}
}

impl Serialize for Template<'_> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(self.source())
	}
}

impl Serialize for TemplateBuf {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(self.as_template().source())
	}
}

impl<'de> Deserialize<'de> for Template<'de> {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_str(TemplateVisitor::new())
	}
}

impl<'de> Deserialize<'de> for TemplateBuf {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		deserializer.deserialize_string(TemplateBufVisitor)
	}
}

/// Values serialize as a map from name to the sequence of values, in order of first appearance.
impl Serialize for Values<'_> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut map = serializer.serialize_map(Some(self.len()))?;
		for (name, values) in self.iter() {
			map.serialize_entry(name, values)?;
		}
		map.end()
	}
}

#[cfg(test)]
mod test {
	use serde_test::{assert_de_tokens_error, assert_ser_tokens, assert_tokens, Token};

	use crate::{extract_to_string, Template, TemplateBuf};

	const SOURCE: &str = "Sent `signal` to `process`";

	#[test]
	fn template_ser_de() {
		let template = Template::from_str(SOURCE).unwrap();

		assert_tokens(&template, &[Token::BorrowedStr(SOURCE)]);
	}

	#[test]
	fn template_buf_ser_de() {
		let template = TemplateBuf::from_string(SOURCE.to_string()).unwrap();

		assert_tokens(&template, &[Token::String(SOURCE)]);
	}

	#[test]
	fn malformed_pattern_fails_to_deserialize() {
		assert_de_tokens_error::<TemplateBuf>(
			&[Token::Str("Sent `signal")],
			"Unterminated placeholder: missing closing delimiter",
		);
	}

	#[test]
	fn values_ser() {
		let (_, values) = extract_to_string("`pid:1` `name:cron` `pid:2`").unwrap();

		assert_ser_tokens(&values, &[
			Token::Map { len: Some(2) },
			Token::Str("pid"),
			Token::Seq { len: Some(2) },
			Token::Str("1"),
			Token::Str("2"),
			Token::SeqEnd,
			Token::Str("name"),
			Token::Seq { len: Some(1) },
			Token::Str("cron"),
			Token::SeqEnd,
			Token::MapEnd,
		]);
	}
}
