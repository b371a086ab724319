use super::{Part, Placeholder, Template};
use crate::args::Arguments;
use crate::error::IndexOutOfRange;
use crate::sink::{Failure, Sink};
use crate::{DELIMITER_STR, SEPARATOR_STR};

impl Template {
	/// Render the template into the sink.
	///
	/// The `source` must be the string the template was parsed from.
	pub fn render<S, A>(&self, sink: &mut S, source: &str, args: &A) -> Result<(), Failure<IndexOutOfRange, S::Error>>
	where
		S: Sink + ?Sized,
		A: Arguments + ?Sized,
	{
		for part in &self.parts {
			match part {
				Part::Literal(x) => sink.write_str(&source[x.range.clone()]).map_err(Failure::Sink)?,
				Part::Placeholder(x) => x.render(sink, source, args)?,
			}
		}
		Ok(())
	}
}

impl Placeholder {
	/// Render the placeholder as a `name:value` token into the sink.
	fn render<S, A>(&self, sink: &mut S, source: &str, args: &A) -> Result<(), Failure<IndexOutOfRange, S::Error>>
	where
		S: Sink + ?Sized,
		A: Arguments + ?Sized,
	{
		// Look up the value first, so nothing of the token is written if it is missing.
		let value = args.get(self.index).map_err(Failure::Input)?;
		let name = &source[self.name.clone()];

		sink.write_str(DELIMITER_STR).map_err(Failure::Sink)?;
		sink.write_str(name).map_err(Failure::Sink)?;
		sink.write_str(SEPARATOR_STR).map_err(Failure::Sink)?;
		sink.write_value(&value).map_err(Failure::Sink)?;
		sink.write_str(DELIMITER_STR).map_err(Failure::Sink)
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::args::{with_default, Value};
	use assert2::{assert, let_assert};

	fn render(source: &str, args: &(impl Arguments + ?Sized)) -> Result<String, IndexOutOfRange> {
		let_assert!(Ok(template) = Template::parse(source.as_bytes()));
		let mut output = String::new();
		template.render(&mut output, source, args).map_err(Failure::into_input)?;
		Ok(output)
	}

	#[test]
	fn render_tokens() {
		let args = crate::args!["rsyslog", "SIGHUP", 1611, "rsyslogd"];
		let_assert!(Ok(line) = render("`service`: Sent `signal` to main `process` (`name`) on client request.", &args));
		assert!(line == "`service:rsyslog`: Sent `signal:SIGHUP` to main `process:1611` (`name:rsyslogd`) on client request.");
	}

	#[test]
	fn bind_by_position_not_name() {
		let args = crate::args![1, 2, 3];
		let_assert!(Ok(line) = render("`x` `y` `x`", &args));
		assert!(line == "`x:1` `y:2` `x:3`");
	}

	#[test]
	fn missing_argument() {
		let args = crate::args!["a"];
		let_assert!(Err(e) = render("`first` `second`", &args));
		assert!(e == IndexOutOfRange { position: 1, len: 1 });
	}

	#[test]
	fn extra_arguments_are_ignored() {
		let args = crate::args!["a", "b", "c"];
		let_assert!(Ok(line) = render("only `one`", &args));
		assert!(line == "only `one:a`");
	}

	#[test]
	fn nil_renders_empty() {
		let args = [Value::Nil];
		let_assert!(Ok(line) = render("`gone`", &args));
		assert!(line == "`gone:`");
	}

	#[test]
	fn default_for_missing() {
		let args = with_default(crate::args!["rsyslog"], "???");
		let_assert!(Ok(line) = render("`service` `signal`", &args));
		assert!(line == "`service:rsyslog` `signal:???`");
	}
}
