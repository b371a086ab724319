use super::{Arguments, Value};
use crate::error::IndexOutOfRange;

/// [`Arguments`] produced by [`with_default()`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WithDefault<'d, A> {
	args: A,
	default: Value<'d>,
}

impl<'d, A> WithDefault<'d, A> {
	/// Get the sentinel value used for missing arguments.
	#[inline]
	pub fn default_value(&self) -> Value<'d> {
		self.default
	}

	/// Get the wrapped argument source.
	#[inline]
	pub fn inner(&self) -> &A {
		&self.args
	}
}

impl<A> Arguments for WithDefault<'_, A>
where
	A: Arguments,
{
	#[inline]
	fn get(&self, position: usize) -> Result<Value<'_>, IndexOutOfRange> {
		match self.args.get(position) {
			Ok(value) if !value.is_nil() => Ok(value),
			_ => Ok(self.default),
		}
	}
}

/// Creates [`Arguments`] that never fail.
///
/// Whenever `args` has no value for a position, or the value is [`Value::Nil`],
/// the sentinel `default` is returned instead.
///
/// # Example
/// ```rust
/// # use tickline::args::{with_default, Arguments, Value};
/// let args = with_default(tickline::args!["rsyslog", None::<i32>], "???");
///
/// assert_eq!(args.get(0), Ok(Value::Str("rsyslog")));
/// assert_eq!(args.get(1), Ok(Value::Str("???")));
/// assert_eq!(args.get(100), Ok(Value::Str("???")));
/// ```
pub fn with_default<'d, A>(args: A, default: impl Into<Value<'d>>) -> WithDefault<'d, A>
where
	A: Arguments,
{
	WithDefault {
		args,
		default: default.into(),
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::args::NoArguments;
	use assert2::check;

	#[test]
	fn default_fallback() {
		let args = with_default(crate::args!["v0", "v1"], "D");
		check!(args.get(0) == Ok(Value::Str("v0")));
		check!(args.get(1) == Ok(Value::Str("v1")));
		check!(args.get(2) == Ok(Value::Str("D")));
		check!(args.get(100) == Ok(Value::Str("D")));
	}

	#[test]
	fn default_replaces_nil() {
		let args = with_default(crate::args![1, None::<u8>, 3], -1);
		check!(args.get(0) == Ok(Value::Int(1)));
		check!(args.get(1) == Ok(Value::Int(-1)));
		check!(args.get(2) == Ok(Value::Int(3)));
		check!(args.default_value() == Value::Int(-1));
	}

	#[test]
	fn default_over_empty_source() {
		let args = with_default(NoArguments, "-");
		check!(args.get(0) == Ok(Value::Str("-")));
		check!(args.get(usize::MAX) == Ok(Value::Str("-")));
	}
}
