//! Argument sources and values for rendering templates.
//!
//! Placeholders are bound to arguments by position:
//! the first placeholder of a template gets the argument at position 0, the second gets position 1, and so on.
//! The names of the placeholders play no role in the binding.

use crate::error::IndexOutOfRange;

mod default;
pub use default::*;

mod fn_args;
pub use fn_args::*;

mod value;
pub use value::*;

/// Trait for types that can supply positional arguments to a template.
///
/// Slices, arrays and vectors of [`Value`] implement this trait strictly:
/// asking for a position past the end is an error.
/// Wrap a source with [`with_default()`] to substitute a sentinel value instead.
pub trait Arguments {
	/// Get the value for the given position.
	fn get(&self, position: usize) -> Result<Value<'_>, IndexOutOfRange>;
}

/// Allow using [`slice`]s of values as strict [`Arguments`].
///
/// # Example
/// ```rust
/// # use tickline::args::{Arguments, Value};
/// let args: &[Value] = &["rsyslog".into(), 1611.into()];
///
/// // Slices have an inherent `get()`, so name the trait explicitly.
/// assert_eq!(Arguments::get(args, 0), Ok(Value::Str("rsyslog")));
/// assert_eq!(Arguments::get(args, 1), Ok(Value::Int(1611)));
/// assert!(Arguments::get(args, 2).is_err());
/// ```
impl<'a> Arguments for [Value<'a>] {
	#[inline]
	fn get(&self, position: usize) -> Result<Value<'_>, IndexOutOfRange> {
		match <[Value<'a>]>::get(self, position) {
			Some(value) => Ok(*value),
			None => Err(IndexOutOfRange {
				position,
				len: self.len(),
			}),
		}
	}
}

/// Allow using [`array`]s of values as strict [`Arguments`].
///
/// Delegate to the implementation for [`slice`]s.
impl<'a, const N: usize> Arguments for [Value<'a>; N] {
	#[inline(always)]
	fn get(&self, position: usize) -> Result<Value<'_>, IndexOutOfRange> {
		Arguments::get(self.as_slice(), position)
	}
}

/// Allow using a [`Vec`] of values as strict [`Arguments`].
///
/// Delegate to the implementation for [`slice`]s.
impl<'a> Arguments for Vec<Value<'a>> {
	#[inline(always)]
	fn get(&self, position: usize) -> Result<Value<'_>, IndexOutOfRange> {
		Arguments::get(self.as_slice(), position)
	}
}

impl<T> Arguments for &'_ T
where
	T: ?Sized + Arguments,
{
	#[inline(always)]
	fn get(&self, position: usize) -> Result<Value<'_>, IndexOutOfRange> {
		T::get(self, position)
	}
}

impl<T> Arguments for &'_ mut T
where
	T: ?Sized + Arguments,
{
	#[inline(always)]
	fn get(&self, position: usize) -> Result<Value<'_>, IndexOutOfRange> {
		T::get(self, position)
	}
}

impl<T> Arguments for std::boxed::Box<T>
where
	T: ?Sized + Arguments,
{
	#[inline(always)]
	fn get(&self, position: usize) -> Result<Value<'_>, IndexOutOfRange> {
		T::get(self, position)
	}
}

impl<T> Arguments for std::rc::Rc<T>
where
	T: ?Sized + Arguments,
{
	#[inline(always)]
	fn get(&self, position: usize) -> Result<Value<'_>, IndexOutOfRange> {
		T::get(self, position)
	}
}

impl<T> Arguments for std::sync::Arc<T>
where
	T: ?Sized + Arguments,
{
	#[inline(always)]
	fn get(&self, position: usize) -> Result<Value<'_>, IndexOutOfRange> {
		T::get(self, position)
	}
}

/// A source that has no arguments at all.
///
/// Useful for templates without placeholders,
/// or together with [`with_default()`] to fill every placeholder with the same value.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoArguments;

impl Arguments for NoArguments {
	#[inline]
	fn get(&self, position: usize) -> Result<Value<'_>, IndexOutOfRange> {
		Err(IndexOutOfRange { position, len: 0 })
	}
}

/// Build an array of [`Value`]s from a list of expressions.
///
/// Each expression is converted with [`Value::from`].
/// The resulting array is a strict [`Arguments`] source.
///
/// # Example
/// ```rust
/// # use tickline::args::Value;
/// let args = tickline::args!["rsyslog", "SIGHUP", 1611, "rsyslogd"];
/// assert_eq!(args[2], Value::Int(1611));
/// ```
#[macro_export]
macro_rules! args {
	($($value:expr),+ $(,)?) => {
		[$($crate::args::Value::from($value)),+]
	};
}

#[cfg(test)]
mod test {
	use super::*;
	use assert2::{assert, check, let_assert};

	#[test]
	fn strict_slice_source() {
		let args = crate::args!["rsyslog", "SIGHUP", 1611, "rsyslogd"];
		check!(args.get(0) == Ok(Value::Str("rsyslog")));
		check!(args.get(2) == Ok(Value::Int(1611)));
		check!(args.get(3) == Ok(Value::Str("rsyslogd")));

		let_assert!(Err(e) = args.get(4));
		assert!(e.position == 4);
		assert!(e.len == 4);
	}

	#[test]
	fn strict_source_passes_nil_through() {
		let args = crate::args![Option::<&str>::None, "x"];
		check!(args.get(0) == Ok(Value::Nil));
		check!(args.get(1) == Ok(Value::Str("x")));
	}

	#[test]
	fn smart_pointers_delegate() {
		let args = vec![Value::from(1), Value::from(2)];
		let boxed: Box<dyn Arguments> = Box::new(args.clone());
		let shared = std::sync::Arc::new(args.clone());
		check!(boxed.get(1) == Ok(Value::Int(2)));
		check!(shared.get(0) == Ok(Value::Int(1)));
		check!((&args).get(5).is_err());
	}

	#[test]
	fn no_arguments() {
		let_assert!(Err(e) = NoArguments.get(0));
		assert!(e == IndexOutOfRange { position: 0, len: 0 });
	}
}
