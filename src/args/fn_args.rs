use core::marker::PhantomData;

use super::{Arguments, Value};
use crate::error::IndexOutOfRange;

/// [`Arguments`] produced by [`from_fn()`].
#[derive(Debug, Clone, Copy)]
pub struct FnArgs<'v, F> {
	func: F,
	len: usize,
	_value: PhantomData<fn() -> Value<'v>>,
}

impl<'v, F> Arguments for FnArgs<'v, F>
where
	F: Fn(usize) -> Option<Value<'v>>,
{
	#[inline(always)]
	fn get(&self, position: usize) -> Result<Value<'_>, IndexOutOfRange> {
		(self.func)(position).ok_or(IndexOutOfRange {
			position,
			len: self.len,
		})
	}
}

/// Creates [`Arguments`] that delegate to the given function.
///
/// The function returns `None` for positions it has no value for.
/// The `len` is only used to report [`IndexOutOfRange`] errors.
///
/// # Example
/// ```rust
/// # use tickline::args::{from_fn, Arguments, Value};
/// let squares = from_fn(3, |position| (position < 3).then(|| Value::from(position * position)));
///
/// assert_eq!(squares.get(2), Ok(Value::Uint(4)));
/// assert!(squares.get(3).is_err());
/// ```
pub const fn from_fn<'v, F>(len: usize, func: F) -> FnArgs<'v, F>
where
	F: Fn(usize) -> Option<Value<'v>>,
{
	FnArgs {
		func,
		len,
		_value: PhantomData,
	}
}
