//! Emit rendered lines as [`log`](https://docs.rs/log) records.
//!
//! The line is rendered lazily by the logger, and only if the record is enabled for the target and level.
//! Missing arguments are rendered as [`MISSING`] instead of failing,
//! so a bad call site never swallows a log line.
//! Arguments that are [`Value::Nil`][crate::args::Value::Nil] are rendered as [`MISSING`] too,
//! where [`Template::render()`] would write an empty value.

use crate::args::{with_default, Arguments};
use crate::Template;

/// The value rendered for placeholders without an argument or with a [`Nil`][crate::args::Value::Nil] argument.
pub const MISSING: &str = "???";

/// Render a template as a log record with the given target and level.
///
/// You will usually want to use the [`log_line!`][crate::log_line] macro instead,
/// which uses the current module path as the default target.
///
/// # Example
/// ```rust
/// # fn main() -> Result<(), tickline::error::MalformedTemplate> {
/// let template = tickline::Template::from_str("Sent `signal` to `process`")?;
/// tickline::log::log_to("daemon", log::Level::Info, &template, &tickline::args!["SIGHUP", 1611]);
/// # Ok(())
/// # }
/// ```
pub fn log_to<A>(target: &str, level: ::log::Level, template: &Template<'_>, args: &A)
where
	A: Arguments + ?Sized,
{
	if ::log::log_enabled!(target: target, level) {
		::log::log!(target: target, level, "{}", template.display(&with_default(args, MISSING)));
	}
}

/// Render a template as a log record.
///
/// The target defaults to the module path of the call site.
///
/// # Example
/// ```rust
/// # fn main() -> Result<(), tickline::error::MalformedTemplate> {
/// use tickline::{args, log_line, TemplateBuf};
///
/// let template = TemplateBuf::from_string("`service`: Sent `signal` to `process`".into())?;
/// log_line!(log::Level::Info, &template, &args!["rsyslog", "SIGHUP", 1611]);
/// log_line!(target: "daemon", log::Level::Warn, &template, &args!["rsyslog"]);
/// # Ok(())
/// # }
/// ```
#[macro_export]
macro_rules! log_line {
	(target: $target:expr, $level:expr, $template:expr, $args:expr $(,)?) => {
		$crate::log::log_to($target, $level, $template, $args)
	};
	($level:expr, $template:expr, $args:expr $(,)?) => {
		$crate::log::log_to(::core::module_path!(), $level, $template, $args)
	};
}
