//! Compact, human-readable log lines with embedded key-tagged values.
//!
//! A line template mixes free text with named placeholders in backticks.
//! Rendering replaces each placeholder with a `` `name:value` `` token:
//!
//! ```text
//! pattern:  `service`: Sent `signal` to main `process` (`name`) on client request.
//! rendered: `service:rsyslog`: Sent `signal:SIGHUP` to main `process:1611` (`name:rsyslogd`) on client request.
//! ```
//!
//! The rendered line is still easy to read for humans,
//! while the values can be extracted again by machines without a full JSON parser.
//!
//! # Features
//!
//! * Compile a pattern once with [`Template`] or [`TemplateBuf`] and render it many times.
//! * Render to any [`std::io::Write`], to a reusable `Vec<u8>` without further allocations,
//!   to a [`String`], or lazily through [`Display`][std::fmt::Display].
//! * Bind arguments by position, strictly or with a sentinel default value (see [`args`]).
//! * Extract the bare template and all values from a rendered line in a single pass (see [`extract()`]).
//! * Emit rendered lines as [`log`](https://docs.rs/log) records (optional, requires the `log` feature).
//! * Serialize templates and extracted values with [`serde`](https://docs.rs/serde) (optional, requires the `serde` feature).
//!
//! # Format
//!
//! Placeholders in a pattern have the form `` `name` ``.
//! Names can not be empty and can not contain backticks or colons.
//! The n-th placeholder of a pattern is bound to the argument at position n,
//! regardless of its name.
//!
//! There are no escape sequences.
//! A backtick in literal text always starts a placeholder,
//! and a backtick inside a rendered value breaks the shape of the line for extraction.
//!
//! # Examples
//!
//! The [`render_to_string()`] function compiles a pattern and renders it in one go.
//!
//! ```
//! # fn main() -> Result<(), tickline::Error> {
//! let line = tickline::render_to_string(
//!   "`service`: Sent `signal` to main `process` (`name`) on client request.",
//!   &tickline::args!["rsyslog", "SIGHUP", 1611, "rsyslogd"],
//! )?;
//! assert_eq!(line, "`service:rsyslog`: Sent `signal:SIGHUP` to main `process:1611` (`name:rsyslogd`) on client request.");
//! # Ok(())
//! # }
//! ```
//!
//! Templates that are rendered often should be compiled once.
//! Missing arguments can be filled with a default value.
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use tickline::args::with_default;
//!
//! let template = tickline::Template::from_str("`service`: Sent `signal` to main `process`")?;
//! let mut buffer = Vec::new();
//! for pid in [1611, 1612] {
//!   buffer.clear();
//!   template.render_append(&mut buffer, &with_default(tickline::args!["rsyslog", "SIGHUP", pid], "???"))?;
//! }
//! assert_eq!(buffer, b"`service:rsyslog`: Sent `signal:SIGHUP` to main `process:1612`");
//! # Ok(())
//! # }
//! ```
//!
//! Extraction gives back the bare template and the values, grouped by name.
//!
//! ```
//! # fn main() -> Result<(), tickline::Error> {
//! let (template, values) = tickline::extract_to_string("`process:1611` forked `process:1612`")?;
//! assert_eq!(template, "`process` forked `process`");
//! assert_eq!(values.get("process"), Some(["1611", "1612"].as_slice()));
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs, missing_debug_implementations)]
#![cfg_attr(feature = "doc-cfg", feature(doc_cfg))]

pub mod args;

pub mod error;
pub use error::Error;

mod extract;
pub use extract::*;

mod features;
#[allow(unused_imports)] // Will be unused if all features are disabled.
pub use features::*;

mod sink;

mod template;
pub use template::*;

/// The delimiter that surrounds placeholders and tokens.
pub const DELIMITER: u8 = b'`';

/// The separator between the name and the value of a token.
pub const SEPARATOR: u8 = b':';

const DELIMITER_STR: &str = "`";
const SEPARATOR_STR: &str = ":";

/// Compile a pattern and render it to an I/O stream.
///
/// This compiles the pattern on every call.
/// If you render the same pattern multiple times, consider using a [`Template`] instead.
pub fn render<W, A>(output: &mut W, pattern: &str, args: &A) -> Result<(), Error>
where
	W: std::io::Write + ?Sized,
	A: args::Arguments + ?Sized,
{
	Template::from_str(pattern)?.render(output, args)?;
	Ok(())
}

/// Compile a pattern and render it by appending to a byte buffer.
///
/// On success, the whole buffer is returned, including the data that was in it before.
/// On failure, the buffer is restored to its original length.
///
/// This compiles the pattern on every call.
/// If you render the same pattern multiple times, consider using a [`Template`] instead.
pub fn render_append<'b, A>(buffer: &'b mut Vec<u8>, pattern: &str, args: &A) -> Result<&'b [u8], Error>
where
	A: args::Arguments + ?Sized,
{
	Ok(Template::from_str(pattern)?.render_append(buffer, args)?)
}

/// Compile a pattern and render it to a new string.
///
/// This compiles the pattern on every call.
/// If you render the same pattern multiple times, consider using a [`Template`] instead.
pub fn render_to_string<A>(pattern: &str, args: &A) -> Result<String, Error>
where
	A: args::Arguments + ?Sized,
{
	Ok(Template::from_str(pattern)?.render_to_string(args)?)
}
