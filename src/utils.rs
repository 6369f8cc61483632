//! Miscellaneous utility functions for rendering resolved values.

use anyhow::Context as _;
use colored::Colorize;
use std::io::Write;
use std::io::{self, ErrorKind};

use crate::node::{JsonNode, Kind};
use crate::pointer::Pointer;

/// Write a resolved value (optional pointer header + colorized JSON) to
/// `writer`. Object members are written in the order the tree holds them, so
/// a zero-copy tree prints in document order with duplicate keys intact.
/// Silently returns `Ok(())` on broken pipe so that piping to tools
/// like `less` or `head` exits cleanly.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_colored_result<W: Write, V: JsonNode>(
    writer: &mut W,
    value: &V,
    pointer: Option<&Pointer>,
    pretty: bool,
) -> anyhow::Result<()> {
    let result = (|| -> io::Result<()> {
        if let Some(pointer) = pointer.filter(|p| !p.is_root()) {
            writeln!(writer, "{}:", pointer.to_string().bold().magenta())?;
        }
        write_colored_json(writer, value, 0, pretty)?;
        writeln!(writer)
    })();

    ignore_broken_pipe(result).context("write colorized JSON to stdout")
}

/// Write a single line of plain text, such as a kind name or a token list.
///
/// # Errors
///
/// Returns an error if writing to `writer` fails.
pub fn write_line<W: Write>(writer: &mut W, line: &str) -> anyhow::Result<()> {
    ignore_broken_pipe(writeln!(writer, "{line}")).context("write to stdout")
}

fn ignore_broken_pipe(result: io::Result<()>) -> io::Result<()> {
    match result {
        Err(err) if err.kind() == ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Colour a kind name the same way values of that kind are coloured.
#[must_use]
pub fn colored_kind(kind: Kind) -> String {
    let name = kind.name();
    match kind {
        Kind::Null => name.red().dimmed().to_string(),
        Kind::Boolean => name.yellow().bold().to_string(),
        Kind::Number => name.yellow().to_string(),
        Kind::String => name.green().to_string(),
        Kind::Array | Kind::Object => name.cyan().to_string(),
    }
}

/// Recursively write a JSON value with syntax highlighting.
fn write_colored_json<W: Write, V: JsonNode>(
    writer: &mut W,
    value: &V,
    indent: usize,
    pretty: bool,
) -> io::Result<()> {
    let next_indent = indent + 2;

    match value.kind() {
        Kind::Null => write!(writer, "{}", "null".red().dimmed()),
        Kind::Boolean => {
            let b = value.as_bool().unwrap_or_default();
            write!(writer, "{}", b.to_string().yellow().bold())
        }
        Kind::Number => match value.as_number() {
            Some(n) => write!(writer, "{}", n.to_string().yellow()),
            None => write!(writer, "{}", "null".red().dimmed()),
        },
        Kind::String => {
            let s = value.as_str().unwrap_or_default();
            write!(writer, "{}", quoted(s).green())
        }
        Kind::Array => {
            let arr = value.as_array().unwrap_or_default();
            write!(writer, "[")?;
            for (i, item) in arr.iter().enumerate() {
                if i > 0 {
                    write!(writer, ",")?;
                }
                if pretty {
                    writeln!(writer)?;
                    write!(writer, "{:width$}", "", width = next_indent)?;
                }
                write_colored_json(writer, item, next_indent, pretty)?;
            }
            if pretty && !arr.is_empty() {
                writeln!(writer)?;
                write!(writer, "{:width$}", "", width = indent)?;
            }
            write!(writer, "]")
        }
        Kind::Object => {
            let entries = value.entries();
            write!(writer, "{{")?;
            for (i, (key, val)) in entries.iter().enumerate() {
                if i > 0 {
                    write!(writer, ",")?;
                }
                if pretty {
                    writeln!(writer)?;
                    write!(writer, "{:width$}", "", width = next_indent)?;
                }
                write!(writer, "{}", quoted(key).cyan())?;
                write!(writer, "{}", if pretty { ": " } else { ":" })?;
                write_colored_json(writer, *val, next_indent, pretty)?;
            }
            if pretty && !entries.is_empty() {
                writeln!(writer)?;
                write!(writer, "{:width$}", "", width = indent)?;
            }
            write!(writer, "}}")
        }
    }
}

/// JSON-quote a string, escaping as `serde_json` does.
fn quoted(s: &str) -> String {
    // Serializing a `str` to a `String` writer cannot fail
    serde_json::to_string(s).unwrap_or_else(|_| format!("{s:?}"))
}
