//! PHP literal values.
//!
//! [`Value`] is what default parameter values, property initialisers and
//! constant values are made of.  [`Value::dump`] turns it into PHP source.

use std::fmt::{self, Write};

use crate::error::{Error, Result};

/// An array key.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayKey {
    Int(i64),
    String(String),
}

/// A PHP value that can be written as a literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// An ordered PHP array.
    Array(Vec<(ArrayKey, Value)>),
    /// Raw PHP code, emitted as-is (e.g. `self::DEFAULT`, `PHP_EOL`).
    Literal(String),
}

impl Value {
    /// Build a list (`[a, b, c]`) with sequential integer keys.
    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Self::Array(
            items
                .into_iter()
                .enumerate()
                .map(|(i, v)| (ArrayKey::Int(i as i64), v))
                .collect(),
        )
    }

    /// Raw PHP code.
    pub fn literal(code: impl Into<String>) -> Self {
        Self::Literal(code.into())
    }

    /// Render as PHP source.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.write_to(&mut out);
        out
    }

    fn write_to(&self, out: &mut String) {
        match self {
            Self::Null => out.push_str("null"),
            Self::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
            Self::Int(i) => {
                let _ = write!(out, "{i}");
            }
            Self::Float(f) => out.push_str(&dump_float(*f)),
            Self::String(s) => out.push_str(&dump_string(s)),
            Self::Literal(code) => out.push_str(code),
            Self::Array(entries) => {
                let is_list = entries
                    .iter()
                    .enumerate()
                    .all(|(i, (key, _))| *key == ArrayKey::Int(i as i64));
                out.push('[');
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    if !is_list {
                        match key {
                            ArrayKey::Int(k) => {
                                let _ = write!(out, "{k}");
                            }
                            ArrayKey::String(k) => out.push_str(&dump_string(k)),
                        }
                        out.push_str(" => ");
                    }
                    value.write_to(out);
                }
                out.push(']');
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump())
    }
}

fn dump_float(f: f64) -> String {
    if f.is_nan() {
        "NAN".to_string()
    } else if f.is_infinite() {
        let inf = if f > 0.0 { "INF" } else { "-INF" };
        inf.to_string()
    } else {
        let s = format!("{f:?}");
        // `{:?}` keeps a `.0` on integral values but may use exponent form
        if s.contains(['.', 'e', 'E']) {
            s
        } else {
            format!("{s}.0")
        }
    }
}

/// Quote a string.  Single quotes unless the string holds control
/// characters, which only double-quoted strings can express.
fn dump_string(s: &str) -> String {
    if !s.chars().any(|c| c.is_control()) {
        let mut out = String::with_capacity(s.len() + 2);
        out.push('\'');
        for c in s.chars() {
            if c == '\\' || c == '\'' {
                out.push('\\');
            }
            out.push(c);
        }
        out.push('\'');
        return out;
    }

    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x0B' => out.push_str("\\v"),
            '\x0C' => out.push_str("\\f"),
            '\x1B' => out.push_str("\\e"),
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '$' => out.push_str("\\$"),
            c if c.is_control() => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).bytes() {
                    let _ = write!(out, "\\x{byte:02X}");
                }
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Self::Int(i),
                None => Self::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => Self::list(items.into_iter().map(Value::from)),
            serde_json::Value::Object(map) => Self::Array(
                map.into_iter()
                    .map(|(k, v)| (ArrayKey::String(k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

/// Substitute placeholders in a code snippet with dumped values.
///
///   - `?` takes the next argument.
///   - `...?` takes the next argument and spreads an array into a
///     comma-separated list of its values.
///   - `\?` is a literal `?`.
///
/// ```
/// use phpgen::Value;
/// use phpgen::value::format_args;
///
/// let code = format_args("return max(...?) + ?;", &[
///     Value::list([Value::Int(1), Value::Int(2)]),
///     Value::Int(3),
/// ]);
/// assert_eq!(code.unwrap(), "return max(1, 2) + 3;");
/// ```
///
/// # Errors
///
/// [`Error::MissingArgument`] when there are more placeholders than
/// arguments.
pub fn format_args(code: &str, args: &[Value]) -> Result<String> {
    let mut args = args.iter();
    let mut out = String::with_capacity(code.len());
    let mut rest = code;

    while let Some(pos) = rest.find('?') {
        let before = &rest[..pos];
        rest = &rest[pos + 1..];

        if let Some(before) = before.strip_suffix('\\') {
            out.push_str(before);
            out.push('?');
            continue;
        }

        let arg = args.next().ok_or_else(|| Error::MissingArgument {
            code: code.to_string(),
        })?;
        match (before.strip_suffix("..."), arg) {
            (Some(before), Value::Array(entries)) => {
                out.push_str(before);
                let items: Vec<String> = entries.iter().map(|(_, v)| v.dump()).collect();
                out.push_str(&items.join(", "));
            }
            _ => {
                out.push_str(before);
                arg.write_to(&mut out);
            }
        }
    }
    out.push_str(rest);
    Ok(out)
}
