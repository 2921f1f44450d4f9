//! JSON-representable format arguments and template rendering.
//!
//! Value-category errors carry an ordered argument list applied to a
//! reference template with positional `%s` placeholders. Arguments are
//! constrained to a scalar union so that the codec can round-trip them
//! losslessly.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// One format argument of a value-category error.
///
/// Deserialization is untagged: JSON booleans, integers, floats, and
/// strings map onto their corresponding variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormatValue {
    /// A boolean argument.
    Bool(bool),
    /// An integer argument.
    Int(i64),
    /// A floating-point argument.
    Float(f64),
    /// A string argument.
    Text(String),
}

impl Display for FormatValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => f.write_str(v),
        }
    }
}

impl From<&str> for FormatValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for FormatValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<bool> for FormatValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for FormatValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<i32> for FormatValue {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<u32> for FormatValue {
    fn from(v: u32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<f64> for FormatValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

/// Substitutes `%s` placeholders in `template` with `values` in order.
///
/// Arity mismatches follow the classic printf conventions: a placeholder
/// with no remaining argument renders as `%!s(MISSING)`, and surplus
/// arguments are appended as `%!(EXTRA v1, v2)`.
#[must_use]
pub fn format_template(template: &str, values: &[FormatValue]) -> String {
    let mut out = String::with_capacity(template.len() + 16 * values.len());
    let mut next = values.iter();
    let mut rest = template;
    while let Some(pos) = rest.find("%s") {
        out.push_str(&rest[..pos]);
        match next.next() {
            Some(value) => out.push_str(&value.to_string()),
            None => out.push_str("%!s(MISSING)"),
        }
        rest = &rest[pos + 2..];
    }
    out.push_str(rest);

    let extra: Vec<String> = next.map(ToString::to_string).collect();
    if !extra.is_empty() {
        out.push_str("%!(EXTRA ");
        out.push_str(&extra.join(", "));
        out.push(')');
    }
    out
}
