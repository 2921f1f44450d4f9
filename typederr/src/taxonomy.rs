//! Numeric code taxonomy for typed errors.
//!
//! Every typed error carries a stable integer [`Code`]. Codes are
//! partitioned into four [`Category`] ranges, each `CATEGORY_BASE` wide,
//! and each code maps to a fixed human reference string. Codes are part
//! of the wire protocol: allocations are append-only, and changing a
//! code or its reference is a breaking change.

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

/// Width of a category's code range. Dividing a raw code by this constant
/// yields its category index.
pub const CATEGORY_BASE: u32 = 20_000;

/// The four shapes a typed error can take, recovered from its code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// `[1, 20000)` — wraps an underlying cause with a fixed prefix.
    Wrap,
    /// `[20000, 40000)` — a constant message with no payload.
    Const,
    /// `[40000, 60000)` — a format template plus positional arguments.
    Value,
    /// `[60000, 80000)` — a wrapper that also fixes an HTTP status.
    Http,
}

impl Category {
    /// Returns the first code of this category's range.
    #[must_use]
    pub const fn base(self) -> u32 {
        match self {
            Self::Wrap => 1,
            Self::Const => CATEGORY_BASE,
            Self::Value => 2 * CATEGORY_BASE,
            Self::Http => 3 * CATEGORY_BASE,
        }
    }
}

/// A stable numeric error code.
///
/// Serializes as a bare integer. The code alone determines the category
/// and the reference string; unknown codes are tolerated (they resolve to
/// an empty reference) since they indicate a programmer bug rather than a
/// runtime failure.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Code(u32);

impl Code {
    /// Creates a code from its raw integer value.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw integer value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the category this code belongs to.
    ///
    /// Codes outside the four documented ranges fall back to
    /// [`Category::Wrap`].
    #[must_use]
    pub const fn category(self) -> Category {
        match self.0 / CATEGORY_BASE {
            1 => Category::Const,
            2 => Category::Value,
            3 => Category::Http,
            _ => Category::Wrap,
        }
    }

    /// Returns the reference string registered for this code.
    ///
    /// Unknown codes yield an empty string.
    #[must_use]
    pub fn reference(self) -> &'static str {
        let category = self.category();
        let table: &[&'static str] = match category {
            Category::Wrap => &WRAP_REFERENCES,
            Category::Const => &CONST_REFERENCES,
            Category::Value => &VALUE_REFERENCES,
            Category::Http => &HTTP_REFERENCES,
        };
        // Code 0 sits below the Wrap base and is unregistered.
        let Some(index) = self.0.checked_sub(category.base()) else {
            return "";
        };
        table.get(index as usize).copied().unwrap_or("")
    }

    /// Returns the HTTP status fixed for this code, or `None` when the
    /// code is not in the HTTP category or is unregistered.
    #[must_use]
    pub fn http_status(self) -> Option<u16> {
        if self.category() != Category::Http {
            return None;
        }
        let index = (self.0 - Category::Http.base()) as usize;
        HTTP_STATUS.get(index).copied()
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Code {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<Code> for u32 {
    fn from(code: Code) -> Self {
        code.0
    }
}

// Reference tables, dense-packed from each category base. Append-only.

const WRAP_REFERENCES: [&str; 5] = [
    "Failed to get the storage host",
    "Failed to get the bucket name",
    "JSON innerErr Mashal",
    "error happened in JSON marshal",
    "error happened in JSON unmarshal",
];

const CONST_REFERENCES: [&str; 7] = [
    "authorization not found",
    "authorization not found on context",
    "organization not found",
    "user not found",
    "token not found on context",
    "url missing id",
    "empty value",
];

const VALUE_REFERENCES: [&str; 2] = [
    "organization with name %s already exists",
    "user with name %s already exists",
];

const HTTP_REFERENCES: [&str; 5] = [
    "Internal Error",
    "Malformed Data",
    "Invalid Data",
    "Forbidden",
    "Not Found",
];

const HTTP_STATUS: [u16; 5] = [500, 400, 422, 403, 404];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::codes;

    #[test]
    fn test_category_of_each_range() {
        assert_eq!(Code::new(1).category(), Category::Wrap);
        assert_eq!(Code::new(19_999).category(), Category::Wrap);
        assert_eq!(Code::new(20_000).category(), Category::Const);
        assert_eq!(Code::new(40_000).category(), Category::Value);
        assert_eq!(Code::new(60_000).category(), Category::Http);
        assert_eq!(Code::new(79_999).category(), Category::Http);
    }

    #[test]
    fn test_category_fallback_above_http_range() {
        assert_eq!(Code::new(80_000).category(), Category::Wrap);
        assert_eq!(Code::new(123_456).category(), Category::Wrap);
    }

    #[test]
    fn test_reference_full_enumeration() {
        let expected: &[(Code, &str)] = &[
            (codes::FAILED_TO_GET_STORAGE_HOST, "Failed to get the storage host"),
            (codes::FAILED_TO_GET_BUCKET_NAME, "Failed to get the bucket name"),
            (codes::JSON_INNER_ERR_MARSHAL, "JSON innerErr Mashal"),
            (codes::JSON_MARSHAL, "error happened in JSON marshal"),
            (codes::JSON_UNMARSHAL, "error happened in JSON unmarshal"),
            (codes::AUTHORIZATION_NOT_FOUND, "authorization not found"),
            (
                codes::AUTHORIZATION_NOT_FOUND_CONTEXT,
                "authorization not found on context",
            ),
            (codes::ORGANIZATION_NOT_FOUND, "organization not found"),
            (codes::USER_NOT_FOUND, "user not found"),
            (codes::TOKEN_NOT_FOUND_CONTEXT, "token not found on context"),
            (codes::URL_MISSING_ID, "url missing id"),
            (codes::EMPTY_VALUE, "empty value"),
            (
                codes::ORGANIZATION_NAME_ALREADY_EXIST,
                "organization with name %s already exists",
            ),
            (
                codes::USER_NAME_ALREADY_EXIST,
                "user with name %s already exists",
            ),
            (codes::INTERNAL_ERROR, "Internal Error"),
            (codes::MALFORMED_DATA, "Malformed Data"),
            (codes::INVALID_DATA, "Invalid Data"),
            (codes::FORBIDDEN, "Forbidden"),
            (codes::NOT_FOUND, "Not Found"),
        ];
        for (code, reference) in expected {
            assert_eq!(code.reference(), *reference, "code {code}");
        }
    }

    #[test]
    fn test_reference_unknown_code_is_empty() {
        assert_eq!(Code::new(0).reference(), "");
        assert_eq!(Code::new(19_000).reference(), "");
        assert_eq!(Code::new(25_000).reference(), "");
        assert_eq!(Code::new(65_000).reference(), "");
        assert_eq!(Code::new(90_000).reference(), "");
    }

    #[test]
    fn test_http_status_table() {
        assert_eq!(codes::INTERNAL_ERROR.http_status(), Some(500));
        assert_eq!(codes::MALFORMED_DATA.http_status(), Some(400));
        assert_eq!(codes::INVALID_DATA.http_status(), Some(422));
        assert_eq!(codes::FORBIDDEN.http_status(), Some(403));
        assert_eq!(codes::NOT_FOUND.http_status(), Some(404));
    }

    #[test]
    fn test_http_status_outside_http_category() {
        assert_eq!(codes::USER_NOT_FOUND.http_status(), None);
        assert_eq!(Code::new(65_000).http_status(), None);
    }

    #[test]
    fn test_code_serializes_as_bare_integer() {
        let json = serde_json::to_string(&codes::FORBIDDEN).unwrap();
        assert_eq!(json, "60003");
        let back: Code = serde_json::from_str("60003").unwrap();
        assert_eq!(back, codes::FORBIDDEN);
    }
}
