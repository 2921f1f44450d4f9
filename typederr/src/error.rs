//! The sealed typed-error sum and its four variant shapes.
//!
//! A [`TypedError`] is one of four immutable variants, selected by its
//! code's [`Category`]. Wrapping variants own their inner error outright,
//! so a chain is always a strict list; a cycle cannot be built through
//! these constructors.

use std::fmt::{self, Display, Formatter};

use crate::taxonomy::{Category, Code};
use crate::value::{FormatValue, format_template};

/// The cause supplied to a wrapping constructor.
///
/// Either a raw message from a foreign error, or another typed error
/// whose identity must survive serialization.
#[derive(Debug, Clone, PartialEq)]
pub enum Cause {
    /// An opaque cause, reduced to its rendered message.
    Message(String),
    /// A typed cause, preserved in full.
    Typed(Box<TypedError>),
}

impl Cause {
    /// Renders the cause message. For a typed cause this is the inner
    /// error's full rendered message.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Message(m) => m.clone(),
            Self::Typed(e) => e.to_string(),
        }
    }
}

impl From<&str> for Cause {
    fn from(m: &str) -> Self {
        Self::Message(m.to_owned())
    }
}

impl From<String> for Cause {
    fn from(m: String) -> Self {
        Self::Message(m)
    }
}

impl From<TypedError> for Cause {
    fn from(e: TypedError) -> Self {
        Self::Typed(Box::new(e))
    }
}

impl From<ConstError> for Cause {
    fn from(e: ConstError) -> Self {
        Self::Typed(Box::new(TypedError::Const(e)))
    }
}

impl From<ValueError> for Cause {
    fn from(e: ValueError) -> Self {
        Self::Typed(Box::new(TypedError::Value(e)))
    }
}

impl From<WrapError> for Cause {
    fn from(e: WrapError) -> Self {
        Self::Typed(Box::new(TypedError::Wrap(e)))
    }
}

impl From<HttpError> for Cause {
    fn from(e: HttpError) -> Self {
        Self::Typed(Box::new(TypedError::Http(e)))
    }
}

impl From<serde_json::Error> for Cause {
    fn from(e: serde_json::Error) -> Self {
        Self::Message(e.to_string())
    }
}

/// A typed error: a stable code plus a rendered message, possibly
/// wrapping another typed error.
///
/// The variant is always consistent with `code().category()`; the codec
/// and the HTTP adapter both dispatch on the category alone.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypedError {
    /// A constant message.
    #[error("{0}")]
    Const(#[from] ConstError),
    /// A formatted message with captured arguments.
    #[error("{0}")]
    Value(#[from] ValueError),
    /// A prefixed wrapper around a cause.
    #[error("{0}")]
    Wrap(#[from] WrapError),
    /// A wrapper that also projects an HTTP status.
    #[error("{0}")]
    Http(#[from] HttpError),
}

impl TypedError {
    /// Returns the error's own code.
    #[must_use]
    pub fn code(&self) -> Code {
        match self {
            Self::Const(e) => e.code(),
            Self::Value(e) => e.code(),
            Self::Wrap(e) => e.code(),
            Self::Http(e) => e.code(),
        }
    }

    /// Returns the category of the error's own code.
    #[must_use]
    pub fn category(&self) -> Category {
        self.code().category()
    }

    /// Returns the inner typed error, if the cause supplied at
    /// construction was itself typed.
    #[must_use]
    pub fn inner(&self) -> Option<&Self> {
        match self {
            Self::Const(_) | Self::Value(_) => None,
            Self::Wrap(e) => e.inner(),
            Self::Http(e) => e.inner(),
        }
    }
}

/// A constant error: the code's reference string is the whole message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstError {
    code: Code,
}

impl ConstError {
    /// Creates a constant error for `code`.
    #[must_use]
    pub const fn new(code: Code) -> Self {
        Self { code }
    }

    /// Returns the error's code.
    #[must_use]
    pub const fn code(&self) -> Code {
        self.code
    }
}

impl Display for ConstError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.code.reference())
    }
}

impl std::error::Error for ConstError {}

/// A value error: the code's reference template formatted with the
/// captured arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueError {
    code: Code,
    values: Vec<FormatValue>,
}

impl ValueError {
    /// Creates a value error for `code` capturing `values` in order.
    #[must_use]
    pub fn new(code: Code, values: Vec<FormatValue>) -> Self {
        Self { code, values }
    }

    /// Returns the error's code.
    #[must_use]
    pub const fn code(&self) -> Code {
        self.code
    }

    /// Returns the captured format arguments.
    #[must_use]
    pub fn values(&self) -> &[FormatValue] {
        &self.values
    }
}

impl Display for ValueError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&format_template(self.code.reference(), &self.values))
    }
}

impl std::error::Error for ValueError {}

/// A wrap error: the code's reference prefixed onto the cause message.
///
/// The cause message is fixed at construction time, even when the cause
/// is typed. It is the single source of truth for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct WrapError {
    code: Code,
    message: String,
    inner: Option<Box<TypedError>>,
}

impl WrapError {
    /// Creates a wrap error for `code` from a definite cause.
    #[must_use]
    pub fn new(code: Code, cause: Cause) -> Self {
        let message = cause.render();
        let inner = match cause {
            Cause::Message(_) => None,
            Cause::Typed(e) => Some(e),
        };
        Self {
            code,
            message,
            inner,
        }
    }

    /// Creates a wrap error for `code`, or `None` when there is no cause.
    pub fn wrap<C: Into<Cause>>(code: Code, cause: Option<C>) -> Option<Self> {
        cause.map(|c| Self::new(code, c.into()))
    }

    /// Returns the error's code.
    #[must_use]
    pub const fn code(&self) -> Code {
        self.code
    }

    /// Returns the cause message captured at construction.
    #[must_use]
    pub fn cause_message(&self) -> &str {
        &self.message
    }

    /// Returns the inner typed error, if the cause was typed.
    #[must_use]
    pub fn inner(&self) -> Option<&TypedError> {
        self.inner.as_deref()
    }
}

impl Display for WrapError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.reference(), self.message)
    }
}

impl std::error::Error for WrapError {}

/// An HTTP error: a wrap-shaped error whose code also fixes the HTTP
/// status of the response it projects onto.
///
/// When the inner error is typed and belongs to a non-HTTP category, the
/// inner message is rendered verbatim; the HTTP reference prefix only
/// appears when no finer-grained typed cause exists.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpError {
    code: Code,
    message: String,
    inner: Option<Box<TypedError>>,
}

impl HttpError {
    /// Creates an HTTP error for `code` from a definite cause.
    #[must_use]
    pub fn new(code: Code, cause: Cause) -> Self {
        let message = cause.render();
        let inner = match cause {
            Cause::Message(_) => None,
            Cause::Typed(e) => Some(e),
        };
        Self {
            code,
            message,
            inner,
        }
    }

    /// Creates an HTTP error for `code`, or `None` when there is no cause.
    pub fn wrap<C: Into<Cause>>(code: Code, cause: Option<C>) -> Option<Self> {
        cause.map(|c| Self::new(code, c.into()))
    }

    /// Returns the error's code.
    #[must_use]
    pub const fn code(&self) -> Code {
        self.code
    }

    /// Returns the cause message captured at construction.
    #[must_use]
    pub fn cause_message(&self) -> &str {
        &self.message
    }

    /// Returns the inner typed error, if the cause was typed.
    #[must_use]
    pub fn inner(&self) -> Option<&TypedError> {
        self.inner.as_deref()
    }

    /// Returns the HTTP status fixed by this error's code.
    ///
    /// Unregistered HTTP codes, reachable only by decoding foreign bytes,
    /// project status 500.
    #[must_use]
    pub fn status(&self) -> u16 {
        self.code.http_status().unwrap_or(500)
    }
}

impl Display for HttpError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let typed_non_http = self
            .inner
            .as_deref()
            .is_some_and(|inner| inner.category() != Category::Http);
        if typed_non_http {
            f.write_str(&self.message)
        } else {
            write!(f, "{}: {}", self.code.reference(), self.message)
        }
    }
}

impl std::error::Error for HttpError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, codes};

    #[test]
    fn test_wrap_renders_prefix_and_cause() {
        let cases = [
            (
                catalog::failed_to_get_storage_host(Some("1")),
                codes::FAILED_TO_GET_STORAGE_HOST,
                "Failed to get the storage host: 1",
            ),
            (
                catalog::failed_to_get_bucket_name(Some("2")),
                codes::FAILED_TO_GET_BUCKET_NAME,
                "Failed to get the bucket name: 2",
            ),
        ];
        for (err, code, rendered) in cases {
            let err = err.unwrap();
            assert_eq!(err.code(), code);
            assert_eq!(err.to_string(), rendered);
        }
    }

    #[test]
    fn test_wrap_without_cause_is_absent() {
        assert!(catalog::failed_to_get_storage_host(None::<Cause>).is_none());
        assert!(catalog::failed_to_get_bucket_name(None::<Cause>).is_none());
        assert!(catalog::json_inner_err_marshal(None::<Cause>).is_none());
        assert!(catalog::json_marshal(None::<Cause>).is_none());
        assert!(catalog::json_unmarshal(None::<Cause>).is_none());
    }

    #[test]
    fn test_wrap_typed_cause_keeps_prefix() {
        let err = catalog::failed_to_get_bucket_name(Some(catalog::AUTHORIZATION_NOT_FOUND))
            .unwrap();
        assert_eq!(
            err.to_string(),
            "Failed to get the bucket name: authorization not found"
        );
        assert_eq!(err.code(), codes::FAILED_TO_GET_BUCKET_NAME);
        assert_eq!(
            err.inner().map(TypedError::code),
            Some(codes::AUTHORIZATION_NOT_FOUND)
        );
    }

    #[test]
    fn test_const_renders_reference() {
        let cases = [
            (catalog::AUTHORIZATION_NOT_FOUND, "authorization not found"),
            (
                catalog::AUTHORIZATION_NOT_FOUND_CONTEXT,
                "authorization not found on context",
            ),
            (catalog::USER_NOT_FOUND, "user not found"),
            (catalog::EMPTY_VALUE, "empty value"),
        ];
        for (err, rendered) in cases {
            assert_eq!(err.to_string(), rendered);
            assert_eq!(err.code().reference(), rendered);
        }
    }

    #[test]
    fn test_value_renders_template() {
        let org = catalog::organization_name_already_exist("1");
        assert_eq!(org.code(), codes::ORGANIZATION_NAME_ALREADY_EXIST);
        assert_eq!(org.to_string(), "organization with name 1 already exists");

        let user = catalog::user_name_already_exist("2");
        assert_eq!(user.code(), codes::USER_NAME_ALREADY_EXIST);
        assert_eq!(user.to_string(), "user with name 2 already exists");
    }

    #[test]
    fn test_http_raw_cause_keeps_prefix() {
        let cases = [
            (catalog::internal_error(Some("1")), "Internal Error: 1", 500),
            (catalog::malformed_data(Some("2")), "Malformed Data: 2", 400),
            (catalog::invalid_data(Some("3")), "Invalid Data: 3", 422),
            (catalog::forbidden(Some("4")), "Forbidden: 4", 403),
            (catalog::not_found(Some("5")), "Not Found: 5", 404),
        ];
        for (err, rendered, status) in cases {
            let TypedError::Http(err) = err.unwrap() else {
                panic!("expected http variant");
            };
            assert_eq!(err.to_string(), rendered);
            assert_eq!(err.status(), status);
        }
    }

    #[test]
    fn test_http_non_http_typed_inner_wins() {
        let err = catalog::forbidden(Some(catalog::ORGANIZATION_NOT_FOUND)).unwrap();
        assert_eq!(err.to_string(), "organization not found");
        assert_eq!(err.code(), codes::FORBIDDEN);
        assert_eq!(
            err.inner().map(TypedError::code),
            Some(codes::ORGANIZATION_NOT_FOUND)
        );

        let TypedError::Http(http) = err else {
            panic!("expected http variant");
        };
        assert_eq!(http.status(), 403);
    }

    #[test]
    fn test_http_typed_http_inner_keeps_prefix() {
        let inner = catalog::internal_error(Some("1")).unwrap();
        let err = catalog::forbidden(Some(inner)).unwrap();
        assert_eq!(err.to_string(), "Forbidden: Internal Error: 1");
    }

    #[test]
    fn test_http_without_cause_is_absent() {
        assert!(catalog::internal_error(None::<Cause>).is_none());
        assert!(catalog::malformed_data(None::<Cause>).is_none());
        assert!(catalog::invalid_data(None::<Cause>).is_none());
        assert!(catalog::forbidden(None::<Cause>).is_none());
        assert!(catalog::not_found(None::<Cause>).is_none());
    }

    #[test]
    fn test_wrap_constructors_fix_their_code() {
        let wraps = [
            (catalog::failed_to_get_storage_host(Some("x")), 1),
            (catalog::failed_to_get_bucket_name(Some("x")), 2),
            (catalog::json_inner_err_marshal(Some("x")), 3),
            (catalog::json_marshal(Some("x")), 4),
            (catalog::json_unmarshal(Some("x")), 5),
            (catalog::internal_error(Some("x")), 60_000),
            (catalog::malformed_data(Some("x")), 60_001),
            (catalog::invalid_data(Some("x")), 60_002),
            (catalog::forbidden(Some("x")), 60_003),
            (catalog::not_found(Some("x")), 60_004),
        ];
        for (err, raw) in wraps {
            assert_eq!(err.unwrap().code().get(), raw);
        }
        assert_eq!(
            catalog::organization_name_already_exist("x").code().get(),
            40_000
        );
        assert_eq!(catalog::user_name_already_exist("x").code().get(), 40_001);
    }
}
