//! The registered error catalog: stable codes, constant error values,
//! and one named constructor per wrapping code.
//!
//! Allocations are append-only. A code, once published, keeps its value
//! and reference string forever.

use crate::error::{Cause, ConstError, HttpError, TypedError, WrapError};
use crate::value::FormatValue;

/// Stable code constants, one per registered error.
pub mod codes {
    use crate::taxonomy::{CATEGORY_BASE, Code};

    /// Failed to get the storage host.
    pub const FAILED_TO_GET_STORAGE_HOST: Code = Code::new(1);
    /// Failed to get the bucket name.
    pub const FAILED_TO_GET_BUCKET_NAME: Code = Code::new(2);
    /// Marshaling an inner error failed.
    pub const JSON_INNER_ERR_MARSHAL: Code = Code::new(3);
    /// JSON marshaling failed.
    pub const JSON_MARSHAL: Code = Code::new(4);
    /// JSON unmarshaling failed.
    pub const JSON_UNMARSHAL: Code = Code::new(5);

    /// Authorization is not found.
    pub const AUTHORIZATION_NOT_FOUND: Code = Code::new(CATEGORY_BASE);
    /// Authorization is not found on the request context.
    pub const AUTHORIZATION_NOT_FOUND_CONTEXT: Code = Code::new(CATEGORY_BASE + 1);
    /// Organization is not found.
    pub const ORGANIZATION_NOT_FOUND: Code = Code::new(CATEGORY_BASE + 2);
    /// User is not found.
    pub const USER_NOT_FOUND: Code = Code::new(CATEGORY_BASE + 3);
    /// Token is not found on the request context.
    pub const TOKEN_NOT_FOUND_CONTEXT: Code = Code::new(CATEGORY_BASE + 4);
    /// The request URL is missing its id parameter.
    pub const URL_MISSING_ID: Code = Code::new(CATEGORY_BASE + 5);
    /// A required value is empty.
    pub const EMPTY_VALUE: Code = Code::new(CATEGORY_BASE + 6);

    /// An organization with the given name already exists.
    pub const ORGANIZATION_NAME_ALREADY_EXIST: Code = Code::new(2 * CATEGORY_BASE);
    /// A user with the given name already exists.
    pub const USER_NAME_ALREADY_EXIST: Code = Code::new(2 * CATEGORY_BASE + 1);

    /// An unexpected error condition — status 500.
    pub const INTERNAL_ERROR: Code = Code::new(3 * CATEGORY_BASE);
    /// Malformed input, such as unparsable JSON — status 400.
    pub const MALFORMED_DATA: Code = Code::new(3 * CATEGORY_BASE + 1);
    /// Well-formed but invalid data — status 422.
    pub const INVALID_DATA: Code = Code::new(3 * CATEGORY_BASE + 2);
    /// A forbidden operation — status 403.
    pub const FORBIDDEN: Code = Code::new(3 * CATEGORY_BASE + 3);
    /// A missing resource — status 404.
    pub const NOT_FOUND: Code = Code::new(3 * CATEGORY_BASE + 4);
}

// Constant error values, usable directly wherever a typed error is
// expected.

/// Authorization is not found.
pub const AUTHORIZATION_NOT_FOUND: ConstError = ConstError::new(codes::AUTHORIZATION_NOT_FOUND);
/// Authorization is not found on the request context.
pub const AUTHORIZATION_NOT_FOUND_CONTEXT: ConstError =
    ConstError::new(codes::AUTHORIZATION_NOT_FOUND_CONTEXT);
/// Organization is not found.
pub const ORGANIZATION_NOT_FOUND: ConstError = ConstError::new(codes::ORGANIZATION_NOT_FOUND);
/// User is not found.
pub const USER_NOT_FOUND: ConstError = ConstError::new(codes::USER_NOT_FOUND);
/// Token is not found on the request context.
pub const TOKEN_NOT_FOUND_CONTEXT: ConstError = ConstError::new(codes::TOKEN_NOT_FOUND_CONTEXT);
/// The request URL is missing its id parameter.
pub const URL_MISSING_ID: ConstError = ConstError::new(codes::URL_MISSING_ID);
/// A required value is empty.
pub const EMPTY_VALUE: ConstError = ConstError::new(codes::EMPTY_VALUE);

// Wrap constructors. A `None` cause yields `None`; callers rely on this
// to pass failures through unconditionally.

/// Wraps a cause as [`codes::FAILED_TO_GET_STORAGE_HOST`].
pub fn failed_to_get_storage_host<C: Into<Cause>>(cause: Option<C>) -> Option<TypedError> {
    WrapError::wrap(codes::FAILED_TO_GET_STORAGE_HOST, cause).map(TypedError::Wrap)
}

/// Wraps a cause as [`codes::FAILED_TO_GET_BUCKET_NAME`].
pub fn failed_to_get_bucket_name<C: Into<Cause>>(cause: Option<C>) -> Option<TypedError> {
    WrapError::wrap(codes::FAILED_TO_GET_BUCKET_NAME, cause).map(TypedError::Wrap)
}

/// Wraps a cause as [`codes::JSON_INNER_ERR_MARSHAL`].
pub fn json_inner_err_marshal<C: Into<Cause>>(cause: Option<C>) -> Option<TypedError> {
    WrapError::wrap(codes::JSON_INNER_ERR_MARSHAL, cause).map(TypedError::Wrap)
}

/// Wraps a cause as [`codes::JSON_MARSHAL`].
pub fn json_marshal<C: Into<Cause>>(cause: Option<C>) -> Option<TypedError> {
    WrapError::wrap(codes::JSON_MARSHAL, cause).map(TypedError::Wrap)
}

/// Wraps a cause as [`codes::JSON_UNMARSHAL`].
pub fn json_unmarshal<C: Into<Cause>>(cause: Option<C>) -> Option<TypedError> {
    WrapError::wrap(codes::JSON_UNMARSHAL, cause).map(TypedError::Wrap)
}

// Value constructors.

/// Builds an [`codes::ORGANIZATION_NAME_ALREADY_EXIST`] error for `name`.
pub fn organization_name_already_exist(name: impl Into<FormatValue>) -> TypedError {
    TypedError::Value(crate::error::ValueError::new(
        codes::ORGANIZATION_NAME_ALREADY_EXIST,
        vec![name.into()],
    ))
}

/// Builds a [`codes::USER_NAME_ALREADY_EXIST`] error for `name`.
pub fn user_name_already_exist(name: impl Into<FormatValue>) -> TypedError {
    TypedError::Value(crate::error::ValueError::new(
        codes::USER_NAME_ALREADY_EXIST,
        vec![name.into()],
    ))
}

// HTTP constructors.

/// Wraps a cause as [`codes::INTERNAL_ERROR`] (status 500).
pub fn internal_error<C: Into<Cause>>(cause: Option<C>) -> Option<TypedError> {
    HttpError::wrap(codes::INTERNAL_ERROR, cause).map(TypedError::Http)
}

/// Wraps a cause as [`codes::MALFORMED_DATA`] (status 400).
pub fn malformed_data<C: Into<Cause>>(cause: Option<C>) -> Option<TypedError> {
    HttpError::wrap(codes::MALFORMED_DATA, cause).map(TypedError::Http)
}

/// Wraps a cause as [`codes::INVALID_DATA`] (status 422).
pub fn invalid_data<C: Into<Cause>>(cause: Option<C>) -> Option<TypedError> {
    HttpError::wrap(codes::INVALID_DATA, cause).map(TypedError::Http)
}

/// Wraps a cause as [`codes::FORBIDDEN`] (status 403).
pub fn forbidden<C: Into<Cause>>(cause: Option<C>) -> Option<TypedError> {
    HttpError::wrap(codes::FORBIDDEN, cause).map(TypedError::Http)
}

/// Wraps a cause as [`codes::NOT_FOUND`] (status 404).
pub fn not_found<C: Into<Cause>>(cause: Option<C>) -> Option<TypedError> {
    HttpError::wrap(codes::NOT_FOUND, cause).map(TypedError::Http)
}
