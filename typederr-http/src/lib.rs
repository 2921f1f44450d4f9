#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! HTTP response projection for typed errors.
//!
//! Projects an [`HttpError`] onto a response: the rendered message in the
//! `X-Influx-Error` header, the decimal code in `X-Influx-Reference`, and
//! the status fixed by the error's code. The body is left to the caller,
//! so headers must be projected before any body bytes are written.
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation per projected response

use http::header::{HeaderName, HeaderValue};
use http::{Response, StatusCode};
use typederr::HttpError;

/// Header carrying the error's rendered message.
pub const ERROR_HEADER: HeaderName = HeaderName::from_static("x-influx-error");

/// Header carrying the error's decimal reference code.
pub const REFERENCE_HEADER: HeaderName = HeaderName::from_static("x-influx-reference");

/// Projects `err` onto `response`: both headers plus the status code.
///
/// An absent error leaves the response untouched. The projection never
/// fails; a message that is not valid header text degrades to an empty
/// header value.
pub fn handle_http<B>(err: Option<&HttpError>, response: &mut Response<B>) {
    let Some(err) = err else {
        return;
    };

    let message = HeaderValue::from_str(&err.to_string())
        .unwrap_or_else(|_| HeaderValue::from_static(""));
    response.headers_mut().insert(ERROR_HEADER, message);
    response
        .headers_mut()
        .insert(REFERENCE_HEADER, HeaderValue::from(err.code().get()));
    *response.status_mut() =
        StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    #[cfg(feature = "telemetry")]
    tracing::debug!(
        code = err.code().get(),
        status = err.status(),
        "projected typed error onto response"
    );
}
