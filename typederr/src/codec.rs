//! Recursive JSON envelope codec for typed errors.
//!
//! The wire shape is a canonical envelope carrying the error's code, its
//! rendered message, and exactly one of:
//!
//! - `raw` — the leaf variant's own fields, or
//! - `embed` — a fully nested envelope for the inner typed error.
//!
//! ```json
//! {"code":2,"message":"Failed to get the bucket name: 4",
//!  "raw":{"code":2,"has_type":false,"message":"4"}}
//! ```
//!
//! Codec failures are themselves typed wrap errors (`JSON_MARSHAL`,
//! `JSON_INNER_ERR_MARSHAL`, `JSON_UNMARSHAL`), so both directions return
//! `Result<_, TypedError>`.

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::catalog::codes;
use crate::error::{Cause, ConstError, HttpError, TypedError, ValueError, WrapError};
use crate::taxonomy::{Category, Code};
use crate::value::FormatValue;

/// Encodes a typed error into its canonical JSON envelope.
///
/// An absent error encodes to empty bytes.
///
/// # Errors
///
/// Returns a [`codes::JSON_MARSHAL`] wrap error when serialization of the
/// outer envelope fails, or a [`codes::JSON_INNER_ERR_MARSHAL`] one when
/// encoding a nested inner error fails.
pub fn encode(err: Option<&TypedError>) -> Result<Vec<u8>, TypedError> {
    match err {
        None => Ok(Vec::new()),
        Some(e) => encode_envelope(e).map(String::into_bytes),
    }
}

/// Decodes a canonical JSON envelope back into a typed error.
///
/// The result is observationally equivalent to the encoded value: same
/// code, same rendered message, and a recursively identical inner error.
///
/// # Errors
///
/// Any parse failure or schema violation returns a
/// [`codes::JSON_UNMARSHAL`] wrap error carrying the parser's message.
pub fn decode(bytes: &[u8]) -> Result<TypedError, TypedError> {
    let envelope: EnvelopeDe = serde_json::from_slice(bytes).map_err(unmarshal_error)?;
    match (envelope.raw, envelope.embed) {
        (Some(raw), None) => decode_raw(envelope.code, &raw),
        (None, Some(embed)) => decode_embed(envelope.code, &embed),
        _ => Err(unmarshal_violation(
            "envelope must carry exactly one of raw and embed",
        )),
    }
}

#[derive(Serialize)]
struct EnvelopeFrame<'a> {
    code: Code,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    raw: Option<&'a RawValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    embed: Option<EmbedFrame<'a>>,
}

#[derive(Serialize)]
struct EmbedFrame<'a> {
    code: Code,
    message: &'a str,
    raw: &'a RawValue,
}

#[derive(Serialize)]
struct ValueBody<'a> {
    values: &'a [FormatValue],
}

#[derive(Serialize)]
struct WrapBody<'a> {
    code: Code,
    has_type: bool,
    message: &'a str,
}

#[derive(Serialize)]
struct HttpBody<'a> {
    http_type: Code,
    has_type: bool,
    message: &'a str,
}

fn encode_envelope(e: &TypedError) -> Result<String, TypedError> {
    let message = e.to_string();
    match e.inner() {
        None => {
            let body = variant_body(e).map_err(marshal_error)?;
            let frame = EnvelopeFrame {
                code: e.code(),
                message: &message,
                raw: Some(&*body),
                embed: None,
            };
            serde_json::to_string(&frame).map_err(marshal_error)
        }
        Some(inner) => {
            let nested = encode_envelope(inner)
                .map_err(|cause| wrap_typed(codes::JSON_INNER_ERR_MARSHAL, cause))?;
            let nested = RawValue::from_string(nested).map_err(marshal_error)?;
            let inner_message = inner.to_string();
            let frame = EnvelopeFrame {
                code: e.code(),
                message: &message,
                raw: None,
                embed: Some(EmbedFrame {
                    code: inner.code(),
                    message: &inner_message,
                    raw: &*nested,
                }),
            };
            serde_json::to_string(&frame).map_err(marshal_error)
        }
    }
}

// Only called for leaves; wrapping variants with a typed inner take the
// embed path instead.
fn variant_body(e: &TypedError) -> Result<Box<RawValue>, serde_json::Error> {
    let body = match e {
        TypedError::Const(_) => "{}".to_owned(),
        TypedError::Value(v) => serde_json::to_string(&ValueBody { values: v.values() })?,
        TypedError::Wrap(w) => serde_json::to_string(&WrapBody {
            code: w.code(),
            has_type: false,
            message: w.cause_message(),
        })?,
        TypedError::Http(h) => serde_json::to_string(&HttpBody {
            http_type: h.code(),
            has_type: false,
            message: h.cause_message(),
        })?,
    };
    RawValue::from_string(body)
}

#[derive(Deserialize)]
struct EnvelopeDe {
    code: Code,
    #[serde(default)]
    raw: Option<Box<RawValue>>,
    #[serde(default)]
    embed: Option<EmbedDe>,
}

#[derive(Deserialize)]
struct EmbedDe {
    raw: Box<RawValue>,
}

#[derive(Deserialize)]
struct ValueBodyDe {
    values: Vec<FormatValue>,
}

#[derive(Deserialize)]
struct WrapBodyDe {
    code: Code,
    message: String,
}

#[derive(Deserialize)]
struct HttpBodyDe {
    http_type: Code,
    message: String,
}

fn decode_raw(code: Code, raw: &RawValue) -> Result<TypedError, TypedError> {
    match code.category() {
        Category::Const => Ok(TypedError::Const(ConstError::new(code))),
        Category::Value => {
            let body: ValueBodyDe = serde_json::from_str(raw.get()).map_err(unmarshal_error)?;
            Ok(TypedError::Value(ValueError::new(code, body.values)))
        }
        Category::Wrap => {
            let body: WrapBodyDe = serde_json::from_str(raw.get()).map_err(unmarshal_error)?;
            Ok(TypedError::Wrap(WrapError::new(
                body.code,
                Cause::Message(body.message),
            )))
        }
        Category::Http => {
            let body: HttpBodyDe = serde_json::from_str(raw.get()).map_err(unmarshal_error)?;
            Ok(TypedError::Http(HttpError::new(
                body.http_type,
                Cause::Message(body.message),
            )))
        }
    }
}

fn decode_embed(code: Code, embed: &EmbedDe) -> Result<TypedError, TypedError> {
    let inner = decode(embed.raw.get().as_bytes())?;
    let cause = Cause::Typed(Box::new(inner));
    match code.category() {
        Category::Wrap => Ok(TypedError::Wrap(WrapError::new(code, cause))),
        Category::Http => Ok(TypedError::Http(HttpError::new(code, cause))),
        Category::Const | Category::Value => Err(unmarshal_violation(
            "embed is not valid for const or value errors",
        )),
    }
}

fn wrap_typed(code: Code, cause: TypedError) -> TypedError {
    TypedError::Wrap(WrapError::new(code, Cause::from(cause)))
}

fn marshal_error(err: serde_json::Error) -> TypedError {
    TypedError::Wrap(WrapError::new(codes::JSON_MARSHAL, Cause::from(err)))
}

fn unmarshal_error(err: serde_json::Error) -> TypedError {
    #[cfg(feature = "telemetry")]
    tracing::debug!(error = %err, "typed error decode failed");
    TypedError::Wrap(WrapError::new(codes::JSON_UNMARSHAL, Cause::from(err)))
}

fn unmarshal_violation(detail: &str) -> TypedError {
    #[cfg(feature = "telemetry")]
    tracing::debug!(error = detail, "typed error decode failed");
    TypedError::Wrap(WrapError::new(
        codes::JSON_UNMARSHAL,
        Cause::Message(detail.to_owned()),
    ))
}
