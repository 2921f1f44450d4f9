#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Typed errors with stable reference codes and a round-trippable JSON
//! envelope.
//!
//! Every failure in the platform API carries a stable numeric code drawn
//! from a compile-time taxonomy. The code determines the error's shape:
//! constant messages, formatted messages with captured arguments, and
//! two wrapping shapes that preserve an inner typed error across
//! serialization. The HTTP projection of these errors lives in the
//! `typederr-http` crate; this crate stays transport-free.
//!
//! # Overview
//!
//! Producers call the named constructors in [`catalog`] and propagate the
//! resulting [`TypedError`] values. At the boundary, the [`codec`] turns
//! an error — including its whole wrapped chain — into a canonical JSON
//! envelope and back, byte-identically.
//!
//! ```
//! use typederr::{catalog, codec};
//!
//! let err = catalog::forbidden(Some(catalog::ORGANIZATION_NOT_FOUND)).unwrap();
//! assert_eq!(err.to_string(), "organization not found");
//!
//! let bytes = codec::encode(Some(&err)).unwrap();
//! let back = codec::decode(&bytes).unwrap();
//! assert_eq!(back, err);
//! ```
//!
//! # Modules
//!
//! - [`taxonomy`] - Numeric codes, categories, and reference strings
//! - [`value`] - JSON-representable format arguments
//! - [`error`] - The sealed [`TypedError`] sum and its variants
//! - [`catalog`] - Registered codes and named constructors
//! - [`codec`] - The recursive JSON envelope encoder/decoder
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation on codec failures

pub mod catalog;
pub mod codec;
pub mod error;
pub mod taxonomy;
pub mod value;

pub use error::{Cause, ConstError, HttpError, TypedError, ValueError, WrapError};
pub use taxonomy::{CATEGORY_BASE, Category, Code};
pub use value::FormatValue;
