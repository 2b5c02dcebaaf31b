//! Error handling for uasig.
//!
//! Classifying a User-Agent never fails, so errors only show up at the
//! edges of the crate: loading a rule table, parsing enum values from
//! strings and running the cli. None of these callers care about the exact
//! error type, hence [`BoxError`] and [`OpaqueError`]. Use
//! [`ErrorContext`] to describe what was being attempted and
//! [`ErrorExt::root_cause`] to get back to the error that started it all.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

/// Any thread safe error, boxed.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

mod ext;
pub use ext::{ErrorContext, ErrorExt, OpaqueError};
