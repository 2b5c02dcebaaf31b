//! 🔎 uasig is a rule based User-Agent signature parser and classifier.
//!
//! It takes an arbitrary, free-form `User-Agent` (header) value and
//! extracts structured facts from it: browser and version, rendering engine,
//! operating system, device form factor and device model.
//!
//! | crate | re-exported as | purpose |
//! |-|-|-|
//! | `uasig-ua` | [`ua`] | rule table, version extraction and the classifier |
//! | `uasig-error` | [`error`] | [`BoxError`](error::BoxError), [`OpaqueError`](error::OpaqueError) and context extensions |
//! | `uasig-utils` | [`utils`] | ASCII case-insensitive searching over raw bytes |
//!
//! The C ABI lives in the `uasig-ffi` crate and the `uasig` binary in `uasig-cli`.
//!
//! # Example
//!
//! ```
//! use uasig::ua::{DeviceKind, parse_user_agent};
//!
//! let info = parse_user_agent("Mozilla/5.0 (Linux; U; en-US) AppleWebKit/528.5+ (KHTML, like Gecko, Safari/528.5+) Version/4.0 Kindle/3.0 (screen 600×800; rotate)");
//! assert_eq!(info.browser_name, "Kindle");
//! assert_eq!(info.engine_version, "528.5");
//! assert_eq!(info.device, DeviceKind::EReader);
//! ```
//!
//! Parsing never fails. Custom rule tables can be loaded from JSON,
//! see [`ua::rules::RuleSet`] for more information.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

#[doc(inline)]
pub use ::uasig_error as error;

#[doc(inline)]
pub use ::uasig_utils as utils;

#[doc(inline)]
pub use ::uasig_ua as ua;
