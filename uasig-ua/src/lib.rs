//! User Agent (UA) signature matching.
//!
//! This crate provides a rule based classifier ([`UserAgentParser`]) that
//! turns an arbitrary `User-Agent` (header) value into a [`UserAgentInfo`]:
//! the browser, rendering engine, operating system and device it advertises.
//!
//! ```
//! use uasig_ua::{DeviceKind, parse_user_agent};
//!
//! let info = parse_user_agent(
//!     "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
//! );
//! assert_eq!(info.browser_name, "Chrome");
//! assert_eq!(info.browser_version, "124.0.0.0");
//! assert_eq!(info.os_name, "Linux");
//! assert_eq!(info.device, DeviceKind::Desktop);
//! ```
//!
//! # Remarks
//!
//! Parsing never fails. Input that is not recognised results in `"unknown"`
//! names, empty versions and [`DeviceKind::Unknown`]. Input longer than
//! [`DEFAULT_MAX_USER_AGENT_LENGTH`] bytes (configurable per parser) is truncated
//! before it is matched.
//!
//! Matching is a literal ASCII case-insensitive token search,
//! driven by the [`rules::RuleSet`] of the parser. The built-in rule set
//! covers the majority User Agents in the wild, custom ones can be loaded from JSON.
//!
//! # uasig
//!
//! Crate used by the end-user `uasig` crate and the other `uasig` crates alike.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod ua;
pub use ua::*;

pub mod rules;
