//! utilities crate for uasig
//!
//! `uasig-utils` contains the small string utilities shared by
//! the `uasig` crates: ASCII case-insensitive searching over
//! raw bytes and a couple of macros built on top of it.
//!
//! # uasig
//!
//! Crate used by the end-user `uasig` crate and the other `uasig` crates alike.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

#[doc(hidden)]
#[macro_use]
pub mod macros;

pub mod str;
