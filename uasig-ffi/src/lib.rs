//! C ABI for the uasig User Agent parser.
//!
//! Strings handed out by [`uasig_parse_user_agent`] are owned by the caller
//! and have to be released exactly once using [`uasig_free_user_agent`].
//! See `include/uasig.h` for the C declarations.

#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

use std::{
    ffi::{CStr, CString, c_char},
    fmt,
};
use uasig_ua::parse_user_agent;

/// Error returned when no User Agent input was given at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidInput;

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("missing user agent input")
    }
}

impl std::error::Error for InvalidInput {}

/// Classify the given User Agent and return its short name
/// (see [`UserAgentInfo::short_name`](uasig_ua::UserAgentInfo::short_name)).
///
/// The input does not have to be valid UTF-8.
pub fn parse_c_str(input: Option<&CStr>) -> Result<CString, InvalidInput> {
    let input = input.ok_or(InvalidInput)?;
    let mut short_name = parse_user_agent(input.to_bytes())
        .short_name()
        .into_bytes();
    short_name.retain(|b| *b != 0);
    // SAFETY: all NUL bytes were removed above
    Ok(unsafe { CString::from_vec_unchecked(short_name) })
}

/// Classify a NUL-terminated User Agent string.
///
/// Returns a newly allocated short name, or null in case `input` is null.
///
/// # Safety
///
/// `input` must be null or point to a NUL-terminated string
/// that is valid for reads for the duration of the call.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn uasig_parse_user_agent(input: *const c_char) -> *mut c_char {
    let input = if input.is_null() {
        None
    } else {
        // SAFETY: caller contract guarantees a valid NUL-terminated string.
        Some(unsafe { CStr::from_ptr(input) })
    };
    match parse_c_str(input) {
        Ok(short_name) => short_name.into_raw(),
        Err(err) => {
            tracing::debug!("uasig_parse_user_agent: {err}");
            std::ptr::null_mut()
        }
    }
}

/// Release a string returned by [`uasig_parse_user_agent`].
///
/// Passing null is a no-op.
///
/// # Safety
///
/// `s` must be null or a pointer returned by [`uasig_parse_user_agent`]
/// that was not released before.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn uasig_free_user_agent(s: *mut c_char) {
    if s.is_null() {
        return;
    }
    // SAFETY: caller contract guarantees `s` originates from `CString::into_raw`.
    drop(unsafe { CString::from_raw(s) });
}
