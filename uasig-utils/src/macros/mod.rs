//! hidden uasig macros 🤫

/// Map a string, trimmed and compared ignoring ASCII case,
/// onto the value of the first matching arm.
///
/// Arms are string literals, optionally joined with `|`,
/// and the match has to end with a `_` fallback arm.
#[doc(hidden)]
#[macro_export]
macro_rules! __match_ignore_ascii_case_str {
    (match ($s:expr) { $($first:literal $(| $alt:literal)* => $value:expr,)+ _ => $fallback:expr $(,)? }) => {{
        let s: &str = ($s).trim();
        $(
            if s.eq_ignore_ascii_case($first) $(|| s.eq_ignore_ascii_case($alt))* {
                $value
            } else
        )+
        {
            $fallback
        }
    }};
}
#[doc(inline)]
pub use crate::__match_ignore_ascii_case_str as match_ignore_ascii_case_str;
