//! string utilities

mod search;
#[doc(inline)]
pub use search::{
    MatchIndicesIgnoreAsciiCase, contains_ignore_ascii_case, match_indices_ignore_ascii_case,
    submatch_ignore_ascii_case,
};
