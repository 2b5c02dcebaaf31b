//! uasig cli commands

pub mod parse;
