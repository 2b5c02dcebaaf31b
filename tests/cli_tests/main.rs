mod utils;

mod help;
mod parse;
