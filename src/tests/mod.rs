#[macro_use]
mod util;

mod parse;
mod convert;
