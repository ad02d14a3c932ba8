#![warn(rust_2018_idioms)]

pub mod model;
pub mod util;
