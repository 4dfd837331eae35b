//! Command-line interface of the `execinfo` demo binary

pub mod args;

pub use args::{Args, Command};
