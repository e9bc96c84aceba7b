pub mod cli;
pub mod config;
pub mod document;
pub mod engine;
pub mod error;
pub mod output;
pub mod rules;

pub use error::{Result, SolsniffError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_INPUT_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
