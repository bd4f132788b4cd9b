//! Check and fix Doxygen documentation in C++ headers.
//!
//! The pipeline runs per file: [`recovery`] finds the documentable
//! declarations, [`docblock`] locates the comment above each one,
//! [`checker`] turns entity and comment into issues, and [`patch`] rewrites
//! the buffer using text from a [`generator`].

pub mod checker;
pub mod cli;
pub mod commands;
pub mod config;
pub mod docblock;
pub mod error;
pub mod generator;
pub mod guidelines;
pub mod output;
pub mod patch;
pub mod recovery;
pub mod scanner;
pub mod validator;

pub use error::{DoxyGuardError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ISSUES_FOUND: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
