//! Ambient utility modules: errors, console output, string helpers.

pub mod errors;
pub mod logger;
pub mod printer;
pub mod string_utils;
