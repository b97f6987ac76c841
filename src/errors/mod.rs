//! Error types for the lexer.
//!
//! Only source availability is a recoverable failure: an unreadable file
//! surfaces as `Error::SourceUnavailable` and the caller decides what to do.
//! Unrecognized characters are not errors (they become `Unknown` tokens),
//! and allocation failure aborts the process.

pub mod errors;

#[cfg(test)]
mod tests;
