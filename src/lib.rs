#![allow(clippy::module_inception)]

//! Lexical-analysis front end for a small C-like language subset.
//!
//! The lexer turns raw source text into a [`TokenBuffer`] of classified
//! tokens for a later parsing stage. Use [`lex`] to tokenize a file or
//! [`tokenize`] for in-memory source text.

pub mod errors;
pub mod lexer;

pub use errors::errors::Error;
pub use lexer::buffer::TokenBuffer;
pub use lexer::lexer::{lex, tokenize};
pub use lexer::tokens::{Token, TokenKind};
