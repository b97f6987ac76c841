//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Single-pass scanning with one character of pushback
//! - Recognition of keywords, identifiers, integer literals and punctuation
//! - Whitespace handling and an `Unknown` catch-all for anything else
//! - Ownership of every token's text through the token buffer

pub mod buffer;
pub mod cursor;
pub mod lexer;
pub mod tokens;
