use std::{fs, path::Path};

use crate::errors::errors::Error;

use super::buffer::{TokenBuffer, DEFAULT_CAPACITY};
use super::cursor::Cursor;
use super::tokens::{TokenKind, RESERVED_LOOKUP};

/// Reads the source file at `path` and tokenizes its contents.
///
/// Fails with [`Error::SourceUnavailable`] if the file cannot be opened or
/// read; no buffer is produced in that case.
pub fn lex(path: &Path) -> Result<TokenBuffer, Error> {
    let source = fs::read_to_string(path).map_err(|source| Error::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(tokenize(&source))
}

/// Tokenizes in-memory source text in a single left-to-right pass.
///
/// Scanning never fails: characters outside the recognized set come out as
/// `Unknown` tokens and the pass keeps going.
pub fn tokenize(source: &str) -> TokenBuffer {
    let mut cursor = Cursor::new(source.chars());
    let mut tokens = TokenBuffer::new(DEFAULT_CAPACITY);
    let mut run = String::new();

    while let Some(c) = cursor.next() {
        if c.is_whitespace() {
            continue;
        } else if c.is_ascii_alphabetic() {
            read_run(&mut cursor, &mut run, c, |next| next.is_ascii_alphanumeric());

            // Keywords are an exact match against the completed run, so
            // "int2" or "interna" stay identifiers.
            match RESERVED_LOOKUP.get(run.as_str()) {
                Some(kind) => tokens.push(*kind, &run),
                None => tokens.push(TokenKind::Identifier, &run),
            };
        } else if c.is_ascii_digit() {
            read_run(&mut cursor, &mut run, c, |next| next.is_ascii_digit());
            tokens.push(TokenKind::IntLiteral, &run);
        } else {
            let kind = match c {
                '(' => TokenKind::LParan,
                ')' => TokenKind::RParan,
                '{' => TokenKind::LBrace,
                '}' => TokenKind::RBrace,
                ';' => TokenKind::Semicolon,
                _ => TokenKind::Unknown,
            };

            tokens.push(kind, &c.to_string());
        }
    }

    tokens
}

/// Accumulates a maximal run starting with `first` into `run`. The
/// character that breaks the run is pushed back so the next scan step sees
/// it; at end of input there is nothing to push back.
fn read_run<I: Iterator<Item = char>>(
    cursor: &mut Cursor<I>,
    run: &mut String,
    first: char,
    belongs: impl Fn(char) -> bool,
) {
    run.clear();
    run.push(first);

    while let Some(next) = cursor.next() {
        if belongs(next) {
            run.push(next);
        } else {
            cursor.push_back(next);
            break;
        }
    }
}
