use std::iter::Peekable;
use std::str::Chars;

use crate::error::WordsError;

/// Splits a logical line into shell-like words.
///
/// Whitespace separates words unless quoted. Single quotes take their
/// contents verbatim; double quotes resolve backslash escapes for `"`,
/// `\`, `` ` `` and `$` and keep the backslash for anything else; outside
/// quotes a backslash escapes the next character. Adjacent quoted and
/// unquoted segments fuse into one word, so `a"b c"d` is the single word
/// `ab cd` with its internal whitespace intact.
pub fn split(line: &str) -> Result<Vec<String>, WordsError> {
    let mut words = Vec::new();
    let mut chars = line.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else {
            words.push(word(&mut chars)?);
        }
    }

    Ok(words)
}

fn word(chars: &mut Peekable<Chars>) -> Result<String, WordsError> {
    let mut out = String::new();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => break,
            '\'' => {
                chars.next();
                single_quoted(chars, &mut out)?;
            }
            '"' => {
                chars.next();
                double_quoted(chars, &mut out)?;
            }
            '\\' => {
                chars.next();
                match chars.next() {
                    Some(escaped) => out.push(escaped),
                    None => return Err(WordsError::UnfinishedEscape),
                }
            }
            _ => {
                out.push(c);
                chars.next();
            }
        }
    }

    Ok(out)
}

fn single_quoted(chars: &mut Peekable<Chars>, out: &mut String) -> Result<(), WordsError> {
    loop {
        match chars.next() {
            Some('\'') => return Ok(()),
            Some(c) => out.push(c),
            None => return Err(WordsError::UnterminatedSingleQuote),
        }
    }
}

fn double_quoted(chars: &mut Peekable<Chars>, out: &mut String) -> Result<(), WordsError> {
    loop {
        match chars.next() {
            Some('"') => return Ok(()),
            Some('\\') => match chars.next() {
                Some(escaped @ ('"' | '\\' | '`' | '$')) => out.push(escaped),
                Some(other) => {
                    out.push('\\');
                    out.push(other);
                }
                None => return Err(WordsError::UnterminatedDoubleQuote),
            },
            Some(c) => out.push(c),
            None => return Err(WordsError::UnterminatedDoubleQuote),
        }
    }
}
