mod flags;
mod set_option;

pub use flags::SetOptionFlags;
pub use set_option::{SetOptionStatement, SET_OPTION_COMMANDS};

use crate::error::ParseError;
use crate::theme::Theme;
use crate::words;

pub const COMMENT_COMMANDS: &[&str] = &["#"];
const BLANK_COMMANDS: &[&str] = &[];

/// One parsed logical line of a theme file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Blank,
    Comment(CommentStatement),
    SetOption(SetOptionStatement),
}

/// A `# ...` comment line. The message is the text after the hash,
/// trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentStatement {
    pub message: String,
}

impl Statement {
    /// Classifies a logical line by trying each grammar in a fixed order:
    /// blank, comment, option assignment. Order matters — an empty line
    /// must not be read as a missing command word.
    ///
    /// A grammar rejecting with `NotSupportedCommand` hands the line to
    /// the next one; any other error is terminal and surfaced verbatim.
    /// When every grammar rejects, the whole line is unsupported.
    pub fn parse(line: &str) -> Result<Statement, ParseError> {
        let grammars: [fn(&str) -> Result<Statement, ParseError>; 3] = [
            try_blank,
            CommentStatement::try_parse,
            SetOptionStatement::try_parse,
        ];

        for grammar in grammars {
            match grammar(line) {
                Ok(statement) => return Ok(statement),
                Err(err) if err.is_not_supported() => continue,
                Err(err) => return Err(err),
            }
        }

        Err(ParseError::UnsupportedStatement(line.to_string()))
    }

    /// Applies the statement's effect to the store. Blank lines and
    /// comments are no-ops.
    pub fn execute(&self, theme: &mut Theme) {
        if let Statement::SetOption(set_option) = self {
            set_option.execute(theme);
        }
    }
}

fn try_blank(line: &str) -> Result<Statement, ParseError> {
    match words::split(line) {
        Ok(args) if args.is_empty() => Ok(Statement::Blank),
        // Non-blank, including lines whose quoting is broken: reject with
        // a stable first word taken from the raw line.
        _ => Err(ParseError::not_supported(first_word(line), BLANK_COMMANDS)),
    }
}

impl CommentStatement {
    fn try_parse(line: &str) -> Result<Statement, ParseError> {
        match line.trim_start().strip_prefix('#') {
            Some(message) => Ok(Statement::Comment(CommentStatement {
                message: message.trim().to_string(),
            })),
            None => Err(ParseError::not_supported(first_word(line), COMMENT_COMMANDS)),
        }
    }
}

/// First whitespace-delimited word of the trimmed raw line, for error
/// reporting that must not depend on the line tokenizing cleanly.
fn first_word(line: &str) -> String {
    line.split_whitespace().next().unwrap_or("").to_string()
}
