use thiserror::Error;

/// Tokenizer failure: the logical line ended inside a quoted region or
/// right after an escape character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WordsError {
    #[error("unterminated single-quoted string")]
    UnterminatedSingleQuote,
    #[error("unterminated double-quoted string")]
    UnterminatedDoubleQuote,
    #[error("unfinished escape at end of line")]
    UnfinishedEscape,
}

/// Per-statement classification errors.
///
/// `NotSupportedCommand` doubles as the rejection signal between statement
/// grammars: the dispatcher moves on to the next grammar when it sees one,
/// and treats every other variant as terminal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error(transparent)]
    Words(#[from] WordsError),
    #[error("{command} is not one of the supported commands: {}", .supported.join(", "))]
    NotSupportedCommand {
        command: String,
        supported: &'static [&'static str],
    },
    #[error("No option argument given")]
    NoOptionArgument,
    #[error("-{0} is not a supported flag")]
    UnknownFlag(char),
    #[error("flag -{0} requires an argument")]
    MissingFlagArgument(char),
    #[error("Unsupported statement: {0}")]
    UnsupportedStatement(String),
}

impl ParseError {
    pub(crate) fn not_supported(
        command: impl Into<String>,
        supported: &'static [&'static str],
    ) -> Self {
        ParseError::NotSupportedCommand {
            command: command.into(),
            supported,
        }
    }

    pub fn is_not_supported(&self) -> bool {
        matches!(self, ParseError::NotSupportedCommand { .. })
    }
}

/// Top-level error for document loading, parsing and execution.
#[derive(Debug, Error)]
pub enum Error {
    #[error("line {line}: {source}")]
    Parse {
        /// 1-based number of the physical line where the logical line began.
        line: usize,
        source: ParseError,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
