use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use crate::error::Error;
use crate::statement::Statement;
use crate::theme::Theme;

/// An ordered sequence of parsed statements.
///
/// Parsing and execution are separate steps: a document is immutable once
/// the source is consumed, and the caller decides which `Theme` it is
/// applied to (possibly more than once).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub statements: Vec<Statement>,
}

impl Document {
    /// Parses theme source from a reader, joining continuation lines.
    ///
    /// A physical line ending in `\` is joined to the next one with the
    /// backslash removed and no separator inserted. Fails fast on the
    /// first line no grammar accepts; the error carries the physical line
    /// number where the logical line began.
    pub fn parse<R: BufRead>(reader: R) -> Result<Document, Error> {
        let mut statements = Vec::new();
        let mut pending = String::new();
        let mut pending_start = 0;

        for (index, line) in reader.lines().enumerate() {
            if pending.is_empty() {
                pending_start = index + 1;
            }
            pending.push_str(&line?);

            if let Some(joined) = pending.strip_suffix('\\') {
                pending.truncate(joined.len());
                continue;
            }

            statements.push(parse_line(&pending, pending_start)?);
            pending.clear();
        }

        // A dangling continuation at EOF is still a logical line.
        if !pending.is_empty() {
            statements.push(parse_line(&pending, pending_start)?);
        }

        debug!(statements = statements.len(), "parsed theme document");
        Ok(Document { statements })
    }

    pub fn parse_str(source: &str) -> Result<Document, Error> {
        Document::parse(source.as_bytes())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Document, Error> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading theme file");
        let file = File::open(path)?;
        Document::parse(BufReader::new(file))
    }

    /// Applies every statement, in order, to the given store. Halts on
    /// the first statement error; effects applied up to that point stay.
    pub fn execute(&self, theme: &mut Theme) -> Result<(), Error> {
        for statement in &self.statements {
            trace!(?statement, "executing statement");
            statement.execute(theme);
        }
        Ok(())
    }
}

fn parse_line(line: &str, number: usize) -> Result<Statement, Error> {
    Statement::parse(line).map_err(|source| Error::Parse {
        line: number,
        source,
    })
}
