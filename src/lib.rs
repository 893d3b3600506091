pub mod document;
pub mod error;
pub mod format;
pub mod statement;
pub mod theme;
pub mod words;

pub use document::Document;
pub use error::{Error, ParseError};
pub use statement::Statement;
pub use theme::{Scope, Theme};
