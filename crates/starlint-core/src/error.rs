use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// The file could not be parsed as JavaScript. No checks were run on it.
#[derive(Debug)]
pub struct ParseError {
    pub filename: PathBuf,
}

impl std::error::Error for ParseError {}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Failed to parse {}: syntax error in the JavaScript source.",
            self.filename.display()
        )
    }
}
