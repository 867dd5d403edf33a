use config::Tool;
use thiserror::Error;

use std::path::PathBuf;

/// A tool output that exists but does not follow the tool's schema.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("ERROR: malformed {tool} output at line {line}: {detail}")]
pub struct FormatError {
    pub tool: Tool,
    pub line: usize,
    pub detail: String,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("ERROR: cannot read {tool} output {path:?}: {source}")]
    Io {
        tool: Tool,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Format(#[from] FormatError),
}
