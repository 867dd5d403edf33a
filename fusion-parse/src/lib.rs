//! Readers for fusion-caller outputs
//! Alejandro Gonzales-Irribarren, 2025
//!
//! Every supported caller writes its own tab-separated table. This
//! crate turns each of them into a flat list of [`FusionCall`]s, one
//! per (tool, gene pair) detection, keeping the tool-specific evidence
//! as an opaque map of named fields. A missing or empty input is not
//! an error: it simply contributes no calls. A present input that does
//! not follow its tool's schema is reported as a [`FormatError`].

use std::fmt::Debug;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use config::{is_blank, Tool};
use log::info;

pub mod adapter;
pub mod error;
pub mod record;

pub use adapter::{adapter, Header, Row, ToolAdapter};
pub use error::{FormatError, ParseError};
pub use record::{Details, FusionCall, GenePair};

pub fn reader<P: AsRef<Path> + Debug>(file: P) -> std::io::Result<String> {
    let mut file = File::open(file)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parses the output of `tool` found at `file`.
///
/// `None` or a blank path means the tool was not run and yields an
/// empty list.
pub fn parse<P: AsRef<Path> + Debug>(
    tool: Tool,
    file: Option<P>,
) -> Result<Vec<FusionCall>, ParseError> {
    let path = match file {
        Some(path) if !is_blank(path.as_ref()) => path,
        _ => {
            info!("No {} output provided, skipping...", tool);
            return Ok(Vec::new());
        }
    };

    let bytes = std::fs::read(path.as_ref()).map_err(|source| ParseError::Io {
        tool,
        path: path.as_ref().to_path_buf(),
        source,
    })?;
    let contents = decode(tool, bytes)?;

    let calls = parse_str(tool, &contents)?;
    info!("Calls parsed from {}: {}", tool, calls.len());

    Ok(calls)
}

/// Text of a tool output; invalid UTF-8 is a format error at its line.
fn decode(tool: Tool, bytes: Vec<u8>) -> Result<String, FormatError> {
    String::from_utf8(bytes).map_err(|err| {
        let valid = err.utf8_error().valid_up_to();
        let line = err.as_bytes()[..valid].iter().filter(|b| **b == b'\n').count() + 1;

        FormatError {
            tool,
            line,
            detail: "invalid UTF-8".to_string(),
        }
    })
}

/// Parses in-memory `tool` output
pub fn parse_str(tool: Tool, contents: &str) -> Result<Vec<FusionCall>, FormatError> {
    adapter(tool).parse_str(contents)
}
