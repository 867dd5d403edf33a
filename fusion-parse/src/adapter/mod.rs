//! One reader per fusion caller.
//!
//! Every adapter owns exactly one native format (header rule, column
//! layout, detail fields) and exposes it through [`ToolAdapter`]. The
//! shared line loop lives in the trait so a new tool only has to
//! describe its own columns.

use config::{Tool, DELIMITER};

use crate::error::FormatError;
use crate::record::{Details, FusionCall, GenePair};

mod ericscript;
mod fusioncatcher;
mod pizzly;
mod squid;
mod starfusion;

pub use ericscript::EricScript;
pub use fusioncatcher::FusionCatcher;
pub use pizzly::Pizzly;
pub use squid::Squid;
pub use starfusion::StarFusion;

/// How a tool marks non-data lines at the top of its output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    /// first non-blank line is a column header
    FirstLine,
    /// every line starting with '#' is a comment/header
    Commented,
}

pub trait ToolAdapter {
    fn tool(&self) -> Tool;
    fn header(&self) -> Header;
    fn min_fields(&self) -> usize;

    /// turns one data row into the calls it describes
    fn read_row(&self, row: &Row) -> Result<Vec<FusionCall>, String>;

    fn parse_str(&self, contents: &str) -> Result<Vec<FusionCall>, FormatError> {
        let mut calls = Vec::new();
        let mut header_seen = false;

        for (idx, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            match self.header() {
                Header::FirstLine if !header_seen => {
                    header_seen = true;
                    continue;
                }
                Header::Commented if line.starts_with('#') => continue,
                _ => {}
            }

            let err = |detail: String| FormatError {
                tool: self.tool(),
                line: idx + 1,
                detail,
            };

            let row = Row::new(line);
            if row.len() < self.min_fields() {
                return Err(err(format!(
                    "expected at least {} columns, found {}",
                    self.min_fields(),
                    row.len()
                )));
            }

            calls.extend(self.read_row(&row).map_err(err)?);
        }

        Ok(calls)
    }
}

/// returns the adapter owning the format of `tool`
pub fn adapter(tool: Tool) -> &'static dyn ToolAdapter {
    match tool {
        Tool::EricScript => &EricScript,
        Tool::StarFusion => &StarFusion,
        Tool::FusionCatcher => &FusionCatcher,
        Tool::Pizzly => &Pizzly,
        Tool::Squid => &Squid,
    }
}

/// A tab-split, trimmed data line
#[derive(Debug)]
pub struct Row<'a> {
    fields: Vec<&'a str>,
}

impl<'a> Row<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            fields: line.split(DELIMITER).map(str::trim).collect(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, idx: usize) -> Result<&'a str, String> {
        self.fields
            .get(idx)
            .copied()
            .ok_or_else(|| format!("missing column {}", idx + 1))
    }

    pub fn pair(&self, head: usize, tail: usize) -> Result<GenePair, String> {
        GenePair::from_symbols(self.get(head)?, self.get(tail)?)
    }

    pub fn int(&self, idx: usize, name: &str) -> Result<serde_json::Value, String> {
        let raw = self.get(idx)?;
        raw.parse::<i64>()
            .map(serde_json::Value::from)
            .map_err(|_| format!("{} is not an integer: '{}'", name, raw))
    }

    pub fn float(&self, idx: usize, name: &str) -> Result<serde_json::Value, String> {
        let raw = self.get(idx)?;
        raw.parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(serde_json::Value::Number)
            .ok_or_else(|| format!("{} is not a number: '{}'", name, raw))
    }

    pub fn text(&self, idx: usize) -> Result<serde_json::Value, String> {
        Ok(serde_json::Value::String(self.get(idx)?.to_string()))
    }
}

/// small builder so adapters read as a list of named columns
pub(crate) fn details<I>(fields: I) -> Details
where
    I: IntoIterator<Item = (&'static str, serde_json::Value)>,
{
    fields
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect()
}
