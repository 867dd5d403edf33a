//! Membership test against the reference fusion knowledge base.

use fusionparse::{reader, GenePair};
use hashbrown::HashSet;
use log::info;
use thiserror::Error;

use std::path::{Path, PathBuf};

use config::DELIMITER;

const HEAD_COLUMN: &str = "h_gene";

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("ERROR: reference lookup failed for {pair}: {reason}")]
    Unavailable { pair: String, reason: String },
    #[error("ERROR: cannot read reference table {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("ERROR: malformed reference table {path:?} at line {line}: {detail}")]
    Format {
        path: PathBuf,
        line: usize,
        detail: String,
    },
}

/// Answers whether a directional gene pair is catalogued.
///
/// Implementors may hit a database or a remote service; a failure is
/// returned as-is and never interpreted as "not catalogued".
pub trait ReferenceLookup {
    fn exists(&self, pair: &GenePair) -> Result<bool, LookupError>;
}

impl<F> ReferenceLookup for F
where
    F: Fn(&GenePair) -> Result<bool, LookupError>,
{
    fn exists(&self, pair: &GenePair) -> Result<bool, LookupError> {
        self(pair)
    }
}

/// In-memory copy of the reference fusion table
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    pairs: HashSet<GenePair>,
}

impl ReferenceTable {
    /// Loads a table whose first two columns are head and tail symbols.
    ///
    /// Single-column rows holding a `HEAD--TAIL` identity are accepted too.
    /// Lines starting with '#' and a leading `h_gene` header are skipped.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LookupError> {
        let path = path.as_ref();
        let contents = reader(path).map_err(|source| LookupError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let table = Self::parse(&contents).map_err(|(line, detail)| LookupError::Format {
            path: path.to_path_buf(),
            line,
            detail,
        })?;

        info!(
            "Reference fusions loaded from {}: {}",
            path.display(),
            table.len()
        );
        Ok(table)
    }

    fn parse(contents: &str) -> Result<Self, (usize, String)> {
        let mut pairs = HashSet::new();

        for (idx, line) in contents.lines().enumerate() {
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();
            if fields[0].eq_ignore_ascii_case(HEAD_COLUMN) {
                continue;
            }

            let pair = match fields.as_slice() {
                [identity] => identity.parse::<GenePair>(),
                [head, tail, ..] => GenePair::from_symbols(head, tail),
                [] => Err("empty row".to_string()),
            }
            .map_err(|detail| (idx + 1, detail))?;

            pairs.insert(pair);
        }

        Ok(Self { pairs })
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn contains(&self, pair: &GenePair) -> bool {
        self.pairs.contains(pair)
    }
}

impl FromIterator<GenePair> for ReferenceTable {
    fn from_iter<I: IntoIterator<Item = GenePair>>(iter: I) -> Self {
        Self {
            pairs: iter.into_iter().collect(),
        }
    }
}

impl ReferenceLookup for ReferenceTable {
    fn exists(&self, pair: &GenePair) -> Result<bool, LookupError> {
        Ok(self.contains(pair))
    }
}
