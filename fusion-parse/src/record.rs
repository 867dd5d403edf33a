use config::{Tool, FUSION_SEPARATOR};
use serde::{Deserialize, Serialize};

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Tool-specific evidence for one call, passed through verbatim.
pub type Details = BTreeMap<String, serde_json::Value>;

/// Directional (5' head, 3' tail) gene pair; `HEAD--TAIL` is the merge key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct GenePair {
    pub head: String,
    pub tail: String,
}

impl GenePair {
    pub fn new<H: Into<String>, T: Into<String>>(head: H, tail: T) -> Self {
        Self {
            head: head.into(),
            tail: tail.into(),
        }
    }

    /// builds a pair from two raw symbols, refusing empty ones
    pub fn from_symbols(head: &str, tail: &str) -> Result<Self, String> {
        let (head, tail) = (head.trim(), tail.trim());
        if head.is_empty() || tail.is_empty() {
            return Err(format!("empty gene symbol in pair '{}'/'{}'", head, tail));
        }

        Ok(Self::new(head, tail))
    }
}

impl fmt::Display for GenePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.head, FUSION_SEPARATOR, self.tail)
    }
}

impl FromStr for GenePair {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once(FUSION_SEPARATOR) {
            Some((head, tail)) => GenePair::from_symbols(head, tail),
            None => Err(format!(
                "'{}' is not a {} separated gene pair",
                s, FUSION_SEPARATOR
            )),
        }
    }
}

impl From<GenePair> for String {
    fn from(pair: GenePair) -> Self {
        pair.to_string()
    }
}

impl TryFrom<String> for GenePair {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// One (tool, gene pair) detection. Immutable once an adapter built it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FusionCall {
    tool: Tool,
    pair: GenePair,
    details: Details,
}

impl FusionCall {
    pub fn new(tool: Tool, pair: GenePair, details: Details) -> Self {
        Self {
            tool,
            pair,
            details,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn pair(&self) -> &GenePair {
        &self.pair
    }

    pub fn details(&self) -> &Details {
        &self.details
    }

    pub fn detail(&self, key: &str) -> Option<&serde_json::Value> {
        self.details.get(key)
    }
}
