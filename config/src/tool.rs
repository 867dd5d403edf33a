use serde::{Deserialize, Serialize};

use std::fmt;

/// Fusion callers whose outputs can be aggregated.
///
/// The declaration order is the canonical tool order used for
/// table columns, per-tool totals and merge passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    EricScript,
    StarFusion,
    FusionCatcher,
    Pizzly,
    Squid,
}

impl Tool {
    pub const ALL: [Tool; 5] = [
        Tool::EricScript,
        Tool::StarFusion,
        Tool::FusionCatcher,
        Tool::Pizzly,
        Tool::Squid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tool::EricScript => "ericscript",
            Tool::StarFusion => "starfusion",
            Tool::FusionCatcher => "fusioncatcher",
            Tool::Pizzly => "pizzly",
            Tool::Squid => "squid",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
