//! Known/unknown split and the tool-count filter.

use config::TOOL_DETECTION_CUTOFF;
use fusionparse::GenePair;
use log::{info, warn};
use serde::Serialize;

use std::collections::BTreeSet;

use crate::aggregate::FusionAggregate;
use crate::progress::Progress;
use crate::reference::{LookupError, ReferenceLookup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifierConfig {
    /// minimum number of tools that have to agree on a fusion for display
    pub min_tools: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            min_tools: TOOL_DETECTION_CUTOFF,
        }
    }
}

/// Disjoint, exhaustive split of the fusion identities of a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    known: BTreeSet<GenePair>,
    unknown: BTreeSet<GenePair>,
}

impl Classification {
    pub fn known(&self) -> &BTreeSet<GenePair> {
        &self.known
    }

    pub fn unknown(&self) -> &BTreeSet<GenePair> {
        &self.unknown
    }

    pub fn is_known(&self, pair: &GenePair) -> bool {
        self.known.contains(pair)
    }

    pub fn len(&self) -> usize {
        self.known.len() + self.unknown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Outcome of the tool-count filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolFilter {
    pub fusions: Vec<GenePair>,
    pub min_tools: usize,
    /// true when the cutoff exceeded every observed count and was ignored
    pub disabled: bool,
}

/// Asks `lookup` once per identity and sorts each into known or unknown.
///
/// `progress` hears about every finished identity. A lookup failure
/// stops the pass and is returned untouched.
pub fn classify<'a, I, L, P>(
    fusions: I,
    lookup: &L,
    progress: &P,
) -> Result<Classification, LookupError>
where
    I: IntoIterator<Item = &'a GenePair>,
    L: ReferenceLookup + ?Sized,
    P: Progress + ?Sized,
{
    let fusions: Vec<&GenePair> = fusions.into_iter().collect();
    let total = fusions.len();
    let mut classification = Classification::default();

    progress.report(0, total);
    for (idx, pair) in fusions.into_iter().enumerate() {
        if lookup.exists(pair)? {
            classification.known.insert(pair.clone());
        } else {
            classification.unknown.insert(pair.clone());
        }
        progress.report(idx + 1, total);
    }
    progress.finish();

    Ok(classification)
}

/// Keeps the identities detected by at least `minimum` tools.
///
/// When `minimum` is above the highest observed count nothing would
/// survive, so the filter is dropped and every identity is returned.
pub fn filter_by_tool_count<'a, I>(fusions: I, minimum: usize) -> ToolFilter
where
    I: IntoIterator<Item = (&'a GenePair, usize)>,
{
    let fusions: Vec<(&GenePair, usize)> = fusions.into_iter().collect();
    let max = fusions.iter().map(|(_, count)| *count).max().unwrap_or(0);
    let disabled = minimum > max;

    let kept = fusions
        .into_iter()
        .filter(|(_, count)| disabled || *count >= minimum)
        .map(|(pair, _)| pair.clone())
        .collect();

    ToolFilter {
        fusions: kept,
        min_tools: minimum,
        disabled,
    }
}

/// Classification bound to one run's configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> ClassifierConfig {
        self.config
    }

    pub fn classify<L, P>(
        &self,
        aggregate: &FusionAggregate,
        lookup: &L,
        progress: &P,
    ) -> Result<Classification, LookupError>
    where
        L: ReferenceLookup + ?Sized,
        P: Progress + ?Sized,
    {
        let classification = classify(aggregate.sorted_fusions(), lookup, progress)?;
        info!(
            "Known fusions: {}, unknown fusions: {}",
            classification.known.len(),
            classification.unknown.len()
        );

        Ok(classification)
    }

    /// sorted identities passing the configured tool cutoff
    pub fn filter(&self, aggregate: &FusionAggregate) -> ToolFilter {
        let counts = aggregate
            .sorted_fusions()
            .into_iter()
            .map(|pair| (pair, aggregate.detection_count(pair)));
        let filter = filter_by_tool_count(counts, self.config.min_tools);

        if filter.disabled {
            warn!(
                "No fusion was detected by {} tools, showing all {} fusions",
                self.config.min_tools,
                filter.fusions.len()
            );
        } else {
            info!(
                "Fusions detected by at least {} tools: {}",
                self.config.min_tools,
                filter.fusions.len()
            );
        }

        filter
    }
}
