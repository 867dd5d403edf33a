//! Merge of per-tool calls into one record per gene pair.

use config::Tool;
use fusionparse::{FusionCall, GenePair};
use hashbrown::HashMap;
use serde::Serialize;

use std::collections::{BTreeMap, BTreeSet};

/// Every tool that reported one gene pair, with its call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregatedFusion {
    pair: GenePair,
    calls: BTreeMap<Tool, FusionCall>,
}

impl AggregatedFusion {
    fn new(call: FusionCall) -> Self {
        let pair = call.pair().clone();
        let mut calls = BTreeMap::new();
        calls.insert(call.tool(), call);

        Self { pair, calls }
    }

    pub fn pair(&self) -> &GenePair {
        &self.pair
    }

    pub fn calls(&self) -> &BTreeMap<Tool, FusionCall> {
        &self.calls
    }

    pub fn call(&self, tool: Tool) -> Option<&FusionCall> {
        self.calls.get(&tool)
    }

    pub fn detected_by(&self, tool: Tool) -> bool {
        self.calls.contains_key(&tool)
    }

    pub fn tools(&self) -> impl Iterator<Item = Tool> + '_ {
        self.calls.keys().copied()
    }

    /// number of tools that reported this pair; never zero
    pub fn detection_count(&self) -> usize {
        self.calls.len()
    }
}

/// All fusions of a run keyed by gene pair, plus the tools that took part.
///
/// Iteration order is arbitrary but stable while the aggregate is not
/// mutated; use [`FusionAggregate::sorted_fusions`] for reproducible output.
#[derive(Debug, Clone, Default)]
pub struct FusionAggregate {
    tools: BTreeSet<Tool>,
    fusions: HashMap<GenePair, AggregatedFusion>,
}

impl FusionAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// merges the calls of every supplied tool
    pub fn aggregate<I>(inputs: I) -> Self
    where
        I: IntoIterator<Item = (Tool, Vec<FusionCall>)>,
    {
        let mut acc = Self::new();
        for (tool, calls) in inputs {
            acc.register(tool);
            calls.into_iter().for_each(|call| acc.insert(call));
        }

        acc
    }

    /// marks `tool` as part of the run even if it reports nothing
    pub fn register(&mut self, tool: Tool) {
        self.tools.insert(tool);
    }

    /// records `call` under its tool's slot; a repeated (tool, pair)
    /// replaces the previous call
    pub fn insert(&mut self, call: FusionCall) {
        self.tools.insert(call.tool());

        match self.fusions.get_mut(call.pair()) {
            Some(fusion) => {
                fusion.calls.insert(call.tool(), call);
            }
            None => {
                self.fusions
                    .insert(call.pair().clone(), AggregatedFusion::new(call));
            }
        }
    }

    /// tools supplied for this run, in canonical order
    pub fn tools(&self) -> Vec<Tool> {
        self.tools.iter().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.fusions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fusions.is_empty()
    }

    pub fn get(&self, pair: &GenePair) -> Option<&AggregatedFusion> {
        self.fusions.get(pair)
    }

    pub fn fusions(&self) -> Vec<&GenePair> {
        self.fusions.keys().collect()
    }

    pub fn sorted_fusions(&self) -> Vec<&GenePair> {
        let mut fusions = self.fusions();
        fusions.sort_unstable();
        fusions
    }

    /// 0 for a pair no tool reported
    pub fn detection_count(&self, pair: &GenePair) -> usize {
        self.fusions
            .get(pair)
            .map_or(0, AggregatedFusion::detection_count)
    }

    pub fn detection_counts(&self) -> impl Iterator<Item = (&GenePair, usize)> {
        self.fusions
            .iter()
            .map(|(pair, fusion)| (pair, fusion.detection_count()))
    }

    /// distinct gene pairs contributed by each supplied tool
    pub fn tool_totals(&self) -> BTreeMap<Tool, usize> {
        let mut totals: BTreeMap<Tool, usize> = self.tools.iter().map(|t| (*t, 0)).collect();
        for fusion in self.fusions.values() {
            for tool in fusion.tools() {
                *totals.entry(tool).or_default() += 1;
            }
        }

        totals
    }

    /// number of tools agreeing -> number of gene pairs with that agreement
    pub fn distribution(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for fusion in self.fusions.values() {
            *histogram.entry(fusion.detection_count()).or_default() += 1;
        }

        histogram
    }

    pub fn max_detection_count(&self) -> usize {
        self.fusions
            .values()
            .map(AggregatedFusion::detection_count)
            .max()
            .unwrap_or(0)
    }
}
