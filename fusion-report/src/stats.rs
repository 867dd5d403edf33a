use config::Tool;
use serde::Serialize;

use std::collections::BTreeMap;

use crate::aggregate::FusionAggregate;
use crate::classify::Classification;

/// Counts behind the dashboard charts; recomputable from the aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub known: usize,
    pub unknown: usize,
    pub tool_totals: BTreeMap<Tool, usize>,
    pub distribution: BTreeMap<usize, usize>,
}

impl Summary {
    pub fn new(aggregate: &FusionAggregate, classification: &Classification) -> Self {
        Self {
            total: aggregate.len(),
            known: classification.known().len(),
            unknown: classification.unknown().len(),
            tool_totals: aggregate.tool_totals(),
            distribution: aggregate.distribution(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::progress::NoProgress;
    use crate::reference::ReferenceTable;
    use fusionparse::{Details, FusionCall, GenePair};

    #[test]
    fn test_summary_counts() {
        let call = |tool, head: &str, tail: &str| {
            FusionCall::new(tool, GenePair::new(head, tail), Details::new())
        };
        let aggregate = FusionAggregate::aggregate(vec![
            (Tool::EricScript, vec![call(Tool::EricScript, "ABC", "XYZ")]),
            (
                Tool::FusionCatcher,
                vec![
                    call(Tool::FusionCatcher, "ABC", "XYZ"),
                    call(Tool::FusionCatcher, "DEF", "UVW"),
                ],
            ),
        ]);
        let reference: ReferenceTable = vec![GenePair::new("ABC", "XYZ")].into_iter().collect();
        let classification = classify(aggregate.fusions(), &reference, &NoProgress).unwrap();

        let summary = Summary::new(&aggregate, &classification);

        assert_eq!(summary.total, 2);
        assert_eq!(summary.known, 1);
        assert_eq!(summary.unknown, 1);
        assert_eq!(summary.known + summary.unknown, summary.total);
        assert_eq!(summary.tool_totals.get(&Tool::EricScript), Some(&1));
        assert_eq!(summary.tool_totals.get(&Tool::FusionCatcher), Some(&2));
        assert_eq!(summary.distribution, BTreeMap::from([(1, 1), (2, 1)]));
    }

    #[test]
    fn test_summary_serializes_tool_names() {
        let summary = Summary::new(&FusionAggregate::new(), &Classification::default());
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["total"], serde_json::json!(0));
        assert!(json["tool_totals"].as_object().unwrap().is_empty());
    }
}
