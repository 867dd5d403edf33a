use config::{Tool, MIN_FUSIONCATCHER_FIELDS, POSITION_SEPARATOR};

use super::{details, Header, Row, ToolAdapter};
use crate::record::FusionCall;

/// FusionCatcher `final-list_candidate-fusion-genes.txt`
pub struct FusionCatcher;

impl ToolAdapter for FusionCatcher {
    fn tool(&self) -> Tool {
        Tool::FusionCatcher
    }

    fn header(&self) -> Header {
        Header::FirstLine
    }

    fn min_fields(&self) -> usize {
        MIN_FUSIONCATCHER_FIELDS
    }

    fn read_row(&self, row: &Row) -> Result<Vec<FusionCall>, String> {
        let pair = row.pair(0, 1)?;
        let position = format!("{}{}{}", row.get(8)?, POSITION_SEPARATOR, row.get(9)?);

        let fields = details([
            ("common_mapping_reads", row.int(3, "Counts_of_common_mapping_reads")?),
            ("spanning_pairs", row.int(4, "Spanning_pairs")?),
            ("spanning_unique_reads", row.int(5, "Spanning_unique_reads")?),
            ("longest_anchor", row.int(6, "Longest_anchor_found")?),
            ("fusion_finding_method", row.text(7)?),
            ("position", serde_json::Value::String(position)),
            ("predicted_effect", row.text(15)?),
        ]);

        Ok(vec![FusionCall::new(self.tool(), pair, fields)])
    }
}
