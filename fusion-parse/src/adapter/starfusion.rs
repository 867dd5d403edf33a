use config::{Tool, MIN_STARFUSION_FIELDS, POSITION_SEPARATOR};

use super::{details, Header, Row, ToolAdapter};
use crate::record::{FusionCall, GenePair};

/// STAR-Fusion `star-fusion.fusion_predictions.abridged.tsv`
pub struct StarFusion;

impl ToolAdapter for StarFusion {
    fn tool(&self) -> Tool {
        Tool::StarFusion
    }

    fn header(&self) -> Header {
        Header::Commented
    }

    fn min_fields(&self) -> usize {
        MIN_STARFUSION_FIELDS
    }

    fn read_row(&self, row: &Row) -> Result<Vec<FusionCall>, String> {
        let pair: GenePair = row.get(0)?.parse()?;
        let position = format!("{}{}{}", row.get(5)?, POSITION_SEPARATOR, row.get(7)?);

        let fields = details([
            ("junction_reads", row.int(1, "JunctionReadCount")?),
            ("spanning_reads", row.int(2, "SpanningFragCount")?),
            ("splice_type", row.text(3)?),
            ("position", serde_json::Value::String(position)),
            ("ffpm", row.float(9, "FFPM")?),
        ]);

        Ok(vec![FusionCall::new(self.tool(), pair, fields)])
    }
}
