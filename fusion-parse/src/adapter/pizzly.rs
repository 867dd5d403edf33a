use config::{Tool, MIN_PIZZLY_FIELDS};

use super::{details, Header, Row, ToolAdapter};
use crate::record::FusionCall;

/// Pizzly flattened table (`flatten_json.py` output)
pub struct Pizzly;

impl ToolAdapter for Pizzly {
    fn tool(&self) -> Tool {
        Tool::Pizzly
    }

    fn header(&self) -> Header {
        Header::FirstLine
    }

    fn min_fields(&self) -> usize {
        MIN_PIZZLY_FIELDS
    }

    fn read_row(&self, row: &Row) -> Result<Vec<FusionCall>, String> {
        let pair = row.pair(0, 2)?;
        let fields = details([
            ("pair_count", row.int(4, "paircount")?),
            ("split_count", row.int(5, "splitcount")?),
        ]);

        Ok(vec![FusionCall::new(self.tool(), pair, fields)])
    }
}
