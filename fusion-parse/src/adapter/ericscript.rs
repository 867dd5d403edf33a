use config::{Tool, MIN_ERICSCRIPT_FIELDS, POSITION_SEPARATOR};

use super::{details, Header, Row, ToolAdapter};
use crate::record::FusionCall;

/// EricScript `<sample>.results.filtered.tsv`
pub struct EricScript;

impl ToolAdapter for EricScript {
    fn tool(&self) -> Tool {
        Tool::EricScript
    }

    fn header(&self) -> Header {
        Header::FirstLine
    }

    fn min_fields(&self) -> usize {
        MIN_ERICSCRIPT_FIELDS
    }

    fn read_row(&self, row: &Row) -> Result<Vec<FusionCall>, String> {
        let pair = row.pair(0, 1)?;
        let position = format!(
            "{}:{}:{}{}{}:{}:{}",
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
            POSITION_SEPARATOR,
            row.get(5)?,
            row.get(6)?,
            row.get(7)?
        );

        let fields = details([
            ("position", serde_json::Value::String(position)),
            ("discordant_reads", row.int(10, "crossingreads")?),
            ("junction_reads", row.int(11, "spanningreads")?),
            ("fusion_type", row.text(14)?),
            ("gene_expr1", row.float(18, "GeneExpr1")?),
            ("gene_expr2", row.float(19, "GeneExpr2")?),
            ("gene_expr_fused", row.float(20, "GeneExpr_Fused")?),
        ]);

        Ok(vec![FusionCall::new(self.tool(), pair, fields)])
    }
}
