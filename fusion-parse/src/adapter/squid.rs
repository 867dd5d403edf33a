use config::{Tool, MIN_SQUID_FIELDS, POSITION_SEPARATOR};

use super::{details, Header, Row, ToolAdapter};
use crate::record::{FusionCall, GenePair};

/// SQUID annotated output (`<sample>_fusion_annotated.txt`)
///
/// The last column lists one or more `HEAD:TAIL` pairs separated by
/// commas; each listed pair becomes its own call with the same evidence.
pub struct Squid;

impl ToolAdapter for Squid {
    fn tool(&self) -> Tool {
        Tool::Squid
    }

    fn header(&self) -> Header {
        Header::Commented
    }

    fn min_fields(&self) -> usize {
        MIN_SQUID_FIELDS
    }

    fn read_row(&self, row: &Row) -> Result<Vec<FusionCall>, String> {
        let position = format!(
            "{}:{}-{}:{}{}{}:{}-{}:{}",
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(8)?,
            POSITION_SEPARATOR,
            row.get(3)?,
            row.get(4)?,
            row.get(5)?,
            row.get(9)?
        );
        let score = row.int(7, "score")?;

        row.get(12)?
            .split(',')
            .filter(|x| !x.trim().is_empty())
            .map(|genes| -> Result<FusionCall, String> {
                let (head, tail) = genes
                    .split_once(':')
                    .ok_or_else(|| format!("'{}' is not a HEAD:TAIL gene pair", genes))?;
                let pair = GenePair::from_symbols(head, tail)?;
                let fields = details([
                    ("position", serde_json::Value::String(position.clone())),
                    ("score", score.clone()),
                ]);

                Ok(FusionCall::new(self.tool(), pair, fields))
            })
            .collect::<Result<Vec<_>, String>>()
            .and_then(|calls| {
                if calls.is_empty() {
                    Err("no fused genes listed".to_string())
                } else {
                    Ok(calls)
                }
            })
    }
}
