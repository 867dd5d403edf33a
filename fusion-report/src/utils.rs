use anyhow::{Context, Result};
use config::{
    write_lines, Tool, FILTERED_FUSIONS, FUSIONS, KNOWN_FUSIONS, REPORT_PREFIX, SUMMARY,
};
use fusionparse::{Details, GenePair};
use log::{info, warn};
use serde::Serialize;

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use crate::aggregate::FusionAggregate;
use crate::classify::{Classification, ClassifierConfig};
use crate::core::Report;
use crate::stats::Summary;

#[derive(Debug, Serialize)]
struct SummaryFile<'a> {
    sample: &'a str,
    tools: Vec<Tool>,
    tool_cutoff: usize,
    filter_disabled: bool,
    filtered: usize,
    #[serde(flatten)]
    summary: &'a Summary,
}

/// detail entry of one known fusion
#[derive(Debug, Serialize)]
pub struct KnownFusion<'a> {
    pub fusion: &'a GenePair,
    pub tools: BTreeMap<Tool, &'a Details>,
}

/// one `fusion  tool flags...  tools  known` row per identity
pub fn fusion_table<'a, I>(
    fusions: I,
    aggregate: &FusionAggregate,
    classification: &Classification,
) -> Vec<String>
where
    I: IntoIterator<Item = &'a GenePair>,
{
    let tools = aggregate.tools();

    let mut header = vec!["#fusion".to_string()];
    header.extend(tools.iter().map(Tool::to_string));
    header.extend(["tools".to_string(), "known".to_string()]);

    let mut lines = vec![header.join("\t")];
    for pair in fusions {
        let mut row = vec![pair.to_string()];
        let fusion = aggregate.get(pair);
        if fusion.is_none() {
            warn!("{} is not in the aggregate, writing it as undetected", pair);
        }
        row.extend(
            tools
                .iter()
                .map(|t| flag(fusion.is_some_and(|f| f.detected_by(*t)))),
        );
        row.push(fusion.map_or(0, |f| f.detection_count()).to_string());
        row.push(flag(classification.is_known(pair)));
        lines.push(row.join("\t"));
    }

    lines
}

fn flag(value: bool) -> String {
    let flag = if value { "1" } else { "0" };
    flag.to_string()
}

/// per-tool evidence of each known fusion; unknown ones get no entry
pub fn known_details<'a>(
    aggregate: &'a FusionAggregate,
    classification: &'a Classification,
) -> Vec<KnownFusion<'a>> {
    classification
        .known()
        .iter()
        .filter_map(|pair| aggregate.get(pair))
        .map(|fusion| KnownFusion {
            fusion: fusion.pair(),
            tools: fusion
                .calls()
                .iter()
                .map(|(tool, call)| (*tool, call.details()))
                .collect(),
        })
        .collect()
}

fn write_json<T: Serialize, P: AsRef<Path>>(value: &T, path: P) -> Result<()> {
    let path = path.as_ref();
    let writer = BufWriter::new(
        File::create(path).with_context(|| format!("ERROR: cannot create {}", path.display()))?,
    );
    serde_json::to_writer_pretty(writer, value)
        .with_context(|| format!("ERROR: cannot write {}", path.display()))?;

    info!("Written {}", path.display());
    Ok(())
}

/// Runs `write` against a staging sibling of `target` and renames it into
/// place only once every file is written. On failure nothing is left behind
/// and a previous `target` is untouched.
pub fn publish_dir<P, F>(target: P, write: F) -> Result<()>
where
    P: AsRef<Path>,
    F: FnOnce(&Path) -> Result<()>,
{
    let target = target.as_ref();
    let name = target
        .file_name()
        .with_context(|| format!("ERROR: invalid output directory -> {}", target.display()))?;
    let staging = target.with_file_name(format!(".{}.partial", name.to_string_lossy()));

    if staging.exists() {
        std::fs::remove_dir_all(&staging).with_context(|| {
            format!("ERROR: cannot clear stale directory -> {}", staging.display())
        })?;
    }
    std::fs::create_dir_all(&staging).with_context(|| {
        format!("ERROR: Failed to create output directory -> {}", staging.display())
    })?;

    let published = write(&staging).and_then(|_| {
        if target.exists() {
            std::fs::remove_dir_all(target).with_context(|| {
                format!("ERROR: cannot replace previous report -> {}", target.display())
            })?;
        }
        std::fs::rename(&staging, target)
            .with_context(|| format!("ERROR: cannot move report into {}", target.display()))
    });

    if published.is_err() && staging.exists() {
        if let Err(e) = std::fs::remove_dir_all(&staging) {
            warn!("Cannot remove {}: {}", staging.display(), e);
        }
    }

    published
}

/// Writes the bundle of `report` into `<output>/Report-<sample>/`
pub fn write_report<P: AsRef<Path>>(
    output: P,
    report: &Report,
    config: ClassifierConfig,
) -> Result<PathBuf> {
    let dir = output
        .as_ref()
        .join(format!("{}{}", REPORT_PREFIX, report.sample));

    let aggregate = &report.aggregate;
    let classification = &report.classification;

    publish_dir(&dir, |staging| {
        write_lines(
            fusion_table(aggregate.sorted_fusions(), aggregate, classification),
            staging.join(FUSIONS),
        )?;
        write_lines(
            fusion_table(&report.filter.fusions, aggregate, classification),
            staging.join(FILTERED_FUSIONS),
        )?;

        write_json(
            &SummaryFile {
                sample: &report.sample,
                tools: aggregate.tools(),
                tool_cutoff: config.min_tools,
                filter_disabled: report.filter.disabled,
                filtered: report.filter.fusions.len(),
                summary: &report.summary,
            },
            staging.join(SUMMARY),
        )?;
        write_json(
            &known_details(aggregate, classification),
            staging.join(KNOWN_FUSIONS),
        )
    })?;

    info!("Report bundle published in {}", dir.display());
    Ok(dir)
}
