use anyhow::Result;
use config::{is_blank, Tool, PROGRESS_BAR_WIDTH};
use fusionparse::{parse, FusionCall, ParseError};
use log::{info, warn};
use rayon::prelude::*;

use std::path::{Path, PathBuf};

use crate::aggregate::FusionAggregate;
use crate::classify::{Classification, Classifier, ClassifierConfig, ToolFilter};
use crate::cli::Args;
use crate::progress::{BarProgress, NoProgress, Progress, TextProgress};
use crate::reference::{ReferenceLookup, ReferenceTable};
use crate::stats::Summary;
use crate::utils::write_report;

/// Everything the renderer needs from one run
#[derive(Debug)]
pub struct Report {
    pub sample: String,
    pub aggregate: FusionAggregate,
    pub classification: Classification,
    pub filter: ToolFilter,
    pub summary: Summary,
}

/// Runs the adapter of every supplied tool.
///
/// Adapters run in parallel; the first failing tool aborts the whole
/// batch so no partial set of calls ever reaches the aggregator.
pub fn parse_inputs<P>(
    inputs: &[(Tool, Option<P>)],
) -> Result<Vec<(Tool, Vec<FusionCall>)>, ParseError>
where
    P: AsRef<Path> + std::fmt::Debug + Sync,
{
    let supplied: Vec<(Tool, &P)> = inputs
        .iter()
        .filter_map(|(tool, path)| match path {
            Some(path) if !is_blank(path.as_ref()) => Some((*tool, path)),
            _ => {
                info!("No {} output provided, skipping...", tool);
                None
            }
        })
        .collect();

    supplied
        .par_iter()
        .map(|(tool, path)| parse(*tool, Some(path)).map(|calls| (*tool, calls)))
        .collect()
}

/// Parses, merges and classifies one sample.
pub fn build_report<P, L, R>(
    sample: &str,
    inputs: &[(Tool, Option<P>)],
    lookup: &L,
    classifier: &Classifier,
    progress: &R,
) -> Result<Report>
where
    P: AsRef<Path> + std::fmt::Debug + Sync,
    L: ReferenceLookup + ?Sized,
    R: Progress + ?Sized,
{
    let calls = parse_inputs(inputs)?;
    let aggregate = FusionAggregate::aggregate(calls);
    info!(
        "Fusions aggregated from {} tools: {}",
        aggregate.tools().len(),
        aggregate.len()
    );

    let classification = classifier.classify(&aggregate, lookup, progress)?;
    let filter = classifier.filter(&aggregate);
    let summary = Summary::new(&aggregate, &classification);

    Ok(Report {
        sample: sample.to_string(),
        aggregate,
        classification,
        filter,
        summary,
    })
}

/// CLI entry: builds the report of `args.sample` and writes its bundle.
pub fn generate_report(args: Args) -> Result<PathBuf> {
    info!("Preparing fusion report for sample {}...", args.sample);

    let reference = ReferenceTable::from_path(&args.database)?;
    let classifier = Classifier::new(ClassifierConfig {
        min_tools: args.tool_num,
    });

    let inputs: Vec<(Tool, Option<PathBuf>)> = args
        .inputs()
        .into_iter()
        .map(|(tool, path)| (tool, path.cloned()))
        .collect();

    let report = if args.no_progress {
        build_report(&args.sample, &inputs, &reference, &classifier, &NoProgress)?
    } else if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        let progress = BarProgress::new(0, "Classifying fusions...");
        build_report(&args.sample, &inputs, &reference, &classifier, &progress)?
    } else {
        let progress = TextProgress::new(PROGRESS_BAR_WIDTH);
        build_report(&args.sample, &inputs, &reference, &classifier, &progress)?
    };

    if report.aggregate.is_empty() {
        warn!("No fusions were found in any of the supplied outputs");
    }

    let dir = write_report(&args.output, &report, classifier.config())?;
    info!(
        "The report for sample {} was generated in {}",
        report.sample,
        dir.display()
    );

    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::LookupError;
    use fusionparse::GenePair;
    use std::io::Write;

    const PIZZLY_HEADER: &str =
        "geneA.name\tgeneA.id\tgeneB.name\tgeneB.id\tpaircount\tsplitcount\ttranscripts.list";

    fn pizzly(rows: &[&str]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}", PIZZLY_HEADER).unwrap();
        for row in rows {
            writeln!(file, "{}", row).unwrap();
        }
        file
    }

    #[test]
    fn test_parse_inputs_skips_absent_tools() {
        let file = pizzly(&["ABC\tE1\tXYZ\tE2\t3\t1\tT1"]);
        let inputs = vec![
            (Tool::EricScript, None),
            (Tool::Pizzly, Some(file.path().to_path_buf())),
            (Tool::Squid, Some(PathBuf::from(""))),
        ];

        let calls = parse_inputs(&inputs).unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, Tool::Pizzly);
        assert_eq!(calls[0].1.len(), 1);
    }

    #[test]
    fn test_build_report_aborts_on_format_error() {
        let good = pizzly(&["ABC\tE1\tXYZ\tE2\t3\t1\tT1"]);
        let mut bad = tempfile::NamedTempFile::new().unwrap();
        writeln!(bad, "#FusionName\tJunctionReadCount").unwrap();
        writeln!(bad, "ABC--XYZ\t3").unwrap();

        let inputs = vec![
            (Tool::StarFusion, Some(bad.path().to_path_buf())),
            (Tool::Pizzly, Some(good.path().to_path_buf())),
        ];
        let reference = ReferenceTable::default();

        let err = build_report(
            "S1",
            &inputs,
            &reference,
            &Classifier::default(),
            &NoProgress,
        )
        .unwrap_err();

        let format = err.downcast_ref::<ParseError>().unwrap();
        assert!(matches!(format, ParseError::Format(e) if e.tool == Tool::StarFusion));
    }

    #[test]
    fn test_build_report_aborts_on_lookup_error() {
        let file = pizzly(&["ABC\tE1\tXYZ\tE2\t3\t1\tT1"]);
        let inputs = vec![(Tool::Pizzly, Some(file.path().to_path_buf()))];
        let lookup = |pair: &GenePair| -> Result<bool, LookupError> {
            Err(LookupError::Unavailable {
                pair: pair.to_string(),
                reason: "database is locked".to_string(),
            })
        };

        let err = build_report("S1", &inputs, &lookup, &Classifier::default(), &NoProgress)
            .unwrap_err();
        assert!(err.downcast_ref::<LookupError>().is_some());
    }
}
