use std::io::Write;
use std::path::{Path, PathBuf};

use config::{ArgCheck, Tool, FILTERED_FUSIONS, FUSIONS, KNOWN_FUSIONS, SUMMARY};
use fusion_report::cli::Args;
use fusion_report::{
    build_report, generate_report, Classifier, ClassifierConfig, NoProgress, ReferenceTable,
};
use fusionparse::GenePair;

const ERICSCRIPT_HEADER: &str = "GeneName1\tGeneName2\tchr1\tBreakpoint1\tstrand1\tchr2\tBreakpoint2\tstrand2\tEnsemblGene1\tEnsemblGene2\tcrossingreads\tspanningreads\tmean.insertsize\thomology\tfusiontype\tBlacklist\tInfraChromFusion\tJunctionSequence\tGeneExpr1\tGeneExpr2\tGeneExpr_Fused\tES\tGJS\tUS\tEricScore";
const STARFUSION_HEADER: &str = "#FusionName\tJunctionReadCount\tSpanningFragCount\tSpliceType\tLeftGene\tLeftBreakpoint\tRightGene\tRightBreakpoint\tLargeAnchorSupport\tFFPM";
const SQUID_HEADER: &str = "# chrom1\tstart1\tend1\tchrom2\tstart2\tend2\tname\tscore\tstrand1\tstrand2\tnum_concordantfrag_bp1\tnum_concordantfrag_bp2\tFusedGenes";

fn write(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    path
}

fn ericscript_row(head: &str, tail: &str) -> String {
    format!(
        "{}\t{}\t1\t100\t+\t2\t200\t-\tENSG1\tENSG2\t10\t5\t200\t\tinter-chromosomal\t\t0\tACGT\t1.5\t2.5\t0.5\t0.9\t0.8\t0.1\t0.95",
        head, tail
    )
}

fn starfusion_row(head: &str, tail: &str) -> String {
    format!(
        "{}--{}\t7\t3\tONLY_REF_SPLICE\t{}^E1\tchr1:100:+\t{}^E2\tchr2:200:-\tYES_LDAS\t0.75",
        head, tail, head, tail
    )
}

fn squid_row(genes: &str) -> String {
    format!("chr3\t10\t20\tchr4\t30\t40\t.\t12\t+\t-\t1\t2\t{}", genes)
}

fn args(extra: &[String]) -> Args {
    Args::from(extra.to_vec())
}

fn s<P: AsRef<Path>>(p: P) -> String {
    p.as_ref().to_str().unwrap().to_string()
}

#[test]
fn test_three_tool_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let ericscript = write(
        dir.path(),
        "ericscript.tsv",
        &[ERICSCRIPT_HEADER, &ericscript_row("ABC", "XYZ")],
    );
    let starfusion = write(
        dir.path(),
        "starfusion.tsv",
        &[STARFUSION_HEADER, &starfusion_row("ABC", "XYZ")],
    );
    let squid = write(dir.path(), "squid.txt", &[SQUID_HEADER, &squid_row("DEF:UVW")]);

    let inputs = vec![
        (Tool::EricScript, Some(ericscript)),
        (Tool::StarFusion, Some(starfusion)),
        (Tool::FusionCatcher, None),
        (Tool::Pizzly, None),
        (Tool::Squid, Some(squid)),
    ];
    let reference: ReferenceTable = vec![GenePair::new("ABC", "XYZ")].into_iter().collect();
    let classifier = Classifier::new(ClassifierConfig { min_tools: 2 });

    let report = build_report("S1", &inputs, &reference, &classifier, &NoProgress).unwrap();

    let abc = GenePair::new("ABC", "XYZ");
    let def = GenePair::new("DEF", "UVW");

    assert_eq!(report.aggregate.len(), 2);
    assert_eq!(report.aggregate.detection_count(&abc), 2);
    assert_eq!(report.aggregate.detection_count(&def), 1);

    assert_eq!(report.filter.fusions, vec![abc.clone()]);
    assert!(!report.filter.disabled);

    assert!(report.classification.known().contains(&abc));
    assert!(report.classification.unknown().contains(&def));
    assert_eq!(report.classification.len(), report.aggregate.len());

    assert_eq!(report.summary.total, 2);
    assert_eq!(report.summary.known, 1);
    assert_eq!(report.summary.unknown, 1);
    assert_eq!(report.summary.tool_totals.get(&Tool::Squid), Some(&1));
    assert_eq!(report.summary.tool_totals.get(&Tool::Pizzly), None);
}

#[test]
fn test_generate_report_writes_bundle() {
    let dir = tempfile::tempdir().unwrap();
    let ericscript = write(
        dir.path(),
        "ericscript.tsv",
        &[ERICSCRIPT_HEADER, &ericscript_row("BCR", "ABL1")],
    );
    let squid = write(
        dir.path(),
        "squid.txt",
        &[SQUID_HEADER, &squid_row("BCR:ABL1,ETV6:RUNX1")],
    );
    let reference = write(dir.path(), "reference.tsv", &["h_gene\tt_gene", "BCR\tABL1"]);
    let output = dir.path().join("out");

    let args = args(&[
        "--ericscript".into(),
        s(&ericscript),
        "--squid".into(),
        s(&squid),
        "-s".into(),
        "S1".into(),
        "-o".into(),
        s(&output),
        "-d".into(),
        s(&reference),
        "-t".into(),
        "4".into(),
        "--no-progress".into(),
    ]);
    assert!(args.check().is_ok());

    let bundle = generate_report(args).unwrap();
    assert_eq!(bundle, output.join("Report-S1"));

    let table = std::fs::read_to_string(bundle.join(FUSIONS)).unwrap();
    let lines: Vec<&str> = table.lines().collect();
    assert_eq!(lines[0], "#fusion\tericscript\tsquid\ttools\tknown");
    assert_eq!(lines[1], "BCR--ABL1\t1\t1\t2\t1");
    assert_eq!(lines[2], "ETV6--RUNX1\t0\t1\t1\t0");

    // cutoff of 4 is above every observed count, so nothing is hidden
    let filtered = std::fs::read_to_string(bundle.join(FILTERED_FUSIONS)).unwrap();
    assert_eq!(filtered, table);

    let summary: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(bundle.join(SUMMARY)).unwrap()).unwrap();
    assert_eq!(summary["sample"], "S1");
    assert_eq!(summary["filter_disabled"], true);
    assert_eq!(summary["total"], 2);
    assert_eq!(summary["known"], 1);
    assert_eq!(summary["tool_totals"]["squid"], 2);
    assert_eq!(summary["distribution"]["2"], 1);

    let known: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(bundle.join(KNOWN_FUSIONS)).unwrap())
            .unwrap();
    assert_eq!(known.as_array().unwrap().len(), 1);
    assert_eq!(known[0]["tools"]["squid"]["score"], 12);
}

#[test]
fn test_malformed_input_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let ericscript = write(
        dir.path(),
        "ericscript.tsv",
        &[ERICSCRIPT_HEADER, "ABC\tXYZ\t1\t100"],
    );
    let starfusion = write(
        dir.path(),
        "starfusion.tsv",
        &[STARFUSION_HEADER, &starfusion_row("ABC", "XYZ")],
    );
    let reference = write(dir.path(), "reference.tsv", &["ABC\tXYZ"]);
    let output = dir.path().join("out");

    let args = args(&[
        "--ericscript".into(),
        s(&ericscript),
        "--starfusion".into(),
        s(&starfusion),
        "-s".into(),
        "S1".into(),
        "-o".into(),
        s(&output),
        "-d".into(),
        s(&reference),
        "--no-progress".into(),
    ]);

    assert!(generate_report(args).is_err());
    assert!(!output.exists());
}

#[test]
fn test_report_replaces_stale_bundle_whole() {
    let dir = tempfile::tempdir().unwrap();
    let pizzly = write(
        dir.path(),
        "pizzly.tsv",
        &[
            "geneA.name\tgeneA.id\tgeneB.name\tgeneB.id\tpaircount\tsplitcount\ttranscripts.list",
            "ABC\tE1\tXYZ\tE2\t3\t1\tT1",
        ],
    );
    let reference = write(dir.path(), "reference.tsv", &["ABC\tXYZ"]);
    let output = dir.path().join("out");
    let stale = output.join("Report-S1");
    std::fs::create_dir_all(stale.join(KNOWN_FUSIONS)).unwrap();
    std::fs::write(stale.join("leftover.txt"), "old").unwrap();

    let args = args(&[
        "--pizzly".into(),
        s(&pizzly),
        "-s".into(),
        "S1".into(),
        "-o".into(),
        s(&output),
        "-d".into(),
        s(&reference),
        "--no-progress".into(),
    ]);

    let bundle = generate_report(args).unwrap();
    assert_eq!(bundle, stale);
    for name in [FUSIONS, FILTERED_FUSIONS, SUMMARY, KNOWN_FUSIONS] {
        assert!(bundle.join(name).is_file(), "{} missing", name);
    }
    assert!(!bundle.join("leftover.txt").exists());
    assert_eq!(std::fs::read_dir(&output).unwrap().count(), 1);
}
