//! Shared configuration for the fusion-report workspace
//! Alejandro Gonzales-Irribarren, 2025
//!
//! This crate holds the universal constants of the pipeline
//! (detection cutoff, output file names, per-tool column counts),
//! the closed registry of supported fusion callers and a few
//! quality of life helpers shared by the parsing and reporting
//! crates: progress bars, argument validation and line writers.

pub mod fns;
pub mod tool;

pub use fns::*;
pub use tool::Tool;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// numeric values
pub const TOOL_DETECTION_CUTOFF: usize = 2; // minimum tools agreeing on a fusion
pub const PROGRESS_BAR_WIDTH: usize = 50;
pub const MIN_THREADS: usize = 1;

// minimum number of columns per tool output
pub const MIN_ERICSCRIPT_FIELDS: usize = 22;
pub const MIN_STARFUSION_FIELDS: usize = 10;
pub const MIN_FUSIONCATCHER_FIELDS: usize = 16;
pub const MIN_PIZZLY_FIELDS: usize = 6;
pub const MIN_SQUID_FIELDS: usize = 13;

// separators
pub const FUSION_SEPARATOR: &str = "--";
pub const POSITION_SEPARATOR: &str = "#";
pub const DELIMITER: char = '\t';

// file names
pub const REPORT_PREFIX: &str = "Report-";
pub const FUSIONS: &str = "fusions.txt";
pub const FILTERED_FUSIONS: &str = "fusions.filtered.txt";
pub const SUMMARY: &str = "summary.json";
pub const KNOWN_FUSIONS: &str = "known.json";
