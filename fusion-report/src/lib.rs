//! Core module for aggregating fusions called by several tools
//! Alejandro Gonzales-Irribarren, 2025
//!
//! This module contains the engine behind a multi-tool fusion report:
//! the outputs of every supplied caller are parsed into canonical calls,
//! merged into one record per directional gene pair, and each pair is
//! classified as known or unknown against a reference fusion table.
//!
//! In short, a fusion reported by several tools keeps the evidence of
//! every one of them, the number of agreeing tools is its detection
//! count, and a tool-count cutoff decides what is shown by default.
//! If the cutoff is stricter than any observed agreement, the filter
//! is dropped instead of hiding every fusion. The results (tables,
//! summary counts and per-tool details of known fusions) are written
//! as a bundle for the report renderer.

pub mod aggregate;
pub mod classify;
pub mod cli;
pub mod core;
pub mod progress;
pub mod reference;
pub mod stats;
pub mod utils;

pub use aggregate::{AggregatedFusion, FusionAggregate};
pub use classify::{
    classify, filter_by_tool_count, Classification, Classifier, ClassifierConfig, ToolFilter,
};
pub use crate::core::{build_report, generate_report, parse_inputs, Report};
pub use progress::{render_bar, BarProgress, NoProgress, Progress, TextProgress};
pub use reference::{LookupError, ReferenceLookup, ReferenceTable};
pub use stats::Summary;
