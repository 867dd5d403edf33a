use indicatif::{ProgressBar, ProgressStyle};
use thiserror::Error;

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::Tool;

// os
#[cfg(not(windows))]
const TICK_SETTINGS: (&str, u64) = ("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏ ", 80);
#[cfg(windows)]
const TICK_SETTINGS: (&str, u64) = (r"+-x| ", 200);

/// return a pre-configured progress bar
pub fn get_progress_bar(length: u64, msg: &str) -> ProgressBar {
    let progressbar_style = ProgressStyle::default_spinner()
        .tick_chars(TICK_SETTINGS.0)
        .template(" {spinner} {msg:<30} {wide_bar} {pos}/{len} ETA {eta_precise} ")
        .unwrap_or_else(|_| ProgressStyle::default_bar());

    let progress_bar = ProgressBar::new(length);

    progress_bar.set_style(progressbar_style);
    progress_bar.enable_steady_tick(Duration::from_millis(TICK_SETTINGS.1));
    progress_bar.set_message(msg.to_owned());

    progress_bar
}

/// write any collection of lines to a file
pub fn write_lines<P, I, S>(lines: I, fname: P) -> std::io::Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut writer = BufWriter::new(File::create(fname.as_ref())?);
    let mut count = 0;

    for line in lines {
        writeln!(writer, "{}", line.as_ref())?;
        count += 1;
    }
    writer.flush()?;

    log::info!("Lines in {}: {}", fname.as_ref().display(), count);
    Ok(())
}

/// argument checker for fusion-report runs
pub trait ArgCheck {
    fn check(&self) -> Result<(), CliError> {
        self.validate_args()
    }

    fn validate_args(&self) -> Result<(), CliError> {
        self.check_inputs()?;
        self.check_reference()?;

        Ok(())
    }

    fn check_inputs(&self) -> Result<(), CliError> {
        let supplied = self
            .get_inputs()
            .into_iter()
            .filter_map(|(tool, path)| path.filter(|p| !is_blank(p)).map(|p| (tool, p)))
            .collect::<Vec<_>>();

        if supplied.is_empty() {
            let err = "No fusion tool output provided".to_string();
            return Err(CliError::InvalidInput(err));
        }

        for (tool, path) in supplied {
            log::info!("Using {} output: {}", tool, path.display());
            validate(path)?;
        }

        Ok(())
    }

    fn check_reference(&self) -> Result<(), CliError> {
        validate(self.get_reference())
    }

    fn get_inputs(&self) -> Vec<(Tool, Option<&PathBuf>)>;
    fn get_reference(&self) -> &PathBuf;
}

/// error handling for CLI
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// an empty path string stands for "no output from this tool"
pub fn is_blank(arg: &Path) -> bool {
    arg.as_os_str().to_string_lossy().trim().is_empty()
}

/// argument validation
pub fn validate(arg: &PathBuf) -> Result<(), CliError> {
    if !arg.exists() {
        return Err(CliError::InvalidInput(format!(
            "ERROR: {:?} does not exist",
            arg
        )));
    }

    if !arg.is_file() {
        return Err(CliError::InvalidInput(format!(
            "ERROR: {:?} is not a file",
            arg
        )));
    }

    match std::fs::metadata(arg) {
        Ok(metadata) if metadata.len() == 0 => {
            log::warn!("File {:?} is empty, it will contribute no fusions", arg);
            Ok(())
        }
        Ok(_) => Ok(()),
        Err(e) => Err(CliError::IoError(e)),
    }
}
