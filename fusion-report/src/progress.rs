//! Progress observers for the classification pass.
//!
//! Reporting is best-effort output only: implementations swallow their
//! own failures and never influence the pass they observe.

use config::get_progress_bar;
use indicatif::ProgressBar;

use std::io::Write;

const FILL: char = '█';
const EMPTY: char = '-';

pub trait Progress {
    /// `current` units out of `total` are done
    fn report(&self, current: usize, total: usize);

    fn finish(&self) {}
}

/// Silent observer for tests and `--no-progress` runs
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {
    fn report(&self, _current: usize, _total: usize) {}
}

/// Spinner bar drawn by indicatif
pub struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    pub fn new(total: usize, msg: &str) -> Self {
        Self {
            bar: get_progress_bar(total as u64, msg),
        }
    }
}

impl Progress for BarProgress {
    fn report(&self, current: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(current as u64);
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// Plain text bar rewritten in place on stderr
#[derive(Debug, Clone, Copy)]
pub struct TextProgress {
    width: usize,
}

impl TextProgress {
    pub fn new(width: usize) -> Self {
        Self { width }
    }
}

impl Progress for TextProgress {
    fn report(&self, current: usize, total: usize) {
        let mut stderr = std::io::stderr();
        let _ = write!(stderr, "\r{}", render_bar(current, total, self.width));
        let _ = stderr.flush();
    }

    fn finish(&self) {
        let _ = writeln!(std::io::stderr());
    }
}

/// Pure projection of a progress state, e.g.
/// `Progress: |█████-----| 50.0% Complete`.
///
/// An empty workload renders as complete.
pub fn render_bar(current: usize, total: usize, width: usize) -> String {
    let (done, ratio) = if total == 0 {
        (width, 1.0)
    } else {
        let current = current.min(total);
        (width * current / total, current as f64 / total as f64)
    };

    let bar: String = std::iter::repeat(FILL)
        .take(done)
        .chain(std::iter::repeat(EMPTY).take(width - done))
        .collect();

    format!("Progress: |{}| {:.1}% Complete", bar, ratio * 100.0)
}
