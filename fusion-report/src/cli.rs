use clap::{ArgAction, Parser};
use config::{ArgCheck, CliError, Tool, TOOL_DETECTION_CUTOFF, VERSION};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "fusion-report")]
#[command(about = "Aggregate fusions from several callers into one report bundle")]
#[command(version = VERSION)]
pub struct Args {
    #[arg(long = "ericscript", value_name = "PATH", help = "EricScript output file")]
    pub ericscript: Option<PathBuf>,

    #[arg(long = "starfusion", value_name = "PATH", help = "STAR-Fusion output file")]
    pub starfusion: Option<PathBuf>,

    #[arg(
        long = "fusioncatcher",
        value_name = "PATH",
        help = "FusionCatcher output file"
    )]
    pub fusioncatcher: Option<PathBuf>,

    #[arg(long = "pizzly", value_name = "PATH", help = "Pizzly output file")]
    pub pizzly: Option<PathBuf>,

    #[arg(long = "squid", value_name = "PATH", help = "SQUID output file")]
    pub squid: Option<PathBuf>,

    #[arg(
        short = 's',
        long = "sample",
        required = true,
        value_name = "NAME",
        help = "Sample name"
    )]
    pub sample: String,

    #[arg(
        short = 'o',
        long = "output",
        required = true,
        value_name = "PATH",
        help = "Output directory"
    )]
    pub output: PathBuf,

    #[arg(
        short = 'd',
        long = "database",
        required = true,
        value_name = "PATH",
        help = "Reference fusion table [h_gene, t_gene, ...]"
    )]
    pub database: PathBuf,

    #[arg(
        short = 't',
        long = "tool-num",
        value_name = "N",
        help = "Number of tools required to detect a fusion",
        default_value_t = TOOL_DETECTION_CUTOFF
    )]
    pub tool_num: usize,

    #[arg(
        long = "threads",
        help = "Number of threads",
        value_name = "THREADS",
        default_value_t = num_cpus::get()
    )]
    pub threads: usize,

    #[arg(
        long = "no-progress",
        help = "Flag to hide the progress bar",
        value_name = "FLAG",
        default_missing_value("true"),
        default_value("false"),
        num_args(0..=1),
        require_equals(true),
        action = ArgAction::Set,
    )]
    pub no_progress: bool,
}

impl ArgCheck for Args {
    fn validate_args(&self) -> Result<(), CliError> {
        self.check_inputs()?;
        self.check_reference()?;

        if self.tool_num < 1 {
            let err = "--tool-num must be at least 1".to_string();
            return Err(CliError::InvalidInput(err));
        }

        if self.sample.trim().is_empty() {
            let err = "--sample cannot be empty".to_string();
            return Err(CliError::InvalidInput(err));
        }

        Ok(())
    }

    fn get_inputs(&self) -> Vec<(Tool, Option<&PathBuf>)> {
        self.inputs()
    }

    fn get_reference(&self) -> &PathBuf {
        &self.database
    }
}

impl Args {
    pub fn from(args: Vec<String>) -> Self {
        let mut full_args = vec![env!("CARGO_PKG_NAME").to_string()];
        full_args.extend(args);

        Args::parse_from(full_args)
    }

    /// every supported tool with the path given for it, in tool order
    pub fn inputs(&self) -> Vec<(Tool, Option<&PathBuf>)> {
        Tool::ALL
            .iter()
            .map(|tool| {
                let path = match tool {
                    Tool::EricScript => self.ericscript.as_ref(),
                    Tool::StarFusion => self.starfusion.as_ref(),
                    Tool::FusionCatcher => self.fusioncatcher.as_ref(),
                    Tool::Pizzly => self.pizzly.as_ref(),
                    Tool::Squid => self.squid.as_ref(),
                };
                (*tool, path)
            })
            .collect()
    }
}
