use clap::{Args, Parser, Subcommand};
use lymburn::core::forcefield::cutoff::CutoffMode;
use lymburn::core::forcefield::evaluator::PotentialForm;
use std::path::PathBuf;
use std::str::FromStr;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Lymburn CLI - evaluate pairwise Lymburn repulsion forces and energies for particle systems.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel evaluation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute per-particle forces and energies for a system.
    Evaluate(EvaluateArgs),
    /// Validate a potential file, optionally against the types of a system.
    Check(CheckArgs),
    /// Tabulate energy and radial force of one type pair over a range of distances.
    Profile(ProfileArgs),
}

/// Command-line overrides applied on top of the potential file.
#[derive(Args, Debug, Clone, Default)]
pub struct PotentialOverrides {
    /// Override the cutoff smoothing mode (none, shift, xplor).
    #[arg(long, value_name = "MODE")]
    pub mode: Option<CutoffMode>,

    /// Override the functional form (logarithmic, inverse-r).
    #[arg(long, value_name = "FORM")]
    pub form: Option<PotentialForm>,

    /// Override the global cutoff radius.
    #[arg(long, value_name = "FLOAT")]
    pub r_cut: Option<f64>,

    /// Override the global switch-on radius used by xplor smoothing.
    #[arg(long, value_name = "FLOAT")]
    pub r_on: Option<f64>,
}

#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Path to the potential file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub config: PathBuf,

    /// Path to the system file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub system: PathBuf,

    /// Write per-particle forces as CSV to this file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: PotentialOverrides,

    /// Evaluate pairs on the calling thread only.
    #[arg(long)]
    pub serial: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the potential file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub config: PathBuf,

    /// Check pair coverage against the types of this system instead of the types named in the potential file.
    #[arg(short, long, value_name = "PATH")]
    pub system: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: PotentialOverrides,
}

#[derive(Args, Debug)]
pub struct ProfileArgs {
    /// Path to the potential file in TOML format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub config: PathBuf,

    /// Type pair to tabulate, e.g. `A,B`.
    #[arg(long, required = true, value_name = "A,B")]
    pub pair: TypePairArg,

    /// Number of evenly spaced sample distances.
    #[arg(long, default_value_t = 101, value_name = "INT")]
    pub points: usize,

    /// Smallest sampled distance. Defaults to one sample step.
    #[arg(long, value_name = "FLOAT")]
    pub r_min: Option<f64>,

    /// Largest sampled distance. Defaults to 1.25 times the pair cutoff.
    #[arg(long, value_name = "FLOAT")]
    pub r_max: Option<f64>,

    /// Write the table as CSV to this file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: PotentialOverrides,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypePairArg {
    pub type_a: String,
    pub type_b: String,
}

impl FromStr for TypePairArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (a, b) = s
            .split_once(',')
            .ok_or_else(|| format!("expected two comma-separated type names, got '{}'", s))?;
        let (a, b) = (a.trim(), b.trim());
        if a.is_empty() || b.is_empty() || b.contains(',') {
            return Err(format!(
                "expected two comma-separated type names, got '{}'",
                s
            ));
        }
        Ok(Self {
            type_a: a.to_string(),
            type_b: b.to_string(),
        })
    }
}
