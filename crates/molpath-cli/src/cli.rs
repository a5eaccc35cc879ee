use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "molpath CLI - Builds atom-bond, bond-angle, and dihedral feature graphs from molecule description files.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the graph stack for each input molecule and export feature
    /// matrices as CSV.
    Build(BuildArgs),
}

/// Arguments for the `build` subcommand.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Input molecule description files (TOML), one molecule per file.
    #[arg(short, long, required = true, value_name = "PATH", num_args = 1..)]
    pub input: Vec<PathBuf>,

    /// Output directory; one subdirectory is created per molecule.
    #[arg(short, long, required = true, value_name = "DIR")]
    pub output: PathBuf,

    /// Pipeline configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Configuration Overrides ---
    /// Override the chemistry-oracle descriptor scheme (e.g. 'basic').
    #[arg(long, value_name = "NAME")]
    pub atom_scheme: Option<String>,

    /// Override the triangle descriptor mode ('dim_8' or 'dim_10').
    #[arg(long, value_name = "MODE")]
    pub triangle_mode: Option<String>,

    /// Override the torsion descriptor mode ('dim_6').
    #[arg(long, value_name = "MODE")]
    pub dihedral_mode: Option<String>,

    /// Override the non-bonded distance cutoff in Angstrom.
    #[arg(long, value_name = "FLOAT")]
    pub cutoff: Option<f64>,

    /// Override the atom-count ceiling.
    #[arg(long, value_name = "INT")]
    pub max_atoms: Option<usize>,
}
