use clap::{Args, Parser, Subcommand, ValueEnum};
use hhcalc::core::schemes::{
    AdvectionScheme, DiffusionScheme, Hardware, MicrophysicsScheme, Mode, Precision,
    RadiationScheme, ThermoScheme,
};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "hhcalc - Estimate the number of 3D fields and the memory footprint of a MicroHH simulation.",
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
    /// Count the 3D fields of a setup and estimate its memory footprint.
    Estimate(EstimateArgs),
    /// Check whether a grid can be split evenly over an npx × npy process grid.
    Validate(ValidateArgs),
    /// List the scheme options each simulation mode offers.
    Options(OptionsArgs),
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable summary.
    #[default]
    Text,
    /// Machine-readable TOML document.
    Toml,
}

/// Arguments for the `estimate` subcommand.
#[derive(Args, Debug, Default)]
pub struct EstimateArgs {
    /// Path to a setup file in TOML format. CLI flags override its values.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Grid ---
    /// Number of grid points in x.
    #[arg(long, value_name = "INT")]
    pub itot: Option<u64>,

    /// Number of grid points in y.
    #[arg(long, value_name = "INT")]
    pub jtot: Option<u64>,

    /// Number of grid points in z.
    #[arg(long, value_name = "INT")]
    pub ktot: Option<u64>,

    /// Number of processes (or GPUs) in x.
    #[arg(long, value_name = "INT")]
    pub npx: Option<u64>,

    /// Number of processes (or GPUs) in y.
    #[arg(long, value_name = "INT")]
    pub npy: Option<u64>,

    // --- Run setup ---
    /// Floating point precision (single, double).
    #[arg(short, long, value_name = "PRECISION")]
    pub precision: Option<Precision>,

    /// Hardware the model runs on (cpu, gpu).
    #[arg(long, value_name = "HARDWARE")]
    pub hardware: Option<Hardware>,

    /// Simulation mode (les, dns). Selects which schemes are available and their defaults.
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<Mode>,

    // --- Schemes ---
    /// Advection scheme (2, 4, 4m, 2i4, 2i5, 2i62).
    #[arg(long, value_name = "SCHEME")]
    pub advection: Option<AdvectionScheme>,

    /// Diffusion scheme (2, 4, smagorinsky, tke).
    #[arg(long, value_name = "SCHEME")]
    pub diffusion: Option<DiffusionScheme>,

    /// Thermodynamics (disabled, buoyancy, dry, moist).
    #[arg(long, value_name = "SCHEME")]
    pub thermo: Option<ThermoScheme>,

    /// Radiation scheme (disabled, rte-rrtmgp).
    #[arg(long, value_name = "SCHEME")]
    pub radiation: Option<RadiationScheme>,

    /// Microphysics scheme (disabled, single-moment-ice, double-moment-warm, double-moment-ice).
    #[arg(long, value_name = "SCHEME")]
    pub microphysics: Option<MicrophysicsScheme>,

    /// Number of additional passive scalars (0-100).
    #[arg(short = 'n', long, value_name = "INT")]
    pub scalars: Option<u32>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S decomposition.npx=8
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,

    /// Output format of the report.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    #[arg(long, required = true, value_name = "INT")]
    pub itot: u64,

    #[arg(long, required = true, value_name = "INT")]
    pub jtot: u64,

    #[arg(long, required = true, value_name = "INT")]
    pub ktot: u64,

    #[arg(long, default_value_t = 1, value_name = "INT")]
    pub npx: u64,

    #[arg(long, default_value_t = 1, value_name = "INT")]
    pub npy: u64,
}

/// Arguments for the `options` subcommand.
#[derive(Args, Debug)]
pub struct OptionsArgs {
    /// Only list the options of this mode.
    #[arg(short, long, value_name = "MODE")]
    pub mode: Option<Mode>,
}
