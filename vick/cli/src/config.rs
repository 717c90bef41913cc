use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};
use vick_config::labels::LabelOverridePolicy;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Render the objects the vick controller generates for a cell Service."
)]
pub(super) struct Cli {
    #[command(subcommand)]
    pub(super) commands: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Write the Deployment and Service generated for a vick Service as YAML.
    Render(RenderArgs),

    /// Print the labels every object generated for a vick Service carries.
    Labels(ServiceArgs),

    /// Print the names of the objects generated for a vick Service.
    Names(ServiceArgs),
}

#[derive(Args, Debug)]
pub(super) struct ServiceArgs {
    /// vick Service manifest, json or yaml.
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: PathBuf,

    /// Controller config file, json or yaml (defaults to `VICK_CONFIG_FILE`).
    #[arg(short = 'f', long, value_hint = ValueHint::FilePath)]
    pub config_file: Option<PathBuf>,

    /// How the Service's labels interact with reserved labels: `user-wins` or `reserved-wins`.
    ///
    /// Takes precedence over `VICK_LABEL_OVERRIDE` and the config file.
    #[arg(long)]
    pub label_override: Option<LabelOverridePolicy>,
}

#[derive(Args, Debug)]
pub(super) struct RenderArgs {
    #[command(flatten)]
    pub service: ServiceArgs,

    /// Write the manifests to this file instead of stdout.
    #[arg(short = 'o', long, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
