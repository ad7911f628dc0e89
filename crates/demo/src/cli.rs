// File: crates/demo/src/cli.rs
// Summary: Command-line surface of the `fitchart` binary.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::config::Overrides;
use crate::decode::InputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Chart the metrics and route of a fitness activity file", long_about = None)]
pub struct Cli {
    /// Debug-level logging (RUST_LOG still wins when set)
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render one PNG per metric plus the route as CSV
    Render(RenderArgs),
    /// Summarise an activity file: records, time span, field coverage, route bounds
    Inspect(InspectArgs),
}

#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Activity file (.fit or .csv)
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "charts", value_hint = ValueHint::DirPath)]
    pub out: PathBuf,

    /// Input format (defaults to the file extension)
    #[arg(long, value_enum)]
    pub format: Option<InputFormat>,

    /// TOML settings file
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Colour theme (dark, light, solarized-dark, solarized-light, high-contrast-dark)
    #[arg(long)]
    pub theme: Option<String>,

    /// Panel width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Panel height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Thin each line to at most this many vertices before drawing
    #[arg(long)]
    pub max_points: Option<usize>,

    /// Only these metrics, comma separated field names (e.g. speed,heart_rate)
    #[arg(long, value_delimiter = ',')]
    pub metrics: Vec<String>,

    /// Also write every panel stacked into activity.png
    #[arg(long, action = ArgAction::SetTrue)]
    pub stacked: bool,

    /// Skip captions and tick labels
    #[arg(long, action = ArgAction::SetTrue)]
    pub no_labels: bool,
}

impl RenderArgs {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            theme: self.theme.clone(),
            width: self.width,
            height: self.height,
            max_points: self.max_points,
            stacked: self.stacked,
            no_labels: self.no_labels,
            metrics: self.metrics.clone(),
        }
    }
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Activity file (.fit or .csv)
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Input format (defaults to the file extension)
    #[arg(long, value_enum)]
    pub format: Option<InputFormat>,
}
