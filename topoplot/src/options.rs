use clap::Parser;
use std::path::PathBuf;

/// Fetch an elevation grid and plot its west-to-east profiles.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// URL of the comma-separated elevation grid.
    #[arg(long, default_value = "http://bit.ly/csdms_topo")]
    pub url: String,

    /// Read the grid from a local file instead of fetching.
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output image path, overwritten if present.
    #[arg(short, long, default_value = "profiles.png")]
    pub out: PathBuf,

    /// Also draw the chart in the terminal after saving.
    #[arg(long, default_value_t = false)]
    pub display: bool,

    /// Print the profiles as JSON to stdout instead of plotting.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Run the pipeline with f32 elevations.
    #[arg(long = "f32", default_value_t = false)]
    pub use_f32: bool,
}
