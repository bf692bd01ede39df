use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::render::{PlotKind, PlotSpec};

/// Plot data from delimited tabular files.
#[derive(Parser, Debug)]
#[command(name = "tabplot", version, about = "Plot data from files")]
pub struct Args {
    /// Input data file(s)
    #[arg(short, long, num_args = 1.., required = true)]
    pub input: Vec<PathBuf>,

    /// Column name for x-axis
    #[arg(short = 'x', long)]
    pub xcolumn: String,

    /// Column name for y-axis
    #[arg(short = 'y', long)]
    pub ycolumn: String,

    /// Output SVG file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Type of plot: line, bar, scatter, pie
    #[arg(short = 't', long = "type", value_name = "KIND")]
    pub kind: String,
}

impl Args {
    /// Validate the plot-kind token and build the immutable run spec.
    pub fn plot_spec(self) -> Result<PlotSpec> {
        let kind: PlotKind = self.kind.parse()?;
        Ok(PlotSpec {
            inputs: self.input,
            x_column: self.xcolumn,
            y_column: self.ycolumn,
            output: self.output,
            kind,
        })
    }
}
