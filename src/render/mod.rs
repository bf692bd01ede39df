/// Render layer: one explicit drawing context per run, no global figure
/// state. Line/bar/scatter overlay every input on a shared canvas; pie
/// renders one figure per input.
pub mod pie;
pub mod xy;

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Result;
use log::{info, warn};
use thiserror::Error;

use crate::data::loader;
use crate::data::model::Table;

// ---------------------------------------------------------------------------
// Plot kind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    Line,
    Bar,
    Scatter,
    Pie,
}

#[derive(Debug, Error)]
#[error("unsupported plot type: {0}")]
pub struct UnsupportedPlotKind(String);

impl FromStr for PlotKind {
    type Err = UnsupportedPlotKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(PlotKind::Line),
            "bar" => Ok(PlotKind::Bar),
            "scatter" => Ok(PlotKind::Scatter),
            "pie" => Ok(PlotKind::Pie),
            other => Err(UnsupportedPlotKind(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Plot spec
// ---------------------------------------------------------------------------

/// Configuration for one render run. Immutable once built from the CLI.
#[derive(Debug, Clone)]
pub struct PlotSpec {
    pub inputs: Vec<PathBuf>,
    pub x_column: String,
    pub y_column: String,
    pub output: PathBuf,
    pub kind: PlotKind,
}

/// Load every input and render according to the plot kind.
pub fn render(spec: &PlotSpec) -> Result<()> {
    let tables: Vec<Table> = spec
        .inputs
        .iter()
        .map(|path| loader::load_table(path))
        .collect::<Result<_>>()?;
    info!("loaded {} input file(s)", tables.len());
    for table in &tables {
        if table.is_empty() {
            warn!("{} has no data rows", table.label());
        }
    }

    match spec.kind {
        PlotKind::Pie => pie::render_pies(spec, &tables)?,
        kind => xy::render_overlay(spec, &tables, kind)?,
    }
    info!("wrote {}", spec.output.display());
    Ok(())
}
