use anyhow::Result;
use log::debug;
use plotters::prelude::*;

use super::PlotSpec;
use crate::color;
use crate::data::model::Table;

/// Square canvas; one figure per input file.
const SIZE: u32 = 1000;

/// Render one pie figure per input file, every iteration writing the same
/// output path. The final file therefore holds only the last input's chart.
pub fn render_pies(spec: &PlotSpec, tables: &[Table]) -> Result<()> {
    let colors = color::palette();

    for table in tables {
        let wedges = table.wedge_series(&spec.x_column, &spec.y_column)?;
        let wedge_colors: Vec<RGBColor> = (0..wedges.values.len())
            .map(|j| color::pick(&colors, j))
            .collect();

        let root = SVGBackend::new(&spec.output, (SIZE, SIZE)).into_drawing_area();
        root.fill(&WHITE)?;

        let caption = format!("{} Pie Chart", wedges.label);
        let inner = root.titled(&caption, ("sans-serif", 44))?;

        let (w, h) = inner.dim_in_pixel();
        let center = (w as i32 / 2, h as i32 / 2);
        let radius = f64::from(w.min(h)) * 0.35;

        let mut pie = Pie::new(
            &center,
            &radius,
            &wedges.values,
            &wedge_colors,
            &wedges.labels,
        );
        pie.start_angle(90.0);
        pie.label_style(("sans-serif", 30).into_font());
        pie.percentages(("sans-serif", 24).into_font().color(&BLACK));
        inner.draw(&pie)?;

        root.present()?;
        debug!("wrote pie for {}", wedges.label);
    }
    Ok(())
}
