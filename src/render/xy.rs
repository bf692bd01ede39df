use std::ops::Range;

use anyhow::Result;
use plotters::prelude::*;

use super::{PlotKind, PlotSpec};
use crate::color;
use crate::data::model::{Series, Table};

/// Wide presentation canvas shared by every non-pie plot kind.
const WIDTH: u32 = 1800;
const HEIGHT: u32 = 1000;

/// Overlay every input file on one shared canvas: connected markers for
/// line, rectangles from the zero line for bar, filled circles for scatter.
pub fn render_overlay(spec: &PlotSpec, tables: &[Table], kind: PlotKind) -> Result<()> {
    let series: Vec<Series> = tables
        .iter()
        .map(|t| t.xy_series(&spec.x_column, &spec.y_column))
        .collect::<Result<_, _>>()?;

    let (x_range, y_range) = axis_ranges(&series, kind);
    let colors = color::palette();

    let root = SVGBackend::new(&spec.output, (WIDTH, HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(40)
        .x_label_area_size(90)
        .y_label_area_size(110)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .x_desc(spec.x_column.as_str())
        .y_desc(spec.y_column.as_str())
        .axis_desc_style(("sans-serif", 30))
        .label_style(("sans-serif", 26))
        .draw()?;

    let bar_half = bar_half_width(&series);

    for (i, s) in series.iter().enumerate() {
        let color = color::pick(&colors, i);
        match kind {
            PlotKind::Line => {
                chart
                    .draw_series(
                        LineSeries::new(s.points.iter().copied(), color.stroke_width(2))
                            .point_size(5),
                    )?
                    .label(s.label.as_str())
                    .legend(move |(x, y)| {
                        PathElement::new(vec![(x, y), (x + 24, y)], color.stroke_width(2))
                    });
            }
            PlotKind::Bar => {
                chart
                    .draw_series(s.points.iter().map(|&(x, y)| {
                        let (y0, y1) = if y < 0.0 { (y, 0.0) } else { (0.0, y) };
                        Rectangle::new([(x - bar_half, y0), (x + bar_half, y1)], color.filled())
                    }))?
                    .label(s.label.as_str())
                    .legend(move |(x, y)| {
                        Rectangle::new([(x, y - 8), (x + 18, y + 8)], color.filled())
                    });
            }
            PlotKind::Scatter => {
                chart
                    .draw_series(s.points.iter().map(|&p| Circle::new(p, 5, color.filled())))?
                    .label(s.label.as_str())
                    .legend(move |(x, y)| Circle::new((x + 10, y), 5, color.filled()));
            }
            PlotKind::Pie => unreachable!("pie charts are rendered per input file"),
        }
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperMiddle)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .label_font(("sans-serif", 26))
        .draw()?;

    root.present()?;
    Ok(())
}

/// Data extents over every series, padded by 5%. Bar charts always include
/// the zero line in the y range.
fn axis_ranges(series: &[Series], kind: PlotKind) -> (Range<f64>, Range<f64>) {
    let mut x_min = f64::INFINITY;
    let mut x_max = f64::NEG_INFINITY;
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;

    for s in series {
        for &(x, y) in &s.points {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
    }

    if !x_min.is_finite() {
        // No points at all; an arbitrary unit window keeps the axes drawable.
        return (0.0..1.0, 0.0..1.0);
    }

    if kind == PlotKind::Bar {
        y_min = y_min.min(0.0);
        y_max = y_max.max(0.0);
    }

    (padded(x_min, x_max), padded(y_min, y_max))
}

fn padded(min: f64, max: f64) -> Range<f64> {
    let span = max - min;
    let pad = if span == 0.0 { 1.0 } else { span * 0.05 };
    (min - pad)..(max + pad)
}

/// Half of the bar width; bars span 80% of the smallest gap between
/// distinct x values.
fn bar_half_width(series: &[Series]) -> f64 {
    let mut xs: Vec<f64> = series
        .iter()
        .flat_map(|s| s.points.iter().map(|&(x, _)| x))
        .collect();
    xs.sort_by(f64::total_cmp);
    xs.dedup();

    let min_gap = xs
        .windows(2)
        .map(|w| w[1] - w[0])
        .fold(f64::INFINITY, f64::min);
    if min_gap.is_finite() {
        min_gap * 0.4
    } else {
        0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(points: Vec<(f64, f64)>) -> Series {
        Series {
            label: "s".to_string(),
            points,
        }
    }

    #[test]
    fn ranges_are_padded_around_extents() {
        let s = [series(vec![(0.0, 10.0), (10.0, 30.0)])];
        let (x, y) = axis_ranges(&s, PlotKind::Line);
        assert_eq!(x, -0.5..10.5);
        assert_eq!(y, 9.0..31.0);
    }

    #[test]
    fn bar_range_includes_zero() {
        let s = [series(vec![(0.0, 10.0), (1.0, 30.0)])];
        let (_, y) = axis_ranges(&s, PlotKind::Bar);
        assert!(y.start <= 0.0);
        assert!(y.end >= 30.0);
    }

    #[test]
    fn degenerate_range_is_widened() {
        let s = [series(vec![(2.0, 5.0)])];
        let (x, y) = axis_ranges(&s, PlotKind::Scatter);
        assert_eq!(x, 1.0..3.0);
        assert_eq!(y, 4.0..6.0);
    }

    #[test]
    fn bar_width_follows_smallest_x_gap() {
        let s = [
            series(vec![(0.0, 1.0), (4.0, 1.0)]),
            series(vec![(1.0, 2.0)]),
        ];
        assert_eq!(bar_half_width(&s), 0.4);
    }

    #[test]
    fn bar_width_falls_back_for_a_single_x() {
        let s = [series(vec![(3.0, 1.0)])];
        assert_eq!(bar_half_width(&s), 0.5);
    }
}
