use palette::{Hsl, IntoColor, Srgb};
use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Color palette
// ---------------------------------------------------------------------------

/// Size of the fixed palette series and wedge colours cycle through.
pub const PALETTE_SIZE: usize = 20;

/// The fixed palette: 20 visually distinct colours from evenly spaced hues.
pub fn palette() -> Vec<RGBColor> {
    (0..PALETTE_SIZE)
        .map(|i| {
            let hue = (i as f32 / PALETTE_SIZE as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            RGBColor(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

/// Colour for the i-th series or wedge, wrapping modulo the palette size.
pub fn pick(palette: &[RGBColor], index: usize) -> RGBColor {
    palette[index % palette.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_twenty_distinct_colors() {
        let colors = palette();
        assert_eq!(colors.len(), PALETTE_SIZE);
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn pick_is_deterministic_and_wraps() {
        let colors = palette();
        assert_eq!(pick(&colors, 0), pick(&colors, PALETTE_SIZE));
        assert_eq!(pick(&colors, 23), pick(&colors, 3));
    }
}
