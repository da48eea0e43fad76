use palette::{Hsl, IntoColor, Srgb};
use plotters::style::{RGBAColor, RGBColor};

/// Opacity of the scatter markers.
pub const MARKER_ALPHA: f64 = 0.7;

// ---------------------------------------------------------------------------
// Palette → plotters colour
// ---------------------------------------------------------------------------

/// Convert a palette sRGB colour into a plotters colour.
pub fn to_rgb(color: Srgb) -> RGBColor {
    let c: Srgb<u8> = color.into_format();
    RGBColor(c.red, c.green, c.blue)
}

/// Marker colour of the absorbance series: saturated blue, partially
/// transparent so dense regions read darker.
pub fn series_color() -> RGBAColor {
    let hsl = Hsl::new(240.0, 1.0, 0.5);
    let rgb: Srgb = hsl.into_color();
    let RGBColor(r, g, b) = to_rgb(rgb);
    RGBAColor(r, g, b, MARKER_ALPHA)
}
