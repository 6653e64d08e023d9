//! Unit conversion utilities.
//!
//! DrawingML measures everything in English Metric Units (EMU). Callers place
//! objects in pixels (96 DPI) and size lines in points.

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_PT: i64 = 12_700;
pub const DEFAULT_DPI: i64 = 96;

/// EMUs per pixel at the default 96 DPI (914400 / 96).
pub const EMUS_PER_PIXEL: i64 = EMUS_PER_INCH / DEFAULT_DPI;

/// Line width used when a series line width is left at zero (2 pt).
pub const DEFAULT_LINE_WIDTH_EMU: i64 = 25_400;

#[inline]
pub fn pt_to_emu_f64(pt: f64) -> i64 {
    (pt * EMUS_PER_PT as f64) as i64
}

/// Convert a line width in points, treating zero as "use the default width".
#[inline]
pub fn line_width_to_emu(pt: f64) -> i64 {
    if pt == 0.0 {
        DEFAULT_LINE_WIDTH_EMU
    } else {
        pt_to_emu_f64(pt)
    }
}

#[inline]
pub fn px_to_emu(px: i64) -> i64 {
    px.saturating_mul(EMUS_PER_PIXEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_factor_is_bit_exact() {
        assert_eq!(EMUS_PER_PIXEL, 9525);
        assert_eq!(px_to_emu(15), 142_875);
    }

    #[test]
    fn test_line_width_defaults_on_zero() {
        assert_eq!(line_width_to_emu(0.0), 25_400);
        assert_eq!(line_width_to_emu(1.5), 19_050);
    }
}
