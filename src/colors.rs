//! HSL to RGB conversion.
//!
//! [`hsl_to_rgb`] maps hue/saturation/lightness to 8-bit RGB by splitting the
//! hue circle into six 60-degree sectors. Within a sector one channel sits at
//! the maximum, one at the minimum, and the third is interpolated linearly
//! along the hue. All intermediate values are truncated toward zero, so
//! results can be one step lower than a rounding conversion would give. Use
//! [`hsl`] for the exact floating-point result.
//!
//! A hue outside `0.0..=360.0` (or NaN) produces black.

use crate::types::{ColorError, Hsl};
use palette::{FromColor, Srgb};

/// 8-bit RGB color.
pub type Rgb8 = Srgb<u8>;

/// Black, returned for out-of-range hues.
pub const BLACK: Rgb8 = Srgb::new(0, 0, 0);

/// Converts HSL components to raw RGB channel values.
///
/// Channels are not clamped. For saturation and lightness within
/// `0.0..=1.0` they land in `0..=255`; outside that domain they can leave it,
/// saturating at the `i32` bounds.
pub fn hsl_channels(hue: f32, saturation: f32, lightness: f32) -> [i32; 3] {
    if !(0.0..=360.0).contains(&hue) {
        return [0, 0, 0];
    }

    // Products of f32 inputs are exact in f64.
    let (h, s, l) = (hue as f64, saturation as f64, lightness as f64);
    let min = if l <= 0.5 {
        ((l - l * s) * 255.0) as i32
    } else {
        ((s * l + l - s) * 255.0) as i32
    };
    let max = ((2.0 * l * 255.0) as i32).saturating_sub(min);
    let span = max.saturating_sub(min) as f64;
    let min_f = min as f64;

    // Rising sectors interpolate from the sector start, falling sectors
    // back from the sector end.
    if h <= 60.0 {
        let mid = (((h / 60.0) * span) as i32).saturating_add(min);
        [max, mid, min]
    } else if h <= 120.0 {
        let mid = (-((h - 120.0) / 60.0) * span + min_f) as i32;
        [mid, max, min]
    } else if h <= 180.0 {
        let mid = (((h - 120.0) / 60.0) * span + min_f) as i32;
        [min, max, mid]
    } else if h <= 240.0 {
        let mid = (-((h - 240.0) / 60.0) * span + min_f) as i32;
        [min, mid, max]
    } else if h <= 300.0 {
        let mid = (((h - 240.0) / 60.0) * span + min_f) as i32;
        [mid, min, max]
    } else {
        let mid = (-((h - 360.0) / 60.0) * span + min_f) as i32;
        [max, min, mid]
    }
}

/// Creates an 8-bit RGB color from HSL components.
///
/// Channels outside `0..=255`, possible only for out-of-domain saturation or
/// lightness, saturate at the nearest bound.
pub fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Rgb8 {
    let [r, g, b] = hsl_channels(hue, saturation, lightness);
    Srgb::new(narrow(r), narrow(g), narrow(b))
}

/// Like [`hsl_to_rgb`], but rejects components outside their domain.
pub fn try_hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> Result<Rgb8, ColorError> {
    Hsl::new(hue, saturation, lightness).validate()?;
    Ok(hsl_to_rgb(hue, saturation, lightness))
}

/// Creates a floating-point RGB color from HSL components using `palette`.
///
/// Unlike [`hsl_to_rgb`] this neither truncates nor treats out-of-range hues
/// specially: hue wraps around the circle.
#[inline]
pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Srgb {
    let color: palette::Hsl = palette::Hsl::new(hue, saturation, lightness);
    Srgb::from_color(color)
}

#[inline]
fn narrow(channel: i32) -> u8 {
    channel.clamp(0, u8::MAX as i32) as u8
}

impl Hsl {
    /// Converts to 8-bit RGB with [`hsl_to_rgb`].
    #[inline]
    pub fn to_rgb(&self) -> Rgb8 {
        hsl_to_rgb(self.hue, self.saturation, self.lightness)
    }
}

impl From<Hsl> for Rgb8 {
    fn from(color: Hsl) -> Self {
        color.to_rgb()
    }
}
