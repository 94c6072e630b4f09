//! Core value types shared by the drag scroller and the color converter.

/// An axis-aligned rectangle in pointer coordinates.
///
/// The left and top edges are inclusive, the right and bottom edges exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    /// Left edge.
    pub left: i32,

    /// Top edge.
    pub top: i32,

    /// Width in pointer units.
    pub width: i32,

    /// Height in pointer units.
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle.
    #[inline]
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Exclusive right edge.
    #[inline]
    pub const fn right(&self) -> i32 {
        self.left.saturating_add(self.width)
    }

    /// Exclusive bottom edge.
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.top.saturating_add(self.height)
    }

    /// Returns true if the position lies within the rectangle.
    #[inline]
    pub const fn contains(&self, position: PointerPosition) -> bool {
        position.x >= self.left
            && position.x < self.right()
            && position.y >= self.top
            && position.y < self.bottom()
    }
}

/// Pointer coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    /// Creates a new position.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A pointer event delivered to a drag scroller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PointerEvent {
    /// Button pressed over the surface.
    Down(PointerPosition),

    /// Pointer moved.
    Move(PointerPosition),

    /// Button released.
    Up(PointerPosition),
}

impl PointerEvent {
    /// Position carried by the event.
    #[inline]
    pub const fn position(&self) -> PointerPosition {
        match self {
            PointerEvent::Down(p) | PointerEvent::Move(p) | PointerEvent::Up(p) => *p,
        }
    }
}

/// A hue/saturation/lightness color.
///
/// Hue is in degrees (`0.0..=360.0`), saturation and lightness in `0.0..=1.0`.
/// Values are stored as given; see [`crate::colors`] for how out-of-domain
/// components are treated.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

impl Hsl {
    /// Creates a new HSL color.
    #[inline]
    pub const fn new(hue: f32, saturation: f32, lightness: f32) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Checks that every component lies in its documented domain.
    pub fn validate(&self) -> Result<(), ColorError> {
        if !(0.0..=360.0).contains(&self.hue) {
            return Err(ColorError::HueOutOfRange);
        }
        if !(0.0..=1.0).contains(&self.saturation) {
            return Err(ColorError::SaturationOutOfRange);
        }
        if !(0.0..=1.0).contains(&self.lightness) {
            return Err(ColorError::LightnessOutOfRange);
        }
        Ok(())
    }
}

/// Color component validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ColorError {
    /// Hue outside 0-360 degrees, or NaN.
    HueOutOfRange,

    /// Saturation outside 0.0-1.0, or NaN.
    SaturationOutOfRange,

    /// Lightness outside 0.0-1.0, or NaN.
    LightnessOutOfRange,
}

impl core::fmt::Display for ColorError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ColorError::HueOutOfRange => {
                write!(f, "hue must be between 0 and 360 degrees")
            }
            ColorError::SaturationOutOfRange => {
                write!(f, "saturation must be between 0.0 and 1.0")
            }
            ColorError::LightnessOutOfRange => {
                write!(f, "lightness must be between 0.0 and 1.0")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ColorError {}
