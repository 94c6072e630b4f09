//! Scrollable surface abstraction.

use crate::types::Rect;

/// Trait for abstracting a scrollable container.
///
/// Implement this for your UI element (a DOM node, a widget, a terminal pane)
/// to let a [`DragScroller`](crate::DragScroller) move its vertical offset.
pub trait ScrollSurface {
    /// Current vertical scroll offset.
    fn scroll_offset(&self) -> i32;

    /// Sets the vertical scroll offset.
    ///
    /// Implementations may clamp the value to their scrollable range.
    fn set_scroll_offset(&mut self, offset: i32);

    /// Bounding rectangle in the coordinate space of incoming pointer events.
    fn bounds(&self) -> Rect;
}

impl<S: ScrollSurface + ?Sized> ScrollSurface for &mut S {
    fn scroll_offset(&self) -> i32 {
        (**self).scroll_offset()
    }

    fn set_scroll_offset(&mut self, offset: i32) {
        (**self).set_scroll_offset(offset)
    }

    fn bounds(&self) -> Rect {
        (**self).bounds()
    }
}

/// In-memory scrollable surface.
///
/// Unclamped by default. With [`with_max_scroll`](Self::with_max_scroll) the
/// offset is kept within `0..=max_scroll`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VirtualSurface {
    bounds: Rect,
    offset: i32,
    max_scroll: Option<i32>,
}

impl VirtualSurface {
    /// Creates an unclamped surface at offset 0.
    pub const fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            offset: 0,
            max_scroll: None,
        }
    }

    /// Limits the offset to `0..=max_scroll`. Negative limits are treated as 0.
    pub fn with_max_scroll(mut self, max_scroll: i32) -> Self {
        let max_scroll = max_scroll.max(0);
        self.max_scroll = Some(max_scroll);
        self.offset = self.offset.clamp(0, max_scroll);
        self
    }

    /// Moves the surface on screen.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Upper scroll limit, if any.
    pub fn max_scroll(&self) -> Option<i32> {
        self.max_scroll
    }
}

impl ScrollSurface for VirtualSurface {
    fn scroll_offset(&self) -> i32 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: i32) {
        self.offset = match self.max_scroll {
            Some(max) => offset.clamp(0, max),
            None => offset,
        };
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
