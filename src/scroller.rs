//! Drag-to-scroll state machine.
//!
//! Provides [`DragScroller`] which turns vertical pointer drags over a
//! [`ScrollSurface`] into scroll offset changes. Dragging the content up
//! scrolls down, the same way grabbing a page does.

use crate::pointer::PointerEventSource;
use crate::surface::ScrollSurface;
use crate::trace::trace;
use crate::types::{PointerEvent, PointerPosition};

/// The current state of a drag scroller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DragState {
    /// No drag in progress. Pointer moves are ignored.
    Idle,
    /// Button held over the surface.
    Dragging {
        /// Last observed vertical pointer coordinate.
        last_y: i32,
    },
}

/// What a handled pointer event did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DragOutcome {
    /// The event had no effect.
    Ignored,

    /// A drag began (or restarted) at the event position.
    Started,

    /// The surface was scrolled and the drag continues.
    Scrolled {
        /// Change applied to the scroll offset.
        delta: i32,
    },

    /// The pointer left the surface bounds. The move was applied, then the
    /// drag ended.
    Released {
        /// Change applied to the scroll offset.
        delta: i32,
    },

    /// The button was released and the drag ended.
    Stopped,
}

impl DragOutcome {
    /// Scroll offset change caused by the event, zero if none.
    #[inline]
    pub fn delta(&self) -> i32 {
        match self {
            DragOutcome::Scrolled { delta } | DragOutcome::Released { delta } => *delta,
            _ => 0,
        }
    }
}

/// Scrolls a single surface by dragging it.
///
/// Each scroller owns its surface and tracking state, so any number of
/// scrollers can run side by side without sharing anything. Feed it pointer
/// events one at a time through [`handle_event`](Self::handle_event) or drain
/// a [`PointerEventSource`] with [`pump`](Self::pump).
///
/// # Type Parameters
/// * `S` - Surface implementation type
pub struct DragScroller<S: ScrollSurface> {
    surface: S,
    state: DragState,
}

impl<S: ScrollSurface> DragScroller<S> {
    /// Registers a surface for drag scrolling. Starts `Idle`.
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            state: DragState::Idle,
        }
    }

    /// Handles a pointer event by dispatching to the matching handler.
    pub fn handle_event(&mut self, event: PointerEvent) -> DragOutcome {
        match event {
            PointerEvent::Down(position) => self.on_pointer_down(position),
            PointerEvent::Move(position) => self.on_pointer_move(position),
            PointerEvent::Up(position) => self.on_pointer_up(position),
        }
    }

    /// Handles every pending event from `source`.
    ///
    /// Returns the total change applied to the scroll offset.
    pub fn pump<P: PointerEventSource>(&mut self, mut source: P) -> i32 {
        let mut total: i32 = 0;
        while let Some(event) = source.next_event() {
            total = total.saturating_add(self.handle_event(event).delta());
        }
        total
    }

    /// Button pressed. Starts tracking if the pointer is over the surface.
    ///
    /// A press while already dragging restarts tracking from the new position.
    pub fn on_pointer_down(&mut self, position: PointerPosition) -> DragOutcome {
        if !self.surface.bounds().contains(position) {
            return DragOutcome::Ignored;
        }

        trace!("drag started at y={}", position.y);
        self.state = DragState::Dragging { last_y: position.y };
        DragOutcome::Started
    }

    /// Pointer moved. Scrolls by the vertical distance since the last event.
    pub fn on_pointer_move(&mut self, position: PointerPosition) -> DragOutcome {
        let DragState::Dragging { last_y } = self.state else {
            return DragOutcome::Ignored;
        };

        let before = self.surface.scroll_offset();
        self.surface
            .set_scroll_offset(before.saturating_add(last_y.saturating_sub(position.y)));
        let delta = self.surface.scroll_offset().saturating_sub(before);

        if !self.surface.bounds().contains(position) {
            trace!("pointer left surface at y={}, drag released", position.y);
            self.state = DragState::Idle;
            return DragOutcome::Released { delta };
        }

        self.state = DragState::Dragging { last_y: position.y };
        DragOutcome::Scrolled { delta }
    }

    /// Button released. Always returns to `Idle`.
    pub fn on_pointer_up(&mut self, _position: PointerPosition) -> DragOutcome {
        if self.state == DragState::Idle {
            return DragOutcome::Ignored;
        }

        trace!("drag stopped");
        self.state = DragState::Idle;
        DragOutcome::Stopped
    }

    /// Returns the current drag state.
    pub fn state(&self) -> DragState {
        self.state
    }

    /// Returns true while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Returns the registered surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Returns the registered surface mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Detaches the surface, discarding all tracking state.
    pub fn into_surface(self) -> S {
        self.surface
    }
}
