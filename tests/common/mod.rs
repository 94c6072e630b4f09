//! Shared test infrastructure for scroll-hue integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use scroll_hue::{PointerEvent, PointerEventSource, PointerPosition, Rect, ScrollSurface};

// ============================================================================
// Mock Surface
// ============================================================================

/// Mock surface that records every offset it is given
pub struct MockSurface {
    bounds: Rect,
    offset: i32,
    offset_history: heapless::Vec<i32, 32>,
}

impl MockSurface {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            offset: 0,
            offset_history: heapless::Vec::new(),
        }
    }

    pub fn offset_history(&self) -> &[i32] {
        &self.offset_history
    }
}

impl ScrollSurface for MockSurface {
    fn scroll_offset(&self) -> i32 {
        self.offset
    }

    fn set_scroll_offset(&mut self, offset: i32) {
        self.offset = offset;
        let _ = self.offset_history.push(offset);
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

// ============================================================================
// Scripted Pointer
// ============================================================================

/// Pointer source that replays a fixed list of events
pub struct ScriptedPointer {
    events: heapless::Vec<PointerEvent, 32>,
    next: usize,
}

impl ScriptedPointer {
    pub fn new(events: &[PointerEvent]) -> Self {
        Self {
            events: heapless::Vec::from_slice(events).unwrap(),
            next: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len() - self.next
    }
}

impl PointerEventSource for ScriptedPointer {
    fn next_event(&mut self) -> Option<PointerEvent> {
        let event = self.events.get(self.next).copied();
        if event.is_some() {
            self.next += 1;
        }
        event
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Standard test surface: 200x300 at the origin
pub const SURFACE_BOUNDS: Rect = Rect::new(0, 0, 200, 300);

pub fn down(y: i32) -> PointerEvent {
    PointerEvent::Down(PointerPosition::new(50, y))
}

pub fn move_to(y: i32) -> PointerEvent {
    PointerEvent::Move(PointerPosition::new(50, y))
}

pub fn up(y: i32) -> PointerEvent {
    PointerEvent::Up(PointerPosition::new(50, y))
}

/// Compare an 8-bit color against channel values
pub fn rgb_eq(color: scroll_hue::Rgb8, expected: (u8, u8, u8)) -> bool {
    (color.red, color.green, color.blue) == expected
}
