//! Pointer event source abstraction for platform-agnostic input.

use crate::types::PointerEvent;
use heapless::Deque;

/// Trait for abstracting where pointer events come from.
///
/// Implement this over your platform's event loop. A
/// [`DragScroller`](crate::DragScroller) drains a source with
/// [`pump`](crate::DragScroller::pump).
pub trait PointerEventSource {
    /// Returns the next pending event, or `None` when drained.
    fn next_event(&mut self) -> Option<PointerEvent>;
}

impl<P: PointerEventSource + ?Sized> PointerEventSource for &mut P {
    fn next_event(&mut self) -> Option<PointerEvent> {
        (**self).next_event()
    }
}

/// Fixed-capacity FIFO of pointer events.
///
/// Useful for buffering events from an interrupt or callback and handing them
/// to the scroller later.
///
/// # Type Parameters
/// * `N` - Maximum number of buffered events
#[derive(Debug, Clone)]
pub struct PointerQueue<const N: usize> {
    events: Deque<PointerEvent, N>,
}

impl<const N: usize> PointerQueue<N> {
    /// Creates an empty queue.
    pub const fn new() -> Self {
        Self {
            events: Deque::new(),
        }
    }

    /// Appends an event.
    ///
    /// Returns the event back if the queue is full.
    pub fn push(&mut self, event: PointerEvent) -> Result<(), PointerEvent> {
        self.events.push_back(event)
    }

    /// Number of buffered events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if no events are buffered.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns true if another push would be rejected.
    pub fn is_full(&self) -> bool {
        self.events.is_full()
    }

    /// Drops all buffered events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl<const N: usize> Default for PointerQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PointerEventSource for PointerQueue<N> {
    fn next_event(&mut self) -> Option<PointerEvent> {
        self.events.pop_front()
    }
}
