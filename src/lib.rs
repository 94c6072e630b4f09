#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`DragScroller`**: Scrolls a single surface by vertical pointer drags
//! - **`ScrollSurface`**: Trait to implement for your scrollable container
//! - **`PointerEventSource`**: Trait to implement for your input system
//! - **`PointerQueue`**: Fixed-capacity event buffer implementing `PointerEventSource`
//! - **`DragState`** / **`DragOutcome`**: Scroller state and the effect of each event
//! - **`hsl_to_rgb`**: Sector-based HSL to 8-bit RGB conversion
//! - **`Hsl`**: HSL color value with validation
//!
//! The drag scroller and the color converter are independent; use either one
//! without the other.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

mod trace;

pub mod types;
pub mod surface;
pub mod pointer;
pub mod scroller;
pub mod colors;

pub use types::{ColorError, Hsl, PointerEvent, PointerPosition, Rect};
pub use surface::{ScrollSurface, VirtualSurface};
pub use pointer::{PointerEventSource, PointerQueue};
pub use scroller::{DragOutcome, DragScroller, DragState};
pub use colors::{BLACK, Rgb8, hsl, hsl_channels, hsl_to_rgb, try_hsl_to_rgb};
