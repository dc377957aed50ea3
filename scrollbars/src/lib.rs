//! A headless custom scrollbar engine inspired by react-custom-scrollbars.
//!
//! For adapter-level utilities (frame coalescing, auto-hide timers), see the
//! `scrollbars-adapter` crate.
//!
//! This crate focuses on the core synchronization logic behind an overlay
//! scrollbar: deriving thumb geometry from native scroll metrics, detecting
//! scrolling activity with a fixed quiet period, computing element styles,
//! and exposing imperative scroll control.
//!
//! It is UI-agnostic. A DOM/GUI layer is expected to provide:
//! - element metrics (scroll offsets/extents, client extents, track sizes)
//! - the native scrollbar width
//! - scroll/pointer events and timestamps
//!
//! and to apply the element descriptions and style patches the engine
//! produces.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod elements;
mod geometry;
mod options;
mod scrollbars;
mod state;
mod style;
mod types;

#[cfg(test)]
mod tests;

pub use elements::{
    Element, ElementTree, RenderElementFn, render_thumb_horizontal_default,
    render_thumb_vertical_default, render_track_horizontal_default,
    render_track_vertical_default, render_view_default,
};
pub use geometry::{scroll_fraction, thumb_length, thumb_offset};
pub use options::{
    OnScrollCallback, OnScrollFrameCallback, OnScrollStartCallback, OnScrollStopCallback,
    OnUpdateCallback, ScrollbarsOptions,
};
pub use scrollbars::Scrollbars;
pub use state::{ScrollMetrics, ScrollValues, ThumbPatch, TrackPatch, UpdatePatch};
pub use style::{Dimension, ElementStyle, Overflow, Position, Rgba, Visibility};
pub use types::{Axis, ThumbGeometry, TrackSizes};
