//! Adapter utilities for the `scrollbars` crate.
//!
//! The `scrollbars` crate is UI-agnostic and focuses on the core math and
//! state. This crate provides the small, framework-neutral pieces an overlay
//! adapter needs around it:
//!
//! - A frame scheduler that coalesces update requests into one
//!   recomputation per frame
//! - An auto-hide controller driving track opacity from scroll/hover
//!   activity
//! - A `Controller` wiring host events to the engine and draining due work
//!   each tick
//!
//! This crate is intentionally framework-agnostic (no DOM/web-sys bindings).
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod autohide;
mod controller;
mod scheduler;


pub use autohide::{AutoHide, TrackFade};
pub use controller::{Controller, TickPatches};
pub use scheduler::{FrameScheduler, UpdateReason};
