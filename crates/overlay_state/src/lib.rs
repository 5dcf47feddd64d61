//! Overlay State Management
//!
//! Shared-ownership layer over the window hierarchy registry.
//! - One explicitly constructed [`OverlayContext`] per application session
//! - Cloned into every window instance and into the render/input layers
//! - No ambient globals: whoever needs the registry holds a context clone

pub mod context;

pub use context::OverlayContext;
