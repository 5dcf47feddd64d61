//! Window capability handles
//!
//! The registry never constructs, renders, or owns window content. Each
//! window reaches it as a `WindowHandle` capability supplied by the host
//! layer at registration time; the registry only ever calls back through
//! this trait.

/// Window ID type (u64 for cross-platform compatibility)
///
/// This is assigned by the host layer before registration and is unique per
/// live window. Keeping it a plain integer keeps the registry decoupled from
/// any concrete windowing backend.
pub type WindowId = u64;

/// Capability contract for one floating overlay window.
///
/// Implemented by the per-window host adapter (entity inspector, object-info
/// panel, etc.). All methods take `&self`: handles are shared as
/// `Arc<dyn WindowHandle>` between the registry and the render driver, and
/// state toggles go through the host's own interior mutability.
pub trait WindowHandle: Send + Sync {
    /// Identifier assigned by the host before registration
    fn id(&self) -> WindowId;

    /// True while the window is open
    fn is_open(&self) -> bool;

    /// True if the pointer currently intersects this window's rendered surface
    fn cursor_over_ui(&self) -> bool;

    /// True if the window is safe to force-close without data loss
    fn can_remove(&self) -> bool;

    /// Show or hide the window without destroying it
    fn set_enabled(&self, enabled: bool);

    /// Irreversibly tear down the window's underlying resource.
    ///
    /// Delegated to the host object system and assumed synchronous: once this
    /// returns, the id is no longer valid for hierarchy lookups, though
    /// in-flight visibility iteration may still touch the handle (callers
    /// avoid use-after-destroy; the registry does not guard against it).
    fn destroy(&self);
}
