//! Shared overlay context
//!
//! Wraps the single [`WindowRegistry`] instance for an application session so
//! window instances, the per-frame render driver, and the input layer can all
//! hold it. Clones share state: every field is behind `Arc`.
//!
//! Registry operations are frame-synchronous (see `window_registry`); the
//! lock here provides shared ownership across subsystems, not intra-frame
//! parallel mutation.

use std::sync::Arc;

use parking_lot::RwLock;
use window_registry::{
    DropdownHost, RegistryError, RegistrySnapshot, WindowHandle, WindowId, WindowRegistry,
};

/// Session-wide handle to the overlay window registry.
///
/// Constructed once at startup and passed by clone to everything that opens,
/// queries, or tears down overlay windows. There is deliberately no global
/// accessor.
#[derive(Clone)]
pub struct OverlayContext {
    /// The window hierarchy registry, shared across subsystems
    pub registry: Arc<RwLock<WindowRegistry>>,
}

impl OverlayContext {
    /// Create a new overlay context with an empty registry
    pub fn new() -> Self {
        Self {
            registry: Arc::new(RwLock::new(WindowRegistry::new())),
        }
    }

    /// Set the dropdown collaborator (builder pattern)
    pub fn with_dropdown_host(self, host: Arc<dyn DropdownHost>) -> Self {
        self.registry.write().set_dropdown_host(host);
        self
    }

    /// Register a window, optionally under an existing parent.
    ///
    /// Called by window instances on their own construction.
    pub fn register_window(&self, window: Arc<dyn WindowHandle>, parent: Option<WindowId>) {
        self.registry.write().register_window(window, parent);
    }

    /// Add a window to the bulk show/hide list
    pub fn register_visible_window(&self, window: Arc<dyn WindowHandle>) {
        self.registry.write().register_visible_window(window);
    }

    /// Focus a window (unvalidated, see `WindowRegistry::focus_window`)
    pub fn focus_window(&self, id: WindowId) {
        self.registry.write().focus_window(id);
    }

    /// Clear the focus pointer
    pub fn unfocus(&self) {
        self.registry.write().unfocus();
    }

    /// Currently focused window, if any
    pub fn focused_window(&self) -> Option<WindowId> {
        self.registry.read().focused_window()
    }

    /// Per-frame input-suppression query: is the cursor over any open window?
    pub fn cursor_over_ui(&self) -> bool {
        self.registry.read().cursor_over_ui()
    }

    /// Number of children registered under `id`
    pub fn opened_windows(&self, id: WindowId) -> Result<usize, RegistryError> {
        self.registry.read().opened_windows(id)
    }

    /// Whether `id` currently has an entry in the hierarchy table
    pub fn is_registered(&self, id: WindowId) -> bool {
        self.registry.read().is_registered(id)
    }

    /// Total number of registered windows (roots and children)
    pub fn window_count(&self) -> usize {
        self.registry.read().window_count()
    }

    /// Hide every window in the visibility list
    pub fn hide_all(&self) {
        self.registry.read().hide_all();
    }

    /// Show every window in the visibility list
    pub fn show_all(&self) {
        self.registry.read().show_all();
    }

    /// Destroy and unregister root windows; see `WindowRegistry::close_all`
    pub fn close_all(&self, force: bool) {
        self.registry.write().close_all(force);
    }

    /// Tear down one root window's subtree
    pub fn dispose_opened_windows(&self, parent_id: WindowId) {
        self.registry.write().dispose_opened_windows(parent_id);
    }

    /// Detach one child from its parent without destroying it
    pub fn closing_child(&self, parent_id: WindowId, id: WindowId) {
        self.registry.write().closing_child(parent_id, id);
    }

    /// Capture a serializable diagnostic snapshot of the hierarchy
    pub fn snapshot(&self) -> RegistrySnapshot {
        self.registry.read().snapshot()
    }
}

impl Default for OverlayContext {
    fn default() -> Self {
        Self::new()
    }
}
