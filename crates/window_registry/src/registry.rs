//! The window hierarchy registry
//!
//! Tracks floating overlay windows as a two-level parent/child tree and owns
//! the focus pointer and the bulk show/hide list. The registry is the single
//! source of truth for what is open and whether the cursor occludes any UI
//! surface: the render driver and input layer query it every frame and never
//! walk window objects directly.
//!
//! All operations run on the frame-processing pass of the host UI loop;
//! there is no internal locking because there is no concurrent mutation.
//! Shared ownership across subsystems is layered on top by `overlay_state`.

use std::collections::HashMap;
use std::sync::Arc;

use crate::dropdown::DropdownHost;
use crate::error::RegistryError;
use crate::handle::{WindowHandle, WindowId};

/// One registered window: its capability handle plus its place in the tree.
///
/// Every registered window gets an entry, children included. A child's own
/// `child_ids` list is allocated empty at registration and never exposed
/// through the public one-level traversal; it keeps the table total over
/// every registered id so count lookups by child id stay valid.
pub(crate) struct WindowEntry {
    /// Capability handle supplied by the host layer
    pub(crate) handle: Arc<dyn WindowHandle>,
    /// `None` for root windows, the owning parent's id for children
    pub(crate) parent_id: Option<WindowId>,
    /// Ordered child ids (insertion order, one level deep)
    pub(crate) child_ids: Vec<WindowId>,
}

impl WindowEntry {
    fn new(handle: Arc<dyn WindowHandle>, parent_id: Option<WindowId>) -> Self {
        Self {
            handle,
            parent_id,
            child_ids: Vec::new(),
        }
    }

    pub(crate) fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Registry for all floating overlay windows.
///
/// Owns the parent/child hierarchy table, the focus pointer, and the
/// visibility list. Windows register themselves on construction and leave
/// via [`dispose_opened_windows`](Self::dispose_opened_windows) or
/// [`closing_child`](Self::closing_child); there is no implicit garbage
/// collection, so an id that is never disposed keeps its entry for the
/// session.
pub struct WindowRegistry {
    /// Hierarchy table; every registered id keys exactly one entry
    windows: HashMap<WindowId, WindowEntry>,
    /// At most one focused window; `None` means unfocused
    focused: Option<WindowId>,
    /// Windows subject to bulk show/hide, in insertion order
    visible: Vec<Arc<dyn WindowHandle>>,
    /// Dropdown-control collaborator notified on window closure
    dropdown_host: Option<Arc<dyn DropdownHost>>,
}

impl WindowRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            windows: HashMap::new(),
            focused: None,
            visible: Vec::new(),
            dropdown_host: None,
        }
    }

    /// Set the dropdown collaborator (builder pattern)
    pub fn with_dropdown_host(mut self, host: Arc<dyn DropdownHost>) -> Self {
        self.dropdown_host = Some(host);
        self
    }

    /// Set or replace the dropdown collaborator
    pub fn set_dropdown_host(&mut self, host: Arc<dyn DropdownHost>) {
        self.dropdown_host = Some(host);
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register a window, optionally under an existing parent.
    ///
    /// With no parent the window becomes a root. Re-registering an existing
    /// root id is ignored. Naming a parent id that is not registered drops
    /// the registration; a stale-parent race with teardown is tolerated, not
    /// fatal.
    pub fn register_window(&mut self, window: Arc<dyn WindowHandle>, parent: Option<WindowId>) {
        let id = window.id();
        match parent {
            None => {
                if self.windows.get(&id).map_or(false, WindowEntry::is_root) {
                    tracing::info!("Window {} is already registered, ignoring re-registration", id);
                    return;
                }
                // Promotes a stale child entry with the same id, matching the
                // first-registration path.
                self.windows.insert(id, WindowEntry::new(window, None));
            }
            Some(parent_id) => match self.windows.get_mut(&parent_id) {
                Some(parent_entry) => {
                    parent_entry.child_ids.push(id);
                    self.windows.insert(id, WindowEntry::new(window, Some(parent_id)));
                }
                None => {
                    tracing::info!(
                        "Dropping registration of window {}: parent {} is not registered",
                        id,
                        parent_id
                    );
                }
            },
        }
    }

    /// Add a window to the bulk show/hide list.
    ///
    /// Membership is managed by callers and is independent of the hierarchy
    /// table; iteration order is insertion order.
    pub fn register_visible_window(&mut self, window: Arc<dyn WindowHandle>) {
        self.visible.push(window);
    }

    // ========================================================================
    // Focus
    // ========================================================================

    /// Focus a window.
    ///
    /// Unconditional: the id is not validated against the hierarchy table.
    /// The focus pointer is an opaque pass-through for the input layer; the
    /// registry never reads it back.
    pub fn focus_window(&mut self, id: WindowId) {
        self.focused = Some(id);
    }

    /// Clear the focus pointer
    pub fn unfocus(&mut self) {
        self.focused = None;
    }

    /// Currently focused window, if any
    pub fn focused_window(&self) -> Option<WindowId> {
        self.focused
    }

    // ========================================================================
    // Per-frame queries
    // ========================================================================

    /// True iff any open root window, or any open child of a root, reports
    /// pointer occlusion.
    ///
    /// Computed fresh on every call so it reflects same-frame state; cheap
    /// enough for the input layer to query once per frame (transient
    /// iteration, no allocation).
    pub fn cursor_over_ui(&self) -> bool {
        self.windows.values().filter(|entry| entry.is_root()).any(|root| {
            if root.handle.is_open() && root.handle.cursor_over_ui() {
                return true;
            }
            root.child_ids
                .iter()
                .filter_map(|child_id| self.windows.get(child_id))
                .any(|child| child.handle.is_open() && child.handle.cursor_over_ui())
        })
    }

    /// Number of children registered under `id`.
    ///
    /// Child windows answer `Ok(0)`: their child list exists but is never
    /// populated through the public API. Unregistered ids are a recoverable
    /// error since callers may race with teardown.
    pub fn opened_windows(&self, id: WindowId) -> Result<usize, RegistryError> {
        self.windows
            .get(&id)
            .map(|entry| entry.child_ids.len())
            .ok_or(RegistryError::WindowNotFound(id))
    }

    /// Whether `id` currently has an entry in the hierarchy table
    pub fn is_registered(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    /// Total number of registered windows (roots and children)
    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Number of registered root windows
    pub fn root_count(&self) -> usize {
        self.windows.values().filter(|entry| entry.is_root()).count()
    }

    /// Number of windows in the bulk show/hide list
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    // ========================================================================
    // Bulk visibility
    // ========================================================================

    /// Hide every window in the visibility list, in insertion order
    pub fn hide_all(&self) {
        for window in &self.visible {
            window.set_enabled(false);
        }
    }

    /// Show every window in the visibility list, in insertion order
    pub fn show_all(&self) {
        for window in &self.visible {
            window.set_enabled(true);
        }
    }

    // ========================================================================
    // Teardown
    // ========================================================================

    /// Destroy and unregister root windows.
    ///
    /// With `force` every root goes; otherwise only roots reporting
    /// `can_remove`. Non-removable roots stay registered and open: this is
    /// the graceful-shutdown path that preserves in-progress window state.
    /// Children of closed roots keep their own entries (no cascade).
    pub fn close_all(&mut self, force: bool) {
        let removable: Vec<WindowId> = self
            .windows
            .iter()
            .filter(|(_, entry)| entry.is_root() && (force || entry.handle.can_remove()))
            .map(|(id, _)| *id)
            .collect();

        for id in removable {
            if let Some(entry) = self.windows.remove(&id) {
                entry.handle.destroy();
                tracing::debug!("🚪 Closed root window {}", id);
            }
        }
    }

    /// Tear down one root window's subtree.
    ///
    /// Destroys every child handle, removes the parent's entry, and notifies
    /// the dropdown collaborator. Idempotent: a second call finds no entry
    /// and degrades to the (key-absent-tolerant) dropdown notification.
    /// Child entries stay in the table orphaned; see the session-lifetime
    /// note on [`WindowRegistry`].
    pub fn dispose_opened_windows(&mut self, parent_id: WindowId) {
        if let Some(entry) = self.windows.remove(&parent_id) {
            for child_id in &entry.child_ids {
                if let Some(child) = self.windows.get(child_id) {
                    child.handle.destroy();
                }
            }
            tracing::debug!(
                "🚪 Disposed window {} and its {} children",
                parent_id,
                entry.child_ids.len()
            );
        }
        self.notify_dropdown_closed(parent_id);
    }

    /// Detach one child from its parent's list.
    ///
    /// Notifies the dropdown collaborator first, then removes the first
    /// child whose id matches. Does NOT destroy the child's resource; the
    /// caller has already done that before detaching. The child's own entry
    /// is left orphaned (intentional shallow removal, no cascade).
    pub fn closing_child(&mut self, parent_id: WindowId, id: WindowId) {
        self.notify_dropdown_closed(parent_id);
        if let Some(parent_entry) = self.windows.get_mut(&parent_id) {
            if let Some(position) = parent_entry.child_ids.iter().position(|child| *child == id) {
                parent_entry.child_ids.remove(position);
            }
        }
    }

    fn notify_dropdown_closed(&self, parent_id: WindowId) {
        if let Some(host) = self.dropdown_host.as_ref() {
            host.close(parent_id);
        }
    }

    // ========================================================================
    // Internal iteration (snapshot support)
    // ========================================================================

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&WindowId, &WindowEntry)> {
        self.windows.iter()
    }

    pub(crate) fn entry(&self, id: WindowId) -> Option<&WindowEntry> {
        self.windows.get(&id)
    }
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct TestWindow {
        id: WindowId,
        open: AtomicBool,
        occluded: AtomicBool,
        removable: bool,
        enabled: AtomicBool,
        destroyed: AtomicBool,
    }

    impl TestWindow {
        fn new(id: WindowId) -> Arc<Self> {
            Self::with_removable(id, true)
        }

        /// A window that refuses graceful close (unsaved state)
        fn pinned(id: WindowId) -> Arc<Self> {
            Self::with_removable(id, false)
        }

        fn with_removable(id: WindowId, removable: bool) -> Arc<Self> {
            Arc::new(Self {
                id,
                open: AtomicBool::new(true),
                occluded: AtomicBool::new(false),
                removable,
                enabled: AtomicBool::new(true),
                destroyed: AtomicBool::new(false),
            })
        }

        fn set_occluded(&self, occluded: bool) {
            self.occluded.store(occluded, Ordering::SeqCst);
        }

        fn set_open(&self, open: bool) {
            self.open.store(open, Ordering::SeqCst);
        }

        fn destroyed(&self) -> bool {
            self.destroyed.load(Ordering::SeqCst)
        }

        fn enabled(&self) -> bool {
            self.enabled.load(Ordering::SeqCst)
        }
    }

    impl WindowHandle for TestWindow {
        fn id(&self) -> WindowId {
            self.id
        }

        fn is_open(&self) -> bool {
            self.open.load(Ordering::SeqCst)
        }

        fn cursor_over_ui(&self) -> bool {
            self.occluded.load(Ordering::SeqCst)
        }

        fn can_remove(&self) -> bool {
            self.removable
        }

        fn set_enabled(&self, enabled: bool) {
            self.enabled.store(enabled, Ordering::SeqCst);
        }

        fn destroy(&self) {
            self.destroyed.store(true, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_register_root() {
        let mut registry = WindowRegistry::new();
        let root = TestWindow::new(1);
        registry.register_window(root, None);

        assert!(registry.is_registered(1));
        assert_eq!(registry.root_count(), 1);
        assert_eq!(registry.opened_windows(1), Ok(0));
    }

    #[test]
    fn test_register_child_under_root() {
        let mut registry = WindowRegistry::new();
        registry.register_window(TestWindow::new(1), None);
        registry.register_window(TestWindow::new(2), Some(1));

        assert_eq!(registry.opened_windows(1), Ok(1));
        // The child gets its own (empty) entry
        assert_eq!(registry.opened_windows(2), Ok(0));
        assert_eq!(registry.root_count(), 1);
        assert_eq!(registry.window_count(), 2);
    }

    #[test]
    fn test_duplicate_root_registration_is_ignored() {
        let mut registry = WindowRegistry::new();
        registry.register_window(TestWindow::new(1), None);
        registry.register_window(TestWindow::new(2), Some(1));

        registry.register_window(TestWindow::new(1), None);

        // Re-registration did not reset the child list
        assert_eq!(registry.opened_windows(1), Ok(1));
        assert_eq!(registry.window_count(), 2);
    }

    #[test]
    fn test_stale_parent_registration_is_dropped() {
        let mut registry = WindowRegistry::new();
        registry.register_window(TestWindow::new(2), Some(99));

        assert!(!registry.is_registered(2));
        assert_eq!(registry.window_count(), 0);
        assert_eq!(registry.opened_windows(2), Err(RegistryError::WindowNotFound(2)));
    }

    #[test]
    fn test_focus_is_opaque() {
        let mut registry = WindowRegistry::new();
        assert_eq!(registry.focused_window(), None);

        // No validation against the table
        registry.focus_window(42);
        assert_eq!(registry.focused_window(), Some(42));

        registry.unfocus();
        assert_eq!(registry.focused_window(), None);
    }

    #[test]
    fn test_cursor_over_ui_roots_and_children() {
        let mut registry = WindowRegistry::new();
        let root = TestWindow::new(1);
        let child = TestWindow::new(2);
        registry.register_window(root.clone(), None);
        registry.register_window(child.clone(), Some(1));

        assert!(!registry.cursor_over_ui());

        // Open root, occluded child: the child alone is enough
        child.set_occluded(true);
        assert!(registry.cursor_over_ui());

        // A closed child no longer counts
        child.set_open(false);
        assert!(!registry.cursor_over_ui());

        root.set_occluded(true);
        assert!(registry.cursor_over_ui());

        root.set_open(false);
        assert!(!registry.cursor_over_ui());
    }

    #[test]
    fn test_hide_all_and_show_all() {
        let mut registry = WindowRegistry::new();
        let a = TestWindow::new(1);
        let b = TestWindow::new(2);
        registry.register_visible_window(a.clone());
        registry.register_visible_window(b.clone());
        assert_eq!(registry.visible_count(), 2);

        registry.hide_all();
        assert!(!a.enabled());
        assert!(!b.enabled());

        registry.show_all();
        assert!(a.enabled());
        assert!(b.enabled());
    }

    #[test]
    fn test_close_all_graceful_spares_pinned_roots() {
        let mut registry = WindowRegistry::new();
        let doomed = TestWindow::new(1);
        let pinned = TestWindow::pinned(2);
        registry.register_window(doomed.clone(), None);
        registry.register_window(pinned.clone(), None);

        registry.close_all(false);

        assert!(doomed.destroyed());
        assert!(!registry.is_registered(1));
        assert!(!pinned.destroyed());
        assert!(registry.is_registered(2));

        registry.close_all(true);
        assert!(pinned.destroyed());
        assert!(!registry.is_registered(2));
    }

    #[test]
    fn test_dispose_destroys_children_and_is_idempotent() {
        let mut registry = WindowRegistry::new();
        let root = TestWindow::new(1);
        let child_a = TestWindow::new(2);
        let child_b = TestWindow::new(3);
        registry.register_window(root.clone(), None);
        registry.register_window(child_a.clone(), Some(1));
        registry.register_window(child_b.clone(), Some(1));

        registry.dispose_opened_windows(1);

        assert!(child_a.destroyed());
        assert!(child_b.destroyed());
        assert_eq!(registry.opened_windows(1), Err(RegistryError::WindowNotFound(1)));
        // Child entries persist for the session
        assert_eq!(registry.opened_windows(2), Ok(0));

        // Second call is a no-op, not an error
        registry.dispose_opened_windows(1);
        assert_eq!(registry.opened_windows(1), Err(RegistryError::WindowNotFound(1)));
    }

    #[test]
    fn test_closing_child_detaches_without_destroying() {
        let mut registry = WindowRegistry::new();
        let child_a = TestWindow::new(2);
        let child_b = TestWindow::new(3);
        registry.register_window(TestWindow::new(1), None);
        registry.register_window(child_a.clone(), Some(1));
        registry.register_window(child_b.clone(), Some(1));

        registry.closing_child(1, 2);

        assert_eq!(registry.opened_windows(1), Ok(1));
        assert!(!child_a.destroyed());
        // The detached child's own entry is left orphaned
        assert_eq!(registry.opened_windows(2), Ok(0));
    }

    #[test]
    fn test_closing_child_removes_first_match_only() {
        let mut registry = WindowRegistry::new();
        registry.register_window(TestWindow::new(1), None);
        // Duplicate child ids: first-match removal
        registry.register_window(TestWindow::new(2), Some(1));
        registry.register_window(TestWindow::new(2), Some(1));
        assert_eq!(registry.opened_windows(1), Ok(2));

        registry.closing_child(1, 2);
        assert_eq!(registry.opened_windows(1), Ok(1));
    }

    #[test]
    fn test_closing_child_tolerates_absent_parent() {
        let mut registry = WindowRegistry::new();
        registry.closing_child(99, 1);
        assert_eq!(registry.window_count(), 0);
    }
}
