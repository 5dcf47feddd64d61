//! Dropdown-control collaborator
//!
//! Parent windows own a dropdown control in the UI layer that must collapse
//! when the window's subtree is torn down or a child detaches. The concrete
//! widget is external; the registry only needs to tell it which parent's
//! dropdown to close.

use crate::handle::WindowId;

/// External dropdown-widget collaborator, notified on window closure.
///
/// Injected into the registry as an optional capability. Notification is
/// fire-and-forget and must tolerate parent ids it has never seen.
pub trait DropdownHost: Send + Sync {
    /// Close the dropdown control associated with `parent_id`
    fn close(&self, parent_id: WindowId);
}
