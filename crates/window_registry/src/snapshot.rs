//! Serializable window state snapshots
//!
//! A read-only view of the hierarchy for debug overlays and log viewers.
//! Snapshots allocate and walk the whole table; they are diagnostic tooling,
//! not a per-frame query.

use serde::Serialize;

use crate::handle::WindowId;
use crate::registry::WindowRegistry;

/// One window in a snapshot, with its direct children.
///
/// Children carry an empty `children` list of their own: the hierarchy is one
/// level deep by design.
#[derive(Debug, Clone, Serialize)]
pub struct WindowNode {
    pub id: WindowId,
    pub open: bool,
    pub children: Vec<WindowNode>,
}

/// Point-in-time view of the registry state
#[derive(Debug, Clone, Serialize)]
pub struct RegistrySnapshot {
    pub focused: Option<WindowId>,
    pub roots: Vec<WindowNode>,
}

impl WindowRegistry {
    /// Capture a serializable snapshot of the current hierarchy.
    ///
    /// Roots are sorted by id so output is stable across runs; child order
    /// is registration order, same as the live table.
    pub fn snapshot(&self) -> RegistrySnapshot {
        let mut roots: Vec<WindowNode> = self
            .entries()
            .filter(|(_, entry)| entry.is_root())
            .map(|(id, entry)| WindowNode {
                id: *id,
                open: entry.handle.is_open(),
                children: entry
                    .child_ids
                    .iter()
                    .filter_map(|child_id| {
                        self.entry(*child_id).map(|child| WindowNode {
                            id: *child_id,
                            open: child.handle.is_open(),
                            children: Vec::new(),
                        })
                    })
                    .collect(),
            })
            .collect();
        roots.sort_by_key(|node| node.id);

        RegistrySnapshot {
            focused: self.focused_window(),
            roots,
        }
    }
}
