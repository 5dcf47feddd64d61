//! # Window Registry
//!
//! In-memory hierarchy registry for floating overlay UI windows (entity
//! inspectors, object-info panels, and similar in-engine tool windows).
//! Windows are organized as a two-level parent/child ownership tree; the
//! registry tracks their open/close/visibility lifecycle, answers the
//! per-frame "is the cursor over any UI" query for input suppression, and
//! enforces focus exclusivity.
//!
//! ## Features
//! - Root and one-level child window registration with tolerated races
//!   against host-driven teardown
//! - Fresh-per-query pointer-occlusion aggregation over the open tree
//! - Bulk show/hide over an insertion-ordered visibility list
//! - Graceful (`can_remove`-respecting) and forced close-all paths
//! - Serializable diagnostic snapshots of the hierarchy
//!
//! The registry has no rendering knowledge: windows reach it as
//! [`WindowHandle`] capabilities, and resource teardown is delegated back to
//! the host through the same trait.
//!
//! ## Example
//! ```ignore
//! let mut registry = WindowRegistry::new().with_dropdown_host(dropdown);
//!
//! // A window registers itself on construction, naming its parent if any.
//! registry.register_window(inspector.clone(), None);
//! registry.register_window(detail_panel.clone(), Some(inspector.id()));
//!
//! // The input layer queries occlusion every frame.
//! if registry.cursor_over_ui() {
//!     // suppress game-world input
//! }
//! ```

pub mod dropdown;
pub mod error;
pub mod handle;
pub mod registry;
pub mod snapshot;

pub use dropdown::DropdownHost;
pub use error::RegistryError;
pub use handle::{WindowHandle, WindowId};
pub use registry::WindowRegistry;
pub use snapshot::{RegistrySnapshot, WindowNode};
