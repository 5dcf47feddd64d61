//! Error types for registry lookups

use thiserror::Error;

use crate::handle::WindowId;

/// Errors surfaced by registry lookup operations.
///
/// Only lookups fail loudly. Tolerated registration races (re-registering an
/// existing root, naming a parent that was already torn down) are logged
/// no-ops rather than errors: window registration runs as a side effect of
/// object construction and can interleave with host-driven teardown.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Window {0} is not registered")]
    WindowNotFound(WindowId),
}
