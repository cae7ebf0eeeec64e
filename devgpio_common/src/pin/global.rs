//! Process-wide registry handle.
//!
//! Device-support code that cannot thread a `&PinRegistry` through its
//! callbacks reaches the registry here. The instance is created once,
//! normally from the process entry point before any worker threads start,
//! and lives until the process exits.

use std::sync::OnceLock;

use tracing::warn;

use super::board::Board;
use super::registry::{PinError, PinRegistry};
use super::table::PinNumber;

static INSTANCE: OnceLock<PinRegistry> = OnceLock::new();

/// Returns the live instance and whether this call built it.
fn init(board: Board) -> (&'static PinRegistry, bool) {
    let mut created = false;
    let registry = INSTANCE.get_or_init(|| {
        created = true;
        PinRegistry::new(board)
    });
    (registry, created)
}

/// Create the process-wide registry for `board`.
///
/// # Errors
/// `PinError::AlreadyCreated` if an instance exists. The existing instance
/// and its board are left untouched.
pub fn try_create(board: Board) -> Result<&'static PinRegistry, PinError> {
    match init(board) {
        (registry, true) => Ok(registry),
        (registry, false) => Err(PinError::AlreadyCreated {
            existing: registry.board(),
            requested: board,
        }),
    }
}

/// Create the process-wide registry, tolerating a repeated call.
///
/// A second call logs a warning and returns the instance created first.
pub fn create(board: Board) -> &'static PinRegistry {
    let (registry, created) = init(board);
    if !created {
        let err = PinError::AlreadyCreated {
            existing: registry.board(),
            requested: board,
        };
        warn!("{err}");
    }
    registry
}

/// Whether [`create`] has run in this process.
pub fn exists() -> bool {
    INSTANCE.get().is_some()
}

/// The process-wide registry.
///
/// # Errors
/// `PinError::Uninitialized` if [`create`] has not run yet.
pub fn instance() -> Result<&'static PinRegistry, PinError> {
    INSTANCE.get().ok_or(PinError::Uninitialized)
}

/// Resolve through the process-wide registry.
pub fn resolve(identifier: &str) -> Result<PinNumber, PinError> {
    instance()?.resolve(identifier)
}
