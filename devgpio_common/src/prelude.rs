//! Prelude module for common re-exports.
//!
//! ```rust
//! use devgpio_common::prelude::*;
//! ```

// ─── Configuration ──────────────────────────────────────────────────
pub use crate::config::{ConfigError, ConfigLoader, LogLevel, SharedConfig};

// ─── Pins ───────────────────────────────────────────────────────────
pub use crate::pin::global;
pub use crate::pin::{Board, Namespace, PinError, PinNumber, PinRegistry, Resolution};
