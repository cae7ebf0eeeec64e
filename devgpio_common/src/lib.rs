//! devgpio Common Library
//!
//! Board definitions, GPIO alias tables and the pin registry shared by
//! every devgpio front-end, plus TOML configuration loading.
//!
//! # Module Structure
//!
//! - [`pin`] - Boards, alias tables, [`PinRegistry`](pin::PinRegistry) and
//!   the process-wide handle
//! - [`config`] - Configuration loading traits and types
//! - [`prelude`] - Common re-exports for convenience
//!
//! # Usage
//!
//! ```rust
//! use devgpio_common::pin::{global, Board};
//!
//! global::create(Board::RaspiBRev2);
//! assert_eq!(global::resolve("P1-08"), Ok(14));
//! ```

pub mod config;
pub mod pin;
pub mod prelude;
