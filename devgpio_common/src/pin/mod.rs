//! GPIO pin identification: board tables and alias resolution.
//!
//! A single [`PinRegistry`](registry::PinRegistry) per process answers
//! "which GPIO line is `P1-08`?" for the board selected at startup.
//! Lookups are plain `HashMap` reads; nothing is mutated after creation.

pub mod board;
pub mod global;
pub mod registry;
pub mod table;

pub use board::Board;
pub use registry::{Namespace, PinError, PinRegistry, Resolution};
pub use table::{BoardTable, PinAlias, PinNumber};
