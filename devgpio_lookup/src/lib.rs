//! # devgpio lookup library
//!
//! Start-up glue between an embedding process and the pin registry in
//! `devgpio_common`: reads `gpio.toml`, selects the board, creates the
//! process-wide registry once and resolves identifiers for operators.
//!
//! # Module Structure
//!
//! - [`config`] - `gpio.toml` schema and validation
//! - [`core`] - `LookupCore`, batch resolution and pin verification

#![deny(warnings)]
#![deny(missing_docs)]

pub mod config;
pub mod core;

pub use crate::config::{GpioSection, LookupConfig};
pub use crate::core::{LookupCore, LookupError, ResolveReport, check_reports};
