//! Lookup front-end configuration (`gpio.toml`).
//!
//! ```toml
//! [shared]
//! log_level = "debug"
//! service_name = "devgpio-01"
//!
//! [gpio]
//! board = "raspi_bp"
//! pins = ["J8-08", "GPIO17"]
//! ```

use std::collections::HashSet;

use devgpio_common::config::{ConfigError, SharedConfig};
use devgpio_common::pin::Board;
use serde::Deserialize;

/// Top-level configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LookupConfig {
    /// `[shared]` section: logging and service identity.
    #[serde(default)]
    pub shared: SharedConfig,
    /// `[gpio]` section.
    pub gpio: GpioSection,
}

/// `[gpio]` section: board selection and pins checked at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GpioSection {
    /// Board whose alias table is loaded.
    pub board: Board,
    /// Identifiers the deployment relies on; all must resolve at startup.
    #[serde(default)]
    pub pins: Vec<String>,
}

impl LookupConfig {
    /// Minimal configuration used when only `--board` is given.
    pub fn for_board(board: Board) -> Self {
        Self {
            shared: SharedConfig::default(),
            gpio: GpioSection {
                board,
                pins: Vec::new(),
            },
        }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    /// `ConfigError::ValidationError` if the shared section is invalid, or a
    /// configured pin is empty or listed twice.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.shared.validate()?;

        let mut seen = HashSet::new();
        for pin in &self.gpio.pins {
            if pin.is_empty() {
                return Err(ConfigError::ValidationError(
                    "gpio.pins contains an empty identifier".to_string(),
                ));
            }
            if !seen.insert(pin.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "gpio.pins lists {pin:?} more than once"
                )));
            }
        }
        Ok(())
    }
}
