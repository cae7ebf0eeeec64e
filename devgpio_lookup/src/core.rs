//! Lookup core: board selection, registry start-up and batch resolution.
//!
//! `LookupCore` is what the embedding process drives at start-up. It picks
//! the board, creates the process-wide registry exactly once and checks that
//! every pin the deployment names actually exists on that board.

use std::fmt;
use std::path::Path;

use devgpio_common::prelude::*;
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::config::LookupConfig;

/// Errors surfaced by the lookup front-end.
#[derive(Debug, Error)]
pub enum LookupError {
    /// `gpio.toml` could not be read, parsed or validated.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Registry lifecycle error.
    #[error(transparent)]
    Pin(#[from] PinError),

    /// One or more identifiers did not resolve on the selected board.
    #[error("cannot find GPIO {}", .0.join(", "))]
    Pins(Vec<String>),
}

/// Result of resolving one identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveReport {
    /// Identifier as given by the caller.
    pub identifier: String,
    /// Canonical pin number, if resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin: Option<PinNumber>,
    /// Namespace that matched, if resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<Namespace>,
    /// Error message, if not resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ResolveReport {
    fn new(registry: &PinRegistry, identifier: &str) -> Self {
        match registry.lookup(identifier) {
            Ok(hit) => Self {
                identifier: identifier.to_string(),
                pin: Some(hit.pin),
                namespace: Some(hit.namespace),
                error: None,
            },
            Err(err) => Self {
                identifier: identifier.to_string(),
                pin: None,
                namespace: None,
                error: Some(err.to_string()),
            },
        }
    }

    /// Whether the identifier was found.
    pub fn is_resolved(&self) -> bool {
        self.pin.is_some()
    }
}

impl fmt::Display for ResolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.pin, self.namespace, &self.error) {
            (Some(pin), Some(ns), _) => write!(f, "{} -> {pin} ({ns})", self.identifier),
            (_, _, Some(err)) => write!(f, "{}: {err}", self.identifier),
            _ => write!(f, "{}: unresolved", self.identifier),
        }
    }
}

/// Resolve each identifier against `registry`, in input order.
pub fn resolve_with<S: AsRef<str>>(
    registry: &PinRegistry,
    identifiers: &[S],
) -> Vec<ResolveReport> {
    identifiers
        .iter()
        .map(|id| ResolveReport::new(registry, id.as_ref()))
        .collect()
}

/// Fail if any report is unresolved.
///
/// # Errors
/// `LookupError::Pins` listing every unresolved identifier, in report order.
pub fn check_reports(reports: &[ResolveReport]) -> Result<(), LookupError> {
    let failed: Vec<String> = reports
        .iter()
        .filter(|r| !r.is_resolved())
        .map(|r| r.identifier.clone())
        .collect();

    if failed.is_empty() {
        Ok(())
    } else {
        Err(LookupError::Pins(failed))
    }
}

/// Check that every configured pin resolves.
///
/// # Errors
/// `LookupError::Pins` listing every identifier that failed.
pub fn verify_pins(registry: &PinRegistry, pins: &[String]) -> Result<(), LookupError> {
    let reports = resolve_with(registry, pins);
    for report in &reports {
        if report.is_resolved() {
            info!("  {report}");
        } else {
            warn!("  {report}");
        }
    }
    check_reports(&reports)
}

/// Start-up driver for the pin registry.
pub struct LookupCore {
    config: LookupConfig,
    registry: Option<&'static PinRegistry>,
}

impl LookupCore {
    /// Create a core from a validated configuration.
    ///
    /// # Errors
    /// Returns error if configuration validation fails.
    pub fn new(config: LookupConfig) -> Result<Self, LookupError> {
        config.validate()?;
        info!(
            "LookupCore created for {} with {} configured pins",
            config.gpio.board,
            config.gpio.pins.len()
        );
        Ok(Self {
            config,
            registry: None,
        })
    }

    /// Load `gpio.toml` from disk. Validation happens in [`new`](Self::new).
    ///
    /// # Errors
    /// `LookupError::Config` if the file is missing or does not parse.
    pub fn load_config(path: &Path) -> Result<LookupConfig, LookupError> {
        Ok(LookupConfig::load(path)?)
    }

    /// Load `gpio.toml`, or the defaults for `board` if the file is missing.
    ///
    /// A file that exists always wins, even when `board` is given; apply the
    /// board with [`with_board_override`](Self::with_board_override).
    ///
    /// # Errors
    /// `LookupError::Config` if the file is missing and no board is given,
    /// or if it exists but does not parse.
    pub fn load_or_board(path: &Path, board: Option<Board>) -> Result<LookupConfig, LookupError> {
        match (Self::load_config(path), board) {
            (Err(LookupError::Config(ConfigError::FileNotFound(missing))), Some(board)) => {
                info!("{} not found, using {board} defaults", missing.display());
                Ok(LookupConfig::for_board(board))
            }
            (result, _) => result,
        }
    }

    /// Replace the configured board (CLI `--board`).
    pub fn with_board_override(mut self, board: Board) -> Self {
        if board != self.config.gpio.board {
            info!("Board override: {} -> {}", self.config.gpio.board, board);
            self.config.gpio.board = board;
        }
        self
    }

    /// Board that `init` creates the registry for.
    pub fn board(&self) -> Board {
        self.config.gpio.board
    }

    /// Create the process-wide registry and verify configured pins.
    ///
    /// If a registry already exists the existing one is used as is; its
    /// board may differ from [`board`](Self::board).
    ///
    /// # Errors
    /// `LookupError::Pins` if any configured pin is unknown on the board.
    pub fn init(&mut self) -> Result<&'static PinRegistry, LookupError> {
        let registry = global::create(self.board());
        self.registry = Some(registry);

        if !self.config.gpio.pins.is_empty() {
            info!(
                "Verifying {} configured pins on {}",
                self.config.gpio.pins.len(),
                registry.board()
            );
            verify_pins(registry, &self.config.gpio.pins)?;
        }

        info!("Pin registry ready for {}", registry.board().description());
        Ok(registry)
    }

    /// The registry created by [`init`](Self::init).
    ///
    /// # Errors
    /// `PinError::Uninitialized` before `init`.
    pub fn registry(&self) -> Result<&'static PinRegistry, LookupError> {
        self.registry.ok_or(LookupError::Pin(PinError::Uninitialized))
    }

    /// Resolve identifiers through the initialised registry.
    ///
    /// # Errors
    /// `PinError::Uninitialized` before `init`. Unknown identifiers are not
    /// errors here; they come back as unresolved reports.
    pub fn resolve_all<S: AsRef<str>>(
        &self,
        identifiers: &[S],
    ) -> Result<Vec<ResolveReport>, LookupError> {
        Ok(resolve_with(self.registry()?, identifiers))
    }
}
