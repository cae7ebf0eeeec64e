//! Pin Registry: resolves textual GPIO identifiers to canonical numbers.
//!
//! Built once at startup from a board's [`BoardTable`]. Immutable after
//! construction, so any number of threads may resolve concurrently without
//! locking.
//!
//! Resolution tries the key, name and number namespaces in that order and
//! stops at the first hit. The namespaces are kept as separate maps so that
//! precedence never depends on insertion order.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use super::board::Board;
use super::table::{BoardTable, PinAlias, PinNumber};

// ─── Error Types ────────────────────────────────────────────────────

/// Errors raised by the registry and its process-wide handle.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PinError {
    /// `instance()` was called before `create()`.
    #[error("pin registry: no instance was created")]
    Uninitialized,

    /// `create()` was called again. The first instance is kept.
    #[error("pin registry: instance already created for {existing} (requested {requested})")]
    AlreadyCreated { existing: Board, requested: Board },

    /// The identifier is absent from all three namespaces.
    #[error("cannot find GPIO {0}")]
    Unresolved(String),
}

impl PinError {
    /// The identifier that failed to resolve, if this is `Unresolved`.
    pub fn identifier(&self) -> Option<&str> {
        match self {
            Self::Unresolved(id) => Some(id),
            _ => None,
        }
    }
}

// ─── Namespace ──────────────────────────────────────────────────────

/// Alias namespace an identifier was found in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    /// Physical connector position.
    Key,
    /// Logical line name.
    Name,
    /// Decimal pin number.
    Number,
}

impl Namespace {
    /// Order in which [`PinRegistry::lookup`] consults the namespaces.
    pub const RESOLUTION_ORDER: [Namespace; 3] = [Self::Key, Self::Name, Self::Number];
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key => write!(f, "key"),
            Self::Name => write!(f, "name"),
            Self::Number => write!(f, "number"),
        }
    }
}

/// Successful lookup: the canonical pin and where it was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Canonical pin number.
    pub pin: PinNumber,
    /// Namespace the identifier matched in.
    pub namespace: Namespace,
}

// ─── PinRegistry ────────────────────────────────────────────────────

/// Per-board alias registry.
#[derive(Debug, Clone)]
pub struct PinRegistry {
    board: Board,
    by_key: HashMap<&'static str, PinNumber>,
    by_name: HashMap<&'static str, PinNumber>,
    by_number: HashMap<&'static str, PinNumber>,
}

impl PinRegistry {
    /// Load the built-in table of `board`.
    pub fn new(board: Board) -> Self {
        Self::from_table(board, board.table())
    }

    /// Load an arbitrary table under the given board label.
    ///
    /// Within a namespace a later duplicate alias replaces the earlier one.
    pub fn from_table(board: Board, table: &'static BoardTable) -> Self {
        info!("Loading look-up table for {}", board.description());

        let registry = Self {
            board,
            by_key: collect(table.keys),
            by_name: collect(table.names),
            by_number: collect(table.numbers),
        };

        debug!(
            "Pin registry for {board}: {} keys, {} names, {} numbers",
            registry.by_key.len(),
            registry.by_name.len(),
            registry.by_number.len(),
        );
        registry
    }

    /// Board whose table was loaded.
    pub fn board(&self) -> Board {
        self.board
    }

    fn map(&self, namespace: Namespace) -> &HashMap<&'static str, PinNumber> {
        match namespace {
            Namespace::Key => &self.by_key,
            Namespace::Name => &self.by_name,
            Namespace::Number => &self.by_number,
        }
    }

    /// Find `identifier`, reporting which namespace matched.
    ///
    /// # Errors
    /// `PinError::Unresolved` carrying `identifier` if no namespace has it.
    pub fn lookup(&self, identifier: &str) -> Result<Resolution, PinError> {
        for namespace in Namespace::RESOLUTION_ORDER {
            if let Some(&pin) = self.map(namespace).get(identifier) {
                debug!("GPIO {identifier:?} -> {pin} ({namespace})");
                return Ok(Resolution { pin, namespace });
            }
        }
        Err(PinError::Unresolved(identifier.to_string()))
    }

    /// Resolve `identifier` to its canonical pin number.
    pub fn resolve(&self, identifier: &str) -> Result<PinNumber, PinError> {
        self.lookup(identifier).map(|r| r.pin)
    }

    /// Number of aliases in one namespace.
    pub fn len(&self, namespace: Namespace) -> usize {
        self.map(namespace).len()
    }

    /// Aliases of one namespace, sorted by alias string.
    pub fn aliases(&self, namespace: Namespace) -> Vec<PinAlias> {
        let mut entries: Vec<PinAlias> = self
            .map(namespace)
            .iter()
            .map(|(alias, pin)| (*alias, *pin))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

fn collect(entries: &'static [PinAlias]) -> HashMap<&'static str, PinNumber> {
    entries.iter().copied().collect()
}
