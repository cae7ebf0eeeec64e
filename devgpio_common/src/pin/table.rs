//! Per-board GPIO alias tables.
//!
//! Pure data. Alias strings and numbers are relied upon by deployed record
//! databases, so every entry must stay exactly as listed, including the
//! zero-padded `GPIO07`/`GPIO08` names and `07`/`08` numbers on the
//! Raspberry Pi boards (there is no unpadded `7` or `8`).

/// Canonical GPIO line number used by the hardware access layer.
pub type PinNumber = u32;

/// One alias → canonical number pair.
pub type PinAlias = (&'static str, PinNumber);

/// The three alias namespaces of a board.
#[derive(Debug)]
pub struct BoardTable {
    /// Physical connector positions, e.g. `P1-08`.
    pub keys: &'static [PinAlias],
    /// Logical line names, e.g. `GPIO14`.
    pub names: &'static [PinAlias],
    /// Decimal string of the canonical number.
    pub numbers: &'static [PinAlias],
}

// ─── Raspberry Pi B Rev2 ────────────────────────────────────────────

pub static RASPI_B_REV2: BoardTable = BoardTable {
    keys: &[
        ("P1-08", 14),
        ("P1-10", 15),
        ("P1-12", 18),
        ("P1-16", 23),
        ("P1-18", 24),
        ("P1-22", 25),
        ("P1-24", 8),
        ("P1-26", 7),
        ("P1-03", 2),
        ("P1-05", 3),
        ("P1-07", 4),
        ("P1-11", 17),
        ("P1-13", 27),
        ("P1-15", 22),
        ("P1-19", 10),
        ("P1-21", 9),
        ("P1-23", 11),
        ("P5-03", 28),
        ("P5-05", 30),
        ("P5-04", 29),
        ("P5-06", 31),
    ],
    names: &[
        ("GPIO14", 14),
        ("GPIO15", 15),
        ("GPIO18", 18),
        ("GPIO23", 23),
        ("GPIO24", 24),
        ("GPIO25", 25),
        ("GPIO08", 8),
        ("GPIO07", 7),
        ("GPIO2", 2),
        ("GPIO3", 3),
        ("GPIO4", 4),
        ("GPIO17", 17),
        ("GPIO27", 27),
        ("GPIO22", 22),
        ("GPIO10", 10),
        ("GPIO9", 9),
        ("GPIO11", 11),
        ("GPIO28", 28),
        ("GPIO30", 30),
        ("GPIO29", 29),
        ("GPIO31", 31),
    ],
    numbers: &[
        ("14", 14),
        ("15", 15),
        ("18", 18),
        ("23", 23),
        ("24", 24),
        ("25", 25),
        ("08", 8),
        ("07", 7),
        ("2", 2),
        ("3", 3),
        ("4", 4),
        ("17", 17),
        ("27", 27),
        ("22", 22),
        ("10", 10),
        ("9", 9),
        ("11", 11),
        ("28", 28),
        ("30", 30),
        ("29", 29),
        ("31", 31),
    ],
};

// ─── Raspberry Pi B+ / 2 B ──────────────────────────────────────────

pub static RASPI_BP: BoardTable = BoardTable {
    keys: &[
        ("J8-08", 14),
        ("J8-10", 15),
        ("J8-12", 18),
        ("J8-16", 23),
        ("J8-18", 24),
        ("J8-22", 25),
        ("J8-24", 8),
        ("J8-26", 7),
        ("J8-03", 2),
        ("J8-05", 3),
        ("J8-07", 4),
        ("J8-11", 17),
        ("J8-13", 27),
        ("J8-15", 22),
        ("J8-19", 10),
        ("J8-21", 9),
        ("J8-23", 11),
        ("J8-27", 0),
        ("J8-28", 1),
        ("J8-29", 5),
        ("J8-31", 6),
        ("J8-32", 12),
        ("J8-33", 13),
        ("J8-35", 19),
        ("J8-36", 16),
        ("J8-37", 26),
        ("J8-38", 20),
        ("J8-40", 21),
    ],
    names: &[
        ("GPIO14", 14),
        ("GPIO15", 15),
        ("GPIO18", 18),
        ("GPIO23", 23),
        ("GPIO24", 24),
        ("GPIO25", 25),
        ("GPIO08", 8),
        ("GPIO07", 7),
        ("GPIO2", 2),
        ("GPIO3", 3),
        ("GPIO4", 4),
        ("GPIO17", 17),
        ("GPIO27", 27),
        ("GPIO22", 22),
        ("GPIO10", 10),
        ("GPIO9", 9),
        ("GPIO11", 11),
        ("GPIO0", 0),
        ("GPIO1", 1),
        ("GPIO5", 5),
        ("GPIO6", 6),
        ("GPIO12", 12),
        ("GPIO13", 13),
        ("GPIO19", 19),
        ("GPIO16", 16),
        ("GPIO26", 26),
        ("GPIO20", 20),
        ("GPIO21", 21),
    ],
    numbers: &[
        ("14", 14),
        ("15", 15),
        ("18", 18),
        ("23", 23),
        ("24", 24),
        ("25", 25),
        ("08", 8),
        ("07", 7),
        ("2", 2),
        ("3", 3),
        ("4", 4),
        ("17", 17),
        ("27", 27),
        ("22", 22),
        ("10", 10),
        ("9", 9),
        ("11", 11),
        ("0", 0),
        ("1", 1),
        ("5", 5),
        ("6", 6),
        ("12", 12),
        ("13", 13),
        ("19", 19),
        ("16", 16),
        ("26", 26),
        ("20", 20),
        ("21", 21),
    ],
};

// ─── BeagleBone Black ───────────────────────────────────────────────

/// The `led*` labels live in the key namespace too; there are no names.
pub static BEAGLEBONE_BLACK: BoardTable = BoardTable {
    keys: &[
        ("USR0", 53),
        ("USR1", 54),
        ("USR2", 55),
        ("USR3", 56),
        ("led0", 0),
        ("led1", 1),
        ("led2", 2),
        ("led3", 3),
    ],
    names: &[],
    numbers: &[("0", 0), ("1", 1), ("2", 2), ("3", 3)],
};
