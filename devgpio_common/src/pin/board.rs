//! Supported single-board computers.
//!
//! The board is chosen once at startup (config file or CLI) and decides
//! which alias table the [`PinRegistry`](super::registry::PinRegistry) loads.

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use super::table::{self, BoardTable};

/// Target hardware platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Board {
    /// Raspberry Pi model B, revision 2 (P1 and P5 headers).
    #[serde(rename = "raspi_b_rev2")]
    RaspiBRev2,
    /// Raspberry Pi B+ and Raspberry Pi 2 model B (40-pin J8 header).
    #[serde(rename = "raspi_bp", alias = "raspi_2b")]
    RaspiBPlus,
    /// BeagleBone Black (user LEDs only).
    #[serde(rename = "beaglebone_black", alias = "bbb")]
    BeagleBoneBlack,
}

impl Board {
    /// Every supported board, in declaration order.
    pub const ALL: [Board; 3] = [Self::RaspiBRev2, Self::RaspiBPlus, Self::BeagleBoneBlack];

    /// Canonical text form, as accepted by config files and the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RaspiBRev2 => "raspi_b_rev2",
            Self::RaspiBPlus => "raspi_bp",
            Self::BeagleBoneBlack => "beaglebone_black",
        }
    }

    /// Human-readable board name for log output.
    pub fn description(&self) -> &'static str {
        match self {
            Self::RaspiBRev2 => "Raspberry Pi B Rev2",
            Self::RaspiBPlus => "Raspberry Pi B+ / 2 B",
            Self::BeagleBoneBlack => "BeagleBone Black",
        }
    }

    /// The static alias table for this board.
    pub fn table(&self) -> &'static BoardTable {
        match self {
            Self::RaspiBRev2 => &table::RASPI_B_REV2,
            Self::RaspiBPlus => &table::RASPI_BP,
            Self::BeagleBoneBlack => &table::BEAGLEBONE_BLACK,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Board {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raspi_b_rev2" => Ok(Self::RaspiBRev2),
            "raspi_bp" | "raspi_2b" => Ok(Self::RaspiBPlus),
            "beaglebone_black" | "bbb" => Ok(Self::BeagleBoneBlack),
            _ => Err(format!(
                "unknown board {s:?}, expected one of \"raspi_b_rev2\", \"raspi_bp\", \"beaglebone_black\""
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_parse_round_trip() {
        for board in Board::ALL {
            assert_eq!(board.to_string().parse::<Board>(), Ok(board));
        }
    }

    #[test]
    fn parse_aliases() {
        assert_eq!("raspi_2b".parse::<Board>(), Ok(Board::RaspiBPlus));
        assert_eq!("bbb".parse::<Board>(), Ok(Board::BeagleBoneBlack));
    }

    #[test]
    fn parse_unknown_board() {
        let err = "odroid_c2".parse::<Board>().unwrap_err();
        assert!(err.contains("odroid_c2"));
        assert!("RASPI_BP".parse::<Board>().is_err());
    }

    #[test]
    fn serde_names_match_from_str() {
        #[derive(Debug, Deserialize)]
        struct Wrapper {
            board: Board,
        }

        let w: Wrapper = toml::from_str("board = \"raspi_b_rev2\"").unwrap();
        assert_eq!(w.board, Board::RaspiBRev2);
        let w: Wrapper = toml::from_str("board = \"bbb\"").unwrap();
        assert_eq!(w.board, Board::BeagleBoneBlack);
        assert!(toml::from_str::<Wrapper>("board = \"RaspiBRev2\"").is_err());
    }

    #[test]
    fn descriptions_are_distinct() {
        assert_eq!(Board::RaspiBRev2.description(), "Raspberry Pi B Rev2");
        assert_eq!(Board::BeagleBoneBlack.description(), "BeagleBone Black");
        assert_ne!(
            Board::RaspiBRev2.description(),
            Board::RaspiBPlus.description()
        );
    }
}
