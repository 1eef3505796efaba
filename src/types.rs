// Mancala (Kalah) domain types
// Board layout: slots 0-5 are Player 1's pits, slot 6 is Player 1's store,
// slots 7-12 are Player 2's pits, slot 13 is Player 2's store.

use std::fmt;
use std::ops::Range;

/// Total number of slots on the board (12 pits + 2 stores)
pub const SLOT_COUNT: usize = 14;

/// Number of pits per side, excluding the store
pub const PITS_PER_SIDE: usize = 6;

/// Stones placed in each pit at the start of a game
pub const STONES_PER_PIT: u8 = 4;

/// One of the two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Returns both players in move order (Player 1 starts)
    pub fn all() -> [Player; 2] {
        [Player::One, Player::Two]
    }

    /// Returns the other player
    pub fn opponent(&self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Index of this player's store slot
    pub fn store(&self) -> usize {
        match self {
            Player::One => 6,
            Player::Two => 13,
        }
    }

    /// Ascending range of this player's own pit indices
    pub fn pits(&self) -> Range<usize> {
        match self {
            Player::One => 0..6,
            Player::Two => 7..13,
        }
    }

    /// Checks whether a slot index is one of this player's pits (stores excluded)
    pub fn owns_pit(&self, index: usize) -> bool {
        self.pits().contains(&index)
    }

    /// Human-readable name for prompts and log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}

/// Result of applying a move: whether the mover keeps the turn.
///
/// Landing the last sown stone in one's own store grants another move.
/// The search relies on this flag to decide whether the maximizing or
/// minimizing role carries over to the next ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Last stone landed in the mover's store; same player moves again
    ExtraTurn,
    /// Turn passed to the other player
    TurnPassed,
}

/// A rejected move request. Reported locally by the board engine;
/// callers are expected to offer only legal pits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    /// The index is a store, out of range, or on the opponent's side
    NotOwnPit(usize),
    /// The selected pit holds no stones
    EmptyPit(usize),
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::NotOwnPit(index) => {
                write!(f, "slot {} is not one of the mover's pits", index)
            }
            IllegalMove::EmptyPit(index) => write!(f, "pit {} is empty", index),
        }
    }
}
