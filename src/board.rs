// Mancala (Kalah) board engine
//
// Owns the 14-slot state vector and the active-player field, and applies the
// full rule chain for a move: sowing, capture, extra-turn detection and turn
// switching. The engine knows nothing about search or player strategies; the
// bot drives it purely through clones and the public methods below.

use log::debug;

use crate::types::{IllegalMove, MoveOutcome, Player, SLOT_COUNT, STONES_PER_PIT};

use std::fmt;

/// Game state: the slot vector plus whose turn it is.
///
/// Every slot value is non-negative and the total stone count is constant
/// for the whole game; stones are only ever relocated, never created or
/// destroyed. Clones are independent value copies, so the bot can mutate a
/// clone per candidate move without touching the live game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MancalaBoard {
    pub slots: [u8; SLOT_COUNT],
    pub current_player: Player,
}

impl MancalaBoard {
    /// Creates the starting position: 4 stones in each pit, empty stores,
    /// Player 1 to move.
    pub fn new() -> Self {
        let mut slots = [STONES_PER_PIT; SLOT_COUNT];
        slots[Player::One.store()] = 0;
        slots[Player::Two.store()] = 0;
        MancalaBoard {
            slots,
            current_player: Player::One,
        }
    }

    /// Returns the pit indices `player` may select, in ascending order.
    /// Empty when the player's whole side is depleted. No side effects.
    pub fn get_legal_moves(&self, player: Player) -> Vec<usize> {
        player.pits().filter(|&i| self.slots[i] > 0).collect()
    }

    /// Applies a move for the current player and reports whether the mover
    /// earned an extra turn.
    ///
    /// The full rule chain:
    /// 1. Pick up all stones from the selected pit.
    /// 2. Sow them counter-clockwise one per slot, skipping the opponent's
    ///    store entirely (a skipped slot consumes no sowing step).
    /// 3. If the last stone landed in an empty pit on the mover's own side
    ///    and the opposite pit holds stones, capture both into the store.
    /// 4. If the last stone landed in the mover's store, the turn is kept;
    ///    otherwise it passes to the other player.
    ///
    /// Selecting a store, an opponent pit or an empty pit is rejected with
    /// an `IllegalMove` and leaves the board untouched.
    pub fn make_move(&mut self, pit_index: usize) -> Result<MoveOutcome, IllegalMove> {
        if !self.current_player.owns_pit(pit_index) {
            return Err(IllegalMove::NotOwnPit(pit_index));
        }

        let mut stones = self.slots[pit_index];
        if stones == 0 {
            return Err(IllegalMove::EmptyPit(pit_index));
        }

        let player_store = self.current_player.store();
        let opponent_store = self.current_player.opponent().store();

        // Pick up all stones and sow counter-clockwise
        self.slots[pit_index] = 0;
        let mut index = pit_index;
        while stones > 0 {
            index = (index + 1) % SLOT_COUNT;
            if index == opponent_store {
                continue; // never sow into the opponent's store
            }
            self.slots[index] += 1;
            stones -= 1;
        }

        // Capture: last stone landed in a pit on the mover's side that was
        // empty before this sowing pass (it holds exactly the one stone we
        // just dropped), and the opposite pit has stones to take.
        if self.current_player.owns_pit(index) && self.slots[index] == 1 {
            let opposite = 12 - index;
            if self.slots[opposite] > 0 {
                let captured = self.slots[opposite] + 1;
                self.slots[player_store] += captured;
                self.slots[opposite] = 0;
                self.slots[index] = 0;
                debug!(
                    "{} captured {} stones via pit {}",
                    self.current_player.as_str(),
                    captured,
                    index
                );
            }
        }

        if index == player_store {
            Ok(MoveOutcome::ExtraTurn)
        } else {
            self.current_player = self.current_player.opponent();
            Ok(MoveOutcome::TurnPassed)
        }
    }

    /// True once either side's six pits are all empty. Stores are not examined.
    pub fn is_game_over(&self) -> bool {
        Player::all()
            .iter()
            .any(|player| player.pits().all(|i| self.slots[i] == 0))
    }

    /// Sweeps each side's remaining pit stones into that side's own store.
    /// One-shot end-of-game bookkeeping; call only after `is_game_over`.
    pub fn collect_remaining(&mut self) {
        for player in Player::all().iter() {
            let store = player.store();
            for i in player.pits() {
                self.slots[store] += self.slots[i];
                self.slots[i] = 0;
            }
        }
    }

    /// Returns (Player 1 store, Player 2 store).
    pub fn get_score(&self) -> (u8, u8) {
        (
            self.slots[Player::One.store()],
            self.slots[Player::Two.store()],
        )
    }
}

impl Default for MancalaBoard {
    fn default() -> Self {
        MancalaBoard::new()
    }
}

impl fmt::Display for MancalaBoard {
    /// Terminal layout with Player 2's pits reversed so both rows read in
    /// their own sowing direction.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p1: Vec<u8> = Player::One.pits().map(|i| self.slots[i]).collect();
        let p2: Vec<u8> = Player::Two.pits().rev().map(|i| self.slots[i]).collect();

        writeln!(
            f,
            "P1 side: {:?}      P1 Store: {}",
            p1,
            self.slots[Player::One.store()]
        )?;
        write!(
            f,
            "P2 side: {:?}      P2 Store: {}",
            p2,
            self.slots[Player::Two.store()]
        )
    }
}
