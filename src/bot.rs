// Mancala bot: depth-bounded minimax with alpha-beta pruning.
//
// The bot never mutates the live board. Every candidate move is applied to a
// clone, and each recursive call owns its clone exclusively, so root moves
// can also be scored in parallel without any shared mutable state.

use log::{debug, info};
use rayon::prelude::*;

use crate::board::MancalaBoard;
use crate::config::Config;
use crate::types::{MoveOutcome, Player};

/// Execution strategy for scoring the root moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExecutionStrategy {
    /// Sequential scoring, the reference behavior on any hardware
    Sequential,
    /// Root moves fanned out on the rayon thread pool
    ParallelRoot,
}

/// Minimax player with alpha-beta pruning.
///
/// Holds its assigned player id for the lifetime of a game; the evaluation
/// heuristic is always taken from this fixed perspective, regardless of whose
/// turn it is at a given search node.
pub struct Bot {
    player_id: Player,
    opponent_id: Player,
    config: Config,
}

impl Bot {
    /// Creates a new Bot instance playing as `player_id`
    ///
    /// # Arguments
    /// * `player_id` - The side this bot plays for the whole game
    /// * `config` - Static configuration that does not change during the bot's lifetime
    pub fn new(player_id: Player, config: Config) -> Self {
        Bot {
            player_id,
            opponent_id: player_id.opponent(),
            config,
        }
    }

    /// Computes the best pit for this bot on the given board
    ///
    /// Enumerates the bot's legal moves in ascending pit order, scores each
    /// by minimax lookahead and returns the first move with the highest
    /// score. Returns `None` when the bot has no legal moves; callers are
    /// expected to have checked `is_game_over` first.
    ///
    /// # Arguments
    /// * `board` - Current board state; never mutated
    ///
    /// # Returns
    /// * `Option<usize>` - Best pit index, or `None` without legal moves
    pub fn get_best_move(&self, board: &MancalaBoard) -> Option<usize> {
        // Moves are applied for the board's active player, so searching out
        // of turn cannot produce a meaningful pit
        if board.current_player != self.player_id {
            info!("{}: asked to move out of turn", self.player_id.as_str());
            return None;
        }

        let legal_moves = board.get_legal_moves(self.player_id);
        if legal_moves.is_empty() {
            info!("{}: no legal moves to search", self.player_id.as_str());
            return None;
        }

        let strategy = self.determine_strategy(rayon::current_num_threads());
        debug!(
            "{}: scoring {} root moves ({:?})",
            self.player_id.as_str(),
            legal_moves.len(),
            strategy
        );

        let scored: Vec<(usize, i32)> = match strategy {
            ExecutionStrategy::Sequential => legal_moves
                .iter()
                .map(|&pit| (pit, self.score_root_move(board, pit)))
                .collect(),
            ExecutionStrategy::ParallelRoot => legal_moves
                .par_iter()
                .map(|&pit| (pit, self.score_root_move(board, pit)))
                .collect(),
        };

        // First move encountered in ascending pit order wins ties
        let mut best_move = None;
        let mut best_score = i32::MIN;
        for (pit, score) in scored {
            if score > best_score {
                best_score = score;
                best_move = Some(pit);
            }
        }

        info!(
            "{}: chose pit {:?} (score: {})",
            self.player_id.as_str(),
            best_move,
            best_score
        );
        best_move
    }

    /// Selects sequential or parallel root scoring from config and hardware
    fn determine_strategy(&self, num_cpus: usize) -> ExecutionStrategy {
        if self.config.strategy.parallel_root_enabled
            && num_cpus >= self.config.strategy.min_cpus_for_parallel
        {
            ExecutionStrategy::ParallelRoot
        } else {
            ExecutionStrategy::Sequential
        }
    }

    /// Applies one root move on a clone and evaluates the resulting state.
    ///
    /// Every root move gets a full alpha-beta window, so scores are
    /// independent of sibling order and the parallel strategy returns
    /// exactly the sequential result.
    fn score_root_move(&self, board: &MancalaBoard, pit: usize) -> i32 {
        let mut next_board = board.clone();
        match next_board.make_move(pit) {
            // An extra turn keeps the bot in the maximizing role for the
            // next ply; otherwise the opponent minimizes.
            Ok(MoveOutcome::ExtraTurn) => self.minimax(
                &next_board,
                self.config.search.max_depth.saturating_sub(1),
                true,
                i32::MIN,
                i32::MAX,
            ),
            Ok(MoveOutcome::TurnPassed) => self.minimax(
                &next_board,
                self.config.search.max_depth.saturating_sub(1),
                false,
                i32::MIN,
                i32::MAX,
            ),
            // Unreachable for pits coming from get_legal_moves
            Err(_) => i32::MIN,
        }
    }

    /// Recursive minimax with alpha-beta pruning
    ///
    /// # Arguments
    /// * `board` - State reached so far (owned clone of the caller)
    /// * `depth` - Plies left before cutting off to the static evaluation
    /// * `is_maximizing` - Whether this node plays the bot's own side
    /// * `alpha` - Best score the maximizer can already guarantee
    /// * `beta` - Best score the minimizer can already guarantee
    ///
    /// # Returns
    /// * `i32` - Heuristic value of this subtree for the bot
    fn minimax(
        &self,
        board: &MancalaBoard,
        depth: u8,
        is_maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        if depth == 0 || board.is_game_over() {
            return self.evaluate(board);
        }

        let current_player = if is_maximizing {
            self.player_id
        } else {
            self.opponent_id
        };
        let legal_moves = board.get_legal_moves(current_player);
        // An empty side is the only way to have zero legal moves, so this
        // matches the is_game_over coverage above
        if legal_moves.is_empty() {
            return self.evaluate(board);
        }

        if is_maximizing {
            let mut max_eval = i32::MIN;
            for pit in legal_moves {
                let mut next_board = board.clone();
                let outcome = match next_board.make_move(pit) {
                    Ok(outcome) => outcome,
                    Err(_) => continue,
                };

                // An extra turn keeps the same side maximizing for one more ply
                let next_is_maximizing = match outcome {
                    MoveOutcome::ExtraTurn => is_maximizing,
                    MoveOutcome::TurnPassed => false,
                };

                let value = self.minimax(&next_board, depth - 1, next_is_maximizing, alpha, beta);
                max_eval = max_eval.max(value);
                alpha = alpha.max(value);

                // Remaining siblings cannot affect the result
                if beta <= alpha {
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = i32::MAX;
            for pit in legal_moves {
                let mut next_board = board.clone();
                let outcome = match next_board.make_move(pit) {
                    Ok(outcome) => outcome,
                    Err(_) => continue,
                };

                // An opponent extra turn stays in the minimizing role
                let next_is_maximizing = match outcome {
                    MoveOutcome::ExtraTurn => is_maximizing,
                    MoveOutcome::TurnPassed => true,
                };

                let value = self.minimax(&next_board, depth - 1, next_is_maximizing, alpha, beta);
                min_eval = min_eval.min(value);
                beta = beta.min(value);

                if beta <= alpha {
                    break;
                }
            }
            min_eval
        }
    }

    /// Static evaluation: own store minus opponent store, always from the
    /// bot's fixed perspective
    fn evaluate(&self, board: &MancalaBoard) -> i32 {
        let (p1_score, p2_score) = board.get_score();
        match self.player_id {
            Player::One => i32::from(p1_score) - i32::from(p2_score),
            Player::Two => i32::from(p2_score) - i32::from(p1_score),
        }
    }
}
