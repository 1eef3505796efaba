//! Playout Property Tests
//!
//! Whole-game properties checked over many random games and a bot-vs-bot
//! game: stone conservation after every move, guaranteed termination, and a
//! clean end-of-game sweep.

use mancala_bot_rust::board::MancalaBoard;
use mancala_bot_rust::bot::Bot;
use mancala_bot_rust::config::Config;
use mancala_bot_rust::types::Player;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const STARTING_STONES: u32 = 48;

/// Generous ply ceiling; real games end far earlier
const MAX_PLIES: u32 = 10_000;

fn total_stones(board: &MancalaBoard) -> u32 {
    board.slots.iter().map(|&s| u32::from(s)).sum()
}

fn assert_swept_clean(board: &MancalaBoard) {
    for player in Player::all().iter() {
        assert!(
            player.pits().all(|i| board.slots[i] == 0),
            "collect_remaining must empty every pit"
        );
    }
    let (p1_score, p2_score) = board.get_score();
    assert_eq!(
        u32::from(p1_score) + u32::from(p2_score),
        STARTING_STONES,
        "every stone ends up in a store"
    );
}

#[test]
fn test_random_playouts_conserve_stones() {
    let mut rng = StdRng::seed_from_u64(0x4B41_4C41);

    for game in 0..200 {
        let mut board = MancalaBoard::new();
        let mut plies = 0u32;

        while !board.is_game_over() {
            let legal_moves = board.get_legal_moves(board.current_player);
            assert!(
                !legal_moves.is_empty(),
                "a non-terminal board must offer moves (game {})",
                game
            );

            let pit = legal_moves[rng.random_range(0..legal_moves.len())];
            board.make_move(pit).expect("random legal move applies");

            assert_eq!(
                total_stones(&board),
                STARTING_STONES,
                "move from pit {} leaked stones (game {})",
                pit,
                game
            );

            plies += 1;
            assert!(plies < MAX_PLIES, "game {} did not terminate", game);
        }

        board.collect_remaining();
        assert_eq!(total_stones(&board), STARTING_STONES);
        assert_swept_clean(&board);
    }
}

#[test]
fn test_bot_game_terminates_and_conserves_stones() {
    let mut config = Config::default_hardcoded();
    config.search.max_depth = 3;

    let ai1 = Bot::new(Player::One, config.clone());
    let ai2 = Bot::new(Player::Two, config);

    let mut board = MancalaBoard::new();
    let mut plies = 0u32;

    while !board.is_game_over() {
        let mover = board.current_player;
        let ai = if mover == Player::One { &ai1 } else { &ai2 };
        let pit = ai
            .get_best_move(&board)
            .expect("a non-terminal board always has a move for the mover");

        board.make_move(pit).expect("bot only proposes legal pits");
        assert_eq!(total_stones(&board), STARTING_STONES);

        plies += 1;
        assert!(plies < MAX_PLIES, "bot game did not terminate");
    }

    board.collect_remaining();
    assert_swept_clean(&board);
}

#[test]
fn test_bot_play_is_deterministic() {
    let config = Config::default_hardcoded();
    let ai = Bot::new(Player::One, config);
    let board = MancalaBoard::new();

    let first = ai.get_best_move(&board);
    for _ in 0..5 {
        assert_eq!(ai.get_best_move(&board), first, "search must be deterministic");
    }
}
