use log::info;
use std::env;
use std::io::{self, Write};
use std::process;

mod board;
mod bot;
mod config;
mod types;

use board::MancalaBoard;
use bot::Bot;
use types::{Player, PITS_PER_SIDE};

fn main() {
    // We default to 'info' level logging. But if the `RUST_LOG` environment variable is set,
    // we keep that value instead.
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }

    env_logger::init();

    info!("Starting Mancala...");

    // Load configuration once at startup
    let config = config::Config::load_or_default();

    println!("Welcome to Mancala!");
    println!("Select game mode:");
    println!("1 - Play against AI (You are Player 1)");
    println!("2 - Watch AI vs AI");

    let mode = loop {
        let input = prompt("Enter 1 or 2: ");
        match input.as_str() {
            "1" | "2" => break input,
            _ => println!("Invalid input."),
        }
    };

    let mut game = MancalaBoard::new();

    // Create AI agents
    let ai1 = Bot::new(Player::One, config.clone());
    let ai2 = Bot::new(Player::Two, config);

    // Game loop starts here
    while !game.is_game_over() {
        println!("\n{}", game);

        let mover = game.current_player;
        let pit = if mode == "1" && mover == Player::One {
            prompt_human_move(&game)
        } else {
            println!("\n{}'s turn (AI)...", mover.as_str());
            let ai = if mover == Player::One { &ai1 } else { &ai2 };
            match ai.get_best_move(&game) {
                Some(pit) => {
                    println!("AI chose pit: {}", pit);
                    pit
                }
                // No legal moves means the game is already over
                None => break,
            }
        };

        // Apply the chosen move
        if let Err(err) = game.make_move(pit) {
            println!("Illegal move: {}", err);
        }
    }

    // Game has ended
    println!("\nGame over!");
    game.collect_remaining();
    println!("{}", game);

    let (p1_score, p2_score) = game.get_score();
    println!(
        "\nFinal Score: Player 1: {} | Player 2: {}",
        p1_score, p2_score
    );

    if p1_score > p2_score {
        println!("Player 1 wins!");
    } else if p2_score > p1_score {
        println!("Player 2 wins!");
    } else {
        println!("It's a tie!");
    }
}

/// Prompts the human player for a legal pit, re-asking until one is given
fn prompt_human_move(game: &MancalaBoard) -> usize {
    println!("\nYour turn (Player 1)");
    let legal_moves = game.get_legal_moves(Player::One);
    println!("Legal moves: {:?}", legal_moves);

    loop {
        let input = prompt(&format!(
            "Choose a pit index to move from (0-{}): ",
            PITS_PER_SIDE - 1
        ));
        match input.parse::<usize>() {
            Ok(pit) if legal_moves.contains(&pit) => return pit,
            _ => println!("Invalid pit."),
        }
    }
}

/// Reads one trimmed line from stdin, exiting cleanly on EOF
fn prompt(message: &str) -> String {
    print!("{}", message);
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(0) | Err(_) => {
            println!();
            process::exit(0);
        }
        Ok(_) => line.trim().to_string(),
    }
}
