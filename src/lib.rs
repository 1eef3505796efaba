// Library exports for the Mancala bot
// This allows integration tests and other utilities to use the core game logic

pub mod board;
pub mod bot;
pub mod config;
pub mod types;
