//! Console Reversi
//!
//! The classic two player flipping game on an 8x8 board: the board state
//! machine, a blocking run loop, and human and random choice players.

/// Board state, move legality and capture resolution
pub mod board;

/// Turn orchestration and the run loop
pub mod game;

/// The console channel and the player implementations
pub mod players;
