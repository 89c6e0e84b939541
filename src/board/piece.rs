use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Number of piece colors
pub const COLOR_COUNT: usize = 2;

/// Piece colors
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Black,
    White,
}

impl Color {
    /// List all color variants, black first
    pub const fn variants() -> [Color; COLOR_COUNT] {
        [Color::Black, Color::White]
    }

    pub const fn opponent(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Single character used to render a piece of this color
    pub const fn glyph(&self) -> char {
        match self {
            Color::Black => 'B',
            Color::White => 'W',
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "black"),
            Color::White => write!(f, "white"),
        }
    }
}

/// A single piece on the board
/// Pieces never leave the board once placed, they only flip color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    color: Color,
}

impl Piece {
    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    /// The color this piece would show after flipping
    pub const fn opposite_color(&self) -> Color {
        self.color.opponent()
    }

    /// Flips the piece to the opposite color in place
    pub fn flip(&mut self) {
        self.color = self.opposite_color();
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.color.glyph())
    }
}
