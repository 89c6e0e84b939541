use itertools::Itertools;

use crate::board::{
    BOARD_SIZE, Board, BoardError, Pos,
    piece::{Color, Piece},
};

/// Directions a capture run can extend in
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    NW,  N,  NE,

     W,       E,

    SW,  S,  SE,
}

impl Direction {
    /// List all possible directions
    pub const fn variants() -> [Direction; 8] {
        [
            Direction::NW,
            Direction::N,
            Direction::NE,
            Direction::W,
            Direction::E,
            Direction::SW,
            Direction::S,
            Direction::SE,
        ]
    }

    /// Row and column deltas of a single step in this direction
    pub const fn offset(&self) -> (isize, isize) {
        match self {
            Direction::NW => (-1, -1),
            Direction::N => (-1, 0),
            Direction::NE => (-1, 1),
            Direction::W => (0, -1),
            Direction::E => (0, 1),
            Direction::SW => (1, -1),
            Direction::S => (1, 0),
            Direction::SE => (1, 1),
        }
    }
}

impl Board {
    /// Nearest position in a given direction, `None` when the step leaves the board
    fn step(pos: Pos, direction: Direction) -> Option<Pos> {
        let (row_delta, col_delta) = direction.offset();
        let row = pos[0].checked_add_signed(row_delta)?;
        let col = pos[1].checked_add_signed(col_delta)?;
        (row < BOARD_SIZE && col < BOARD_SIZE).then_some([row, col])
    }

    /// Walks away from `pos` collecting the run of opposite color pieces that
    /// placing a `color` piece at `pos` would capture in `direction`
    ///
    /// Returns `None` when the direction captures nothing: the walk hits an
    /// empty cell or leaves the board before reaching a piece of `color`, or
    /// reaches one with no opposite pieces in between. A returned run is never
    /// empty and is ordered from `pos` outwards.
    fn flip_run(&self, pos: Pos, color: Color, direction: Direction) -> Option<Vec<Pos>> {
        let mut run = Vec::new();
        let mut cursor = Self::step(pos, direction)?;
        loop {
            match self[cursor] {
                // Empty cell, the run is unterminated
                None => return None,
                // Own piece, anchors whatever was accumulated so far
                Some(piece) if piece.color() == color => {
                    return if run.is_empty() { None } else { Some(run) };
                }
                // Opposite color, part of the run
                Some(_) => run.push(cursor),
            }
            cursor = Self::step(cursor, direction)?;
        }
    }

    /// Checks if any adjacent cell holds a piece of the opposite color
    fn has_enemy_neighbor(&self, pos: Pos, color: Color) -> bool {
        Direction::variants().into_iter().any(|direction| {
            Self::step(pos, direction)
                .and_then(|neighbor| self[neighbor])
                .is_some_and(|piece| piece.color() != color)
        })
    }

    /// Checks if at least one direction from `pos` yields a capture for `color`
    fn is_flippable(&self, pos: Pos, color: Color) -> bool {
        Direction::variants()
            .into_iter()
            .any(|direction| self.flip_run(pos, color, direction).is_some())
    }

    /// Checks if placing a `color` piece at `pos` is legal
    /// Total over all inputs: positions outside the board are simply not valid moves
    pub fn valid_move(&self, pos: Pos, color: Color) -> bool {
        Self::is_valid_pos(pos) && self[pos].is_none() && self.is_flippable(pos, color)
    }

    /// Iterate on all legal positions for `color`, in row major order
    pub fn valid_moves(&self, color: Color) -> impl Iterator<Item = Pos> {
        (0..BOARD_SIZE)
            .cartesian_product(0..BOARD_SIZE)
            .map(|(row, col)| [row, col])
            .filter(move |&pos| {
                self[pos].is_none()
                    && self.has_enemy_neighbor(pos, color)
                    && self.is_flippable(pos, color)
            })
    }

    /// Checks if there is any legal move left for the given color
    pub fn has_move(&self, color: Color) -> bool {
        self.valid_moves(color).next().is_some()
    }

    /// Places a new piece of `color` at `pos` and flips every captured run
    ///
    /// The only way occupancy changes: pieces already on the board never move,
    /// they only flip in place. Returns the flipped positions. On error the
    /// board is left untouched.
    pub fn place_piece(&mut self, pos: Pos, color: Color) -> Result<Vec<Pos>, BoardError> {
        if !Self::is_valid_pos(pos) {
            return Err(BoardError::InvalidPosition(pos));
        }
        if self[pos].is_some() {
            return Err(BoardError::InvalidMove(pos, color));
        }

        let flips = Direction::variants()
            .into_iter()
            .filter_map(|direction| self.flip_run(pos, color, direction))
            .flatten()
            .collect::<Vec<_>>();
        if flips.is_empty() {
            return Err(BoardError::InvalidMove(pos, color));
        }

        self[pos] = Some(Piece::new(color));
        for &flip_pos in &flips {
            if let Some(piece) = self[flip_pos].as_mut() {
                piece.flip();
            }
        }

        Ok(flips)
    }
}
