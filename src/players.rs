use std::io::{self, BufRead, Write};

use anyhow::{Result, anyhow, bail};
use rand::seq::IndexedRandom;
use rand_xoshiro::{Xoshiro256PlusPlus, rand_core::SeedableRng};

use crate::board::{Pos, piece::Color};

/// The text channel a game session talks through
/// Line oriented input plus a display for the board and the prompts
///
/// Both halves are borrowed, so the caller decides the session lifetime and
/// gets the handles back when the game ends.
pub struct Console<'a> {
    input: &'a mut dyn BufRead,
    output: &'a mut dyn Write,
}

impl<'a> Console<'a> {
    pub fn new(input: &'a mut dyn BufRead, output: &'a mut dyn Write) -> Self {
        Self { input, output }
    }

    /// Displays `text` and reads one line of input, trimmed
    /// Returns `None` when the input channel is exhausted
    pub fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}

impl Write for Console<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.output.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}

/// A move supplier for one color
///
/// Asked only when at least one legal move exists. `moves` lists the legal
/// positions, though an implementation may answer with any position: the game
/// validates the answer and asks again if it is not playable.
pub trait Player {
    fn choose_move(
        &mut self,
        console: &mut Console<'_>,
        color: Color,
        moves: &[Pos],
    ) -> Result<Pos>;
}

/// Human player typing `<row>, <column>` coordinates on the console
#[derive(Debug, Default, Clone, Copy)]
pub struct Interactive;

impl Player for Interactive {
    fn choose_move(
        &mut self,
        console: &mut Console<'_>,
        color: Color,
        _moves: &[Pos],
    ) -> Result<Pos> {
        loop {
            let answer = console
                .prompt(&format!("{color}, where do you want to move? "))?
                .ok_or_else(|| anyhow!("Input channel closed while waiting for {color}"))?;
            match parse_pos(&answer) {
                Some(pos) => return Ok(pos),
                // Not even a coordinate pair, legality is checked by the game
                None => writeln!(console, "Invalid move!")?,
            }
        }
    }
}

/// Parses a `<row>, <column>` answer into a position
fn parse_pos(answer: &str) -> Option<Pos> {
    let (row, col) = answer.split_once(',')?;
    let row = row.trim().parse().ok()?;
    let col = col.trim().parse().ok()?;
    Some([row, col])
}

/// Automated player choosing uniformly among the legal moves
#[derive(Debug, Clone)]
pub struct RandomChoice {
    rng: Xoshiro256PlusPlus,
}

impl RandomChoice {
    pub fn new() -> Self {
        Self {
            rng: Xoshiro256PlusPlus::from_os_rng(),
        }
    }

    /// Seeded variant for reproducible games
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Xoshiro256PlusPlus::seed_from_u64(seed),
        }
    }
}

impl Default for RandomChoice {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomChoice {
    fn choose_move(
        &mut self,
        console: &mut Console<'_>,
        color: Color,
        moves: &[Pos],
    ) -> Result<Pos> {
        let Some(&pos) = moves.choose(&mut self.rng) else {
            bail!("{color} was asked to choose from an empty move list");
        };
        writeln!(console, "{color}, where do you want to move? {pos:?}")?;
        Ok(pos)
    }
}
