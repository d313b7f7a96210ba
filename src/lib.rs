use std::{error, fmt::Display, path::PathBuf};

use clap::Parser;

mod frontier;
mod grid;
mod path;
mod render;
mod solver;

pub use frontier::{FrontierEntry, FrontierQueue};
pub use grid::{load, read_grid, read_grid_from_path, Cell, Grid, GridBuilder};
pub use path::{reconstruct, Path};
pub use render::render;
pub use solver::{solve, Link, PredecessorTable, Solution, Solver, SolverState, Traversal};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InconsistentRow(usize, usize, usize),
    InvalidCharForGrid(char),
    EmptyQueue,
    BrokenPredecessorChain(Position),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(row_ind, expect_col_n, this_col_n) => write!(
                f,
                "Malformed grid, expect {} cell(s) in each row, given {} in row {}.",
                expect_col_n, this_col_n, row_ind
            ),
            Error::InvalidCharForGrid(c) => write!(
                f,
                "Invalid character({}) for grid, expect '0' or '1'.",
                c
            ),
            Error::EmptyQueue => write!(f, "Can't dequeue from an empty frontier queue."),
            Error::BrokenPredecessorChain(pos) => write!(
                f,
                "Predecessor chain is broken at {}, can't trace back to the start.",
                pos
            ),
        }
    }
}

impl error::Error for Error {}

/// Find the shortest path from the top-left to the bottom-right corner of a
/// maze made of 0s(passable) and 1s(blocked).
#[derive(Debug, Parser)]
#[command(name = "mopsolver")]
pub struct CLIArgs {
    /// Pretty-print (display) the maze after reading.
    #[arg(short = 'd')]
    pub display: bool,
    /// Print length of shortest path or 'No solution'.
    #[arg(short = 's')]
    pub steps: bool,
    /// Pretty-print maze with the path, if one exists.
    #[arg(short = 'p')]
    pub path: bool,
    /// Read maze from infile, default is stdin.
    #[arg(short = 'i', value_name = "INFILE")]
    pub input_path: Option<PathBuf>,
    /// Write all output to outfile, default is stdout.
    #[arg(short = 'o', value_name = "OUTFILE")]
    pub output_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// Neighbors are always generated in this order, which keeps the search
    /// deterministic between runs.
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::North,
            Direction::South,
            Direction::West,
            Direction::East,
        ];

        &ALL_DIRECTIONS
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub r: usize,
    pub c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        match dir {
            Direction::North if self.r > 0 => Some(Self::new(self.r - 1, self.c)),
            Direction::South => Some(Self::new(self.r + 1, self.c)),
            Direction::West if self.c > 0 => Some(Self::new(self.r, self.c - 1)),
            Direction::East => Some(Self::new(self.r, self.c + 1)),
            _ => None,
        }
    }

    pub fn is_adjacent_to(&self, other: &Position) -> bool {
        self.r.abs_diff(other.r) + self.c.abs_diff(other.c) == 1
    }
}
