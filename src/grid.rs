use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{Context, Result};

use crate::{Error, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Open,
    Blocked,
    Visited,
    OnPath,
}

impl TryFrom<char> for Cell {
    type Error = Error;

    fn try_from(value: char) -> std::result::Result<Self, Self::Error> {
        match value {
            '0' => Ok(Cell::Open),
            '1' => Ok(Cell::Blocked),
            other => Err(Error::InvalidCharForGrid(other)),
        }
    }
}

impl Cell {
    pub fn to_char(&self) -> char {
        match self {
            Cell::Open | Cell::Visited => '.',
            Cell::Blocked => '#',
            Cell::OnPath => '+',
        }
    }
}

/// Rectangular maze stored row by row. The shape is fixed once built, only
/// the state of single cells changes while solving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    row_n: usize,
    col_n: usize,
}

impl TryFrom<&str> for Grid {
    type Error = Error;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        let mut builder = GridBuilder::new();
        for line in value.lines() {
            builder.add_row(line)?;
        }

        Ok(builder.build())
    }
}

impl Grid {
    pub fn empty() -> Self {
        Self {
            cells: Vec::new(),
            row_n: 0,
            col_n: 0,
        }
    }

    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn cell_n(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> Option<Position> {
        if self.is_empty() {
            None
        } else {
            Some(Position::new(0, 0))
        }
    }

    pub fn goal(&self) -> Option<Position> {
        if self.is_empty() {
            None
        } else {
            Some(Position::new(self.row_n - 1, self.col_n - 1))
        }
    }

    pub fn cell(&self, pos: &Position) -> Option<Cell> {
        self.pos_to_ind(pos).and_then(|ind| self.cells.get(ind).copied())
    }

    pub fn position_iter(&self, cell: Cell) -> impl Iterator<Item = Position> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(move |(_, this_cell)| **this_cell == cell)
            .flat_map(|(ind, _)| self.ind_to_pos(ind))
    }

    pub fn clear_marks(&mut self) {
        for cell in self.cells.iter_mut() {
            if matches!(cell, Cell::Visited | Cell::OnPath) {
                *cell = Cell::Open;
            }
        }
    }

    pub(crate) fn mark(&mut self, pos: &Position, cell: Cell) {
        if let Some(cell_mut) = self.cell_mut(pos) {
            debug_assert!(*cell_mut != Cell::Blocked);
            *cell_mut = cell;
        }
    }

    pub(crate) fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if pos.r < self.row_n && pos.c < self.col_n {
            Some(pos.r * self.col_n + pos.c)
        } else {
            None
        }
    }

    pub(crate) fn ind_to_pos(&self, ind: usize) -> Option<Position> {
        if ind < self.cells.len() {
            Some(Position::new(ind / self.col_n, ind % self.col_n))
        } else {
            None
        }
    }

    fn cell_mut(&mut self, pos: &Position) -> Option<&mut Cell> {
        self.pos_to_ind(pos).and_then(|ind| self.cells.get_mut(ind))
    }
}

#[derive(Debug, Default)]
pub struct GridBuilder {
    cells: Vec<Cell>,
    row_n: usize,
    col_n: Option<usize>,
}

impl GridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whitespace is ignored, so both `0101` and `0 1 0 1` give the same row.
    /// A row with no cells at all is skipped.
    pub fn add_row(&mut self, text: &str) -> std::result::Result<(), Error> {
        let row_cells = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(Cell::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        if row_cells.is_empty() {
            return Ok(());
        }

        let this_col_n = row_cells.len();
        let expect_col_n = *self.col_n.get_or_insert(this_col_n);
        if expect_col_n != this_col_n {
            return Err(Error::InconsistentRow(self.row_n, expect_col_n, this_col_n));
        }

        self.cells.extend(row_cells);
        self.row_n += 1;
        Ok(())
    }

    pub fn build(self) -> Grid {
        Grid {
            cells: self.cells,
            row_n: self.row_n,
            col_n: self.col_n.unwrap_or(0),
        }
    }
}

pub fn load(text: &str) -> std::result::Result<Grid, Error> {
    Grid::try_from(text)
}

pub fn read_grid<R: BufRead>(reader: R) -> Result<Grid> {
    let mut builder = GridBuilder::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}.", ind + 1))?;
        builder
            .add_row(line.as_str())
            .with_context(|| format!("Failed to parse line {} as a row of grid.", ind + 1))?;
    }

    Ok(builder.build())
}

pub fn read_grid_from_path<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    read_grid(BufReader::new(file)).with_context(|| {
        format!(
            "Failed to read grid from given file({}).",
            path.as_ref().display()
        )
    })
}
