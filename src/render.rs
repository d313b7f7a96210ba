use std::fmt::Display;

use crate::{
    grid::{Cell, Grid},
    Position,
};

/// Bordered picture of a grid. The border has a gap left of the first row
/// and right of the last row, where the maze is entered and left.
struct Rendering<'a> {
    grid: &'a Grid,
    on_path: Vec<bool>,
}

impl<'a> Rendering<'a> {
    fn new(grid: &'a Grid, path_cells: &[Position]) -> Self {
        let mut on_path = vec![false; grid.cell_n()];
        for ind in path_cells.iter().flat_map(|pos| grid.pos_to_ind(pos)) {
            on_path[ind] = true;
        }

        Self { grid, on_path }
    }

    fn write_border(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "|-{}|", "--".repeat(self.grid.col_n()))
    }
}

impl Display for Rendering<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let row_n = self.grid.row_n();
        self.write_border(f)?;
        for r in 0..row_n {
            write!(f, "{}", if r == 0 { "  " } else { "| " })?;
            for c in 0..self.grid.col_n() {
                let pos = Position::new(r, c);
                let cell = match self.grid.pos_to_ind(&pos) {
                    Some(ind) if self.on_path[ind] => Cell::OnPath,
                    _ => self.grid.cell(&pos).unwrap_or(Cell::Blocked),
                };
                write!(f, "{} ", cell.to_char())?;
            }
            writeln!(f, "{}", if r + 1 == row_n { " " } else { "|" })?;
        }
        self.write_border(f)
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Rendering::new(self, &[]).fmt(f)
    }
}

/// Draw the grid, with `path_cells` and any cell already marked `OnPath`
/// shown as `+`.
pub fn render(grid: &Grid, path_cells: &[Position]) -> String {
    Rendering::new(grid, path_cells).to_string()
}
