use log::debug;

use crate::{
    grid::{Cell, Grid},
    solver::{Link, PredecessorTable},
    Error, Position,
};

/// Cells of a shortest path, from the start to the goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Position>,
}

impl Path {
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    pub fn step_n(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<Position> {
        self.cells.first().copied()
    }

    pub fn goal(&self) -> Option<Position> {
        self.cells.last().copied()
    }
}

/// Follow predecessor links from `goal` back to the start, then mark every
/// cell on the way as `OnPath`. Nothing is marked if the chain is broken.
pub fn reconstruct(
    grid: &mut Grid,
    links: &PredecessorTable,
    goal: Position,
) -> Result<Path, Error> {
    let mut cells = Vec::new();
    let mut cur_ind = grid
        .pos_to_ind(&goal)
        .ok_or(Error::BrokenPredecessorChain(goal))?;
    loop {
        let cur_pos = grid
            .ind_to_pos(cur_ind)
            .ok_or(Error::BrokenPredecessorChain(goal))?;
        // A chain longer than the grid must have looped.
        if cells.len() == grid.cell_n() {
            return Err(Error::BrokenPredecessorChain(cur_pos));
        }

        cells.push(cur_pos);
        match links.link(cur_ind) {
            Some(Link::Start) => break,
            Some(Link::From(prev_ind)) => cur_ind = prev_ind,
            Some(Link::Undiscovered) | None => {
                return Err(Error::BrokenPredecessorChain(cur_pos))
            }
        }
    }

    cells.reverse();
    for pos in &cells {
        grid.mark(pos, Cell::OnPath);
    }
    debug!(
        "Traced a path of {} step(s) from {} to {}.",
        cells.len() - 1,
        cells[0],
        goal
    );
    Ok(Path { cells })
}
