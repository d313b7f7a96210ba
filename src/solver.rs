use log::{debug, trace};

use crate::{
    frontier::{FrontierEntry, FrontierQueue},
    grid::{Cell, Grid},
    path::{self, Path},
    Direction, Error, Position,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    Undiscovered,
    Start,
    From(usize),
}

/// Predecessor of every cell, which is also the set of discovered cells.
/// Each slot is written once, when its cell is discovered.
#[derive(Debug)]
pub struct PredecessorTable {
    links: Vec<Link>,
    discovered_n: usize,
}

impl PredecessorTable {
    pub fn new(cell_n: usize) -> Self {
        Self {
            links: vec![Link::Undiscovered; cell_n],
            discovered_n: 0,
        }
    }

    pub fn link(&self, ind: usize) -> Option<Link> {
        self.links.get(ind).copied()
    }

    pub fn is_discovered(&self, ind: usize) -> bool {
        self.link(ind).is_some_and(|link| link != Link::Undiscovered)
    }

    pub fn discovered_n(&self) -> usize {
        self.discovered_n
    }

    fn discover(&mut self, ind: usize, link: Link) -> bool {
        match self.links.get_mut(ind) {
            Some(slot) if *slot == Link::Undiscovered => {
                *slot = link;
                self.discovered_n += 1;
                true
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverState {
    Idle,
    Running,
    Solved,
    Unsoluble,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Traversal {
    Solved { goal: Position },
    Unsoluble,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    Solved(Path),
    Unsoluble,
}

impl Solution {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Solution::Solved(path) => Some(path),
            Solution::Unsoluble => None,
        }
    }

    pub fn step_n(&self) -> Option<usize> {
        self.path().map(|path| path.step_n())
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, Solution::Solved(_))
    }
}

/// Breadth first search from the top-left to the bottom-right cell of a grid.
///
/// Cells are marked `Visited` when they are enqueued, not when they are
/// expanded, so every cell enters the frontier at most once.
#[derive(Debug)]
pub struct Solver<'a> {
    grid: &'a mut Grid,
    frontier: FrontierQueue,
    links: PredecessorTable,
    state: SolverState,
}

impl<'a> Solver<'a> {
    pub fn new(grid: &'a mut Grid) -> Self {
        grid.clear_marks();
        let links = PredecessorTable::new(grid.cell_n());
        Self {
            grid,
            frontier: FrontierQueue::new(),
            links,
            state: SolverState::Idle,
        }
    }

    pub fn state(&self) -> SolverState {
        self.state
    }

    pub fn discovered_n(&self) -> usize {
        self.links.discovered_n()
    }

    pub fn enqueued_n(&self) -> usize {
        self.frontier.enqueued_n()
    }

    pub fn links(&self) -> &PredecessorTable {
        &self.links
    }

    pub fn grid(&self) -> &Grid {
        &*self.grid
    }

    /// Run the search to a terminal state. Once terminal, later calls report
    /// the same outcome without searching again.
    pub fn run(&mut self) -> Result<Traversal, Error> {
        let (start, goal) = match (self.grid.start(), self.grid.goal()) {
            (Some(start), Some(goal)) => (start, goal),
            _ => {
                if self.state == SolverState::Idle {
                    debug!("Grid is empty, nothing to search.");
                }
                return Ok(self.give_up());
            }
        };

        match self.state {
            SolverState::Idle => {
                if !self.is_open(&start) || !self.is_open(&goal) {
                    debug!(
                        "Start {} or goal {} is blocked, nothing to search.",
                        start, goal
                    );
                    return Ok(self.give_up());
                }

                self.discover(start, None);
                self.transit(SolverState::Running);
                self.search(goal)
            }
            SolverState::Running => self.search(goal),
            SolverState::Solved => Ok(Traversal::Solved { goal }),
            SolverState::Unsoluble => Ok(Traversal::Unsoluble),
        }
    }

    pub fn trace_path(&mut self, goal: Position) -> Result<Path, Error> {
        path::reconstruct(self.grid, &self.links, goal)
    }

    fn search(&mut self, goal: Position) -> Result<Traversal, Error> {
        while !self.frontier.is_empty() {
            let cur_pos = self.frontier.dequeue()?.pos();
            if cur_pos == goal {
                self.transit(SolverState::Solved);
                return Ok(Traversal::Solved { goal });
            }

            for next_pos in Direction::all_dirs()
                .iter()
                .flat_map(|dir| cur_pos.neighbor(*dir))
            {
                if self.is_open(&next_pos) {
                    self.discover(next_pos, Some(cur_pos));
                }
            }
        }

        Ok(self.give_up())
    }

    fn is_open(&self, pos: &Position) -> bool {
        self.grid.cell(pos) == Some(Cell::Open)
    }

    fn discover(&mut self, pos: Position, prev: Option<Position>) -> bool {
        let Some(ind) = self.grid.pos_to_ind(&pos) else {
            return false;
        };
        let link = match prev {
            None => Link::Start,
            Some(prev_pos) => match self.grid.pos_to_ind(&prev_pos) {
                Some(prev_ind) => Link::From(prev_ind),
                None => return false,
            },
        };
        if !self.links.discover(ind, link) {
            return false;
        }

        trace!("Discovered {} from {:?}.", pos, prev);
        self.grid.mark(&pos, Cell::Visited);
        self.frontier.enqueue(FrontierEntry::new(pos, prev));
        true
    }

    fn give_up(&mut self) -> Traversal {
        if self.state != SolverState::Unsoluble {
            self.transit(SolverState::Unsoluble);
        }
        Traversal::Unsoluble
    }

    fn transit(&mut self, state: SolverState) {
        debug!(
            "Solver goes from {:?} to {:?}, {} cell(s) discovered.",
            self.state,
            state,
            self.discovered_n()
        );
        self.state = state;
    }
}

/// Solve the grid in place. On success the returned path is also marked on
/// the grid as `OnPath` cells.
pub fn solve(grid: &mut Grid) -> Result<Solution, Error> {
    let mut solver = Solver::new(grid);
    match solver.run()? {
        Traversal::Solved { goal } => solver.trace_path(goal).map(Solution::Solved),
        Traversal::Unsoluble => Ok(Solution::Unsoluble),
    }
}
