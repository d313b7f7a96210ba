use crate::{Error, Position};

const INITIAL_CAPACITY: usize = 2;

/// A discovered cell waiting to be expanded. `prev` is only kept for
/// inspection, the solver reads predecessors from its `PredecessorTable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pos: Position,
    prev: Option<Position>,
}

impl FrontierEntry {
    pub fn new(pos: Position, prev: Option<Position>) -> Self {
        Self { pos, prev }
    }

    pub fn start(pos: Position) -> Self {
        Self::new(pos, None)
    }

    pub fn pos(&self) -> Position {
        self.pos
    }

    pub fn prev(&self) -> Option<Position> {
        self.prev
    }
}

/// FIFO of frontier entries in discovery order.
///
/// Dequeuing only moves the head index forward, entries before it are kept
/// until the queue is dropped. The backing storage doubles its capacity when
/// full. Whether a cell was discovered already is up to the caller.
#[derive(Debug)]
pub struct FrontierQueue {
    entries: Vec<FrontierEntry>,
    head: usize,
}

impl Default for FrontierQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl FrontierQueue {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(INITIAL_CAPACITY),
            head: 0,
        }
    }

    pub fn enqueue(&mut self, entry: FrontierEntry) {
        if self.entries.len() == self.entries.capacity() {
            let additional = self.entries.capacity().max(INITIAL_CAPACITY);
            self.entries.reserve_exact(additional);
        }

        self.entries.push(entry);
    }

    pub fn dequeue(&mut self) -> Result<FrontierEntry, Error> {
        let entry = *self.entries.get(self.head).ok_or(Error::EmptyQueue)?;
        self.head += 1;
        Ok(entry)
    }

    pub fn is_empty(&self) -> bool {
        self.head == self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len() - self.head
    }

    pub fn enqueued_n(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }
}
