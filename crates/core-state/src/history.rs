use tracing::trace;

/// Default capacity of each history stack.
pub const HISTORY_CAPACITY_DEFAULT: usize = 5000;

/// Bounded LIFO of single characters. Pushes past capacity are dropped; the
/// oldest entries are never evicted.
#[derive(Debug, Clone)]
pub struct BoundedStack {
    items: Vec<u8>,
    capacity: usize,
}

impl BoundedStack {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity.min(1024)),
            capacity,
        }
    }

    /// Push `c`; returns false when the stack was full and `c` was dropped.
    pub fn push(&mut self, c: u8) -> bool {
        if self.items.len() >= self.capacity {
            return false;
        }
        self.items.push(c);
        true
    }

    pub fn pop(&mut self) -> Option<u8> {
        self.items.pop()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Entries bottom to top.
    pub fn as_slice(&self) -> &[u8] {
        &self.items
    }
}

/// Undo / redo logs at single-character granularity.
///
/// `undo` records every inserted character. `redo` records every character
/// removed from the tail, whether by a direct delete or through undo.
#[derive(Debug, Clone)]
pub struct History {
    undo_stack: BoundedStack,
    redo_stack: BoundedStack,
    dropped: u64,
}

impl Default for History {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY_DEFAULT)
    }
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            undo_stack: BoundedStack::with_capacity(capacity),
            redo_stack: BoundedStack::with_capacity(capacity),
            dropped: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.undo_stack.capacity
    }
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }
    /// Number of pushes dropped because a stack was full.
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
    pub fn undo_entries(&self) -> &[u8] {
        self.undo_stack.as_slice()
    }
    pub fn redo_entries(&self) -> &[u8] {
        self.redo_stack.as_slice()
    }

    pub fn record_insert(&mut self, c: u8) {
        if self.undo_stack.push(c) {
            trace!(target: "state.history", undo_depth = self.undo_stack.len(), "undo_push");
        } else {
            self.dropped += 1;
            trace!(target: "state.history", capacity = self.capacity(), dropped = self.dropped, "undo_push_dropped");
        }
    }

    pub fn record_removal(&mut self, c: u8) {
        if self.redo_stack.push(c) {
            trace!(target: "state.history", redo_depth = self.redo_stack.len(), "redo_push");
        } else {
            self.dropped += 1;
            trace!(target: "state.history", capacity = self.capacity(), dropped = self.dropped, "redo_push_dropped");
        }
    }

    pub fn pop_undo(&mut self) -> Option<u8> {
        let c = self.undo_stack.pop();
        trace!(target: "state.history", undo_depth = self.undo_stack.len(), hit = c.is_some(), "undo_pop");
        c
    }

    pub fn pop_redo(&mut self) -> Option<u8> {
        let c = self.redo_stack.pop();
        trace!(target: "state.history", redo_depth = self.redo_stack.len(), hit = c.is_some(), "redo_pop");
        c
    }

    /// Clear both stacks. Only a load resets history.
    pub fn reset_on_load(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        trace!(target: "state.history", "history_reset");
    }
}
