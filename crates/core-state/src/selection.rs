//! Selection model: two independently marked cell handles.
//!
//! Invariants:
//! - A span is only produced when both endpoints are set.
//! - Handles are non-owning. Callers validate them against the sequence
//!   before walking (see [`Selection::live_span`]); a stale endpoint makes the
//!   whole selection behave as unset.

use core_text::{CellHandle, CharSequence};

/// Both endpoints of a complete selection, in marking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionSpan {
    pub start: CellHandle,
    pub end: CellHandle,
}

#[derive(Debug, Default, Clone)]
pub struct Selection {
    pub start: Option<CellHandle>,
    pub end: Option<CellHandle>,
}

impl Selection {
    pub fn mark_start(&mut self, at: Option<CellHandle>) {
        self.start = at;
    }
    pub fn mark_end(&mut self, at: Option<CellHandle>) {
        self.end = at;
    }
    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }
    pub fn is_set(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// The span, if both endpoints are set and still refer to live cells.
    pub fn live_span(&self, seq: &CharSequence) -> Option<SelectionSpan> {
        let (start, end) = (self.start?, self.end?);
        if seq.contains(start) && seq.contains(end) {
            Some(SelectionSpan { start, end })
        } else {
            None
        }
    }
}
