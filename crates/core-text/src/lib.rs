//! Arena-backed character sequence with stable cell handles.
//!
//! Cells live in a slot arena and are linked by `prev` / `next` slot indices.
//! Editing happens at the tail (`append` / `remove_tail`); the only interior
//! mutation is `remove_range`, used by selection cut.
//!
//! Handles carry the generation of the slot they were issued for. Removing a
//! cell bumps nothing immediately, but the slot's generation is advanced when
//! the slot is reused (and on `reset`), so a handle to a removed cell never
//! resolves to a different cell. `contains` is the single liveness check.

use tracing::trace;

pub mod search;

/// Stable identity of one cell in a [`CharSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellHandle {
    slot: usize,
    generation: u32,
}

#[derive(Debug, Clone)]
struct Cell {
    ch: u8,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug, Clone, Default)]
struct Slot {
    generation: u32,
    cell: Option<Cell>,
}

/// Ordered byte cells with O(1) tail append/remove.
#[derive(Debug, Clone, Default)]
pub struct CharSequence {
    slots: Vec<Slot>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl CharSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a sequence holding `bytes` in order.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut seq = Self::new();
        seq.slots.reserve(bytes.len());
        for &b in bytes {
            seq.append(b);
        }
        seq
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append `ch` as the new tail cell and return its handle.
    pub fn append(&mut self, ch: u8) -> CellHandle {
        let cell = Cell {
            ch,
            prev: self.tail,
            next: None,
        };
        let slot = match self.free.pop() {
            Some(idx) => {
                let s = &mut self.slots[idx];
                s.generation = s.generation.wrapping_add(1);
                s.cell = Some(cell);
                idx
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    cell: Some(cell),
                });
                self.slots.len() - 1
            }
        };
        match self.tail {
            Some(t) => {
                if let Some(c) = self.slots[t].cell.as_mut() {
                    c.next = Some(slot);
                }
            }
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
        CellHandle {
            slot,
            generation: self.slots[slot].generation,
        }
    }

    /// Remove the tail cell and return its character. `None` when empty.
    pub fn remove_tail(&mut self) -> Option<u8> {
        let t = self.tail?;
        self.unlink(t)
    }

    /// Handle of the current tail cell.
    pub fn tail(&self) -> Option<CellHandle> {
        self.tail.map(|slot| self.handle_for(slot))
    }

    /// Handle of the first cell.
    pub fn head(&self) -> Option<CellHandle> {
        self.head.map(|slot| self.handle_for(slot))
    }

    /// True if `handle` still refers to a live cell of this sequence.
    pub fn contains(&self, handle: CellHandle) -> bool {
        self.slots
            .get(handle.slot)
            .is_some_and(|s| s.generation == handle.generation && s.cell.is_some())
    }

    /// Character stored in the cell, if the handle is live.
    pub fn get(&self, handle: CellHandle) -> Option<u8> {
        self.live_cell(handle).map(|c| c.ch)
    }

    /// Handle of the cell following `handle`, if both exist.
    pub fn next(&self, handle: CellHandle) -> Option<CellHandle> {
        let next = self.live_cell(handle)?.next?;
        Some(self.handle_for(next))
    }

    /// Remove every cell from `start` forward through `end` inclusive.
    ///
    /// If `end` is not reachable from `start` the walk stops at the natural end
    /// of the sequence. The walk never visits more than `len` cells. Returns the
    /// removed characters in order; empty if `start` is stale.
    pub fn remove_range(&mut self, start: CellHandle, end: CellHandle) -> Vec<u8> {
        let mut removed = Vec::new();
        if !self.contains(start) {
            return removed;
        }
        let end_live = self.contains(end);
        let mut cursor = Some(start.slot);
        let budget = self.len;
        while let Some(slot) = cursor {
            if removed.len() >= budget {
                break;
            }
            let next = self.slots[slot].cell.as_ref().and_then(|c| c.next);
            let reached_end = end_live && slot == end.slot;
            match self.unlink(slot) {
                Some(ch) => removed.push(ch),
                None => break,
            }
            if reached_end {
                break;
            }
            cursor = next;
        }
        trace!(target: "text.sequence", removed = removed.len(), len = self.len, "remove_range");
        removed
    }

    /// Drop every cell. All previously issued handles become stale.
    pub fn reset(&mut self) {
        for slot in &mut self.slots {
            if slot.cell.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
            }
        }
        self.free = (0..self.slots.len()).rev().collect();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterate characters from head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            seq: self,
            cursor: self.head,
            remaining: self.len,
        }
    }

    /// Iterate characters from `start` forward through `end` inclusive.
    ///
    /// Same walk rules as [`CharSequence::remove_range`]: an unreachable `end`
    /// runs to the tail, at most `len` cells are visited, and a stale `start`
    /// yields nothing.
    pub fn iter_range(&self, start: CellHandle, end: CellHandle) -> RangeIter<'_> {
        let cursor = self.contains(start).then_some(start.slot);
        let end = self.contains(end).then_some(end.slot);
        RangeIter {
            seq: self,
            cursor,
            end,
            remaining: self.len,
        }
    }

    /// Full ordered content.
    pub fn to_linear_view(&self) -> Vec<u8> {
        self.iter().collect()
    }

    fn handle_for(&self, slot: usize) -> CellHandle {
        CellHandle {
            slot,
            generation: self.slots[slot].generation,
        }
    }

    fn live_cell(&self, handle: CellHandle) -> Option<&Cell> {
        let s = self.slots.get(handle.slot)?;
        if s.generation != handle.generation {
            return None;
        }
        s.cell.as_ref()
    }

    fn unlink(&mut self, slot: usize) -> Option<u8> {
        let cell = self.slots.get_mut(slot)?.cell.take()?;
        match cell.prev {
            Some(p) => {
                if let Some(c) = self.slots[p].cell.as_mut() {
                    c.next = cell.next;
                }
            }
            None => self.head = cell.next,
        }
        match cell.next {
            Some(n) => {
                if let Some(c) = self.slots[n].cell.as_mut() {
                    c.prev = cell.prev;
                }
            }
            None => self.tail = cell.prev,
        }
        self.free.push(slot);
        self.len -= 1;
        Some(cell.ch)
    }
}

pub struct Iter<'a> {
    seq: &'a CharSequence,
    cursor: Option<usize>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        let cell = self.seq.slots.get(self.cursor?)?.cell.as_ref()?;
        self.cursor = cell.next;
        self.remaining -= 1;
        Some(cell.ch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

pub struct RangeIter<'a> {
    seq: &'a CharSequence,
    cursor: Option<usize>,
    end: Option<usize>,
    remaining: usize,
}

impl Iterator for RangeIter<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        let slot = self.cursor?;
        let cell = self.seq.slots.get(slot)?.cell.as_ref()?;
        self.cursor = if self.end == Some(slot) {
            None
        } else {
            cell.next
        };
        self.remaining -= 1;
        Some(cell.ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> CharSequence {
        CharSequence::from_bytes(s.as_bytes())
    }

    #[test]
    fn append_and_linearize() {
        let s = seq("hello\nworld");
        assert_eq!(s.len(), 11);
        assert_eq!(s.to_linear_view(), b"hello\nworld");
    }

    #[test]
    fn remove_tail_until_empty() {
        let mut s = seq("ab");
        assert_eq!(s.remove_tail(), Some(b'b'));
        assert_eq!(s.remove_tail(), Some(b'a'));
        assert_eq!(s.remove_tail(), None);
        assert!(s.is_empty());
        assert!(s.tail().is_none());
        assert!(s.head().is_none());
    }

    #[test]
    fn removed_handle_is_stale_after_slot_reuse() {
        let mut s = seq("ab");
        let b = s.tail().unwrap();
        s.remove_tail();
        assert!(!s.contains(b));
        let c = s.append(b'c');
        // same slot, new generation
        assert!(!s.contains(b));
        assert!(s.contains(c));
        assert_eq!(s.get(b), None);
        assert_eq!(s.get(c), Some(b'c'));
    }

    #[test]
    fn remove_interior_range() {
        let mut s = CharSequence::new();
        s.append(b'x');
        let start = s.append(b'a');
        s.append(b'b');
        let end = s.append(b'c');
        s.append(b'y');
        let removed = s.remove_range(start, end);
        assert_eq!(removed, b"abc");
        assert_eq!(s.to_linear_view(), b"xy");
        assert_eq!(s.len(), 2);
        assert_eq!(s.tail().and_then(|h| s.get(h)), Some(b'y'));
    }

    #[test]
    fn remove_range_with_end_before_start_runs_to_tail() {
        let mut s = CharSequence::new();
        let end = s.append(b'a');
        let start = s.append(b'b');
        s.append(b'c');
        let removed = s.remove_range(start, end);
        assert_eq!(removed, b"bc");
        assert_eq!(s.to_linear_view(), b"a");
    }

    #[test]
    fn remove_range_with_stale_start_is_noop() {
        let mut s = seq("abc");
        let start = s.tail().unwrap();
        s.remove_tail();
        let end = s.tail().unwrap();
        assert!(s.remove_range(start, end).is_empty());
        assert_eq!(s.to_linear_view(), b"ab");
    }

    #[test]
    fn iter_range_matches_remove_range() {
        let mut s = CharSequence::new();
        s.append(b'x');
        let start = s.append(b'a');
        s.append(b'\n');
        let end = s.append(b'c');
        s.append(b'y');
        let walked: Vec<u8> = s.iter_range(start, end).collect();
        assert_eq!(walked, b"a\nc");
        assert_eq!(s.remove_range(start, end), walked);
    }

    #[test]
    fn reset_invalidates_all_handles() {
        let mut s = seq("abc");
        let h = s.head().unwrap();
        let t = s.tail().unwrap();
        s.reset();
        assert!(s.is_empty());
        assert!(!s.contains(h));
        assert!(!s.contains(t));
        let n = s.append(b'z');
        assert!(s.contains(n));
        assert!(!s.contains(h));
        assert!(!s.contains(t));
        assert_eq!(s.to_linear_view(), b"z");
    }

    #[test]
    fn next_walks_forward() {
        let s = seq("xyz");
        let mut h = s.head();
        let mut out = Vec::new();
        while let Some(cur) = h {
            out.push(s.get(cur).unwrap());
            h = s.next(cur);
        }
        assert_eq!(out, b"xyz");
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn remove_range_matches_iter_range(
                bytes in proptest::collection::vec(any::<u8>(), 1..64),
                a in any::<prop::sample::Index>(),
                b in any::<prop::sample::Index>(),
            ) {
                let mut s = CharSequence::new();
                let handles: Vec<CellHandle> = bytes.iter().map(|&c| s.append(c)).collect();
                let (i, j) = (a.index(bytes.len()), b.index(bytes.len()));

                let walked: Vec<u8> = s.iter_range(handles[i], handles[j]).collect();
                let removed = s.remove_range(handles[i], handles[j]);
                prop_assert_eq!(&removed, &walked);

                // an end before the start runs to the tail
                let stop = if j >= i { j + 1 } else { bytes.len() };
                prop_assert_eq!(&removed[..], &bytes[i..stop]);
                let mut rest = bytes[..i].to_vec();
                rest.extend_from_slice(&bytes[stop..]);
                prop_assert_eq!(s.to_linear_view(), rest);
                prop_assert_eq!(s.len(), bytes.len() - removed.len());
                prop_assert!(handles[i..stop].iter().all(|&h| !s.contains(h)));
            }
        }
    }
}
