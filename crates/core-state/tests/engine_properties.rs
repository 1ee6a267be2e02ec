//! Property-based tests for engine editing invariants.

use core_state::{EditOutcome, Engine, EngineLimits, SkipReason};
use proptest::prelude::*;

fn typed(bytes: &[u8]) -> Engine {
    let mut e = Engine::default();
    for &b in bytes {
        e.insert(b);
    }
    e
}

proptest! {
    // N inserts followed by N deletes leave nothing behind.
    #[test]
    fn inserts_then_deletes_empty_the_buffer(bytes in proptest::collection::vec(any::<u8>(), 0..200)) {
        let mut e = typed(&bytes);
        for _ in 0..bytes.len() {
            prop_assert!(e.delete_last().applied());
        }
        prop_assert!(e.is_empty());
        prop_assert!(e.save().is_empty());
        prop_assert_eq!(e.delete_last(), EditOutcome::Skipped(SkipReason::EmptyBuffer));
    }

    // Undo removes exactly the last insert; redo restores the view.
    #[test]
    fn undo_redo_restores_view(prefix in proptest::collection::vec(any::<u8>(), 0..64), c in any::<u8>()) {
        let mut e = typed(&prefix);
        e.insert(c);
        let before = e.save();
        prop_assert!(e.undo().applied());
        prop_assert_eq!(e.save(), prefix.clone());
        prop_assert_eq!(e.history().redo_entries().last().copied(), Some(c));
        prop_assert!(e.redo().applied());
        prop_assert_eq!(e.save(), before);
    }

    // Redo then undo returns to the same view and the same history logs.
    #[test]
    fn redo_then_undo_restores_state(
        prefix in proptest::collection::vec(any::<u8>(), 1..64),
        via_undo in any::<bool>(),
    ) {
        let limits = EngineLimits::default();
        prop_assert!(prefix.len() < limits.history_capacity);
        let mut e = Engine::new(limits);
        for &b in &prefix {
            e.insert(b);
        }
        let removed = if via_undo { e.undo() } else { e.delete_last() };
        prop_assert!(removed.applied());
        prop_assert_eq!(e.history().redo_depth(), 1);

        let view = e.save();
        let undo_log = e.history().undo_entries().to_vec();
        let redo_log = e.history().redo_entries().to_vec();

        prop_assert!(e.redo().applied());
        prop_assert!(e.undo().applied());

        prop_assert_eq!(e.save(), view);
        prop_assert_eq!(e.history().undo_entries(), &undo_log[..]);
        prop_assert_eq!(e.history().redo_entries(), &redo_log[..]);
    }

    // Load then save is byte-exact.
    #[test]
    fn load_save_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let mut e = Engine::default();
        e.load(&bytes);
        prop_assert_eq!(e.save(), bytes);
    }

    // Cut excises the marked range and leaves the same clipboard as copy.
    #[test]
    fn cut_matches_copy_and_excises(
        head in proptest::collection::vec(any::<u8>(), 0..20),
        body in proptest::collection::vec(any::<u8>(), 1..20),
        tail in proptest::collection::vec(any::<u8>(), 0..20),
    ) {
        let mut e = typed(&head);
        e.insert(body[0]);
        e.mark_selection_start();
        for &b in &body[1..] {
            e.insert(b);
        }
        e.mark_selection_end();
        for &b in &tail {
            e.insert(b);
        }

        let mut copier = e.clone();
        prop_assert!(copier.copy().applied());

        prop_assert!(e.cut().applied());
        prop_assert_eq!(e.clipboard().content(), copier.clipboard().content());
        prop_assert_eq!(e.clipboard().content(), &body[..]);
        let mut expected = head.clone();
        expected.extend_from_slice(&tail);
        prop_assert_eq!(e.save(), expected);
    }

    // History keeps the first `cap` inserts and drops the rest.
    #[test]
    fn history_overflow_drops_newest(cap in 1usize..32, extra in 1usize..16) {
        let mut e = Engine::new(EngineLimits { history_capacity: cap, clipboard_capacity: 16 });
        let bytes: Vec<u8> = (0..cap + extra).map(|i| (i % 251) as u8).collect();
        for &b in &bytes {
            e.insert(b);
        }
        prop_assert_eq!(e.history().undo_entries(), &bytes[..cap]);
        prop_assert_eq!(e.history().dropped(), extra as u64);
        prop_assert_eq!(e.len(), cap + extra);
    }
}

#[test]
fn history_capacity_plus_one() {
    let mut e = Engine::default();
    let max = e.history().capacity();
    for i in 0..=max {
        e.insert(b'a' + (i % 26) as u8);
    }
    assert_eq!(e.history().undo_depth(), max);
    assert_eq!(e.history().undo_entries()[0], b'a');
}

#[test]
fn copy_paste_preserves_line_separator() {
    let mut e = Engine::default();
    e.insert(b'a');
    e.mark_selection_start();
    for b in b"b\nc" {
        e.insert(*b);
    }
    e.mark_selection_end();
    e.copy();
    assert_eq!(e.clipboard().content(), b"ab\nc");
    e.paste();
    assert_eq!(e.save(), b"ab\ncab\nc");
}

#[test]
fn selection_cleared_by_load_and_replace() {
    let mut e = Engine::default();
    e.load(b"abc");
    e.mark_selection_start();
    e.mark_selection_end();
    e.load(b"xyz");
    assert_eq!(e.copy(), EditOutcome::Skipped(SkipReason::EmptySelection));

    e.mark_selection_start();
    e.mark_selection_end();
    assert!(e.replace(b"y", b"Y").applied());
    assert_eq!(e.copy(), EditOutcome::Skipped(SkipReason::EmptySelection));
    assert_eq!(e.save(), b"xYz");
}
