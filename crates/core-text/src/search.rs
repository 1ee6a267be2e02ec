//! First-occurrence search and splice over a linear view.

/// Byte offset of the first occurrence of `needle` in `haystack`.
/// An empty needle never matches.
pub fn find_first(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

/// Replace the first occurrence of `find` with `with`. `None` if `find` is absent.
pub fn replace_first(text: &[u8], find: &[u8], with: &[u8]) -> Option<Vec<u8>> {
    let at = find_first(text, find)?;
    let mut out = Vec::with_capacity(text.len() - find.len() + with.len());
    out.extend_from_slice(&text[..at]);
    out.extend_from_slice(with);
    out.extend_from_slice(&text[at + find.len()..]);
    Some(out)
}
