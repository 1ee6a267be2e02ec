use tracing::trace;

/// Default clipboard capacity (one slot is reserved, so it holds one less).
pub const CLIPBOARD_CAPACITY_DEFAULT: usize = 5000;

/// Bounded character buffer overwritten by copy / cut, read by paste.
#[derive(Debug, Clone)]
pub struct Clipboard {
    content: Vec<u8>,
    capacity: usize,
    truncated: bool,
}

impl Default for Clipboard {
    fn default() -> Self {
        Self::new(CLIPBOARD_CAPACITY_DEFAULT)
    }
}

impl Clipboard {
    pub fn new(capacity: usize) -> Self {
        Self {
            content: Vec::new(),
            capacity,
            truncated: false,
        }
    }

    /// Maximum number of characters a fill can store.
    pub fn limit(&self) -> usize {
        self.capacity.saturating_sub(1)
    }

    /// Replace the content with `chars`, truncating to [`Clipboard::limit`].
    pub fn fill<I>(&mut self, chars: I)
    where
        I: IntoIterator<Item = u8>,
    {
        let limit = self.limit();
        self.content.clear();
        self.truncated = false;
        for c in chars {
            if self.content.len() >= limit {
                self.truncated = true;
                break;
            }
            self.content.push(c);
        }
        trace!(target: "state.clipboard", size = self.content.len(), truncated = self.truncated, "clipboard_fill");
    }

    pub fn content(&self) -> &[u8] {
        &self.content
    }
    pub fn len(&self) -> usize {
        self.content.len()
    }
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
    /// True if the last fill hit the limit and dropped characters.
    pub fn truncated(&self) -> bool {
        self.truncated
    }
}
