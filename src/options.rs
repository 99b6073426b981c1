/// Buffer tuning for [`crate::BackOfficeReader`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Initial capacity of the internal line buffer.
    pub initial_capacity: usize,
    /// Upper bound on a single line; a delimiter search past this length
    /// fails instead of growing the buffer forever.
    pub max_line_len: usize,
}

impl ReaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_max_line_len(mut self, max_line_len: usize) -> Self {
        self.max_line_len = max_line_len;
        self
    }
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            initial_capacity: 64 * 1024,
            max_line_len: 16 * 1024 * 1024,
        }
    }
}
