//! Buffered, pull-based cursor over a back office byte stream.

mod pool;
mod row;
mod sections;

pub use row::{BaseReturnCode, DataSection, DifAction, DifReturnCode, RowView, Span};

use std::io::Read;
use std::ops::Range;

use log::trace;
use memchr::memchr;

use crate::constants::LINE_DELIMITER;
use crate::error::Error;
use crate::options::ReaderOptions;
use crate::Result;

/// Streaming reader over a back office file.
///
/// Bytes are pulled into a single contiguous buffer; structural reads hand
/// out slices of that buffer, valid until the next read. Lines are delimited
/// by `\n` only, and every line in a well-formed file is terminated, so
/// running out of bytes mid-search is always an error.
pub struct BackOfficeReader<R> {
    source: R,
    buf: Vec<u8>,
    start: usize,
    end: usize,
    eof: bool,
    max_line_len: usize,
}

impl<R: Read> BackOfficeReader<R> {
    pub fn new(source: R) -> Self {
        Self::with_options(source, ReaderOptions::default())
    }

    pub fn with_options(source: R, options: ReaderOptions) -> Self {
        Self {
            source,
            buf: vec![0; options.initial_capacity.max(1)],
            start: 0,
            end: 0,
            eof: false,
            max_line_len: options.max_line_len,
        }
    }

    pub fn into_inner(self) -> R {
        self.source
    }

    pub(crate) fn slice(&self, range: Range<usize>) -> &[u8] {
        &self.buf[range]
    }

    /// Pulls more bytes from the source. The consumed prefix is compacted
    /// away first; once the buffer is full it doubles, up to the line cap.
    fn fill(&mut self) -> Result<()> {
        if self.start > 0 {
            self.buf.copy_within(self.start..self.end, 0);
            self.end -= self.start;
            self.start = 0;
        }
        if self.end == self.buf.len() {
            if self.buf.len() >= self.max_line_len {
                return Err(Error::LineTooLong {
                    max: self.max_line_len,
                });
            }
            let grown = (self.buf.len() * 2).min(self.max_line_len);
            self.buf.resize(grown, 0);
        }
        let read = self.source.read(&mut self.buf[self.end..])?;
        if read == 0 {
            self.eof = true;
        } else {
            self.end += read;
        }
        trace!("refilled {read} bytes, {} pending", self.end - self.start);
        Ok(())
    }

    /// Locates `delimiter` in the unconsumed bytes, pulling from the source
    /// as needed, and consumes through it. Returns the range of the bytes
    /// strictly before the delimiter.
    ///
    /// Returned as buffer offsets rather than a slice so callers can consume
    /// or roll back before materializing the bytes.
    pub(crate) fn find_to_delimiter(&mut self, delimiter: u8) -> Result<Range<usize>> {
        // Bytes already scanned in earlier iterations need not be rescanned;
        // only the offset survives a refill, since refilling compacts.
        let mut searched = 0;
        loop {
            let pending = &self.buf[self.start..self.end];
            if let Some(at) = memchr(delimiter, &pending[searched..]) {
                let line = self.start..self.start + searched + at;
                self.start = line.end + 1;
                return Ok(line);
            }
            searched = pending.len();
            if self.eof {
                return Err(Error::UnexpectedEndOfStream {
                    delimiter: delimiter as char,
                });
            }
            self.fill()?;
        }
    }

    /// Rolls the cursor back so the line occupying `range` is read again.
    pub(crate) fn unread(&mut self, range: Range<usize>) {
        self.start = range.start;
    }

    /// Reads up to (and consumes) the next occurrence of `delimiter`.
    pub fn read_to_delimiter(&mut self, delimiter: u8) -> Result<&[u8]> {
        let range = self.find_to_delimiter(delimiter)?;
        Ok(&self.buf[range])
    }

    /// Reads the next line. The `\n` is consumed but not returned.
    pub fn read_line(&mut self) -> Result<&[u8]> {
        self.read_to_delimiter(LINE_DELIMITER)
    }

    /// Reads the next line unless it equals `sentinel`, in which case the
    /// cursor is restored and `None` is returned, leaving the sentinel line
    /// to be read by whatever comes next.
    pub fn read_line_unless(&mut self, sentinel: &[u8]) -> Result<Option<&[u8]>> {
        let range = self.find_to_delimiter(LINE_DELIMITER)?;
        if &self.buf[range.clone()] == sentinel {
            self.unread(range);
            return Ok(None);
        }
        Ok(Some(&self.buf[range]))
    }
}
