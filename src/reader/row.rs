//! Data-section row enumeration with reused span storage.

use std::io::Read;
use std::ops::Range;

use memchr::memchr;
use smallvec::SmallVec;

use super::pool;
use super::BackOfficeReader;
use crate::constants::{is_processable_line, END_OF_DATA, FIELD_DELIMITER, LINE_DELIMITER};
use crate::error::Error;
use crate::parse;
use crate::Result;

/// Byte offsets into the current row line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    fn range(self) -> Range<usize> {
        self.start..self.end
    }
}

/// Owned storage for one decoded row, reused from line to line. The span
/// vector only ever grows, so a steady-state file allocates nothing per row.
#[derive(Debug, Default)]
pub(crate) struct RowParts {
    security: Span,
    return_code: i32,
    field_count: usize,
    values: SmallVec<[Span; 8]>,
}

impl RowParts {
    /// Re-splits `line` in place. Every field, the last included, must be
    /// terminated by `|`.
    fn reuse(&mut self, line: &[u8]) -> Result<()> {
        let mut cursor = 0;
        self.security = next_field(line, &mut cursor)?;

        let return_code = next_field(line, &mut cursor)?;
        self.return_code = match parse::int32(&line[return_code.range()]) {
            parse::Parse::Value(value) => value,
            parse::Parse::Failed(_) => {
                return Err(Error::malformed_row("return code is not an integer", line))
            }
        };

        let field_count = next_field(line, &mut cursor)?;
        self.field_count = match parse::int32(&line[field_count.range()]) {
            parse::Parse::Value(value) if value >= 0 => value as usize,
            _ => return Err(Error::malformed_row("field count is not a count", line)),
        };

        self.values.clear();
        for _ in 0..self.field_count {
            let value = next_field(line, &mut cursor)?;
            self.values.push(value);
        }
        Ok(())
    }
}

#[inline]
fn next_field(line: &[u8], cursor: &mut usize) -> Result<Span> {
    match memchr(FIELD_DELIMITER, &line[*cursor..]) {
        Some(at) => {
            let span = Span {
                start: *cursor,
                end: *cursor + at,
            };
            *cursor = span.end + 1;
            Ok(span)
        }
        None => Err(Error::malformed_row("missing field delimiter", line)),
    }
}

/// Return codes in base (full-universe) files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum BaseReturnCode {
    ValidSecurity = 0,
}

/// Return codes in difference (DIF) files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum DifReturnCode {
    ValidSecurity = 0,
    Removal = 3,
}

/// What a difference-file row asks the consumer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifAction {
    Process,
    Remove,
    Skip,
}

/// Borrowed view of the row most recently produced by
/// [`DataSection::next_row`]. All slices point into the reader's buffer and
/// are valid until the next row is read.
pub struct RowView<'a> {
    line: &'a [u8],
    parts: &'a RowParts,
}

impl<'a> RowView<'a> {
    /// The entire row line, delimiters included.
    pub fn line(&self) -> &'a [u8] {
        self.line
    }

    pub fn security(&self) -> &'a [u8] {
        &self.line[self.parts.security.range()]
    }

    pub fn return_code(&self) -> i32 {
        self.parts.return_code
    }

    /// The field count the row declares for itself.
    pub fn field_count(&self) -> usize {
        self.parts.field_count
    }

    pub fn value(&self, index: usize) -> Option<&'a [u8]> {
        let span = *self.parts.values.get(index)?;
        Some(&self.line[span.range()])
    }

    pub fn values(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        let line = self.line;
        self.parts.values.iter().map(move |span| &line[span.range()])
    }

    /// Whether a base-file consumer should process this row.
    pub fn should_process_base(&self) -> bool {
        self.parts.return_code == BaseReturnCode::ValidSecurity as i32
    }

    /// What a difference-file consumer should do with this row.
    pub fn dif_action(&self) -> DifAction {
        if self.parts.return_code == DifReturnCode::ValidSecurity as i32 {
            DifAction::Process
        } else if self.parts.return_code == DifReturnCode::Removal as i32 {
            DifAction::Remove
        } else {
            DifAction::Skip
        }
    }
}

/// Row enumerator for the span between `START-OF-DATA` and `END-OF-DATA`.
///
/// Comment and blank lines are skipped. Enumeration never filters on return
/// code; policy helpers on [`RowView`] leave that to the caller.
pub struct DataSection<'r, R> {
    reader: &'r mut BackOfficeReader<R>,
    parts: RowParts,
    done: bool,
}

impl<'r, R: Read> DataSection<'r, R> {
    pub(crate) fn new(reader: &'r mut BackOfficeReader<R>) -> Self {
        Self {
            reader,
            parts: pool::take_row_parts(),
            done: false,
        }
    }

    /// Produces the next row, or `None` once `END-OF-DATA` has been
    /// consumed. The returned view borrows the enumerator, so it must be
    /// dropped before the next call.
    pub fn next_row(&mut self) -> Result<Option<RowView<'_>>> {
        if self.done {
            return Ok(None);
        }
        loop {
            let range = self.reader.find_to_delimiter(LINE_DELIMITER)?;
            let line = self.reader.slice(range.clone());
            if line == END_OF_DATA {
                self.done = true;
                return Ok(None);
            }
            if !is_processable_line(line) {
                continue;
            }
            self.parts.reuse(line)?;
            return Ok(Some(RowView {
                line: self.reader.slice(range),
                parts: &self.parts,
            }));
        }
    }
}

impl<R> Drop for DataSection<'_, R> {
    fn drop(&mut self) {
        // Donate the span storage to the next enumerator on this thread.
        pool::put_row_parts(std::mem::take(&mut self.parts));
    }
}
