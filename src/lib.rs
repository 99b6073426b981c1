//! Streaming reader for Bloomberg Back Office bulk data files.
//!
//! A back office file is a sectioned ASCII stream: a `START-OF-FILE` header
//! of `key=value` pairs, an optional field-name list, a pipe-delimited data
//! section, and an `END-OF-FILE` trailer. [`BackOfficeReader`] walks that
//! structure over any [`std::io::Read`] source without copying line bytes,
//! and [`parse`] decodes individual field values into typed results.
//!
//! ```no_run
//! use backoffice::{BackOfficeReader, constants};
//!
//! # fn main() -> backoffice::Result<()> {
//! let file = std::fs::File::open("equity.out")?;
//! let mut reader = BackOfficeReader::new(file);
//!
//! let headers = reader.read_start_of_file(constants::START_OF_FIELDS)?;
//! let fields = reader.read_fields()?;
//! reader.ignore_key_value_pairs_until(constants::START_OF_DATA)?;
//!
//! let mut data = reader.data_section()?;
//! while let Some(row) = data.next_row()? {
//!     if !row.should_process_base() {
//!         continue;
//!     }
//!     // row.security(), row.values() borrow the reader's buffer.
//! }
//! drop(data);
//!
//! reader.ignore_key_value_pairs_until(constants::END_OF_FILE)?;
//! reader.read_end_of_file()?;
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod error;
pub mod fields;
pub mod options;
pub mod parse;
pub mod reader;

pub use crate::error::Error;
pub use crate::fields::{Field, RuntimeType};
pub use crate::options::ReaderOptions;
pub use crate::parse::{Parse, ParsingDetail};
pub use crate::reader::{
    BackOfficeReader, BaseReturnCode, DataSection, DifAction, DifReturnCode, RowView, Span,
};

pub type Result<T> = std::result::Result<T, Error>;
