use std::io;

/// Errors raised while walking the structure of a back office file.
///
/// Failures to interpret an individual field value are not errors; those are
/// reported through [`crate::parse::Parse`] so a caller can keep streaming.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("i/o error reading data stream")]
    Io(#[from] io::Error),

    /// The stream ended while searching for a delimiter. Back office files
    /// always terminate every line, including the last, so this is fatal.
    #[error("end of data stream reached unexpectedly while searching for {delimiter:?}")]
    UnexpectedEndOfStream { delimiter: char },

    #[error("expected section marker {expected:?}, found line {actual:?}")]
    MarkerMismatch { expected: String, actual: String },

    #[error("unexpected content line {line:?} before {marker:?}")]
    UnexpectedContent { line: String, marker: String },

    #[error("malformed data row ({reason}): {line:?}")]
    MalformedRow { reason: &'static str, line: String },

    #[error("line exceeds maximum length of {max} bytes")]
    LineTooLong { max: usize },

    /// A value matched a date layout but named an impossible calendar day,
    /// e.g. `99999999`.
    #[error("date value {text:?} is out of range")]
    OutOfRangeDate { text: String },

    /// A value matched `hh:mm:ss` but named an impossible time of day.
    #[error("time value {text:?} is out of range")]
    OutOfRangeTime { text: String },
}

impl Error {
    pub(crate) fn marker_mismatch(expected: &[u8], actual: &[u8]) -> Self {
        Error::MarkerMismatch {
            expected: String::from_utf8_lossy(expected).into_owned(),
            actual: String::from_utf8_lossy(actual).into_owned(),
        }
    }

    pub(crate) fn unexpected_content(line: &[u8], marker: &[u8]) -> Self {
        Error::UnexpectedContent {
            line: String::from_utf8_lossy(line).into_owned(),
            marker: String::from_utf8_lossy(marker).into_owned(),
        }
    }

    pub(crate) fn malformed_row(reason: &'static str, line: &[u8]) -> Self {
        Error::MalformedRow {
            reason,
            line: String::from_utf8_lossy(line).into_owned(),
        }
    }
}
