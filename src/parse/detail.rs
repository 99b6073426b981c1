use crate::constants::{FIELD_UNKNOWN, NOT_AVAILABLE, NOT_DOWNLOADABLE, NOT_SUBSCRIBED};

/// Why a field value failed to parse.
///
/// Bloomberg writes well-known placeholder strings into fields it could not
/// populate. `Ok` means no placeholder matched: the bytes were simply not in
/// the requested format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParsingDetail {
    Ok,
    /// Empty, or spaces only.
    NotApplicable,
    /// `N.A.`
    DataMissing,
    /// `N.D.`
    NotDownloadable,
    /// `N.S.`
    NotSubscribed,
    /// `FLD UNKNOWN`
    FieldUnknown,
}

/// Classifies a field value that failed its format parse.
pub fn classify(span: &[u8]) -> ParsingDetail {
    if span.iter().all(|&b| b == b' ') {
        return ParsingDetail::NotApplicable;
    }
    match span {
        NOT_AVAILABLE => ParsingDetail::DataMissing,
        NOT_DOWNLOADABLE => ParsingDetail::NotDownloadable,
        NOT_SUBSCRIBED => ParsingDetail::NotSubscribed,
        FIELD_UNKNOWN => ParsingDetail::FieldUnknown,
        _ => ParsingDetail::Ok,
    }
}
