pub const START_OF_FILE: &[u8] = b"START-OF-FILE";
pub const START_OF_FIELDS: &[u8] = b"START-OF-FIELDS";
pub const END_OF_FIELDS: &[u8] = b"END-OF-FIELDS";
pub const START_OF_DATA: &[u8] = b"START-OF-DATA";
pub const END_OF_DATA: &[u8] = b"END-OF-DATA";
pub const END_OF_FILE: &[u8] = b"END-OF-FILE";

pub const LINE_DELIMITER: u8 = b'\n';
pub const FIELD_DELIMITER: u8 = b'|';
pub const KEY_VALUE_SEPARATOR: u8 = b'=';
pub const COMMENT_MARKER: u8 = b'#';

pub(crate) const NOT_AVAILABLE: &[u8] = b"N.A.";
pub(crate) const NOT_DOWNLOADABLE: &[u8] = b"N.D.";
pub(crate) const NOT_SUBSCRIBED: &[u8] = b"N.S.";
pub(crate) const FIELD_UNKNOWN: &[u8] = b"FLD UNKNOWN";

/// A line carries content when it is non-empty and is not a `#` comment.
#[inline]
pub fn is_processable_line(line: &[u8]) -> bool {
    !line.is_empty() && line[0] != COMMENT_MARKER
}
