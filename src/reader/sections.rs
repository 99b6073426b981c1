//! The section protocol: marker verification and line accumulation for each
//! region of a back office file.

use std::collections::BTreeMap;
use std::io::Read;

use log::debug;
use memchr::memchr;
use smol_str::SmolStr;

use super::row::DataSection;
use super::BackOfficeReader;
use crate::constants::{
    is_processable_line, END_OF_DATA, END_OF_FIELDS, END_OF_FILE, KEY_VALUE_SEPARATOR,
    START_OF_DATA, START_OF_FIELDS, START_OF_FILE,
};
use crate::error::Error;
use crate::Result;

/// Splits a processable `key=value` line on the first `=`.
fn split_key_value(line: &[u8]) -> Option<(&[u8], &[u8])> {
    if !is_processable_line(line) {
        return None;
    }
    let at = memchr(KEY_VALUE_SEPARATOR, line)?;
    Some((&line[..at], &line[at + 1..]))
}

fn decode(bytes: &[u8]) -> String {
    // Files are ASCII per the data license; lossy covers any stray bytes.
    String::from_utf8_lossy(bytes).into_owned()
}

impl<R: Read> BackOfficeReader<R> {
    /// Drives one section: optionally verifies `start_marker`, then feeds
    /// lines to `accumulator` until `end_marker`.
    ///
    /// With `advance_after_end` the end marker line is consumed; without it
    /// the cursor stops just before the end marker, leaving it for the next
    /// section read. Blank and comment lines are passed through; filtering
    /// them is the accumulator's business.
    pub fn accumulate_section(
        &mut self,
        start_marker: Option<&[u8]>,
        end_marker: &[u8],
        advance_after_end: bool,
        mut accumulator: impl FnMut(&[u8]) -> Result<()>,
    ) -> Result<()> {
        if let Some(marker) = start_marker {
            let line = self.read_line()?;
            if line != marker {
                return Err(Error::marker_mismatch(marker, line));
            }
        }
        if advance_after_end {
            loop {
                let line = self.read_line()?;
                if line == end_marker {
                    return Ok(());
                }
                accumulator(line)?;
            }
        } else {
            while let Some(line) = self.read_line_unless(end_marker)? {
                accumulator(line)?;
            }
            Ok(())
        }
    }

    /// Reads the `START-OF-FILE` header block into a key/value map. Stops
    /// just before `stop` (usually `START-OF-FIELDS` or `START-OF-DATA`),
    /// which stays unconsumed. Lines without a `=` are skipped.
    pub fn read_start_of_file(&mut self, stop: &[u8]) -> Result<BTreeMap<SmolStr, String>> {
        let mut headers = BTreeMap::new();
        self.accumulate_section(Some(START_OF_FILE), stop, false, |line| {
            if let Some((key, value)) = split_key_value(line) {
                headers.insert(SmolStr::from(decode(key)), decode(value));
            }
            Ok(())
        })?;
        debug!("read {} header pairs", headers.len());
        Ok(headers)
    }

    /// Skips the header block without materializing it.
    pub fn ignore_start_of_file(&mut self, stop: &[u8]) -> Result<()> {
        self.accumulate_section(Some(START_OF_FILE), stop, false, |_| Ok(()))
    }

    /// Reads the field names between `START-OF-FIELDS` and `END-OF-FIELDS`,
    /// consuming the end marker.
    pub fn read_fields(&mut self) -> Result<Vec<SmolStr>> {
        let mut fields = Vec::new();
        self.accumulate_section(Some(START_OF_FIELDS), END_OF_FIELDS, true, |line| {
            if is_processable_line(line) {
                fields.push(SmolStr::from(decode(line)));
            }
            Ok(())
        })?;
        debug!("read {} field names", fields.len());
        Ok(fields)
    }

    pub fn ignore_fields(&mut self) -> Result<()> {
        self.accumulate_section(Some(START_OF_FIELDS), END_OF_FIELDS, true, |_| Ok(()))
    }

    /// Reads `key=value` lines until `stop`, which stays unconsumed. Used
    /// for free-standing parameter blocks between sections.
    pub fn read_key_value_pairs_until(&mut self, stop: &[u8]) -> Result<BTreeMap<SmolStr, String>> {
        let mut pairs = BTreeMap::new();
        self.accumulate_section(None, stop, false, |line| {
            if let Some((key, value)) = split_key_value(line) {
                pairs.insert(SmolStr::from(decode(key)), decode(value));
            }
            Ok(())
        })?;
        Ok(pairs)
    }

    pub fn ignore_key_value_pairs_until(&mut self, stop: &[u8]) -> Result<()> {
        self.accumulate_section(None, stop, false, |_| Ok(()))
    }

    /// Consumes the trailer up to and including `END-OF-FILE`. Any
    /// processable line before the marker is a structural error.
    pub fn read_end_of_file(&mut self) -> Result<()> {
        self.accumulate_section(None, END_OF_FILE, true, |line| {
            if is_processable_line(line) {
                return Err(Error::unexpected_content(line, END_OF_FILE));
            }
            Ok(())
        })
    }

    /// Verifies `START-OF-DATA` and hands back the row enumerator.
    pub fn data_section(&mut self) -> Result<DataSection<'_, R>> {
        let line = self.read_line()?;
        if line != START_OF_DATA {
            return Err(Error::marker_mismatch(START_OF_DATA, line));
        }
        Ok(DataSection::new(self))
    }

    /// Skips everything between `START-OF-DATA` and `END-OF-DATA` without
    /// decoding rows.
    pub fn ignore_data_section(&mut self) -> Result<()> {
        let line = self.read_line()?;
        if line != START_OF_DATA {
            return Err(Error::marker_mismatch(START_OF_DATA, line));
        }
        loop {
            let line = self.read_line()?;
            if line == END_OF_DATA {
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case(b"KEY=VALUE", Some((&b"KEY"[..], &b"VALUE"[..])))]
    #[case(b"KEY=", Some((&b"KEY"[..], &b""[..])))]
    #[case(b"A=B=C", Some((&b"A"[..], &b"B=C"[..])))]
    #[case(b"# COMMENT=1", None)]
    #[case(b"", None)]
    #[case(b"NO SEPARATOR", None)]
    fn test_split_key_value(
        #[case] line: &[u8],
        #[case] expected: Option<(&[u8], &[u8])>,
    ) {
        assert_eq!(split_key_value(line), expected);
    }
}
