//! Packages index parsing
//!
//! A Packages file is a sequence of blank-line separated stanzas of
//! `Key: value` lines. Only `Package`, `Version` and `Depends` are read.
//! Continuation lines (leading space or tab) are skipped rather than folded
//! into the previous field.

use std::io::BufRead;

use super::depends::extract_dependency_names;
use crate::core::PackageRecord;
use crate::error::DepGraphError;

/// Line-at-a-time stanza parser.
///
/// Feed lines with [`StanzaParser::write_line`]; a completed record is
/// returned whenever a blank line closes a stanza that named a package.
/// Call [`StanzaParser::finish`] at end of input to flush the last stanza.
///
/// Every blank line clears the accumulated fields, including those of a
/// stanza that never had a `Package` line. `Version` and `Depends` from such
/// a stanza are dropped instead of carrying over into the next package.
#[derive(Debug, Default)]
pub struct StanzaParser {
    current: PackageRecord,
    in_stanza: bool,
}

impl StanzaParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write_line(&mut self, line: &str) -> Option<PackageRecord> {
        let line = line.trim_end_matches(['\n', '\r']);

        if line.is_empty() {
            return self.take_record();
        }

        if line.starts_with([' ', '\t']) {
            return None;
        }

        let (key, value) = line.split_once(':')?;
        let value = value.trim();

        match key.trim() {
            "Package" => {
                self.in_stanza = true;
                self.current.name = value.to_string();
            }
            "Version" => self.current.version = value.to_string(),
            "Depends" => self.current.dependencies = extract_dependency_names(value),
            _ => {}
        }

        None
    }

    pub fn finish(mut self) -> Option<PackageRecord> {
        self.take_record()
    }

    fn take_record(&mut self) -> Option<PackageRecord> {
        let record = std::mem::take(&mut self.current);
        let in_stanza = std::mem::replace(&mut self.in_stanza, false);

        (in_stanza && !record.name.is_empty()).then_some(record)
    }
}

/// Iterator over the package records of a reader.
pub struct PackageRecordReader<R: BufRead> {
    reader: R,
    parser: Option<StanzaParser>,
}

impl<R: BufRead> PackageRecordReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            parser: Some(StanzaParser::new()),
        }
    }

    fn next_record(&mut self) -> Result<Option<PackageRecord>, DepGraphError> {
        let Some(mut parser) = self.parser.take() else {
            return Ok(None);
        };

        let mut line = String::new();
        loop {
            line.clear();
            let bytes_read = self
                .reader
                .read_line(&mut line)
                .map_err(|source| DepGraphError::IndexReadError { source })?;

            if bytes_read == 0 {
                return Ok(parser.finish());
            }

            if let Some(record) = parser.write_line(&line) {
                self.parser = Some(parser);
                return Ok(Some(record));
            }
        }
    }
}

impl<R: BufRead> Iterator for PackageRecordReader<R> {
    type Item = Result<PackageRecord, DepGraphError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}

/// Parse a whole Packages document, in document order.
pub fn parse_packages<R: BufRead>(reader: R) -> Result<Vec<PackageRecord>, DepGraphError> {
    PackageRecordReader::new(reader).collect()
}

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Read};

    use pretty_assertions::assert_eq;

    use super::*;

    const SAMPLE: &str = "\
Package: curl
Architecture: amd64
Version: 7.81.0-1ubuntu1.15
Depends: libc6 (>= 2.34), libcurl4 (= 7.81.0-1ubuntu1.15), zlib1g (>= 1:1.1.4)
Description: command line tool for transferring data with URL syntax
 curl is a command line tool for transferring data with URL syntax,
 supporting DICT, FILE, FTP, FTPS, GOPHER, HTTP, HTTPS.

Package: libc6
Version: 2.35-0ubuntu3.6
Depends: libgcc-s1, libcrypt1 (>= 1:4.4.10-10ubuntu4)

Package: zlib1g
Version: 1:1.2.11.dfsg-2ubuntu9.2
";

    #[test]
    fn test_parse_sample_document() {
        let records = parse_packages(Cursor::new(SAMPLE)).unwrap();

        assert_eq!(
            records,
            vec![
                PackageRecord::new(
                    "curl",
                    "7.81.0-1ubuntu1.15",
                    vec!["libc6".into(), "libcurl4".into(), "zlib1g".into()]
                ),
                PackageRecord::new(
                    "libc6",
                    "2.35-0ubuntu3.6",
                    vec!["libgcc-s1".into(), "libcrypt1".into()]
                ),
                PackageRecord::new("zlib1g", "1:1.2.11.dfsg-2ubuntu9.2", vec![]),
            ]
        );
    }

    #[test]
    fn test_stanza_without_package_is_dropped() {
        let doc = "Version: 1.0\nDepends: a\n\nPackage: b\nVersion: 2.0\n";
        let records = parse_packages(Cursor::new(doc)).unwrap();

        assert_eq!(records, vec![PackageRecord::new("b", "2.0", vec![])]);
    }

    #[test]
    fn test_empty_package_name_is_dropped() {
        let doc = "Package:\nVersion: 1.0\n\nPackage: real\n\n";
        let records = parse_packages(Cursor::new(doc)).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name(), "real");
        assert!(records.iter().all(|r| !r.name().is_empty()));
    }

    #[test]
    fn test_continuation_lines_are_ignored() {
        let doc = "Package: a\nDepends: b,\n c,\n\td\nVersion: 3\n";
        let records = parse_packages(Cursor::new(doc)).unwrap();

        assert_eq!(records, vec![PackageRecord::new("a", "3", vec!["b".into()])]);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let doc = "this line has no colon\nPackage: a\nnonsense\nX-Custom: whatever\n\n";
        let records = parse_packages(Cursor::new(doc)).unwrap();

        assert_eq!(records, vec![PackageRecord::new("a", "", vec![])]);
    }

    #[test]
    fn test_crlf_documents() {
        let doc = "Package: a\r\nVersion: 1\r\nDepends: b\r\n\r\nPackage: b\r\n";
        let records = parse_packages(Cursor::new(doc)).unwrap();

        assert_eq!(
            records,
            vec![
                PackageRecord::new("a", "1", vec!["b".into()]),
                PackageRecord::new("b", "", vec![]),
            ]
        );
    }

    #[test]
    fn test_multiple_blank_lines_between_stanzas() {
        let doc = "\n\nPackage: a\n\n\n\nPackage: b\n\n";
        let names: Vec<_> = parse_packages(Cursor::new(doc))
            .unwrap()
            .into_iter()
            .map(|r| r.name)
            .collect();

        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_stanza_parser_incremental() {
        let mut parser = StanzaParser::new();

        assert!(parser.write_line("Package: a\n").is_none());
        assert!(parser.write_line("Depends: b | c\n").is_none());
        let record = parser.write_line("\n").unwrap();
        assert_eq!(record, PackageRecord::new("a", "", vec!["b".into()]));

        assert!(parser.write_line("Package: tail\n").is_none());
        assert_eq!(parser.finish().unwrap().name(), "tail");
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "connection reset"))
        }
    }

    #[test]
    fn test_read_failure_is_surfaced() {
        let result = parse_packages(io::BufReader::new(FailingReader));

        assert!(matches!(result, Err(DepGraphError::IndexReadError { .. })));
    }

    #[test]
    fn test_invalid_utf8_is_a_read_error() {
        let bytes: &[u8] = b"Package: a\n\xff\xfe\n";
        let result = parse_packages(Cursor::new(bytes));

        assert!(matches!(result, Err(DepGraphError::IndexReadError { .. })));
    }
}
