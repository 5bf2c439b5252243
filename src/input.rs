//! Module for reading sequence/abundance files
//!
//! Files are line based. Two header lines of the form `<label> = <value>` name the
//! counters, and every data line holds a nucleotide sequence and its abundance:
//!
//! ```text
//! Number of unique sequences of sample X = 0
//! Number of total reads of sample X = 0
//! ATGAAATAG 7
//! ATGCCC 2
//! ```
//!
//! Blank lines, and lines which are neither headers nor contain nucleotides, are skipped.
use std::io::BufRead;

use log::debug;

use crate::common::SequenceRecord;
use crate::error::{Error, Result};

/// Separates a header label from its value
const HEADER_SEPARATOR: char = '=';

/// Letters which mark a line as holding a sequence
const NUCLEOTIDES: [char; 4] = ['A', 'C', 'G', 'T'];

#[derive(Clone, Debug, Eq, PartialEq)]
/// What a single input line holds
pub enum Line {
    /// Header line, holding the label verbatim (everything before the first `=`)
    Header(String),

    /// Data line
    Record(SequenceRecord),

    /// Nothing of interest
    Ignored,
}

/// Classify and parse a single line
///
/// # Arguments
/// - `line`: Line without its line ending
/// - `line_number`: 1-based line number, used for error messages
///
/// # Returns
/// - Parsed line, or an error if this looks like a data line but isn't valid
pub fn parse_line(line: &str, line_number: usize) -> Result<Line> {
    if line.trim().is_empty() {
        return Ok(Line::Ignored);
    }

    if let Some((label, _value)) = line.split_once(HEADER_SEPARATOR) {
        return Ok(Line::Header(label.to_string()));
    }

    if !line.contains(&NUCLEOTIDES[..]) {
        return Ok(Line::Ignored);
    }

    let malformed = |reason: &str| Error::MalformedRecord {
        line: line_number,
        content: line.to_string(),
        reason: reason.to_string(),
    };

    let tokens = line.split_whitespace().collect::<Vec<&str>>();
    let (sequence, abundance) = match tokens.as_slice() {
        [sequence, abundance] => (*sequence, *abundance),
        [_] => return Err(malformed("missing abundance")),
        _ => return Err(malformed("expected a sequence and an abundance")),
    };
    let abundance = abundance
        .parse::<u64>()
        .map_err(|_| malformed("abundance is not a non-negative integer"))?;

    Ok(Line::Record(SequenceRecord {
        sequence: sequence.to_string(),
        abundance,
    }))
}

/// Iterator over the parsed lines of some input
pub struct InputLines<R: BufRead> {
    lines: std::io::Lines<R>,
    line_number: usize,
}

impl<R: BufRead> InputLines<R> {
    /// Wrap a reader
    pub fn new(reader: R) -> Self {
        InputLines {
            lines: reader.lines(),
            line_number: 0,
        }
    }

    /// 1-based number of the last line read
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead> Iterator for InputLines<R> {
    type Item = Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(Error::Io(e))),
        };
        self.line_number += 1;
        let parsed = parse_line(&line, self.line_number);
        if let Ok(Line::Ignored) = parsed {
            debug!("Skipping line {}: {:?}", self.line_number, line);
        }
        Some(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(sequence: &str, abundance: u64) -> Line {
        Line::Record(SequenceRecord {
            sequence: sequence.to_string(),
            abundance,
        })
    }

    #[test]
    fn test_headers() {
        assert_eq!(
            parse_line("Number of unique sequences of sample X = 0", 1).unwrap(),
            Line::Header("Number of unique sequences of sample X ".to_string())
        );
        // Label is everything before the first '='
        assert_eq!(
            parse_line("Total=12=4", 1).unwrap(),
            Line::Header("Total".to_string())
        );
        // Headers win even if the sample name holds nucleotide letters
        assert_eq!(
            parse_line("Number of total reads of sample ACGT = 10", 2).unwrap(),
            Line::Header("Number of total reads of sample ACGT ".to_string())
        );
    }

    #[test]
    fn test_records() {
        assert_eq!(parse_line("ATGAAATAG 7", 3).unwrap(), record("ATGAAATAG", 7));
        assert_eq!(parse_line("  ATG\t0  ", 3).unwrap(), record("ATG", 0));
        assert_eq!(parse_line("atgNNA 5", 3).unwrap(), record("atgNNA", 5));
    }

    #[test]
    fn test_ignored() {
        assert_eq!(parse_line("", 1).unwrap(), Line::Ignored);
        assert_eq!(parse_line("   \t", 1).unwrap(), Line::Ignored);
        assert_eq!(parse_line("some notes", 1).unwrap(), Line::Ignored);
        // Lower case only sequences are not picked up as data
        assert_eq!(parse_line("acgt 4", 1).unwrap(), Line::Ignored);
    }

    #[test]
    fn test_malformed() {
        for line in ["ATGAAA", "ATG seven", "ATG -3", "ATG 1.5", "ATG 3 4"] {
            match parse_line(line, 9) {
                Err(Error::MalformedRecord {
                    line: line_number,
                    content,
                    ..
                }) => {
                    assert_eq!(line_number, 9);
                    assert_eq!(content, line);
                }
                other => panic!("Expected malformed record for {:?}, got {:?}", line, other),
            }
        }
    }

    #[test]
    fn test_input_lines() {
        let text = "Header one = 0\n\nATG 3\r\nHeader two = 0\nTTT 4\n";
        let mut lines = InputLines::new(text.as_bytes());
        assert_eq!(
            lines.next().unwrap().unwrap(),
            Line::Header("Header one ".to_string())
        );
        assert_eq!(lines.next().unwrap().unwrap(), Line::Ignored);
        assert_eq!(lines.next().unwrap().unwrap(), record("ATG", 3));
        assert_eq!(lines.line_number(), 3);
        assert_eq!(
            lines.next().unwrap().unwrap(),
            Line::Header("Header two ".to_string())
        );
        assert_eq!(lines.next().unwrap().unwrap(), record("TTT", 4));
        assert!(lines.next().is_none());
    }
}
