//! Module for rendering and writing the translated report
use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "python")]
use pyo3::prelude::*;

use crate::common::{
    TranslatedRecord, ABUNDANCE_WIDTH, COUNT_WIDTH, LABEL_WIDTH, OUTPUT_SUFFIX, SEQUENCE_WIDTH,
};
use crate::error::{Error, Result};

#[cfg_attr(feature = "python", pyclass(eq))]
#[derive(Clone, Debug, Eq, PartialEq)]
/// Totals and rows produced from one input file
pub struct Report {
    #[cfg_attr(feature = "python", pyo3(get))]
    /// Label of the first header line, verbatim
    pub unique_label: String,

    #[cfg_attr(feature = "python", pyo3(get))]
    /// Label of the second header line, verbatim
    pub total_label: String,

    #[cfg_attr(feature = "python", pyo3(get))]
    /// Number of records translated. Every data line counts, duplicates included
    pub unique: u64,

    #[cfg_attr(feature = "python", pyo3(get))]
    /// Sum of the abundances of all records
    pub total: u64,

    #[cfg_attr(feature = "python", pyo3(get))]
    /// Translated records in input order
    pub records: Vec<TranslatedRecord>,
}

impl Report {
    /// Number of different amino acid sequences (sentinel included) among the records
    pub fn distinct_sequences(&self) -> usize {
        self.records
            .iter()
            .map(|record| record.display_sequence())
            .collect::<HashSet<&str>>()
            .len()
    }

    /// Write the report to some writer
    pub fn write_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        write!(writer, "{}", self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<lw$}={:>cw$}",
            self.unique_label,
            self.unique,
            lw = LABEL_WIDTH,
            cw = COUNT_WIDTH
        )?;
        writeln!(
            f,
            "{:<lw$}={:>cw$}",
            self.total_label,
            self.total,
            lw = LABEL_WIDTH,
            cw = COUNT_WIDTH
        )?;
        writeln!(f)?;
        for record in self.records.iter() {
            writeln!(
                f,
                "{:<sw$}{:>aw$}",
                record.display_sequence(),
                record.abundance,
                sw = SEQUENCE_WIDTH,
                aw = ABUNDANCE_WIDTH
            )?;
        }
        Ok(())
    }
}

#[cfg(not(tarpaulin_include))]
#[cfg(feature = "python")]
#[pymethods]
impl Report {
    #[getter]
    /// Rows as (sequence, abundance), with the sentinel for empty translations
    fn rows(&self) -> Vec<(String, u64)> {
        self.records
            .iter()
            .map(|record| (record.display_sequence().to_string(), record.abundance))
            .collect()
    }

    #[pyo3(name = "distinct_sequences")]
    fn py_distinct_sequences(&self) -> usize {
        self.distinct_sequences()
    }

    fn __str__(&self) -> String {
        self.to_string()
    }
}

/// Path of the report for a given input file
///
/// The report sits next to the input, named after everything in the input's file name
/// before the first `.`, e.g. `data/sample1.counts.txt` -> `data/sample1_aa_dup.txt`
pub fn output_path(input: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = file_name.split('.').next().unwrap_or_default();
    input.with_file_name(format!("{}{}", stem, OUTPUT_SUFFIX))
}

/// Write a report to a file, replacing anything already there
pub fn write_report(path: &Path, report: &Report) -> Result<()> {
    let file = File::create(path).map_err(|e| Error::file(path, e))?;
    let mut writer = BufWriter::new(file);
    report
        .write_to(&mut writer)
        .and_then(|_| writer.flush())
        .map_err(|e| Error::file(path, e))
}

#[cfg(not(tarpaulin_include))]
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "output_path")]
/// Path of the report for a given input file
pub fn py_output_path(input: String) -> String {
    output_path(Path::new(&input)).to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::EMPTY_SEQUENCE_SENTINEL;
    use pretty_assertions::assert_eq;

    fn record(amino_acids: &str, abundance: u64) -> TranslatedRecord {
        TranslatedRecord {
            amino_acids: amino_acids.to_string(),
            abundance,
        }
    }

    fn sample_report() -> Report {
        Report {
            unique_label: "Number of unique sequences of sample X ".to_string(),
            total_label: "Number of total reads of sample X ".to_string(),
            unique: 2,
            total: 9,
            records: vec![record("MK", 7), record("", 2)],
        }
    }

    #[test]
    fn test_format() {
        let expected = format!(
            "{}\n{}\n\n{}\n{}\n",
            "Number of unique sequences of sample X =         2",
            "Number of total reads of sample X =         9",
            format!("MK{}7", " ".repeat(98 + 19)),
            format!(
                "{}{}2",
                EMPTY_SEQUENCE_SENTINEL,
                " ".repeat(100 - EMPTY_SEQUENCE_SENTINEL.len() + 19)
            ),
        );
        assert_eq!(sample_report().to_string(), expected);
    }

    #[test]
    fn test_short_labels_are_padded() {
        let report = Report {
            unique_label: "Unique ".to_string(),
            total_label: "Total ".to_string(),
            unique: 0,
            total: 0,
            records: Vec::new(),
        };
        let text = report.to_string();
        let lines = text.lines().collect::<Vec<&str>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], format!("{:<30}={:>10}", "Unique ", 0));
        assert_eq!(lines[0].len(), 41);
        assert_eq!(lines[1].len(), 41);
        assert_eq!(lines[2], "");
    }

    #[test]
    fn test_row_widths() {
        let report = sample_report();
        let text = report.to_string();
        for row in text.lines().skip(3) {
            assert_eq!(row.len(), 120);
        }
    }

    #[test]
    fn test_distinct_sequences() {
        let mut report = sample_report();
        assert_eq!(report.distinct_sequences(), 2);
        report.records.push(record("MK", 1));
        report.records.push(record("", 1));
        assert_eq!(report.distinct_sequences(), 2);
        report.records.push(record("MKW", 1));
        assert_eq!(report.distinct_sequences(), 3);
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            output_path(Path::new("sample1.txt")),
            PathBuf::from("sample1_aa_dup.txt")
        );
        assert_eq!(
            output_path(Path::new("data/sample1.counts.txt")),
            PathBuf::from("data/sample1_aa_dup.txt")
        );
        assert_eq!(
            output_path(Path::new("./runs/v1.2/sample")),
            PathBuf::from("./runs/v1.2/sample_aa_dup.txt")
        );
    }

    #[test]
    fn test_write_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out_aa_dup.txt");
        std::fs::write(&path, "stale content which is much longer than nothing\n".repeat(100))
            .unwrap();

        let report = sample_report();
        write_report(&path, &report).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), report.to_string());
    }

    #[test]
    fn test_write_report_bad_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out_aa_dup.txt");
        assert!(matches!(
            write_report(&path, &sample_report()),
            Err(Error::File { .. })
        ));
    }
}
