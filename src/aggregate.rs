//! Module for translating every record of an input and totalling abundances
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
#[cfg(feature = "python")]
use pyo3::prelude::*;

use crate::codon::translate_sequence;
use crate::common::{SequenceRecord, TranslatedRecord, DEFAULT_FRAME};
use crate::error::{Error, Result};
use crate::input::{InputLines, Line};
use crate::report::{output_path, write_report, Report};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
/// Running state while reading an input
pub struct Aggregation {
    /// Header labels in the order they were found
    pub labels: Vec<String>,

    /// Translated records in input order
    pub records: Vec<TranslatedRecord>,

    /// Number of records translated
    pub unique: u64,

    /// Sum of all abundances
    pub total: u64,
}

impl Aggregation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep a header label. Only the first two are used
    pub fn add_header(&mut self, label: String, line_number: usize) {
        if self.labels.len() >= 2 {
            warn!(
                "Ignoring extra header on line {}: {:?}",
                line_number, label
            );
            return;
        }
        self.labels.push(label);
    }

    /// Translate a record in the default frame and add it to the totals
    ///
    /// # Arguments
    /// - `record`: Record to translate
    /// - `line_number`: 1-based line the record came from, for errors
    pub fn add_record(&mut self, record: SequenceRecord, line_number: usize) -> Result<()> {
        let amino_acids = translate_sequence(record.sequence.as_bytes(), DEFAULT_FRAME)?;
        if amino_acids.is_empty() {
            debug!(
                "Line {}: {} translates to an empty sequence",
                line_number, record.sequence
            );
        }
        self.total = self
            .total
            .checked_add(record.abundance)
            .ok_or(Error::AbundanceOverflow { line: line_number })?;
        self.unique += 1;
        self.records.push(TranslatedRecord {
            amino_acids,
            abundance: record.abundance,
        });
        Ok(())
    }

    /// Turn the totals into a report. Fails unless both header labels were found
    pub fn finish(self) -> Result<Report> {
        let mut labels = self.labels.into_iter();
        match (labels.next(), labels.next()) {
            (Some(unique_label), Some(total_label)) => Ok(Report {
                unique_label,
                total_label,
                unique: self.unique,
                total: self.total,
                records: self.records,
            }),
            (first, _) => Err(Error::MissingHeaders {
                found: usize::from(first.is_some()),
            }),
        }
    }
}

/// Translate and total every record from a reader
pub fn aggregate_reader<R: BufRead>(reader: R) -> Result<Report> {
    let mut aggregation = Aggregation::new();
    let mut lines = InputLines::new(reader);
    while let Some(line) = lines.next() {
        let line_number = lines.line_number();
        match line? {
            Line::Header(label) => aggregation.add_header(label, line_number),
            Line::Record(record) => aggregation.add_record(record, line_number)?,
            Line::Ignored => (),
        }
    }
    aggregation.finish()
}

/// Translate and total every record in a file
pub fn aggregate_file(path: &Path) -> Result<Report> {
    let file = File::open(path).map_err(|e| Error::file(path, e))?;
    aggregate_reader(BufReader::new(file))
}

/// Process an input file end to end, writing the report next to it
///
/// Nothing is written unless the whole input was read successfully.
///
/// # Returns
/// - Path of the written report along with the report itself
pub fn process_file(input: &Path) -> Result<(PathBuf, Report)> {
    info!("Reading records from {:?}", input);
    let report = aggregate_file(input)?;
    info!(
        "Translated {} records ({} molecules, {} distinct amino acid sequences)",
        report.unique,
        report.total,
        report.distinct_sequences()
    );

    let output = output_path(input);
    write_report(&output, &report)?;
    info!("Report written to {:?}", output);
    Ok((output, report))
}

#[cfg(not(tarpaulin_include))]
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "process_file")]
/// Process an input file, writing the report next to it and returning it
pub fn py_process_file(input: String) -> PyResult<Report> {
    let (_, report) = process_file(Path::new(&input))?;
    Ok(report)
}

#[cfg(not(tarpaulin_include))]
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "aggregate_text")]
/// Build a report from the contents of an input file, without writing anything
pub fn py_aggregate_text(text: String) -> PyResult<Report> {
    Ok(aggregate_reader(text.as_bytes())?)
}
