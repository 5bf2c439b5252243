//! aadup, translation of abundance-annotated DNA sequences in Rust.
//!
//! This library reads files of nucleotide sequences with their abundances, translates each
//! sequence into amino acids using the standard genetic code, and writes a report with:
//! - The number of records translated
//! - The total abundance across all records
//! - One row per record holding its amino acid sequence and abundance, in input order
//!
//! # Example
//! ```no_run
//! use std::path::Path;
//! use aadup::aggregate::process_file;
//!
//! let (output, report) = process_file(Path::new("some/path/to/sample1.txt")).unwrap();
//! println!("{} records, {} molecules, written to {:?}", report.unique, report.total, output);
//! for record in report.records.iter() {
//!     println!("{} {}", record.display_sequence(), record.abundance);
//! }
//! ```
//!
//! Translation on its own:
//! ```
//! use aadup::codon::{translate_codon, translate_sequence};
//!
//! assert_eq!(translate_codon(b"ATG"), 'M');
//! assert_eq!(translate_sequence(b"ATGAAATAG", 1).unwrap(), "MK");
//! ```
//!
//! Also provides an interface to this library as a Python module using PyO3,
//! enabled with the `python` feature.
#[cfg(feature = "python")]
use pyo3::prelude::*;

pub mod aggregate;
pub mod codon;
pub mod common;
pub mod error;
pub mod input;
pub mod report;

pub use error::{Error, Result};

/// A Python module implemented in Rust.
#[cfg(not(tarpaulin_include))]
#[cfg(feature = "python")]
#[pymodule]
fn aadup(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<common::SequenceRecord>()?;
    m.add_class::<common::TranslatedRecord>()?;

    m.add_class::<report::Report>()?;

    m.add_function(wrap_pyfunction!(codon::py_translate_codon, m)?)?;
    m.add_function(wrap_pyfunction!(codon::py_translate_sequence, m)?)?;
    m.add_function(wrap_pyfunction!(aggregate::py_process_file, m)?)?;
    m.add_function(wrap_pyfunction!(aggregate::py_aggregate_text, m)?)?;
    m.add_function(wrap_pyfunction!(report::py_output_path, m)?)?;

    Ok(())
}
