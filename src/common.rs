//! Module of common structs and constants used throughout the program
#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Reading frame used when translating input records
pub const DEFAULT_FRAME: usize = 1;

/// Placeholder written instead of an empty translation.
///
/// Contains `-`, which translation never produces, so it cannot collide with a real sequence
pub const EMPTY_SEQUENCE_SENTINEL: &str = "AAAAA-EMPTYSEQUENCE-AAAAA";

/// Appended to the input file stem to name the report
pub const OUTPUT_SUFFIX: &str = "_aa_dup.txt";

/// Width of the header label column
pub const LABEL_WIDTH: usize = 30;

/// Width of the header value column
pub const COUNT_WIDTH: usize = 10;

/// Width of the amino acid column of each row
pub const SEQUENCE_WIDTH: usize = 100;

/// Width of the abundance column of each row
pub const ABUNDANCE_WIDTH: usize = 20;

#[cfg_attr(feature = "python", pyclass(eq))]
#[derive(Clone, Debug, Eq, PartialEq)]
/// A nucleotide sequence along with how many times it was observed
pub struct SequenceRecord {
    #[cfg_attr(feature = "python", pyo3(get, set))]
    /// Nucleotide sequence as found in the input
    pub sequence: String,

    #[cfg_attr(feature = "python", pyo3(get, set))]
    /// Number of molecules observed
    pub abundance: u64,
}

#[cfg_attr(feature = "python", pyclass(eq))]
#[derive(Clone, Debug, Eq, PartialEq)]
/// Result of translating a single record
pub struct TranslatedRecord {
    #[cfg_attr(feature = "python", pyo3(get, set))]
    /// Amino acids up to (not including) the first stop codon. May be empty
    pub amino_acids: String,

    #[cfg_attr(feature = "python", pyo3(get, set))]
    /// Abundance carried over from the nucleotide record
    pub abundance: u64,
}

impl TranslatedRecord {
    /// Sequence as it should appear in the report, substituting the sentinel for empty translations
    pub fn display_sequence(&self) -> &str {
        if self.amino_acids.is_empty() {
            EMPTY_SEQUENCE_SENTINEL
        } else {
            &self.amino_acids
        }
    }
}
