//! Module for translating nucleotides into amino acids using the standard genetic code
#[cfg(feature = "python")]
use pyo3::prelude::*;

use crate::error::{Error, Result};

/// Symbol returned for stop codons
pub const STOP_SYMBOL: char = '_';

/// Symbol returned for anything which is not a valid codon
pub const UNKNOWN_SYMBOL: char = 'x';

/// Standard genetic code, indexed by `16 * first + 4 * second + third`
/// where each base is encoded as T=0, C=1, A=2, G=3
const GENETIC_CODE: &[u8; 64] =
    b"FFLLSSSSYY__CC_WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG";

/// 2-bit code of a base, case-insensitive. None for anything other than ACGT
fn base_index(base: u8) -> Option<usize> {
    match base.to_ascii_uppercase() {
        b'T' => Some(0),
        b'C' => Some(1),
        b'A' => Some(2),
        b'G' => Some(3),
        _ => None,
    }
}

/// Converts a codon to an amino acid
///
/// # Arguments
/// - `codon`: Codon to convert. Case-insensitive
///
/// # Returns
/// - Amino acid the codon codes for, `STOP_SYMBOL` for stop codons, or
///   `UNKNOWN_SYMBOL` if this is not 3 valid bases
pub fn translate_codon(codon: &[u8]) -> char {
    let [first, second, third] = codon else {
        return UNKNOWN_SYMBOL;
    };
    match (base_index(*first), base_index(*second), base_index(*third)) {
        (Some(a), Some(b), Some(c)) => GENETIC_CODE[16 * a + 4 * b + c] as char,
        _ => UNKNOWN_SYMBOL,
    }
}

/// Whether a translated symbol ends translation
pub fn is_stop(symbol: char) -> bool {
    symbol == STOP_SYMBOL
}

/// Split a sequence into non-overlapping codons
///
/// # Arguments
/// - `sequence`: Nucleotide sequence
/// - `frame`: 1-based reading frame to start from
///
/// # Returns
/// - Codons in order. Trailing bases which don't fill a codon are dropped
pub fn split_into_codons(sequence: &[u8], frame: usize) -> Result<Vec<&[u8]>> {
    if frame == 0 {
        return Err(Error::InvalidFrame(frame));
    }
    let start = frame - 1;
    if start >= sequence.len() {
        return Ok(Vec::new());
    }
    Ok(sequence[start..].chunks_exact(3).collect())
}

/// Translate a nucleotide sequence in a single reading frame
///
/// Translation stops at the first stop codon, which is not included.
/// Unrecognised codons are kept as `UNKNOWN_SYMBOL` and translation carries on.
///
/// # Arguments
/// - `sequence`: Nucleotide sequence
/// - `frame`: 1-based reading frame
///
/// # Returns
/// - Amino acid sequence, which may be empty
pub fn translate_sequence(sequence: &[u8], frame: usize) -> Result<String> {
    let codons = split_into_codons(sequence, frame)?;
    let mut amino_acids = String::with_capacity(codons.len());
    for codon in codons {
        let amino_acid = translate_codon(codon);
        if is_stop(amino_acid) {
            break;
        }
        amino_acids.push(amino_acid);
    }
    Ok(amino_acids)
}

#[cfg(not(tarpaulin_include))]
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "translate_codon")]
/// Converts a codon to an amino acid
pub fn py_translate_codon(codon: String) -> String {
    translate_codon(codon.as_bytes()).to_string()
}

#[cfg(not(tarpaulin_include))]
#[cfg(feature = "python")]
#[pyfunction]
#[pyo3(name = "translate_sequence", signature = (sequence, frame=1))]
/// Translate a nucleotide sequence in a single reading frame, stopping at the first stop codon
pub fn py_translate_sequence(sequence: String, frame: usize) -> PyResult<String> {
    Ok(translate_sequence(sequence.as_bytes(), frame)?)
}
