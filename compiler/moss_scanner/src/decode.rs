//! Stateless UTF-8 word extraction.
//!
//! Classification is driven entirely by the lead byte's high bits:
//!
//! ```text
//! 0xxxxxxx  ->  1 byte  (ASCII)
//! 110xxxxx  ->  2 bytes
//! 1110xxxx  ->  3 bytes
//! 11110xxx  ->  4 bytes
//! 10xxxxxx  ->  error (continuation byte as lead)
//! 11111xxx  ->  error (5+-byte pattern; valid Unicode never needs it)
//! ```
//!
//! In [`Validation::Lenient`] mode the trailing bytes of a multi-byte
//! sequence are extracted verbatim, with no continuation-prefix, overlong,
//! or scalar-range checks. Consumers that trust their input (the common
//! case: buffers that were `&str` upstream) pay nothing for validation.
//! [`Validation::Strict`] layers full well-formedness checks on top without
//! changing the extraction semantics of well-formed input.

use smallvec::SmallVec;

use crate::scan_error::ScanError;

/// Raw bytes of one decoded word.
///
/// 1–4 bytes stored inline (no heap allocation); empty on the scanner's
/// end-of-input path.
pub type WordBytes = SmallVec<[u8; 4]>;

/// Whether multi-byte sequences are checked for well-formedness.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Validation {
    /// Trailing bytes are extracted verbatim. The default.
    #[default]
    Lenient,
    /// Trailing bytes must carry the `10` continuation prefix; overlong
    /// encodings, surrogates, and values above U+10FFFF are rejected.
    Strict,
}

/// Number of bytes in the sequence led by `lead`, by leading-bit pattern.
///
/// `None` for continuation bytes misplaced as leads and for 5+-byte lead
/// patterns.
#[inline]
pub(crate) fn sequence_len(lead: u8) -> Option<u32> {
    if lead & 0x80 == 0 {
        Some(1)
    } else if lead & 0xE0 == 0xC0 {
        Some(2)
    } else if lead & 0xF0 == 0xE0 {
        Some(3)
    } else if lead & 0xF8 == 0xF0 {
        Some(4)
    } else {
        None
    }
}

/// Extract the word starting at `offset`.
///
/// Checks run in a fixed order: non-empty buffer
/// ([`ScanError::EmptyInput`]), offset in range
/// ([`ScanError::InvalidPosition`]), lead classification
/// ([`ScanError::UnsupportedCodepointLength`]), remaining length
/// ([`ScanError::TruncatedSequence`]), then (strict mode only) sequence
/// well-formedness. Never mutates anything; [`Scanner`](crate::Scanner)
/// advances its cursor only after this returns `Ok`.
pub fn word_at(buffer: &[u8], offset: u32, validation: Validation) -> Result<WordBytes, ScanError> {
    if buffer.is_empty() {
        return Err(ScanError::EmptyInput);
    }
    let at = offset as usize;
    if at >= buffer.len() {
        return Err(ScanError::InvalidPosition);
    }

    let len = sequence_len(buffer[at]).ok_or(ScanError::UnsupportedCodepointLength)?;
    if buffer.len() - at < len as usize {
        return Err(ScanError::TruncatedSequence(len));
    }

    let bytes = &buffer[at..at + len as usize];
    if validation == Validation::Strict {
        check_well_formed(bytes)?;
    }
    Ok(WordBytes::from_slice(bytes))
}

/// Strict-mode well-formedness: continuation prefixes, shortest-form
/// encoding, and scalar-value range.
fn check_well_formed(bytes: &[u8]) -> Result<(), ScanError> {
    if bytes.len() == 1 {
        // ASCII is well-formed by classification.
        return Ok(());
    }

    for &b in &bytes[1..] {
        if b & 0xC0 != 0x80 {
            return Err(ScanError::InvalidContinuation);
        }
    }

    let value = scalar_value(bytes);
    let shortest_form_min = match bytes.len() {
        2 => 0x80,
        3 => 0x800,
        _ => 0x1_0000,
    };
    if value < shortest_form_min {
        return Err(ScanError::OverlongEncoding);
    }
    if (0xD800..=0xDFFF).contains(&value) || value > 0x10_FFFF {
        return Err(ScanError::InvalidScalarValue);
    }
    Ok(())
}

/// Assemble the scalar value of a classified sequence whose continuation
/// prefixes have already been verified.
fn scalar_value(bytes: &[u8]) -> u32 {
    let lead_bits = match bytes.len() {
        2 => u32::from(bytes[0] & 0x1F),
        3 => u32::from(bytes[0] & 0x0F),
        _ => u32::from(bytes[0] & 0x07),
    };
    bytes[1..]
        .iter()
        .fold(lead_bits, |acc, &b| (acc << 6) | u32::from(b & 0x3F))
}
