//! Decode failure taxonomy.
//!
//! Every failure is local and recoverable by the caller: the scanner's
//! cursor never advances on a failed scan, so a consumer may skip a byte,
//! substitute a replacement, or abandon the buffer. Nothing here is
//! retried internally.

use thiserror::Error;

/// A word-decode failure.
///
/// The first four variants can occur in any mode; the last three only
/// under [`Validation::Strict`](crate::Validation::Strict). `Display`
/// renders the stable short code (plus the required length for
/// [`TruncatedSequence`](Self::TruncatedSequence)); [`code`](Self::code)
/// returns the bare short code used for diagnostic-sink messages.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Hash)]
pub enum ScanError {
    /// The buffer has zero length at decode time.
    #[error("empty input")]
    EmptyInput,

    /// The byte offset is outside `[0, buffer.len())`.
    #[error("position out of range")]
    InvalidPosition,

    /// A multi-byte lead was classified but fewer bytes remain than the
    /// sequence needs. Carries the required length (2, 3, or 4).
    #[error("truncated sequence (need {0} bytes)")]
    TruncatedSequence(u32),

    /// The lead byte matches no 1/2/3/4-byte pattern: a continuation byte
    /// misplaced as a lead, or a 5+-byte lead pattern that valid Unicode
    /// never requires.
    #[error("unsupported codepoint length")]
    UnsupportedCodepointLength,

    /// Strict mode only: a trailing byte lacks the `10` continuation
    /// prefix.
    #[error("invalid continuation byte")]
    InvalidContinuation,

    /// Strict mode only: the sequence is longer than the shortest encoding
    /// of its scalar value.
    #[error("overlong encoding")]
    OverlongEncoding,

    /// Strict mode only: the decoded value is a surrogate or lies above
    /// U+10FFFF.
    #[error("invalid scalar value")]
    InvalidScalarValue,
}

impl ScanError {
    /// Stable short code, emitted verbatim to the diagnostic sink.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty input",
            Self::InvalidPosition => "position out of range",
            Self::TruncatedSequence(_) => "truncated sequence",
            Self::UnsupportedCodepointLength => "unsupported codepoint length",
            Self::InvalidContinuation => "invalid continuation byte",
            Self::OverlongEncoding => "overlong encoding",
            Self::InvalidScalarValue => "invalid scalar value",
        }
    }

    /// True for failures only produced under strict validation.
    pub fn is_strict_only(&self) -> bool {
        matches!(
            self,
            Self::InvalidContinuation | Self::OverlongEncoding | Self::InvalidScalarValue
        )
    }
}
