//! The stateful word scanner.
//!
//! [`Scanner`] walks a borrowed byte buffer one word at a time and keeps
//! three backtracking mechanisms consistent across every path, error paths
//! included:
//!
//! - the live cursor (`current`),
//! - a checkpoint stack ([`pushd`](Scanner::pushd) /
//!   [`popd`](Scanner::popd)) for arbitrary-depth speculative lookahead,
//! - a single undo slot ([`prev_scan`](Scanner::prev_scan)) for the
//!   "peek one word, maybe put it back" pattern without checkpoint
//!   overhead.
//!
//! Not thread-safe by design: all state is mutated in place through
//! `&mut self`, so concurrent tokenization means one scanner per buffer
//! per thread. The buffer itself is read-only and freely shared.

use crate::cursor::{CursorState, Location};
use crate::decode::{self, Validation, WordBytes};
use crate::scan_error::ScanError;
use crate::sink::{DiagnosticSink, NoopSink};

/// Shared sink for default-constructed scanners.
static NOOP_SINK: NoopSink = NoopSink;

/// Stateful scanner over an immutable byte buffer.
///
/// Constructed at position zero with an empty checkpoint stack. Mutated in
/// place by [`scan`](Self::scan) / [`pushd`](Self::pushd) /
/// [`popd`](Self::popd) / [`prev_scan`](Self::prev_scan) for its entire
/// lifetime.
pub struct Scanner<'a> {
    buffer: &'a [u8],
    current: CursorState,
    /// Snapshot stack for pushd/popd. Caller-managed depth.
    checkpoints: Vec<CursorState>,
    /// Snapshot of `current` taken at the start of the most recent scan.
    last: CursorState,
    validation: Validation,
    sink: &'a dyn DiagnosticSink,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of `buffer`.
    ///
    /// Lenient validation, no-op diagnostic sink. Buffers longer than
    /// `u32::MAX` bytes are clipped at the `u32` position boundary; a
    /// compiler driver rejects oversized files upstream.
    pub fn new(buffer: &'a [u8]) -> Self {
        let clipped = if buffer.len() > u32::MAX as usize {
            &buffer[..u32::MAX as usize]
        } else {
            buffer
        };
        Self {
            buffer: clipped,
            current: CursorState::default(),
            checkpoints: Vec::new(),
            last: CursorState::default(),
            validation: Validation::default(),
            sink: &NOOP_SINK,
        }
    }

    /// Replace the decode mode. Lenient by default.
    #[must_use]
    pub fn with_validation(mut self, validation: Validation) -> Self {
        self.validation = validation;
        self
    }

    /// Replace the diagnostic sink. No-op by default.
    #[must_use]
    pub fn with_sink(mut self, sink: &'a dyn DiagnosticSink) -> Self {
        self.sink = sink;
        self
    }

    // ─── Scanning ──────────────────────────────────────────────────────

    /// Advance one word and return its raw bytes.
    ///
    /// At or past the end of the buffer this sets the end flag and returns
    /// an empty sequence: no movement, no error. On a decode failure the
    /// cursor stays at its pre-call position and the failure's short code
    /// is emitted to the diagnostic sink before the error is returned.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "a word is at most 4 bytes"
    )]
    pub fn scan(&mut self) -> Result<WordBytes, ScanError> {
        // Snapshot unconditionally (end-of-input path included) so that
        // prev_scan after reaching the end restores the pre-end cursor.
        self.last = self.current;

        if self.current.byte_pos as usize >= self.buffer.len() {
            self.current.is_end = true;
            return Ok(WordBytes::new());
        }

        let word = match decode::word_at(self.buffer, self.current.byte_pos, self.validation) {
            Ok(word) => word,
            Err(err) => {
                self.sink.record(err.code());
                return Err(err);
            }
        };

        self.current.word_pos += 1;
        self.current.byte_pos += word.len() as u32;

        // Line bookkeeping: only the single ASCII line feed counts. The
        // markers land on the post-advance position, the start of the
        // next line. A 0x0A continuation byte inside a multi-byte word
        // never matches (the word is longer than one byte).
        if word.as_slice() == b"\n" {
            self.current.line += 1;
            self.current.line_start_word_pos = self.current.word_pos;
            self.current.line_start_byte_pos = self.current.byte_pos;
        }

        Ok(word)
    }

    /// Undo the most recent [`scan`](Self::scan).
    ///
    /// Restores the snapshot taken at the start of the last scan. One
    /// level only: repeated calls without an intervening scan restore the
    /// same snapshot each time.
    pub fn prev_scan(&mut self) {
        self.current = self.last;
    }

    /// Iterator over the remaining words.
    ///
    /// Yields one `Result` per word and ends once the scanner reports end
    /// of input. A decode failure is yielded without advancing the cursor,
    /// so callers should stop or repair on the first `Err`. Dropping the
    /// iterator releases the borrow; checkpoint operations stay available
    /// between drains.
    pub fn words(&mut self) -> Words<'_, 'a> {
        Words { scanner: self }
    }

    // ─── Checkpoints ───────────────────────────────────────────────────

    /// Save the cursor onto the checkpoint stack. Unbounded depth.
    pub fn pushd(&mut self) {
        self.checkpoints.push(self.current);
    }

    /// Restore the cursor from the most recent checkpoint, consuming it.
    ///
    /// # Panics
    ///
    /// Panics when the stack is empty. An unbalanced `popd` is a caller
    /// bug; ignoring it silently would corrupt the caller's assumptions
    /// about checkpoint depth.
    pub fn popd(&mut self) {
        let Some(snapshot) = self.checkpoints.pop() else {
            panic!("popd without a matching pushd");
        };
        self.current = snapshot;
    }

    /// Drop every checkpoint without touching the cursor.
    ///
    /// The discard half of the speculative-lookahead pattern: pushd,
    /// scan ahead, and on success drain the no-longer-needed snapshots.
    pub fn clean_stack(&mut self) {
        self.checkpoints.clear();
    }

    /// Number of saved checkpoints.
    pub fn checkpoint_depth(&self) -> usize {
        self.checkpoints.len()
    }

    // ─── Accessors ─────────────────────────────────────────────────────

    /// The scanned buffer (clipped view, see [`new`](Self::new)).
    pub fn buffer(&self) -> &'a [u8] {
        self.buffer
    }

    /// Snapshot of the live cursor.
    pub fn cursor(&self) -> CursorState {
        self.current
    }

    /// Bytes consumed so far.
    pub fn byte_pos(&self) -> u32 {
        self.current.byte_pos
    }

    /// Scalar values consumed so far.
    pub fn word_pos(&self) -> u32 {
        self.current.word_pos
    }

    /// Line breaks consumed so far.
    pub fn line(&self) -> u32 {
        self.current.line
    }

    /// `byte_pos` at the start of the current line.
    pub fn line_start_byte_pos(&self) -> u32 {
        self.current.line_start_byte_pos
    }

    /// `word_pos` at the start of the current line.
    pub fn line_start_word_pos(&self) -> u32 {
        self.current.line_start_word_pos
    }

    /// True once a scan has observed end-of-buffer.
    pub fn is_end(&self) -> bool {
        self.current.is_end
    }

    /// Derived source location at the cursor.
    pub fn location(&self) -> Location {
        self.current.location()
    }
}

/// Iterator over a scanner's remaining words. See [`Scanner::words`].
pub struct Words<'s, 'a> {
    scanner: &'s mut Scanner<'a>,
}

impl Iterator for Words<'_, '_> {
    type Item = Result<WordBytes, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.scanner.scan() {
            // Only the end-of-input path produces an empty word.
            Ok(word) if word.is_empty() => None,
            other => Some(other),
        }
    }
}
