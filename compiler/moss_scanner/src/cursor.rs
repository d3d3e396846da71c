//! Cursor state for the word scanner.
//!
//! [`CursorState`] is a plain `Copy` value. Checkpointing and undo are
//! implemented by copying whole states around, never by replaying input,
//! so saving and restoring a position is a handful of register moves.

/// Scanner position: three parallel counters plus line-start markers and
/// an end-of-input flag.
///
/// # Invariant
///
/// `line_start_word_pos <= word_pos` and `line_start_byte_pos <= byte_pos`
/// at all times. Both markers move together, exactly when a line-feed byte
/// is consumed, and land on the position immediately *after* the newline,
/// which is the first position of the next line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CursorState {
    /// Scalar values consumed so far.
    pub word_pos: u32,
    /// Bytes consumed so far. Always `>= word_pos`.
    pub byte_pos: u32,
    /// Line breaks consumed so far.
    pub line: u32,
    /// `word_pos` at the start of the current line.
    pub line_start_word_pos: u32,
    /// `byte_pos` at the start of the current line.
    pub line_start_byte_pos: u32,
    /// True once the cursor has observed end-of-buffer.
    pub is_end: bool,
}

/// Size assertion: CursorState should be <= 24 bytes so checkpoint
/// push/pop stays a cheap memcpy. 5 x u32 = 20, bool = 1, + padding = 24.
const _: () = assert!(std::mem::size_of::<CursorState>() <= 24);

impl CursorState {
    /// Column within the current line, counted in scalar values (0-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.word_pos - self.line_start_word_pos
    }

    /// Derived source location for diagnostics.
    pub fn location(&self) -> Location {
        Location {
            line: self.line,
            column: self.column(),
            word_pos: self.word_pos,
            byte_pos: self.byte_pos,
        }
    }
}

/// A resolved source location, ready for a diagnostic reporter.
///
/// `line` and `column` are 0-based; presentation layers add 1 when
/// rendering for humans.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    /// Line number (count of line feeds before this position).
    pub line: u32,
    /// Column within the line, in scalar values.
    pub column: u32,
    /// Absolute position in scalar values.
    pub word_pos: u32,
    /// Absolute position in bytes.
    pub byte_pos: u32,
}

#[cfg(test)]
mod tests;
