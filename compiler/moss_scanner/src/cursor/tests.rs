use super::*;

// === Construction ===

#[test]
fn default_state_is_zeroed() {
    let state = CursorState::default();
    assert_eq!(state.word_pos, 0);
    assert_eq!(state.byte_pos, 0);
    assert_eq!(state.line, 0);
    assert_eq!(state.line_start_word_pos, 0);
    assert_eq!(state.line_start_byte_pos, 0);
    assert!(!state.is_end);
}

#[test]
#[allow(unused_assignments)]
fn snapshots_are_independent_copies() {
    let mut state = CursorState::default();
    let saved = state;
    state.word_pos = 5;
    state.byte_pos = 9;
    state.is_end = true;
    assert_eq!(saved, CursorState::default());
}

// === Derived location ===

#[test]
fn column_is_relative_to_line_start() {
    let state = CursorState {
        word_pos: 7,
        byte_pos: 10,
        line: 2,
        line_start_word_pos: 4,
        line_start_byte_pos: 6,
        is_end: false,
    };
    assert_eq!(state.column(), 3);
}

#[test]
fn column_is_zero_at_line_start() {
    let state = CursorState {
        word_pos: 4,
        byte_pos: 6,
        line: 1,
        line_start_word_pos: 4,
        line_start_byte_pos: 6,
        is_end: false,
    };
    assert_eq!(state.column(), 0);
}

#[test]
fn location_carries_all_counters() {
    let state = CursorState {
        word_pos: 7,
        byte_pos: 10,
        line: 2,
        line_start_word_pos: 4,
        line_start_byte_pos: 6,
        is_end: false,
    };
    let loc = state.location();
    assert_eq!(
        loc,
        Location {
            line: 2,
            column: 3,
            word_pos: 7,
            byte_pos: 10,
        }
    );
}
