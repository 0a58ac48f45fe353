//! Line module - the shift/combine/shift transform
//!
//! Every move reduces to the same one-dimensional operation applied to each
//! row or column: compact the tiles toward one end, merge equal neighbours
//! once, compact again. Right/down moves reuse the toward-start logic by
//! reversing the line around the three phases.
//!
//! All functions operate on slices of any length and report whether they
//! changed anything; the board layer ORs these flags into the move effect.

use crate::types::Cell;

/// Compact all non-zero values toward index 0, preserving their relative
/// order and zero-filling the tail.
///
/// Returns true if the slice contents changed.
pub fn shift_start(line: &mut [Cell]) -> bool {
    let mut changed = false;
    let mut write = 0;

    for read in 0..line.len() {
        if line[read] == 0 {
            continue;
        }
        if read != write {
            line[write] = line[read];
            line[read] = 0;
            changed = true;
        }
        write += 1;
    }

    changed
}

/// Merge equal adjacent non-zero pairs in a single left-to-right pass.
///
/// The left value doubles and the right becomes zero. The scan never
/// revisits a pair, so each cell merges at most once per call:
/// `[2, 2, 2]` becomes `[4, 0, 2]`, not `[4, 2, 0]` or `[8, 0, 0]`.
///
/// Returns true if any merge occurred.
pub fn combine_start(line: &mut [Cell]) -> bool {
    let mut changed = false;

    for i in 0..line.len().saturating_sub(1) {
        if line[i] != 0 && line[i] == line[i + 1] {
            line[i] *= 2;
            line[i + 1] = 0;
            changed = true;
        }
    }

    changed
}

/// Apply the full move transform to one line: shift, combine, shift again.
///
/// `toward_start` selects the edge the tiles slide toward; the toward-end
/// case reverses the line before and after so both senses share one
/// implementation. All three phases always run, and the effect flag is the
/// OR of their individual flags.
///
/// # Examples
///
/// ```
/// use tui_2048_core::shift_combine_shift;
///
/// let mut line = [0, 2, 2, 4, 4, 0, 0, 8, 8, 5, 3];
/// assert!(shift_combine_shift(&mut line, true));
/// assert_eq!(line, [4, 8, 16, 5, 3, 0, 0, 0, 0, 0, 0]);
///
/// let mut line = [0, 2, 2, 4, 4, 0, 0, 8, 8, 5, 3];
/// assert!(shift_combine_shift(&mut line, false));
/// assert_eq!(line, [0, 0, 0, 0, 0, 0, 4, 8, 16, 5, 3]);
/// ```
pub fn shift_combine_shift(line: &mut [Cell], toward_start: bool) -> bool {
    if !toward_start {
        line.reverse();
    }

    // Non-short-circuit OR: the second shift must run even when the first
    // two phases report no change.
    let changed = shift_start(line) | combine_start(line) | shift_start(line);

    if !toward_start {
        line.reverse();
    }

    changed
}
