//! Line transform tests - the shift/combine/shift contract

use tui_2048::core::{combine_start, shift_combine_shift, shift_start};

#[test]
fn test_reference_vector_toward_start() {
    let mut line = [0, 2, 2, 4, 4, 0, 0, 8, 8, 5, 3];
    assert!(shift_combine_shift(&mut line, true));
    assert_eq!(line, [4, 8, 16, 5, 3, 0, 0, 0, 0, 0, 0]);
}

#[test]
fn test_reference_vector_toward_end() {
    let mut line = [0, 2, 2, 4, 4, 0, 0, 8, 8, 5, 3];
    assert!(shift_combine_shift(&mut line, false));
    assert_eq!(line, [0, 0, 0, 0, 0, 0, 4, 8, 16, 5, 3]);
}

#[test]
fn test_transform_settles_after_one_application_without_new_pairs() {
    // For lines where no merge product ends up beside an equal tile, one
    // application reaches the fixed point and re-applying is a no-op.
    let starts: [[u32; 4]; 5] = [
        [0, 2, 0, 2],
        [4, 4, 8, 8],
        [2, 0, 0, 2],
        [2, 4, 8, 16],
        [0, 0, 0, 0],
    ];

    for start in starts {
        for toward_start in [true, false] {
            let mut line = start;
            shift_combine_shift(&mut line, toward_start);
            let settled = line;
            assert!(
                !shift_combine_shift(&mut line, toward_start),
                "second application changed {:?}",
                start
            );
            assert_eq!(line, settled);
        }
    }
}

#[test]
fn test_transform_reaches_a_stable_fixed_point() {
    // Merge products may pair up again (single-pass combine), but each
    // application shrinks the tile count, so repetition terminates in a
    // state the transform no longer changes.
    let starts: [[u32; 4]; 3] = [[2, 2, 2, 2], [2, 2, 4, 0], [4, 4, 4, 8]];

    for start in starts {
        for toward_start in [true, false] {
            let mut line = start;
            let mut steps = 0;
            while shift_combine_shift(&mut line, toward_start) {
                steps += 1;
                assert!(steps <= 4, "no fixed point for {:?}", start);
            }
            let settled = line;
            assert!(!shift_combine_shift(&mut line, toward_start));
            assert_eq!(line, settled);
        }
    }
}

#[test]
fn test_merges_conserve_sum_and_reduce_count() {
    let starts: [[u32; 4]; 4] = [
        [2, 2, 2, 2],
        [2, 2, 4, 4],
        [0, 8, 8, 0],
        [2, 4, 8, 16],
    ];

    for start in starts {
        let mut line = start;
        shift_combine_shift(&mut line, true);

        let sum_before: u32 = start.iter().sum();
        let sum_after: u32 = line.iter().sum();
        assert_eq!(sum_before, sum_after, "sum changed for {:?}", start);

        let count_before = start.iter().filter(|&&v| v != 0).count();
        let count_after = line.iter().filter(|&&v| v != 0).count();
        assert!(count_after <= count_before);
    }
}

#[test]
fn test_all_zero_line_has_no_effect() {
    let mut line = [0u32; 4];
    assert!(!shift_combine_shift(&mut line, true));
    assert!(!shift_combine_shift(&mut line, false));
}

#[test]
fn test_shift_only_move_reports_effect() {
    // No merge is possible, but a tile changes position.
    let mut line = [0, 2, 4, 0];
    assert!(shift_combine_shift(&mut line, true));
    assert_eq!(line, [2, 4, 0, 0]);
}

#[test]
fn test_already_compacted_line_reports_no_effect() {
    let mut line = [2, 4, 8, 0];
    assert!(!shift_combine_shift(&mut line, true));
    assert_eq!(line, [2, 4, 8, 0]);
}

#[test]
fn test_phases_compose() {
    // Shift alone, then combine alone, then shift alone must equal the
    // composed transform.
    let start = [0u32, 2, 2, 8];
    let mut composed = start;
    shift_combine_shift(&mut composed, true);

    let mut manual = start;
    shift_start(&mut manual);
    combine_start(&mut manual);
    shift_start(&mut manual);

    assert_eq!(composed, manual);
    assert_eq!(manual, [4, 8, 0, 0]);
}
