#![allow(missing_docs)]
//! Host-level tests for panel layouts and the cell-to-strip mapping.

use led_marquee::matrix::layout::LedLayout;
use led_marquee::matrix::{MARQUEE_64X8, MATRIX_HEIGHT, MATRIX_WIDTH, STRIP_LEN};

#[test]
fn serpentine_column_major_3x2_matches_expected() {
    const SNAKE: LedLayout<6, 3, 2> = LedLayout::serpentine_column_major();
    assert_eq!(
        SNAKE.index_to_xy(),
        &[(0, 0), (0, 1), (1, 1), (1, 0), (2, 0), (2, 1)]
    );
}

#[test]
fn serpentine_row_major_3x2_matches_expected() {
    const SNAKE: LedLayout<6, 3, 2> = LedLayout::serpentine_row_major();
    assert_eq!(
        SNAKE.index_to_xy(),
        &[(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1)]
    );
}

#[test]
fn rotate_180_small_grid_matches_expected() {
    const SNAKE: LedLayout<6, 3, 2> = LedLayout::serpentine_column_major();
    let rotated = SNAKE.rotate_180();
    assert_eq!(
        *rotated.index_to_xy(),
        [(2, 1), (2, 0), (1, 0), (1, 1), (0, 1), (0, 0)]
    );
}

#[test]
fn flip_h_small_grid_matches_expected() {
    const SNAKE: LedLayout<6, 3, 2> = LedLayout::serpentine_column_major();
    let flipped = SNAKE.flip_h();
    assert_eq!(
        *flipped.index_to_xy(),
        [(2, 0), (2, 1), (1, 1), (1, 0), (0, 0), (0, 1)]
    );
}

#[test]
fn marquee_dimensions_match_stock_panel() {
    assert_eq!(MARQUEE_64X8.width(), MATRIX_WIDTH);
    assert_eq!(MARQUEE_64X8.height(), MATRIX_HEIGHT);
    assert_eq!(MARQUEE_64X8.len(), STRIP_LEN);
}

/// Corner cells of the stock panel, worked out by hand: data enters at the
/// viewer's bottom-right, so strip LED 0 lights (63, 7) and the top-left
/// cell (0, 0) sits at the start of the last (odd, upward) wired column.
#[test]
fn marquee_corner_cells_match_hand_computed_strip_indexes() {
    let map = MARQUEE_64X8.xy_to_index();
    assert_eq!(map[0], 504); // (0, 0)
    assert_eq!(map[MATRIX_WIDTH - 1], 7); // (63, 0)
    assert_eq!(map[(MATRIX_HEIGHT - 1) * MATRIX_WIDTH], 511); // (0, 7)
    assert_eq!(map[STRIP_LEN - 1], 0); // (63, 7)
}

#[test]
fn marquee_neighbor_cells_follow_the_serpentine() {
    let map = MARQUEE_64X8.xy_to_index();
    // One cell right of the top-left corner lands in the neighboring wired
    // column, one LED earlier on the strip.
    assert_eq!(map[1], 503); // (1, 0)
    // One cell down continues the upward-wired column.
    assert_eq!(map[MATRIX_WIDTH], 505); // (0, 1)
}

#[test]
fn marquee_mapping_is_a_bijection() {
    let map = MARQUEE_64X8.xy_to_index();
    let mut seen = [false; STRIP_LEN];
    for &strip in map.iter() {
        let strip = usize::from(strip);
        assert!(strip < STRIP_LEN, "strip index {strip} out of range");
        assert!(!seen[strip], "strip index {strip} mapped twice");
        seen[strip] = true;
    }
}

#[test]
fn xy_to_index_inverts_index_to_xy() {
    let map = MARQUEE_64X8.xy_to_index();
    for (led_index, &(col, row)) in MARQUEE_64X8.index_to_xy().iter().enumerate() {
        let cell = usize::from(row) * MATRIX_WIDTH + usize::from(col);
        assert_eq!(usize::from(map[cell]), led_index);
    }
}

#[test]
#[should_panic(expected = "duplicate (col,row) in mapping")]
fn new_panics_on_duplicate_cell() {
    let _ = LedLayout::<3, 3, 1>::new([(0, 0), (1, 0), (1, 0)]);
}

#[test]
#[should_panic(expected = "column out of bounds")]
fn new_panics_on_out_of_bounds_column() {
    let _ = LedLayout::<3, 3, 1>::new([(0, 0), (1, 0), (3, 0)]);
}

#[test]
#[should_panic(expected = "row out of bounds")]
fn new_panics_on_out_of_bounds_row() {
    let _ = LedLayout::<4, 2, 2>::new([(0, 0), (1, 0), (0, 1), (1, 2)]);
}

#[test]
#[should_panic(expected = "W*H must equal N")]
fn new_panics_on_mismatched_dimensions() {
    let _ = LedLayout::<5, 3, 2>::new([(0, 0), (1, 0), (2, 0), (0, 1), (1, 1)]);
}
