//! Swap validation tests - rejection paths and the tentative-swap contract

use triad::core::{find_all_matches, Board};
use triad::engine::{try_swap, CascadeEngine, CountingFeedback, SwapOutcome};
use triad::types::{Coord, SwapError, TileKind};

fn board_from_rows(rows: &[&[u8]]) -> Board {
    let height = rows.len() as u8;
    let width = rows[0].len() as u8;
    let mut board = Board::new(width, height);
    for (y, row) in rows.iter().enumerate() {
        for (x, &k) in row.iter().enumerate() {
            let id = board.get(x as i16, y as i16).unwrap();
            board.set_kind(id, Some(TileKind(k)));
        }
    }
    board
}

#[test]
fn test_out_of_bounds_swap_is_rejected_untouched() {
    let mut board = board_from_rows(&[
        &[0, 1, 0],
        &[1, 0, 1],
    ]);
    let mut cascade = CascadeEngine::new();
    let mut feedback = CountingFeedback::new();
    let before = board.snapshot();

    let err = try_swap(
        &mut board,
        &mut cascade,
        Coord::new(2, 1),
        Coord::new(3, 1),
        &mut feedback,
    )
    .unwrap_err();
    assert_eq!(err, SwapError::OutOfBounds { x: 3, y: 1 });
    assert_eq!(board.snapshot(), before);
    assert_eq!(feedback.accepted + feedback.rejected, 0);
}

#[test]
fn test_non_adjacent_swap_leaves_grid_identical() {
    let mut board = board_from_rows(&[
        &[0, 1, 0, 1],
        &[1, 0, 1, 0],
        &[0, 1, 0, 1],
    ]);
    let mut cascade = CascadeEngine::new();
    let mut feedback = CountingFeedback::new();
    let before = board.snapshot();

    for (a, b) in [
        (Coord::new(0, 0), Coord::new(2, 0)), // same row, gap
        (Coord::new(0, 0), Coord::new(1, 1)), // diagonal
        (Coord::new(1, 0), Coord::new(1, 2)), // same column, gap
        (Coord::new(2, 2), Coord::new(2, 2)), // itself
    ] {
        let err = try_swap(&mut board, &mut cascade, a, b, &mut feedback).unwrap_err();
        assert_eq!(err, SwapError::NotAdjacent);
        assert_eq!(board.snapshot(), before);
    }
}

#[test]
fn test_no_match_swap_reverts_to_pre_swap_layout() {
    let mut board = board_from_rows(&[
        &[0, 0, 1],
        &[2, 2, 0],
        &[1, 1, 2],
    ]);
    assert!(find_all_matches(&board).is_empty());

    let mut cascade = CascadeEngine::new();
    let mut feedback = CountingFeedback::new();
    let before = board.snapshot();

    let outcome = try_swap(
        &mut board,
        &mut cascade,
        Coord::new(0, 0),
        Coord::new(0, 1),
        &mut feedback,
    )
    .unwrap();
    assert_eq!(outcome, SwapOutcome::RejectedNoMatch);
    assert_eq!(board.snapshot(), before);
    assert_eq!(feedback.rejected, 1);
    assert!(!cascade.is_locked());
}

#[test]
fn test_same_kind_neighbors_reject_as_no_match() {
    // One row, [A, A, B, B, A]: swapping the two Bs changes nothing, so the
    // swap is rejected through the ordinary no-match path.
    let mut board = board_from_rows(&[&[0, 0, 1, 1, 0]]);
    assert!(find_all_matches(&board).is_empty());

    let mut cascade = CascadeEngine::new();
    let mut feedback = CountingFeedback::new();
    let before = board.snapshot();

    let outcome = try_swap(
        &mut board,
        &mut cascade,
        Coord::new(2, 0),
        Coord::new(3, 0),
        &mut feedback,
    )
    .unwrap();
    assert_eq!(outcome, SwapOutcome::RejectedNoMatch);
    assert_eq!(board.snapshot(), before);
}

#[test]
fn test_accepted_swap_locks_until_resolution() {
    let mut board = board_from_rows(&[
        &[0, 0, 1],
        &[2, 2, 0],
        &[1, 1, 2],
    ]);
    let mut cascade = CascadeEngine::new();
    let mut feedback = CountingFeedback::new();

    let outcome = try_swap(
        &mut board,
        &mut cascade,
        Coord::new(2, 0),
        Coord::new(2, 1),
        &mut feedback,
    )
    .unwrap();
    assert_eq!(outcome, SwapOutcome::Accepted);
    assert_eq!(feedback.accepted, 1);
    assert!(cascade.is_locked());

    // The board keeps the swapped layout; the matched run is on it.
    assert!(!find_all_matches(&board).is_empty());

    // Any further request bounces without touching the grid.
    let held = board.snapshot();
    let err = try_swap(
        &mut board,
        &mut cascade,
        Coord::new(0, 2),
        Coord::new(1, 2),
        &mut feedback,
    )
    .unwrap_err();
    assert_eq!(err, SwapError::Locked);
    assert_eq!(board.snapshot(), held);
}
