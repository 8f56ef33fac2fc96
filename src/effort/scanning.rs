//! Row/column and block scanning effort scoring.

use crate::board::{Button, GridPosition};
use crate::effort::config::ScanTiming;

/// Score a button under row/column scanning.
///
/// The device highlights rows top-down, then columns left-to-right within the
/// selected row; each step costs `scan_time_per_unit`, plus a fixed
/// `selection_time` to confirm. A malformed position defaults to (1, 1), the
/// bare selection cost.
pub fn scan_effort(position: GridPosition, timing: ScanTiming) -> f64 {
    let (row, col) = if position.is_valid() {
        (position.row, position.col)
    } else {
        (1, 1)
    };

    let row_effort = (row - 1) as f64 * timing.scan_time_per_unit;
    let col_effort = (col - 1) as f64 * timing.scan_time_per_unit;
    row_effort + col_effort + timing.selection_time
}

/// Score every button of a page under block scanning.
///
/// Buttons are partitioned by scan-block identifier and ordered by block id
/// (stable, so original order is kept within a block). The first button of
/// each block is the block's scan anchor; a button costs the row and column
/// offsets from its anchor plus the selection time. Buttons with malformed
/// coordinates contribute 0 rather than failing the batch.
///
/// Scores are returned in the buttons' original order.
pub fn block_scan_scores(buttons: &[Button], timing: ScanTiming) -> Vec<f64> {
    let mut order: Vec<usize> = (0..buttons.len()).collect();
    order.sort_by_key(|&i| buttons[i].scan_block);

    let mut scores = vec![0.0; buttons.len()];
    let mut current_block: Option<u32> = None;
    let mut anchor = GridPosition::new(1, 1);

    for &i in &order {
        let button = &buttons[i];
        if current_block != Some(button.scan_block) {
            current_block = Some(button.scan_block);
            anchor = button.position;
        }

        if !button.position.is_valid() || !anchor.is_valid() {
            scores[i] = 0.0;
            continue;
        }

        let row_effort =
            (button.position.row as f64 - anchor.row as f64) * timing.scan_time_per_unit;
        let col_effort =
            (button.position.col as f64 - anchor.col as f64) * timing.scan_time_per_unit;
        scores[i] = row_effort + col_effort + timing.selection_time;
    }

    scores
}
