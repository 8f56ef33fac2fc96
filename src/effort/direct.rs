//! Direct-selection effort scoring.

use serde::{Deserialize, Serialize};

use crate::board::GridPosition;
use crate::effort::config::{EffortWeights, ScreenDimensions};
use crate::effort::round2;
use crate::error::{BoardwalkError, Result};
use crate::navigation::{NavigationGraph, shortest_path};

/// Result of scoring a single button under direct selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectEffort {
    /// Composite effort score, rounded to two decimal places.
    pub score: f64,
    /// Number of discrete selection actions (page transitions + final press).
    pub hits: usize,
}

impl DirectEffort {
    /// The zero-effort default used when a button's position is malformed.
    pub fn degraded() -> Self {
        DirectEffort { score: 0.0, hits: 0 }
    }
}

/// Approximate center coordinates of a button on screen.
///
/// `x = (col - 0.5) * width / cols`, `y = (row - 0.5) * height / rows`,
/// rounded to two decimal places. Fails with `InvalidGeometry` on a zero-row
/// or zero-column grid rather than dividing by zero.
pub fn button_center(
    position: GridPosition,
    rows: u32,
    cols: u32,
    screen: ScreenDimensions,
) -> Result<(f64, f64)> {
    if rows == 0 || cols == 0 {
        return Err(BoardwalkError::invalid_geometry(format!(
            "cannot place button on a {rows}x{cols} grid"
        )));
    }

    let cell_width = screen.width / cols as f64;
    let cell_height = screen.height / rows as f64;
    let x = (position.col as f64 - 0.5) * cell_width;
    let y = (position.row as f64 - 0.5) * cell_height;

    Ok((round2(x), round2(y)))
}

/// Score a button under the direct-selection technique.
///
/// Terms: button size (grid density), field size (visible choices), linear
/// scan order, normalized travel distance from the bottom-right corner, and
/// one unit per page transition on the shortest navigation path from `home`
/// to `button_page`. Malformed positions degrade to [`DirectEffort::degraded`]
/// so one bad cell never aborts a whole-board pass.
#[allow(clippy::too_many_arguments)]
pub fn direct_effort(
    rows: u32,
    cols: u32,
    total_visible_buttons: usize,
    position: GridPosition,
    screen: ScreenDimensions,
    weights: EffortWeights,
    home: &str,
    button_page: &str,
    graph: &NavigationGraph,
) -> DirectEffort {
    if !position.is_valid() {
        return DirectEffort::degraded();
    }
    let Ok((end_x, end_y)) = button_center(position, rows, cols, screen) else {
        return DirectEffort::degraded();
    };

    let button_size = weights.button_size * rows as f64 * cols as f64;
    let field_size = weights.field_size * total_visible_buttons as f64;
    let scan_order = weights.scan_order * position.linear_index(cols) as f64;

    // Normalized Euclidean distance from the bottom-right starting point,
    // over the screen diagonal, in [0, 1].
    let (start_x, start_y) = (screen.width, screen.height);
    let dx = (start_x - end_x) / screen.width;
    let dy = (start_y - end_y) / screen.height;
    let travel = (dx * dx + dy * dy).sqrt() / 2.0_f64.sqrt();

    let path = shortest_path(graph, home, button_page);
    let navigation = weights.navigation_step * path.transitions() as f64;

    DirectEffort {
        score: round2(button_size + field_size + scan_order + travel + navigation),
        hits: path.hits(),
    }
}
