//! Scoring configuration.
//!
//! The default values are empirical constants inherited from earlier
//! accessibility studies; they are exposed as configuration so callers can
//! tune them, but the defaults must not be re-derived.

use serde::{Deserialize, Serialize};

/// Weights for the direct-selection effort terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffortWeights {
    /// Per-cell weight: larger grids mean smaller, harder-to-hit targets.
    pub button_size: f64,
    /// Per visible button: more choices mean more visual search.
    pub field_size: f64,
    /// Per linear reading-order position: later positions cost more.
    pub scan_order: f64,
    /// Per page transition on the navigation path.
    pub navigation_step: f64,
}

impl Default for EffortWeights {
    fn default() -> Self {
        EffortWeights {
            button_size: 0.003,
            field_size: 0.007,
            scan_order: 0.001,
            navigation_step: 1.0,
        }
    }
}

/// Screen dimensions used to map grid positions to pixel coordinates.
///
/// The travel-distance term measures from the bottom-right corner
/// (width, height), the default resting position of a pointing user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenDimensions {
    pub width: f64,
    pub height: f64,
}

impl Default for ScreenDimensions {
    fn default() -> Self {
        ScreenDimensions {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

/// Timing parameters for row/column and block scanning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanTiming {
    /// Time cost for each scanning step (one row or one column).
    pub scan_time_per_unit: f64,
    /// Fixed cost of confirming a selection.
    pub selection_time: f64,
}

impl Default for ScanTiming {
    fn default() -> Self {
        ScanTiming {
            scan_time_per_unit: 1.0,
            selection_time: 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants_preserved() {
        let weights = EffortWeights::default();
        assert_eq!(weights.button_size, 0.003);
        assert_eq!(weights.field_size, 0.007);
        assert_eq!(weights.scan_order, 0.001);
        assert_eq!(weights.navigation_step, 1.0);

        let screen = ScreenDimensions::default();
        assert_eq!(screen.width, 1920.0);
        assert_eq!(screen.height, 1080.0);

        let timing = ScanTiming::default();
        assert_eq!(timing.scan_time_per_unit, 1.0);
        assert_eq!(timing.selection_time, 0.5);
    }
}
