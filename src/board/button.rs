//! Button records and grid positions.

use serde::{Deserialize, Serialize};

/// A 1-indexed (row, col) position within a page grid.
///
/// The board's native coordinate convention is 1-indexed; a zero row or
/// column is representable but treated as invalid by the scoring functions,
/// which degrade to zero-effort defaults instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: u32,
    pub col: u32,
}

impl GridPosition {
    /// Create a new grid position.
    pub fn new(row: u32, col: u32) -> Self {
        GridPosition { row, col }
    }

    /// Check whether both coordinates satisfy the 1-indexed convention.
    pub fn is_valid(&self) -> bool {
        self.row >= 1 && self.col >= 1
    }

    /// Linear reading-order index: left-to-right, top-to-bottom, starting at 1.
    pub fn linear_index(&self, cols: u32) -> u32 {
        (self.row.saturating_sub(1)) * cols + self.col
    }
}

fn default_span() -> u32 {
    1
}

fn default_scan_block() -> u32 {
    1
}

/// A single button (cell) on a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    /// Display text; empty for image-only or command-only cells.
    #[serde(default)]
    pub text: String,

    /// 1-indexed grid position.
    pub position: GridPosition,

    /// Number of grid rows this button spans.
    #[serde(default = "default_span")]
    pub row_span: u32,

    /// Number of grid columns this button spans.
    #[serde(default = "default_span")]
    pub col_span: u32,

    /// Scan-block identifier for block scanning.
    #[serde(default = "default_scan_block")]
    pub scan_block: u32,

    /// Target page name when this button triggers a jump.
    #[serde(default)]
    pub jump_to: Option<String>,
}

impl Button {
    /// Create a new button with default spans and scan block.
    pub fn new<S: Into<String>>(text: S, row: u32, col: u32) -> Self {
        Button {
            text: text.into(),
            position: GridPosition::new(row, col),
            row_span: 1,
            col_span: 1,
            scan_block: 1,
            jump_to: None,
        }
    }

    /// Set the jump target page.
    pub fn with_jump<S: Into<String>>(mut self, target: S) -> Self {
        self.jump_to = Some(target.into());
        self
    }

    /// Set the scan-block identifier.
    pub fn with_scan_block(mut self, block: u32) -> Self {
        self.scan_block = block;
        self
    }

    /// Whether this button carries display text worth scoring.
    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}
