//! Page and board records.

use serde::{Deserialize, Serialize};

use crate::board::button::Button;
use crate::error::{BoardwalkError, Result};

/// One screen of buttons with fixed row/column geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page name, unique within a board.
    pub name: String,

    /// Number of grid rows, at least 1.
    pub rows: u32,

    /// Number of grid columns, at least 1.
    pub cols: u32,

    /// Buttons placed on this page.
    #[serde(default)]
    pub buttons: Vec<Button>,
}

impl Page {
    /// Create a new empty page, failing fast on impossible geometry.
    pub fn new<S: Into<String>>(name: S, rows: u32, cols: u32) -> Result<Self> {
        let name = name.into();
        if rows == 0 || cols == 0 {
            return Err(BoardwalkError::invalid_geometry(format!(
                "page '{name}' has {rows}x{cols} grid"
            )));
        }
        Ok(Page {
            name,
            rows,
            cols,
            buttons: Vec::new(),
        })
    }

    /// Add a button to this page.
    pub fn push_button(&mut self, button: Button) -> &mut Self {
        self.buttons.push(button);
        self
    }

    /// Total number of visible buttons on this page.
    pub fn visible_buttons(&self) -> usize {
        self.buttons.len()
    }

    /// Validate the geometry invariants (used after deserialization).
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(BoardwalkError::invalid_geometry(format!(
                "page '{}' has {}x{} grid",
                self.name, self.rows, self.cols
            )));
        }
        Ok(())
    }
}

/// A complete board: named pages plus the designated home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Name of the home page where every navigation path starts.
    pub home: String,

    /// Pages in discovery order.
    pub pages: Vec<Page>,
}

impl Board {
    /// Create a new board with the given home page name.
    pub fn new<S: Into<String>>(home: S) -> Self {
        Board {
            home: home.into(),
            pages: Vec::new(),
        }
    }

    /// Add a page to the board.
    pub fn push_page(&mut self, page: Page) -> &mut Self {
        self.pages.push(page);
        self
    }

    /// Look up a page by name.
    pub fn page(&self, name: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.name == name)
    }

    /// Harvest every (source page, jump target) pair from the board's buttons.
    pub fn jump_edges(&self) -> Vec<(&str, &str)> {
        let mut edges = Vec::new();
        for page in &self.pages {
            for button in &page.buttons {
                if let Some(target) = &button.jump_to {
                    edges.push((page.name.as_str(), target.as_str()));
                }
            }
        }
        edges
    }

    /// Validate every page's geometry (used after deserialization).
    pub fn validate(&self) -> Result<()> {
        if self.home.trim().is_empty() {
            return Err(BoardwalkError::board("board has no home page name"));
        }
        for page in &self.pages {
            page.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_rejects_zero_geometry() {
        assert!(Page::new("Home", 0, 5).is_err());
        assert!(Page::new("Home", 5, 0).is_err());
        assert!(Page::new("Home", 1, 1).is_ok());
    }

    #[test]
    fn test_jump_edge_harvest() {
        let mut board = Board::new("Home");
        let mut home = Page::new("Home", 3, 3).unwrap();
        home.push_button(Button::new("food", 1, 1).with_jump("Food"));
        home.push_button(Button::new("yes", 1, 2));
        let mut food = Page::new("Food", 2, 2).unwrap();
        food.push_button(Button::new("back", 1, 1).with_jump("Home"));
        board.push_page(home);
        board.push_page(food);

        let edges = board.jump_edges();
        assert_eq!(edges, vec![("Home", "Food"), ("Food", "Home")]);
    }

    #[test]
    fn test_board_validate_catches_bad_page() {
        let mut board = Board::new("Home");
        // Bypass the constructor the way a deserialized record would.
        board.push_page(Page {
            name: "Broken".to_string(),
            rows: 0,
            cols: 4,
            buttons: Vec::new(),
        });
        assert!(board.validate().is_err());
    }

    #[test]
    fn test_board_page_lookup() {
        let mut board = Board::new("Home");
        board.push_page(Page::new("Home", 2, 2).unwrap());
        assert!(board.page("Home").is_some());
        assert!(board.page("Missing").is_none());
    }
}
