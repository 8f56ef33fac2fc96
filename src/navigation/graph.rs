//! Directed navigation graph over page names.

use ahash::AHashMap;
use log::warn;

use crate::board::Board;

/// A directed graph of page-name nodes with jump edges.
///
/// Adjacency lists preserve edge insertion order and collapse duplicate edges
/// (raw jump data is a multigraph; path search treats adjacency as a set).
/// Targets that have not been seen as sources yet still become nodes, since a
/// collaborator discovers pages lazily while walking the board.
#[derive(Debug, Clone, Default)]
pub struct NavigationGraph {
    adjacency: AHashMap<String, Vec<String>>,
    order: Vec<String>,
    edge_count: usize,
}

impl NavigationGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        NavigationGraph::default()
    }

    /// Build a graph from a board's pages and jump edges.
    ///
    /// Jump edges that reference a page absent from the board are dropped and
    /// logged; partial graphs are expected and valid.
    pub fn from_board(board: &Board) -> Self {
        let mut graph = NavigationGraph::new();
        for page in &board.pages {
            graph.ensure_node(&page.name);
        }
        for (from, to) in board.jump_edges() {
            if board.page(to).is_none() {
                warn!("dropping jump from '{from}' to unknown page '{to}'");
                continue;
            }
            graph.add_jump(from, to);
        }
        graph
    }

    /// Build a graph from explicit page names and (source, target) jump pairs.
    pub fn from_edges<'a, P, E>(pages: P, edges: E) -> Self
    where
        P: IntoIterator<Item = &'a str>,
        E: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut graph = NavigationGraph::new();
        for page in pages {
            graph.ensure_node(page);
        }
        for (from, to) in edges {
            graph.add_jump(from, to);
        }
        graph
    }

    /// Ensure a page exists as a node, without adding any edges.
    pub fn ensure_node(&mut self, page: &str) {
        if !self.adjacency.contains_key(page) {
            self.adjacency.insert(page.to_string(), Vec::new());
            self.order.push(page.to_string());
        }
    }

    /// Add a jump edge. Unseen source and target names become nodes.
    ///
    /// Duplicate edges are collapsed; self-edges are legal and represent an
    /// "already here" transition.
    pub fn add_jump(&mut self, from: &str, to: &str) {
        self.ensure_node(from);
        self.ensure_node(to);
        if let Some(targets) = self.adjacency.get_mut(from)
            && !targets.iter().any(|t| t == to)
        {
            targets.push(to.to_string());
            self.edge_count += 1;
        }
    }

    /// Outgoing neighbors of a page, in edge insertion order.
    pub fn neighbors(&self, page: &str) -> &[String] {
        self.adjacency.get(page).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the page is a node of this graph.
    pub fn contains(&self, page: &str) -> bool {
        self.adjacency.contains_key(page)
    }

    /// Number of page nodes.
    pub fn page_count(&self) -> usize {
        self.order.len()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Page names in node insertion order.
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}
