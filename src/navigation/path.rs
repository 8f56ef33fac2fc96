//! Breadth-first shortest-path search over the navigation graph.

use std::collections::VecDeque;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::navigation::graph::NavigationGraph;

/// An ordered sequence of page names from a home page to a target page.
///
/// An empty path means the target is unreachable; callers check for emptiness
/// instead of handling an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigationPath(Vec<String>);

impl NavigationPath {
    /// The empty (unreachable) path.
    pub fn empty() -> Self {
        NavigationPath(Vec::new())
    }

    /// Wrap an explicit sequence of page names.
    pub fn from_pages(pages: Vec<String>) -> Self {
        NavigationPath(pages)
    }

    /// Whether the target was unreachable.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of pages on the path.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The page names, home first.
    pub fn pages(&self) -> &[String] {
        &self.0
    }

    /// Number of page transitions (edges traversed); 0 when unreachable.
    pub fn transitions(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Number of discrete selection actions attributed to this path.
    ///
    /// A button on an unreachable page still counts the final press itself.
    pub fn hits(&self) -> usize {
        if self.0.is_empty() { 1 } else { self.0.len() }
    }

    /// Human-readable "Home -> Food -> Drinks" description.
    pub fn describe(&self) -> String {
        self.0.join(" -> ")
    }
}

/// Find the shortest navigation path from `home` to `target`.
///
/// BFS over the graph's insertion-ordered adjacency. Each queued branch owns
/// its path copy, so sibling branches never alias. Returns the empty path
/// when the target is unreachable.
pub fn shortest_path(graph: &NavigationGraph, home: &str, target: &str) -> NavigationPath {
    if home == target {
        return NavigationPath(vec![home.to_string()]);
    }

    let mut visited: AHashSet<String> = AHashSet::new();
    let mut queue: VecDeque<(String, Vec<String>)> = VecDeque::new();
    queue.push_back((home.to_string(), Vec::new()));

    while let Some((current, mut path)) = queue.pop_front() {
        if !visited.insert(current.clone()) {
            continue;
        }
        path.push(current.clone());

        if current == target {
            return NavigationPath(path);
        }

        for next in graph.neighbors(&current) {
            if !visited.contains(next) {
                // Copy-on-enqueue: each branch gets its own path.
                queue.push_back((next.clone(), path.clone()));
            }
        }
    }

    NavigationPath::empty()
}

/// Pages reachable from `home`, in BFS discovery order (home first).
pub fn reachable_pages(graph: &NavigationGraph, home: &str) -> Vec<String> {
    let mut visited: AHashSet<String> = AHashSet::new();
    let mut order = Vec::new();
    let mut queue: VecDeque<String> = VecDeque::new();
    queue.push_back(home.to_string());

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current.clone()) {
            continue;
        }
        order.push(current.clone());
        for next in graph.neighbors(&current) {
            if !visited.contains(next) {
                queue.push_back(next.clone());
            }
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> NavigationGraph {
        let mut graph = NavigationGraph::new();
        graph.add_jump("Home", "Food");
        graph.add_jump("Home", "People");
        graph.add_jump("Food", "Drinks");
        graph.add_jump("People", "Drinks");
        graph
    }

    #[test]
    fn test_identity_short_circuit() {
        let graph = sample_graph();
        let path = shortest_path(&graph, "Home", "Home");
        assert_eq!(path.pages(), ["Home"]);
        assert_eq!(path.transitions(), 0);
        assert_eq!(path.hits(), 1);

        // Holds even for pages the graph has never seen.
        let path = shortest_path(&graph, "Ghost", "Ghost");
        assert_eq!(path.pages(), ["Ghost"]);
    }

    #[test]
    fn test_shortest_path_two_hops() {
        let graph = sample_graph();
        let path = shortest_path(&graph, "Home", "Drinks");
        assert_eq!(path.len(), 3);
        // Tie between Food and People resolves by edge insertion order.
        assert_eq!(path.pages(), ["Home", "Food", "Drinks"]);
        assert_eq!(path.hits(), 3);
    }

    #[test]
    fn test_insertion_order_changes_choice_not_length() {
        let mut graph = NavigationGraph::new();
        graph.add_jump("Home", "People");
        graph.add_jump("Home", "Food");
        graph.add_jump("Food", "Drinks");
        graph.add_jump("People", "Drinks");
        let path = shortest_path(&graph, "Home", "Drinks");
        assert_eq!(path.pages(), ["Home", "People", "Drinks"]);
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn test_unreachable_returns_empty() {
        let graph = sample_graph();
        let path = shortest_path(&graph, "Home", "Nowhere");
        assert!(path.is_empty());
        assert_eq!(path.transitions(), 0);
        assert_eq!(path.hits(), 1);
    }

    #[test]
    fn test_direction_matters() {
        let graph = sample_graph();
        // Edges are directed; there is no way back from Drinks.
        assert!(shortest_path(&graph, "Drinks", "Home").is_empty());
    }

    #[test]
    fn test_reachable_pages_bfs_order() {
        let graph = sample_graph();
        assert_eq!(
            reachable_pages(&graph, "Home"),
            ["Home", "Food", "People", "Drinks"]
        );
        assert_eq!(reachable_pages(&graph, "Drinks"), ["Drinks"]);
    }

    #[test]
    fn test_describe() {
        let graph = sample_graph();
        let path = shortest_path(&graph, "Home", "Drinks");
        assert_eq!(path.describe(), "Home -> Food -> Drinks");
        assert_eq!(NavigationPath::empty().describe(), "");
    }
}
