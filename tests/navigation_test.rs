//! Integration tests for navigation graph construction and path search.

use boardwalk::board::{Board, Button, Page};
use boardwalk::navigation::{NavigationGraph, reachable_pages, shortest_path};

fn linked_board() -> Board {
    let mut board = Board::new("Home");

    let mut home = Page::new("Home", 3, 3).unwrap();
    home.push_button(Button::new("food", 1, 1).with_jump("Food"));
    home.push_button(Button::new("people", 1, 2).with_jump("People"));
    board.push_page(home);

    let mut food = Page::new("Food", 3, 3).unwrap();
    food.push_button(Button::new("drinks", 1, 1).with_jump("Drinks"));
    food.push_button(Button::new("home", 3, 3).with_jump("Home"));
    board.push_page(food);

    let mut people = Page::new("People", 2, 4).unwrap();
    people.push_button(Button::new("drinks", 1, 1).with_jump("Drinks"));
    board.push_page(people);

    board.push_page(Page::new("Drinks", 4, 4).unwrap());
    board
}

#[test]
fn identity_path_for_every_page() {
    let board = linked_board();
    let graph = NavigationGraph::from_board(&board);

    for page in graph.pages() {
        let path = shortest_path(&graph, page, page);
        assert_eq!(path.pages(), [page]);
        assert_eq!(path.transitions(), 0);
    }
}

#[test]
fn path_lengths_stable_under_edge_reordering() {
    let mut forward = NavigationGraph::new();
    forward.add_jump("Home", "Food");
    forward.add_jump("Home", "People");
    forward.add_jump("Food", "Drinks");
    forward.add_jump("People", "Drinks");

    let mut reversed = NavigationGraph::new();
    reversed.add_jump("Home", "People");
    reversed.add_jump("Home", "Food");
    reversed.add_jump("People", "Drinks");
    reversed.add_jump("Food", "Drinks");

    let first = shortest_path(&forward, "Home", "Drinks");
    let second = shortest_path(&reversed, "Home", "Drinks");

    // The chosen intermediate page may differ, but never the length.
    assert_eq!(first.len(), second.len());
    assert_eq!(first.pages()[1], "Food");
    assert_eq!(second.pages()[1], "People");
}

#[test]
fn unreachable_target_is_empty_with_one_hit() {
    let board = linked_board();
    let graph = NavigationGraph::from_board(&board);

    // Drinks has no outgoing jumps.
    let path = shortest_path(&graph, "Drinks", "Food");
    assert!(path.is_empty());
    assert_eq!(path.hits(), 1);
}

#[test]
fn round_trip_through_board_jump_edges() {
    let board = linked_board();
    let graph = NavigationGraph::from_board(&board);

    assert_eq!(graph.page_count(), 4);
    assert_eq!(graph.edge_count(), 5);

    let path = shortest_path(&graph, "Home", "Drinks");
    assert_eq!(path.pages(), ["Home", "Food", "Drinks"]);
    assert_eq!(path.describe(), "Home -> Food -> Drinks");
}

#[test]
fn reachable_pages_excludes_orphans() {
    let mut board = linked_board();
    let mut orphan = Page::new("Secret", 2, 2).unwrap();
    orphan.push_button(Button::new("hidden", 1, 1));
    board.push_page(orphan);

    let graph = NavigationGraph::from_board(&board);
    let reachable = reachable_pages(&graph, "Home");

    assert!(reachable.contains(&"Drinks".to_string()));
    assert!(!reachable.contains(&"Secret".to_string()));
    assert_eq!(reachable[0], "Home");
}

#[test]
fn lazy_discovery_tolerates_unseen_targets() {
    // Discovery order is arbitrary: a target may be referenced before its
    // own page has been walked.
    let mut graph = NavigationGraph::new();
    graph.add_jump("Home", "Later");
    assert!(graph.contains("Later"));

    graph.add_jump("Later", "Home");
    let path = shortest_path(&graph, "Home", "Later");
    assert_eq!(path.len(), 2);
}
