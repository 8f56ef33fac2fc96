//! Batch effort scoring over a board.

use log::warn;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Page};
use crate::effort::{
    EffortWeights, ScanTiming, ScreenDimensions, block_scan_scores, direct_effort, scan_effort,
};
use crate::navigation::{NavigationGraph, reachable_pages, shortest_path};
use crate::table::{EffortRecord, EffortTable};

/// Configuration bundle for a board scoring pass.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScoreConfig {
    #[serde(default)]
    pub weights: EffortWeights,
    #[serde(default)]
    pub screen: ScreenDimensions,
    #[serde(default)]
    pub timing: ScanTiming,
}

/// Score every text-bearing button on every page reachable from the board's
/// home page.
///
/// Pages are scored independently against the read-only graph, so the pass
/// fans out per page; record order follows BFS page discovery order, then
/// button order within a page.
pub fn score_board(
    board: &Board,
    graph: &NavigationGraph,
    config: &ScoreConfig,
) -> Vec<EffortRecord> {
    let pages: Vec<&Page> = reachable_pages(graph, &board.home)
        .iter()
        .filter_map(|name| {
            let page = board.page(name);
            if page.is_none() {
                warn!("reachable page '{name}' has no record in the board, skipping");
            }
            page
        })
        .collect();

    let per_page: Vec<Vec<EffortRecord>> = pages
        .par_iter()
        .map(|page| score_page(page, &board.home, graph, config))
        .collect();

    per_page.into_iter().flatten().collect()
}

/// Score a single page's text-bearing buttons.
pub fn score_page(
    page: &Page,
    home: &str,
    graph: &NavigationGraph,
    config: &ScoreConfig,
) -> Vec<EffortRecord> {
    let path = shortest_path(graph, home, &page.name);
    let path_description = path.describe();
    let block_scores = block_scan_scores(&page.buttons, config.timing);

    let mut records = Vec::new();
    for (button, block_score) in page.buttons.iter().zip(&block_scores) {
        if !button.has_text() {
            continue;
        }

        let direct = direct_effort(
            page.rows,
            page.cols,
            page.visible_buttons(),
            button.position,
            config.screen,
            config.weights,
            home,
            &page.name,
            graph,
        );
        let scanning = scan_effort(button.position, config.timing);

        let mut record = EffortRecord::new(
            button.text.clone(),
            path_description.clone(),
            direct.score,
            scanning,
            direct.hits,
        );
        record.grid_name = Some(page.name.clone());
        record.block_scanning_effort_score = Some((*block_score).into());
        records.push(record);
    }
    records
}

/// Deduplicate records by word/phrase key: first occurrence wins, duplicate
/// counts are retained on the surviving record.
pub fn dedup_records(records: Vec<EffortRecord>) -> Vec<EffortRecord> {
    EffortTable::from_records(records).records().to_vec()
}
