// ═══════════════════════════════════════════════════════════════════════
// Board scoring — pure heuristics ranking nodes, road spans, and thief
// targets. Stateless functions of the board data; callers re-run them
// whenever the board may have changed.
// ═══════════════════════════════════════════════════════════════════════

use catan_engine::board::{BoardSnapshot, BoardView, RoadSpan, Tile};
use catan_engine::types::{NodeId, PlayerId, Terrain, TileId};
use std::collections::HashSet;

/// Flat contribution of a desert tile to a node score.
pub const DESERT_PENALTY: i32 = -2;

/// Per distinct non-desert resource kind a node touches.
pub const DIVERSITY_BONUS: i32 = 2;

/// Flat score for a road that reaches a harbor node. Deliberately larger
/// than any yield sum a single node can reach, so harbor access wins.
pub const HARBOR_BONUS: i32 = 12;

/// Penalty per adjacent opponent settlement in road expansion scoring.
pub const OPPONENT_PRESSURE: i32 = 2;

/// Likelihood weight of a dice number on 2d6: 6/8 are the workhorses,
/// 2/12 nearly never pay out. 7 and the desert's missing number map to 0.
pub fn dice_weight(number: u8) -> i32 {
    match number {
        6 | 8 => 5,
        5 | 9 => 4,
        4 | 10 => 3,
        3 | 11 => 2,
        2 | 12 => 1,
        _ => 0,
    }
}

fn tile_yield(tile: &Tile) -> i32 {
    if tile.terrain == Terrain::Desert {
        DESERT_PENALTY
    } else {
        tile.number.map_or(0, dice_weight)
    }
}

fn tile_by_id(tiles: &[Tile], id: TileId) -> Option<&Tile> {
    tiles.iter().find(|t| t.id == id)
}

/// Sum of dice weights over the tiles a node touches; desert tiles
/// contribute the fixed penalty instead.
pub fn node_yield(board: &dyn BoardView, node: NodeId) -> i32 {
    let Some(info) = board.node(node) else { return 0 };
    info.tiles
        .iter()
        .filter_map(|&tid| tile_by_id(board.tiles(), tid))
        .map(tile_yield)
        .sum()
}

/// +2 per distinct non-desert resource kind the node touches.
pub fn diversity_bonus(board: &dyn BoardView, node: NodeId) -> i32 {
    let Some(info) = board.node(node) else { return 0 };
    let kinds: HashSet<_> = info
        .tiles
        .iter()
        .filter_map(|&tid| tile_by_id(board.tiles(), tid))
        .filter_map(|t| t.terrain.resource())
        .collect();
    kinds.len() as i32 * DIVERSITY_BONUS
}

/// How an opening site is valued; selected per agent through the
/// `beginning_priority` gene category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementHeuristic {
    /// Yield plus diversity bonus: hedges against single-resource drought.
    Balanced,
    /// Raw yield only: chases the hot numbers.
    YieldOnly,
}

impl PlacementHeuristic {
    pub fn from_gene_index(index: usize) -> PlacementHeuristic {
        match index {
            0 => PlacementHeuristic::Balanced,
            _ => PlacementHeuristic::YieldOnly,
        }
    }
}

/// Fitness of a candidate opening node under the chosen heuristic.
pub fn placement_fitness(
    board: &dyn BoardView,
    node: NodeId,
    heuristic: PlacementHeuristic,
) -> i32 {
    match heuristic {
        PlacementHeuristic::Balanced => node_yield(board, node) + diversity_bonus(board, node),
        PlacementHeuristic::YieldOnly => node_yield(board, node),
    }
}

/// Expansion value of a road span: unclaimed nodes reachable one step
/// past an unclaimed frontier node, minus pressure from opponents
/// already sitting next to it. Zero when the far node is taken.
pub fn road_expansion(board: &dyn BoardView, span: RoadSpan, viewer: PlayerId) -> i32 {
    let Some(frontier) = board.node(span.to) else { return 0 };
    if frontier.owner.is_some() {
        return 0;
    }
    let open: i32 = frontier
        .adjacent
        .iter()
        .filter_map(|&adj| board.node(adj))
        .filter(|n| n.owner.is_none())
        .count() as i32;
    let pressure = board.opponent_settlements(span.to, viewer) as i32;
    open - OPPONENT_PRESSURE * pressure
}

/// Harbor value of a road span: the flat bonus when the far node is a
/// coastal node with a harbor, else zero.
pub fn harbor_reach(board: &dyn BoardView, span: RoadSpan) -> i32 {
    let has_harbor = board
        .node(span.to)
        .is_some_and(|n| n.harbor != catan_engine::types::Harbor::None);
    if has_harbor && board.is_coastal(span.to) {
        HARBOR_BONUS
    } else {
        0
    }
}

/// How thief targets are valued; selected per agent through the
/// `thief_priority` gene category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThiefHeuristic {
    /// Hit the tile with the most distinct opponents around it.
    OpponentCount,
    /// Hit the tile whose dice number pays out the most.
    TileYield,
}

impl ThiefHeuristic {
    pub fn from_gene_index(index: usize) -> ThiefHeuristic {
        match index {
            0 => ThiefHeuristic::OpponentCount,
            _ => ThiefHeuristic::TileYield,
        }
    }
}

/// Distinct opponents with a settlement on a tile's corners, in node
/// enumeration order. Empty when the viewer touches the tile themselves.
pub fn tile_opponents(snapshot: &BoardSnapshot, tile: TileId, viewer: PlayerId) -> Vec<PlayerId> {
    let mut opponents = Vec::new();
    for node_id in snapshot.contacting_nodes(tile) {
        let Some(info) = snapshot.node(node_id) else { continue };
        match info.owner {
            Some(p) if p == viewer => return Vec::new(),
            Some(p) if !opponents.contains(&p) => opponents.push(p),
            _ => {}
        }
    }
    opponents
}

/// Score a thief destination. Tiles touching the viewer's own
/// settlements and tiles without any opponent are worthless (None).
pub fn thief_target_score(
    snapshot: &BoardSnapshot,
    tile: &Tile,
    viewer: PlayerId,
    heuristic: ThiefHeuristic,
) -> Option<i32> {
    if tile.has_thief {
        return None;
    }
    let opponents = tile_opponents(snapshot, tile.id, viewer);
    if opponents.is_empty() {
        return None;
    }
    let score = match heuristic {
        ThiefHeuristic::OpponentCount => opponents.len() as i32,
        ThiefHeuristic::TileYield => tile.number.map_or(0, dice_weight),
    };
    Some(score)
}

/// Stable argmax: first candidate with the maximum score wins, so a
/// fixed seed reproduces the same pick regardless of how many ties the
/// scoring produces.
pub fn argmax_by_score<T, I, F>(candidates: I, mut score: F) -> Option<(T, i32)>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> i32,
{
    let mut best: Option<(T, i32)> = None;
    for candidate in candidates {
        let s = score(&candidate);
        match &best {
            Some((_, current)) if s <= *current => {}
            _ => best = Some((candidate, s)),
        }
    }
    best
}
