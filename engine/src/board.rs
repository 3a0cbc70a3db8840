// ═══════════════════════════════════════════════════════════════════════
// Board contract — the read-only view the surrounding engine hands to an
// agent for one decision, plus an owned snapshot for the hooks that are
// called without a board argument.
//
// The agent never mutates the board and never checks placement rules
// itself: legality comes pre-computed through the `legal_*` queries.
// ═══════════════════════════════════════════════════════════════════════

use crate::types::{Harbor, NodeId, PlayerId, Terrain, TileId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One terrain hex. Desert tiles carry no dice number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub terrain: Terrain,
    pub number: Option<u8>,
    pub has_thief: bool,
}

/// Everything an agent may know about one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfo {
    pub id: NodeId,
    pub owner: Option<PlayerId>,
    pub adjacent: Vec<NodeId>,
    pub tiles: Vec<TileId>,
    pub harbor: Harbor,
}

/// A legal road placement between two adjacent nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoadSpan {
    pub from: NodeId,
    pub to: NodeId,
}

/// Read-only board queries, implemented by the surrounding engine.
/// Enumeration order of every returned collection is the engine's own and
/// must be stable within one call: agents tie-break by first-encountered.
pub trait BoardView {
    /// Nodes where an opening settlement may be placed.
    fn legal_starting_nodes(&self) -> Vec<NodeId>;

    /// Nodes where `player` may build a new settlement.
    fn legal_town_nodes(&self, player: PlayerId) -> Vec<NodeId>;

    /// Settlements of `player` eligible for a city upgrade.
    fn legal_city_nodes(&self, player: PlayerId) -> Vec<NodeId>;

    /// Road placements available to `player`.
    fn legal_road_spans(&self, player: PlayerId) -> Vec<RoadSpan>;

    fn tiles(&self) -> &[Tile];

    fn node(&self, id: NodeId) -> Option<&NodeInfo>;

    fn node_ids(&self) -> Vec<NodeId>;

    /// A node touching fewer than three tiles sits on the coast.
    fn is_coastal(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|n| n.tiles.len() < 3)
    }

    /// Adjacent nodes owned by someone other than `viewer`.
    fn opponent_settlements(&self, id: NodeId, viewer: PlayerId) -> usize {
        let Some(info) = self.node(id) else { return 0 };
        info.adjacent
            .iter()
            .filter_map(|&adj| self.node(adj))
            .filter(|n| n.owner.is_some_and(|p| p != viewer))
            .count()
    }
}

/// Owned copy of the board data one viewer needs after the borrowed
/// `BoardView` is gone. Captured at the top of every hook that receives a
/// board argument; consumed by the thief and road-building-card hooks,
/// which are called without one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoardSnapshot {
    tiles: Vec<Tile>,
    nodes: Vec<NodeInfo>,
    road_spans: Vec<RoadSpan>,
}

impl BoardSnapshot {
    pub fn capture(board: &dyn BoardView, viewer: PlayerId) -> BoardSnapshot {
        let nodes = board
            .node_ids()
            .into_iter()
            .filter_map(|id| board.node(id).cloned())
            .collect();
        BoardSnapshot {
            tiles: board.tiles().to_vec(),
            nodes,
            road_spans: board.legal_road_spans(viewer),
        }
    }

    pub fn nodes(&self) -> &[NodeInfo] {
        &self.nodes
    }

    /// The viewer's legal road spans as of capture time.
    pub fn road_spans(&self) -> &[RoadSpan] {
        &self.road_spans
    }

    /// Nodes in contact with a given tile, in node enumeration order.
    pub fn contacting_nodes(&self, tile: TileId) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|n| n.tiles.contains(&tile))
            .map(|n| n.id)
            .collect()
    }
}

/// A snapshot answers the read-only queries from its captured data, so
/// scoring code written against `BoardView` runs unchanged on it. Legal
/// building sets are not retained: only the viewer's road spans survive
/// capture, and the placement queries answer empty.
impl BoardView for BoardSnapshot {
    fn legal_starting_nodes(&self) -> Vec<NodeId> {
        Vec::new()
    }

    fn legal_town_nodes(&self, _player: PlayerId) -> Vec<NodeId> {
        Vec::new()
    }

    fn legal_city_nodes(&self, _player: PlayerId) -> Vec<NodeId> {
        Vec::new()
    }

    fn legal_road_spans(&self, _player: PlayerId) -> Vec<RoadSpan> {
        self.road_spans.clone()
    }

    fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    fn node(&self, id: NodeId) -> Option<&NodeInfo> {
        self.nodes.iter().find(|n| n.id == id)
    }

    fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|n| n.id).collect()
    }
}

/// A `BoardView` backed by plain data: tiles, nodes, and explicit legal
/// sets supplied by whoever built it. There is no rule engine here; this
/// is the fixture the runner and the test suites stand in for the real
/// orchestrator with.
#[derive(Debug, Clone, Default)]
pub struct StaticBoard {
    pub tiles: Vec<Tile>,
    pub nodes: Vec<NodeInfo>,
    pub starting_nodes: Vec<NodeId>,
    pub town_nodes: HashMap<PlayerId, Vec<NodeId>>,
    pub city_nodes: HashMap<PlayerId, Vec<NodeId>>,
    pub road_spans: HashMap<PlayerId, Vec<RoadSpan>>,
}

impl BoardView for StaticBoard {
    fn legal_starting_nodes(&self) -> Vec<NodeId> {
        self.starting_nodes.clone()
    }

    fn legal_town_nodes(&self, player: PlayerId) -> Vec<NodeId> {
        self.town_nodes.get(&player).cloned().unwrap_or_default()
    }

    fn legal_city_nodes(&self, player: PlayerId) -> Vec<NodeId> {
        self.city_nodes.get(&player).cloned().unwrap_or_default()
    }

    fn legal_road_spans(&self, player: PlayerId) -> Vec<RoadSpan> {
        self.road_spans.get(&player).cloned().unwrap_or_default()
    }

    fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    fn node(&self, id: NodeId) -> Option<&NodeInfo> {
        self.nodes.iter().find(|n| n.id == id)
    }

    fn node_ids(&self) -> Vec<NodeId> {
        self.nodes.iter().map(|n| n.id).collect()
    }
}

impl StaticBoard {
    /// Small fixed seven-tile layout used by the runner demo: a strong
    /// 6/8 corner, a weak 2/12 fringe, one desert holding the thief, one
    /// harbor node, and one opponent settlement to aim the thief at.
    pub fn demo(me: PlayerId, opponent: PlayerId) -> StaticBoard {
        let tiles = vec![
            Tile { id: TileId(0), terrain: Terrain::Fields, number: Some(6), has_thief: false },
            Tile { id: TileId(1), terrain: Terrain::Mountains, number: Some(8), has_thief: false },
            Tile { id: TileId(2), terrain: Terrain::Hills, number: Some(5), has_thief: false },
            Tile { id: TileId(3), terrain: Terrain::Forest, number: Some(9), has_thief: false },
            Tile { id: TileId(4), terrain: Terrain::Pasture, number: Some(10), has_thief: false },
            Tile { id: TileId(5), terrain: Terrain::Desert, number: None, has_thief: true },
            Tile { id: TileId(6), terrain: Terrain::Fields, number: Some(2), has_thief: false },
        ];

        let node = |id: u16, owner: Option<PlayerId>, adjacent: &[u16], tiles: &[u8], harbor: Harbor| NodeInfo {
            id: NodeId(id),
            owner,
            adjacent: adjacent.iter().map(|&n| NodeId(n)).collect(),
            tiles: tiles.iter().map(|&t| TileId(t)).collect(),
            harbor,
        };

        let nodes = vec![
            node(0, None, &[1, 4], &[0, 1], Harbor::None),
            node(1, None, &[0, 2, 5], &[0, 2, 5], Harbor::None),
            node(2, None, &[1, 3, 6], &[1, 2, 3], Harbor::None),
            node(3, None, &[2, 7], &[3, 4], Harbor::None),
            node(4, None, &[0, 8], &[0], Harbor::None),
            node(5, None, &[1, 9], &[2, 5], Harbor::None),
            node(6, None, &[2, 7, 9], &[3, 5, 6], Harbor::None),
            node(7, Some(opponent), &[3, 6], &[4, 6], Harbor::None),
            node(8, None, &[4, 9], &[6], Harbor::None),
            node(9, None, &[5, 6, 8], &[5], Harbor::Generic),
        ];

        let mut town_nodes = HashMap::new();
        town_nodes.insert(me, vec![NodeId(2), NodeId(4)]);

        let mut road_spans = HashMap::new();
        road_spans.insert(
            me,
            vec![
                RoadSpan { from: NodeId(1), to: NodeId(5) },
                RoadSpan { from: NodeId(5), to: NodeId(9) },
                RoadSpan { from: NodeId(2), to: NodeId(6) },
            ],
        );

        StaticBoard {
            tiles,
            nodes,
            starting_nodes: (0..7).map(NodeId).collect(),
            town_nodes,
            city_nodes: HashMap::new(),
            road_spans,
        }
    }
}
