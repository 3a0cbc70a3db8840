// ═══════════════════════════════════════════════════════════════════════
// Core types — resources, terrain, harbors, development cards, ids.
// ═══════════════════════════════════════════════════════════════════════

use serde::{Deserialize, Serialize};

// ── Enums ──────────────────────────────────────────────────────────────

/// The five tradable resource kinds, in the canonical id order
/// (cereal=0, mineral=1, clay=2, wood=3, wool=4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    Cereal,
    Mineral,
    Clay,
    Wood,
    Wool,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::Cereal,
        Resource::Mineral,
        Resource::Clay,
        Resource::Wood,
        Resource::Wool,
    ];

    /// Canonical index, stable across the whole workspace.
    pub fn index(self) -> usize {
        match self {
            Resource::Cereal => 0,
            Resource::Mineral => 1,
            Resource::Clay => 2,
            Resource::Wood => 3,
            Resource::Wool => 4,
        }
    }

    pub fn from_index(i: usize) -> Option<Resource> {
        Resource::ALL.get(i).copied()
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Cereal => write!(f, "Cereal"),
            Resource::Mineral => write!(f, "Mineral"),
            Resource::Clay => write!(f, "Clay"),
            Resource::Wood => write!(f, "Wood"),
            Resource::Wool => write!(f, "Wool"),
        }
    }
}

/// Terrain of a hex tile. Desert produces nothing and never carries a
/// dice number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Terrain {
    Fields,
    Mountains,
    Hills,
    Forest,
    Pasture,
    Desert,
}

impl Terrain {
    /// Resource produced by this terrain, None for desert.
    pub fn resource(self) -> Option<Resource> {
        match self {
            Terrain::Fields => Some(Resource::Cereal),
            Terrain::Mountains => Some(Resource::Mineral),
            Terrain::Hills => Some(Resource::Clay),
            Terrain::Forest => Some(Resource::Wood),
            Terrain::Pasture => Some(Resource::Wool),
            Terrain::Desert => None,
        }
    }
}

/// Harbor attached to a coastal node. Generic trades 3:1, resource
/// harbors 2:1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Harbor {
    None,
    Generic,
    Cereal,
    Mineral,
    Clay,
    Wood,
    Wool,
}

/// Development card kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DevCard {
    Knight,
    VictoryPoint,
    RoadBuilding,
    YearOfPlenty,
    Monopoly,
}

// ── Id newtypes ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TileId(pub u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0)
    }
}
