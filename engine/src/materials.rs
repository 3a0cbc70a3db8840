// ═══════════════════════════════════════════════════════════════════════
// Materials — resource count vectors, the agent's hand, and the
// development-card hand.
// ═══════════════════════════════════════════════════════════════════════

use crate::types::{DevCard, Resource};
use serde::{Deserialize, Serialize};

/// A component-wise non-negative vector of resource counts. Used both for
/// hands and for the `gives`/`receives` sides of a trade offer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Materials {
    counts: [u8; 5],
}

impl Materials {
    pub const fn new() -> Materials {
        Materials { counts: [0; 5] }
    }

    /// Build from (cereal, mineral, clay, wood, wool) counts.
    pub const fn from_counts(cereal: u8, mineral: u8, clay: u8, wood: u8, wool: u8) -> Materials {
        Materials {
            counts: [cereal, mineral, clay, wood, wool],
        }
    }

    pub fn get(&self, kind: Resource) -> u8 {
        self.counts[kind.index()]
    }

    pub fn set(&mut self, kind: Resource, amount: u8) {
        self.counts[kind.index()] = amount;
    }

    pub fn add(&mut self, kind: Resource, amount: u8) {
        self.counts[kind.index()] = self.counts[kind.index()].saturating_add(amount);
    }

    /// Remove up to `amount` of `kind`, clamping at zero.
    pub fn remove(&mut self, kind: Resource, amount: u8) {
        self.counts[kind.index()] = self.counts[kind.index()].saturating_sub(amount);
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| u32::from(c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Component-wise ≥ comparison: true when this vector covers `other`
    /// in every resource. This is the affordability and trade-fairness
    /// primitive.
    pub fn has_more(&self, other: &Materials) -> bool {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .all(|(mine, theirs)| mine >= theirs)
    }

    /// Component-wise subtraction clamped at zero.
    pub fn saturating_sub(&self, other: &Materials) -> Materials {
        let mut out = [0u8; 5];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.counts[i].saturating_sub(other.counts[i]);
        }
        Materials { counts: out }
    }

    /// Component-wise saturating addition.
    pub fn saturating_add(&self, other: &Materials) -> Materials {
        let mut out = [0u8; 5];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.counts[i].saturating_add(other.counts[i]);
        }
        Materials { counts: out }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Resource, u8)> + '_ {
        Resource::ALL.iter().map(|&r| (r, self.counts[r.index()]))
    }
}

// ── Building costs ─────────────────────────────────────────────────────
// (cereal, mineral, clay, wood, wool)

pub const ROAD_COST: Materials = Materials::from_counts(0, 0, 1, 1, 0);
pub const TOWN_COST: Materials = Materials::from_counts(1, 0, 1, 1, 1);
pub const CITY_COST: Materials = Materials::from_counts(2, 3, 0, 0, 0);
pub const CARD_COST: Materials = Materials::from_counts(1, 1, 0, 0, 1);

/// The agent's resource hand. Thin wrapper over `Materials` carrying the
/// hand-interface vocabulary the orchestrator calls through.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    resources: Materials,
}

impl Hand {
    pub fn new() -> Hand {
        Hand::default()
    }

    pub fn with_resources(resources: Materials) -> Hand {
        Hand { resources }
    }

    pub fn resources(&self) -> &Materials {
        &self.resources
    }

    pub fn resource_count(&self, kind: Resource) -> u8 {
        self.resources.get(kind)
    }

    pub fn has_at_least(&self, cost: &Materials) -> bool {
        self.resources.has_more(cost)
    }

    pub fn add(&mut self, kind: Resource, amount: u8) {
        self.resources.add(kind, amount);
    }

    pub fn remove(&mut self, kind: Resource, amount: u8) {
        self.resources.remove(kind, amount);
    }

    /// Pay a cost vector out of the hand. The caller gates with
    /// `has_at_least` first; amounts clamp at zero regardless.
    pub fn pay(&mut self, cost: &Materials) {
        self.resources = self.resources.saturating_sub(cost);
    }

    pub fn receive(&mut self, gain: &Materials) {
        self.resources = self.resources.saturating_add(gain);
    }

    pub fn total(&self) -> u32 {
        self.resources.total()
    }
}

/// The agent's development cards. An ordered multiset; cards are played
/// by index so the orchestrator can validate the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevCardHand {
    cards: Vec<DevCard>,
}

impl DevCardHand {
    pub fn new() -> DevCardHand {
        DevCardHand::default()
    }

    pub fn push(&mut self, card: DevCard) {
        self.cards.push(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = DevCard> + '_ {
        self.cards.iter().copied()
    }

    /// Index of the first card of `kind`, if any.
    pub fn find(&self, kind: DevCard) -> Option<usize> {
        self.cards.iter().position(|&c| c == kind)
    }

    /// Remove and return the card at `index`. None when out of range.
    pub fn take(&mut self, index: usize) -> Option<DevCard> {
        if index < self.cards.len() {
            Some(self.cards.remove(index))
        } else {
            None
        }
    }
}
