// ═══════════════════════════════════════════════════════════════════════
// Trade negotiator — evaluates incoming offers, generates outgoing ones,
// and orders thief discards. All decisions derive from the hand's
// surplus/deficit against a fixed target stock.
// ═══════════════════════════════════════════════════════════════════════

use catan_engine::materials::{Hand, Materials, CARD_COST, CITY_COST, ROAD_COST, TOWN_COST};
use catan_engine::trade::TradeOffer;
use catan_engine::types::Resource;

/// Hard ceiling on hand size after a proposed exchange completes.
pub const HAND_CEILING: u32 = 13;

/// Give 2, get 1: the conservative table-trade ratio.
const PROPOSAL_RATIO: u8 = 2;

/// Per-resource target composition: enough to afford one of each
/// purchase. Deficits against this stock drive offers and card picks.
pub fn target_stock() -> Materials {
    ROAD_COST
        .saturating_add(&TOWN_COST)
        .saturating_add(&CITY_COST)
        .saturating_add(&CARD_COST)
}

#[derive(Debug, Clone, Default)]
pub struct TradeNegotiator;

impl TradeNegotiator {
    /// Dominance rule for incoming offers: accept only when the offered
    /// `gives` covers the requested `receives` in every resource, and the
    /// hand can actually pay the `receives` side.
    pub fn evaluate(&self, offer: &TradeOffer, hand: &Hand) -> bool {
        offer.is_fair_for_receiver() && hand.has_at_least(&offer.receives)
    }

    /// Resources the hand is short of, deepest deficit first; ties in
    /// deficit break by the given priority ranking (resource indices,
    /// most-prioritized first).
    pub fn deficits(&self, hand: &Hand, ranking: &[usize]) -> Vec<Resource> {
        let target = target_stock();
        let mut shortfall: Vec<(Resource, u8)> = ranking
            .iter()
            .filter_map(|&i| Resource::from_index(i))
            .filter_map(|r| {
                let need = target.get(r).saturating_sub(hand.resource_count(r));
                (need > 0).then_some((r, need))
            })
            .collect();
        shortfall.sort_by(|a, b| b.1.cmp(&a.1));
        shortfall.into_iter().map(|(r, _)| r).collect()
    }

    /// Propose a surplus-for-deficit exchange, or abstain. Walks the
    /// priority ranking from the least-prioritized resource looking for
    /// one held at ratio strength and at or above target, then asks for
    /// one unit of the deepest deficit. Never proposes past the ceiling.
    pub fn propose(&self, hand: &Hand, ranking: &[usize]) -> Option<TradeOffer> {
        let current_total = hand.total();
        if current_total >= HAND_CEILING {
            return None;
        }

        let wanted = self.deficits(hand, ranking);
        let target = target_stock();

        for &idx in ranking.iter().rev() {
            let give = Resource::from_index(idx)?;
            let held = hand.resource_count(give);
            if held < PROPOSAL_RATIO || held < target.get(give) {
                continue;
            }
            let get = wanted.iter().copied().find(|&r| r != give)?;
            // Net change is ratio out, one in.
            if current_total - u32::from(PROPOSAL_RATIO) + 1 <= HAND_CEILING {
                let mut gives = Materials::new();
                gives.add(give, PROPOSAL_RATIO);
                let mut receives = Materials::new();
                receives.add(get, 1);
                return Some(TradeOffer::new(gives, receives));
            }
        }
        None
    }

    /// Counter an unfair offer when it still supplies something needed:
    /// swap one surplus unit for one unit of the needed resource. None
    /// when the offer brings nothing wanted or no surplus exists.
    pub fn counter(&self, offer: &TradeOffer, hand: &Hand, ranking: &[usize]) -> Option<TradeOffer> {
        let wanted = self.deficits(hand, ranking);
        let get = wanted.iter().copied().find(|&r| offer.gives.get(r) > 0)?;

        let target = target_stock();
        let give = ranking
            .iter()
            .rev()
            .filter_map(|&i| Resource::from_index(i))
            .find(|&r| r != get && hand.resource_count(r) > target.get(r))?;

        let mut gives = Materials::new();
        gives.add(give, 1);
        let mut receives = Materials::new();
        receives.add(get, 1);
        Some(TradeOffer::new(gives, receives))
    }

    /// Thief discard: when the hand exceeds `limit`, drop half of it
    /// (floor), removing the least-prioritized resources first. Returns
    /// the hand that remains.
    pub fn discard_to(&self, hand: &Hand, limit: u32, ranking: &[usize]) -> Hand {
        let total = hand.total();
        if total <= limit {
            return hand.clone();
        }

        let mut kept = hand.clone();
        let mut to_drop = total / 2;
        'outer: for &idx in ranking.iter().rev() {
            let Some(kind) = Resource::from_index(idx) else { continue };
            while kept.resource_count(kind) > 0 {
                if to_drop == 0 {
                    break 'outer;
                }
                kept.remove(kind, 1);
                to_drop -= 1;
            }
        }
        kept
    }
}
