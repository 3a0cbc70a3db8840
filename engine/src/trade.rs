// ═══════════════════════════════════════════════════════════════════════
// Trade offers — the exchange value object passed between agents.
// ═══════════════════════════════════════════════════════════════════════

use crate::materials::Materials;
use serde::{Deserialize, Serialize};

/// A proposed exchange, always phrased from the proposer's perspective:
/// the proposer hands over `gives` and wants `receives` back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeOffer {
    pub gives: Materials,
    pub receives: Materials,
}

impl TradeOffer {
    pub fn new(gives: Materials, receives: Materials) -> TradeOffer {
        TradeOffer { gives, receives }
    }

    /// Whether the receiving side gets at least as much as it pays, in
    /// every resource. Component-wise ≥, the dominance rule a cautious
    /// agent accepts by.
    pub fn is_fair_for_receiver(&self) -> bool {
        self.gives.has_more(&self.receives)
    }
}

/// The receiving agent's verdict on an incoming offer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeResponse {
    Accept,
    Counter(TradeOffer),
    Reject,
}
