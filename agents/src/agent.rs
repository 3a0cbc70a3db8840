// ═══════════════════════════════════════════════════════════════════════
// Agent Trait — the decision hooks an orchestrator calls on each player.
//
// KEY DESIGN PRINCIPLE:
//   Every hook is call-and-return: the agent answers from the arguments
//   and its own owned state, and never retains the borrowed board past
//   the call (hooks invoked without a board work from the snapshot the
//   agent captured on the last board-carrying hook).
//
//   "No action" is a normal answer, not an error: each Option-returning
//   hook abstains with None and the orchestrator moves on.
// ═══════════════════════════════════════════════════════════════════════

use catan_engine::board::{BoardView, RoadSpan};
use catan_engine::materials::Hand;
use catan_engine::trade::{TradeOffer, TradeResponse};
use catan_engine::types::{NodeId, PlayerId, Resource, TileId};
use serde::{Deserialize, Serialize};

/// A concrete build-phase decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildAction {
    Town { node: NodeId },
    City { node: NodeId },
    Road { span: RoadSpan },
    Card,
}

/// Where to put the thief and who to steal from. `steal_from: None`
/// means the move blocks production without a theft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThiefMove {
    pub tile: TileId,
    pub steal_from: Option<PlayerId>,
}

/// Trait that all AI agents implement. One method per orchestrator
/// decision point; hooks may be called repeatedly until they abstain.
pub trait Agent {
    /// Human-readable name for this agent (e.g., "Strategy", "Random").
    fn name(&self) -> &str;

    /// The seat this agent is playing.
    fn player(&self) -> PlayerId;

    /// Opening placement: returns the settlement node plus the adjacent
    /// node the paired starting road runs to. None only when the board
    /// offers no legal starting node.
    fn on_game_start(&mut self, board: &dyn BoardView) -> Option<(NodeId, NodeId)>;

    /// Before the dice: optionally play a development card (by index
    /// into the agent's card hand).
    fn on_turn_start(&mut self) -> Option<usize>;

    /// Build phase: one purchase per call, or None to stop building.
    fn on_build_phase(&mut self, board: &dyn BoardView) -> Option<BuildAction>;

    /// Commerce phase: optionally propose a trade to the table.
    fn on_commerce_phase(&mut self) -> Option<TradeOffer>;

    /// An incoming offer from `from`. The offer is phrased from the
    /// proposer's side: accepting means paying `offer.receives`.
    fn on_trade_offer(
        &mut self,
        board: &dyn BoardView,
        offer: &TradeOffer,
        from: PlayerId,
    ) -> TradeResponse;

    /// A seven was rolled (or a knight played): relocate the thief.
    fn on_moving_thief(&mut self) -> ThiefMove;

    /// Thief discard: return the hand kept after discarding, or None to
    /// let the orchestrator discard at random.
    fn on_having_more_than_seven_materials(&mut self) -> Option<Hand>;

    /// After the build phase: optionally play a development card.
    fn on_turn_end(&mut self) -> Option<usize>;

    /// Monopoly card: every opponent surrenders this resource.
    fn on_monopoly_card_use(&mut self) -> Resource;

    /// Road building card: up to two free road placements.
    fn on_road_building_card_use(&mut self) -> Option<(RoadSpan, Option<RoadSpan>)>;

    /// Year of plenty card: draw these two resources (repeats allowed).
    fn on_year_of_plenty_card_use(&mut self) -> (Resource, Resource);
}
