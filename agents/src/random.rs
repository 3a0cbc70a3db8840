// ═══════════════════════════════════════════════════════════════════════
// Random Agent — makes all decisions uniformly at random among legal
// candidates. Serves as baseline and for exercising the hook surface.
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::{Agent, BuildAction, ThiefMove};
use catan_engine::board::{BoardSnapshot, BoardView, RoadSpan};
use catan_engine::materials::{DevCardHand, Hand, CARD_COST, CITY_COST, ROAD_COST, TOWN_COST};
use catan_engine::trade::{TradeOffer, TradeResponse};
use catan_engine::types::{NodeId, PlayerId, Resource, TileId};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub struct RandomAgent {
    player: PlayerId,
    hand: Hand,
    dev_cards: DevCardHand,
    rng: ChaCha8Rng,
    snapshot: Option<BoardSnapshot>,
    town_number: u32,
}

impl RandomAgent {
    pub fn new(player: PlayerId, seed: u64) -> RandomAgent {
        RandomAgent {
            player,
            hand: Hand::new(),
            dev_cards: DevCardHand::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            snapshot: None,
            town_number: 0,
        }
    }

    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn dev_cards_mut(&mut self) -> &mut DevCardHand {
        &mut self.dev_cards
    }

    fn random_resource(&mut self) -> Resource {
        *Resource::ALL.choose(&mut self.rng).expect("resource list is non-empty")
    }
}

impl Agent for RandomAgent {
    fn name(&self) -> &str {
        "Random"
    }

    fn player(&self) -> PlayerId {
        self.player
    }

    fn on_game_start(&mut self, board: &dyn BoardView) -> Option<(NodeId, NodeId)> {
        let legal = board.legal_starting_nodes();
        let &node = legal.choose(&mut self.rng)?;
        let adjacent = board.node(node)?.adjacent.clone();
        let &road_to = adjacent.choose(&mut self.rng)?;
        self.snapshot = Some(BoardSnapshot::capture(board, self.player));
        self.town_number += 1;
        Some((node, road_to))
    }

    fn on_turn_start(&mut self) -> Option<usize> {
        None
    }

    fn on_build_phase(&mut self, board: &dyn BoardView) -> Option<BuildAction> {
        self.snapshot = Some(BoardSnapshot::capture(board, self.player));

        // Collect every affordable legal purchase, then pick one.
        let mut options: Vec<BuildAction> = Vec::new();
        if self.town_number > 0 && self.hand.has_at_least(&CITY_COST) {
            options.extend(
                board
                    .legal_city_nodes(self.player)
                    .into_iter()
                    .map(|node| BuildAction::City { node }),
            );
        }
        if self.hand.has_at_least(&TOWN_COST) {
            options.extend(
                board
                    .legal_town_nodes(self.player)
                    .into_iter()
                    .map(|node| BuildAction::Town { node }),
            );
        }
        if self.hand.has_at_least(&ROAD_COST) {
            options.extend(
                board
                    .legal_road_spans(self.player)
                    .into_iter()
                    .map(|span| BuildAction::Road { span }),
            );
        }
        if self.hand.has_at_least(&CARD_COST) {
            options.push(BuildAction::Card);
        }
        options.choose(&mut self.rng).copied()
    }

    fn on_commerce_phase(&mut self) -> Option<TradeOffer> {
        None
    }

    fn on_trade_offer(
        &mut self,
        board: &dyn BoardView,
        offer: &TradeOffer,
        _from: PlayerId,
    ) -> TradeResponse {
        self.snapshot = Some(BoardSnapshot::capture(board, self.player));
        // Coin flip, but only when the asked price is payable at all.
        if self.hand.has_at_least(&offer.receives) && self.rng.gen_bool(0.5) {
            TradeResponse::Accept
        } else {
            TradeResponse::Reject
        }
    }

    fn on_moving_thief(&mut self) -> ThiefMove {
        let candidates: Vec<TileId> = self
            .snapshot
            .as_ref()
            .map(|snap| {
                snap.tiles()
                    .iter()
                    .filter(|t| !t.has_thief)
                    .map(|t| t.id)
                    .collect()
            })
            .unwrap_or_default();
        let tile = candidates
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(TileId(0));
        ThiefMove { tile, steal_from: None }
    }

    fn on_having_more_than_seven_materials(&mut self) -> Option<Hand> {
        // Let the orchestrator discard at random; that is this agent's
        // character anyway.
        None
    }

    fn on_turn_end(&mut self) -> Option<usize> {
        None
    }

    fn on_monopoly_card_use(&mut self) -> Resource {
        self.random_resource()
    }

    fn on_road_building_card_use(&mut self) -> Option<(RoadSpan, Option<RoadSpan>)> {
        let spans: Vec<RoadSpan> = self.snapshot.as_ref()?.road_spans().to_vec();
        let &first = spans.choose(&mut self.rng)?;
        let second = spans
            .iter()
            .copied()
            .find(|&s| s != first);
        Some((first, second))
    }

    fn on_year_of_plenty_card_use(&mut self) -> (Resource, Resource) {
        (self.random_resource(), self.random_resource())
    }
}
