// ═══════════════════════════════════════════════════════════════════════
// Strategy Agent — the gene-driven decision engine.
//
// Per phase: sample the relevant gene category to pick a branch, gather
// legal candidates from the board, score them, answer with the stable
// arg-max. Affordability and empty candidate sets are ordinary
// fallthroughs, never errors; an exhausted chain abstains.
// ═══════════════════════════════════════════════════════════════════════

use crate::agent::{Agent, BuildAction, ThiefMove};
use crate::evolution::EvolutionarySiteSelector;
use crate::genes::{GeneCategory, GeneProfile};
use crate::negotiator::TradeNegotiator;
use crate::score::{
    argmax_by_score, harbor_reach, node_yield, placement_fitness, road_expansion,
    thief_target_score, PlacementHeuristic, ThiefHeuristic,
};
use catan_engine::board::{BoardSnapshot, BoardView, RoadSpan};
use catan_engine::materials::{DevCardHand, Hand, CARD_COST, CITY_COST, ROAD_COST, TOWN_COST};
use catan_engine::trade::{TradeOffer, TradeResponse};
use catan_engine::types::{DevCard, NodeId, PlayerId, Resource, TileId};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// The build-phase policy branches, one per `build_priority` gene slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildBranch {
    CityFirst,
    TownFirst,
    RoadExpand,
    PortHunter,
    CardSpam,
}

impl BuildBranch {
    pub const ALL: [BuildBranch; 5] = [
        BuildBranch::CityFirst,
        BuildBranch::TownFirst,
        BuildBranch::RoadExpand,
        BuildBranch::PortHunter,
        BuildBranch::CardSpam,
    ];

    pub fn from_gene_index(index: usize) -> BuildBranch {
        BuildBranch::ALL
            .get(index)
            .copied()
            .unwrap_or(BuildBranch::CityFirst)
    }
}

/// The four purchase attempts a branch chains together, in its own order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BuildStep {
    City,
    Town,
    Road,
    PortRoad,
    Card,
}

impl BuildBranch {
    /// Priority-ordered fallback chain for this branch.
    fn chain(self) -> &'static [BuildStep] {
        match self {
            BuildBranch::CityFirst => {
                &[BuildStep::City, BuildStep::Town, BuildStep::Road, BuildStep::Card]
            }
            BuildBranch::TownFirst => {
                &[BuildStep::Town, BuildStep::Road, BuildStep::City, BuildStep::Card]
            }
            BuildBranch::RoadExpand => {
                &[BuildStep::Road, BuildStep::Town, BuildStep::Card, BuildStep::City]
            }
            BuildBranch::PortHunter => {
                &[BuildStep::PortRoad, BuildStep::Road, BuildStep::Town, BuildStep::Card]
            }
            BuildBranch::CardSpam => {
                &[BuildStep::Card, BuildStep::City, BuildStep::Town, BuildStep::Road]
            }
        }
    }
}

/// Gene-configured agent: evolutionary opening placement, weighted
/// stochastic branch selection, heuristic candidate scoring.
pub struct StrategyAgent {
    player: PlayerId,
    genes: GeneProfile,
    hand: Hand,
    dev_cards: DevCardHand,
    rng: ChaCha8Rng,
    selector: EvolutionarySiteSelector,
    negotiator: TradeNegotiator,
    /// Board data retained from the last board-carrying hook, for the
    /// hooks called without a board argument.
    snapshot: Option<BoardSnapshot>,
    /// Settlements currently on the board (city upgrades need one).
    town_number: u32,
}

impl StrategyAgent {
    pub fn new(player: PlayerId, seed: u64) -> StrategyAgent {
        StrategyAgent::with_genes(player, seed, GeneProfile::default_profile())
    }

    pub fn with_genes(player: PlayerId, seed: u64, genes: GeneProfile) -> StrategyAgent {
        StrategyAgent {
            player,
            genes,
            hand: Hand::new(),
            dev_cards: DevCardHand::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            selector: EvolutionarySiteSelector::default(),
            negotiator: TradeNegotiator,
            snapshot: None,
            town_number: 0,
        }
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The orchestrator settles dice income and trade effects through
    /// this accessor.
    pub fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn dev_cards_mut(&mut self) -> &mut DevCardHand {
        &mut self.dev_cards
    }

    pub fn town_number(&self) -> u32 {
        self.town_number
    }

    fn material_ranking(&self) -> Vec<usize> {
        self.genes.ranking(GeneCategory::MaterialPriority)
    }

    /// One step of a build chain: affordability gate, candidate query,
    /// score, stable arg-max. None falls through to the next step.
    fn try_step(&mut self, board: &dyn BoardView, step: BuildStep) -> Option<BuildAction> {
        match step {
            BuildStep::City => {
                if self.town_number == 0 || !self.hand.has_at_least(&CITY_COST) {
                    return None;
                }
                let candidates = board.legal_city_nodes(self.player);
                argmax_by_score(candidates, |&n| node_yield(board, n))
                    .map(|(node, _)| BuildAction::City { node })
            }
            BuildStep::Town => {
                if !self.hand.has_at_least(&TOWN_COST) {
                    return None;
                }
                let candidates = board.legal_town_nodes(self.player);
                argmax_by_score(candidates, |&n| {
                    placement_fitness(board, n, PlacementHeuristic::Balanced)
                })
                .map(|(node, _)| BuildAction::Town { node })
            }
            BuildStep::Road => {
                if !self.hand.has_at_least(&ROAD_COST) {
                    return None;
                }
                let candidates = board.legal_road_spans(self.player);
                argmax_by_score(candidates, |&s| road_expansion(board, s, self.player))
                    .filter(|&(_, score)| score > 0)
                    .map(|(span, _)| BuildAction::Road { span })
            }
            BuildStep::PortRoad => {
                if !self.hand.has_at_least(&ROAD_COST) {
                    return None;
                }
                let candidates = board.legal_road_spans(self.player);
                argmax_by_score(candidates, |&s| harbor_reach(board, s))
                    .filter(|&(_, score)| score > 0)
                    .map(|(span, _)| BuildAction::Road { span })
            }
            BuildStep::Card => self.hand.has_at_least(&CARD_COST).then_some(BuildAction::Card),
        }
    }

    /// Account for an action the orchestrator confirmed: pay its cost
    /// and track the settlement count.
    pub fn apply_build(&mut self, action: &BuildAction) {
        match action {
            BuildAction::Town { .. } => {
                self.hand.pay(&TOWN_COST);
                self.town_number += 1;
            }
            BuildAction::City { .. } => {
                self.hand.pay(&CITY_COST);
                self.town_number = self.town_number.saturating_sub(1);
            }
            BuildAction::Road { .. } => self.hand.pay(&ROAD_COST),
            BuildAction::Card => self.hand.pay(&CARD_COST),
        }
    }

    /// Thief tiles currently blocking the viewer's own production.
    fn own_blocked_tiles(&self) -> Vec<TileId> {
        let Some(snapshot) = &self.snapshot else { return Vec::new() };
        snapshot
            .tiles()
            .iter()
            .filter(|t| t.has_thief)
            .filter(|t| {
                snapshot
                    .contacting_nodes(t.id)
                    .iter()
                    .filter_map(|&n| snapshot.node(n))
                    .any(|n| n.owner == Some(self.player))
            })
            .map(|t| t.id)
            .collect()
    }
}

impl Agent for StrategyAgent {
    fn name(&self) -> &str {
        "Strategy"
    }

    fn player(&self) -> PlayerId {
        self.player
    }

    fn on_game_start(&mut self, board: &dyn BoardView) -> Option<(NodeId, NodeId)> {
        let heuristic = PlacementHeuristic::from_gene_index(
            self.genes.sample(GeneCategory::BeginningPriority, &mut self.rng),
        );
        let legal = board.legal_starting_nodes();
        let node = self.selector.select(board, &legal, heuristic, &mut self.rng)?;

        // The paired road is a uniform pick among the adjacents; the
        // road choice is not part of the optimization.
        let adjacent = board.node(node).map(|n| n.adjacent.clone())?;
        let road_to = *adjacent.choose(&mut self.rng)?;

        self.snapshot = Some(BoardSnapshot::capture(board, self.player));
        self.town_number += 1;
        Some((node, road_to))
    }

    fn on_turn_start(&mut self) -> Option<usize> {
        // A knight is worth playing when the thief sits on our income.
        if !self.own_blocked_tiles().is_empty() {
            return self.dev_cards.find(DevCard::Knight);
        }
        None
    }

    fn on_build_phase(&mut self, board: &dyn BoardView) -> Option<BuildAction> {
        self.snapshot = Some(BoardSnapshot::capture(board, self.player));

        let branch = BuildBranch::from_gene_index(
            self.genes.sample(GeneCategory::BuildPriority, &mut self.rng),
        );
        for &step in branch.chain() {
            if let Some(action) = self.try_step(board, step) {
                return Some(action);
            }
        }
        None
    }

    fn on_commerce_phase(&mut self) -> Option<TradeOffer> {
        let ranking = self.material_ranking();
        self.negotiator.propose(&self.hand, &ranking)
    }

    fn on_trade_offer(
        &mut self,
        board: &dyn BoardView,
        offer: &TradeOffer,
        _from: PlayerId,
    ) -> TradeResponse {
        self.snapshot = Some(BoardSnapshot::capture(board, self.player));

        if self.negotiator.evaluate(offer, &self.hand) {
            return TradeResponse::Accept;
        }
        let ranking = self.material_ranking();
        match self.negotiator.counter(offer, &self.hand, &ranking) {
            Some(counter) => TradeResponse::Counter(counter),
            None => TradeResponse::Reject,
        }
    }

    fn on_moving_thief(&mut self) -> ThiefMove {
        let heuristic = ThiefHeuristic::from_gene_index(
            self.genes.sample(GeneCategory::ThiefPriority, &mut self.rng),
        );

        let Some(snapshot) = self.snapshot.clone() else {
            // Never seen a board: leave the thief notionally at tile 0.
            return ThiefMove { tile: TileId(0), steal_from: None };
        };

        let scored = argmax_by_score(
            snapshot
                .tiles()
                .iter()
                .filter_map(|t| {
                    thief_target_score(&snapshot, t, self.player, heuristic).map(|s| (t.id, s))
                }),
            |&(_, s)| s,
        );

        match scored {
            Some(((tile, _), _)) => {
                let victims = crate::score::tile_opponents(&snapshot, tile, self.player);
                ThiefMove { tile, steal_from: victims.first().copied() }
            }
            None => {
                // No tile qualifies: keep the thief where it is.
                let current = snapshot
                    .tiles()
                    .iter()
                    .find(|t| t.has_thief)
                    .map_or(TileId(0), |t| t.id);
                ThiefMove { tile: current, steal_from: None }
            }
        }
    }

    fn on_having_more_than_seven_materials(&mut self) -> Option<Hand> {
        let ranking = self.material_ranking();
        Some(self.negotiator.discard_to(&self.hand, 7, &ranking))
    }

    fn on_turn_end(&mut self) -> Option<usize> {
        None
    }

    fn on_monopoly_card_use(&mut self) -> Resource {
        let ranking = self.material_ranking();
        self.negotiator
            .deficits(&self.hand, &ranking)
            .first()
            .copied()
            .unwrap_or(Resource::Cereal)
    }

    fn on_road_building_card_use(&mut self) -> Option<(RoadSpan, Option<RoadSpan>)> {
        let snapshot = self.snapshot.as_ref()?;
        let spans = snapshot.road_spans();
        if spans.is_empty() {
            return None;
        }

        // Two best spans by expansion value plus harbor reach.
        let mut scored: Vec<(RoadSpan, i32)> = spans
            .iter()
            .map(|&s| {
                (s, road_expansion(snapshot, s, self.player) + harbor_reach(snapshot, s))
            })
            .collect();
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        let first = scored[0].0;
        let second = scored.get(1).map(|&(s, _)| s);
        Some((first, second))
    }

    fn on_year_of_plenty_card_use(&mut self) -> (Resource, Resource) {
        let ranking = self.material_ranking();
        let wanted = self.negotiator.deficits(&self.hand, &ranking);
        let first = wanted.first().copied().unwrap_or(Resource::Cereal);
        let second = wanted.get(1).copied().unwrap_or(first);
        (first, second)
    }
}
