// ═══════════════════════════════════════════════════════════════════════
// Evolutionary site selector — genetic search over legal opening nodes.
//
// One shot per match, at placement. Individuals are candidate node ids;
// fitness is the placement heuristic re-scored fresh every generation.
// A fixed generation count bounds the loop, so the hook always returns.
// ═══════════════════════════════════════════════════════════════════════

use crate::score::{placement_fitness, PlacementHeuristic};
use catan_engine::board::BoardView;
use catan_engine::types::NodeId;
use rand::seq::SliceRandom;
use rand::Rng;

/// Parameters of the genetic search. The defaults are the tuned values:
/// small boards converge well before ten generations.
#[derive(Debug, Clone, Copy)]
pub struct EvolutionarySiteSelector {
    pub generations: u32,
    pub mutation_rate: f64,
    pub population_cap: usize,
}

impl Default for EvolutionarySiteSelector {
    fn default() -> EvolutionarySiteSelector {
        EvolutionarySiteSelector {
            generations: 10,
            mutation_rate: 0.1,
            population_cap: 10,
        }
    }
}

impl EvolutionarySiteSelector {
    /// Run the search over `legal` and return the fittest node found.
    /// None only for an empty legal set; a single-node set short-circuits
    /// through the loop untouched.
    pub fn select<R: Rng + ?Sized>(
        &self,
        board: &dyn BoardView,
        legal: &[NodeId],
        heuristic: PlacementHeuristic,
        rng: &mut R,
    ) -> Option<NodeId> {
        if legal.is_empty() {
            return None;
        }

        let fitness = |node: NodeId| placement_fitness(board, node, heuristic);

        // Seed: distinct nodes drawn without replacement.
        let target_size = legal.len().min(self.population_cap);
        let mut population: Vec<NodeId> =
            legal.choose_multiple(rng, target_size).copied().collect();

        for _ in 0..self.generations {
            // Evaluate fresh and rank descending; the stable sort keeps
            // earlier individuals ahead on fitness ties.
            let mut scored: Vec<(NodeId, i32)> =
                population.iter().map(|&n| (n, fitness(n))).collect();
            scored.sort_by(|a, b| b.1.cmp(&a.1));

            // Keep the top half, never fewer than one.
            let keep = (scored.len() / 2).max(1);
            let survivors: Vec<NodeId> = scored[..keep].iter().map(|&(n, _)| n).collect();

            // Refill: copy a survivor, or mutate to any other legal node.
            let mut next = survivors.clone();
            while next.len() < population.len() {
                let &parent = survivors.choose(rng).expect("survivors are never empty");
                if rng.gen_bool(self.mutation_rate) {
                    let others: Vec<NodeId> =
                        legal.iter().copied().filter(|&n| n != parent).collect();
                    match others.choose(rng) {
                        Some(&mutant) => next.push(mutant),
                        // Degenerate legal set of one node: nothing to
                        // mutate to, keep the parent.
                        None => next.push(parent),
                    }
                } else {
                    next.push(parent);
                }
            }
            population = next;
        }

        // First-encountered maximum over the final population.
        let mut best = population[0];
        let mut best_fitness = fitness(best);
        for &node in &population[1..] {
            let f = fitness(node);
            if f > best_fitness {
                best = node;
                best_fitness = f;
            }
        }
        Some(best)
    }
}
