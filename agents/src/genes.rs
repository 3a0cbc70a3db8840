// ═══════════════════════════════════════════════════════════════════════
// Gene profile — the agent's behavioral configuration.
//
// Each decision category carries a weight vector over its branches.
// Weights are validated once at construction (non-negative, sum ≈ 1)
// and converted to cumulative sums; sampling is a single uniform draw
// against the memoized cumulative sequence.
// ═══════════════════════════════════════════════════════════════════════

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tolerance for the per-category weight sum.
const SUM_TOLERANCE: f64 = 1e-6;

/// The decision categories a profile configures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GeneCategory {
    /// Which site-selection heuristic drives the opening placement.
    BeginningPriority,
    /// Which build-phase branch to run.
    BuildPriority,
    /// Resource ordering for discards and trade proposals.
    MaterialPriority,
    /// Which thief-placement heuristic to apply.
    ThiefPriority,
}

impl GeneCategory {
    pub const ALL: [GeneCategory; 4] = [
        GeneCategory::BeginningPriority,
        GeneCategory::BuildPriority,
        GeneCategory::MaterialPriority,
        GeneCategory::ThiefPriority,
    ];

    fn slot(self) -> usize {
        match self {
            GeneCategory::BeginningPriority => 0,
            GeneCategory::BuildPriority => 1,
            GeneCategory::MaterialPriority => 2,
            GeneCategory::ThiefPriority => 3,
        }
    }
}

impl std::fmt::Display for GeneCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneCategory::BeginningPriority => write!(f, "beginning_priority"),
            GeneCategory::BuildPriority => write!(f, "build_priority"),
            GeneCategory::MaterialPriority => write!(f, "material_priority"),
            GeneCategory::ThiefPriority => write!(f, "thief_priority"),
        }
    }
}

/// Configuration errors caught at profile construction. Malformed
/// weights are fatal here so that sampling never has to handle them.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneError {
    EmptyCategory(GeneCategory),
    NegativeWeight { category: GeneCategory, index: usize, weight: f64 },
    BadSum { category: GeneCategory, sum: f64 },
}

impl std::fmt::Display for GeneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneError::EmptyCategory(c) => write!(f, "gene category {} has no weights", c),
            GeneError::NegativeWeight { category, index, weight } => {
                write!(f, "gene category {} weight {} is negative: {}", category, index, weight)
            }
            GeneError::BadSum { category, sum } => {
                write!(f, "gene category {} weights sum to {} instead of 1.0", category, sum)
            }
        }
    }
}

impl std::error::Error for GeneError {}

/// Raw per-category weight vectors, the serializable configuration
/// surface (e.g. a JSON gene file for the runner).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneWeights {
    pub beginning_priority: Vec<f64>,
    pub build_priority: Vec<f64>,
    pub material_priority: Vec<f64>,
    pub thief_priority: Vec<f64>,
}

impl GeneWeights {
    fn category(&self, category: GeneCategory) -> &[f64] {
        match category {
            GeneCategory::BeginningPriority => &self.beginning_priority,
            GeneCategory::BuildPriority => &self.build_priority,
            GeneCategory::MaterialPriority => &self.material_priority,
            GeneCategory::ThiefPriority => &self.thief_priority,
        }
    }
}

impl Default for GeneWeights {
    /// Mildly city-leaning defaults. Build branches in declaration
    /// order: CityFirst, TownFirst, RoadExpand, PortHunter, CardSpam.
    /// Material weights in resource id order: cereal, mineral, clay,
    /// wood, wool.
    fn default() -> GeneWeights {
        GeneWeights {
            beginning_priority: vec![0.7, 0.3],
            build_priority: vec![0.3, 0.3, 0.2, 0.1, 0.1],
            material_priority: vec![0.3, 0.25, 0.2, 0.15, 0.1],
            thief_priority: vec![0.5, 0.5],
        }
    }
}

/// Validated, sample-ready profile. Immutable after construction; every
/// random draw comes from the rng the caller passes in.
#[derive(Debug, Clone)]
pub struct GeneProfile {
    weights: [Vec<f64>; 4],
    cumulative: [Vec<f64>; 4],
}

impl GeneProfile {
    pub fn new(config: GeneWeights) -> Result<GeneProfile, GeneError> {
        let mut weights: [Vec<f64>; 4] = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];
        let mut cumulative: [Vec<f64>; 4] = [Vec::new(), Vec::new(), Vec::new(), Vec::new()];

        for category in GeneCategory::ALL {
            let raw = config.category(category);
            if raw.is_empty() {
                return Err(GeneError::EmptyCategory(category));
            }
            for (index, &w) in raw.iter().enumerate() {
                if w < 0.0 {
                    return Err(GeneError::NegativeWeight { category, index, weight: w });
                }
            }
            let sum: f64 = raw.iter().sum();
            if (sum - 1.0).abs() > SUM_TOLERANCE {
                return Err(GeneError::BadSum { category, sum });
            }

            let mut running = 0.0;
            let cum: Vec<f64> = raw
                .iter()
                .map(|&w| {
                    running += w;
                    running
                })
                .collect();

            weights[category.slot()] = raw.to_vec();
            cumulative[category.slot()] = cum;
        }

        Ok(GeneProfile { weights, cumulative })
    }

    pub fn default_profile() -> GeneProfile {
        // Default weights are compile-time constants and always valid.
        GeneProfile::new(GeneWeights::default()).expect("default gene weights are valid")
    }

    /// Number of branches in a category.
    pub fn len(&self, category: GeneCategory) -> usize {
        self.weights[category.slot()].len()
    }

    pub fn weights(&self, category: GeneCategory) -> &[f64] {
        &self.weights[category.slot()]
    }

    pub fn cumulative(&self, category: GeneCategory) -> &[f64] {
        &self.cumulative[category.slot()]
    }

    /// Draw one branch index for a category: smallest index whose
    /// cumulative weight exceeds the uniform draw. Falls back to the
    /// last index when the draw lands beyond the final cumulative value
    /// (floating-point rounding near 1.0).
    pub fn sample<R: Rng + ?Sized>(&self, category: GeneCategory, rng: &mut R) -> usize {
        let cum = &self.cumulative[category.slot()];
        let u: f64 = rng.gen_range(0.0..1.0);
        cum.iter()
            .position(|&edge| edge > u)
            .unwrap_or(cum.len() - 1)
    }

    /// Branch indices ordered by descending weight, stable for ties.
    /// Used where a category expresses an ordering rather than a draw
    /// (discards walk this list from the back).
    pub fn ranking(&self, category: GeneCategory) -> Vec<usize> {
        let w = &self.weights[category.slot()];
        let mut indices: Vec<usize> = (0..w.len()).collect();
        indices.sort_by(|&a, &b| w[b].partial_cmp(&w[a]).unwrap_or(std::cmp::Ordering::Equal));
        indices
    }
}
