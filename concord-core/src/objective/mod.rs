//! Objective vocabulary and objective sets.
//!
//! The vocabulary is a closed registry: `ObjectiveName` declaration order is
//! the fixed scoring-dimension basis order shared by policies and candidate
//! metric vectors. Extending the vocabulary means editing the enum and the
//! conflict registry, never ad hoc dispatch.

pub mod registry;

pub use registry::{ConflictPair, Severity};

use serde::{Deserialize, Serialize};

use crate::constants::WEIGHT_SUM_TOLERANCE;

/// The closed set of objective names. Declaration order defines the
/// scoring-dimension basis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveName {
    Breadth,
    Precision,
    Speed,
    Thoroughness,
    Simplicity,
    Security,
    Innovation,
    Stability,
    Community,
    Documentation,
    Integration,
    /// Fallback objective when an intent matches nothing specific.
    Relevance,
}

impl ObjectiveName {
    /// All objectives in basis order.
    pub const ALL: [ObjectiveName; 12] = [
        ObjectiveName::Breadth,
        ObjectiveName::Precision,
        ObjectiveName::Speed,
        ObjectiveName::Thoroughness,
        ObjectiveName::Simplicity,
        ObjectiveName::Security,
        ObjectiveName::Innovation,
        ObjectiveName::Stability,
        ObjectiveName::Community,
        ObjectiveName::Documentation,
        ObjectiveName::Integration,
        ObjectiveName::Relevance,
    ];

    /// Number of scoring dimensions.
    pub const BASIS_LEN: usize = Self::ALL.len();

    /// Index of this objective in the scoring-dimension basis.
    pub fn basis_index(self) -> usize {
        self as usize
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectiveName::Breadth => "breadth",
            ObjectiveName::Precision => "precision",
            ObjectiveName::Speed => "speed",
            ObjectiveName::Thoroughness => "thoroughness",
            ObjectiveName::Simplicity => "simplicity",
            ObjectiveName::Security => "security",
            ObjectiveName::Innovation => "innovation",
            ObjectiveName::Stability => "stability",
            ObjectiveName::Community => "community",
            ObjectiveName::Documentation => "documentation",
            ObjectiveName::Integration => "integration",
            ObjectiveName::Relevance => "relevance",
        }
    }

    /// Parse a registered name. Returns `None` for anything outside the
    /// closed vocabulary.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|o| o.as_str() == name)
    }
}

impl std::fmt::Display for ObjectiveName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether higher raw metric values are better or worse for an objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Maximize,
    Minimize,
}

impl Direction {
    /// Sign applied to the objective's weight in the policy vector.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Maximize => 1.0,
            Direction::Minimize => -1.0,
        }
    }
}

/// Where an objective came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveSource {
    /// Supplied by the caller as an explicit weight override.
    Explicit,
    /// Inferred from the intent text.
    Inferred,
}

/// A named, weighted scoring dimension requested for a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    pub name: ObjectiveName,
    /// Weight in [0, 1]. Normalized across the set before resolution.
    pub weight: f64,
    pub direction: Direction,
    pub source: ObjectiveSource,
}

impl Objective {
    pub fn inferred(name: ObjectiveName, weight: f64) -> Self {
        Self {
            name,
            weight,
            direction: Direction::Maximize,
            source: ObjectiveSource::Inferred,
        }
    }

    pub fn explicit(name: ObjectiveName, weight: f64) -> Self {
        Self {
            name,
            weight,
            direction: Direction::Maximize,
            source: ObjectiveSource::Explicit,
        }
    }
}

/// The objectives of one request, keyed by name.
///
/// Duplicate inserts merge by taking the max weight (explicit wins the
/// source tag on equal weight). Iteration is always in basis order, which
/// keeps every downstream computation deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveSet {
    objectives: Vec<Objective>,
}

impl ObjectiveSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an objective, merging duplicates by max weight.
    pub fn insert(&mut self, objective: Objective) {
        if let Some(existing) = self
            .objectives
            .iter_mut()
            .find(|o| o.name == objective.name)
        {
            if objective.weight > existing.weight
                || (objective.weight == existing.weight
                    && objective.source == ObjectiveSource::Explicit)
            {
                *existing = objective;
            }
            return;
        }
        self.objectives.push(objective);
        self.objectives
            .sort_by_key(|o| o.name.basis_index());
    }

    pub fn get(&self, name: ObjectiveName) -> Option<&Objective> {
        self.objectives.iter().find(|o| o.name == name)
    }

    pub fn contains(&self, name: ObjectiveName) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.objectives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objectives.is_empty()
    }

    /// Objectives in basis order.
    pub fn iter(&self) -> impl Iterator<Item = &Objective> {
        self.objectives.iter()
    }

    /// Scale all weights so they sum to 1.0. A set whose weights sum to
    /// zero is left untouched.
    pub fn normalize(&mut self) {
        let sum: f64 = self.objectives.iter().map(|o| o.weight).sum();
        if sum <= 0.0 {
            return;
        }
        for o in &mut self.objectives {
            o.weight /= sum;
        }
    }

    /// Whether weights currently sum to 1.0 within tolerance.
    pub fn is_normalized(&self) -> bool {
        let sum: f64 = self.objectives.iter().map(|o| o.weight).sum();
        (sum - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
    }
}

impl FromIterator<Objective> for ObjectiveSet {
    fn from_iter<T: IntoIterator<Item = Objective>>(iter: T) -> Self {
        let mut set = Self::new();
        for o in iter {
            set.insert(o);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_name() {
        for name in ObjectiveName::ALL {
            assert_eq!(ObjectiveName::parse(name.as_str()), Some(name));
        }
        assert_eq!(ObjectiveName::parse("zzz_unknown"), None);
    }

    #[test]
    fn duplicate_insert_keeps_max_weight() {
        let mut set = ObjectiveSet::new();
        set.insert(Objective::inferred(ObjectiveName::Breadth, 0.3));
        set.insert(Objective::inferred(ObjectiveName::Breadth, 0.7));
        set.insert(Objective::inferred(ObjectiveName::Breadth, 0.5));
        assert_eq!(set.len(), 1);
        let breadth = set.get(ObjectiveName::Breadth).unwrap();
        assert_eq!(breadth.weight, 0.7);
    }

    #[test]
    fn explicit_wins_source_on_equal_weight() {
        let mut set = ObjectiveSet::new();
        set.insert(Objective::inferred(ObjectiveName::Security, 0.5));
        set.insert(Objective::explicit(ObjectiveName::Security, 0.5));
        assert_eq!(
            set.get(ObjectiveName::Security).unwrap().source,
            ObjectiveSource::Explicit
        );
    }

    #[test]
    fn normalize_sums_to_one() {
        let mut set = ObjectiveSet::new();
        set.insert(Objective::inferred(ObjectiveName::Breadth, 0.9));
        set.insert(Objective::inferred(ObjectiveName::Precision, 0.9));
        set.normalize();
        assert!(set.is_normalized());
        assert!((set.get(ObjectiveName::Breadth).unwrap().weight - 0.5).abs() < 1e-12);
    }

    #[test]
    fn iteration_is_basis_ordered() {
        let mut set = ObjectiveSet::new();
        set.insert(Objective::inferred(ObjectiveName::Relevance, 0.2));
        set.insert(Objective::inferred(ObjectiveName::Breadth, 0.2));
        set.insert(Objective::inferred(ObjectiveName::Security, 0.2));
        let names: Vec<_> = set.iter().map(|o| o.name).collect();
        assert_eq!(
            names,
            vec![
                ObjectiveName::Breadth,
                ObjectiveName::Security,
                ObjectiveName::Relevance
            ]
        );
    }
}
