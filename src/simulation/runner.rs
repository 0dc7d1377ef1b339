use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::error::SimulationError;

use super::faults::{FaultSet, GeneralId};
use super::order::Order;
use super::tree::RelayTree;

/// Parameters for one run.
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Total participants, commander included.
    pub num_generals: usize,
    /// How many of them are faulty; must satisfy `3 * num_faulty <=
    /// num_generals`.
    pub num_faulty: usize,
    /// The commander's starting instruction.
    pub order: Order,
    /// Seed for the fault-set draw; `None` seeds from entropy.
    pub seed: Option<u64>,
}

/// What one lieutenant ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneralOutcome {
    pub id: GeneralId,
    pub faulty: bool,
    pub decision: Order,
}

/// The structured result of a run: one outcome per lieutenant plus the
/// commander's consensus decision.
#[derive(Debug, Clone)]
pub struct SimulationReport {
    pub outcomes: Vec<GeneralOutcome>,
    pub consensus: Order,
    pub commander_faulty: bool,
}

/// Wires the pieces together: draws the fault set, builds the relay tree,
/// runs the decision pass and collects the report.
#[derive(Debug)]
pub struct Simulation {
    config: SimulationConfig,
    rng: StdRng,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self, SimulationError> {
        if config.num_generals == 0 {
            return Err(SimulationError::NoGenerals);
        }
        // 3m <= n, phrased as a division so huge m cannot overflow
        if config.num_faulty > config.num_generals / 3 {
            return Err(SimulationError::TooManyFaulty {
                num_generals: config.num_generals,
                num_faulty: config.num_faulty,
            });
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Simulation { config, rng })
    }

    /// Draw a fault set and play the run out.
    pub fn run(&mut self) -> SimulationReport {
        let faults = FaultSet::draw(
            &mut self.rng,
            self.config.num_generals,
            self.config.num_faulty,
        );
        info!(
            num_generals = self.config.num_generals,
            num_faulty = self.config.num_faulty,
            order = %self.config.order,
            faulty_ids = ?faults.sorted_ids(),
            "starting simulation"
        );
        self.run_with_faults(&faults)
    }

    /// Deterministic core: everything after the fault-set draw.
    pub fn run_with_faults(&self, faults: &FaultSet) -> SimulationReport {
        let mut tree = RelayTree::disseminate(
            self.config.num_generals,
            self.config.num_faulty,
            self.config.order,
            faults,
        );
        let consensus = tree.decide();

        // Each lieutenant's decision is the decision of its first-round
        // node, the root's direct child it owns
        let outcomes = tree
            .root()
            .children
            .iter()
            .map(|&idx| {
                let node = &tree.nodes[idx];
                GeneralOutcome {
                    id: node.owner,
                    faulty: faults.is_faulty(node.owner),
                    decision: node.decision.expect("decision pass filled every node"),
                }
            })
            .collect();

        info!(consensus = %consensus, "simulation finished");

        SimulationReport {
            outcomes,
            consensus,
            commander_faulty: faults.is_faulty(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(num_generals: usize, num_faulty: usize, order: Order) -> SimulationConfig {
        SimulationConfig {
            num_generals,
            num_faulty,
            order,
            seed: Some(0),
        }
    }

    #[test]
    fn test_rejects_too_many_faulty() {
        let err = Simulation::new(config(4, 2, Order::Attack)).unwrap_err();
        assert_eq!(
            err,
            SimulationError::TooManyFaulty {
                num_generals: 4,
                num_faulty: 2,
            }
        );
    }

    #[test]
    fn test_rejects_huge_faulty_count_without_overflow() {
        // Large enough that 3 * m would wrap around usize
        let num_faulty = usize::MAX / 3 + 1;
        let err = Simulation::new(config(4, num_faulty, Order::Attack)).unwrap_err();
        assert_eq!(
            err,
            SimulationError::TooManyFaulty {
                num_generals: 4,
                num_faulty,
            }
        );
    }

    #[test]
    fn test_rejects_zero_generals() {
        let err = Simulation::new(config(0, 0, Order::Attack)).unwrap_err();
        assert_eq!(err, SimulationError::NoGenerals);
    }

    #[test]
    fn test_bound_is_inclusive() {
        // 3 * 2 == 6 is allowed
        assert!(Simulation::new(config(6, 2, Order::Attack)).is_ok());
    }

    #[test]
    fn test_zero_faulty_everyone_obeys() {
        let mut sim = Simulation::new(config(5, 0, Order::Retreat)).unwrap();
        let report = sim.run();
        assert_eq!(report.consensus, Order::Retreat);
        assert_eq!(report.outcomes.len(), 4);
        for outcome in &report.outcomes {
            assert!(!outcome.faulty);
            assert_eq!(outcome.decision, Order::Retreat);
        }
    }

    #[test]
    fn test_commander_alone() {
        let mut sim = Simulation::new(config(1, 0, Order::Attack)).unwrap();
        let report = sim.run();
        assert!(report.outcomes.is_empty());
        assert_eq!(report.consensus, Order::Attack);
        assert!(!report.commander_faulty);
    }

    #[test]
    fn test_same_seed_same_report() {
        let run = |seed| {
            let mut sim = Simulation::new(SimulationConfig {
                num_generals: 7,
                num_faulty: 2,
                order: Order::Attack,
                seed: Some(seed),
            })
            .unwrap();
            sim.run()
        };
        let a = run(99);
        let b = run(99);
        assert_eq!(a.consensus, b.consensus);
        assert_eq!(a.outcomes, b.outcomes);
        assert_eq!(a.commander_faulty, b.commander_faulty);
    }

    #[test]
    fn test_outcomes_cover_every_lieutenant_in_order() {
        let mut sim = Simulation::new(config(7, 2, Order::Attack)).unwrap();
        let report = sim.run();
        let ids: Vec<_> = report.outcomes.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }
}
