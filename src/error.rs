use thiserror::Error;

/// Configuration failures caught before any simulation work runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The oral-message bound: at most a third of the generals may be
    /// faulty.
    #[error(
        "too many faulty generals: {num_faulty} of {num_generals}, \
         at most a third of the generals may be faulty"
    )]
    TooManyFaulty {
        num_generals: usize,
        num_faulty: usize,
    },

    #[error("at least one general is required")]
    NoGenerals,
}
