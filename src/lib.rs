/*
    The Byzantine Generals problem: a commanding general must send an order
    to n-1 lieutenants such that all loyal lieutenants obey the same order,
    and if the commander is loyal, every loyal lieutenant obeys the order
    it sent. Traitors, the commander possibly among them, may relay
    whatever they like. The oral message algorithm OM(m) solves this for n
    generals and m traitors whenever 3m <= n, by recursively relaying the
    order and taking majority votes over what was heard.

    This crate simulates one run of OM(m): a random subset of generals is
    marked faulty, the relay rounds are played out as an in-memory tree,
    and a bottom-up majority vote produces each lieutenant's decision and
    the commander's consensus value.
*/

pub mod error;
pub mod simulation;

pub use error::SimulationError;
pub use simulation::{
    FaultSet, GeneralId, GeneralOutcome, Order, RelayNode, RelayTree, Simulation,
    SimulationConfig, SimulationReport,
};
