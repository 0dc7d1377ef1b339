pub mod decision;
pub mod faults;
pub mod order;
pub mod runner;
pub mod tree;

pub use faults::*;
pub use order::*;
pub use runner::*;
pub use tree::*;
