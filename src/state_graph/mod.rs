mod graph;
mod models;
mod populate;
mod solve;
mod unique_node;

pub use models::{Edge, PopulateResult, StateGraph};
pub use populate::{populate_node, populate_step};
pub use solve::{convert_to_petgraph, solve, solve_with, Solution, SolveError, SolverConfig};
pub use unique_node::{GameStateEnvironment, UniqueNode};
