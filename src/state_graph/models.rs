use std::collections::{HashMap, VecDeque};

use crate::core::{Direction, GameChangeType, GameState};
use crate::state_graph::unique_node::UniqueNode;

#[derive(Clone)]
pub struct StateGraph {
    // map from unique state to node id
    pub nodes: bimap::BiMap<UniqueNode, usize>,
    pub edges: Vec<Edge>,
    // breadth-first queue of node ids whose successors are not yet known
    pub unvisited: VecDeque<usize>,
    // a concrete snapshot for every unvisited node
    pub frontier: HashMap<usize, GameState>,
    pub solved: Vec<usize>,
    pub next_id: usize,
}

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    pub game_change_type: GameChangeType,
}

pub enum PopulateResult {
    AllVisited,
    Populated,
}
