use std::collections::{HashMap, HashSet};

use petgraph::algo::astar;
use petgraph::graph::NodeIndex;
use petgraph::Directed;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::{Direction, GameVariant, Level, MoveRules, SolveRule, DEFAULT_MAX_SOLVER_NODES};
use crate::state_graph::models::{PopulateResult, StateGraph};
use crate::state_graph::populate::populate_step;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Give up once this many distinct states have been discovered.
    pub max_nodes: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig {
            max_nodes: DEFAULT_MAX_SOLVER_NODES,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    pub directions: Vec<Direction>,
    pub explored: usize,
}

impl Solution {
    pub fn least_moves(&self) -> usize {
        self.directions.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("level has no solution ({explored} states explored)")]
    Unsolvable { explored: usize },
    #[error("gave up after discovering {limit} states")]
    LimitReached { limit: usize },
}

/// Finds a shortest direction list that takes `level` from its start to a solved state.
pub fn solve(level: &Level, variant: GameVariant, config: &SolverConfig) -> Result<Solution, SolveError> {
    let solve_rule = variant.solve_rule();
    solve_with(level, &variant.rules(), solve_rule.as_ref(), config)
}

pub fn solve_with(
    level: &Level,
    rules: &MoveRules,
    solve_rule: &dyn SolveRule,
    config: &SolverConfig,
) -> Result<Solution, SolveError> {
    let mut graph = StateGraph::new();
    let start_id = graph.upsert_state(level.initial_state(), rules, solve_rule);

    // breadth-first, so the first solved state discovered is a nearest one
    while graph.solved.is_empty() {
        if graph.nodes.len() >= config.max_nodes {
            warn!(limit = config.max_nodes, "state graph limit reached");
            return Err(SolveError::LimitReached {
                limit: config.max_nodes,
            });
        }
        if let PopulateResult::AllVisited = populate_step(&mut graph, rules, solve_rule) {
            break;
        }
    }

    let explored = graph.nodes.len();
    debug!(explored, edges = graph.edges.len(), "state graph populated");
    if graph.solved.is_empty() {
        return Err(SolveError::Unsolvable { explored });
    }

    let (petgraph, node_map) = convert_to_petgraph(&graph);
    let goals: HashSet<NodeIndex> = graph.solved.iter().map(|id| node_map[id]).collect();
    let (_, path) = astar(
        &petgraph,
        node_map[&start_id],
        |node| goals.contains(&node),
        |_| 1usize,
        |_| 0,
    )
    .ok_or(SolveError::Unsolvable { explored })?;

    let directions = path
        .windows(2)
        .map(|pair| petgraph.find_edge(pair[0], pair[1]).map(|edge| petgraph[edge]))
        .collect::<Option<Vec<Direction>>>()
        .ok_or(SolveError::Unsolvable { explored })?;

    Ok(Solution { directions, explored })
}

/// Copies the graph into petgraph, node ids in ascending order so results are reproducible.
pub fn convert_to_petgraph(
    graph: &StateGraph,
) -> (petgraph::Graph<usize, Direction, Directed>, HashMap<usize, NodeIndex>) {
    let mut petgraph = petgraph::Graph::new();

    let node_map: HashMap<usize, NodeIndex> = (0..graph.next_id)
        .filter(|id| graph.nodes.contains_right(id))
        .map(|id| (id, petgraph.add_node(id)))
        .collect();

    for edge in &graph.edges {
        if let (Some(&from_index), Some(&to_index)) = (node_map.get(&edge.from), node_map.get(&edge.to)) {
            petgraph.add_edge(from_index, to_index, edge.direction);
        }
    }

    (petgraph, node_map)
}
