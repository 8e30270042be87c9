use std::collections::{HashMap, VecDeque};

use crate::core::{GameState, MoveRules, SolveRule};
use crate::state_graph::models::{Edge, StateGraph};
use crate::state_graph::unique_node::{without_history, UniqueNode};

impl StateGraph {
    pub fn new() -> Self {
        StateGraph {
            nodes: bimap::BiMap::new(),
            edges: Vec::new(),
            unvisited: VecDeque::new(),
            frontier: HashMap::new(),
            solved: Vec::new(),
            next_id: 0,
        }
    }

    pub fn upsert_state(&mut self, game: GameState, rules: &MoveRules, solve_rule: &dyn SolveRule) -> usize {
        let node = UniqueNode::from_game_state(&game, rules);
        if let Some(&id) = self.nodes.get_by_left(&node) {
            return id;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(node, id);

        if solve_rule.is_solved(&game) {
            // nothing after a solved state can be shorter
            self.solved.push(id);
        } else {
            self.unvisited.push_back(id);
            self.frontier.insert(id, without_history(game));
        }
        id
    }

    pub fn get_state(&self, id: usize) -> Option<&UniqueNode> {
        self.nodes.get_by_right(&id)
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Pops the next node to expand, in breadth-first order, with its snapshot.
    pub fn take_unvisited(&mut self) -> Option<(usize, GameState)> {
        while let Some(id) = self.unvisited.pop_front() {
            if let Some(game) = self.frontier.remove(&id) {
                return Some((id, game));
            }
        }
        None
    }
}

impl Default for StateGraph {
    fn default() -> Self {
        Self::new()
    }
}
