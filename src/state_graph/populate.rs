use std::hint::black_box;

use crate::core::{step, Direction, GameState, GameUpdate, MoveRules, SolveRule, PRUNE_DEAD_ENDS};
use crate::state_graph::models::{Edge, PopulateResult, StateGraph};

pub fn populate_node(
    graph: &mut StateGraph,
    from_id: usize,
    from_state: &GameState,
    rules: &MoveRules,
    solve_rule: &dyn SolveRule,
) {
    if black_box(PRUNE_DEAD_ENDS) && solve_rule.is_dead_end(from_state) {
        return;
    }

    for direction in Direction::MOVES {
        let update = step(from_state, direction, rules);
        if let GameUpdate::NextState(new_state, change_type) = update {
            let to_id = graph.upsert_state(new_state, rules, solve_rule);
            graph.add_edge(Edge {
                from: from_id,
                to: to_id,
                direction,
                game_change_type: change_type,
            });
        }
    }
}

pub fn populate_step(graph: &mut StateGraph, rules: &MoveRules, solve_rule: &dyn SolveRule) -> PopulateResult {
    let Some((node_id, state)) = graph.take_unvisited() else {
        return PopulateResult::AllVisited;
    };
    populate_node(graph, node_id, &state, rules, solve_rule);
    PopulateResult::Populated
}
