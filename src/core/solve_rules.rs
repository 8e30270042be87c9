use serde::{Deserialize, Serialize};

use crate::core::heuristics::{is_winnable, WinnableState};
use crate::core::models::GameState;
use crate::core::rules::MoveRules;
use crate::core::tiles::TileType;

/// A variant's win condition, evaluated against one snapshot and nothing else.
pub trait SolveRule {
    fn is_solved(&self, game: &GameState) -> bool;

    /// True only when no sequence of moves from `game` can satisfy the rule.
    /// Used to prune exploration; answering `false` is always safe.
    fn is_dead_end(&self, _game: &GameState) -> bool {
        false
    }
}

/// Solved when the player stands on an exit.
#[derive(Clone, Copy, Debug, Default)]
pub struct SingleGoal;

impl SolveRule for SingleGoal {
    fn is_solved(&self, game: &GameState) -> bool {
        game.is_player_on_exit()
    }
}

/// Solved when every exit holds a live block. A board without exits is never solved.
#[derive(Clone, Copy, Debug, Default)]
pub struct CoverageGoal;

impl SolveRule for CoverageGoal {
    fn is_solved(&self, game: &GameState) -> bool {
        let mut exits = game
            .board
            .iter()
            .filter(|&(_, &tile)| tile == TileType::Exit)
            .peekable();
        if exits.peek().is_none() {
            return false;
        }
        exits.all(|(pos, _)| game.live_block_index_at(&pos).is_some())
    }

    fn is_dead_end(&self, game: &GameState) -> bool {
        is_winnable(game) == WinnableState::WinImpossible
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameVariant {
    #[default]
    ReachExit,
    CoverExits,
}

impl GameVariant {
    pub fn rules(self) -> MoveRules {
        match self {
            GameVariant::ReachExit => MoveRules::default(),
            GameVariant::CoverExits => MoveRules {
                freeze_on_exit: false,
                ..MoveRules::default()
            },
        }
    }

    pub fn solve_rule(self) -> Box<dyn SolveRule> {
        match self {
            GameVariant::ReachExit => Box::new(SingleGoal),
            GameVariant::CoverExits => Box::new(CoverageGoal),
        }
    }
}
