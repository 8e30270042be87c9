use std::sync::Arc;

use crate::core::models::{Direction, GameState, Level};
use crate::core::replay::Checkpoint;
use crate::core::rules::MoveRules;
use crate::core::solve_rules::{GameVariant, SolveRule};
use crate::core::update::{apply_move, restart, undo};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionUpdate {
    pub changed: bool,
    pub solved: bool,
}

/// One player's play-through of one level.
///
/// Owns the current snapshot and a redo stack; re-evaluates the variant's solve rule after
/// every call so the caller never has to.
pub struct GameSession {
    level: Arc<Level>,
    rules: MoveRules,
    solve_rule: Box<dyn SolveRule>,
    state: GameState,
    redo: Vec<Direction>,
}

impl GameSession {
    pub fn new(level: Arc<Level>, variant: GameVariant) -> Self {
        Self::with_rules(level, variant.rules(), variant.solve_rule())
    }

    pub fn with_rules(level: Arc<Level>, rules: MoveRules, solve_rule: Box<dyn SolveRule>) -> Self {
        let state = level.initial_state();
        GameSession {
            level,
            rules,
            solve_rule,
            state,
            redo: Vec::new(),
        }
    }

    pub fn resume(mut self, state: GameState) -> Self {
        self.state = state;
        self.redo.clear();
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn rules(&self) -> &MoveRules {
        &self.rules
    }

    pub fn is_solved(&self) -> bool {
        self.solve_rule.is_solved(&self.state)
    }

    pub fn apply(&mut self, direction: Direction) -> SessionUpdate {
        let result = apply_move(&self.state, direction, &self.rules);
        if result.applied {
            self.state = result.state;
            if self.redo.last() == Some(&direction) {
                self.redo.pop();
            } else {
                self.redo.clear();
            }
        }
        self.update(result.applied)
    }

    pub fn undo(&mut self) -> SessionUpdate {
        let Some(last) = self.state.moves.last() else {
            return self.update(false);
        };
        self.redo.push(last.direction);
        self.state = undo(&self.state);
        self.update(true)
    }

    pub fn redo(&mut self) -> SessionUpdate {
        let Some(&direction) = self.redo.last() else {
            return self.update(false);
        };
        self.apply(direction)
    }

    pub fn restart(&mut self) -> SessionUpdate {
        let initial = restart(&self.level);
        let changed = self.state != initial;
        self.state = initial;
        self.redo.clear();
        self.update(changed)
    }

    pub fn checkpoint(&self, level_id: impl Into<String>) -> Checkpoint {
        Checkpoint::capture(level_id, &self.state)
    }

    fn update(&self, changed: bool) -> SessionUpdate {
        SessionUpdate {
            changed,
            solved: self.is_solved(),
        }
    }
}
