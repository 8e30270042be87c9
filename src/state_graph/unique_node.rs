use crate::core::{BlockKind, GameState, HoleRule, MoveRules, Vec2, DEDUPLICATE_BLOCKS};

/// The parts of a snapshot that decide what can happen next. History is ignored.
#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub struct UniqueNode {
    pub environment: GameStateEnvironment,
    pub player: Vec2,
}

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub struct GameStateEnvironment {
    live_blocks: Vec<(Vec2, BlockKind)>,
    filled_holes: Vec<Vec2>,
}

impl GameStateEnvironment {
    pub fn new(game: &GameState, rules: &MoveRules) -> Self {
        let mut live_blocks: Vec<(Vec2, BlockKind)> = game
            .live_blocks()
            .map(|b| (b.pos, b.kind))
            .collect();
        if DEDUPLICATE_BLOCKS {
            live_blocks.sort_unstable();
        }

        let mut filled_holes: Vec<Vec2> = match rules.hole_rule {
            HoleRule::FillToGround => game
                .blocks
                .iter()
                .filter(|b| b.consumed)
                .map(|b| b.pos)
                .collect(),
            HoleRule::Persistent => Vec::new(),
        };
        filled_holes.sort_unstable();
        filled_holes.dedup();

        GameStateEnvironment {
            live_blocks,
            filled_holes,
        }
    }

    pub fn iter_blocks(&self) -> impl Iterator<Item = &(Vec2, BlockKind)> {
        self.live_blocks.iter()
    }

    pub fn filled_holes(&self) -> &[Vec2] {
        &self.filled_holes
    }
}

impl UniqueNode {
    pub fn from_game_state(game: &GameState, rules: &MoveRules) -> Self {
        UniqueNode {
            environment: GameStateEnvironment::new(game, rules),
            player: game.pos,
        }
    }
}

/// Drops the move history so frontier snapshots stay small.
pub fn without_history(mut game: GameState) -> GameState {
    game.moves.clear();
    game.move_count = 0;
    game.action_count = 0;
    game
}
