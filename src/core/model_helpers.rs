use std::sync::Arc;

use crate::core::models::{Block, Direction, GameState, Level, Vec2};
use crate::core::rules::{HoleRule, MoveRules};
use crate::core::tiles::TileType;

impl Direction {
    /// Every direction that can produce a move, in wire-code order.
    pub const MOVES: [Direction; 4] = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];

    pub fn offset(self) -> Vec2 {
        match self {
            Direction::None => Vec2 { x: 0, y: 0 },
            Direction::Left => Vec2 { x: -1, y: 0 },
            Direction::Up => Vec2 { x: 0, y: -1 },
            Direction::Right => Vec2 { x: 1, y: 0 },
            Direction::Down => Vec2 { x: 0, y: 1 },
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::None => Direction::None,
            Direction::Left => Direction::Right,
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
        }
    }

    pub fn code(self) -> char {
        match self {
            Direction::None => '0',
            Direction::Left => '1',
            Direction::Up => '2',
            Direction::Right => '3',
            Direction::Down => '4',
        }
    }

    pub fn from_code(code: char) -> Option<Direction> {
        Some(match code {
            '0' => Direction::None,
            '1' => Direction::Left,
            '2' => Direction::Up,
            '3' => Direction::Right,
            '4' => Direction::Down,
            _ => return None,
        })
    }
}

impl GameState {
    pub fn tile_at(&self, pos: &Vec2) -> Option<TileType> {
        self.board.get(pos).copied()
    }

    pub fn live_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| !b.consumed)
    }

    pub fn live_block_index_at(&self, pos: &Vec2) -> Option<usize> {
        self.blocks.iter().position(|b| !b.consumed && b.pos == *pos)
    }

    pub fn block(&self, id: u32) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// A hole counts as filled when a consumed block rests in it and holes fill under `rules`.
    pub fn is_hole_filled(&self, pos: &Vec2, rules: &MoveRules) -> bool {
        rules.hole_rule == HoleRule::FillToGround
            && self.blocks.iter().any(|b| b.consumed && b.pos == *pos)
    }

    pub fn is_player_on_exit(&self) -> bool {
        self.tile_at(&self.pos) == Some(TileType::Exit)
    }

    pub fn directions(&self) -> Vec<Direction> {
        self.moves.iter().map(|m| m.direction).collect()
    }
}

impl Level {
    pub fn initial_state(&self) -> GameState {
        GameState {
            action_count: 0,
            blocks: self.initial_blocks.clone(),
            board: Arc::clone(&self.board),
            height: self.height,
            move_count: 0,
            moves: Vec::new(),
            pos: self.start,
            width: self.width,
        }
    }
}
