use std::ops::{Add, Sub};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::bounded_grid::BoundedGrid;
use crate::core::tiles::{BlockKind, TileType};

/// The static tile layout of a level. Shared by every snapshot derived from that level.
pub type Board = BoundedGrid<TileType>;

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Vec2 {
    pub const fn new(x: i32, y: i32) -> Self {
        Vec2 { x, y }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2 { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    None,
    Left,
    Up,
    Right,
    Down,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Block {
    pub id: u32,
    pub pos: Vec2,
    pub kind: BlockKind,
    /// Set once the block drops into a hole. `pos` then stays at the hole.
    pub consumed: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BlockPush {
    pub id: u32,
    pub from: Vec2,
    pub to: Vec2,
    /// True when this push dropped the block into a hole.
    pub consumed: bool,
}

/// One applied move, recorded with everything needed to reverse it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Move {
    pub direction: Direction,
    pub player_from: Vec2,
    pub player_to: Vec2,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<BlockPush>,
    pub counts_as_action: bool,
}

/// One immutable snapshot of play.
///
/// `board` is shared with the level and every other snapshot. `blocks`, `pos` and `moves`
/// belong to this snapshot alone; the move engine builds a fresh value per transition.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GameState {
    pub action_count: u32,
    pub blocks: Vec<Block>,
    pub board: Arc<Board>,
    pub height: i32,
    pub move_count: u32,
    pub moves: Vec<Move>,
    pub pos: Vec2,
    pub width: i32,
}

/// A decoded level. Never mutated after decoding.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Level {
    pub board: Arc<Board>,
    pub initial_blocks: Vec<Block>,
    pub start: Vec2,
    pub width: i32,
    pub height: i32,
}

#[derive(Clone, Debug)]
pub enum GameUpdate {
    NextState(GameState, GameChangeType),
    Rejected(MoveRejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndBlockMove,
    BlockConsumed,
}

/// Why a move was not applied. Rejections are ordinary outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveRejection {
    NoDirection,
    LevelComplete,
    OutOfBounds,
    Wall,
    Hole,
    TileLocked,
    BlockLocked,
    BlockBlocked,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveResult {
    pub state: GameState,
    pub applied: bool,
}
