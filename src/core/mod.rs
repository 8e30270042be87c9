mod bounded_grid;
mod bounds;
mod consts;
mod heuristics;
mod level_codec;
mod model_helpers;
mod models;
mod replay;
mod rules;
mod session;
mod solve_rules;
mod tiles;
mod update;
mod validator;

pub use bounded_grid::BoundedGrid;
pub use bounds::BoundsOriginRoot;
pub use consts::*;
pub use heuristics::{is_winnable, WinnableState};
pub use level_codec::{board_from_rows, board_to_rows, decode, decode_sized, encode, ParseError};
pub use models::{
    Block, BlockPush, Board, Direction, GameChangeType, GameState, GameUpdate, Level, Move,
    MoveRejection, MoveResult, Vec2,
};
pub use replay::{
    deserialize_directions, replay, serialize_directions, verify_claim, Checkpoint,
    CheckpointError, DirectionCodeError, ReplayError,
};
pub use rules::{ActionCounting, HoleRule, MoveRules};
pub use session::{GameSession, SessionUpdate};
pub use solve_rules::{CoverageGoal, GameVariant, SingleGoal, SolveRule};
pub use tiles::{Arrow, BlockKind, CellCode, TileType, UnknownBlockCode};
pub use update::{apply_move, restart, step, undo};
pub use validator::{validate_shape, ShapeValidationError};
