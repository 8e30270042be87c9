use serde_json::Value;
use thiserror::Error;

use crate::core::consts::STATE_PAYLOAD_FIELDS;
use crate::core::models::GameState;

#[derive(Debug, Error)]
pub enum ShapeValidationError {
    #[error("payload does not carry exactly the game state fields")]
    Shape,
    #[error("payload fields are malformed: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("moveCount {move_count} does not match {moves} recorded moves")]
    MoveCountMismatch { move_count: u32, moves: usize },
    #[error("board is {board_width}x{board_height} but payload declares {width}x{height}")]
    BoardSizeMismatch {
        width: i32,
        height: i32,
        board_width: i32,
        board_height: i32,
    },
}

/// Shallow structural gate for game states arriving from outside the process.
///
/// Passes only an object whose keys are exactly the game state fields. Says nothing about
/// whether the state is reachable; only a replay establishes that.
pub fn validate_shape(payload: &Value) -> bool {
    let Some(object) = payload.as_object() else {
        return false;
    };
    object.len() == STATE_PAYLOAD_FIELDS.len()
        && STATE_PAYLOAD_FIELDS.iter().all(|field| object.contains_key(*field))
}

impl GameState {
    /// Admits an untrusted payload: shape gate, typed decode, then internal consistency.
    pub fn from_payload(payload: Value) -> Result<GameState, ShapeValidationError> {
        if !validate_shape(&payload) {
            return Err(ShapeValidationError::Shape);
        }
        let game: GameState = serde_json::from_value(payload)?;

        if game.move_count as usize != game.moves.len() {
            return Err(ShapeValidationError::MoveCountMismatch {
                move_count: game.move_count,
                moves: game.moves.len(),
            });
        }
        if game.board.width() != game.width || game.board.height() != game.height {
            return Err(ShapeValidationError::BoardSizeMismatch {
                width: game.width,
                height: game.height,
                board_width: game.board.width(),
                board_height: game.board.height(),
            });
        }
        Ok(game)
    }

    pub fn to_payload(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
