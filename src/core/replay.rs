use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::{Direction, GameState, GameUpdate, Level, MoveRejection};
use crate::core::rules::MoveRules;
use crate::core::update::step;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("move {index} ({direction:?}) was rejected: {reason:?}")]
pub struct ReplayError {
    pub index: usize,
    pub direction: Direction,
    pub reason: MoveRejection,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid direction code {code:?} at offset {offset}")]
pub struct DirectionCodeError {
    pub offset: usize,
    pub code: char,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckpointError {
    #[error("checkpoint belongs to level {stored:?}, not {requested:?}")]
    LevelMismatch { stored: String, requested: String },
    #[error(transparent)]
    Replay(#[from] ReplayError),
}

/// Rebuilds the snapshot reached by playing `directions` from the level's start.
///
/// Every direction must apply. A list that stops applying part way through is corrupt and
/// fails as a whole; no partially replayed state is ever returned.
pub fn replay(level: &Level, directions: &[Direction], rules: &MoveRules) -> Result<GameState, ReplayError> {
    let mut game = level.initial_state();
    for (index, &direction) in directions.iter().enumerate() {
        game = match step(&game, direction, rules) {
            GameUpdate::NextState(next, _) => next,
            GameUpdate::Rejected(reason) => {
                return Err(ReplayError {
                    index,
                    direction,
                    reason,
                })
            }
        };
    }
    Ok(game)
}

/// Replays `directions` and reports whether the result equals `claimed`.
pub fn verify_claim(level: &Level, directions: &[Direction], rules: &MoveRules, claimed: &GameState) -> bool {
    replay(level, directions, rules).is_ok_and(|game| game == *claimed)
}

pub fn serialize_directions(directions: &[Direction]) -> String {
    directions.iter().map(|d| d.code()).collect()
}

pub fn deserialize_directions(encoded: &str) -> Result<Vec<Direction>, DirectionCodeError> {
    encoded
        .chars()
        .enumerate()
        .map(|(offset, code)| Direction::from_code(code).ok_or(DirectionCodeError { offset, code }))
        .collect()
}

mod direction_string {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{deserialize_directions, serialize_directions};
    use crate::core::models::Direction;

    pub fn serialize<S: Serializer>(directions: &[Direction], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&serialize_directions(directions))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Direction>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        deserialize_directions(&encoded).map_err(serde::de::Error::custom)
    }
}

/// A level identity plus the direction list that reconstructs a position in it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Checkpoint {
    pub level_id: String,
    #[serde(with = "direction_string")]
    pub directions: Vec<Direction>,
}

impl Checkpoint {
    pub fn capture(level_id: impl Into<String>, game: &GameState) -> Self {
        Checkpoint {
            level_id: level_id.into(),
            directions: game.directions(),
        }
    }

    pub fn restore(&self, level_id: &str, level: &Level, rules: &MoveRules) -> Result<GameState, CheckpointError> {
        if self.level_id != level_id {
            return Err(CheckpointError::LevelMismatch {
                stored: self.level_id.clone(),
                requested: level_id.to_string(),
            });
        }
        Ok(replay(level, &self.directions, rules)?)
    }

    pub fn restore_or_initial(&self, level_id: &str, level: &Level, rules: &MoveRules) -> GameState {
        self.restore(level_id, level, rules)
            .unwrap_or_else(|_| level.initial_state())
    }
}
