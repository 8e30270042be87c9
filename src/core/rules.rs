use serde::{Deserialize, Serialize};

/// What happens to a hole once a block has dropped into it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HoleRule {
    /// The filled hole behaves as ground for the player and every other block.
    #[default]
    FillToGround,
    /// The hole keeps swallowing blocks and is never walkable.
    Persistent,
}

/// Which applied moves add to `action_count`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionCounting {
    #[default]
    EveryMove,
    /// A plain step straight back onto the cell the previous plain step left is not counted.
    SkipBacktracks,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MoveRules {
    pub hole_rule: HoleRule,
    /// Reject every move once the player stands on an exit.
    pub freeze_on_exit: bool,
    pub action_counting: ActionCounting,
}

impl Default for MoveRules {
    fn default() -> Self {
        MoveRules {
            hole_rule: HoleRule::FillToGround,
            freeze_on_exit: true,
            action_counting: ActionCounting::EveryMove,
        }
    }
}
