/// Treat blocks of the same kind as interchangeable when identifying explored states.
pub const DEDUPLICATE_BLOCKS: bool = true;
pub const PRUNE_DEAD_ENDS: bool = true;

pub const DEFAULT_MAX_SOLVER_NODES: usize = 250_000;

/// Fields an externally supplied game state must carry, no more and no fewer.
pub const STATE_PAYLOAD_FIELDS: [&str; 8] = [
    "actionCount",
    "blocks",
    "board",
    "height",
    "moveCount",
    "moves",
    "pos",
    "width",
];
