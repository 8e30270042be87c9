use std::sync::Arc;

use crate::core::models::{
    BlockPush, Direction, GameChangeType, GameState, GameUpdate, Level, Move, MoveRejection, MoveResult,
};
use crate::core::rules::{ActionCounting, MoveRules};
use crate::core::tiles::TileType;

/// Computes the snapshot that follows `game` when the player moves in `direction`.
///
/// The input is never modified. Illegal moves come back as [`GameUpdate::Rejected`] naming
/// the rule that stopped them.
pub fn step(game: &GameState, direction: Direction, rules: &MoveRules) -> GameUpdate {
    use GameUpdate::Rejected;

    if direction == Direction::None {
        return Rejected(MoveRejection::NoDirection);
    }

    let Some(here) = game.tile_at(&game.pos) else {
        return Rejected(MoveRejection::OutOfBounds);
    };
    if rules.freeze_on_exit && here == TileType::Exit {
        return Rejected(MoveRejection::LevelComplete);
    }
    if !here.can_exit(direction) {
        return Rejected(MoveRejection::TileLocked);
    }

    let offset = direction.offset();
    let target = game.pos + offset;
    let Some(target_tile) = game.tile_at(&target) else {
        return Rejected(MoveRejection::OutOfBounds);
    };
    if target_tile == TileType::Wall {
        return Rejected(MoveRejection::Wall);
    }
    if !target_tile.can_enter(direction) {
        return Rejected(MoveRejection::TileLocked);
    }
    if target_tile == TileType::Hole && !game.is_hole_filled(&target, rules) {
        return Rejected(MoveRejection::Hole);
    }

    let mut push = None;
    if let Some(index) = game.live_block_index_at(&target) {
        let block = game.blocks[index];
        if !block.kind.can_push(direction) {
            return Rejected(MoveRejection::BlockLocked);
        }
        if !target_tile.can_exit(direction) {
            return Rejected(MoveRejection::TileLocked);
        }

        let push_to = target + offset;
        let Some(push_tile) = game.tile_at(&push_to) else {
            return Rejected(MoveRejection::BlockBlocked);
        };
        if push_tile == TileType::Wall
            || !push_tile.can_enter(direction)
            || game.live_block_index_at(&push_to).is_some()
        {
            return Rejected(MoveRejection::BlockBlocked);
        }

        let consumed = push_tile == TileType::Hole && !game.is_hole_filled(&push_to, rules);
        push = Some((index, BlockPush {
            id: block.id,
            from: target,
            to: push_to,
            consumed,
        }));
    }

    let counts_as_action = match rules.action_counting {
        ActionCounting::EveryMove => true,
        ActionCounting::SkipBacktracks => !is_backtrack(game, direction, push.is_some()),
    };

    let mut blocks = game.blocks.clone();
    if let Some((index, push)) = &push {
        blocks[*index].pos = push.to;
        blocks[*index].consumed = push.consumed;
    }

    let mut moves = Vec::with_capacity(game.moves.len() + 1);
    moves.extend_from_slice(&game.moves);
    moves.push(Move {
        direction,
        player_from: game.pos,
        player_to: target,
        block: push.map(|(_, push)| push),
        counts_as_action,
    });

    let change_type = match push {
        None => GameChangeType::PlayerMove,
        Some((_, push)) if push.consumed => GameChangeType::BlockConsumed,
        Some(_) => GameChangeType::PlayerAndBlockMove,
    };

    GameUpdate::NextState(
        GameState {
            action_count: game.action_count + counts_as_action as u32,
            blocks,
            board: Arc::clone(&game.board),
            height: game.height,
            move_count: game.move_count + 1,
            moves,
            pos: target,
            width: game.width,
        },
        change_type,
    )
}

/// A plain step straight back along the previous plain step.
fn is_backtrack(game: &GameState, direction: Direction, pushing: bool) -> bool {
    if pushing {
        return false;
    }
    game.moves
        .last()
        .is_some_and(|last| last.block.is_none() && last.direction == direction.opposite())
}

/// A rejected move returns an equal copy of the input.
pub fn apply_move(game: &GameState, direction: Direction, rules: &MoveRules) -> MoveResult {
    match step(game, direction, rules) {
        GameUpdate::NextState(state, _) => MoveResult { state, applied: true },
        GameUpdate::Rejected(_) => MoveResult {
            state: game.clone(),
            applied: false,
        },
    }
}

/// Reverses the most recent move exactly. No-op on an empty history.
pub fn undo(game: &GameState) -> GameState {
    let mut previous = game.clone();
    let Some(last) = previous.moves.pop() else {
        return previous;
    };

    previous.pos = last.player_from;
    if let Some(push) = last.block {
        if let Some(block) = previous.blocks.iter_mut().find(|b| b.id == push.id) {
            block.pos = push.from;
            if push.consumed {
                block.consumed = false;
            }
        }
    }
    previous.move_count = previous.move_count.saturating_sub(1);
    if last.counts_as_action {
        previous.action_count = previous.action_count.saturating_sub(1);
    }
    previous
}

/// Discards all history and returns the level's initial snapshot.
pub fn restart(level: &Level) -> GameState {
    level.initial_state()
}
