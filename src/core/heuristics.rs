use crate::core::models::{GameState, Vec2};
use crate::core::tiles::TileType;

#[derive(Eq, PartialEq, Debug)]
pub enum WinnableState {
    WinMaybePossible,
    WinImpossible,
}

const DIRECTIONS_AROUND: [Vec2; 4] = [
    Vec2 { x: 1, y: 0 },
    Vec2 { x: 0, y: 1 },
    Vec2 { x: -1, y: 0 },
    Vec2 { x: 0, y: -1 },
];

/// Whether enough blocks can still reach (or already sit on) exits to cover every exit.
pub fn is_winnable(game: &GameState) -> WinnableState {
    let total_exits = game
        .board
        .iter()
        .filter(|&(_, &tile)| tile == TileType::Exit)
        .count();

    let total_free_blocks = game
        .live_blocks()
        .filter(|block| !is_block_trapped(game, block.pos))
        .count();

    if total_free_blocks >= total_exits {
        WinnableState::WinMaybePossible
    } else {
        WinnableState::WinImpossible
    }
}

/// a block is trapped if the player can never move it, and it is not on an exit
fn is_block_trapped(game: &GameState, block: Vec2) -> bool {
    if game.tile_at(&block) == Some(TileType::Exit) {
        return false;
    }

    // if any 2 consecutive directions are blocked, then we are in a corner, and we are trapped
    let blocked_directions = DIRECTIONS_AROUND.map(|dir| {
        game.tile_at(&(block + dir))
            .is_none_or(|tile| tile == TileType::Wall)
    });

    (0..4).any(|i| blocked_directions[i] && blocked_directions[(i + 1) % 4])
}
