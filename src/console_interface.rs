use crate::core::{GameState, MoveRules, TileType, Vec2};

/// Renders a snapshot in level code characters.
///
/// The player is drawn as the start code and live blocks with their block codes. The start
/// tile reads as ground once the player has left it, and a filled hole reads as ground, so
/// the initial snapshot renders exactly as the encoded level.
pub fn render_game_to_string(game: &GameState, rules: &MoveRules) -> String {
    let mut result = String::new();
    for y in 0..game.height {
        for x in 0..game.width {
            let pos = Vec2 { x, y };
            result.push(render_cell(game, rules, &pos));
        }
        result.push('\n');
    }
    result
}

fn render_cell(game: &GameState, rules: &MoveRules, pos: &Vec2) -> char {
    if *pos == game.pos {
        return TileType::Start.code();
    }
    if let Some(index) = game.live_block_index_at(pos) {
        return game.blocks[index].kind.code();
    }
    match game.board[pos] {
        TileType::Start => TileType::Default.code(),
        TileType::Hole if game.is_hole_filled(pos, rules) => TileType::Default.code(),
        tile => tile.code(),
    }
}
