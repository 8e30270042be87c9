use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::Direction;

/// Behavior of one board cell. Fixed once a level is decoded.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum TileType {
    #[default]
    Default,
    Wall,
    Exit,
    Start,
    Hole,
    /// Can only be entered and left while travelling along the arrow.
    OneWay(Arrow),
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Arrow {
    Left,
    Up,
    Right,
    Down,
}

impl Arrow {
    pub fn direction(self) -> Direction {
        match self {
            Arrow::Left => Direction::Left,
            Arrow::Up => Direction::Up,
            Arrow::Right => Direction::Right,
            Arrow::Down => Direction::Down,
        }
    }
}

impl TileType {
    pub fn can_enter(self, direction: Direction) -> bool {
        match self {
            TileType::Wall => false,
            TileType::OneWay(arrow) => arrow.direction() == direction,
            TileType::Default | TileType::Exit | TileType::Start | TileType::Hole => true,
        }
    }

    pub fn can_exit(self, direction: Direction) -> bool {
        match self {
            TileType::Wall => false,
            TileType::OneWay(arrow) => arrow.direction() == direction,
            TileType::Default | TileType::Exit | TileType::Start | TileType::Hole => true,
        }
    }

    pub fn code(self) -> char {
        match self {
            TileType::Default => '0',
            TileType::Wall => '1',
            TileType::Exit => '3',
            TileType::Start => '4',
            TileType::Hole => '5',
            TileType::OneWay(Arrow::Left) => '<',
            TileType::OneWay(Arrow::Up) => '^',
            TileType::OneWay(Arrow::Right) => '>',
            TileType::OneWay(Arrow::Down) => 'v',
        }
    }

    pub fn from_code(code: char) -> Option<TileType> {
        Some(match code {
            '0' => TileType::Default,
            '1' => TileType::Wall,
            '3' => TileType::Exit,
            '4' => TileType::Start,
            '5' => TileType::Hole,
            '<' => TileType::OneWay(Arrow::Left),
            '^' => TileType::OneWay(Arrow::Up),
            '>' => TileType::OneWay(Arrow::Right),
            'v' => TileType::OneWay(Arrow::Down),
            _ => return None,
        })
    }
}

const LEFT: u8 = 1;
const UP: u8 = 2;
const RIGHT: u8 = 4;
const DOWN: u8 = 8;

const BLOCK_CODES: [(char, u8); 15] = [
    ('2', LEFT | UP | RIGHT | DOWN),
    ('6', LEFT),
    ('7', UP),
    ('8', RIGHT),
    ('9', DOWN),
    ('A', UP | LEFT),
    ('B', UP | RIGHT),
    ('C', DOWN | RIGHT),
    ('D', DOWN | LEFT),
    ('E', UP | RIGHT | DOWN),
    ('F', LEFT | RIGHT | DOWN),
    ('G', LEFT | UP | DOWN),
    ('H', LEFT | UP | RIGHT),
    ('I', LEFT | RIGHT),
    ('J', UP | DOWN),
];

fn direction_bit(direction: Direction) -> u8 {
    match direction {
        Direction::None => 0,
        Direction::Left => LEFT,
        Direction::Up => UP,
        Direction::Right => RIGHT,
        Direction::Down => DOWN,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown block code {0:?}")]
pub struct UnknownBlockCode(pub char);

/// The set of directions a block may be pushed in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub struct BlockKind {
    pushable: u8,
}

impl BlockKind {
    pub const FREE: BlockKind = BlockKind { pushable: LEFT | UP | RIGHT | DOWN };

    pub fn can_push(self, direction: Direction) -> bool {
        self.pushable & direction_bit(direction) != 0
    }

    pub fn code(self) -> char {
        BLOCK_CODES
            .iter()
            .find(|&&(_, mask)| mask == self.pushable)
            .map(|&(code, _)| code)
            .unwrap_or('2')
    }

    pub fn from_code(code: char) -> Option<BlockKind> {
        BLOCK_CODES
            .iter()
            .find(|&&(c, _)| c == code)
            .map(|&(_, pushable)| BlockKind { pushable })
    }
}

impl From<BlockKind> for char {
    fn from(kind: BlockKind) -> char {
        kind.code()
    }
}

impl TryFrom<char> for BlockKind {
    type Error = UnknownBlockCode;

    fn try_from(code: char) -> Result<Self, Self::Error> {
        BlockKind::from_code(code).ok_or(UnknownBlockCode(code))
    }
}

/// What a single level-source character places in its cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CellCode {
    Tile(TileType),
    /// A block standing on ground.
    Block(BlockKind),
}

impl CellCode {
    pub fn from_code(code: char) -> Option<CellCode> {
        TileType::from_code(code)
            .map(CellCode::Tile)
            .or_else(|| BlockKind::from_code(code).map(CellCode::Block))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use Direction::*;

    #[test]
    fn ground_like_tiles_allow_every_direction() {
        for tile in [TileType::Default, TileType::Start, TileType::Exit] {
            for direction in [Left, Up, Right, Down] {
                assert!(tile.can_enter(direction), "{:?} {:?}", tile, direction);
                assert!(tile.can_exit(direction), "{:?} {:?}", tile, direction);
            }
        }
    }

    #[test]
    fn wall_forbids_everything() {
        for direction in [Left, Up, Right, Down] {
            assert!(!TileType::Wall.can_enter(direction));
            assert!(!TileType::Wall.can_exit(direction));
        }
    }

    #[test]
    fn one_way_tile_only_passes_its_arrow() {
        let tile = TileType::OneWay(Arrow::Right);
        assert!(tile.can_enter(Right));
        assert!(tile.can_exit(Right));
        assert!(!tile.can_enter(Left));
        assert!(!tile.can_exit(Up));
        assert!(!tile.can_enter(Down));
    }

    #[test]
    fn every_one_way_tile_survives_its_code() {
        for arrow in [Arrow::Left, Arrow::Up, Arrow::Right, Arrow::Down] {
            let tile = TileType::OneWay(arrow);
            assert_ne!(arrow.direction(), None);
            assert_eq!(TileType::from_code(tile.code()), Some(tile));
            assert!(!tile.can_enter(None) && !tile.can_exit(None));
        }
    }

    #[test]
    fn block_codes_match_push_directions() {
        let up_right = BlockKind::from_code('B').unwrap();
        assert!(up_right.can_push(Up));
        assert!(up_right.can_push(Right));
        assert!(!up_right.can_push(Left));
        assert!(!up_right.can_push(Down));

        let not_left = BlockKind::from_code('E').unwrap();
        assert!(!not_left.can_push(Left));
        assert!(not_left.can_push(Up) && not_left.can_push(Right) && not_left.can_push(Down));

        assert!(!BlockKind::FREE.can_push(None));
        assert_eq!(BlockKind::FREE.code(), '2');
    }

    #[test]
    fn every_code_maps_to_exactly_one_cell() {
        for code in "0123456789ABCDEFGHIJ<^>v".chars() {
            let cell = CellCode::from_code(code).unwrap();
            let round = match cell {
                CellCode::Tile(tile) => tile.code(),
                CellCode::Block(kind) => kind.code(),
            };
            assert_eq!(round, code);
        }
        assert_eq!(CellCode::from_code('K'), Option::None);
        assert_eq!(CellCode::from_code(' '), Option::None);
    }
}
