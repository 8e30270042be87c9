use std::sync::Arc;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::core::bounds::BoundsOriginRoot;
use crate::core::bounded_grid::BoundedGrid;
use crate::core::models::{Block, Board, Level, Vec2};
use crate::core::tiles::{CellCode, TileType};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("level source is empty")]
    Empty,
    #[error("row {row} is empty")]
    EmptyRow { row: usize },
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },
    #[error("unknown token {token:?} at column {col} of row {row}")]
    UnknownToken { row: usize, col: usize, token: char },
    #[error("level has no start tile")]
    MissingStart,
    #[error("level has {count} start tiles, expected exactly one")]
    MultipleStarts { count: usize },
    #[error("level is {found_width}x{found_height}, declared {width}x{height}")]
    DimensionMismatch {
        width: i32,
        height: i32,
        found_width: i32,
        found_height: i32,
    },
}

/// Decodes a level, one row per line and one code character per cell.
///
/// Malformed input is rejected as a whole; nothing is padded or skipped.
pub fn decode(raw: &str) -> Result<Level, ParseError> {
    let rows = split_rows(raw)?;

    let height = rows.len() as i32;
    let width = rows[0].len() as i32;
    let mut board = BoundedGrid::new(BoundsOriginRoot::new(width, height), TileType::Default);
    let mut initial_blocks = Vec::new();
    let mut starts = Vec::new();

    for (y, row) in rows.iter().enumerate() {
        for (x, &token) in row.iter().enumerate() {
            let pos = Vec2 { x: x as i32, y: y as i32 };
            let cell = CellCode::from_code(token).ok_or(ParseError::UnknownToken {
                row: y,
                col: x,
                token,
            })?;
            match cell {
                CellCode::Tile(tile) => {
                    if tile == TileType::Start {
                        starts.push(pos);
                    }
                    board[&pos] = tile;
                }
                CellCode::Block(kind) => {
                    initial_blocks.push(Block {
                        id: initial_blocks.len() as u32,
                        pos,
                        kind,
                        consumed: false,
                    });
                }
            }
        }
    }

    let start = match starts.as_slice() {
        [] => return Err(ParseError::MissingStart),
        [start] => *start,
        _ => return Err(ParseError::MultipleStarts { count: starts.len() }),
    };

    Ok(Level {
        board: Arc::new(board),
        initial_blocks,
        start,
        width,
        height,
    })
}

/// [`decode`], additionally requiring the grid to match the declared size.
pub fn decode_sized(raw: &str, width: i32, height: i32) -> Result<Level, ParseError> {
    let level = decode(raw)?;
    if level.width != width || level.height != height {
        return Err(ParseError::DimensionMismatch {
            width,
            height,
            found_width: level.width,
            found_height: level.height,
        });
    }
    Ok(level)
}

/// Inverse of [`decode`]. Rows are joined with `\n`, without a trailing newline.
pub fn encode(level: &Level) -> String {
    let mut cells: Vec<char> = level.board.iter().map(|(_, tile)| tile.code()).collect();
    for block in &level.initial_blocks {
        cells[(block.pos.y * level.width + block.pos.x) as usize] = block.kind.code();
    }
    cells
        .chunks(level.width as usize)
        .map(|row| row.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn split_rows(raw: &str) -> Result<Vec<Vec<char>>, ParseError> {
    if raw.is_empty() {
        return Err(ParseError::Empty);
    }
    check_rows(raw.lines().map(|line| line.chars().collect()).collect())
}

fn check_rows(rows: Vec<Vec<char>>) -> Result<Vec<Vec<char>>, ParseError> {
    let Some(first) = rows.first() else {
        return Err(ParseError::Empty);
    };

    let expected = first.len();
    for (row, cells) in rows.iter().enumerate() {
        if cells.is_empty() {
            return Err(ParseError::EmptyRow { row });
        }
        if cells.len() != expected {
            return Err(ParseError::RaggedRow {
                row,
                expected,
                found: cells.len(),
            });
        }
    }
    Ok(rows)
}

/// Builds a bare tile board from code rows. Block codes are not tiles and are rejected.
pub fn board_from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Board, ParseError> {
    let rows = check_rows(rows.iter().map(|r| r.as_ref().chars().collect()).collect())?;

    let mut board = BoundedGrid::new(
        BoundsOriginRoot::new(rows[0].len() as i32, rows.len() as i32),
        TileType::Default,
    );
    for (y, row) in rows.iter().enumerate() {
        for (x, &token) in row.iter().enumerate() {
            let tile = TileType::from_code(token).ok_or(ParseError::UnknownToken {
                row: y,
                col: x,
                token,
            })?;
            board[&Vec2 { x: x as i32, y: y as i32 }] = tile;
        }
    }
    Ok(board)
}

pub fn board_to_rows(board: &Board) -> Vec<String> {
    board
        .rows()
        .map(|row| row.iter().map(|tile| tile.code()).collect())
        .collect()
}

impl Serialize for BoundedGrid<TileType> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        board_to_rows(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BoundedGrid<TileType> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<String>::deserialize(deserializer)?;
        board_from_rows(&rows).map_err(serde::de::Error::custom)
    }
}
