use sweeper_common::models::{CellState, GameState, Tile};

use crate::data::Cell;

/// Picks the tile a renderer should draw for `cell`.
///
/// `adjacent` is the count the player sees, already adjusted for countdown
/// mode. Once the game is over every bomb is shown, and correctly flagged
/// bombs get their own tile.
pub fn select_tile(
    cell: &Cell,
    adjacent: u8,
    state: GameState,
    countdown: bool,
    hovered: bool,
) -> Tile {
    if state.is_terminal() && cell.bomb && cell.state != CellState::Uncovered {
        return match cell.state {
            CellState::Flagged => Tile::FlaggedBomb,
            _ => Tile::Bomb,
        };
    }

    match cell.state {
        CellState::Covered if hovered && !state.is_terminal() => Tile::CoveredHover,
        CellState::Covered => Tile::Covered,
        CellState::Flagged if countdown => Tile::FlagCountdown,
        CellState::Flagged => Tile::Flag,
        CellState::Questioned => Tile::Question,
        CellState::Uncovered if cell.bomb => Tile::Bomb,
        CellState::Uncovered if adjacent > 0 => Tile::Count(adjacent),
        CellState::Uncovered => Tile::Empty,
    }
}
