use sweeper_common::models::{CellState, Pos};

use crate::{data::Board, error::Result};

/// Advances the annotation on a covered cell:
/// covered, flagged, questioned, then back to covered.
///
/// Returns the new state, or `None` when the cell is already uncovered and
/// nothing changed.
pub fn cycle_mark(board: &mut Board, pos: Pos) -> Result<Option<CellState>> {
    let next = match board.get(pos)?.state {
        CellState::Covered => CellState::Flagged,
        CellState::Flagged => CellState::Questioned,
        CellState::Questioned => CellState::Covered,
        CellState::Uncovered => return Ok(None),
    };

    board.set_state(pos, next)?;
    Ok(Some(next))
}
