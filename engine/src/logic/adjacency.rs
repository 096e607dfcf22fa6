use sweeper_common::models::{CellState, Pos};

use crate::{data::Board, error::Result};

/// Number of bombs around `pos` that still need accounting for.
///
/// In countdown mode every flagged neighbor takes one off the total. The
/// result never drops below zero so an over-flagged cell reads as settled and
/// can take part in a flood.
pub fn adjacent_count(board: &Board, pos: Pos, countdown: bool) -> Result<u8> {
    board.get(pos)?;

    let mut total: i32 = 0;
    for neighbor in board.neighbors(pos) {
        let cell = board.get(neighbor)?;
        if countdown && cell.state == CellState::Flagged {
            total -= 1;
        }
        if cell.bomb {
            total += 1;
        }
    }

    Ok(total.max(0) as u8)
}
