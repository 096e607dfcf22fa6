use tracing::trace;

use sweeper_common::models::{CellState, Pos};

use crate::{data::Board, error::Result, logic::adjacency::adjacent_count};

/// Uncovers `start` and floods outward through every cell whose adjacency
/// count is zero.
///
/// Flagged cells are never uncovered, including `start` itself. Questioned
/// cells are treated like covered ones. Returns how many cells changed to
/// [`CellState::Uncovered`].
pub fn reveal_from(board: &mut Board, start: Pos, countdown: bool) -> Result<usize> {
    if board.get(start)?.state == CellState::Flagged {
        return Ok(0);
    }

    let mut queued = vec![false; board.len()];
    let mut work = vec![start];
    queued[board.index(start)?] = true;
    let mut uncovered = 0;

    while let Some(pos) = work.pop() {
        if board.get(pos)?.state != CellState::Uncovered {
            board.set_state(pos, CellState::Uncovered)?;
            uncovered += 1;
        }

        if adjacent_count(board, pos, countdown)? != 0 {
            continue;
        }

        for neighbor in board.neighbors(pos) {
            let index = board.index(neighbor)?;
            if queued[index] {
                continue;
            }

            if matches!(
                board.get(neighbor)?.state,
                CellState::Covered | CellState::Questioned
            ) {
                queued[index] = true;
                work.push(neighbor);
            }
        }
    }

    trace!("Flood from {} uncovered {} cells", start, uncovered);
    Ok(uncovered)
}

/// Follow-up to flagging `flagged` in countdown mode.
///
/// Any uncovered neighbor whose count just dropped to zero floods from there.
/// The flood can reach a bomb when a flag sits on a safe cell, so callers must
/// re-check for a loss afterwards.
pub fn reveal_from_flag(board: &mut Board, flagged: Pos, countdown: bool) -> Result<usize> {
    let mut uncovered = 0;

    for neighbor in board.neighbors(flagged) {
        if board.get(neighbor)?.state == CellState::Uncovered
            && adjacent_count(board, neighbor, countdown)? == 0
        {
            uncovered += reveal_from(board, neighbor, countdown)?;
        }
    }

    Ok(uncovered)
}
