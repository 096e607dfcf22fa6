use snafu::{OptionExt, ensure};

use sweeper_common::models::{CellState, Pos};

use crate::error::{EmptyBoardSnafu, OutOfBoundsSnafu, Result, TooLargeSnafu};

/// Largest number of cells a board may hold.
pub const MAX_CELLS: usize = 1 << 20;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub bomb: bool,
    pub state: CellState,
}

/// Fixed-size grid of cells addressed by 1-indexed [`Pos`].
///
/// `set_bomb` and `set_state` are the only ways to mutate a cell; every higher
/// level operation goes through them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a fully covered board without bombs.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        ensure!(width > 0 && height > 0, EmptyBoardSnafu { width, height });
        let len = width
            .checked_mul(height)
            .filter(|len| *len <= MAX_CELLS)
            .context(TooLargeSnafu {
                width,
                height,
                max: MAX_CELLS,
            })?;
        Ok(Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Pos) -> bool {
        (1..=self.width).contains(&pos.x) && (1..=self.height).contains(&pos.y)
    }

    /// Row-major offset of `pos` into the cell storage.
    pub(crate) fn index(&self, pos: Pos) -> Result<usize> {
        ensure!(
            self.contains(pos),
            OutOfBoundsSnafu {
                x: pos.x,
                y: pos.y,
                width: self.width,
                height: self.height,
            }
        );
        Ok((pos.x - 1) + (pos.y - 1) * self.width)
    }

    pub fn get(&self, pos: Pos) -> Result<&Cell> {
        let index = self.index(pos)?;
        Ok(&self.cells[index])
    }

    pub fn set_bomb(&mut self, pos: Pos) -> Result<()> {
        let index = self.index(pos)?;
        self.cells[index].bomb = true;
        Ok(())
    }

    pub fn set_state(&mut self, pos: Pos, state: CellState) -> Result<()> {
        let index = self.index(pos)?;
        self.cells[index].state = state;
        Ok(())
    }

    /// Every coordinate, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Pos> {
        let width = self.width;
        (1..=self.height).flat_map(move |y| (1..=width).map(move |x| Pos { x, y }))
    }

    pub fn cells(&self) -> impl Iterator<Item = (Pos, &Cell)> {
        self.positions().zip(self.cells.iter())
    }

    /// In-bounds cells among the eight surrounding `pos`.
    pub fn neighbors(&self, pos: Pos) -> Vec<Pos> {
        let mut neighbors = Vec::with_capacity(8);

        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }

                let new_x = pos.x as isize + dx;
                let new_y = pos.y as isize + dy;

                if new_x >= 1
                    && new_x <= self.width as isize
                    && new_y >= 1
                    && new_y <= self.height as isize
                {
                    neighbors.push(Pos {
                        x: new_x as usize,
                        y: new_y as usize,
                    });
                }
            }
        }

        neighbors
    }

    pub fn count_state(&self, state: CellState) -> usize {
        self.cells.iter().filter(|cell| cell.state == state).count()
    }

    pub fn bomb_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.bomb).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameError;

    #[test]
    fn new_board_is_covered_and_empty() {
        let board = Board::new(4, 3).unwrap();
        assert_eq!(board.len(), 12);
        assert_eq!(board.count_state(CellState::Covered), 12);
        assert_eq!(board.bomb_count(), 0);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(
            Board::new(0, 5),
            Err(GameError::EmptyBoard {
                width: 0,
                height: 5
            })
        );
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        assert_eq!(
            Board::new(1 << 32, 1 << 32),
            Err(GameError::TooLarge {
                width: 1 << 32,
                height: 1 << 32,
                max: MAX_CELLS
            })
        );
        assert!(matches!(
            Board::new(100_000, 100_000),
            Err(GameError::TooLarge { .. })
        ));
        assert_eq!(Board::new(MAX_CELLS, 1).unwrap().len(), MAX_CELLS);
    }

    #[test]
    fn coordinates_are_one_indexed() {
        let mut board = Board::new(3, 2).unwrap();
        assert!(board.get(Pos::new(1, 1)).is_ok());
        assert!(board.get(Pos::new(3, 2)).is_ok());

        let err = board.get(Pos::new(0, 1)).unwrap_err();
        assert_eq!(
            err,
            GameError::OutOfBounds {
                x: 0,
                y: 1,
                width: 3,
                height: 2
            }
        );
        assert!(board.get(Pos::new(4, 1)).is_err());
        assert!(board.set_bomb(Pos::new(1, 3)).is_err());
        assert!(board.set_state(Pos::new(2, 0), CellState::Flagged).is_err());
    }

    #[test]
    fn setters_touch_only_their_cell() {
        let mut board = Board::new(3, 3).unwrap();
        board.set_bomb(Pos::new(2, 3)).unwrap();
        board.set_state(Pos::new(3, 1), CellState::Questioned).unwrap();

        assert!(board.get(Pos::new(2, 3)).unwrap().bomb);
        assert_eq!(board.bomb_count(), 1);
        assert_eq!(
            board.get(Pos::new(3, 1)).unwrap().state,
            CellState::Questioned
        );
        assert_eq!(board.count_state(CellState::Covered), 8);
    }

    #[test]
    fn positions_walk_rows_in_order() {
        let board = Board::new(2, 2).unwrap();
        let positions: Vec<_> = board.positions().collect();
        assert_eq!(
            positions,
            vec![
                Pos::new(1, 1),
                Pos::new(2, 1),
                Pos::new(1, 2),
                Pos::new(2, 2)
            ]
        );

        let mut board = board;
        board.set_bomb(Pos::new(1, 2)).unwrap();
        let bombs: Vec<_> = board
            .cells()
            .filter(|(_, cell)| cell.bomb)
            .map(|(pos, _)| pos)
            .collect();
        assert_eq!(bombs, vec![Pos::new(1, 2)]);
    }

    #[test]
    fn neighbors_skip_outside_cells() {
        let board = Board::new(9, 9).unwrap();
        assert_eq!(board.neighbors(Pos::new(5, 5)).len(), 8);
        assert_eq!(board.neighbors(Pos::new(1, 5)).len(), 5);

        let corner = board.neighbors(Pos::new(1, 1));
        assert_eq!(corner.len(), 3);
        assert!(corner.contains(&Pos::new(2, 1)));
        assert!(corner.contains(&Pos::new(1, 2)));
        assert!(corner.contains(&Pos::new(2, 2)));

        let single = Board::new(1, 1).unwrap();
        assert!(single.neighbors(Pos::new(1, 1)).is_empty());
    }
}
