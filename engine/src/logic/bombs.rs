use rand::Rng;
use snafu::ensure;
use tracing::debug;

use sweeper_common::models::Pos;

use crate::{
    data::Board,
    error::{Result, TooManyBombsSnafu},
};

/// Places `count` bombs uniformly at random on every cell except `exclude`.
///
/// Fails without touching the board if `exclude` is off the board or there
/// are fewer candidates than bombs.
pub fn place_bombs<R: Rng>(
    board: &mut Board,
    exclude: Pos,
    count: usize,
    rng: &mut R,
) -> Result<()> {
    board.get(exclude)?;

    let mut pool: Vec<Pos> = board.positions().filter(|pos| *pos != exclude).collect();
    ensure!(
        count <= pool.len(),
        TooManyBombsSnafu {
            bombs: count,
            available: pool.len(),
        }
    );

    for _ in 0..count {
        let pick = rng.random_range(0..pool.len());
        board.set_bomb(pool.swap_remove(pick))?;
    }

    debug!("Placed {} bombs avoiding {}", count, exclude);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use sweeper_common::models::CellState;

    #[test]
    fn places_exact_count() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut board = Board::new(8, 6).unwrap();
            place_bombs(&mut board, Pos::new(3, 3), 20, &mut rng).unwrap();
            assert_eq!(board.bomb_count(), 20);
        }
    }

    #[test]
    fn excluded_cell_stays_safe_when_board_is_full() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut board = Board::new(4, 4).unwrap();
            place_bombs(&mut board, Pos::new(2, 3), 15, &mut rng).unwrap();
            assert!(!board.get(Pos::new(2, 3)).unwrap().bomb);
            assert_eq!(board.bomb_count(), 15);
        }
    }

    #[test]
    fn too_many_bombs_leaves_board_untouched() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new(3, 3).unwrap();
        let before = board.clone();

        let err = place_bombs(&mut board, Pos::new(1, 1), 9, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GameError::TooManyBombs {
                bombs: 9,
                available: 8
            }
        );
        assert_eq!(board, before);
    }

    #[test]
    fn excluded_cell_must_be_on_the_board() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = Board::new(3, 3).unwrap();
        assert!(matches!(
            place_bombs(&mut board, Pos::new(4, 1), 1, &mut rng),
            Err(GameError::OutOfBounds { .. })
        ));
        assert_eq!(board.bomb_count(), 0);
    }

    #[test]
    fn every_candidate_can_receive_the_bomb() {
        let mut hits = [0usize; 9];
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..900 {
            let mut board = Board::new(3, 3).unwrap();
            place_bombs(&mut board, Pos::new(2, 2), 1, &mut rng).unwrap();
            for (i, (_, cell)) in board.cells().enumerate() {
                if cell.bomb {
                    hits[i] += 1;
                }
            }
        }

        assert_eq!(hits[4], 0);
        for (i, count) in hits.iter().enumerate() {
            if i != 4 {
                assert!(*count > 50, "cell {} hit only {} times", i, count);
            }
        }
    }

    #[test]
    fn placement_leaves_cell_states_alone() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = Board::new(5, 5).unwrap();
        place_bombs(&mut board, Pos::new(1, 1), 10, &mut rng).unwrap();
        assert_eq!(board.count_state(CellState::Covered), 25);
    }
}
