//! Minesweeper board engine.
//!
//! A [`Game`] owns one [`Board`] and drives it through the
//! init, playing, lost and won lifecycle. Bombs are placed on the first
//! reveal so the first clicked cell is always safe. Revealing a cell with no
//! neighboring bombs floods outward, and in countdown mode placing a flag
//! lowers the counts around it, which can itself start a flood.
//!
//! ```
//! use sweeper_engine::{Game, GameParams, Pos};
//!
//! let mut game = Game::new(GameParams { width: 9, height: 9, bombs: 10 })?;
//! game.reveal(Pos::new(5, 5))?;
//! assert!(!game.board().get(Pos::new(5, 5))?.bomb);
//! # Ok::<(), sweeper_engine::GameError>(())
//! ```

pub mod data;
pub mod error;
pub mod game;
pub mod logic;
pub mod render;

pub use data::{Board, Cell};
pub use error::{GameError, Result};
pub use game::Game;

pub use sweeper_common::{
    models::{Button, CellState, GameParams, GameState, Pos, Status, Tile},
    protocol::{BoardView, ClientMessage},
};
