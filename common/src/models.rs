use std::fmt;

use serde::{Deserialize, Serialize};

/// Annotation state of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    #[default]
    Covered,
    Flagged,
    Questioned,
    Uncovered,
}

/// Lifecycle of a game. `Lost` and `Won` are terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    #[default]
    Init,
    Playing,
    Lost,
    Won,
}

impl GameState {
    pub fn is_terminal(self) -> bool {
        matches!(self, GameState::Lost | GameState::Won)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GameState::Init => "init",
            GameState::Playing => "playing",
            GameState::Lost => "lost",
            GameState::Won => "won",
        };
        f.write_str(label)
    }
}

/// What a renderer should draw for one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "tile", content = "adjacent", rename_all = "snake_case")]
pub enum Tile {
    Covered,
    CoveredHover,
    Flag,
    FlagCountdown,
    Question,
    Bomb,
    FlaggedBomb,
    Empty,
    Count(u8),
}

/// 1-indexed grid coordinate, `x` is the column and `y` the row.
#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Pointer button reported by the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameParams {
    pub width: usize,
    pub height: usize,
    pub bombs: usize,
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            width: 9,
            height: 9,
            bombs: 10,
        }
    }
}

/// Summary shown in a status bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    pub state: GameState,
    pub flags_placed: usize,
    pub bomb_count: usize,
    /// Bombs minus placed flags; negative once the player over-flags.
    pub unflagged_bomb_count: isize,
}
