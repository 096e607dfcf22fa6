use serde::{Deserialize, Serialize};

use crate::models::{Button, GameParams, GameState, Pos, Status, Tile};

/// Discrete player action or command accepted by a game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "action")]
pub enum ClientMessage {
    #[serde(rename = "reveal")]
    Reveal { pos: Pos },
    #[serde(rename = "mark")]
    Mark { pos: Pos },
    #[serde(rename = "click")]
    Click { pos: Pos, button: Button },
    /// Starts over; `None` keeps the current parameters.
    #[serde(rename = "restart")]
    Restart {
        #[serde(default)]
        params: Option<GameParams>,
    },
    #[serde(rename = "toggle_countdown")]
    ToggleCountdown,
}

impl Button {
    /// Left reveals, right cycles the mark.
    pub fn message(self, pos: Pos) -> ClientMessage {
        match self {
            Button::Left => ClientMessage::Reveal { pos },
            Button::Right => ClientMessage::Mark { pos },
        }
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub width: usize,
    pub height: usize,
    pub countdown: bool,
    pub status: Status,
    /// Rows top to bottom, `field[y - 1][x - 1]`.
    pub field: Vec<Vec<Tile>>,
}

impl BoardView {
    pub fn state(&self) -> GameState {
        self.status.state
    }
}
