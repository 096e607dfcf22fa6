use nanoid::nanoid;
use rand::{Rng, rngs::ThreadRng};
use snafu::ensure;
use tracing::{debug, info, instrument, warn};

use sweeper_common::{
    models::{Button, CellState, GameParams, GameState, Pos, Status, Tile},
    protocol::{BoardView, ClientMessage},
};

use crate::{
    data::Board,
    error::{Result, TooManyBombsSnafu},
    logic::{adjacent_count, cycle_mark, place_bombs, reveal_from, reveal_from_flag},
    render::select_tile,
};

/// One game session: the board, its lifecycle and the random source used to
/// lay out bombs.
///
/// Every action runs to completion, including any flood and the terminal
/// check, before the call returns. Actions that are not legal in the current
/// state are ignored rather than reported.
pub struct Game<R = ThreadRng> {
    id: String,
    params: GameParams,
    board: Board,
    state: GameState,
    countdown: bool,
    rng: R,
}

fn fresh_board(params: &GameParams) -> Result<Board> {
    let board = Board::new(params.width, params.height)?;
    let available = board.len() - 1;
    ensure!(
        params.bombs <= available,
        TooManyBombsSnafu {
            bombs: params.bombs,
            available,
        }
    );
    Ok(board)
}

impl Game {
    pub fn new(params: GameParams) -> Result<Self> {
        Self::with_rng(params, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    /// Creates a session that draws bomb positions from `rng`.
    #[instrument(level = "trace", skip(rng))]
    pub fn with_rng(params: GameParams, rng: R) -> Result<Self> {
        let board = fresh_board(&params)?;
        let id = nanoid!(8);
        info!(
            "Creating game {}: {}x{} with {} bombs",
            id, params.width, params.height, params.bombs
        );
        Ok(Self {
            id,
            params,
            board,
            state: GameState::Init,
            countdown: false,
            rng,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn params(&self) -> GameParams {
        self.params
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn countdown(&self) -> bool {
        self.countdown
    }

    /// Replaces the board with a fresh one for `params`.
    ///
    /// Invalid parameters leave the current game as it was.
    #[instrument(level = "trace", skip(self), fields(game = %self.id))]
    pub fn new_game(&mut self, params: GameParams) -> Result<()> {
        let board = fresh_board(&params)?;
        info!(
            "Starting new game: {}x{} with {} bombs",
            params.width, params.height, params.bombs
        );
        self.params = params;
        self.board = board;
        self.state = GameState::Init;
        Ok(())
    }

    pub fn restart(&mut self) -> Result<()> {
        self.new_game(self.params)
    }

    /// Flips countdown mode and returns the new setting. The board is not
    /// touched.
    pub fn toggle_countdown_mode(&mut self) -> bool {
        self.countdown = !self.countdown;
        debug!(
            "Game {} countdown mode {}",
            self.id,
            if self.countdown { "on" } else { "off" }
        );
        self.countdown
    }

    #[instrument(level = "trace", skip(self), fields(game = %self.id, x = pos.x, y = pos.y))]
    pub fn reveal(&mut self, pos: Pos) -> Result<GameState> {
        let cell = *self.board.get(pos)?;

        match self.state {
            GameState::Lost | GameState::Won => {
                debug!("Ignoring reveal on finished game at {}", pos);
                return Ok(self.state);
            }
            GameState::Init => {
                place_bombs(&mut self.board, pos, self.params.bombs, &mut self.rng)?;
                self.state = GameState::Playing;
                let uncovered = reveal_from(&mut self.board, pos, self.countdown)?;
                debug!("Opening reveal at {} uncovered {} cells", pos, uncovered);
            }
            GameState::Playing if cell.state == CellState::Flagged => {
                debug!("Ignoring reveal on flagged cell {}", pos);
                return Ok(self.state);
            }
            GameState::Playing if cell.bomb => {
                warn!("Player hit bomb at {} - game over!", pos);
                self.board.set_state(pos, CellState::Uncovered)?;
            }
            GameState::Playing => {
                let uncovered = reveal_from(&mut self.board, pos, self.countdown)?;
                debug!("Revealed {} cells from {}", uncovered, pos);
            }
        }

        self.evaluate();
        Ok(self.state)
    }

    #[instrument(level = "trace", skip(self), fields(game = %self.id, x = pos.x, y = pos.y))]
    pub fn cycle_mark(&mut self, pos: Pos) -> Result<GameState> {
        self.board.get(pos)?;

        if self.state != GameState::Playing {
            debug!("Ignoring mark at {} while {}", pos, self.state);
            return Ok(self.state);
        }

        match cycle_mark(&mut self.board, pos)? {
            None => {
                debug!("Ignoring mark on uncovered cell {}", pos);
                return Ok(self.state);
            }
            Some(CellState::Flagged) if self.countdown => {
                let uncovered = reveal_from_flag(&mut self.board, pos, true)?;
                debug!("Flag at {} settled neighbors, uncovered {} cells", pos, uncovered);
            }
            Some(next) => debug!("Cell {} now {:?}", pos, next),
        }

        self.evaluate();
        Ok(self.state)
    }

    /// Left button reveals, right button cycles the mark.
    pub fn click(&mut self, pos: Pos, button: Button) -> Result<GameState> {
        self.apply(button.message(pos))
    }

    pub fn apply(&mut self, message: ClientMessage) -> Result<GameState> {
        match message {
            ClientMessage::Reveal { pos } => self.reveal(pos),
            ClientMessage::Mark { pos } => self.cycle_mark(pos),
            ClientMessage::Click { pos, button } => self.click(pos, button),
            ClientMessage::Restart { params } => {
                self.new_game(params.unwrap_or(self.params))?;
                Ok(self.state)
            }
            ClientMessage::ToggleCountdown => {
                self.toggle_countdown_mode();
                Ok(self.state)
            }
        }
    }

    /// Loss wins over a simultaneous win: a bomb on show ends the game even if
    /// every safe cell is open too.
    fn evaluate(&mut self) {
        let mut safe_covered = 0;
        for (_, cell) in self.board.cells() {
            if cell.bomb && cell.state == CellState::Uncovered {
                self.state = GameState::Lost;
                info!("Game {} lost", self.id);
                return;
            }
            if !cell.bomb && cell.state != CellState::Uncovered {
                safe_covered += 1;
            }
        }

        if safe_covered == 0 {
            self.state = GameState::Won;
            info!("Game {} won! All safe cells revealed.", self.id);
        }
    }

    pub fn status(&self) -> Status {
        let flags_placed = self.board.count_state(CellState::Flagged);
        Status {
            state: self.state,
            flags_placed,
            bomb_count: self.params.bombs,
            unflagged_bomb_count: self.params.bombs as isize - flags_placed as isize,
        }
    }

    pub fn tile_at(&self, pos: Pos, hover: Option<Pos>) -> Result<Tile> {
        let cell = self.board.get(pos)?;
        let adjacent = adjacent_count(&self.board, pos, self.countdown)?;
        Ok(select_tile(
            cell,
            adjacent,
            self.state,
            self.countdown,
            hover == Some(pos),
        ))
    }

    pub fn view(&self, hover: Option<Pos>) -> Result<BoardView> {
        let field = (1..=self.board.height())
            .map(|y| {
                (1..=self.board.width())
                    .map(|x| self.tile_at(Pos { x, y }, hover))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(BoardView {
            width: self.board.width(),
            height: self.board.height(),
            countdown: self.countdown,
            status: self.status(),
            field,
        })
    }
}
