use snafu::Snafu;

/// Errors raised by board and game operations.
///
/// `OutOfBounds` means the input layer handed over a coordinate that is not on
/// the board. The other variants reject a game configuration before anything
/// is mutated.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum GameError {
    #[snafu(display("cell ({x}, {y}) is outside the {width}x{height} board"))]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[snafu(display("a {width}x{height} board has no cells"))]
    EmptyBoard { width: usize, height: usize },
    #[snafu(display("a {width}x{height} board exceeds the limit of {max} cells"))]
    TooLarge {
        width: usize,
        height: usize,
        max: usize,
    },
    #[snafu(display("cannot place {bombs} bombs in {available} candidate cells"))]
    TooManyBombs { bombs: usize, available: usize },
}

impl GameError {
    /// Whether the error rejects a configuration rather than a coordinate.
    pub fn is_config(&self) -> bool {
        !matches!(self, GameError::OutOfBounds { .. })
    }
}

pub type Result<T, E = GameError> = std::result::Result<T, E>;
