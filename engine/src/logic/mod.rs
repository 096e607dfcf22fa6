//! Board algorithms. Each function takes the board explicitly; the
//! [`Game`](crate::Game) decides when they run.

pub mod adjacency;
pub mod bombs;
pub mod flood;
pub mod mark;

pub use adjacency::adjacent_count;
pub use bombs::place_bombs;
pub use flood::{reveal_from, reveal_from_flag};
pub use mark::cycle_mark;
