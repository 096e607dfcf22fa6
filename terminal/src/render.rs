use std::fmt::Write;

use sweeper_common::{
    models::{GameState, Tile},
    protocol::BoardView,
};

fn glyph(tile: Tile) -> char {
    match tile {
        Tile::Covered => '#',
        Tile::CoveredHover => '+',
        Tile::Flag => 'F',
        Tile::FlagCountdown => 'f',
        Tile::Question => '?',
        Tile::Bomb => '*',
        Tile::FlaggedBomb => 'X',
        Tile::Empty => '.',
        Tile::Count(n) => char::from_digit(n as u32, 10).unwrap_or('9'),
    }
}

pub fn status_line(view: &BoardView) -> String {
    let status = &view.status;
    let banner = match status.state {
        GameState::Init => "click anywhere to start",
        GameState::Playing => "playing",
        GameState::Lost => "BOOM - you lost",
        GameState::Won => "cleared - you won",
    };
    format!(
        "bombs {:>3}  flags {:>3}  left {:>4}  countdown {}  [{}]",
        status.bomb_count,
        status.flags_placed,
        status.unflagged_bomb_count,
        if view.countdown { "on" } else { "off" },
        banner
    )
}

/// Draws the board with 1-based column and row labels.
pub fn text(view: &BoardView) -> String {
    let label_width = view.height.to_string().len();
    let mut out = String::new();

    let _ = write!(out, "{:>width$} ", "", width = label_width);
    for x in 1..=view.width {
        out.push(char::from_digit((x % 10) as u32, 10).unwrap_or(' '));
    }
    out.push('\n');

    for (row, tiles) in view.field.iter().enumerate() {
        let _ = write!(out, "{:>width$} ", row + 1, width = label_width);
        out.extend(tiles.iter().map(|tile| glyph(*tile)));
        out.push('\n');
    }

    out.push_str(&status_line(view));
    out
}
