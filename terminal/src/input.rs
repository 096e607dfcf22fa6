use anyhow::{Context, Result, bail};

use sweeper_common::{
    models::{Button, GameParams, Pos},
    protocol::ClientMessage,
};

/// One line of player input.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Message(ClientMessage),
    Hover(Pos),
    Status,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  l X Y | reveal X Y   left click (reveal)
  r X Y | mark X Y     right click (flag, question, clear)
  h X Y                move the pointer
  n [W H BOMBS]        new game, optionally with a new size
  c                    toggle countdown mode
  s                    print status
  ?                    this help
  q                    quit
raw JSON actions such as {\"action\":\"reveal\",\"pos\":{\"x\":1,\"y\":1}} are accepted too";

fn number(word: Option<&str>, what: &str) -> Result<usize> {
    let word = word.with_context(|| format!("missing {}", what))?;
    word.parse()
        .with_context(|| format!("{} must be a number, got {:?}", what, word))
}

fn pos<'a>(mut words: impl Iterator<Item = &'a str>) -> Result<Pos> {
    let x = number(words.next(), "x")?;
    let y = number(words.next(), "y")?;
    if let Some(extra) = words.next() {
        bail!("unexpected {:?} after coordinates", extra);
    }
    Ok(Pos { x, y })
}

/// Parses a command line. Blank lines yield `None`.
pub fn parse(line: &str) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    if line.starts_with('{') {
        let message: ClientMessage =
            serde_json::from_str(line).context("invalid JSON action")?;
        return Ok(Some(Command::Message(message)));
    }

    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };

    let command = match head.to_ascii_lowercase().as_str() {
        "l" | "left" | "reveal" => Command::Message(Button::Left.message(pos(words)?)),
        "r" | "right" | "mark" => Command::Message(Button::Right.message(pos(words)?)),
        "h" | "hover" => Command::Hover(pos(words)?),
        "n" | "new" | "restart" => {
            let rest: Vec<&str> = words.collect();
            let params = match rest.as_slice() {
                [] => None,
                [width, height, bombs] => Some(GameParams {
                    width: number(Some(*width), "width")?,
                    height: number(Some(*height), "height")?,
                    bombs: number(Some(*bombs), "bombs")?,
                }),
                _ => bail!("new game takes no arguments or WIDTH HEIGHT BOMBS"),
            };
            Command::Message(ClientMessage::Restart { params })
        }
        "c" | "countdown" => Command::Message(ClientMessage::ToggleCountdown),
        "s" | "status" => Command::Status,
        "?" | "help" => Command::Help,
        "q" | "quit" | "exit" => Command::Quit,
        other => bail!("unknown command {:?}, try ?", other),
    };

    Ok(Some(command))
}
