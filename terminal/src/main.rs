use std::{
    fmt::Display,
    io::{self, BufRead, Write},
};

use anyhow::{Context, Result};
use rand::{SeedableRng, rngs::StdRng};
use sweeper_common::models::Pos;
use sweeper_engine::Game;
use tracing::{debug, info, warn};

mod config;
mod input;
mod render;

use config::{Config, OutputFormat};
use input::Command;

struct Session {
    game: Game<StdRng>,
    hover: Option<Pos>,
    output: OutputFormat,
}

impl Session {
    fn show(&self, out: &mut impl Write) -> Result<()> {
        let view = self.game.view(self.hover)?;
        match self.output {
            OutputFormat::Text => writeln!(out, "{}", render::text(&view))?,
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string(&view).context("encoding view")?)?
            }
        }
        Ok(())
    }

    fn report(&self, out: &mut impl Write, err: impl Display) -> Result<()> {
        warn!("Rejected input: {}", err);
        match self.output {
            OutputFormat::Text => writeln!(out, "error: {}", err)?,
            OutputFormat::Json => writeln!(
                out,
                "{}",
                serde_json::json!({ "type": "error", "message": err.to_string() })
            )?,
        }
        Ok(())
    }

    /// Runs one input line. Returns `false` once the player quits.
    fn process_line(&mut self, line: &str, out: &mut impl Write) -> Result<bool> {
        match input::parse(line) {
            Ok(None) => {}
            Ok(Some(Command::Quit)) => return Ok(false),
            Ok(Some(command)) => self.handle(command, out)?,
            Err(err) => self.report(out, format!("{:#}", err))?,
        }
        Ok(true)
    }

    fn handle(&mut self, command: Command, out: &mut impl Write) -> Result<()> {
        match command {
            Command::Message(message) => {
                debug!("Applying {:?}", message);
                match self.game.apply(message) {
                    Ok(_) => self.show(out),
                    Err(err) => self.report(out, err),
                }
            }
            Command::Hover(pos) => {
                if let Err(err) = self.game.board().get(pos) {
                    return self.report(out, err);
                }
                self.hover = Some(pos);
                self.show(out)
            }
            Command::Status => {
                match self.output {
                    OutputFormat::Text => {
                        let view = self.game.view(None)?;
                        writeln!(out, "{}", render::status_line(&view))?
                    }
                    OutputFormat::Json => {
                        writeln!(out, "{}", serde_json::to_string(&self.game.status())?)?
                    }
                }
                Ok(())
            }
            Command::Help => {
                writeln!(out, "{}", input::HELP)?;
                Ok(())
            }
            Command::Quit => Ok(()),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let config = Config::from_env();
    info!(
        "Starting sweeper: {}x{} with {} bombs, countdown {}",
        config.params.width,
        config.params.height,
        config.params.bombs,
        if config.countdown { "on" } else { "off" }
    );

    let rng = match config.seed {
        Some(seed) => {
            info!("Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let mut game = Game::with_rng(config.params, rng)
        .with_context(|| format!("cannot start a game with {:?}", config.params))?;
    if config.countdown {
        game.toggle_countdown_mode();
    }
    info!("Game {} ready", game.id());

    let mut session = Session {
        game,
        hover: None,
        output: config.output,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    session.show(&mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        if !session.process_line(&line, &mut out)? {
            break;
        }
        out.flush()?;
    }

    info!("Goodbye");
    Ok(())
}
