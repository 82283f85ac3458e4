use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use tracing::warn;

use crate::config;
use crate::deck::{manifest, scanner, CardDeck};
use crate::error::CardsError;
use crate::models::{FixedViewport, Frame, Viewport};
use crate::selection::ActivationHandler;
use crate::session::CardSession;

pub const USAGE: &str = "\
Usage: cardfit [--deck FILE | --dir DIR | PATH] [options]

Options:
  --deck FILE       Deck manifest (TOML)
  --dir DIR         Directory of card images
  --config FILE     Config file (default: ./cardfit.toml, then the user config dir)
  --viewport WxH    Initial viewport size in pixels
  --gap PX          Padding around each card in the grid
  --click N         Click card N (replayed in order)
  --resize WxH      Resize the viewport (replayed in order)
  -h, --help        Show this help
";

#[derive(Debug, Clone, PartialEq)]
pub enum DeckSource {
    Manifest(PathBuf),
    Directory(PathBuf),
}

impl DeckSource {
    /// Picks the source kind for a bare path argument.
    fn from_path(path: PathBuf) -> Self {
        if path.is_dir() {
            Self::Directory(path)
        } else {
            Self::Manifest(path)
        }
    }

    fn load(&self) -> Result<CardDeck> {
        match self {
            Self::Manifest(path) => manifest::load_manifest(path),
            Self::Directory(path) => scanner::scan_dir(path),
        }
    }
}

/// Input replayed against a session after the first frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionEvent {
    Click(usize),
    Resize(Viewport),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppArgs {
    pub deck: DeckSource,
    pub config: Option<PathBuf>,
    pub viewport: Option<Viewport>,
    pub gap: Option<f64>,
    pub events: Vec<SessionEvent>,
}

/// Parses command line arguments (without the program name).
///
/// Returns `Ok(None)` when help was requested.
pub fn parse_args<I>(args: I) -> Result<Option<AppArgs>>
where
    I: IntoIterator<Item = String>,
{
    let mut deck: Option<DeckSource> = None;
    let mut config: Option<PathBuf> = None;
    let mut viewport: Option<Viewport> = None;
    let mut gap: Option<f64> = None;
    let mut events = Vec::new();

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(None),
            "--deck" => {
                let value = args.next().context("Missing value for --deck")?;
                deck = Some(DeckSource::Manifest(PathBuf::from(value)));
            }
            "--dir" => {
                let value = args.next().context("Missing value for --dir")?;
                deck = Some(DeckSource::Directory(PathBuf::from(value)));
            }
            "--config" => {
                let value = args.next().context("Missing value for --config")?;
                config = Some(PathBuf::from(value));
            }
            "--viewport" => {
                let value = args.next().context("Missing value for --viewport")?;
                viewport = Some(parse_size(&value).context("Failed to parse --viewport")?);
            }
            "--gap" => {
                let value = args.next().context("Missing value for --gap")?;
                let value = value
                    .parse::<f64>()
                    .context("Failed to parse --gap as a number")?;
                if value.is_nan() || value < 0.0 {
                    bail!("--gap must not be negative");
                }
                gap = Some(value);
            }
            "--click" => {
                let value = args.next().context("Missing value for --click")?;
                let index = value
                    .parse::<usize>()
                    .context("Failed to parse --click as a card index")?;
                events.push(SessionEvent::Click(index));
            }
            "--resize" => {
                let value = args.next().context("Missing value for --resize")?;
                let size = parse_size(&value).context("Failed to parse --resize")?;
                events.push(SessionEvent::Resize(size));
            }
            _ => {
                if arg.starts_with('-') {
                    bail!("Unknown option: {}", arg);
                }
                if deck.is_none() {
                    deck = Some(DeckSource::from_path(PathBuf::from(arg)));
                }
            }
        }
    }

    let deck = deck.context("No cards given: pass --deck <file>, --dir <directory> or a path")?;
    Ok(Some(AppArgs {
        deck,
        config,
        viewport,
        gap,
        events,
    }))
}

/// Parses `WIDTHxHEIGHT`.
fn parse_size(value: &str) -> Result<Viewport> {
    let (width, height) = value
        .split_once(|c| c == 'x' || c == 'X')
        .with_context(|| format!("Expected WIDTHxHEIGHT, got {:?}", value))?;
    let width = width.trim().parse::<f64>().context("Invalid width")?;
    let height = height.trim().parse::<f64>().context("Invalid height")?;
    Ok(Viewport::new(width, height))
}

pub struct CardsApp {
    args: AppArgs,
}

impl CardsApp {
    pub fn new(args: AppArgs) -> Self {
        Self { args }
    }

    /// Runs the session against stdout and returns the process exit code.
    pub fn run(&self) -> i32 {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        match self.run_to(&mut out) {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("cardfit: {:#}", err);
                1
            }
        }
    }

    /// Loads the deck, renders the first frame, then replays the events.
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<()> {
        let config = config::load_from(self.args.config.as_deref())?;
        let mut layout = config.grid_layout();
        if let Some(gap) = self.args.gap {
            layout.gap = gap;
        }
        let viewport = self.args.viewport.unwrap_or_else(|| config.viewport());

        let deck = self.args.deck.load()?;
        let mut session = CardSession::new(deck, FixedViewport::new(viewport), layout)?;

        let frame = session.render()?;
        write_frame(out, &session, &frame)?;

        for event in &self.args.events {
            let frame = match *event {
                SessionEvent::Click(index) => match session.on_activate(index) {
                    Ok(frame) => frame,
                    Err(err @ CardsError::IndexOutOfRange { .. }) => {
                        warn!("Click ignored: {}", err);
                        writeln!(out, "click={} ignored", index)?;
                        continue;
                    }
                    Err(err) => return Err(err.into()),
                },
                SessionEvent::Resize(size) => {
                    session.viewport_source_mut().resize(size);
                    session.on_resize()?
                }
            };
            write_frame(out, &session, &frame)?;
        }

        Ok(())
    }
}

fn write_frame<W: Write>(
    out: &mut W,
    session: &CardSession<FixedViewport>,
    frame: &Frame,
) -> io::Result<()> {
    write!(
        out,
        "frame={} class=\"{}\" scale={:.6}",
        session.render_count(),
        frame.view.container_class(),
        frame.scale()
    )?;
    if let Some(grid) = &frame.grid {
        write!(out, " grid={}x{}", grid.cols, grid.rows)?;
    }
    writeln!(out)?;

    for placement in &frame.placements {
        let name = session
            .deck()
            .get(placement.index)
            .map(|card| card.name.as_str())
            .unwrap_or("?");
        writeln!(
            out,
            "  card={} name={} x={} y={} font-size={:.2}%",
            placement.index,
            name,
            placement.x,
            placement.y,
            placement.font_size_percent()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn args(list: &[&str]) -> Result<Option<AppArgs>> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_events_in_order() {
        let parsed = args(&[
            "--deck",
            "deck.toml",
            "--viewport",
            "1000x600",
            "--click",
            "2",
            "--resize",
            "800X480",
            "--click",
            "0",
        ])
        .unwrap()
        .unwrap();

        assert_eq!(parsed.deck, DeckSource::Manifest(PathBuf::from("deck.toml")));
        assert_eq!(parsed.viewport, Some(Viewport::new(1000.0, 600.0)));
        assert_eq!(
            parsed.events,
            [
                SessionEvent::Click(2),
                SessionEvent::Resize(Viewport::new(800.0, 480.0)),
                SessionEvent::Click(0),
            ]
        );
    }

    #[test]
    fn test_parse_help() {
        assert!(args(&["--help"]).unwrap().is_none());
    }

    #[test]
    fn test_parse_requires_deck() {
        let err = args(&["--viewport", "10x10"]).unwrap_err();
        assert!(err.to_string().contains("No cards"));
    }

    #[test]
    fn test_parse_rejects_bad_values() {
        assert!(args(&["--deck", "d.toml", "--viewport", "100"]).is_err());
        assert!(args(&["--deck", "d.toml", "--gap", "-1"]).is_err());
        assert!(args(&["--deck", "d.toml", "--click", "x"]).is_err());
        assert!(args(&["--deck", "d.toml", "--frobnicate"]).is_err());
        assert!(args(&["--deck"]).is_err());
    }

    #[test]
    fn test_positional_path_picks_source() {
        let dir = tempdir().unwrap();
        let parsed = args(&[dir.path().to_str().unwrap()]).unwrap().unwrap();
        assert_eq!(parsed.deck, DeckSource::Directory(dir.path().to_path_buf()));

        let parsed = args(&["cards.toml"]).unwrap().unwrap();
        assert_eq!(parsed.deck, DeckSource::Manifest(PathBuf::from("cards.toml")));
    }

    #[test]
    fn test_run_replays_events() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("deck.toml");
        let mut text = String::new();
        for i in 0..4 {
            text.push_str(&format!(
                "[[card]]\nname = \"c{}\"\nwidth = 100.0\nheight = 150.0\n\n",
                i
            ));
        }
        fs::write(&manifest, text).unwrap();
        let config = dir.path().join("cardfit.toml");

        let app = CardsApp::new(AppArgs {
            deck: DeckSource::Manifest(manifest),
            config: Some(config),
            viewport: Some(Viewport::new(1000.0, 600.0)),
            gap: None,
            events: vec![
                SessionEvent::Click(7),
                SessionEvent::Click(2),
                SessionEvent::Resize(Viewport::new(400.0, 1000.0)),
                SessionEvent::Click(0),
            ],
        });

        let mut out = Vec::new();
        app.run_to(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        let frames: Vec<&str> = out.lines().filter(|l| l.starts_with("frame=")).collect();

        assert_eq!(frames.len(), 4);
        assert!(frames[0].contains("card-selection"));
        assert!(frames[0].contains("grid=4x1"));
        assert!(out.contains("click=7 ignored"));
        assert!(frames[1].contains("card-current"));
        assert!(frames[2].contains("card-current"));
        assert!(frames[2].contains("scale=4.000000"));
        assert!(frames[3].contains("card-selection"));
        assert!(out.contains("  card=2 name=c2 x=0 y=200 font-size=400.00%"));
    }

    #[test]
    fn test_run_reports_empty_deck() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("deck.toml");
        fs::write(&manifest, "").unwrap();

        let app = CardsApp::new(AppArgs {
            deck: DeckSource::Manifest(manifest),
            config: Some(dir.path().join("cardfit.toml")),
            viewport: None,
            gap: None,
            events: Vec::new(),
        });
        let err = app.run_to(&mut Vec::new()).unwrap_err();
        assert!(format!("{:#}", err).contains("no cards"));
    }
}
