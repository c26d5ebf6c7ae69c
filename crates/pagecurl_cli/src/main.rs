//! PageCurl CLI
//!
//! Render the page curl widget to HTML, SVG or PNG, and replay pointer
//! input against its hit region.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pagecurl::{EventOutcome, Interaction, PageCurl, PageCurlConfig, PointerEvent};
use pagecurl_core::Point;

#[derive(Parser)]
#[command(name = "pagecurl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Page curl corner widget tool", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the widget
    Render {
        /// TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Html)]
        format: Format,

        /// Render in dark mode
        #[arg(long)]
        dark: bool,

        /// Render in the hovered state
        #[arg(long)]
        hovered: bool,

        /// Output path (stdout when omitted; required for png)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replay pointer positions through hit testing, then click
    Simulate {
        /// TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pointer position in screen pixels, as X,Y (repeatable)
        #[arg(long = "at", value_parser = parse_point)]
        at: Vec<Point>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Html,
    Svg,
    Png,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Render {
            config,
            format,
            dark,
            hovered,
            output,
        } => cmd_render(config.as_deref(), format, dark, hovered, output.as_deref()),

        Commands::Simulate { config, at } => cmd_simulate(config.as_deref(), &at),
    }
}

fn load_config(path: Option<&Path>) -> Result<PageCurlConfig> {
    match path {
        Some(path) => PageCurlConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(PageCurlConfig::default()),
    }
}

fn cmd_render(
    config: Option<&Path>,
    format: Format,
    dark: bool,
    hovered: bool,
    output: Option<&Path>,
) -> Result<()> {
    let mut config = load_config(config)?;
    if dark {
        config.is_dark_mode = true;
    }

    let mut curl = PageCurl::new(config);
    if hovered {
        curl.handle_pointer(PointerEvent::Enter);
    }
    let tree = curl.tree();

    info!(
        "Rendering {}x{} page curl as {:?} (fill {}, scale {})",
        tree.width(),
        tree.height(),
        format,
        tree.fill_color(),
        tree.scale()
    );

    match format {
        Format::Html => write_text(&tree.to_html(), output),
        Format::Svg => write_text(&tree.to_svg(), output),
        Format::Png => {
            let Some(output) = output else {
                anyhow::bail!("PNG output needs --output");
            };
            let raster = tree.rasterize().context("Failed to rasterize page curl")?;
            raster
                .save_png(output)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            info!(
                "Wrote {}x{} PNG to {}",
                raster.width(),
                raster.height(),
                output.display()
            );
            Ok(())
        }
    }
}

fn write_text(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => print!("{}", text),
    }
    Ok(())
}

fn cmd_simulate(config: Option<&Path>, points: &[Point]) -> Result<()> {
    let config = load_config(config)?;
    if points.is_empty() {
        warn!("No --at positions given, nothing to simulate");
        return Ok(());
    }

    let trace = simulate(config, points);
    info!(
        "{} click(s), final state {:?}",
        trace.clicks_delivered, trace.final_state
    );
    Ok(())
}

/// What a replayed pointer sequence did to the widget
#[derive(Debug, PartialEq)]
struct SimulationTrace {
    /// Outcome of each move, in input order
    moves: Vec<(Point, EventOutcome)>,
    /// Outcome of the click at the last position
    click: Option<EventOutcome>,
    /// Times the click callback ran
    clicks_delivered: usize,
    final_state: Interaction,
}

/// Move through `points`, letting each hover transition settle, then click
/// at the last one
fn simulate(config: PageCurlConfig, points: &[Point]) -> SimulationTrace {
    let settle_ms = config.transition_duration as f32;

    let clicks = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&clicks);
    let mut curl = PageCurl::builder()
        .config(config)
        .on_click(move || {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            info!("on_click fired ({})", n);
        })
        .build();

    let mut moves = Vec::with_capacity(points.len());
    for point in points {
        let outcome = curl.pointer_move(*point);
        curl.tick(settle_ms);
        info!(
            "move ({}, {}): {:?}, hovered={}, scale={}",
            point.x,
            point.y,
            outcome,
            curl.is_hovered(),
            curl.animated_scale()
        );
        moves.push((*point, outcome));
    }

    let click = points.last().map(|last| {
        let outcome = curl.pointer_click(*last);
        match outcome {
            EventOutcome::Clicked => info!("click ({}, {}): delivered", last.x, last.y),
            _ => info!("click ({}, {}): {:?}", last.x, last.y, outcome),
        }
        outcome
    });

    SimulationTrace {
        moves,
        click,
        clicks_delivered: clicks.load(Ordering::SeqCst),
        final_state: curl.interaction(),
    }
}

fn parse_point(s: &str) -> std::result::Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{}'", s))?;
    let x = x
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("invalid x '{}': {}", x, e))?;
    let y = y
        .trim()
        .parse::<f32>()
        .map_err(|e| format!("invalid y '{}': {}", y, e))?;
    Ok(Point::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("10,20").unwrap(), Point::new(10.0, 20.0));
        assert_eq!(parse_point(" 1.5 , -2 ").unwrap(), Point::new(1.5, -2.0));
        assert!(parse_point("10").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn test_render_args() {
        let cli = Cli::try_parse_from([
            "pagecurl", "render", "--format", "svg", "--dark", "--hovered",
        ])
        .unwrap();
        match cli.command {
            Commands::Render {
                format,
                dark,
                hovered,
                output,
                ..
            } => {
                assert_eq!(format, Format::Svg);
                assert!(dark && hovered);
                assert!(output.is_none());
            }
            _ => panic!("expected render"),
        }
    }

    #[test]
    fn test_simulate_args() {
        let cli = Cli::try_parse_from([
            "pagecurl", "-v", "simulate", "--at", "5,5", "--at", "70,170",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Simulate { at, config } => {
                assert!(config.is_none());
                assert_eq!(at, vec![Point::new(5.0, 5.0), Point::new(70.0, 170.0)]);
            }
            _ => panic!("expected simulate"),
        }
    }

    fn sized(size: f32) -> PageCurlConfig {
        PageCurlConfig {
            size,
            ..Default::default()
        }
    }

    #[test]
    fn test_simulate_enter_then_leave() {
        // 83px wide maps one pixel to ten view-box units
        let inside = Point::new(5.0, 5.0);
        let outside = Point::new(70.0, 170.0);
        let trace = simulate(sized(83.0), &[inside, outside]);

        assert_eq!(
            trace.moves,
            vec![
                (inside, EventOutcome::HoverChanged(Interaction::Hovered)),
                (outside, EventOutcome::HoverChanged(Interaction::Idle)),
            ]
        );
        assert_eq!(trace.click, Some(EventOutcome::Ignored));
        assert_eq!(trace.clicks_delivered, 0);
        assert_eq!(trace.final_state, Interaction::Idle);
    }

    #[test]
    fn test_simulate_click_inside_fires_callback() {
        let inside = Point::new(5.0, 5.0);
        let outside = Point::new(70.0, 170.0);
        let trace = simulate(sized(83.0), &[outside, inside]);

        assert_eq!(
            trace.moves,
            vec![
                (outside, EventOutcome::Ignored),
                (inside, EventOutcome::HoverChanged(Interaction::Hovered)),
            ]
        );
        assert_eq!(trace.click, Some(EventOutcome::Clicked));
        assert_eq!(trace.clicks_delivered, 1);
        assert_eq!(trace.final_state, Interaction::Hovered);
    }

    #[test]
    fn test_simulate_without_points() {
        let trace = simulate(PageCurlConfig::default(), &[]);
        assert!(trace.moves.is_empty());
        assert_eq!(trace.click, None);
        assert_eq!(trace.final_state, Interaction::Idle);
        assert!(cmd_simulate(None, &[]).is_ok());
    }

    #[test]
    fn test_png_requires_output() {
        assert!(cmd_render(None, Format::Png, false, false, None).is_err());
    }
}
