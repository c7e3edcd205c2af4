use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use neopixel_connect_four::ai::OpponentKind;
use neopixel_connect_four::config::AppConfig;
use neopixel_connect_four::display::{LedLayout, NeopixelFrame};
use neopixel_connect_four::ui::{App, ConsoleGame};

/// Play Connect Four on the 8x8 neopixel board.
#[derive(Parser)]
#[command(name = "neopixel_connect_four", about = "Play Connect Four on an 8x8 neopixel board")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "board.toml")]
    config: PathBuf,

    /// Who plays Yellow
    #[arg(long, value_enum)]
    opponent: Option<OpponentKind>,

    /// Seed for the computer opponent
    #[arg(long)]
    seed: Option<u64>,

    /// LED chain wiring
    #[arg(long, value_enum)]
    layout: Option<LedLayout>,

    /// LED brightness, 1-255
    #[arg(long)]
    brightness: Option<u8>,

    /// Plain line-based game on stdin/stdout instead of the TUI
    #[arg(long)]
    headless: bool,

    /// After a headless game, print the final LED frame as hex colours
    #[arg(long, requires = "headless")]
    dump_frame: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.headless {
        env_logger::init();
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(opponent) = cli.opponent {
        config.game.opponent = opponent;
    }
    if cli.seed.is_some() {
        config.game.seed = cli.seed;
    }
    if let Some(layout) = cli.layout {
        config.display.layout = layout;
    }
    if let Some(brightness) = cli.brightness {
        config.display.brightness = brightness;
    }
    config.validate().context("invalid command line overrides")?;

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    if cli.headless {
        let stdin = io::stdin();
        let mut game = ConsoleGame::new(
            stdin.lock(),
            io::stdout(),
            config.game.opponent.build(config.game.seed),
        );
        let outcome = game.play().context("console game")?;
        log::info!("game finished: {outcome:?}");

        if cli.dump_frame {
            let frame = NeopixelFrame::from_board(game.state().board(), config.display.layout);
            log::debug!("{} LEDs lit", frame.lit_count());
            println!("{}", frame.hex_dump(config.display.brightness));
        }
        Ok(())
    } else {
        run_tui(&config).context("terminal UI")
    }
}

fn run_tui(config: &AppConfig) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal even if the app failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
