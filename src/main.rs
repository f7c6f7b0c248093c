//! Cobweb - A terminal visualizer for the discrete logistic map.

use anyhow::{Context, Result};
use clap::Parser;
use cobweb::app::{App, Theme};
use cobweb::config::ViewConfig;
use cobweb::params::{
    parse_growth_rate, parse_iteration_count, Control, Parameters, DEFAULT_GROWTH_RATE,
    DEFAULT_ITERATIONS,
};
use cobweb::sampling::DEFAULT_CURVE_SAMPLES;
use cobweb::ui;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "cobweb")]
#[command(about = "A terminal-based cobweb visualizer for the discrete logistic map", long_about = None)]
struct Args {
    /// Number of iterations [2, 100]
    #[arg(short = 'n', long, default_value_t = DEFAULT_ITERATIONS,
          value_parser = parse_iteration_count, allow_hyphen_values = true)]
    iterations: usize,

    /// Intrinsic growth rate r [0.95, 4.0]
    #[arg(short, long, default_value_t = DEFAULT_GROWTH_RATE,
          value_parser = parse_growth_rate, allow_hyphen_values = true)]
    rate: f64,

    /// Number of samples for the map curve and diagonal
    #[arg(long, default_value_t = DEFAULT_CURVE_SAMPLES)]
    samples: usize,

    /// Initial color theme
    #[arg(long, value_enum, default_value_t = Theme::GruvboxDark)]
    theme: Theme,

    /// Enable logging to specified file (level from RUST_LOG, default debug)
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::File::create(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Cobweb");
    }

    let params = Parameters::new(args.iterations, args.rate)
        .inspect_err(|e| tracing::error!("Invalid parameters: {}", e))?;
    let config = ViewConfig::default()
        .with_curve_samples(args.samples)
        .inspect_err(|e| tracing::error!("Invalid configuration: {}", e))?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let app = App::new(params, config, args.theme);
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    tracing::info!("Cobweb exited");

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, &app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match (key.modifiers, key.code) {
                    // Quit
                    (KeyModifiers::NONE, KeyCode::Char('q'))
                    | (KeyModifiers::NONE, KeyCode::Esc)
                    | (KeyModifiers::CONTROL, KeyCode::Char('c')) => return Ok(()),

                    // Slider focus
                    (KeyModifiers::NONE, KeyCode::Tab) | (KeyModifiers::SHIFT, KeyCode::BackTab) => {
                        app.cycle_focus();
                    },

                    // Step the focused slider
                    (KeyModifiers::NONE, KeyCode::Left)
                    | (KeyModifiers::NONE, KeyCode::Char('h')) => {
                        app.step_focused(-1);
                    },
                    (KeyModifiers::NONE, KeyCode::Right)
                    | (KeyModifiers::NONE, KeyCode::Char('l')) => {
                        app.step_focused(1);
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('H')) => {
                        app.step_focused(-10);
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('L')) => {
                        app.step_focused(10);
                    },

                    // Iterations regardless of focus
                    (KeyModifiers::NONE, KeyCode::Up)
                    | (KeyModifiers::NONE, KeyCode::Char('k')) => {
                        app.step_control(Control::Iterations, 1);
                    },
                    (KeyModifiers::NONE, KeyCode::Down)
                    | (KeyModifiers::NONE, KeyCode::Char('j')) => {
                        app.step_control(Control::Iterations, -1);
                    },

                    // Features
                    (KeyModifiers::NONE, KeyCode::Char('r')) => {
                        app.reset();
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('T')) => {
                        app.cycle_theme();
                    },
                    (KeyModifiers::SHIFT, KeyCode::Char('?'))
                    | (KeyModifiers::NONE, KeyCode::Char('?')) => {
                        app.show_help();
                    },

                    _ => {},
                }
            }
        }
    }
}
