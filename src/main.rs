use anyhow::{Context, Result};
use clap::Parser;
use std::time::Instant;
use zwickly::cli::Cli;
use zwickly::config::Config;
use zwickly::styles::{init_theme, ThemeType};
use zwickly::App;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(panic_info);
    }));
}

/// Theme priority: `--no-colors` / `NO_COLOR` > `--theme` > config file
fn resolve_theme(cli: &Cli, config: &Config) -> ThemeType {
    let no_color_env = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    if cli.no_colors || no_color_env {
        return ThemeType::NoColor;
    }
    cli.theme
        .as_deref()
        .unwrap_or(&config.theme)
        .parse()
        .unwrap_or_default()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    if cli.execute()? {
        return Ok(());
    }

    setup_panic_hook();

    // stdout belongs to the TUI, so logs go to a file
    let log_dir = Config::log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("Failed to create log directory: {:?}", log_dir))?;
    let log_file = log_dir.join("zwickly.log");

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let file_appender = tracing_appender::rolling::never(&log_dir, "zwickly.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    eprintln!("Logs are being written to: {:?}", log_file);

    let config_path = cli.config_path();
    let config = Config::load_or_create(&config_path).context("Failed to load configuration")?;
    init_theme(resolve_theme(&cli, &config));
    tracing::info!(path = ?config_path, preset = config.keymap.preset.name(), "Starting Zwickly");

    let mut app = App::new(config, config_path, cli.skip_splash, Instant::now());
    let result = app.run();

    drop(guard);
    result
}
