use std::io;
use std::time::Duration;

use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use miette::IntoDiagnostic;
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use roledoc::config::AppConfig;
use roledoc::core::logging::{self, AppError};
use roledoc::tui::app::AppState;
use roledoc::tui::services::Services;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    let _log_guard = logging::init_tui();
    log::info!("RoleDoc v{} starting", roledoc::VERSION);

    let config = AppConfig::load();
    let tick_rate = Duration::from_millis(config.tui.tick_rate_ms);

    let (event_tx, event_rx) = mpsc::unbounded_channel();
    let services = Services::init(config, event_tx.clone());
    services.spawn_health_probe();

    // Setup terminal. Bracketed paste is what makes drag-and-dropping a
    // file onto the terminal land in the upload prompt as one event.
    enable_raw_mode().into_diagnostic()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste).into_diagnostic()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).into_diagnostic()?;

    // Run the app
    let mut app = AppState::new(event_rx, event_tx, services);
    let result = app.run(&mut terminal, tick_rate).await;

    // Restore terminal
    disable_raw_mode().into_diagnostic()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )
    .into_diagnostic()?;
    terminal.show_cursor().into_diagnostic()?;

    if let Err(e) = result {
        log::error!("Fatal: {e}");
        return Err(AppError::new(format!("RoleDoc crashed: {e}"))
            .with_help(format!(
                "The full log is in {}",
                logging::log_dir().display()
            ))
            .into());
    }

    log::info!("RoleDoc exited cleanly");
    Ok(())
}
