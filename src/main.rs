mod config;
mod controller;
mod logging;
mod model;
mod player;
mod view;

use std::io;
use std::sync::Arc;
use anyhow::Result;
use std::time::Duration;
use tokio::sync::Mutex;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use config::Config;
use controller::AppController;
use model::AppModel;
use player::{PlayerCommand, ShowcasePlayer};
use view::AppView;

#[tokio::main]
async fn main() -> Result<()> {
    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    if let Err(e) = logging::init_logging(&config.logging) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== boutique-rs starting ===");
    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Could not load config, using defaults");
    } else {
        tracing::debug!(path = %Config::config_path().display(), "Config loaded");
    }

    let model = Arc::new(Mutex::new(AppModel::new(&config)));

    let (player, player_events) = ShowcasePlayer::spawn(&config.player);
    let controller = AppController::new(model.clone(), player.clone());
    controller.start_player_event_listener(player_events);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, model.clone(), controller).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = player.send(PlayerCommand::Shutdown) {
        tracing::debug!(error = %e, "Player already stopped");
    }

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("boutique-rs shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    model: Arc<Mutex<AppModel>>,
    controller: AppController,
) -> io::Result<()> {
    loop {
        let (store, ui_state, showcase, storefront, should_quit) = {
            let model_guard = model.lock().await;

            model_guard.auto_clear_old_status().await;

            (
                model_guard.store_info().clone(),
                model_guard.get_ui_state().await,
                model_guard.get_showcase_state().await,
                model_guard.get_storefront_view().await,
                model_guard.should_quit().await,
            )
        };

        if should_quit {
            break;
        }

        terminal.draw(|f| {
            AppView::render(f, &store, &ui_state, &showcase, &storefront);
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Err(e) = controller.handle_key_event(key).await {
                    tracing::warn!(error = %e, "Key handling failed");
                }
            }
        }
    }

    Ok(())
}
