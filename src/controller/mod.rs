//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input,
//! coordinates between the model and view, and relays showcase playback
//! requests to the player. It is organized into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `navigation`: Search, menu and section navigation
//! - `showcase`: Media selection and play/pause requests
//! - `player_events`: Showcase player event listener

mod input;
mod navigation;
mod showcase;
mod player_events;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::model::AppModel;
use crate::player::{PlayerError, ShowcasePlayer};

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<Mutex<AppModel>>,
    pub(crate) player: ShowcasePlayer,
}

impl AppController {
    pub fn new(model: Arc<Mutex<AppModel>>, player: ShowcasePlayer) -> Self {
        Self { model, player }
    }

    pub(crate) fn format_error(error: &PlayerError) -> String {
        match error {
            PlayerError::ChannelClosed => "Lecteur vidéo indisponible.".to_string(),
            PlayerError::Busy => "Lecteur vidéo occupé, réessayez.".to_string(),
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::config::{Config, PlayerConfig};
    use crate::player::PlayerEventChannel;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub fn controller_with(player: PlayerConfig) -> (AppController, PlayerEventChannel) {
        let config = Config {
            player,
            ..Config::default()
        };
        let model = Arc::new(Mutex::new(AppModel::new(&config)));
        let (player, events) = ShowcasePlayer::spawn(&config.player);
        (AppController::new(model, player), events)
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    pub async fn press(controller: &AppController, code: KeyCode) {
        controller.handle_key_event(key(code)).await.unwrap();
    }

    pub async fn type_text(controller: &AppController, text: &str) {
        for c in text.chars() {
            press(controller, KeyCode::Char(c)).await;
        }
    }
}
