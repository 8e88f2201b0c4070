//! Player event listener for showcase playback events

use tokio::task::JoinHandle;

use crate::player::{PlayerEvent, PlayerEventChannel};
use super::AppController;

impl AppController {
    pub fn start_player_event_listener(&self, mut event_channel: PlayerEventChannel) -> JoinHandle<()> {
        let model = self.model.clone();
        tracing::info!("Starting showcase player event listener");

        tokio::spawn(async move {
            while let Some(event) = event_channel.recv().await {
                let model_guard = model.lock().await;

                if model_guard.should_quit().await {
                    tracing::debug!("Player event listener shutting down");
                    break;
                }

                match event {
                    PlayerEvent::Progress { .. } => tracing::trace!(?event, "Player event"),
                    PlayerEvent::Blocked { index } => {
                        tracing::info!(index, "Playback blocked");
                        if model_guard.selected_media().await == index {
                            model_guard
                                .set_status("Lecture bloquée, réessayez avec Espace.".to_string())
                                .await;
                        }
                    }
                    _ => tracing::debug!(?event, "Player event"),
                }

                model_guard.apply_player_event(event).await;
            }
        })
    }
}
