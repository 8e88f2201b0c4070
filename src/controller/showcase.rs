//! Showcase playback control methods
//!
//! None of these set the playing flag. They only send requests; the flag
//! follows whatever the player reports back.

use crate::player::PlayerCommand;
use super::AppController;

impl AppController {
    pub async fn toggle_playback(&self) {
        let model = self.model.lock().await;
        let command = model.playback_request().await;
        let playing = model.is_playing().await;
        tracing::debug!(?command, playing, "Toggling showcase playback");
        drop(model);
        self.send_player_command(command).await;
    }

    pub async fn select_media(&self, index: i64) {
        let model = self.model.lock().await;
        if model.select_media(index).await {
            let selected = model.selected_media().await;
            drop(model);
            self.send_player_command(PlayerCommand::Load { index: selected }).await;
        }
    }

    pub async fn select_next_media(&self) {
        let selected = self.model.lock().await.select_next_media().await;
        if let Some(index) = selected {
            self.send_player_command(PlayerCommand::Load { index }).await;
        }
    }

    pub async fn select_prev_media(&self) {
        let selected = self.model.lock().await.select_prev_media().await;
        if let Some(index) = selected {
            self.send_player_command(PlayerCommand::Load { index }).await;
        }
    }

    async fn send_player_command(&self, command: PlayerCommand) {
        if let Err(e) = self.player.send(command) {
            tracing::error!(error = %e, ?command, "Player command failed");
            let model = self.model.lock().await;
            model.set_status(Self::format_error(&e)).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::config::PlayerConfig;
    use crate::controller::test_support::controller_with;
    use crate::controller::AppController;

    async fn wait_for_playing(controller: &AppController, expected: bool) -> bool {
        for _ in 0..100 {
            if controller.model.lock().await.is_playing().await == expected {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        false
    }

    fn fast_player(autoplay_blocked: bool) -> PlayerConfig {
        PlayerConfig {
            autoplay_blocked,
            tick_ms: 50,
        }
    }

    #[tokio::test]
    async fn test_toggle_is_a_request_until_player_confirms() {
        let (controller, events) = controller_with(fast_player(false));
        controller.toggle_playback().await;
        // No listener yet, so nothing has confirmed playback
        assert!(!controller.model.lock().await.is_playing().await);

        controller.start_player_event_listener(events);
        assert!(wait_for_playing(&controller, true).await);

        controller.toggle_playback().await;
        assert!(wait_for_playing(&controller, false).await);
    }

    #[tokio::test]
    async fn test_blocked_autoplay_keeps_paused() {
        let (controller, events) = controller_with(fast_player(true));
        controller.start_player_event_listener(events);
        controller.toggle_playback().await;

        for _ in 0..100 {
            if controller.model.lock().await.has_status().await {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        let model = controller.model.lock().await;
        assert!(model.has_status().await);
        assert!(!model.is_playing().await);
    }

    #[tokio::test]
    async fn test_switching_media_stops_playback_immediately() {
        let (controller, events) = controller_with(fast_player(false));
        controller.start_player_event_listener(events);
        controller.toggle_playback().await;
        assert!(wait_for_playing(&controller, true).await);

        controller.select_media(1).await;
        let model = controller.model.lock().await;
        assert!(!model.is_playing().await);
        assert_eq!(model.selected_media().await, 1);
    }

    #[tokio::test]
    async fn test_out_of_range_media_is_ignored() {
        let (controller, _events) = controller_with(fast_player(false));
        controller.select_media(1).await;
        controller.select_media(-1).await;
        controller.select_media(999).await;
        assert_eq!(controller.model.lock().await.selected_media().await, 1);
    }
}
