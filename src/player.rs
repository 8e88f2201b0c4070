//! Simulated playback backend for the showcase videos
//!
//! Runs as a background task. Commands go in over a bounded channel and the
//! task reports what actually happened as `PlayerEvent`s. The UI never
//! assumes a command succeeded; it waits for the matching event.

use std::time::Duration;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::config::PlayerConfig;
use crate::model::SHOWCASE_MEDIA;

const COMMAND_BUFFER: usize = 32;
const MIN_TICK_MS: u64 = 10;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerCommand {
    Load { index: usize },
    Play { index: usize },
    Pause,
    Shutdown,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerEvent {
    Playing { index: usize },
    Paused { index: usize },
    /// Playback was refused (autoplay policy)
    Blocked { index: usize },
    Progress { index: usize, position_ms: u32 },
    Ended { index: usize },
}

impl PlayerEvent {
    pub fn index(&self) -> usize {
        match *self {
            PlayerEvent::Playing { index }
            | PlayerEvent::Paused { index }
            | PlayerEvent::Blocked { index }
            | PlayerEvent::Progress { index, .. }
            | PlayerEvent::Ended { index } => index,
        }
    }
}

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("player task is no longer running")]
    ChannelClosed,
    #[error("player command queue is full")]
    Busy,
}

pub type PlayerEventChannel = mpsc::UnboundedReceiver<PlayerEvent>;

#[derive(Clone)]
pub struct ShowcasePlayer {
    commands: mpsc::Sender<PlayerCommand>,
}

impl ShowcasePlayer {
    /// Start the player task. Must be called from within a tokio runtime.
    pub fn spawn(config: &PlayerConfig) -> (Self, PlayerEventChannel) {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_BUFFER);
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let task = PlayerTask {
            commands: command_rx,
            events: event_tx,
            autoplay_blocked: config.autoplay_blocked,
            tick: Duration::from_millis(config.tick_ms.max(MIN_TICK_MS)),
            loaded: 0,
            playing: false,
            position_ms: 0,
        };
        tokio::spawn(task.run());

        tracing::info!(
            autoplay_blocked = config.autoplay_blocked,
            tick_ms = config.tick_ms,
            "Showcase player started"
        );

        (Self { commands: command_tx }, event_rx)
    }

    pub fn send(&self, command: PlayerCommand) -> Result<(), PlayerError> {
        self.commands.try_send(command).map_err(|e| match e {
            mpsc::error::TrySendError::Full(_) => PlayerError::Busy,
            mpsc::error::TrySendError::Closed(_) => PlayerError::ChannelClosed,
        })
    }
}

struct PlayerTask {
    commands: mpsc::Receiver<PlayerCommand>,
    events: mpsc::UnboundedSender<PlayerEvent>,
    autoplay_blocked: bool,
    tick: Duration,
    loaded: usize,
    playing: bool,
    position_ms: u32,
}

impl PlayerTask {
    async fn run(mut self) {
        let mut ticker = tokio::time::interval(self.tick);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            let alive = tokio::select! {
                command = self.commands.recv() => match command {
                    Some(PlayerCommand::Shutdown) | None => break,
                    Some(command) => self.handle(command),
                },
                _ = ticker.tick(), if self.playing => self.advance(),
            };
            if !alive {
                break;
            }
        }

        tracing::debug!("Showcase player stopped");
    }

    fn duration_ms(&self) -> u32 {
        SHOWCASE_MEDIA
            .get(self.loaded)
            .map(|m| m.duration_ms)
            .unwrap_or(0)
    }

    fn handle(&mut self, command: PlayerCommand) -> bool {
        tracing::trace!(?command, "Player command");
        match command {
            PlayerCommand::Load { index } | PlayerCommand::Play { index }
                if index >= SHOWCASE_MEDIA.len() =>
            {
                tracing::warn!(index, "Player asked for unknown media");
                true
            }
            PlayerCommand::Load { index } => {
                self.loaded = index;
                self.playing = false;
                self.position_ms = 0;
                self.emit(PlayerEvent::Paused { index })
            }
            PlayerCommand::Play { index } => {
                if index != self.loaded {
                    self.loaded = index;
                    self.position_ms = 0;
                }
                if self.autoplay_blocked {
                    tracing::info!(index, "Playback blocked by autoplay policy");
                    self.playing = false;
                    return self.emit(PlayerEvent::Blocked { index });
                }
                if self.position_ms >= self.duration_ms() {
                    self.position_ms = 0;
                }
                self.playing = true;
                self.emit(PlayerEvent::Playing { index })
            }
            PlayerCommand::Pause => {
                self.playing = false;
                self.emit(PlayerEvent::Paused { index: self.loaded })
            }
            PlayerCommand::Shutdown => false,
        }
    }

    fn advance(&mut self) -> bool {
        let step = self.tick.as_millis().min(u32::MAX as u128) as u32;
        let duration = self.duration_ms();
        self.position_ms = self.position_ms.saturating_add(step).min(duration);

        let index = self.loaded;
        if !self.emit(PlayerEvent::Progress { index, position_ms: self.position_ms }) {
            return false;
        }
        if self.position_ms >= duration {
            self.playing = false;
            return self.emit(PlayerEvent::Ended { index });
        }
        true
    }

    fn emit(&self, event: PlayerEvent) -> bool {
        self.events.send(event).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn next_event(events: &mut PlayerEventChannel) -> Option<PlayerEvent> {
        tokio::time::timeout(Duration::from_secs(2), events.recv())
            .await
            .ok()
            .flatten()
    }

    fn config(autoplay_blocked: bool) -> PlayerConfig {
        PlayerConfig {
            autoplay_blocked,
            tick_ms: 20,
        }
    }

    #[tokio::test]
    async fn test_play_reports_playing_then_progress() {
        let (player, mut events) = ShowcasePlayer::spawn(&config(false));
        player.send(PlayerCommand::Play { index: 0 }).unwrap();

        assert_eq!(next_event(&mut events).await, Some(PlayerEvent::Playing { index: 0 }));
        match next_event(&mut events).await {
            Some(PlayerEvent::Progress { index: 0, position_ms }) => assert!(position_ms > 0),
            other => panic!("expected progress, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_blocked_autoplay_never_plays() {
        let (player, mut events) = ShowcasePlayer::spawn(&config(true));
        player.send(PlayerCommand::Play { index: 1 }).unwrap();
        assert_eq!(next_event(&mut events).await, Some(PlayerEvent::Blocked { index: 1 }));
    }

    #[tokio::test]
    async fn test_load_pauses_new_item() {
        let (player, mut events) = ShowcasePlayer::spawn(&config(false));
        player.send(PlayerCommand::Load { index: 1 }).unwrap();
        assert_eq!(next_event(&mut events).await, Some(PlayerEvent::Paused { index: 1 }));
    }

    #[tokio::test]
    async fn test_shutdown_closes_event_channel() {
        let (player, mut events) = ShowcasePlayer::spawn(&config(false));
        player.send(PlayerCommand::Shutdown).unwrap();
        assert_eq!(next_event(&mut events).await, None);
        assert!(matches!(
            player.send(PlayerCommand::Pause),
            Err(PlayerError::ChannelClosed)
        ));
    }
}
