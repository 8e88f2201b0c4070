//! Media showcase: selected video and the playing flag mirrored from the player

use crate::player::{PlayerCommand, PlayerEvent};

/// A video presented in the showcase section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MediaItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub duration_ms: u32,
}

pub const SHOWCASE_MEDIA: [MediaItem; 2] = [
    MediaItem {
        id: "mg6Gf7v455c",
        title: "L'Art de l'Horlogerie Suisse",
        description: "Découvrez les secrets de fabrication des montres de luxe",
        duration_ms: 192_000,
    },
    MediaItem {
        id: "aHNEZg35ok8",
        title: "Excellence Optique",
        description: "L'artisanat derrière nos lunettes de prestige",
        duration_ms: 165_000,
    },
];

/// Figures shown beside the player
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShowcaseStat {
    pub number: &'static str,
    pub label: &'static str,
}

pub const SHOWCASE_STATS: [ShowcaseStat; 4] = [
    ShowcaseStat { number: "150+", label: "Modèles Exclusifs" },
    ShowcaseStat { number: "25+", label: "Marques de Prestige" },
    ShowcaseStat { number: "5000+", label: "Clients Satisfaits" },
    ShowcaseStat { number: "15", label: "Années d'Excellence" },
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShowcaseState {
    pub selected: usize,
    pub playing: bool,
    pub position_ms: u32,
}

impl ShowcaseState {
    pub fn current(&self) -> &'static MediaItem {
        &SHOWCASE_MEDIA[self.selected]
    }

    /// Select a media item. Out-of-range indices are ignored.
    ///
    /// A valid selection always drops the playing flag right away; the player
    /// is told to load the new item separately.
    pub fn select(&mut self, index: i64) -> bool {
        let Some(index) = usize::try_from(index)
            .ok()
            .filter(|i| *i < SHOWCASE_MEDIA.len())
        else {
            tracing::debug!(index, "Ignoring out-of-range media selection");
            return false;
        };

        tracing::debug!(from = self.selected, to = index, "Switching showcase media");
        self.selected = index;
        self.playing = false;
        self.position_ms = 0;
        true
    }

    pub fn select_next(&mut self) -> bool {
        self.select(((self.selected + 1) % SHOWCASE_MEDIA.len()) as i64)
    }

    pub fn select_prev(&mut self) -> bool {
        let len = SHOWCASE_MEDIA.len();
        self.select(((self.selected + len - 1) % len) as i64)
    }

    /// The command a play/pause toggle should send. Does not touch `playing`.
    pub fn playback_request(&self) -> PlayerCommand {
        if self.playing {
            PlayerCommand::Pause
        } else {
            PlayerCommand::Play { index: self.selected }
        }
    }

    /// Mirror a player event. Events for anything but the selected item are stale.
    pub fn apply_player_event(&mut self, event: PlayerEvent) -> bool {
        if event.index() != self.selected {
            tracing::trace!(?event, selected = self.selected, "Dropping stale player event");
            return false;
        }

        match event {
            PlayerEvent::Playing { .. } => self.playing = true,
            PlayerEvent::Paused { .. } | PlayerEvent::Blocked { .. } => self.playing = false,
            PlayerEvent::Progress { position_ms, .. } => self.position_ms = position_ms,
            PlayerEvent::Ended { .. } => {
                self.playing = false;
                self.position_ms = self.current().duration_ms;
            }
        }
        true
    }

    pub fn progress_ratio(&self) -> f64 {
        let duration = self.current().duration_ms;
        if duration == 0 {
            0.0
        } else {
            (self.position_ms as f64 / duration as f64).clamp(0.0, 1.0)
        }
    }
}
