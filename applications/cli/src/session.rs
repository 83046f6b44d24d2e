//! Player session
//!
//! Owns the catalog library and the playback manager for the lifetime of the
//! process and applies commands to them.

use crate::command::Command;
use cadence_core::Track;
use cadence_playback::{PlaybackConfig, PlaybackEvent, PlaybackManager, PlayerSnapshot};
use tracing::{debug, info, warn};

/// Whether the command loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One listening session
pub struct Session {
    library: Vec<Track>,
    manager: PlaybackManager,
}

impl Session {
    /// Create a session over a catalog track list; nothing plays yet
    pub fn new(config: PlaybackConfig, library: Vec<Track>) -> Self {
        info!(tracks = library.len(), "session started");
        Self {
            library,
            manager: PlaybackManager::new(config),
        }
    }

    pub fn library(&self) -> &[Track] {
        &self.library
    }

    pub fn manager(&self) -> &PlaybackManager {
        &self.manager
    }

    pub fn snapshot(&self) -> PlayerSnapshot {
        self.manager.snapshot()
    }

    /// Events produced since the last call
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        self.manager.drain_events()
    }

    /// Apply one command
    pub fn execute(&mut self, command: Command) -> Flow {
        debug!(?command, "executing");
        let manager = &mut self.manager;

        match command {
            Command::Queue(start) => manager.load_queue(self.library.clone(), start),
            Command::Load(index) => {
                if let Some(track) = library_track(&self.library, index) {
                    manager.load_song(track);
                }
            }
            Command::Play(index) => {
                manager.play_index(index);
            }
            Command::Next => {
                manager.advance();
            }
            Command::Prev => {
                manager.rewind();
            }
            Command::Toggle => manager.toggle_play(),
            Command::Shuffle => manager.toggle_shuffle(),
            Command::Repeat(Some(mode)) => manager.set_repeat(mode),
            Command::Repeat(None) => manager.cycle_repeat(),
            Command::Volume(level) => manager.set_volume(level),
            Command::Mute => manager.toggle_mute(),
            Command::Seek(seconds) => manager.set_elapsed(seconds),
            Command::Duration(seconds) => manager.set_duration(seconds),
            Command::Add(index) => {
                if let Some(track) = library_track(&self.library, index) {
                    manager.enqueue(track);
                }
            }
            Command::NextUp(index) => {
                if let Some(track) = library_track(&self.library, index) {
                    manager.insert_next(track);
                }
            }
            Command::Remove(index) => {
                manager.remove_at(index);
            }
            Command::Move(from, to) => {
                manager.reorder(from, to);
            }
            Command::Clear => manager.clear_queue(),
            Command::Ended => {
                let outcome = manager.on_track_ended();
                debug!(?outcome, "track ended");
            }
            Command::Visible => manager.toggle_visibility(),
            Command::Status => {}
            Command::Quit => return Flow::Quit,
        }

        Flow::Continue
    }
}

fn library_track(library: &[Track], index: usize) -> Option<Track> {
    let track = library.get(index).cloned();
    if track.is_none() {
        warn!(index, len = library.len(), "no such library track");
    }
    track
}
