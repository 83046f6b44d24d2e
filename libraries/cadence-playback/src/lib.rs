//! Cadence - Playback Management
//!
//! One authoritative queue plus playback cursor for the Cadence player.
//!
//! This crate provides:
//! - Queue editing (enqueue, play next, remove, drag-and-drop reorder)
//! - Transport (load, play/pause, next/previous, end-of-track policy)
//! - Shuffle (random next pick, queue order untouched)
//! - Repeat modes (Off, All, One)
//! - Volume (0.0-1.0, mute) and position bookkeeping
//! - Bounded playback history and change events for views
//!
//! # Architecture
//!
//! The crate holds no global state. A view or controller layer owns one
//! [`PlaybackManager`] per session and passes it where it is needed. Media
//! output is external: the caller mirrors `elapsed`/`duration` from its media
//! element and reports "ended" through [`PlaybackManager::on_track_ended`].
//!
//! # Example
//!
//! ```rust
//! use cadence_core::{Track, TrackId};
//! use cadence_playback::{PlaybackManager, RepeatMode};
//! use std::time::Duration;
//! use url::Url;
//!
//! let track = |id: &str| {
//!     Track::new(
//!         TrackId::new(id),
//!         id,
//!         "Artist",
//!         Url::parse(&format!("https://cdn.example.com/{id}.mp3")).unwrap(),
//!         Duration::from_secs(180),
//!     )
//! };
//!
//! let mut manager = PlaybackManager::default();
//! manager.load_queue(vec![track("a"), track("b"), track("c")], 2);
//! assert!(!manager.advance()); // repeat off: stays on "c"
//!
//! manager.set_repeat(RepeatMode::All);
//! manager.advance();
//! assert_eq!(manager.current_track().unwrap().id.as_str(), "a");
//! ```

mod error;
mod events;
mod history;
mod manager;
mod queue;
mod shuffle;
pub mod types;
mod volume;

// Public exports
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use history::History;
pub use manager::PlaybackManager;
pub use queue::{removal_index, reorder_index, Queue};
pub use shuffle::ShufflePicker;
pub use types::{EndOfTrack, PlaybackConfig, PlaybackState, PlayerSnapshot, RepeatMode};
pub use volume::Volume;
