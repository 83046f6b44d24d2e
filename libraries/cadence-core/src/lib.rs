//! Cadence Core
//!
//! Domain types and error handling shared by the playback library and the
//! applications that drive it.
//!
//! # Example
//!
//! ```rust
//! use cadence_core::{Track, TrackId};
//! use std::time::Duration;
//! use url::Url;
//!
//! let track = Track::new(
//!     TrackId::new("song-1"),
//!     "Intro",
//!     "Some Artist",
//!     Url::parse("https://cdn.example.com/audio/song-1.mp3").unwrap(),
//!     Duration::from_secs(180),
//! );
//!
//! assert_eq!(track.id.as_str(), "song-1");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod types;

pub use error::{CoreError, Result};
pub use types::{tracks_from_json, Track, TrackId};
