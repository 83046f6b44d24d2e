//! Cadence CLI
//!
//! Drives one [`cadence_playback::PlaybackManager`] from text commands. The
//! [`Session`] is the single owner of playback state for the process.

pub mod command;
pub mod config;
pub mod session;

pub use command::{Command, CommandError};
pub use session::{Flow, Session};
