//! Domain types

mod ids;
mod track;

pub use ids::TrackId;
pub use track::{tracks_from_json, Track};
