/// Track domain type
use crate::error::{CoreError, Result};
use crate::types::TrackId;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

/// Playable track
///
/// Immutable once constructed. Field names on the wire follow the catalog API
/// (`audioUrl`, `coverImage`, `duration` in seconds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Track title
    pub title: String,

    /// Artist display name
    pub artist: String,

    /// Playable media locator
    pub audio_url: Url,

    /// Cover art locator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<Url>,

    /// Track duration
    #[serde(with = "duration_secs")]
    pub duration: Duration,
}

impl Track {
    /// Create a new track without cover art
    pub fn new(
        id: TrackId,
        title: impl Into<String>,
        artist: impl Into<String>,
        audio_url: Url,
        duration: Duration,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            audio_url,
            cover_image: None,
            duration,
        }
    }

    /// Attach cover art
    #[must_use]
    pub fn with_cover(mut self, cover_image: Url) -> Self {
        self.cover_image = Some(cover_image);
        self
    }

    /// Check the fields the catalog is not guaranteed to fill in
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(CoreError::invalid_input("track id is empty"));
        }
        if self.title.trim().is_empty() {
            return Err(CoreError::invalid_input(format!(
                "track {} has an empty title",
                self.id
            )));
        }
        Ok(())
    }
}

/// Parse a catalog track list (JSON array) and validate every entry
pub fn tracks_from_json(json: &str) -> Result<Vec<Track>> {
    let tracks: Vec<Track> = serde_json::from_str(json)?;
    for track in &tracks {
        track.validate()?;
    }
    Ok(tracks)
}

/// Durations travel as (possibly fractional) seconds
mod duration_secs {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(duration.as_secs_f64())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs)
            .map_err(|_| de::Error::custom(format!("invalid duration: {secs}")))
    }
}
