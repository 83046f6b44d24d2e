//! Ordered play queue with a current-position pointer
//!
//! The pointer marks the entry that is playing or about to resume:
//! ```text
//!   0: Track A
//!   1: Track B   <- current
//!   2: Track C
//! ```
//! It is `None` exactly when the queue is empty and always in bounds otherwise.

use cadence_core::{Track, TrackId};
use tracing::debug;

/// Play queue
#[derive(Debug, Clone, Default)]
pub struct Queue {
    tracks: Vec<Track>,
    current: Option<usize>,
}

impl Queue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue wholesale
    ///
    /// `start` is clamped into range; an empty list leaves no current entry.
    pub fn set(&mut self, tracks: Vec<Track>, start: usize) {
        self.current = if tracks.is_empty() {
            None
        } else {
            Some(start.min(tracks.len() - 1))
        };
        self.tracks = tracks;
    }

    /// Append track to end
    pub fn enqueue(&mut self, track: Track) {
        self.tracks.push(track);
        if self.current.is_none() {
            self.current = Some(0);
        }
    }

    /// Insert track directly after the current entry ("play next")
    pub fn insert_next(&mut self, track: Track) {
        match self.current {
            Some(current) => self.tracks.insert(current + 1, track),
            None => self.enqueue(track),
        }
    }

    /// Remove the entry at `index`
    ///
    /// Out-of-range indices leave the queue untouched and return `None`.
    pub fn remove_at(&mut self, index: usize) -> Option<Track> {
        if index >= self.tracks.len() {
            debug!(index, len = self.tracks.len(), "remove_at out of range, ignoring");
            return None;
        }

        let track = self.tracks.remove(index);
        self.current = self
            .current
            .and_then(|current| removal_index(current, index, self.tracks.len()));
        Some(track)
    }

    /// Empty the queue
    pub fn clear(&mut self) {
        self.tracks.clear();
        self.current = None;
    }

    /// Move the entry at `from` so that it ends up at `to`
    ///
    /// The current pointer follows the same logical entry. Returns `false`
    /// (and changes nothing) when either index is out of range.
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let len = self.tracks.len();
        if from >= len || to >= len {
            debug!(from, to, len, "reorder out of range, ignoring");
            return false;
        }
        if from == to {
            return true;
        }

        let track = self.tracks.remove(from);
        self.tracks.insert(to, track);
        self.current = self.current.map(|current| reorder_index(current, from, to));
        true
    }

    /// Point the cursor at `index`
    pub fn jump_to(&mut self, index: usize) -> Option<&Track> {
        if index >= self.tracks.len() {
            debug!(index, len = self.tracks.len(), "jump_to out of range, ignoring");
            return None;
        }
        self.current = Some(index);
        self.tracks.get(index)
    }

    /// First position holding a track with this id
    pub fn position_of(&self, id: &TrackId) -> Option<usize> {
        self.tracks.iter().position(|t| &t.id == id)
    }

    /// Get track at index
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Current position
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Track at the current position
    pub fn current(&self) -> Option<&Track> {
        self.current.and_then(|i| self.tracks.get(i))
    }

    /// All tracks in playback order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Iterate tracks in playback order
    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// Number of tracks in queue
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

/// Where the current pointer lands after the entry at `removed` is taken out
///
/// `new_len` is the length after removal.
pub fn removal_index(current: usize, removed: usize, new_len: usize) -> Option<usize> {
    if new_len == 0 {
        return None;
    }
    let adjusted = if removed < current {
        current - 1
    } else {
        current
    };
    Some(adjusted.min(new_len - 1))
}

/// Where the current pointer lands after moving the entry at `from` to `to`
pub fn reorder_index(current: usize, from: usize, to: usize) -> usize {
    if from == current {
        to
    } else if from < current && to >= current {
        current - 1
    } else if from > current && to <= current {
        current + 1
    } else {
        current
    }
}
