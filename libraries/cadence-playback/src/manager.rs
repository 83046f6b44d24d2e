//! Playback manager - core orchestration
//!
//! Owns the single authoritative queue together with the playback cursor
//! (loaded track + transport state), volume, shuffle/repeat modes and history.

use crate::{
    events::PlaybackEvent,
    history::History,
    queue::Queue,
    shuffle::ShufflePicker,
    types::{EndOfTrack, PlaybackConfig, PlaybackState, PlayerSnapshot, RepeatMode},
    volume::Volume,
};
use cadence_core::Track;
use std::time::Duration;
use tracing::debug;

/// Central playback management
///
/// Every operation is total: invalid indices and operations on an empty
/// queue leave the state unchanged and are logged at `debug` level.
///
/// Repeat-one is deliberately not handled by [`advance`](Self::advance);
/// the end-of-track decision lives in [`on_track_ended`](Self::on_track_ended).
#[derive(Debug)]
pub struct PlaybackManager {
    // Cursor
    state: PlaybackState,
    current_track: Option<Track>,
    elapsed: Duration,
    duration: Duration,

    // Queue and history
    queue: Queue,
    history: History,

    // Settings
    volume: Volume,
    shuffle: bool,
    repeat: RepeatMode,
    picker: ShufflePicker,
    queue_visible: bool,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackManager {
    /// Create new playback manager
    ///
    /// Out-of-range config values are clamped; call
    /// [`PlaybackConfig::validate`] first to reject them instead.
    pub fn new(config: PlaybackConfig) -> Self {
        let picker = config
            .shuffle_seed
            .map_or_else(ShufflePicker::from_entropy, ShufflePicker::seeded);

        Self {
            state: PlaybackState::Idle,
            current_track: None,
            elapsed: Duration::ZERO,
            duration: Duration::ZERO,
            queue: Queue::new(),
            history: History::new(config.history_size),
            volume: Volume::new(config.volume),
            shuffle: config.shuffle,
            repeat: config.repeat,
            picker,
            queue_visible: false,
            pending_events: Vec::new(),
        }
    }

    // ===== Loading =====

    /// Load a single track and start playing it
    ///
    /// The queue is left as is. If the track is in the queue, the queue's
    /// pointer moves to it.
    pub fn load_song(&mut self, track: Track) {
        if let Some(index) = self.queue.position_of(&track.id) {
            self.queue.jump_to(index);
            self.emit_queue_changed();
        }
        self.load(track);
    }

    /// Replace the queue and start playing at `start`
    ///
    /// An out-of-range `start` (including any index into an empty list)
    /// keeps the new queue but leaves nothing loaded.
    pub fn load_queue(&mut self, tracks: Vec<Track>, start: usize) {
        let in_range = start < tracks.len();
        self.queue.set(tracks, start);
        self.emit_queue_changed();

        if in_range {
            if let Some(track) = self.queue.current().cloned() {
                self.load(track);
            }
        } else {
            debug!(start, len = self.queue.len(), "start index out of range, unloading");
            self.unload();
        }
    }

    /// Start playback of the queue entry at `index`
    pub fn play_index(&mut self, index: usize) -> bool {
        if index >= self.queue.len() {
            debug!(index, len = self.queue.len(), "play_index out of range, ignoring");
            return false;
        }
        self.play_queue_entry(index);
        true
    }

    // ===== Transport =====

    /// Flip between playing and paused; no-op while idle
    pub fn toggle_play(&mut self) {
        match self.state {
            PlaybackState::Idle => debug!("toggle_play with nothing loaded, ignoring"),
            PlaybackState::Playing => self.set_state(PlaybackState::Paused),
            PlaybackState::Paused => self.set_state(PlaybackState::Playing),
        }
    }

    /// Resume playback; no-op while idle
    pub fn play(&mut self) {
        if self.state == PlaybackState::Paused {
            self.set_state(PlaybackState::Playing);
        }
    }

    /// Pause playback
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.set_state(PlaybackState::Paused);
        }
    }

    /// Move to the next track
    ///
    /// Shuffle picks a uniformly random queue index. Past the end, repeat-all
    /// wraps to the start; otherwise nothing changes. Returns whether a track
    /// was loaded.
    pub fn advance(&mut self) -> bool {
        let len = self.queue.len();
        if len == 0 {
            debug!("advance on empty queue, ignoring");
            return false;
        }

        let next = if self.shuffle {
            match self.picker.pick(len) {
                Some(index) => index,
                None => return false,
            }
        } else {
            self.cursor_index().map_or(0, |index| index + 1)
        };

        let next = if next < len {
            next
        } else if self.repeat == RepeatMode::All {
            0
        } else {
            debug!("end of queue reached");
            return false;
        };

        self.play_queue_entry(next);
        true
    }

    /// Move to the previous track, wrapping from the first to the last
    ///
    /// Wrapping happens in every repeat mode.
    pub fn rewind(&mut self) -> bool {
        let len = self.queue.len();
        if len == 0 {
            debug!("rewind on empty queue, ignoring");
            return false;
        }

        let previous = match self.cursor_index() {
            Some(index) if index > 0 => index - 1,
            _ => len - 1,
        };

        self.play_queue_entry(previous);
        true
    }

    /// End-of-track policy for the media surface's "ended" notification
    pub fn on_track_ended(&mut self) -> EndOfTrack {
        if self.state == PlaybackState::Idle {
            return EndOfTrack::Idle;
        }

        if self.repeat == RepeatMode::One {
            self.elapsed = Duration::ZERO;
            self.set_state(PlaybackState::Playing);
            return EndOfTrack::Replayed;
        }

        if self.advance() {
            EndOfTrack::Advanced
        } else {
            self.elapsed = self.duration;
            self.set_state(PlaybackState::Paused);
            EndOfTrack::Stopped
        }
    }

    // ===== Position =====

    /// Set elapsed time in seconds
    ///
    /// Negative or non-finite values become zero; values beyond a known
    /// duration are clamped to it.
    pub fn set_elapsed(&mut self, seconds: f64) {
        let elapsed = secs_to_duration(seconds);
        self.elapsed = if self.duration.is_zero() {
            elapsed
        } else {
            elapsed.min(self.duration)
        };
    }

    /// Set total duration in seconds as reported by the media surface
    pub fn set_duration(&mut self, seconds: f64) {
        self.duration = secs_to_duration(seconds);
        if !self.duration.is_zero() && self.elapsed > self.duration {
            self.elapsed = self.duration;
        }
    }

    // ===== Volume =====

    /// Set volume (clamped to 0.0-1.0)
    pub fn set_volume(&mut self, level: f32) {
        self.volume.set_level(level);
        self.emit_volume_changed();
    }

    /// Mute audio
    pub fn mute(&mut self) {
        self.volume.mute();
        self.emit_volume_changed();
    }

    /// Unmute audio
    pub fn unmute(&mut self) {
        self.volume.unmute();
        self.emit_volume_changed();
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.emit_volume_changed();
    }

    // ===== Shuffle & Repeat =====

    /// Flip shuffle; queue order is untouched
    pub fn toggle_shuffle(&mut self) {
        self.set_shuffle(!self.shuffle);
    }

    /// Set shuffle flag
    pub fn set_shuffle(&mut self, shuffle: bool) {
        self.shuffle = shuffle;
        self.emit_mode_changed();
    }

    /// Step repeat through off -> all -> one -> off
    pub fn cycle_repeat(&mut self) {
        self.set_repeat(self.repeat.cycle());
    }

    /// Set repeat mode
    pub fn set_repeat(&mut self, mode: RepeatMode) {
        self.repeat = mode;
        self.emit_mode_changed();
    }

    // ===== Queue Management =====

    /// Append track to end of queue
    pub fn enqueue(&mut self, track: Track) {
        self.queue.enqueue(track);
        self.emit_queue_changed();
    }

    /// Insert track right after the one playing
    pub fn insert_next(&mut self, track: Track) {
        if let Some(index) = self.cursor_index() {
            if self.queue.current_index() != Some(index) {
                self.queue.jump_to(index);
            }
        }
        self.queue.insert_next(track);
        self.emit_queue_changed();
    }

    /// Remove queue entry by index
    ///
    /// Removing the entry that is playing keeps it playing; the next
    /// `advance` starts over from the head of the queue.
    pub fn remove_at(&mut self, index: usize) -> Option<Track> {
        let removed = self.queue.remove_at(index)?;
        self.emit_queue_changed();
        Some(removed)
    }

    /// Move a queue entry (drag and drop)
    pub fn reorder(&mut self, from: usize, to: usize) -> bool {
        let moved = self.queue.reorder(from, to);
        if moved && from != to {
            self.emit_queue_changed();
        }
        moved
    }

    /// Empty the queue and unload the current track
    pub fn clear_queue(&mut self) {
        self.queue.clear();
        self.emit_queue_changed();
        self.unload();
    }

    /// Show or hide the queue panel
    pub fn toggle_visibility(&mut self) {
        self.queue_visible = !self.queue_visible;
        self.pending_events.push(PlaybackEvent::VisibilityChanged {
            visible: self.queue_visible,
        });
    }

    // ===== State Queries =====

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    /// Queue position of the loaded track, if it is in the queue
    pub fn current_index(&self) -> Option<usize> {
        self.cursor_index()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn volume(&self) -> f32 {
        self.volume.level()
    }

    /// Gain the media surface should apply
    pub fn gain(&self) -> f32 {
        self.volume.gain()
    }

    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn repeat(&self) -> RepeatMode {
        self.repeat
    }

    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_queue_visible(&self) -> bool {
        self.queue_visible
    }

    /// Whether `advance` would load something
    pub fn has_next(&self) -> bool {
        !self.queue.is_empty() && (self.shuffle || self.sequential_next().is_some())
    }

    /// Whether `rewind` would load something
    pub fn has_previous(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Track `advance` would load; unknown in advance while shuffling
    pub fn peek_next(&self) -> Option<&Track> {
        if self.shuffle {
            return None;
        }
        self.sequential_next().and_then(|index| self.queue.get(index))
    }

    /// Serializable view for rendering
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            state: self.state,
            current_track: self.current_track.clone(),
            current_index: self.cursor_index(),
            elapsed_secs: self.elapsed.as_secs_f64(),
            duration_secs: self.duration.as_secs_f64(),
            volume: self.volume.level(),
            muted: self.volume.is_muted(),
            shuffle: self.shuffle,
            repeat: self.repeat,
            queue: self.queue.tracks().to_vec(),
            queue_visible: self.queue_visible,
            history_len: self.history.len(),
        }
    }

    /// Take all events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ===== Internals =====

    /// Position of the loaded track in the queue
    ///
    /// The queue pointer wins when it holds the loaded track; otherwise the
    /// first entry with the same id.
    fn cursor_index(&self) -> Option<usize> {
        let track = self.current_track.as_ref()?;
        if let Some(index) = self.queue.current_index() {
            if self.queue.get(index).is_some_and(|t| t.id == track.id) {
                return Some(index);
            }
        }
        self.queue.position_of(&track.id)
    }

    /// Index a non-shuffled `advance` would land on
    fn sequential_next(&self) -> Option<usize> {
        let len = self.queue.len();
        if len == 0 {
            return None;
        }
        let next = self.cursor_index().map_or(0, |index| index + 1);
        if next < len {
            Some(next)
        } else if self.repeat == RepeatMode::All {
            Some(0)
        } else {
            None
        }
    }

    fn play_queue_entry(&mut self, index: usize) {
        if let Some(track) = self.queue.jump_to(index).cloned() {
            self.emit_queue_changed();
            self.load(track);
        }
    }

    fn load(&mut self, track: Track) {
        debug!(track_id = %track.id, title = %track.title, "loading track");
        let previous = self.current_track.replace(track);
        self.elapsed = Duration::ZERO;
        self.duration = self
            .current_track
            .as_ref()
            .map_or(Duration::ZERO, |t| t.duration);
        self.emit_track_changed(previous);
        self.set_state(PlaybackState::Playing);
    }

    fn unload(&mut self) {
        let previous = self.current_track.take();
        self.elapsed = Duration::ZERO;
        self.duration = Duration::ZERO;
        if previous.is_some() {
            debug!("unloading current track");
            self.emit_track_changed(previous);
        }
        self.set_state(PlaybackState::Idle);
    }

    fn set_state(&mut self, state: PlaybackState) {
        if self.state != state {
            self.state = state;
            self.pending_events.push(PlaybackEvent::StateChanged { state });
        }
    }

    fn emit_track_changed(&mut self, previous: Option<Track>) {
        let previous_track_id = previous.as_ref().map(|t| t.id.to_string());
        if let Some(track) = previous {
            self.history.push(track);
        }
        self.pending_events.push(PlaybackEvent::TrackChanged {
            track_id: self.current_track.as_ref().map(|t| t.id.to_string()),
            previous_track_id,
        });
    }

    fn emit_queue_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::QueueChanged {
            length: self.queue.len(),
            current_index: self.queue.current_index(),
        });
    }

    fn emit_volume_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }

    fn emit_mode_changed(&mut self) {
        self.pending_events.push(PlaybackEvent::ModeChanged {
            shuffle: self.shuffle,
            repeat: self.repeat,
        });
    }
}

impl Default for PlaybackManager {
    fn default() -> Self {
        Self::new(PlaybackConfig::default())
    }
}

/// Seconds from the media surface, with negative/NaN/inf mapped to zero
///
/// Finite values too large for a `Duration` saturate.
fn secs_to_duration(seconds: f64) -> Duration {
    if !seconds.is_finite() || seconds <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::TrackId;
    use url::Url;

    fn create_test_track(id: &str) -> Track {
        Track::new(
            TrackId::new(id),
            format!("Track {id}"),
            "Test Artist",
            Url::parse(&format!("https://cdn.example.com/{id}.mp3")).unwrap(),
            Duration::from_secs(180),
        )
    }

    fn current_id(manager: &PlaybackManager) -> Option<&str> {
        manager.current_track().map(|t| t.id.as_str())
    }

    #[test]
    fn create_playback_manager() {
        let manager = PlaybackManager::default();
        assert_eq!(manager.state(), PlaybackState::Idle);
        assert!(manager.current_track().is_none());
        assert!(manager.queue().is_empty());
        assert!((manager.volume() - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn toggle_play_is_guarded_when_idle() {
        let mut manager = PlaybackManager::default();
        manager.toggle_play();
        assert_eq!(manager.state(), PlaybackState::Idle);
        assert!(manager.drain_events().is_empty());
    }

    #[test]
    fn load_song_leaves_queue_alone() {
        let mut manager = PlaybackManager::default();
        manager.load_queue(vec![create_test_track("a"), create_test_track("b")], 0);
        manager.load_song(create_test_track("x"));

        assert_eq!(current_id(&manager), Some("x"));
        assert!(manager.is_playing());
        assert_eq!(manager.queue().len(), 2);
        assert_eq!(manager.current_index(), None);
    }

    #[test]
    fn load_song_in_queue_syncs_pointer() {
        let mut manager = PlaybackManager::default();
        manager.load_queue(
            vec![create_test_track("a"), create_test_track("b"), create_test_track("c")],
            0,
        );
        manager.load_song(create_test_track("b"));
        assert_eq!(manager.queue().current_index(), Some(1));

        manager.advance();
        assert_eq!(current_id(&manager), Some("c"));
    }

    #[test]
    fn load_sets_duration_from_track() {
        let mut manager = PlaybackManager::default();
        manager.load_song(create_test_track("a"));
        assert_eq!(manager.duration(), Duration::from_secs(180));
        assert_eq!(manager.elapsed(), Duration::ZERO);
    }

    #[test]
    fn time_setters_clamp() {
        let mut manager = PlaybackManager::default();
        manager.load_song(create_test_track("a"));

        manager.set_elapsed(-4.0);
        assert_eq!(manager.elapsed(), Duration::ZERO);

        manager.set_elapsed(f64::NAN);
        assert_eq!(manager.elapsed(), Duration::ZERO);

        manager.set_elapsed(500.0);
        assert_eq!(manager.elapsed(), Duration::from_secs(180));

        manager.set_duration(90.0);
        assert_eq!(manager.elapsed(), Duration::from_secs(90));

        manager.set_duration(-1.0);
        assert_eq!(manager.duration(), Duration::ZERO);
    }

    #[test]
    fn huge_seek_lands_on_end_of_track() {
        let mut manager = PlaybackManager::default();
        manager.load_queue(vec![create_test_track("a")], 0);

        manager.set_elapsed(1e20);
        assert_eq!(manager.elapsed(), Duration::from_secs(180));

        manager.set_duration(1e20);
        assert_eq!(manager.duration(), Duration::MAX);
        assert_eq!(manager.elapsed(), Duration::from_secs(180));
    }

    #[test]
    fn nan_config_volume_uses_default_level() {
        let config = PlaybackConfig {
            volume: f32::NAN,
            ..Default::default()
        };
        let manager = PlaybackManager::new(config);
        assert!((manager.volume() - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn history_records_previous_tracks() {
        let mut manager = PlaybackManager::default();
        manager.load_queue(vec![create_test_track("a"), create_test_track("b")], 0);
        manager.advance();

        assert_eq!(manager.history().len(), 1);
        assert_eq!(manager.history().last().unwrap().id.as_str(), "a");
    }

    #[test]
    fn events_are_drained() {
        let mut manager = PlaybackManager::default();
        manager.load_queue(vec![create_test_track("a")], 0);

        let events = manager.drain_events();
        assert!(events.contains(&PlaybackEvent::StateChanged {
            state: PlaybackState::Playing
        }));
        assert!(events.contains(&PlaybackEvent::TrackChanged {
            track_id: Some("a".to_string()),
            previous_track_id: None,
        }));
        assert!(manager.drain_events().is_empty());
    }

    #[test]
    fn visibility_toggle_has_no_playback_effect() {
        let mut manager = PlaybackManager::default();
        manager.load_queue(vec![create_test_track("a")], 0);
        manager.toggle_visibility();

        assert!(manager.is_queue_visible());
        assert!(manager.is_playing());
        assert_eq!(current_id(&manager), Some("a"));
    }

    #[test]
    fn seeded_config_is_reproducible() {
        let config = PlaybackConfig {
            shuffle: true,
            shuffle_seed: Some(5),
            ..Default::default()
        };
        let tracks: Vec<Track> = (0..10).map(|i| create_test_track(&i.to_string())).collect();

        let mut a = PlaybackManager::new(config.clone());
        let mut b = PlaybackManager::new(config);
        a.load_queue(tracks.clone(), 0);
        b.load_queue(tracks, 0);

        for _ in 0..10 {
            a.advance();
            b.advance();
            assert_eq!(current_id(&a), current_id(&b));
        }
    }
}
