//! Session and configuration tests

use cadence_cli::{config, Command, Flow, Session};
use cadence_core::{Track, TrackId};
use cadence_playback::{PlaybackConfig, PlaybackEvent, PlaybackState, RepeatMode};
use std::io::Write;
use std::time::Duration;
use url::Url;

fn library() -> Vec<Track> {
    ["A", "B", "C"]
        .iter()
        .map(|id| {
            Track::new(
                TrackId::new(*id),
                format!("Song {id}"),
                "Artist",
                Url::parse(&format!("https://cdn.example.com/{id}.mp3")).unwrap(),
                Duration::from_secs(120),
            )
        })
        .collect()
}

fn run(session: &mut Session, lines: &[&str]) {
    for line in lines {
        let command: Command = line.parse().unwrap();
        assert_eq!(session.execute(command), Flow::Continue, "{line}");
    }
}

fn current_id(session: &Session) -> Option<String> {
    session.manager().current_track().map(|t| t.id.to_string())
}

#[test]
fn session_starts_idle() {
    let session = Session::new(PlaybackConfig::default(), library());
    assert_eq!(session.manager().state(), PlaybackState::Idle);
    assert_eq!(session.library().len(), 3);
}

#[test]
fn scripted_listening_session() {
    let mut session = Session::new(PlaybackConfig::default(), library());
    run(&mut session, &["queue 0", "next", "next", "next"]);
    assert_eq!(current_id(&session).as_deref(), Some("C"));

    run(&mut session, &["repeat all", "next"]);
    assert_eq!(current_id(&session).as_deref(), Some("A"));

    run(&mut session, &["prev"]);
    assert_eq!(current_id(&session).as_deref(), Some("C"));
}

#[test]
fn library_commands_ignore_bad_indices() {
    let mut session = Session::new(PlaybackConfig::default(), library());
    run(&mut session, &["queue 1", "add 9", "load 9", "next-up 9"]);

    assert_eq!(session.manager().queue().len(), 3);
    assert_eq!(current_id(&session).as_deref(), Some("B"));
}

#[test]
fn ended_replays_with_repeat_one() {
    let mut session = Session::new(PlaybackConfig::default(), library());
    run(&mut session, &["queue 0", "repeat one", "seek 60", "ended"]);

    assert_eq!(current_id(&session).as_deref(), Some("A"));
    assert_eq!(session.manager().elapsed(), Duration::ZERO);
    assert_eq!(session.manager().repeat(), RepeatMode::One);
}

#[test]
fn clear_emits_unload_events() {
    let mut session = Session::new(PlaybackConfig::default(), library());
    run(&mut session, &["queue 0"]);
    session.drain_events();

    run(&mut session, &["clear"]);
    let events = session.drain_events();
    assert!(events.contains(&PlaybackEvent::StateChanged {
        state: PlaybackState::Idle
    }));
    assert!(events.contains(&PlaybackEvent::QueueChanged {
        length: 0,
        current_index: None
    }));
}

#[test]
fn quit_stops_loop() {
    let mut session = Session::new(PlaybackConfig::default(), library());
    assert_eq!(session.execute(Command::Quit), Flow::Quit);
}

#[test]
fn config_file_is_loaded() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "volume = 0.5\nrepeat = \"all\"\nhistory_size = 5").unwrap();

    let config = config::load(Some(file.path())).unwrap();
    assert_eq!(config.volume, 0.5);
    assert_eq!(config.repeat, RepeatMode::All);
    assert_eq!(config.history_size, 5);
    assert!(!config.shuffle);
}

#[test]
fn config_out_of_range_is_rejected() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "volume = 2.0").unwrap();

    assert!(config::load(Some(file.path())).is_err());
}

#[test]
fn explicit_missing_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(config::load(Some(&dir.path().join("absent.toml"))).is_err());
}
