//! Text commands understood by a session

use cadence_playback::RepeatMode;
use std::str::FromStr;
use thiserror::Error;

/// Command parse errors
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("{command}: expected {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("{command}: invalid argument {value:?}")]
    InvalidArgument { command: &'static str, value: String },
}

/// A single player command
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Replace the queue with the whole library, starting at an index
    Queue(usize),
    /// Load one library track without touching the queue
    Load(usize),
    /// Play a queue entry
    Play(usize),
    Next,
    Prev,
    Toggle,
    Shuffle,
    /// Cycle repeat, or set it when a mode is given
    Repeat(Option<RepeatMode>),
    Volume(f32),
    Mute,
    Seek(f64),
    Duration(f64),
    /// Append a library track to the queue
    Add(usize),
    /// Insert a library track after the current one
    NextUp(usize),
    Remove(usize),
    Move(usize, usize),
    Clear,
    /// Media surface reported end of track
    Ended,
    Visible,
    Status,
    Quit,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let args: Vec<&str> = words.collect();

        let command = match name {
            "queue" => Self::Queue(optional(&args, "queue")?.unwrap_or(0)),
            "load" => Self::Load(required(&args, "load", "<library index>")?),
            "play" => Self::Play(required(&args, "play", "<queue index>")?),
            "next" => Self::Next,
            "prev" => Self::Prev,
            "toggle" => Self::Toggle,
            "shuffle" => Self::Shuffle,
            "repeat" => Self::Repeat(
                args.first()
                    .map(|mode| {
                        mode.parse().map_err(|_| CommandError::InvalidArgument {
                            command: "repeat",
                            value: (*mode).to_string(),
                        })
                    })
                    .transpose()?,
            ),
            "volume" => Self::Volume(required(&args, "volume", "<0.0-1.0>")?),
            "mute" => Self::Mute,
            "seek" => Self::Seek(required(&args, "seek", "<seconds>")?),
            "duration" => Self::Duration(required(&args, "duration", "<seconds>")?),
            "add" => Self::Add(required(&args, "add", "<library index>")?),
            "next-up" => Self::NextUp(required(&args, "next-up", "<library index>")?),
            "remove" => Self::Remove(required(&args, "remove", "<queue index>")?),
            "move" => {
                let from = required(&args, "move", "<from> <to>")?;
                let to = required(args.get(1..).unwrap_or_default(), "move", "<from> <to>")?;
                Self::Move(from, to)
            }
            "clear" => Self::Clear,
            "ended" => Self::Ended,
            "visible" => Self::Visible,
            "status" => Self::Status,
            "quit" | "exit" => Self::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

fn required<T: FromStr>(
    args: &[&str],
    command: &'static str,
    expected: &'static str,
) -> Result<T, CommandError> {
    let value = args
        .first()
        .ok_or(CommandError::MissingArgument { command, expected })?;
    parse(value, command)
}

fn optional<T: FromStr>(args: &[&str], command: &'static str) -> Result<Option<T>, CommandError> {
    args.first().map(|value| parse(value, command)).transpose()
}

fn parse<T: FromStr>(value: &str, command: &'static str) -> Result<T, CommandError> {
    value.parse().map_err(|_| CommandError::InvalidArgument {
        command,
        value: value.to_string(),
    })
}
