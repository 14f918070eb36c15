//! Player-facing small types, shared handles and the error taxonomy.

use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use thiserror::Error;

#[derive(Debug)]
pub enum PlayerCmd {
    /// Start a session on the track with the given path (selection hand-off
    /// from the track list). A path missing from the library resolves to the
    /// first track.
    Play(PathBuf),
    /// Toggle pause/resume. No-op when no track is loaded.
    TogglePause,
    /// Skip to the next track, wrapping at the end of the list.
    Next,
    /// Go back to the previous track, wrapping at the start of the list.
    Prev,
    /// Flip the repeat-current-track flag. Does not touch current playback.
    ToggleRepeat,
    /// Seek to an absolute position in the current track. Only key handlers
    /// send this; the position ticker never does.
    SeekTo(Duration),
    /// Tear the session down without quitting (back to Idle).
    Stop,
    /// Quit the player thread, releasing the playback resource.
    Quit,
}

/// Runtime playback information shared with the UI.
#[derive(Debug, Clone)]
pub struct PlaybackInfo {
    /// Currently playing track index in the library (if any).
    pub index: Option<usize>,
    /// Elapsed playback time for the current track.
    pub elapsed: Duration,
    /// Whether playback is currently active.
    pub playing: bool,
    /// Whether the current track repeats when it completes.
    pub repeat: bool,
}

impl Default for PlaybackInfo {
    fn default() -> Self {
        Self {
            index: None,
            elapsed: Duration::ZERO,
            playing: false,
            repeat: false,
        }
    }
}

pub type PlaybackHandle = Arc<Mutex<PlaybackInfo>>;

/// The only failure path in the player: a track that cannot be opened or
/// decoded, or a missing output device. Logged, never fatal, never retried.
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("no audio output device: {0}")]
    OutputDevice(#[from] rodio::StreamError),
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}
