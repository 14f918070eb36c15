//! Pure playback-session state: the current index, the repeat flag and the
//! wraparound arithmetic over a fixed, ordered track list.

use std::path::Path;

use crate::library::Track;

/// Mutable state of one playback session.
///
/// The session owns no audio resource; the player thread drives a sink from
/// the indices returned here. The index is always a valid position in the
/// list once a track has been selected on a non-empty list.
pub struct PlaybackSession {
    tracks: Vec<Track>,
    index: Option<usize>,
    repeat: bool,
}

impl PlaybackSession {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            index: None,
            repeat: false,
        }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn current_index(&self) -> Option<usize> {
        self.index
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.index.and_then(|i| self.tracks.get(i))
    }

    pub fn repeat(&self) -> bool {
        self.repeat
    }

    /// Flip the repeat flag and return the new value. Current playback is
    /// unaffected; the flag is consulted only on natural completion.
    pub fn toggle_repeat(&mut self) -> bool {
        self.repeat = !self.repeat;
        self.repeat
    }

    /// Resolve `path` to a session index. A path that is not in the list
    /// resolves to the first track; an empty list resolves to nothing.
    pub fn select(&mut self, path: &Path) -> Option<usize> {
        if self.tracks.is_empty() {
            self.index = None;
            return None;
        }

        let i = self
            .tracks
            .iter()
            .position(|t| t.path.as_path() == path)
            .unwrap_or(0);
        self.index = Some(i);
        self.index
    }

    /// Advance to the next track: `(index + 1) % len`. No-op on an empty
    /// list. A session without a current track advances from position 0.
    pub fn advance(&mut self) -> Option<usize> {
        let len = self.tracks.len();
        if len == 0 {
            return None;
        }

        let cur = self.index.unwrap_or(0);
        self.index = Some((cur + 1) % len);
        self.index
    }

    /// Step back to the previous track: `(index + len - 1) % len`. No-op on
    /// an empty list.
    pub fn retreat(&mut self) -> Option<usize> {
        let len = self.tracks.len();
        if len == 0 {
            return None;
        }

        let cur = self.index.unwrap_or(0);
        self.index = Some((cur + len - 1) % len);
        self.index
    }

    /// Index to play after the current track completes naturally: the same
    /// track (reloaded from position zero) when repeat is on, the next one
    /// with wraparound otherwise.
    pub fn next_after_completion(&mut self) -> Option<usize> {
        if self.repeat && self.index.is_some() {
            self.index
        } else {
            self.advance()
        }
    }

    /// Tear the session state down to Idle.
    pub fn clear(&mut self) {
        self.index = None;
    }
}
