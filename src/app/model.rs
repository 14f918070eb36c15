//! Application model: the track-list view state.
//!
//! `App` holds the ordered library, the cursor over it and a handle to
//! observe playback. Playback itself lives in the player thread; the only
//! thing the view hands over is the selected track's path.

use std::path::Path;

use crate::library::Track;
use crate::player::PlaybackHandle;

/// The main application model.
pub struct App {
    pub tracks: Vec<Track>,
    pub selected: usize,
    pub playback_handle: Option<PlaybackHandle>,
    pub current_dir: Option<String>,
    pub metadata_window: bool,
}

impl App {
    /// Create a new `App` over the ordered list of `tracks`.
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            selected: 0,
            playback_handle: None,
            current_dir: None,
            metadata_window: false,
        }
    }

    /// Attach a `PlaybackHandle` used to observe playback progress.
    pub fn set_playback_handle(&mut self, h: PlaybackHandle) {
        self.playback_handle = Some(h);
    }

    /// Record the scanned directory in the app state.
    pub fn set_current_dir(&mut self, dir: String) {
        self.current_dir = Some(dir);
    }

    /// Return true if the library contains any tracks.
    pub fn has_tracks(&self) -> bool {
        !self.tracks.is_empty()
    }

    /// The track under the cursor, if any.
    pub fn selected_track(&self) -> Option<&Track> {
        self.tracks.get(self.selected)
    }

    /// The path of the track under the cursor; this is what gets handed to
    /// the player on Enter.
    pub fn selected_path(&self) -> Option<&Path> {
        self.selected_track().map(|t| t.path.as_path())
    }

    /// Index of the currently playing track, as published by the player.
    pub fn playing_index(&self) -> Option<usize> {
        self.playback_handle
            .as_ref()
            .and_then(|h| h.lock().ok())
            .and_then(|info| info.index)
    }

    /// Move the cursor to the next track, wrapping at the end of the list.
    pub fn select_next(&mut self) {
        let len = self.tracks.len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1) % len;
    }

    /// Move the cursor to the previous track, wrapping at the start.
    pub fn select_prev(&mut self) {
        let len = self.tracks.len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected + len - 1) % len;
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.tracks.len().saturating_sub(1);
    }

    /// Move the cursor to the currently playing track, if there is one.
    pub fn select_playing(&mut self) {
        if let Some(idx) = self.playing_index() {
            if idx < self.tracks.len() {
                self.selected = idx;
            }
        }
    }

    pub fn toggle_metadata_window(&mut self) {
        self.metadata_window = !self.metadata_window;
    }
}
