use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::*;
use crate::library::Track;
use crate::player::{PlaybackHandle, PlaybackInfo};

fn t(title: &str) -> Track {
    Track {
        path: std::path::PathBuf::from(format!("/music/{title}.mp3")),
        title: title.into(),
        artist: None,
        album: None,
        duration: None,
        display: title.into(),
    }
}

#[test]
fn cursor_wraps_in_both_directions() {
    let mut app = App::new(vec![t("Alpha"), t("Beta"), t("Gamma")]);
    assert_eq!(app.selected, 0);

    app.select_prev();
    assert_eq!(app.selected, 2);
    app.select_next();
    assert_eq!(app.selected, 0);
    app.select_next();
    app.select_next();
    app.select_next();
    assert_eq!(app.selected, 0);
}

#[test]
fn cursor_moves_are_noops_on_empty_library() {
    let mut app = App::new(Vec::new());
    app.select_next();
    app.select_prev();
    app.select_last();
    assert_eq!(app.selected, 0);
    assert!(!app.has_tracks());
    assert!(app.selected_track().is_none());
    assert!(app.selected_path().is_none());
}

#[test]
fn first_and_last_position_the_cursor() {
    let mut app = App::new(vec![t("A"), t("B"), t("C"), t("D")]);
    app.select_last();
    assert_eq!(app.selected, 3);
    app.select_first();
    assert_eq!(app.selected, 0);
}

#[test]
fn selected_path_is_the_handoff_reference() {
    let mut app = App::new(vec![t("Alpha"), t("Beta")]);
    app.select_next();
    assert_eq!(
        app.selected_path().unwrap(),
        std::path::Path::new("/music/Beta.mp3")
    );
}

#[test]
fn select_playing_follows_published_index() {
    let mut app = App::new(vec![t("A"), t("B"), t("C")]);
    let handle: PlaybackHandle = Arc::new(Mutex::new(PlaybackInfo {
        index: Some(2),
        elapsed: Duration::ZERO,
        playing: true,
        repeat: false,
    }));
    app.set_playback_handle(handle);

    app.select_playing();
    assert_eq!(app.selected, 2);
}

#[test]
fn select_playing_ignores_out_of_range_index() {
    let mut app = App::new(vec![t("A")]);
    let handle: PlaybackHandle = Arc::new(Mutex::new(PlaybackInfo {
        index: Some(7),
        elapsed: Duration::ZERO,
        playing: true,
        repeat: false,
    }));
    app.set_playback_handle(handle);

    app.select_playing();
    assert_eq!(app.selected, 0);
}
