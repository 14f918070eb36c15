use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use super::session::PlaybackSession;
use super::ticker::PositionTicker;
use super::types::{PlaybackHandle, PlaybackInfo};
use crate::library::Track;

fn track(path: &str) -> Track {
    let name = path.trim_start_matches('/').to_string();
    Track {
        path: PathBuf::from(path),
        title: name.clone(),
        artist: None,
        album: None,
        duration: None,
        display: name,
    }
}

fn session(paths: &[&str]) -> PlaybackSession {
    PlaybackSession::new(paths.iter().map(|p| track(p)).collect())
}

#[test]
fn select_resolves_path_to_index() {
    let mut s = session(&["/a.mp3", "/b.mp3", "/c.mp3"]);
    assert_eq!(s.select(Path::new("/b.mp3")), Some(1));
    assert_eq!(s.current_track().unwrap().path, Path::new("/b.mp3"));
}

#[test]
fn select_missing_path_resolves_to_first_track() {
    let mut s = session(&["/a.mp3", "/b.mp3"]);
    assert_eq!(s.select(Path::new("/zzz.mp3")), Some(0));
    assert_eq!(s.current_track().unwrap().path, Path::new("/a.mp3"));
}

#[test]
fn select_on_empty_list_resolves_to_nothing() {
    let mut s = session(&[]);
    assert_eq!(s.select(Path::new("/a.mp3")), None);
    assert_eq!(s.current_index(), None);
}

#[test]
fn advance_then_retreat_returns_to_original_index() {
    // Index arithmetic is a group under addition mod length.
    for len in 1..=5 {
        let paths: Vec<String> = (0..len).map(|i| format!("/{i}.mp3")).collect();
        let refs: Vec<&str> = paths.iter().map(String::as_str).collect();

        let mut s = session(&refs);
        s.select(Path::new(refs[len / 2]));
        let start = s.current_index();

        s.advance();
        s.retreat();
        assert_eq!(s.current_index(), start, "len {len}");

        s.retreat();
        s.advance();
        assert_eq!(s.current_index(), start, "len {len}");
    }
}

#[test]
fn single_track_list_always_resolves_to_index_zero() {
    let mut s = session(&["/only.mp3"]);
    s.select(Path::new("/only.mp3"));
    assert_eq!(s.advance(), Some(0));
    assert_eq!(s.retreat(), Some(0));
}

#[test]
fn advance_and_retreat_are_noops_on_empty_list() {
    let mut s = session(&[]);
    assert_eq!(s.advance(), None);
    assert_eq!(s.retreat(), None);
    assert_eq!(s.current_index(), None);
}

#[test]
fn advance_wraps_around_the_end() {
    let mut s = session(&["/a.mp3", "/b.mp3", "/c.mp3"]);
    assert_eq!(s.select(Path::new("/b.mp3")), Some(1));
    assert_eq!(s.advance(), Some(2));
    assert_eq!(s.current_track().unwrap().path, Path::new("/c.mp3"));
    assert_eq!(s.advance(), Some(0));
    assert_eq!(s.current_track().unwrap().path, Path::new("/a.mp3"));
}

#[test]
fn retreat_wraps_around_the_start() {
    let mut s = session(&["/a.mp3", "/b.mp3", "/c.mp3"]);
    s.select(Path::new("/a.mp3"));
    assert_eq!(s.retreat(), Some(2));
    assert_eq!(s.current_track().unwrap().path, Path::new("/c.mp3"));
}

#[test]
fn toggle_repeat_twice_restores_flag() {
    let mut s = session(&["/a.mp3"]);
    assert!(!s.repeat());
    assert!(s.toggle_repeat());
    assert!(!s.toggle_repeat());
}

#[test]
fn completion_with_repeat_replays_same_index() {
    let mut s = session(&["/a.mp3", "/b.mp3"]);
    s.select(Path::new("/b.mp3"));
    s.toggle_repeat();
    assert_eq!(s.next_after_completion(), Some(1));
    assert_eq!(s.current_index(), Some(1));
}

#[test]
fn completion_without_repeat_advances_with_wraparound() {
    let mut s = session(&["/a.mp3", "/b.mp3"]);
    s.select(Path::new("/b.mp3"));
    assert_eq!(s.next_after_completion(), Some(0));
}

#[test]
fn clear_returns_session_to_idle() {
    let mut s = session(&["/a.mp3"]);
    s.select(Path::new("/a.mp3"));
    s.clear();
    assert_eq!(s.current_index(), None);
    assert_eq!(s.current_track().map(|t| t.path.clone()), None);
}

fn playback(playing: bool) -> PlaybackHandle {
    Arc::new(Mutex::new(PlaybackInfo {
        index: Some(0),
        elapsed: Duration::ZERO,
        playing,
        repeat: false,
    }))
}

#[test]
fn ticker_advances_elapsed_while_playing() {
    let info = playback(true);
    let _ticker = PositionTicker::spawn(info.clone(), Duration::from_millis(5));
    std::thread::sleep(Duration::from_millis(80));
    assert!(info.lock().unwrap().elapsed >= Duration::from_millis(5));
}

#[test]
fn ticker_stops_when_playback_is_not_active() {
    let info = playback(false);
    let _ticker = PositionTicker::spawn(info.clone(), Duration::from_millis(5));
    std::thread::sleep(Duration::from_millis(50));
    assert_eq!(info.lock().unwrap().elapsed, Duration::ZERO);
}

#[test]
fn cancelled_ticker_never_updates_elapsed() {
    let info = playback(true);
    // Long interval: the cancellation lands well before the first tick.
    let ticker = PositionTicker::spawn(info.clone(), Duration::from_millis(200));
    ticker.cancel();
    assert!(ticker.is_cancelled());
    std::thread::sleep(Duration::from_millis(300));
    assert_eq!(info.lock().unwrap().elapsed, Duration::ZERO);
}
