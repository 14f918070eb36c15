use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, error, info};

use crate::library::Track;

use super::session::PlaybackSession;
use super::sink::create_sink_at;
use super::ticker::{PositionTicker, TICK_INTERVAL};
use super::types::{PlaybackHandle, PlayerCmd};

/// How long to wait for a command before running the completion check.
const COMMAND_POLL: Duration = Duration::from_millis(200);

pub(super) fn spawn_player_thread(
    tracks: Vec<Track>,
    rx: Receiver<PlayerCmd>,
    playback: PlaybackHandle,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = match OutputStreamBuilder::open_default_stream() {
            Ok(mut s) => {
                // rodio logs to stderr when OutputStream is dropped. That's useful in
                // debugging, but noisy for a TUI app.
                s.log_on_drop(false);
                s
            }
            Err(e) => {
                error!("no audio output device: {e}");
                // Keep draining commands so senders never fail; nothing will play.
                while let Ok(cmd) = rx.recv() {
                    if matches!(cmd, PlayerCmd::Quit) {
                        break;
                    }
                }
                return;
            }
        };

        let mut session = PlaybackSession::new(tracks);
        let mut sink: Option<Sink> = None;
        let mut paused = true;

        // Alive only while playback is active; dropping it cancels it. The
        // displayed position lives in `playback.elapsed`: the ticker advances
        // it, play/seek/stop reset it, pausing freezes it.
        let mut ticker: Option<PositionTicker> = None;

        fn do_play(
            i: usize,
            stream: &OutputStream,
            session: &PlaybackSession,
            sink: &mut Option<Sink>,
            paused: &mut bool,
            playback: &PlaybackHandle,
            ticker: &mut Option<PositionTicker>,
        ) {
            // The playback resource is exclusively owned here: stop and drop
            // any previous sink before building the next one.
            if let Some(s) = sink.take() {
                s.stop();
            }
            *ticker = None;

            let Some(track) = session.tracks().get(i) else {
                return;
            };

            match create_sink_at(stream, track, Duration::ZERO) {
                Ok(new_sink) => {
                    new_sink.play();
                    *sink = Some(new_sink);
                    *paused = false;

                    if let Ok(mut info) = playback.lock() {
                        info.index = Some(i);
                        info.elapsed = Duration::ZERO;
                        info.playing = true;
                    }
                    *ticker = Some(PositionTicker::spawn(playback.clone(), TICK_INTERVAL));
                    debug!(index = i, path = %track.path.display(), "playing track");
                }
                Err(e) => {
                    // Playback silently does not begin; the session keeps the
                    // index and no retry is attempted.
                    error!("cannot start playback: {e}");
                    *paused = true;
                    if let Ok(mut info) = playback.lock() {
                        info.index = Some(i);
                        info.elapsed = Duration::ZERO;
                        info.playing = false;
                    }
                }
            }
        }

        fn do_stop(
            session: &mut PlaybackSession,
            sink: &mut Option<Sink>,
            paused: &mut bool,
            playback: &PlaybackHandle,
            ticker: &mut Option<PositionTicker>,
        ) {
            if let Some(s) = sink.take() {
                s.stop();
            }
            *ticker = None;
            session.clear();
            *paused = true;
            if let Ok(mut info) = playback.lock() {
                info.index = None;
                info.elapsed = Duration::ZERO;
                info.playing = false;
            }
        }

        loop {
            match rx.recv_timeout(COMMAND_POLL) {
                Ok(cmd) => match cmd {
                    PlayerCmd::Play(path) => {
                        if let Some(i) = session.select(&path) {
                            do_play(
                                i,
                                &stream,
                                &session,
                                &mut sink,
                                &mut paused,
                                &playback,
                                &mut ticker,
                            );
                        }
                    }

                    PlayerCmd::TogglePause => {
                        // No track loaded: nothing to toggle.
                        if let Some(ref s) = sink {
                            if paused {
                                s.play();
                                if let Ok(mut info) = playback.lock() {
                                    info.playing = true;
                                }
                                ticker =
                                    Some(PositionTicker::spawn(playback.clone(), TICK_INTERVAL));
                            } else {
                                s.pause();
                                if let Ok(mut info) = playback.lock() {
                                    info.playing = false;
                                }
                                ticker = None;
                            }
                            paused = !paused;
                        }
                    }

                    PlayerCmd::Next => {
                        if let Some(i) = session.advance() {
                            do_play(
                                i,
                                &stream,
                                &session,
                                &mut sink,
                                &mut paused,
                                &playback,
                                &mut ticker,
                            );
                        }
                    }

                    PlayerCmd::Prev => {
                        if let Some(i) = session.retreat() {
                            do_play(
                                i,
                                &stream,
                                &session,
                                &mut sink,
                                &mut paused,
                                &playback,
                                &mut ticker,
                            );
                        }
                    }

                    PlayerCmd::ToggleRepeat => {
                        let repeat = session.toggle_repeat();
                        if let Ok(mut info) = playback.lock() {
                            info.repeat = repeat;
                        }
                    }

                    PlayerCmd::SeekTo(target) => {
                        // Rebuild the current sink and skip into the file. The
                        // ticker never issues seeks, so this path is always
                        // user-originated and cannot oscillate with the
                        // displayed position.
                        let Some(track) = session.current_track() else {
                            continue;
                        };
                        if sink.is_none() {
                            continue;
                        }
                        if let Some(s) = sink.take() {
                            s.stop();
                        }

                        match create_sink_at(&stream, track, target) {
                            Ok(new_sink) => {
                                if !paused {
                                    new_sink.play();
                                }
                                sink = Some(new_sink);
                                if let Ok(mut info) = playback.lock() {
                                    info.elapsed = target;
                                }
                            }
                            Err(e) => {
                                error!("seek failed: {e}");
                                paused = true;
                                ticker = None;
                                if let Ok(mut info) = playback.lock() {
                                    info.playing = false;
                                }
                            }
                        }
                    }

                    PlayerCmd::Stop => {
                        do_stop(&mut session, &mut sink, &mut paused, &playback, &mut ticker);
                    }

                    PlayerCmd::Quit => {
                        // Release the playback resource exactly once and
                        // cancel the ticker before exiting.
                        if let Some(s) = sink.take() {
                            s.stop();
                        }
                        ticker = None;
                        if let Ok(mut info) = playback.lock() {
                            info.playing = false;
                        }
                        info!("player thread shutting down");
                        break;
                    }
                },

                Err(RecvTimeoutError::Timeout) => {
                    // Natural-completion check: an empty, unpaused sink means
                    // the current track finished decoding and draining.
                    let finished = sink
                        .as_ref()
                        .map(|s| !paused && s.empty())
                        .unwrap_or(false);
                    if finished {
                        if let Some(i) = session.next_after_completion() {
                            do_play(
                                i,
                                &stream,
                                &session,
                                &mut sink,
                                &mut paused,
                                &playback,
                                &mut ticker,
                            );
                        } else {
                            do_stop(&mut session, &mut sink, &mut paused, &playback, &mut ticker);
                        }
                    }
                }

                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}
