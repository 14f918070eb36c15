//! Playback subsystem: the session state machine, the player thread that
//! owns the audio resource, and the position-sampling ticker.

mod controller;
mod session;
mod sink;
mod thread;
mod ticker;
mod types;

pub use controller::PlayerController;
pub use types::*;

#[cfg(test)]
mod tests;
