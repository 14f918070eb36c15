//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the scanned library, the
//! list cursor and the handle used to observe playback.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
