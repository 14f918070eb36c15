//! Music library: the track model, directory scanning and display
//! formatting. The scan is the only way tracks enter the system; the list it
//! returns stays fixed for the lifetime of a playback session.

mod display;
mod model;
mod scan;

pub use model::Track;
pub use scan::scan;

#[cfg(test)]
mod tests;
