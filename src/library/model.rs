use std::path::PathBuf;
use std::time::Duration;

/// A playable audio item. Identity is path equality; everything else is
/// display metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub path: PathBuf,
    pub title: String,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub duration: Option<Duration>,
    pub display: String,
}
