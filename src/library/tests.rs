use std::path::Path;

use super::display::display_from_fields;
use crate::config::TrackDisplayField;

#[test]
fn display_from_fields_can_format_artist_title() {
    let p = Path::new("/tmp/Song.mp3");
    assert_eq!(
        display_from_fields(
            p,
            "Song",
            Some("Artist"),
            None,
            &[TrackDisplayField::Artist, TrackDisplayField::Title],
            " - ",
        ),
        "Artist - Song"
    );
    assert_eq!(
        display_from_fields(
            p,
            "Song",
            Some("  Artist  "),
            None,
            &[TrackDisplayField::Artist, TrackDisplayField::Title],
            " - ",
        ),
        "Artist - Song"
    );
    assert_eq!(
        display_from_fields(
            p,
            "Song",
            None,
            None,
            &[TrackDisplayField::Artist, TrackDisplayField::Title],
            " - ",
        ),
        "Song"
    );
}

#[test]
fn display_from_fields_falls_back_to_title_when_no_parts() {
    let p = Path::new("/tmp/whatever.mp3");
    assert_eq!(
        display_from_fields(p, "Fallback", None, None, &[TrackDisplayField::Album], "/"),
        "Fallback"
    );
}

#[test]
fn display_from_fields_filename_uses_file_stem() {
    let p = Path::new("/music/01 - Intro.flac");
    assert_eq!(
        display_from_fields(p, "Intro", None, None, &[TrackDisplayField::Filename], " "),
        "01 - Intro"
    );
}
