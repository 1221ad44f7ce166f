//! Video reference extraction for the inbound boundary.
//!
//! Callers reject an unresolvable reference before asking for an analysis.

use lazy_static::lazy_static;
use regex::Regex;

const VIDEO_ID_LEN: usize = 11;

lazy_static! {
    /// Short-link, `v/`, channel-relative, embed and watch-query shapes.
    static ref VIDEO_URL: Regex =
        Regex::new(r"^.*(youtu\.be/|v/|u/\w/|embed/|watch\?v=|&v=)([^#&?]*).*").unwrap();
}

/// Extract the 11-character video id from a video-sharing URL.
pub fn extract_video_id(url: &str) -> Option<&str> {
    let id = VIDEO_URL.captures(url)?.get(2)?.as_str();
    (id.chars().count() == VIDEO_ID_LEN).then_some(id)
}
